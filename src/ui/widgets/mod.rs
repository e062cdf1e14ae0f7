// SPDX-License-Identifier: MPL-2.0
pub mod wheel_zoom;

pub use wheel_zoom::{wheel_zoom, WheelZoom};
