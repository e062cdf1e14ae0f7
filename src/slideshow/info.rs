// SPDX-License-Identifier: MPL-2.0
//! Snapshot of the current image for the information dialog.

use std::fs;
use std::path::Path;

/// Facts about the current image, gathered on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInfo {
    pub file_name: String,
    /// File size on disk; `None` when the file can no longer be read.
    pub size_bytes: Option<u64>,
    /// Pixel dimensions of the decoded image, when one is loaded.
    pub dimensions: Option<(u32, u32)>,
    /// 1-based position in the sequence.
    pub position: usize,
    pub total: usize,
}

impl ImageInfo {
    pub(crate) fn collect(
        path: &Path,
        dimensions: Option<(u32, u32)>,
        index: usize,
        total: usize,
    ) -> Self {
        let size_bytes = match fs::metadata(path) {
            Ok(metadata) => Some(metadata.len()),
            Err(err) => {
                log::warn!("cannot stat {}: {err}", path.display());
                None
            }
        };

        Self {
            file_name: path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
            size_bytes,
            dimensions: dimensions.filter(|(w, h)| *w > 0 && *h > 0),
            position: index + 1,
            total,
        }
    }

    /// Size line value, e.g. `1.50 MB (1,572,864 bytes)`.
    #[must_use]
    pub fn size_label(&self) -> Option<String> {
        self.size_bytes.map(|bytes| {
            format!(
                "{:.2} MB ({} bytes)",
                bytes as f64 / (1024.0 * 1024.0),
                group_thousands(bytes)
            )
        })
    }

    /// Dimensions line value, e.g. `1920 × 1080 px`.
    #[must_use]
    pub fn dimensions_label(&self) -> Option<String> {
        self.dimensions
            .map(|(width, height)| format!("{width} × {height} px"))
    }

    #[must_use]
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.position, self.total)
    }
}

/// Formats an integer with `,` between groups of three digits.
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
