// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides the text catalog using the Fluent localization system.
//! Both supported languages (Japanese and English) are embedded in the binary.
//!
//! # Features
//!
//! - Startup language from config, otherwise Japanese
//! - Runtime language switching
//! - English fallback for unknown language codes
//! - Missing keys are echoed back verbatim

pub mod fluent;
