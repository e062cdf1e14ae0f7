// SPDX-License-Identifier: MPL-2.0
//! Directory scanner module for finding and sorting image files.
//!
//! This module lists a folder (optionally including its subfolders), keeps the
//! files whose extension is a supported image format and sorts them by file
//! name, ignoring case.

use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Extensions recognized as images, compared case-insensitively.
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Checks if a path has a supported image extension. The file content is
/// never inspected.
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
        .unwrap_or(false)
}

/// Scans `directory` for supported images and returns them sorted by file
/// name (case-insensitive, ascending).
///
/// With `include_subfolders`, nested folders are walked as well. Symlinked
/// folders are not followed.
///
/// # Errors
///
/// Returns an error if `directory` itself cannot be read. Unreadable
/// subfolders are skipped.
pub fn scan_folder(directory: &Path, include_subfolders: bool) -> Result<Vec<PathBuf>> {
    let mut image_files = Vec::new();
    let mut pending = vec![directory.to_path_buf()];
    let mut is_root = true;

    while let Some(current) = pending.pop() {
        let entries = match fs::read_dir(&current) {
            Ok(entries) => entries,
            Err(err) if is_root => return Err(err.into()),
            Err(err) => {
                log::debug!("skipping unreadable folder {}: {err}", current.display());
                continue;
            }
        };
        is_root = false;

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    log::debug!("skipping entry in {}: {err}", current.display());
                    continue;
                }
            };
            let path = entry.path();

            if include_subfolders && entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
                pending.push(path);
            } else if path.is_file() && is_supported_image(&path) {
                image_files.push(path);
            }
        }
    }

    sort_by_file_name(&mut image_files);
    Ok(image_files)
}

/// Sorts paths by file name ignoring case. Paths are the tie-breaker so
/// equal names from different subfolders keep a stable order.
fn sort_by_file_name(image_files: &mut [PathBuf]) {
    image_files.sort_by_cached_key(|path| {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        (name, path.clone())
    });
}
