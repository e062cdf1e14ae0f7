// SPDX-License-Identifier: MPL-2.0
//! Slideshow state machine.
//!
//! [`Slideshow`] owns the image sequence, the current position, the play
//! flag, the timer interval, the decoded image and the zoom state. It has no
//! knowledge of windows or widgets: the application layer calls its methods
//! and turns the returned outcomes into dialogs, log lines and timer changes.
//!
//! # Examples
//!
//! ```no_run
//! use beginview::slideshow::{FolderOutcome, Slideshow};
//! use std::path::Path;
//!
//! let mut slideshow = Slideshow::default();
//! match slideshow.open_folder(Path::new("/photos")) {
//!     FolderOutcome::Opened { count, .. } => println!("{count} images"),
//!     FolderOutcome::Empty => println!("nothing to show"),
//!     FolderOutcome::ScanFailed(err) => eprintln!("{err}"),
//! }
//! ```

pub mod info;
pub mod interval;

pub use info::ImageInfo;
pub use interval::{Interval, InvalidInterval};

use crate::config::SlideshowConfig;
use crate::directory_scanner;
use crate::error::Error;
use crate::media::{load_image, ImageData};
use crate::ui::state::ZoomState;
use std::path::{Path, PathBuf};

/// A file that could not be shown.
#[derive(Debug, Clone)]
pub struct LoadFailure {
    pub path: PathBuf,
    pub error: Error,
}

/// Result of asking the slideshow to display a position.
#[derive(Debug, Clone)]
pub enum DisplayOutcome {
    /// An image is now current. `skipped` lists the files that failed to
    /// decode before it, in the order they were tried.
    Shown {
        index: usize,
        skipped: Vec<LoadFailure>,
    },
    /// Every file in the sequence failed to decode. Playback is stopped and
    /// no image is held.
    NothingViewable { failures: Vec<LoadFailure> },
    /// The sequence is empty or the index is out of range. Nothing changed.
    Ignored,
}

/// Result of opening a folder.
#[derive(Debug, Clone)]
pub enum FolderOutcome {
    /// The sequence was replaced and playback started.
    Opened {
        count: usize,
        display: DisplayOutcome,
    },
    /// No supported image was found. The previous state is untouched.
    Empty,
    /// The folder could not be listed. The previous state is untouched.
    ScanFailed(Error),
}

/// Slideshow controller state.
#[derive(Debug, Clone, Default)]
pub struct Slideshow {
    sequence: Vec<PathBuf>,
    index: Option<usize>,
    playing: bool,
    interval: Interval,
    include_subfolders: bool,
    image: Option<ImageData>,
    zoom: ZoomState,
}

impl Slideshow {
    /// Creates an idle slideshow using the configured startup values.
    #[must_use]
    pub fn new(config: &SlideshowConfig) -> Self {
        Self {
            interval: Interval::from_millis(config.interval_ms()),
            include_subfolders: config.include_subfolders(),
            ..Self::default()
        }
    }

    // ----------------------------------------------------------------------
    // Accessors
    // ----------------------------------------------------------------------

    #[must_use]
    pub fn sequence(&self) -> &[PathBuf] {
        &self.sequence
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Current position; `None` exactly when the sequence is empty.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.index
    }

    #[must_use]
    pub fn current_path(&self) -> Option<&Path> {
        self.index
            .and_then(|index| self.sequence.get(index))
            .map(PathBuf::as_path)
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    #[must_use]
    pub fn interval(&self) -> Interval {
        self.interval
    }

    #[must_use]
    pub fn include_subfolders(&self) -> bool {
        self.include_subfolders
    }

    /// The decoded current image at full resolution.
    #[must_use]
    pub fn image(&self) -> Option<&ImageData> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn zoom(&self) -> &ZoomState {
        &self.zoom
    }

    /// Whether the slide timer should be running.
    #[must_use]
    pub fn timer_active(&self) -> bool {
        self.playing && !self.sequence.is_empty()
    }

    // ----------------------------------------------------------------------
    // Sequence
    // ----------------------------------------------------------------------

    /// Scans `folder` and, when it holds supported images, replaces the
    /// sequence, starts playback and displays the first image.
    pub fn open_folder(&mut self, folder: &Path) -> FolderOutcome {
        let files = match directory_scanner::scan_folder(folder, self.include_subfolders) {
            Ok(files) => files,
            Err(err) => return FolderOutcome::ScanFailed(err),
        };

        log::info!(
            "found {} image(s) in {} (subfolders: {})",
            files.len(),
            folder.display(),
            self.include_subfolders
        );

        self.load_sequence(files)
    }

    /// Installs an already scanned sequence. Empty input leaves the current
    /// state untouched.
    pub fn load_sequence(&mut self, files: Vec<PathBuf>) -> FolderOutcome {
        if files.is_empty() {
            return FolderOutcome::Empty;
        }

        let count = files.len();
        self.sequence = files;
        self.index = Some(0);
        self.image = None;
        self.playing = true;

        let display = self.display(0);
        FolderOutcome::Opened { count, display }
    }

    /// Decodes and shows the image at `index`.
    ///
    /// A file that fails to decode is skipped in favor of the next one,
    /// wrapping at the end. At most one full pass is made over the sequence.
    pub fn display(&mut self, index: usize) -> DisplayOutcome {
        let len = self.sequence.len();
        if index >= len {
            return DisplayOutcome::Ignored;
        }

        let mut failures = Vec::new();
        for offset in 0..len {
            let candidate = (index + offset) % len;
            let path = &self.sequence[candidate];
            match load_image(path) {
                Ok(image) => {
                    self.image = Some(image);
                    self.index = Some(candidate);
                    return DisplayOutcome::Shown {
                        index: candidate,
                        skipped: failures,
                    };
                }
                Err(error) => failures.push(LoadFailure {
                    path: path.clone(),
                    error,
                }),
            }
        }

        self.image = None;
        self.playing = false;
        DisplayOutcome::NothingViewable { failures }
    }

    /// Advances one position, wrapping to the first image.
    pub fn next(&mut self) -> DisplayOutcome {
        match self.index {
            Some(index) if !self.sequence.is_empty() => {
                self.display((index + 1) % self.sequence.len())
            }
            _ => DisplayOutcome::Ignored,
        }
    }

    /// Goes back one position, wrapping to the last image.
    pub fn previous(&mut self) -> DisplayOutcome {
        match self.index {
            Some(index) if !self.sequence.is_empty() => {
                let len = self.sequence.len();
                self.display((index + len - 1) % len)
            }
            _ => DisplayOutcome::Ignored,
        }
    }

    /// Timer expiry. Equivalent to [`Slideshow::next`].
    pub fn tick(&mut self) -> DisplayOutcome {
        log::debug!("slide timer tick at {:?}", self.index);
        self.next()
    }

    // ----------------------------------------------------------------------
    // Playback
    // ----------------------------------------------------------------------

    /// Flips the play flag. Does nothing while the sequence is empty.
    /// Flips play state. Does nothing while no image is decoded, which covers
    /// an empty sequence and a pass where every file failed.
    pub fn toggle_play(&mut self) {
        if self.sequence.is_empty() || self.image.is_none() {
            return;
        }
        self.playing = !self.playing;
    }

    pub fn set_interval(&mut self, interval: Interval) {
        self.interval = interval;
    }

    /// Selects a preset interval. Values that are not presets are ignored.
    pub fn set_preset_interval(&mut self, millis: u64) {
        if let Some(interval) = Interval::preset(millis) {
            self.interval = interval;
        }
    }

    /// Applies the custom prompt's input. On error the interval is kept.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInterval`] when the input is not a number of seconds
    /// in the accepted range.
    pub fn set_custom_interval(&mut self, input: &str) -> Result<Interval, InvalidInterval> {
        let interval = Interval::parse_custom_secs(input)?;
        self.interval = interval;
        Ok(interval)
    }

    /// Takes effect on the next folder scan.
    pub fn set_include_subfolders(&mut self, include: bool) {
        self.include_subfolders = include;
    }

    // ----------------------------------------------------------------------
    // Zoom
    // ----------------------------------------------------------------------

    pub fn zoom_fit(&mut self) {
        self.zoom.fit();
    }

    pub fn zoom_actual_size(&mut self) {
        self.zoom.actual_size();
    }

    /// No effect while no image is decoded.
    pub fn zoom_in(&mut self) {
        if self.image.is_some() {
            self.zoom.zoom_in();
        }
    }

    /// No effect while no image is decoded.
    pub fn zoom_out(&mut self) {
        if self.image.is_some() {
            self.zoom.zoom_out();
        }
    }

    /// Wheel rotation: positive `delta` zooms in, anything else zooms out.
    pub fn zoom_by_wheel(&mut self, delta: f32) {
        if delta > 0.0 {
            self.zoom_in();
        } else {
            self.zoom_out();
        }
    }

    /// Returns to fit mode if another zoom mode is active. Reports whether
    /// anything changed.
    pub fn reset_zoom(&mut self) -> bool {
        if self.zoom.is_fit() {
            return false;
        }
        self.zoom.fit();
        true
    }

    // ----------------------------------------------------------------------
    // Info
    // ----------------------------------------------------------------------

    /// Describes the current image, or `None` while the sequence is empty.
    #[must_use]
    pub fn info(&self) -> Option<ImageInfo> {
        let index = self.index?;
        let path = self.sequence.get(index)?;
        Some(ImageInfo::collect(
            path,
            self.image.as_ref().map(ImageData::dimensions),
            index,
            self.sequence.len(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_INTERVAL_MS, INTERVAL_PRESETS_MS, MAX_ZOOM_FACTOR, MIN_ZOOM_FACTOR};
    use crate::test_utils::{assert_abs_diff_eq, write_corrupt, write_image};
    use crate::ui::state::ZoomMode;
    use std::fs;
    use tempfile::tempdir;

    fn file_name(path: Option<&Path>) -> String {
        path.and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    fn opened_with(names: &[&str]) -> (tempfile::TempDir, Slideshow) {
        let temp_dir = tempdir().expect("failed to create temp dir");
        for name in names {
            write_image(temp_dir.path(), name, 4, 3);
        }
        let mut slideshow = Slideshow::default();
        let outcome = slideshow.open_folder(temp_dir.path());
        assert!(matches!(outcome, FolderOutcome::Opened { .. }));
        (temp_dir, slideshow)
    }

    #[test]
    fn new_slideshow_is_idle() {
        let slideshow = Slideshow::default();
        assert!(slideshow.is_empty());
        assert_eq!(slideshow.current_index(), None);
        assert!(!slideshow.is_playing());
        assert!(!slideshow.timer_active());
        assert_eq!(slideshow.interval().as_millis(), DEFAULT_INTERVAL_MS);
        assert!(slideshow.zoom().is_fit());
        assert!(slideshow.info().is_none());
    }

    #[test]
    fn new_uses_configured_values() {
        let config = SlideshowConfig {
            interval_ms: Some(5000),
            include_subfolders: Some(true),
        };
        let slideshow = Slideshow::new(&config);
        assert!(slideshow.interval().is_preset(5000));
        assert!(slideshow.include_subfolders());
    }

    #[test]
    fn open_folder_sorts_and_starts_playing() {
        let (_dir, slideshow) = opened_with(&["b.png", "A.jpg", "c.jpeg"]);

        let names: Vec<String> = slideshow
            .sequence()
            .iter()
            .map(|p| file_name(Some(p)))
            .collect();
        assert_eq!(names, ["A.jpg", "b.png", "c.jpeg"]);
        assert_eq!(slideshow.current_index(), Some(0));
        assert!(slideshow.is_playing());
        assert!(slideshow.timer_active());
        assert!(slideshow.image().is_some());
    }

    #[test]
    fn two_ticks_advance_two_positions() {
        let (_dir, mut slideshow) = opened_with(&["b.png", "A.jpg", "c.jpeg"]);

        slideshow.tick();
        slideshow.tick();

        assert_eq!(slideshow.current_index(), Some(2));
        assert_eq!(file_name(slideshow.current_path()), "c.jpeg");
    }

    #[test]
    fn empty_folder_reports_once_and_keeps_state() {
        let (_dir, mut slideshow) = opened_with(&["one.png", "two.png"]);
        slideshow.next();
        let before_index = slideshow.current_index();

        let empty_dir = tempdir().expect("failed to create temp dir");
        fs::write(empty_dir.path().join("notes.txt"), b"text").expect("failed to write");

        let outcome = slideshow.open_folder(empty_dir.path());

        assert!(matches!(outcome, FolderOutcome::Empty));
        assert_eq!(slideshow.len(), 2);
        assert_eq!(slideshow.current_index(), before_index);
        assert!(slideshow.image().is_some());
    }

    #[test]
    fn unreadable_folder_is_a_scan_failure() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut slideshow = Slideshow::default();

        let outcome = slideshow.open_folder(&temp_dir.path().join("missing"));

        assert!(matches!(outcome, FolderOutcome::ScanFailed(Error::Io(_))));
        assert!(slideshow.is_empty());
    }

    #[test]
    fn navigation_wraps_in_both_directions() {
        let (_dir, mut slideshow) = opened_with(&["1.png", "2.png", "3.png"]);

        slideshow.previous();
        assert_eq!(slideshow.current_index(), Some(2));

        slideshow.next();
        assert_eq!(slideshow.current_index(), Some(0));

        for _ in 0..10 {
            slideshow.next();
            let index = slideshow.current_index().expect("index set");
            assert!(index < slideshow.len());
        }
        for _ in 0..10 {
            slideshow.previous();
            let index = slideshow.current_index().expect("index set");
            assert!(index < slideshow.len());
        }
    }

    #[test]
    fn navigation_on_empty_sequence_is_ignored() {
        let mut slideshow = Slideshow::default();
        assert!(matches!(slideshow.next(), DisplayOutcome::Ignored));
        assert!(matches!(slideshow.previous(), DisplayOutcome::Ignored));
        assert!(matches!(slideshow.tick(), DisplayOutcome::Ignored));
        assert!(matches!(slideshow.display(0), DisplayOutcome::Ignored));
        assert_eq!(slideshow.current_index(), None);
    }

    #[test]
    fn display_out_of_range_changes_nothing() {
        let (_dir, mut slideshow) = opened_with(&["1.png", "2.png"]);
        assert!(matches!(slideshow.display(5), DisplayOutcome::Ignored));
        assert_eq!(slideshow.current_index(), Some(0));
    }

    #[test]
    fn corrupt_file_is_skipped() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        write_image(temp_dir.path(), "a.png", 2, 2);
        write_corrupt(temp_dir.path(), "b.png");
        write_image(temp_dir.path(), "c.png", 2, 2);

        let mut slideshow = Slideshow::default();
        slideshow.open_folder(temp_dir.path());

        match slideshow.next() {
            DisplayOutcome::Shown { index, skipped } => {
                assert_eq!(index, 2);
                assert_eq!(skipped.len(), 1);
                assert_eq!(file_name(Some(&skipped[0].path)), "b.png");
                assert!(matches!(skipped[0].error, Error::Decode(_)));
            }
            other => panic!("expected Shown, got {other:?}"),
        }
    }

    #[test]
    fn corrupt_last_file_wraps_to_first() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        write_image(temp_dir.path(), "a.png", 2, 2);
        write_image(temp_dir.path(), "b.png", 2, 2);
        write_corrupt(temp_dir.path(), "c.png");

        let mut slideshow = Slideshow::default();
        slideshow.open_folder(temp_dir.path());
        slideshow.next();
        slideshow.next();

        assert_eq!(slideshow.current_index(), Some(0));
    }

    #[test]
    fn all_corrupt_files_stop_after_one_pass() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        write_corrupt(temp_dir.path(), "a.png");
        write_corrupt(temp_dir.path(), "b.jpg");
        write_corrupt(temp_dir.path(), "c.jpeg");

        let mut slideshow = Slideshow::default();
        match slideshow.open_folder(temp_dir.path()) {
            FolderOutcome::Opened {
                count,
                display: DisplayOutcome::NothingViewable { failures },
            } => {
                assert_eq!(count, 3);
                assert_eq!(failures.len(), 3);
            }
            other => panic!("expected NothingViewable, got {other:?}"),
        }

        assert!(!slideshow.is_playing());
        assert!(!slideshow.timer_active());
        assert!(slideshow.image().is_none());
        let index = slideshow.current_index().expect("index set");
        assert!(index < slideshow.len());
    }

    #[test]
    fn toggle_play_stays_stopped_when_nothing_is_viewable() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        write_corrupt(temp_dir.path(), "a.png");
        write_corrupt(temp_dir.path(), "b.png");

        let mut slideshow = Slideshow::default();
        slideshow.open_folder(temp_dir.path());
        slideshow.toggle_play();

        assert!(!slideshow.is_playing());
        assert!(!slideshow.timer_active());
    }

    #[test]
    fn toggle_play_requires_images() {
        let mut slideshow = Slideshow::default();
        slideshow.toggle_play();
        assert!(!slideshow.is_playing());

        let (_dir, mut slideshow) = opened_with(&["1.png"]);
        slideshow.toggle_play();
        assert!(!slideshow.is_playing());
        assert!(!slideshow.timer_active());
        slideshow.toggle_play();
        assert!(slideshow.is_playing());
    }

    #[test]
    fn preset_interval_marks_exactly_that_preset() {
        let mut slideshow = Slideshow::default();
        slideshow.set_preset_interval(1000);

        assert_eq!(slideshow.interval().as_millis(), 1000);
        let marked = INTERVAL_PRESETS_MS
            .iter()
            .filter(|ms| slideshow.interval().is_preset(**ms))
            .count();
        assert_eq!(marked, 1);

        slideshow.set_preset_interval(1234);
        assert_eq!(slideshow.interval().as_millis(), 1000);
    }

    #[test]
    fn custom_interval_clears_markers() {
        let mut slideshow = Slideshow::default();
        let interval = slideshow
            .set_custom_interval("2.5")
            .expect("2.5 s is valid");

        assert_eq!(interval.as_millis(), 2500);
        assert!(INTERVAL_PRESETS_MS
            .iter()
            .all(|ms| !slideshow.interval().is_preset(*ms)));
    }

    #[test]
    fn rejected_custom_interval_keeps_previous() {
        let mut slideshow = Slideshow::default();
        slideshow.set_preset_interval(2000);

        assert!(slideshow.set_custom_interval("0.05").is_err());

        assert_eq!(slideshow.interval(), Interval::Preset(2000));
    }

    #[test]
    fn zoom_in_from_fit_gives_custom_factor() {
        let (_dir, mut slideshow) = opened_with(&["1.png"]);

        slideshow.zoom_in();

        assert_eq!(slideshow.zoom().mode, ZoomMode::Custom);
        assert_abs_diff_eq!(slideshow.zoom().factor.value(), 1.2, epsilon = 1e-6);
    }

    #[test]
    fn zoom_without_image_is_ignored() {
        let mut slideshow = Slideshow::default();
        slideshow.zoom_in();
        slideshow.zoom_by_wheel(-1.0);
        assert!(slideshow.zoom().is_fit());
    }

    #[test]
    fn wheel_zoom_stays_in_bounds() {
        let (_dir, mut slideshow) = opened_with(&["1.png"]);
        for _ in 0..40 {
            slideshow.zoom_by_wheel(1.0);
        }
        assert_abs_diff_eq!(slideshow.zoom().factor.value(), MAX_ZOOM_FACTOR);
        for _ in 0..60 {
            slideshow.zoom_by_wheel(-1.0);
        }
        assert_abs_diff_eq!(slideshow.zoom().factor.value(), MIN_ZOOM_FACTOR);
    }

    #[test]
    fn zoom_mode_survives_navigation() {
        let (_dir, mut slideshow) = opened_with(&["1.png", "2.png"]);
        slideshow.zoom_actual_size();
        slideshow.next();
        assert_eq!(slideshow.zoom().mode, ZoomMode::ActualSize);
    }

    #[test]
    fn reset_zoom_reports_change() {
        let (_dir, mut slideshow) = opened_with(&["1.png"]);
        assert!(!slideshow.reset_zoom());
        slideshow.zoom_out();
        assert!(slideshow.reset_zoom());
        assert!(slideshow.zoom().is_fit());
        assert_eq!(slideshow.zoom().factor.value(), 1.0);
    }

    #[test]
    fn info_describes_current_image() {
        let (_dir, mut slideshow) = opened_with(&["a.png", "b.png"]);
        slideshow.next();

        let info = slideshow.info().expect("image is current");

        assert_eq!(info.file_name, "b.png");
        assert_eq!(info.dimensions, Some((4, 3)));
        assert_eq!(info.position_label(), "2 / 2");
        assert!(info.size_bytes.is_some_and(|bytes| bytes > 0));
    }

    #[test]
    fn subfolder_toggle_applies_to_next_scan() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested = temp_dir.path().join("nested");
        fs::create_dir(&nested).expect("failed to create nested dir");
        write_image(&nested, "deep.png", 2, 2);

        let mut slideshow = Slideshow::default();
        assert!(matches!(
            slideshow.open_folder(temp_dir.path()),
            FolderOutcome::Empty
        ));

        slideshow.set_include_subfolders(true);
        assert!(matches!(
            slideshow.open_folder(temp_dir.path()),
            FolderOutcome::Opened { count: 1, .. }
        ));
    }
}
