// SPDX-License-Identifier: MPL-2.0
use beginview::config::{self, INTERVAL_PRESETS_MS};
use beginview::i18n::fluent::{I18n, Language};
use beginview::slideshow::{DisplayOutcome, FolderOutcome, Interval, Slideshow};
use beginview::ui::state::ZoomMode;
use image_rs::{Rgb, RgbImage};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_image(dir: &Path, name: &str) {
    RgbImage::from_pixel(8, 6, Rgb([10, 20, 30]))
        .save(dir.join(name))
        .expect("failed to write image");
}

#[test]
fn config_file_drives_startup_state() {
    let dir = tempdir().expect("failed to create temp dir");
    let config_path = dir.path().join("settings.toml");
    fs::write(
        &config_path,
        "[general]\nlanguage = \"en\"\n\n[slideshow]\ninterval_ms = 10000\ninclude_subfolders = true\n",
    )
    .expect("failed to write config");

    let config = config::load_from_path(&config_path).expect("failed to load config");
    let i18n = I18n::new(config.general.language.as_deref());
    let slideshow = Slideshow::new(&config.slideshow);

    assert_eq!(i18n.language(), Language::English);
    assert_eq!(i18n.tr("menu-file"), "File");
    assert_eq!(slideshow.interval(), Interval::Preset(10000));
    assert!(slideshow.include_subfolders());
    assert!(!slideshow.is_playing());
}

#[test]
fn browsing_a_folder_end_to_end() {
    let dir = tempdir().expect("failed to create temp dir");
    write_image(dir.path(), "b.png");
    write_image(dir.path(), "A.jpg");
    write_image(dir.path(), "c.jpeg");
    fs::write(dir.path().join("readme.txt"), b"not an image").expect("failed to write file");

    let mut slideshow = Slideshow::default();
    match slideshow.open_folder(dir.path()) {
        FolderOutcome::Opened { count, display } => {
            assert_eq!(count, 3);
            assert!(matches!(display, DisplayOutcome::Shown { index: 0, .. }));
        }
        other => panic!("expected an opened folder, got {other:?}"),
    }

    let names: Vec<_> = slideshow
        .sequence()
        .iter()
        .filter_map(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["A.jpg", "b.png", "c.jpeg"]);

    slideshow.tick();
    slideshow.tick();
    assert_eq!(slideshow.current_index(), Some(2));
    slideshow.next();
    assert_eq!(slideshow.current_index(), Some(0));

    slideshow.zoom_in();
    assert_eq!(slideshow.zoom().mode, ZoomMode::Custom);

    let info = slideshow.info().expect("an image is current");
    assert_eq!(info.file_name, "A.jpg");
    assert_eq!(info.dimensions_label().as_deref(), Some("8 × 6 px"));
    assert_eq!(info.position_label(), "1 / 3");
}

#[test]
fn subfolders_are_included_only_when_enabled() {
    let dir = tempdir().expect("failed to create temp dir");
    write_image(dir.path(), "top.png");
    let nested = dir.path().join("nested");
    fs::create_dir(&nested).expect("failed to create subfolder");
    write_image(&nested, "deep.png");

    let mut slideshow = Slideshow::default();
    slideshow.open_folder(dir.path());
    assert_eq!(slideshow.len(), 1);

    slideshow.set_include_subfolders(true);
    slideshow.open_folder(dir.path());
    assert_eq!(slideshow.len(), 2);
}

#[test]
fn interval_markers_follow_selection() {
    let mut slideshow = Slideshow::default();

    slideshow.set_preset_interval(2000);
    let marked: Vec<u64> = INTERVAL_PRESETS_MS
        .iter()
        .copied()
        .filter(|ms| slideshow.interval().is_preset(*ms))
        .collect();
    assert_eq!(marked, [2000]);

    slideshow
        .set_custom_interval("7.5")
        .expect("7.5 s is accepted");
    assert!(INTERVAL_PRESETS_MS
        .iter()
        .all(|ms| !slideshow.interval().is_preset(*ms)));

    assert!(slideshow.set_custom_interval("0.05").is_err());
    assert_eq!(slideshow.interval(), Interval::Custom(7500));
}

#[test]
fn catalog_falls_back_and_echoes_missing_keys() {
    let i18n = I18n::default();

    assert_eq!(i18n.language(), Language::Japanese);
    assert_eq!(i18n.lookup("fr", "menu-exit"), "Exit");
    assert_eq!(i18n.lookup("en", "no-such-key"), "no-such-key");
}
