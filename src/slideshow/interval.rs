// SPDX-License-Identifier: MPL-2.0
//! Slideshow interval domain type.
//!
//! An interval is either one of the menu presets or a custom value entered
//! in seconds. The distinction matters for the menu check marks: a custom
//! value never marks a preset, even when the durations happen to match.

use crate::config::{
    CUSTOM_INTERVAL_MAX_SECS, CUSTOM_INTERVAL_MIN_SECS, CUSTOM_INTERVAL_STEP_SECS,
    DEFAULT_INTERVAL_MS, INTERVAL_PRESETS_MS, MIN_INTERVAL_MS,
};
use std::fmt;
use std::time::Duration;

/// Delay between two automatic slide advances.
///
/// # Example
///
/// ```
/// use beginview::slideshow::Interval;
///
/// let custom = Interval::parse_custom_secs("2.5").unwrap();
/// assert_eq!(custom.as_millis(), 2500);
/// assert!(!custom.is_preset(2500));
///
/// assert!(Interval::parse_custom_secs("0.05").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interval {
    /// One of [`INTERVAL_PRESETS_MS`].
    Preset(u64),
    /// Entered through the custom interval prompt.
    Custom(u64),
}

/// Why a custom interval entry was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInterval {
    NotANumber,
    OutOfRange,
}

impl fmt::Display for InvalidInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInterval::NotANumber => write!(f, "not a number"),
            InvalidInterval::OutOfRange => write!(
                f,
                "outside {CUSTOM_INTERVAL_MIN_SECS}..={CUSTOM_INTERVAL_MAX_SECS} seconds"
            ),
        }
    }
}

impl std::error::Error for InvalidInterval {}

impl Interval {
    /// Returns the preset for `millis`, if there is one.
    #[must_use]
    pub fn preset(millis: u64) -> Option<Self> {
        INTERVAL_PRESETS_MS
            .contains(&millis)
            .then_some(Interval::Preset(millis))
    }

    /// Interpretation of a configured value: a preset when it matches one,
    /// otherwise a custom interval no shorter than [`MIN_INTERVAL_MS`].
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self::preset(millis).unwrap_or(Interval::Custom(millis.max(MIN_INTERVAL_MS)))
    }

    /// Parses the custom prompt's text as seconds.
    ///
    /// Values are rounded to the prompt's 0.1 s granularity and must lie in
    /// `[0.1, 3600.0]`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInterval`] for non-numeric or out-of-range input.
    pub fn parse_custom_secs(input: &str) -> Result<Self, InvalidInterval> {
        let secs: f64 = input
            .trim()
            .parse()
            .map_err(|_| InvalidInterval::NotANumber)?;
        if !secs.is_finite() {
            return Err(InvalidInterval::NotANumber);
        }
        if !(CUSTOM_INTERVAL_MIN_SECS..=CUSTOM_INTERVAL_MAX_SECS).contains(&secs) {
            return Err(InvalidInterval::OutOfRange);
        }

        let steps = (secs / CUSTOM_INTERVAL_STEP_SECS).round();
        let millis = (steps * CUSTOM_INTERVAL_STEP_SECS * 1000.0).round() as u64;
        Ok(Interval::Custom(millis.max(MIN_INTERVAL_MS)))
    }

    #[must_use]
    pub fn as_millis(self) -> u64 {
        match self {
            Interval::Preset(millis) | Interval::Custom(millis) => millis,
        }
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.as_millis())
    }

    /// Whether the menu entry for the preset `millis` is checked.
    #[must_use]
    pub fn is_preset(self, millis: u64) -> bool {
        matches!(self, Interval::Preset(current) if current == millis)
    }

    /// Text shown in the custom prompt, in seconds with one decimal.
    #[must_use]
    pub fn seconds_label(self) -> String {
        format!("{:.1}", self.as_millis() as f64 / 1000.0)
    }
}

impl Default for Interval {
    fn default() -> Self {
        Interval::Preset(DEFAULT_INTERVAL_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_three_second_preset() {
        let interval = Interval::default();
        assert_eq!(interval.as_millis(), 3000);
        assert!(interval.is_preset(3000));
    }

    #[test]
    fn exactly_one_preset_is_marked() {
        let interval = Interval::preset(5000).expect("5 s is a preset");
        let marked: Vec<u64> = INTERVAL_PRESETS_MS
            .iter()
            .copied()
            .filter(|ms| interval.is_preset(*ms))
            .collect();
        assert_eq!(marked, [5000]);
    }

    #[test]
    fn custom_interval_marks_no_preset() {
        let interval = Interval::parse_custom_secs("3").expect("valid input");
        assert_eq!(interval.as_millis(), 3000);
        assert!(INTERVAL_PRESETS_MS.iter().all(|ms| !interval.is_preset(*ms)));
    }

    #[test]
    fn parse_custom_accepts_fractional_seconds() {
        assert_eq!(
            Interval::parse_custom_secs("2.5"),
            Ok(Interval::Custom(2500))
        );
        assert_eq!(
            Interval::parse_custom_secs(" 0.1 "),
            Ok(Interval::Custom(100))
        );
        assert_eq!(
            Interval::parse_custom_secs("3600"),
            Ok(Interval::Custom(3_600_000))
        );
    }

    #[test]
    fn parse_custom_rounds_to_tenths() {
        assert_eq!(
            Interval::parse_custom_secs("1.26"),
            Ok(Interval::Custom(1300))
        );
    }

    #[test]
    fn parse_custom_rejects_too_short() {
        assert_eq!(
            Interval::parse_custom_secs("0.05"),
            Err(InvalidInterval::OutOfRange)
        );
        assert_eq!(
            Interval::parse_custom_secs("-1"),
            Err(InvalidInterval::OutOfRange)
        );
    }

    #[test]
    fn parse_custom_rejects_too_long_and_garbage() {
        assert_eq!(
            Interval::parse_custom_secs("3600.5"),
            Err(InvalidInterval::OutOfRange)
        );
        assert_eq!(
            Interval::parse_custom_secs("abc"),
            Err(InvalidInterval::NotANumber)
        );
        assert_eq!(
            Interval::parse_custom_secs("NaN"),
            Err(InvalidInterval::NotANumber)
        );
        assert_eq!(
            Interval::parse_custom_secs(""),
            Err(InvalidInterval::NotANumber)
        );
    }

    #[test]
    fn from_millis_recognizes_presets_and_clamps_custom() {
        assert_eq!(Interval::from_millis(10000), Interval::Preset(10000));
        assert_eq!(Interval::from_millis(4200), Interval::Custom(4200));
        assert_eq!(Interval::from_millis(5), Interval::Custom(MIN_INTERVAL_MS));
    }

    #[test]
    fn seconds_label_has_one_decimal() {
        assert_eq!(Interval::Custom(2500).seconds_label(), "2.5");
        assert_eq!(Interval::default().seconds_label(), "3.0");
    }
}
