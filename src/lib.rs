//! Kitchen countdown timer.
//!
//! The library holds everything that can be reasoned about without a
//! browser: the countdown state machine, its derived display values, the
//! preset catalog, and the validation of both user-entered durations and the
//! timer view's `minutes` parameter. The Yew front end in `main.rs` drives it.

use std::fmt;

pub mod controls;
pub mod display;
pub mod driver;
pub mod engine;
pub mod params;
pub mod presets;
pub mod selector;

pub use controls::{control_for_key, toggle_label, Control};
pub use display::{display_string, is_urgent, page_title, progress_fraction};
pub use driver::{Countdown, TickSource, TimerObserver};
pub use engine::{CountdownEngine, Phase, TimerConfig, TimerEvent, TimerSnapshot};
pub use params::{parse_minutes_param, resolve_route, Route};
pub use presets::{list_presets, DurationPreset, PresetCategory};
pub use selector::{select_preset, submit_custom_duration, NavigationRequest};

/// The timer view was opened without a usable `minutes` parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum InputValidationError {
    Missing,
    NotANumber(String),
    NotPositive(f64),
    OutOfRange(f64),
}

impl fmt::Display for InputValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputValidationError::Missing => {
                write!(f, "Invalid timer value. No duration was given.")
            }
            InputValidationError::NotANumber(raw) => {
                write!(f, "Invalid timer value '{}'. Please set a valid time.", raw)
            }
            InputValidationError::NotPositive(v) => write!(
                f,
                "Invalid timer value {}. The timer needs at least one minute.",
                v
            ),
            InputValidationError::OutOfRange(v) => {
                write!(f, "Invalid timer value {}. That is too long to count down.", v)
            }
        }
    }
}

impl std::error::Error for InputValidationError {}

/// The custom-duration form holds something that is not a positive whole number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValidationError {
    Empty,
    NotANumber(String),
    NotPositive(i64),
    TooLarge(u32),
}

impl fmt::Display for FormValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormValidationError::Empty => write!(f, "Please enter valid minutes!"),
            FormValidationError::NotANumber(raw) => {
                write!(f, "'{}' is not a number. Please enter valid minutes!", raw)
            }
            FormValidationError::NotPositive(v) => {
                write!(f, "Minutes must be greater than zero (got {})", v)
            }
            FormValidationError::TooLarge(max) => {
                write!(f, "Minutes cannot exceed {}", max)
            }
        }
    }
}

impl std::error::Error for FormValidationError {}

#[derive(Debug)]
pub enum PresetCatalogError {
    Csv(csv::Error),
    Empty,
}

impl fmt::Display for PresetCatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresetCatalogError::Csv(e) => write!(f, "Invalid preset catalog: {}", e),
            PresetCatalogError::Empty => write!(f, "Preset catalog has no entries"),
        }
    }
}

impl std::error::Error for PresetCatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PresetCatalogError::Csv(e) => Some(e),
            PresetCatalogError::Empty => None,
        }
    }
}

impl From<csv::Error> for PresetCatalogError {
    fn from(e: csv::Error) -> Self {
        PresetCatalogError::Csv(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FormValidationError::Empty.to_string(),
            "Please enter valid minutes!"
        );
        assert_eq!(
            FormValidationError::NotPositive(-5).to_string(),
            "Minutes must be greater than zero (got -5)"
        );
        assert!(InputValidationError::NotANumber("abc".into())
            .to_string()
            .contains("'abc'"));
    }
}
