//! Selector-side operations: turning a preset click or a custom entry into a
//! navigation request for the timer view.
//!
//! The only thing that crosses to the timer view is the minute count carried
//! in the request's query string.

use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::num::{IntErrorKind, NonZeroU32};

use crate::engine::MAX_MINUTES;
use crate::presets::DurationPreset;
use crate::FormValidationError;

/// Page serving the countdown view.
pub const TIMER_PAGE: &str = "timer.html";

/// Page serving the selector view.
pub const SELECTOR_PAGE: &str = "index.html";

pub const MINUTES_PARAM: &str = "minutes";

// Optional sign followed by the leading run of ASCII digits; anything after is ignored.
static LEADING_INTEGER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([+-]?)([0-9]+)").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationRequest {
    pub minutes: NonZeroU32,
}

impl NavigationRequest {
    pub fn href(&self) -> String {
        format!("{}?{}={}", TIMER_PAGE, MINUTES_PARAM, self.minutes)
    }
}

impl fmt::Display for NavigationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.href())
    }
}

pub fn select_preset(preset: &DurationPreset) -> NavigationRequest {
    info!("Preset selected: {} ({} min)", preset.label, preset.minutes);
    NavigationRequest {
        minutes: preset.minutes,
    }
}

/// Parse the custom-duration field.
///
/// Accepts leading whitespace and an optional sign, then takes the leading
/// digits: "7" and "7 min" both give 7, "7.9" gives 7.
pub fn parse_custom_minutes(raw: &str) -> Result<NonZeroU32, FormValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FormValidationError::Empty);
    }

    let captures = LEADING_INTEGER_REGEX
        .captures(trimmed)
        .ok_or_else(|| FormValidationError::NotANumber(trimmed.to_string()))?;
    let negative = &captures[1] == "-";
    let digits = &captures[2];

    if negative {
        let value = digits.parse::<i64>().map(|v| -v).unwrap_or(i64::MIN);
        // "-0" is just zero
        return Err(FormValidationError::NotPositive(value));
    }

    // Only ASCII digits reach here; overflow is the failure that matters
    let minutes = match digits.parse::<u32>() {
        Ok(v) if v > MAX_MINUTES => return Err(FormValidationError::TooLarge(MAX_MINUTES)),
        Ok(v) => v,
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => {
            return Err(FormValidationError::TooLarge(MAX_MINUTES))
        }
        Err(_) => return Err(FormValidationError::NotANumber(trimmed.to_string())),
    };

    NonZeroU32::new(minutes).ok_or(FormValidationError::NotPositive(0))
}

/// Validate the custom-duration form and build the navigation it triggers.
pub fn submit_custom_duration(raw: &str) -> Result<NavigationRequest, FormValidationError> {
    match parse_custom_minutes(raw) {
        Ok(minutes) => {
            info!("Custom duration accepted: {} min", minutes);
            Ok(NavigationRequest { minutes })
        }
        Err(e) => {
            warn!("Custom duration rejected ({:?}): {}", raw, e);
            Err(e)
        }
    }
}
