//! Initialization contract of the timer view: a single `minutes` query
//! parameter that must name a positive whole number of minutes.

use log::warn;
use std::num::NonZeroU32;

use crate::engine::{TimerConfig, MAX_MINUTES};
use crate::selector::TIMER_PAGE;
use crate::InputValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Selector,
    Timer(TimerConfig),
}

/// Validate the raw `minutes` query value.
///
/// The value is read as a decimal number (fractions and exponents allowed),
/// must be finite and positive, and is floored to whole minutes.
pub fn parse_minutes_param(raw: Option<&str>) -> Result<TimerConfig, InputValidationError> {
    let raw = raw.ok_or(InputValidationError::Missing)?;
    let trimmed = raw.trim();

    let value = trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| InputValidationError::NotANumber(trimmed.to_string()))?;

    if value <= 0.0 {
        return Err(InputValidationError::NotPositive(value));
    }
    let whole = value.floor();
    if whole > MAX_MINUTES as f64 {
        return Err(InputValidationError::OutOfRange(whole));
    }
    let minutes = NonZeroU32::new(whole as u32).ok_or(InputValidationError::NotPositive(value))?;
    TimerConfig::from_minutes(minutes)
}

pub fn is_timer_path(pathname: &str) -> bool {
    let last = pathname.trim_end_matches('/').rsplit('/').next().unwrap_or("");
    last == TIMER_PAGE || last == TIMER_PAGE.trim_end_matches(".html")
}

/// Decide which view a page load shows.
pub fn resolve_route(
    pathname: &str,
    minutes: Option<&str>,
) -> Result<Route, InputValidationError> {
    if !is_timer_path(pathname) {
        return Ok(Route::Selector);
    }
    parse_minutes_param(minutes).map(Route::Timer).map_err(|e| {
        warn!("Rejected timer parameter {:?}: {}", minutes, e);
        e
    })
}
