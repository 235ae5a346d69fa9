//! Pure derived values for rendering a countdown.

use crate::engine::{Phase, TimerSnapshot};

/// Remaining seconds at or below which a live countdown is flagged urgent.
pub const URGENT_THRESHOLD_SECS: u32 = 10;

pub const TIMES_UP_TITLE: &str = "\u{23f0} Time's Up!";

/// Format seconds as "m:ss" (minutes unpadded).
pub fn display_string(seconds_left: u32) -> String {
    let minutes = seconds_left / 60;
    let seconds = seconds_left % 60;
    format!("{}:{:02}", minutes, seconds)
}

/// Fraction of the configured time still remaining, clamped to `[0, 1]`.
pub fn progress_fraction(seconds_left: u32, total_seconds: u32) -> f64 {
    if total_seconds == 0 {
        return 0.0;
    }
    (seconds_left as f64 / total_seconds as f64).clamp(0.0, 1.0)
}

pub fn is_urgent(seconds_left: u32, phase: Phase) -> bool {
    matches!(phase, Phase::Running | Phase::Paused) && seconds_left <= URGENT_THRESHOLD_SECS
}

/// Circumference of the progress ring for a given radius.
pub fn ring_circumference(radius: f64) -> f64 {
    2.0 * std::f64::consts::PI * radius
}

/// Stroke dash offset that hides the elapsed share of the ring.
pub fn ring_dash_offset(progress: f64, circumference: f64) -> f64 {
    circumference * (1.0 - progress.clamp(0.0, 1.0))
}

pub fn page_title(snapshot: &TimerSnapshot, base_title: &str) -> String {
    match snapshot.phase {
        Phase::Completed => TIMES_UP_TITLE.to_string(),
        _ => format!("{} - {}", snapshot.display(), base_title),
    }
}
