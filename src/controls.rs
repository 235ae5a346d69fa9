//! User controls of the timer view and their default key bindings.

use crate::engine::Phase;

pub const TOGGLE_KEY_CODE: &str = "Space";
pub const RESET_KEY_CODE: &str = "KeyR";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Toggle,
    Reset,
    Dismiss,
    Back,
}

/// Map a `KeyboardEvent.code` to a control. Keys typed into text fields
/// (`INPUT`, `TEXTAREA`) never trigger controls.
pub fn control_for_key(code: &str, target_tag: Option<&str>) -> Option<Control> {
    if let Some(tag) = target_tag {
        if tag.eq_ignore_ascii_case("input") || tag.eq_ignore_ascii_case("textarea") {
            return None;
        }
    }
    match code {
        TOGGLE_KEY_CODE => Some(Control::Toggle),
        RESET_KEY_CODE => Some(Control::Reset),
        _ => None,
    }
}

pub fn toggle_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle | Phase::Completed => "Start",
        Phase::Running => "Pause",
        Phase::Paused => "Resume",
    }
}
