//! Application-level configuration constants.

// Timing
pub const TICK_INTERVAL_MS: u32 = 1_000;
pub const POP_ANIMATION_MS: u32 = 300;

// Progress ring
pub const RING_RADIUS: f64 = 125.0;
pub const RING_VIEWBOX: u32 = 300;
pub const RING_STROKE_WIDTH: u32 = 12;

// Page chrome
pub const APP_TITLE: &str = "Kitchen Timer";
pub const TICK_SOUND_SRC: &str = "assets/tick.wav";
pub const LEAVE_WARNING: &str = "Are you sure you want to leave? The timer is still running.";

// CSS classes toggled by the timer view
pub const RUNNING_BODY_CLASS: &str = "timer-running";
pub const PAUSED_CLASS: &str = "paused";
pub const FLASH_CLASS: &str = "flash";
pub const POP_CLASS: &str = "pop";

// Default value for the custom minutes field
pub const DEFAULT_CUSTOM_MINUTES: &str = "";
