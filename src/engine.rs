//! Countdown state machine.
//!
//! `CountdownEngine` owns the remaining time and the current [`Phase`]. Every
//! transition is a total function: calls that do not apply to the current
//! phase return `None` and leave the state untouched, so a stray tick or a
//! repeated start can never corrupt the countdown.

use log::debug;
use std::num::NonZeroU32;

use crate::InputValidationError;

pub const SECONDS_PER_MINUTE: u32 = 60;

/// Largest minute count whose seconds still fit in a `u32`.
pub const MAX_MINUTES: u32 = u32::MAX / SECONDS_PER_MINUTE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Idle,
    Running,
    Paused,
    Completed,
}

/// Validated duration of a single timer instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerConfig {
    total_seconds: NonZeroU32,
}

impl TimerConfig {
    pub fn from_minutes(minutes: NonZeroU32) -> Result<Self, InputValidationError> {
        let total = minutes
            .get()
            .checked_mul(SECONDS_PER_MINUTE)
            .ok_or(InputValidationError::OutOfRange(minutes.get() as f64))?;
        // minutes > 0, so the product is non-zero
        let total_seconds =
            NonZeroU32::new(total).ok_or(InputValidationError::NotPositive(minutes.get() as f64))?;
        Ok(Self { total_seconds })
    }

    pub fn total_seconds(&self) -> u32 {
        self.total_seconds.get()
    }

    pub fn minutes(&self) -> u32 {
        self.total_seconds.get() / SECONDS_PER_MINUTE
    }
}

/// Lifecycle and tick signals produced by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Started,
    Paused,
    Resumed,
    Reset,
    Tick(u32),
    Completed,
}

/// Read-only view of the engine handed to renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerSnapshot {
    pub seconds_left: u32,
    pub total_seconds: u32,
    pub phase: Phase,
}

impl TimerSnapshot {
    pub fn initial(config: TimerConfig) -> Self {
        Self {
            seconds_left: config.total_seconds(),
            total_seconds: config.total_seconds(),
            phase: Phase::Idle,
        }
    }

    pub fn display(&self) -> String {
        crate::display::display_string(self.seconds_left)
    }

    pub fn progress(&self) -> f64 {
        crate::display::progress_fraction(self.seconds_left, self.total_seconds)
    }

    pub fn is_urgent(&self) -> bool {
        crate::display::is_urgent(self.seconds_left, self.phase)
    }
}

#[derive(Debug, Clone)]
pub struct CountdownEngine {
    config: TimerConfig,
    seconds_left: u32,
    phase: Phase,
}

impl CountdownEngine {
    pub fn new(config: TimerConfig) -> Self {
        Self {
            config,
            seconds_left: config.total_seconds(),
            phase: Phase::Idle,
        }
    }

    pub fn config(&self) -> TimerConfig {
        self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn seconds_left(&self) -> u32 {
        self.seconds_left
    }

    pub fn total_seconds(&self) -> u32 {
        self.config.total_seconds()
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            seconds_left: self.seconds_left,
            total_seconds: self.total_seconds(),
            phase: self.phase,
        }
    }

    /// Begin counting from Idle, or restart from the top after completion.
    pub fn start(&mut self) -> Option<TimerEvent> {
        match self.phase {
            Phase::Idle => {}
            Phase::Completed => self.seconds_left = self.total_seconds(),
            Phase::Running | Phase::Paused => return None,
        }
        self.transition(Phase::Running);
        Some(TimerEvent::Started)
    }

    pub fn pause(&mut self) -> Option<TimerEvent> {
        if self.phase != Phase::Running {
            return None;
        }
        self.transition(Phase::Paused);
        Some(TimerEvent::Paused)
    }

    pub fn resume(&mut self) -> Option<TimerEvent> {
        if self.phase != Phase::Paused {
            return None;
        }
        self.transition(Phase::Running);
        Some(TimerEvent::Resumed)
    }

    /// Consume one delivered tick. Ticks outside `Running` are ignored.
    pub fn tick(&mut self) -> Option<TimerEvent> {
        if self.phase != Phase::Running {
            return None;
        }
        self.seconds_left = self.seconds_left.saturating_sub(1);
        if self.seconds_left == 0 {
            self.transition(Phase::Completed);
            Some(TimerEvent::Completed)
        } else {
            Some(TimerEvent::Tick(self.seconds_left))
        }
    }

    pub fn reset(&mut self) -> Option<TimerEvent> {
        self.seconds_left = self.total_seconds();
        self.transition(Phase::Idle);
        Some(TimerEvent::Reset)
    }

    /// Single run control: start, pause or resume depending on the phase.
    pub fn toggle(&mut self) -> Option<TimerEvent> {
        match self.phase {
            Phase::Idle | Phase::Completed => self.start(),
            Phase::Running => self.pause(),
            Phase::Paused => self.resume(),
        }
    }

    /// Close the completion notice and re-arm with the full duration.
    pub fn dismiss(&mut self) -> Option<TimerEvent> {
        if self.phase != Phase::Completed {
            return None;
        }
        self.reset()
    }

    fn transition(&mut self, next: Phase) {
        debug!(
            "countdown {:?} -> {:?} ({}s of {}s left)",
            self.phase,
            next,
            self.seconds_left,
            self.total_seconds()
        );
        self.phase = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn engine(minutes: u32) -> CountdownEngine {
        let minutes = NonZeroU32::new(minutes).unwrap();
        CountdownEngine::new(TimerConfig::from_minutes(minutes).unwrap())
    }

    fn run_to_completion(e: &mut CountdownEngine) {
        e.start();
        for _ in 0..e.total_seconds() {
            e.tick();
        }
    }

    #[test]
    fn test_construction() {
        for m in [1, 2, 3, 13, 90, 1440] {
            let e = engine(m);
            assert_eq!(e.total_seconds(), 60 * m);
            assert_eq!(e.seconds_left(), 60 * m);
            assert_eq!(e.phase(), Phase::Idle);
        }
    }

    #[test]
    fn test_config_overflow_rejected() {
        let ok = NonZeroU32::new(MAX_MINUTES).unwrap();
        assert!(TimerConfig::from_minutes(ok).is_ok());

        let too_big = NonZeroU32::new(MAX_MINUTES + 1).unwrap();
        assert!(matches!(
            TimerConfig::from_minutes(too_big),
            Err(InputValidationError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_run_to_completion() {
        let mut e = engine(2);
        run_to_completion(&mut e);
        assert_eq!(e.phase(), Phase::Completed);
        assert_eq!(e.seconds_left(), 0);

        // Late ticks after completion change nothing
        assert_eq!(e.tick(), None);
        assert_eq!(e.seconds_left(), 0);
    }

    #[test]
    fn test_tick_events() {
        let mut e = engine(1);
        assert_eq!(e.tick(), None); // Idle ignores ticks
        assert_eq!(e.start(), Some(TimerEvent::Started));
        assert_eq!(e.tick(), Some(TimerEvent::Tick(59)));
        assert_eq!(e.tick(), Some(TimerEvent::Tick(58)));
        for _ in 0..57 {
            e.tick();
        }
        assert_eq!(e.seconds_left(), 1);
        assert_eq!(e.tick(), Some(TimerEvent::Completed));
    }

    #[test]
    fn test_reset_from_every_phase() {
        let mut running = engine(1);
        running.start();
        running.tick();

        let mut paused = running.clone();
        paused.pause();

        let mut completed = engine(1);
        run_to_completion(&mut completed);

        let mut idle = engine(1);

        for e in [&mut running, &mut paused, &mut completed, &mut idle] {
            assert_eq!(e.reset(), Some(TimerEvent::Reset));
            assert_eq!(e.phase(), Phase::Idle);
            assert_eq!(e.seconds_left(), e.total_seconds());
        }
    }

    #[test]
    fn test_toggle_cycle_keeps_time() {
        let mut e = engine(5);
        assert_eq!(e.toggle(), Some(TimerEvent::Started));
        assert_eq!(e.toggle(), Some(TimerEvent::Paused));
        assert_eq!(e.phase(), Phase::Paused);
        assert_eq!(e.seconds_left(), 300);

        assert_eq!(e.toggle(), Some(TimerEvent::Resumed));
        assert_eq!(e.phase(), Phase::Running);
    }

    #[test]
    fn test_paused_ignores_ticks() {
        let mut e = engine(1);
        e.start();
        e.tick();
        e.pause();
        assert_eq!(e.tick(), None);
        assert_eq!(e.seconds_left(), 59);
    }

    #[test]
    fn test_repeated_start_is_noop() {
        let mut e = engine(1);
        e.start();
        e.tick();
        assert_eq!(e.start(), None);
        assert_eq!(e.resume(), None);
        assert_eq!(e.seconds_left(), 59);
        assert_eq!(e.phase(), Phase::Running);
    }

    #[test]
    fn test_start_after_completion_restarts() {
        let mut e = engine(1);
        run_to_completion(&mut e);
        assert_eq!(e.toggle(), Some(TimerEvent::Started));
        assert_eq!(e.phase(), Phase::Running);
        assert_eq!(e.seconds_left(), 60);
    }

    #[test]
    fn test_dismiss() {
        let mut e = engine(1);
        e.start();
        assert_eq!(e.dismiss(), None);
        assert_eq!(e.phase(), Phase::Running);

        for _ in 0..60 {
            e.tick();
        }
        assert_eq!(e.dismiss(), Some(TimerEvent::Reset));
        assert_eq!(e.phase(), Phase::Idle);
        assert_eq!(e.seconds_left(), 60);
    }

    #[test]
    fn test_invariants_over_random_sequences() {
        let mut rng = StdRng::seed_from_u64(0x6b69_7463);
        for _ in 0..200 {
            let minutes = rng.random_range(1..=3);
            let mut e = engine(minutes);
            for _ in 0..1_000 {
                match rng.random_range(0..8) {
                    0 => e.start(),
                    1 => e.pause(),
                    2 => e.resume(),
                    3 => e.reset(),
                    4 => e.toggle(),
                    5 => e.dismiss(),
                    _ => e.tick(),
                };
                assert!(e.seconds_left() <= e.total_seconds());
                assert_eq!(e.total_seconds(), minutes * 60);
                assert_eq!(e.phase() == Phase::Completed, e.seconds_left() == 0);
            }
        }
    }
}
