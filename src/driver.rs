//! Couples a [`CountdownEngine`] to a periodic tick source and a renderer.
//!
//! The engine decides *what* happens; `Countdown` makes the side effects
//! follow: the tick source is active exactly while the engine is `Running`,
//! and the observer hears about every delivered tick and lifecycle change.

use log::{debug, info};

use crate::engine::{CountdownEngine, Phase, TimerConfig, TimerEvent, TimerSnapshot};

/// Something that calls back into [`Countdown::tick`] once per period.
pub trait TickSource {
    fn start(&mut self);
    fn stop(&mut self);
    fn is_active(&self) -> bool;
}

/// Rendering side of the countdown.
pub trait TimerObserver {
    /// Called after every delivered tick, including the one that completes.
    fn on_tick(&mut self, snapshot: &TimerSnapshot);

    /// Called for lifecycle changes: started, paused, resumed, reset, completed.
    fn on_event(&mut self, event: TimerEvent, snapshot: &TimerSnapshot);
}

pub struct Countdown<T: TickSource, O: TimerObserver> {
    engine: CountdownEngine,
    ticker: T,
    observer: O,
}

impl<T: TickSource, O: TimerObserver> Countdown<T, O> {
    pub fn new(config: TimerConfig, ticker: T, observer: O) -> Self {
        info!("countdown armed for {}s", config.total_seconds());
        Self {
            engine: CountdownEngine::new(config),
            ticker,
            observer,
        }
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        self.engine.snapshot()
    }

    pub fn engine(&self) -> &CountdownEngine {
        &self.engine
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    pub fn is_running(&self) -> bool {
        self.engine.is_running()
    }

    pub fn toggle(&mut self) -> Option<TimerEvent> {
        let event = self.engine.toggle();
        self.apply(event)
    }

    pub fn reset(&mut self) -> Option<TimerEvent> {
        let event = self.engine.reset();
        self.apply(event)
    }

    pub fn dismiss(&mut self) -> Option<TimerEvent> {
        let event = self.engine.dismiss();
        self.apply(event)
    }

    /// Deliver one tick from the tick source.
    pub fn tick(&mut self) -> Option<TimerEvent> {
        let event = self.engine.tick();
        if event.is_none() {
            debug!("stale tick ignored in {:?}", self.engine.phase());
            return None;
        }
        self.sync_ticker();
        let snapshot = self.engine.snapshot();
        self.observer.on_tick(&snapshot);
        if let Some(TimerEvent::Completed) = event {
            info!("countdown completed");
            self.observer.on_event(TimerEvent::Completed, &snapshot);
        }
        event
    }

    fn apply(&mut self, event: Option<TimerEvent>) -> Option<TimerEvent> {
        let event = event?;
        self.sync_ticker();
        self.observer.on_event(event, &self.engine.snapshot());
        Some(event)
    }

    // At most one periodic source, and only while running.
    fn sync_ticker(&mut self) {
        let running = self.engine.phase() == Phase::Running;
        match (running, self.ticker.is_active()) {
            (true, false) => self.ticker.start(),
            (false, true) => self.ticker.stop(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroU32;

    #[derive(Default)]
    struct ManualTicker {
        active: bool,
        starts: usize,
        stops: usize,
    }

    impl TickSource for ManualTicker {
        fn start(&mut self) {
            assert!(!self.active, "tick source started twice");
            self.active = true;
            self.starts += 1;
        }

        fn stop(&mut self) {
            self.active = false;
            self.stops += 1;
        }

        fn is_active(&self) -> bool {
            self.active
        }
    }

    #[derive(Default)]
    struct RecordingObserver {
        ticks: Vec<u32>,
        events: Vec<TimerEvent>,
    }

    impl TimerObserver for RecordingObserver {
        fn on_tick(&mut self, snapshot: &TimerSnapshot) {
            self.ticks.push(snapshot.seconds_left);
        }

        fn on_event(&mut self, event: TimerEvent, _snapshot: &TimerSnapshot) {
            self.events.push(event);
        }
    }

    fn countdown(minutes: u32) -> Countdown<ManualTicker, RecordingObserver> {
        let config = TimerConfig::from_minutes(NonZeroU32::new(minutes).unwrap()).unwrap();
        Countdown::new(config, ManualTicker::default(), RecordingObserver::default())
    }

    /// Fire the tick source the way a one-second interval would, for `secs` seconds.
    fn advance(c: &mut Countdown<ManualTicker, RecordingObserver>, secs: u32) {
        for _ in 0..secs {
            if c.ticker().is_active() {
                c.tick();
            }
        }
    }

    #[test]
    fn test_one_minute_end_to_end() {
        let mut c = countdown(1);
        c.toggle();
        assert!(c.ticker().is_active());

        advance(&mut c, 120);

        let obs = c.observer();
        assert_eq!(obs.ticks.len(), 60);
        assert_eq!(obs.ticks, (0..60).rev().collect::<Vec<u32>>());
        assert_eq!(
            obs.events.iter().filter(|e| **e == TimerEvent::Completed).count(),
            1
        );
        assert_eq!(obs.events, vec![TimerEvent::Started, TimerEvent::Completed]);
        assert_eq!(c.snapshot().phase, Phase::Completed);
        assert!(!c.ticker().is_active());
    }

    #[test]
    fn test_pause_and_reset_stop_ticking() {
        let mut c = countdown(1);
        c.toggle();
        advance(&mut c, 5);
        c.toggle();
        assert_eq!(c.snapshot().phase, Phase::Paused);
        assert!(!c.ticker().is_active());

        advance(&mut c, 5);
        assert_eq!(c.snapshot().seconds_left, 55);

        c.toggle();
        assert!(c.ticker().is_active());
        c.reset();
        assert!(!c.ticker().is_active());
        assert_eq!(c.snapshot().seconds_left, 60);
        assert_eq!(c.ticker().starts, 2);
        assert_eq!(c.ticker().stops, 2);
        assert_eq!(
            c.observer().events,
            vec![
                TimerEvent::Started,
                TimerEvent::Paused,
                TimerEvent::Resumed,
                TimerEvent::Reset
            ]
        );
    }

    #[test]
    fn test_stale_tick_is_dropped() {
        let mut c = countdown(1);
        assert_eq!(c.tick(), None);
        assert!(c.observer().ticks.is_empty());
        assert_eq!(c.snapshot().seconds_left, 60);
    }

    #[test]
    fn test_dismiss_rearms() {
        let mut c = countdown(1);
        c.toggle();
        advance(&mut c, 60);
        assert_eq!(c.dismiss(), Some(TimerEvent::Reset));
        assert_eq!(c.snapshot().phase, Phase::Idle);
        assert_eq!(c.snapshot().seconds_left, 60);
        assert!(!c.ticker().is_active());

        // Dismiss outside completion does nothing
        assert_eq!(c.dismiss(), None);
    }

    #[test]
    fn test_restart_after_completion() {
        let mut c = countdown(1);
        c.toggle();
        advance(&mut c, 60);
        c.toggle();
        assert!(c.ticker().is_active());
        assert_eq!(c.snapshot().seconds_left, 60);
        advance(&mut c, 1);
        assert_eq!(c.snapshot().seconds_left, 59);
    }
}
