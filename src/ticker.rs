//! Browser tick source backed by `setInterval`.

use gloo_timers::callback::Interval;
use kitchen_timer::TickSource;
use log::debug;
use std::rc::Rc;

pub struct IntervalTicker {
    period_ms: u32,
    on_tick: Rc<dyn Fn()>,
    handle: Option<Interval>,
}

impl IntervalTicker {
    pub fn new(period_ms: u32, on_tick: Rc<dyn Fn()>) -> Self {
        Self {
            period_ms,
            on_tick,
            handle: None,
        }
    }
}

impl TickSource for IntervalTicker {
    fn start(&mut self) {
        if self.handle.is_some() {
            return;
        }
        let on_tick = self.on_tick.clone();
        self.handle = Some(Interval::new(self.period_ms, move || on_tick()));
        debug!("interval armed every {}ms", self.period_ms);
    }

    fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            // `stop` may run inside the interval's own callback (the final
            // tick), so the closure must outlive this call.
            let closure = handle.cancel();
            wasm_bindgen_futures::spawn_local(async move {
                drop(closure);
            });
            debug!("interval cleared");
        }
    }

    fn is_active(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for IntervalTicker {
    fn drop(&mut self) {
        self.stop();
    }
}
