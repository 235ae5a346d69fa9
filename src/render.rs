//! Rendering adapter: pushes countdown snapshots into Yew state and handles
//! the page-level side effects (title, body class, tick audio).

use gloo_utils::{body, document};
use kitchen_timer::{page_title, Phase, TimerEvent, TimerObserver, TimerSnapshot};
use log::{debug, warn};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;
use yew::functional::UseStateSetter;
use yew::NodeRef;

use crate::config::{APP_TITLE, RUNNING_BODY_CLASS};

pub struct RenderAdapter {
    snapshot: UseStateSetter<TimerSnapshot>,
    tick_sound: NodeRef,
}

impl RenderAdapter {
    pub fn new(snapshot: UseStateSetter<TimerSnapshot>, tick_sound: NodeRef) -> Self {
        Self {
            snapshot,
            tick_sound,
        }
    }

    fn publish(&self, snapshot: &TimerSnapshot) {
        self.snapshot.set(*snapshot);
        document().set_title(&page_title(snapshot, APP_TITLE));
        let running = snapshot.phase == Phase::Running;
        if let Err(e) = body()
            .class_list()
            .toggle_with_force(RUNNING_BODY_CLASS, running)
        {
            warn!("Failed to update body class: {:?}", e);
        }
    }

    fn audio(&self) -> Option<HtmlAudioElement> {
        self.tick_sound.cast::<HtmlAudioElement>()
    }

    fn play_tick(&self) {
        let Some(audio) = self.audio() else {
            return;
        };
        audio.set_current_time(0.0);
        if let Err(e) = audio.play() {
            debug!("Tick sound not played: {:?}", e);
        }
    }

    /// Play and immediately stop the tick sound during a user gesture so the
    /// browser allows the interval-driven plays that follow.
    fn prime_audio(&self) {
        let Some(audio) = self.audio() else {
            return;
        };
        let promise: js_sys::Promise = match audio.play() {
            Ok(p) => p,
            Err(e) => {
                debug!("Audio priming refused: {:?}", e);
                return;
            }
        };
        wasm_bindgen_futures::spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => {
                    if let Err(e) = audio.pause() {
                        warn!("Failed to pause primed audio: {:?}", e);
                    }
                    audio.set_current_time(0.0);
                }
                // Autoplay was prevented
                Err(e) => debug!("Audio priming rejected: {:?}", e),
            }
        });
    }
}

impl TimerObserver for RenderAdapter {
    fn on_tick(&mut self, snapshot: &TimerSnapshot) {
        self.play_tick();
        self.publish(snapshot);
    }

    fn on_event(&mut self, event: TimerEvent, snapshot: &TimerSnapshot) {
        if matches!(event, TimerEvent::Started | TimerEvent::Resumed) {
            self.prime_audio();
        }
        self.publish(snapshot);
    }
}
