use gloo_utils::window;
use kitchen_timer::{control_for_key, Control, Countdown, TimerConfig, TimerSnapshot};
use log::warn;
use std::cell::RefCell;
use std::fmt::Display;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{BeforeUnloadEvent, Element, HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

use crate::config::{LEAVE_WARNING, TICK_INTERVAL_MS};
use crate::render::RenderAdapter;
use crate::ticker::IntervalTicker;

pub type WebCountdown = Countdown<IntervalTicker, RenderAdapter>;
pub type SharedCountdown = Rc<RefCell<WebCountdown>>;

/// Holds the state and callbacks for a validated input field.
#[derive(Clone)]
pub struct ValidatedInput<T: 'static> {
    /// The current text content of the input field.
    pub text: String,
    /// An optional error message if the last validation failed.
    pub error: Option<String>,
    /// Callback for the text input's `oninput` event.
    pub on_text_input: Callback<InputEvent>,
    /// Validate the current text. Returns the parsed value, or records the
    /// error message and returns `None`.
    pub validate: Callback<(), Option<T>>,
}

/// Custom hook to manage state for a validated input field.
#[hook]
pub fn use_validated_input<T, E>(
    initial_text: &'static str,
    parse_and_validate: Rc<dyn Fn(&str) -> Result<T, E>>,
) -> ValidatedInput<T>
where
    T: 'static,
    E: Display + 'static,
{
    let initial_text = initial_text.to_string();
    let text_state_handle: UseStateHandle<String> = use_state(move || initial_text);
    let error_state_handle: UseStateHandle<Option<String>> = use_state(|| None::<String>);

    let on_text_input = {
        let text_setter = text_state_handle.clone();
        let error_setter = error_state_handle.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            text_setter.set(input.value());
            // Editing clears a stale message
            error_setter.set(None);
        })
    };

    let validate = {
        let current_text_handle = text_state_handle.clone();
        let error_setter = error_state_handle.clone();
        Callback::from(move |_: ()| match parse_and_validate(current_text_handle.as_str()) {
            Ok(value) => {
                error_setter.set(None);
                Some(value)
            }
            Err(err) => {
                error_setter.set(Some(err.to_string()));
                None
            }
        })
    };

    ValidatedInput {
        text: (*text_state_handle).clone(),
        error: (*error_state_handle).clone(),
        on_text_input,
        validate,
    }
}

/// Handle returned by [`use_countdown`].
pub struct CountdownHandle {
    pub snapshot: TimerSnapshot,
    pub countdown: SharedCountdown,
    pub toggle: Callback<()>,
    pub reset: Callback<()>,
    pub dismiss: Callback<()>,
}

/// Owns one countdown for the lifetime of the calling component.
///
/// The interval only holds a weak reference back to the countdown, so
/// unmounting drops the countdown and with it any active interval.
#[hook]
pub fn use_countdown(config: TimerConfig, tick_sound: NodeRef) -> CountdownHandle {
    let snapshot = use_state(|| TimerSnapshot::initial(config));

    let countdown = {
        let setter = snapshot.setter();
        use_state(move || {
            Rc::new_cyclic(|weak: &Weak<RefCell<WebCountdown>>| {
                let weak = weak.clone();
                let on_tick: Rc<dyn Fn()> = Rc::new(move || {
                    if let Some(countdown) = weak.upgrade() {
                        countdown.borrow_mut().tick();
                    }
                });
                RefCell::new(Countdown::new(
                    config,
                    IntervalTicker::new(TICK_INTERVAL_MS, on_tick),
                    RenderAdapter::new(setter, tick_sound),
                ))
            })
        })
    };
    let countdown: SharedCountdown = (*countdown).clone();

    let toggle = {
        let countdown = countdown.clone();
        Callback::from(move |_| {
            countdown.borrow_mut().toggle();
        })
    };
    let reset = {
        let countdown = countdown.clone();
        Callback::from(move |_| {
            countdown.borrow_mut().reset();
        })
    };
    let dismiss = {
        let countdown = countdown.clone();
        Callback::from(move |_| {
            countdown.borrow_mut().dismiss();
        })
    };

    CountdownHandle {
        snapshot: *snapshot,
        countdown,
        toggle,
        reset,
        dismiss,
    }
}

/// Window-level keyboard shortcuts: Space toggles, R resets.
#[hook]
pub fn use_key_bindings(countdown: SharedCountdown) {
    use_effect_with((), move |_| {
        let listener = Closure::<dyn Fn(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            let tag = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .map(|el| el.tag_name());
            match control_for_key(&event.code(), tag.as_deref()) {
                Some(Control::Toggle) => {
                    // Keep Space from scrolling the page
                    event.prevent_default();
                    countdown.borrow_mut().toggle();
                }
                Some(Control::Reset) => {
                    countdown.borrow_mut().reset();
                }
                _ => {}
            }
        });

        let window = window();
        if let Err(e) =
            window.add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())
        {
            warn!("Failed to install keyboard shortcuts: {:?}", e);
        }

        move || {
            let _ = window
                .remove_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref());
        }
    });
}

/// Ask the browser to confirm leaving the page while the countdown runs.
/// Browsers may skip the prompt; nothing depends on it.
#[hook]
pub fn use_leave_guard(countdown: SharedCountdown) {
    use_effect_with((), move |_| {
        let listener =
            Closure::<dyn Fn(BeforeUnloadEvent)>::new(move |event: BeforeUnloadEvent| {
                let running = countdown
                    .try_borrow()
                    .map(|c| c.is_running())
                    .unwrap_or(false);
                if running {
                    event.prevent_default();
                    event.set_return_value(LEAVE_WARNING);
                }
            });

        let window = window();
        if let Err(e) = window
            .add_event_listener_with_callback("beforeunload", listener.as_ref().unchecked_ref())
        {
            warn!("Failed to install leave guard: {:?}", e);
        }

        move || {
            let _ = window.remove_event_listener_with_callback(
                "beforeunload",
                listener.as_ref().unchecked_ref(),
            );
        }
    });
}
