//! Main module for the Kitchen Timer application using Yew.
//! Resolves which view the page shows and wires hooks, state and components.

use gloo_utils::{document, window};
use kitchen_timer::selector::{MINUTES_PARAM, SELECTOR_PAGE};
use kitchen_timer::{
    list_presets, page_title, resolve_route, select_preset, submit_custom_duration,
    DurationPreset, FormValidationError, InputValidationError, NavigationRequest, Phase,
    PresetCategory, Route, TimerConfig,
};
use log::{info, warn};
use std::rc::Rc;
use web_sys::UrlSearchParams;
use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod render;
mod ticker;

use components::{
    CompletionPopup, CustomTimerForm, PresetList, ProgressRing, TimeDisplay, TimerControls,
    TimerFace,
};
use config::*;
use hooks::{use_countdown, use_key_bindings, use_leave_guard, use_validated_input};

// ──────────────────────────────────────────────────────────────────────────────
// Helper functions

/// Leave the current page. Page loads are the only channel between views.
fn navigate(href: &str) {
    info!("Navigating to {}", href);
    if let Err(e) = window().location().set_href(href) {
        warn!("Navigation to {} failed: {:?}", href, e);
    }
}

/// Read the current location and decide which view to show.
fn current_route() -> Result<Route, InputValidationError> {
    let location = window().location();
    let pathname = location.pathname().unwrap_or_default();
    let minutes = location
        .search()
        .ok()
        .and_then(|search| UrlSearchParams::new_with_str(&search).ok())
        .and_then(|params| params.get(MINUTES_PARAM));
    resolve_route(&pathname, minutes.as_deref())
}

// ──────────────────────────────────────────────────────────────────────────────

/// Preset buttons plus the custom-minutes form.
#[function_component(SelectorView)]
fn selector_view() -> Html {
    let custom = use_validated_input(
        DEFAULT_CUSTOM_MINUTES,
        Rc::new(submit_custom_duration)
            as Rc<dyn Fn(&str) -> Result<NavigationRequest, FormValidationError>>,
    );

    let on_select = Callback::from(|preset: DurationPreset| {
        navigate(&select_preset(&preset).href());
    });

    let on_submit = {
        let validate = custom.validate.clone();
        Callback::from(move |_| {
            if let Some(request) = validate.emit(()) {
                navigate(&request.href());
            }
        })
    };

    html! {
        <main class="selector">
            <h1>{ APP_TITLE }</h1>
            { PresetCategory::ALL.iter().map(|category| html! {
                <PresetList
                    heading={category.heading()}
                    presets={list_presets(*category)}
                    on_select={on_select.clone()}
                />
            }).collect::<Html>() }
            <CustomTimerForm
                text={custom.text.clone()}
                error={custom.error.clone().map(AttrValue::from)}
                oninput={custom.on_text_input.clone()}
                onsubmit={on_submit}
            />
        </main>
    }
}

#[derive(Properties, PartialEq)]
struct TimerViewProps {
    config: TimerConfig,
}

/// Countdown face, controls and completion popup for one validated duration.
#[function_component(TimerView)]
fn timer_view(props: &TimerViewProps) -> Html {
    let tick_sound = use_node_ref();
    let countdown = use_countdown(props.config, tick_sound.clone());
    use_key_bindings(countdown.countdown.clone());
    use_leave_guard(countdown.countdown.clone());

    // Initial title before the first tick
    {
        let snapshot = countdown.snapshot;
        use_effect_with((), move |_| {
            document().set_title(&page_title(&snapshot, APP_TITLE));
        });
    }

    let snapshot = countdown.snapshot;
    let on_back = Callback::from(|_| navigate(SELECTOR_PAGE));

    html! {
        <main class="timer">
            <TimerFace phase={snapshot.phase}>
                <ProgressRing progress={snapshot.progress()} />
                <TimeDisplay text={snapshot.display()} urgent={snapshot.is_urgent()} />
            </TimerFace>
            <TimerControls
                phase={snapshot.phase}
                on_toggle={countdown.toggle.clone()}
                on_reset={countdown.reset.clone()}
                on_back={on_back}
            />
            <CompletionPopup
                visible={snapshot.phase == Phase::Completed}
                on_close={countdown.dismiss.clone()}
            />
            <audio id="tick-sound" ref={tick_sound} src={TICK_SOUND_SRC} preload="auto" />
        </main>
    }
}

#[derive(Properties, PartialEq)]
struct InvalidTimerProps {
    message: AttrValue,
}

/// Shown for a timer link without a usable duration: tell the user, then
/// return to the selector.
#[function_component(InvalidTimer)]
fn invalid_timer(props: &InvalidTimerProps) -> Html {
    {
        let message = props.message.clone();
        use_effect_with((), move |_| {
            if let Err(e) = window().alert_with_message(&message) {
                warn!("Alert failed: {:?}", e);
            }
            navigate(SELECTOR_PAGE);
        });
    }

    html! {
        <main class="timer-invalid">
            <p class="input-error">{ props.message.clone() }</p>
            <a href={SELECTOR_PAGE}>{ "Back to timers" }</a>
        </main>
    }
}

/// Root component: one view per page load.
#[function_component]
pub fn App() -> Html {
    match current_route() {
        Ok(Route::Selector) => html! { <SelectorView /> },
        Ok(Route::Timer(config)) => html! { <TimerView {config} /> },
        Err(e) => html! { <InvalidTimer message={e.to_string()} /> },
    }
}

/// Entry point: initializes Yew renderer for the App component.
fn main() {
    // Set the panic hook to log detailed errors to the console
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
