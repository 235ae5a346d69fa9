//! Yew view components for the kitchen timer.
//!
//! Everything here renders from props and reports user actions through
//! callbacks; the views in `main.rs` own the state and side effects.

use gloo_timers::callback::Timeout;
use kitchen_timer::display::{ring_circumference, ring_dash_offset, TIMES_UP_TITLE};
use kitchen_timer::{toggle_label, DurationPreset, Phase};
use yew::prelude::*;

use crate::config::{
    FLASH_CLASS, PAUSED_CLASS, POP_ANIMATION_MS, POP_CLASS, RING_RADIUS, RING_STROKE_WIDTH,
    RING_VIEWBOX,
};

/// One category of preset buttons.
#[derive(Properties, PartialEq)]
pub struct PresetListProps {
    pub heading: AttrValue,
    pub presets: Vec<DurationPreset>,
    pub on_select: Callback<DurationPreset>,
}

#[function_component(PresetList)]
pub fn preset_list(props: &PresetListProps) -> Html {
    html! {
        <section class="preset-group">
            <h2>{ props.heading.clone() }</h2>
            <div class="preset-buttons">
                { props.presets.iter().map(|preset| {
                    let on_select = props.on_select.clone();
                    let chosen = preset.clone();
                    html! {
                        <button class="preset-btn" onclick={Callback::from(move |_| on_select.emit(chosen.clone()))}>
                            { preset.label.clone() }
                        </button>
                    }
                }).collect::<Html>() }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct CustomTimerFormProps {
    pub text: AttrValue,
    pub error: Option<AttrValue>,
    pub oninput: Callback<InputEvent>,
    pub onsubmit: Callback<()>,
}

#[function_component(CustomTimerForm)]
pub fn custom_timer_form(props: &CustomTimerFormProps) -> Html {
    let onsubmit = {
        let submit = props.onsubmit.clone();
        Callback::from(move |e: SubmitEvent| {
            // Stay on the page; navigation happens only for valid input
            e.prevent_default();
            submit.emit(());
        })
    };

    html! {
        <form id="custom-timer-form" class="custom-form" {onsubmit}>
            <label for="custom-minutes">{ "Custom (minutes):" }</label>
            <input
                type="number"
                id="custom-minutes"
                min="1"
                step="1"
                placeholder="e.g. 7"
                value={props.text.clone()}
                class={if props.error.is_some() { "invalid" } else { "" }}
                oninput={props.oninput.clone()}
            />
            <button type="submit" class="btn-primary">{ "Start" }</button>
            if let Some(ref error) = props.error {
                <div class="input-error">{ error.clone() }</div>
            }
        </form>
    }
}

/// Remaining time text; pops briefly whenever the text changes.
#[derive(Properties, PartialEq)]
pub struct TimeDisplayProps {
    pub text: AttrValue,
    pub urgent: bool,
}

/// Lets every text change after the first one through.
#[derive(Default)]
struct PopGate {
    mounted: bool,
}

impl PopGate {
    /// The text a display mounts with is not a change.
    fn on_text_change(&mut self) -> bool {
        std::mem::replace(&mut self.mounted, true)
    }
}

#[function_component(TimeDisplay)]
pub fn time_display(props: &TimeDisplayProps) -> Html {
    let popping = use_state(|| false);
    let gate = use_mut_ref(PopGate::default);

    {
        let popping = popping.clone();
        use_effect_with(props.text.clone(), move |_| {
            let handle = gate.borrow_mut().on_text_change().then(|| {
                popping.set(true);
                Timeout::new(POP_ANIMATION_MS, move || popping.set(false))
            });
            // Dropping the handle cancels a pop still pending from the last change
            move || drop(handle)
        });
    }

    html! {
        <div id="time" class={classes!(
            "time",
            (*popping).then_some(POP_CLASS),
            props.urgent.then_some(FLASH_CLASS),
        )}>
            { props.text.clone() }
        </div>
    }
}

/// Circular indicator whose visible arc is the remaining share of time.
#[derive(Properties, PartialEq)]
pub struct ProgressRingProps {
    pub progress: f64,
}

#[function_component(ProgressRing)]
pub fn progress_ring(props: &ProgressRingProps) -> Html {
    let circumference = ring_circumference(RING_RADIUS);
    let offset = ring_dash_offset(props.progress, circumference);
    let center = (RING_VIEWBOX / 2).to_string();

    html! {
        <svg class="progress-ring" viewBox={format!("0 0 {0} {0}", RING_VIEWBOX)}>
            <circle class="ring-track"
                cx={center.clone()} cy={center.clone()} r={RING_RADIUS.to_string()}
                fill="none" stroke-width={RING_STROKE_WIDTH.to_string()} />
            <circle id="circle" class="ring-progress"
                cx={center.clone()} cy={center} r={RING_RADIUS.to_string()}
                fill="none" stroke-width={RING_STROKE_WIDTH.to_string()}
                style={format!("stroke-dasharray: {circumference}; stroke-dashoffset: {offset};")} />
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct TimerControlsProps {
    pub phase: Phase,
    pub on_toggle: Callback<()>,
    pub on_reset: Callback<()>,
    pub on_back: Callback<()>,
}

#[function_component(TimerControls)]
pub fn timer_controls(props: &TimerControlsProps) -> Html {
    html! {
        <div class="controls">
            <button id="control-btn" class="btn-primary" onclick={props.on_toggle.reform(|_| ())}>
                { toggle_label(props.phase) }
            </button>
            <button id="reset-btn" class="btn-secondary" onclick={props.on_reset.reform(|_| ())}>
                { "Reset" }
            </button>
            <button id="back-btn" class="btn-secondary" onclick={props.on_back.reform(|_| ())}>
                { "Back" }
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CompletionPopupProps {
    pub visible: bool,
    pub on_close: Callback<()>,
}

#[function_component(CompletionPopup)]
pub fn completion_popup(props: &CompletionPopupProps) -> Html {
    if !props.visible {
        return html! {};
    }
    html! {
        <div id="done-popup" class="popup" role="alertdialog">
            <div class="popup-content">
                <h2>{ TIMES_UP_TITLE }</h2>
                <button id="close-popup" class="btn-primary" onclick={props.on_close.reform(|_| ())}>
                    { "OK" }
                </button>
            </div>
        </div>
    }
}

/// Wraps the timer face and marks it while paused.
#[derive(Properties, PartialEq)]
pub struct TimerFaceProps {
    pub phase: Phase,
    pub children: Html,
}

#[function_component(TimerFace)]
pub fn timer_face(props: &TimerFaceProps) -> Html {
    html! {
        <div class={classes!("timer-container", (props.phase == Phase::Paused).then_some(PAUSED_CLASS))}>
            { props.children.clone() }
        </div>
    }
}
