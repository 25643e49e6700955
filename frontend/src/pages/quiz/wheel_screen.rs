use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use shared::funnel::{Funnel, SpinPhase};
use shared::wheel::{self, MIN_FULL_SPINS, SEGMENTS, SEGMENT_ANGLE, SPIN_DURATION_MS};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::window;
use yew::prelude::*;

use crate::components::wheel_canvas::ease_out_cubic;
use crate::components::{FunnelHeader, ResultModal, SpinButton, WheelCanvas};
use crate::pages::quiz::apply_effects;
use crate::{audio, config};

#[derive(Properties, PartialEq)]
pub struct WheelScreenProps {
    pub funnel: UseStateHandle<Funnel>,
}

#[function_component(WheelScreen)]
pub fn wheel_screen(props: &WheelScreenProps) -> Html {
    let funnel = props.funnel.clone();
    let rotation = use_state(|| 0.0f64);

    let start_spin = {
        let funnel = funnel.clone();
        let rotation = rotation.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*funnel).clone();
            let effects = next.request_spin();
            if effects.is_empty() {
                return;
            }
            apply_effects(&effects);
            let attempt = next.attempt_count();
            funnel.set(next.clone());
            run_spin(funnel.clone(), next, rotation.clone(), attempt);
        })
    };

    let acknowledge = {
        let funnel = funnel.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*funnel).clone();
            let effects = next.acknowledge_result();
            apply_effects(&effects);
            funnel.set(next);
        })
    };

    let is_spinning = matches!(
        funnel.spin_phase(),
        SpinPhase::Spinning | SpinPhase::Stopping
    );
    let outcome = (funnel.spin_phase() == SpinPhase::Completed)
        .then(|| funnel.last_outcome().map(str::to_string))
        .flatten();

    html! {
        <div class={crate::styles::PAGE_WHEEL}>
            <FunnelHeader />
            <div class="flex-1 flex flex-col items-center justify-center p-6">
                <div class="text-center mb-8">
                    <h2 class="text-2xl font-bold text-white mb-2">
                        {"Spin the wheel to win your Mega Discount!"}
                    </h2>
                </div>

                <div class="relative mb-8 w-full max-w-[450px]">
                    <WheelCanvas rotation={*rotation} {is_spinning} />
                </div>

                <SpinButton
                    {is_spinning}
                    attempts_left={funnel.attempts_left()}
                    onclick={start_spin}
                />
            </div>

            <ResultModal {outcome} on_acknowledge={acknowledge} />
        </div>
    }
}

/// Drives one spin: picks the rigged target segment, animates the
/// rotation with requestAnimationFrame, and reports the outcome only
/// after the wheel has visually stopped. A timeout slightly past the
/// nominal duration guarantees eventual resolution even if no
/// animation frame ever fires.
///
/// `base` is the funnel right after `request_spin`. While a spin is in
/// flight no other transition can touch the funnel (a second spin is
/// blocked by the Spinning phase, acknowledgment requires Completed),
/// so settling from this copy is sound.
fn run_spin(
    handle: UseStateHandle<Funnel>,
    base: Funnel,
    rotation: UseStateHandle<f64>,
    attempt: u32,
) {
    let target = wheel::target_segment(attempt, &mut rand::thread_rng());
    let label = SEGMENTS[target].label;

    // Land the target segment's midpoint under the pointer (270° in
    // canvas coordinates), after at least MIN_FULL_SPINS full turns.
    let start_rotation = *rotation;
    let segment_mid = (target as f64 + 0.5) * SEGMENT_ANGLE;
    let target_position = (270.0 - segment_mid).rem_euclid(360.0);
    let adjustment = (target_position - start_rotation.rem_euclid(360.0)).rem_euclid(360.0);
    let final_rotation = start_rotation + MIN_FULL_SPINS * 360.0 + adjustment;

    let duration = f64::from(SPIN_DURATION_MS);
    let start_time = js_sys::Date::now();

    let settled = Rc::new(Cell::new(false));
    let settle: Rc<dyn Fn()> = {
        let rotation = rotation.clone();
        let settled = settled.clone();
        Rc::new(move || {
            if settled.replace(true) {
                return;
            }
            rotation.set(final_rotation);
            audio::stop_all_cues();
            let mut next = base.clone();
            next.begin_stop();
            let effects = next.complete_spin(label);
            apply_effects(&effects);
            handle.set(next);
        })
    };

    // Animation frame loop, kept alive through the shared ref
    let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let starter = frame.clone();
    {
        let rotation = rotation.clone();
        let settle = settle.clone();
        *starter.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let elapsed = js_sys::Date::now() - start_time;
            let progress = (elapsed / duration).min(1.0);
            let eased = ease_out_cubic(progress);
            rotation.set(start_rotation + (final_rotation - start_rotation) * eased);

            if elapsed < duration {
                if let Some(window) = window() {
                    let _ = window.request_animation_frame(
                        frame.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
                    );
                }
            } else {
                (*settle)();
            }
        }) as Box<dyn FnMut()>));
    }
    if let Some(window) = window() {
        let _ = window
            .request_animation_frame(starter.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }

    // Fallback resolution: the funnel must never stay Spinning forever
    spawn_local(async move {
        TimeoutFuture::new(SPIN_DURATION_MS + config::SPIN_FALLBACK_GRACE_MS).await;
        if !settled.get() {
            log::warn!("spin animation never completed, forcing resolution");
            (*settle)();
        }
    });
}
