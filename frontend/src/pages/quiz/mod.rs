mod completion_screen;
mod question_screen;
mod wheel_screen;

use shared::funnel::{Effect, Funnel, Step};
use web_sys::window;
use yew::prelude::*;

use crate::{audio, config, tracking};
use self::completion_screen::CompletionScreen;
use self::question_screen::QuestionScreen;
use self::wheel_screen::WheelScreen;

/// Executes the collaborator side effects a funnel transition produced.
///
/// `BeginSpin` and `ShowResult` are presentation-internal: the wheel
/// screen starts the animation itself, and the result modal renders
/// straight from the funnel state.
pub(crate) fn apply_effects(effects: &[Effect]) {
    for effect in effects {
        match effect {
            Effect::Track(event) => tracking::record_event(event),
            Effect::PlayCue(cue) => audio::play_cue(*cue),
            Effect::OpenRedemption { label } => open_redemption(label),
            Effect::BeginSpin { .. } | Effect::ShowResult { .. } => {}
        }
    }
}

fn open_redemption(label: &str) {
    let url = config::redemption_url(label);
    let Some(window) = window() else { return };
    if let Err(err) = window.open_with_url_and_target(&url, "_blank") {
        log::warn!("could not open redemption destination: {err:?}");
    }
}

#[function_component(QuizFunnel)]
pub fn quiz_funnel() -> Html {
    let funnel = use_state(Funnel::new);

    // Retention pixel whenever a new screen becomes visible
    {
        let step = funnel.step();
        use_effect_with(step, move |step| {
            let page = match step {
                Step::Question(i) => format!("question_{}", i + 1),
                Step::Completion => "completion".to_string(),
                Step::Wheel => "wheel".to_string(),
            };
            tracking::page_view(&page);
            || ()
        });
    }

    let on_select = {
        let funnel = funnel.clone();
        Callback::from(move |answer: String| {
            if let Step::Question(i) = funnel.step() {
                let mut next = (*funnel).clone();
                let effects = next.select_answer(i, answer);
                apply_effects(&effects);
                funnel.set(next);
            }
        })
    };

    let on_advance = {
        let funnel = funnel.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*funnel).clone();
            let effects = next.advance();
            apply_effects(&effects);
            funnel.set(next);
        })
    };

    match funnel.step() {
        Step::Question(index) => html! {
            <QuestionScreen
                {index}
                selected={funnel.answer(index).map(str::to_string)}
                percent={funnel.progress_percent()}
                can_advance={funnel.can_advance()}
                {on_select}
                on_next={on_advance}
            />
        },
        Step::Completion => html! { <CompletionScreen on_continue={on_advance} /> },
        Step::Wheel => html! { <WheelScreen {funnel} /> },
    }
}
