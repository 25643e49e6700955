use shared::wheel;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ResultModalProps {
    /// Outcome to present; `None` keeps the modal hidden.
    pub outcome: Option<String>,
    pub on_acknowledge: Callback<MouseEvent>,
}

#[function_component(ResultModal)]
pub fn result_modal(props: &ResultModalProps) -> Html {
    let Some(outcome) = &props.outcome else {
        return html! {};
    };

    let body = if wheel::is_win(outcome) {
        html! {
            <>
                <div class="text-6xl mb-4">{"🤩"}</div>
                <h3 class="text-xl font-bold mb-4">{"Congratulations!"}</h3>
                <p class="text-gray-600 mb-6">
                    {"You just won the "}
                    <strong>{format!("Mega Discount of {} OFF", outcome)}</strong>
                </p>
                <button onclick={props.on_acknowledge.clone()} class={styles::MODAL_BUTTON}>
                    {"Redeem your prize"}
                </button>
            </>
        }
    } else {
        html! {
            <>
                <div class="text-6xl mb-4">{"😢"}</div>
                <h3 class="text-xl font-bold mb-4">{"So close!"}</h3>
                <p class="text-gray-600 mb-6">
                    {"You were selected for "}
                    <strong>{"01 extra chance"}</strong>
                    {" at the wheel!"}
                </p>
                <button onclick={props.on_acknowledge.clone()} class={styles::MODAL_BUTTON}>
                    {"Try Again"}
                </button>
            </>
        }
    };

    html! {
        <div class={styles::MODAL_OVERLAY}>
            <div class={styles::MODAL_CARD}>
                {body}
            </div>
        </div>
    }
}
