use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub attempts_left: u32,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let button_text = if props.is_spinning {
        "SPINNING...".to_string()
    } else if props.attempts_left == 0 {
        "NO SPINS LEFT".to_string()
    } else {
        "SPIN NOW!".to_string()
    };

    let is_disabled = props.is_spinning || props.attempts_left == 0;

    html! {
        <div class="flex flex-col items-center">
            <button
                onclick={props.onclick.clone()}
                disabled={is_disabled}
                class={styles::SPIN_BUTTON}
            >
                {button_text}
            </button>
            if !props.is_spinning && props.attempts_left > 0 {
                <p class="mt-3 text-sm text-white/90 font-medium">
                    {format!("{} spin(s) remaining", props.attempts_left)}
                </p>
            }
        </div>
    }
}
