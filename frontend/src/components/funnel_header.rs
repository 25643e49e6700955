use yew::prelude::*;

use crate::styles;

#[function_component(FunnelHeader)]
pub fn funnel_header() -> Html {
    html! {
        <header class={styles::HEADER}>
            <div class="flex flex-col items-center">
                <img
                    src="/images/amazon-logo-white.svg"
                    alt="Amazon Logo"
                    width="120"
                    height="40"
                    class="mb-2"
                />
                <p class={styles::HEADER_TAGLINE}>{"prime day award winning quiz"}</p>
            </div>
        </header>
    }
}
