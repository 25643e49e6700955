use yew::prelude::*;

use crate::components::FunnelHeader;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct CompletionScreenProps {
    pub on_continue: Callback<MouseEvent>,
}

#[function_component(CompletionScreen)]
pub fn completion_screen(props: &CompletionScreenProps) -> Html {
    html! {
        <div class={styles::PAGE}>
            <FunnelHeader />
            <div class={styles::CONTENT}>
                <div class={styles::CARD_CENTERED}>
                    <div class="mb-6">
                        <div class="text-6xl mb-4">{"🎉"}</div>
                        <h2 class="text-3xl font-bold text-gray-800 mb-4">
                            {"Congratulations on completing the quiz!"}
                        </h2>
                        <p class="text-gray-600 mb-6">
                            {"You've just unlocked a special Prime Day benefit - Amazon's \
                              biggest deals event, with limited-time real discounts and free \
                              shipping for Prime members."}
                        </p>
                    </div>

                    <div class={styles::UNLOCK_CALLOUT}>
                        <h3 class="font-bold text-yellow-800">{"Secret Roulette Unlocked!"}</h3>
                        <p class="text-yellow-700">
                            {"Spin now and discover your surprise discount of up to 80% OFF."}
                        </p>
                        <p class="text-sm text-yellow-600 mt-1">
                            {"Promotions valid for a limited time!"}
                        </p>
                    </div>

                    <button onclick={props.on_continue.clone()} class={styles::CTA_PRIMARY}>
                        {"🎡 SPIN THE ROULETTE WHEEL"}
                    </button>
                    <button onclick={props.on_continue.clone()} class={styles::CTA_SECONDARY}>
                        {"Claim"}
                    </button>
                </div>
            </div>
        </div>
    }
}
