use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ProgressBarProps {
    pub percent: u32,
    pub caption: String,
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    html! {
        <div class="mb-6">
            <div class={styles::PROGRESS_TRACK}>
                <div
                    class={styles::PROGRESS_FILL}
                    style={format!("width: {}%", props.percent.min(100))}
                />
            </div>
            <p class={styles::PROGRESS_CAPTION}>{&props.caption}</p>
        </div>
    }
}
