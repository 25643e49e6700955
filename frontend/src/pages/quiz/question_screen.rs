use shared::quiz::{QUESTIONS, QUESTION_COUNT};
use yew::prelude::*;

use crate::components::{FunnelHeader, ProgressBar};
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct QuestionScreenProps {
    pub index: usize,
    pub selected: Option<String>,
    pub percent: u32,
    pub can_advance: bool,
    pub on_select: Callback<String>,
    pub on_next: Callback<MouseEvent>,
}

#[function_component(QuestionScreen)]
pub fn question_screen(props: &QuestionScreenProps) -> Html {
    let question = &QUESTIONS[props.index];

    html! {
        <div class={styles::PAGE}>
            <FunnelHeader />
            <div class={styles::CONTENT}>
                <div class={styles::CARD}>
                    <ProgressBar
                        percent={props.percent}
                        caption={format!(
                            "Question {} of {} ({}%)",
                            props.index + 1,
                            QUESTION_COUNT,
                            props.percent
                        )}
                    />

                    <div class="text-center mb-6">
                        <p class={styles::QUESTION_KICKER}>{"Answer and Win!"}</p>
                        <h2 class={styles::QUESTION_PROMPT}>{question.prompt}</h2>
                    </div>

                    <div class="space-y-4 mb-8">
                        { for question.options.iter().map(|&option| {
                            let selected = props.selected.as_deref() == Some(option);
                            let onclick = {
                                let on_select = props.on_select.clone();
                                Callback::from(move |_: MouseEvent| on_select.emit(option.to_string()))
                            };
                            html! {
                                <button
                                    type="button"
                                    class={if selected { styles::OPTION_ROW_SELECTED } else { styles::OPTION_ROW }}
                                    {onclick}
                                >
                                    <span class="w-4 h-4 rounded-full border-2 border-orange-500 flex items-center justify-center flex-shrink-0">
                                        if selected {
                                            <span class="w-2 h-2 rounded-full bg-orange-500"></span>
                                        }
                                    </span>
                                    <span class="flex-1">{option}</span>
                                </button>
                            }
                        })}
                    </div>

                    <button
                        class={styles::NEXT_BUTTON}
                        disabled={!props.can_advance}
                        onclick={props.on_next.clone()}
                    >
                        {"Next"}
                    </button>
                </div>
            </div>
        </div>
    }
}
