pub mod audio;
pub mod components;
pub mod config;
pub mod pages;
pub mod styles;
pub mod tracking;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::quiz::QuizFunnel;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Quiz,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen w-full">
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Quiz | Route::NotFound => html! { <QuizFunnel /> },
    }
}
