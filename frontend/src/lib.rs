pub mod api;
pub mod config;
pub mod pages;
pub mod styles;

use yew::prelude::*;
use yew_router::prelude::*;
use crate::pages::lucky_wheel::LuckyWheel;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
   #[at("/")] Home,
   #[at("/lucky-wheel")] LuckyWheel,
   #[not_found]
   #[at("/404")] NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen w-full">
                <div class="mx-auto">
                    <Switch<Route> render={switch} />
                </div>
            </div>
        </BrowserRouter>
    }
}

pub fn switch(route: Route) -> Html {
   match route {
       Route::Home | Route::LuckyWheel => html! { <LuckyWheel /> },
       Route::NotFound => html! { <Redirect<Route> to={Route::LuckyWheel} /> },
   }
}
