use crate::app::Route;
use gloo_console::warn;
use yew::prelude::*;
use yew_router::prelude::*;

pub struct NotFound;

impl Component for NotFound {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        if let Some(window) = web_sys::window() {
            if let Ok(path) = window.location().pathname() {
                warn!(format!("no route matches {path}"));
            }
        }
        NotFound
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="not-found">
                <h1>{ "404" }</h1>
                <p>{ "Oops! Page not found" }</p>
                <Link<Route> to={Route::Home}>{ "Return to Home" }</Link<Route>>
            </div>
        }
    }
}
