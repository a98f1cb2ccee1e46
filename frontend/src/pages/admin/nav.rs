use crate::app::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: AttrValue,
    pub accent: AttrValue,
}

/// Top bar shared by every admin screen below the dashboard: a back
/// link and the screen title.
pub struct AdminNav;

impl Component for AdminNav {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        AdminNav
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <nav class="admin-nav glass-card">
                <div class="container">
                    <Link<Route> to={Route::AdminDashboard} classes="btn ghost">
                        { "← Back" }
                    </Link<Route>>
                    <h1>
                        { props.title.clone() }
                        { " " }
                        <span class="text-gradient">{ props.accent.clone() }</span>
                    </h1>
                </div>
            </nav>
        }
    }
}
