use super::nav::AdminNav;
use crate::app::Route;
use yew::prelude::*;
use yew_router::prelude::*;

/// Placeholder settings screen; company details live on their own page.
pub struct Settings;

impl Component for Settings {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Settings
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="admin-page">
                <AdminNav title="Company" accent="Settings" />
                <div class="container">
                    <p class="muted">
                        { "Company information is edited on the " }
                        <Link<Route> to={Route::AdminCompanyInfo}>{ "Company Info" }</Link<Route>>
                        { " page." }
                    </p>
                </div>
            </div>
        }
    }
}
