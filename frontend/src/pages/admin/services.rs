use super::nav::AdminNav;
use yew::prelude::*;

/// Services are seeded directly in the datastore and read-only in the
/// UI; this screen just says so.
pub struct Services;

impl Component for Services {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Services
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="admin-page">
                <AdminNav title="Manage" accent="Services" />
                <div class="container">
                    <p class="muted">
                        { "Services are pre-configured. Edit them in the datastore if needed." }
                    </p>
                </div>
            </div>
        }
    }
}
