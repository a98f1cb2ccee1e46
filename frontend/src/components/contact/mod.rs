//! Public contact form plus the direct-contact card.
//!
//! A service clicked in the services section arrives through session
//! storage under [`SELECTED_SERVICE_KEY`] and pre-fills the service
//! select; the key is consumed on mount so a reload starts blank.

use crate::api::Order;
use crate::components::services::SELECTED_SERVICE_KEY;
use crate::context::DataContext;
use crate::query::run_query;
use common::cache::CacheKey;
use common::model::{CompanyInfo, Service};
use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::Contact;

impl Component for Contact {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let data = DataContext::of(ctx);

        let api = data.api.clone();
        run_query(
            data.cache.clone(),
            CacheKey::CompanyInfo,
            async move { api.select_single::<CompanyInfo>("company_info").await },
            ctx.link().callback(Msg::CompanyLoaded),
        );

        let api = data.api.clone();
        run_query(
            data.cache.clone(),
            CacheKey::Services,
            async move {
                api.select::<Service>(
                    "services",
                    &[("is_active", "true")],
                    Some(Order::asc("display_order")),
                )
                .await
            },
            ctx.link().callback(Msg::ServicesLoaded),
        );

        Contact::new(take_selected_service())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}

/// Reads and clears the service name stashed by the services section.
fn take_selected_service() -> String {
    let Some(storage) = web_sys::window().and_then(|w| w.session_storage().ok().flatten()) else {
        return String::new();
    };
    match storage.get_item(SELECTED_SERVICE_KEY) {
        Ok(Some(name)) => {
            let _ = storage.remove_item(SELECTED_SERVICE_KEY);
            name
        }
        _ => String::new(),
    }
}
