use crate::api::{ApiError, Order};
use crate::context::{DataContext, LanguageHandle};
use crate::query::run_query;
use common::cache::CacheKey;
use common::model::Service;
use yew::prelude::*;

/// Session-storage key carrying a clicked service name into the contact
/// form, read once by the form on mount.
pub const SELECTED_SERVICE_KEY: &str = "selectedService";

pub enum Msg {
    Loaded(Result<Vec<Service>, ApiError>),
    Context(LanguageHandle),
    Pick(String),
}

pub struct Services {
    services: Vec<Service>,
    lang: LanguageHandle,
    _listen: ContextHandle<LanguageHandle>,
}

impl Component for Services {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let (lang, listen) = ctx
            .link()
            .context(ctx.link().callback(Msg::Context))
            .expect("language context missing");
        let data = DataContext::of(ctx);
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
            ctx.link().callback(Msg::Loaded),
        );
        Services {
            services: Vec::new(),
            lang,
            _listen: listen,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok(services)) => {
                self.services = services;
                true
            }
            Msg::Loaded(Err(_)) => false,
            Msg::Context(handle) => {
                self.lang = handle;
                true
            }
            Msg::Pick(service_name) => {
                remember_selection(&service_name);
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_hash("#contact");
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <section id="services" class="services">
                <div class="container">
                    <h2>
                        { self.lang.t("services_title") }
                        { " " }
                        <span class="text-gradient">{ self.lang.t("services_word") }</span>
                    </h2>
                    <div class="service-grid">
                        { for self.services.iter().map(|service| {
                            let name = service.service_name.clone();
                            let onclick = ctx.link().callback(move |_| Msg::Pick(name.clone()));
                            html! {
                                <div class="glass-card service" {onclick}>
                                    <i class="material-icons">{ &service.icon_name }</i>
                                    <h3>{ &service.service_name }</h3>
                                    <p>{ &service.description }</p>
                                </div>
                            }
                        }) }
                    </div>
                </div>
            </section>
        }
    }
}

fn remember_selection(service_name: &str) {
    if let Some(storage) = web_sys::window().and_then(|w| w.session_storage().ok().flatten()) {
        let _ = storage.set_item(SELECTED_SERVICE_KEY, service_name);
    }
}
