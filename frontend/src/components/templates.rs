use crate::api::{ApiError, Order};
use crate::context::{DataContext, LanguageHandle};
use crate::query::run_query;
use common::cache::CacheKey;
use common::model::{Service, ServiceTemplate};
use yew::prelude::*;

pub enum Msg {
    Services(Result<Vec<Service>, ApiError>),
    Loaded(Result<Vec<ServiceTemplate>, ApiError>),
    Context(LanguageHandle),
    Filter(Option<String>),
    Preview(usize),
    Close,
}

/// Ready-made template gallery. Filter buttons come from the active
/// service names, since `ServiceTemplate::category` points at a
/// service; previewing opens the live demo in an embedded frame.
pub struct Templates {
    services: Vec<Service>,
    templates: Vec<ServiceTemplate>,
    category: Option<String>,
    previewing: Option<usize>,
    lang: LanguageHandle,
    _listen: ContextHandle<LanguageHandle>,
}

impl Component for Templates {
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
            ctx.link().callback(Msg::Services),
        );

        let api = data.api.clone();
        run_query(
            data.cache.clone(),
            CacheKey::ServiceTemplates,
            async move {
                api.select::<ServiceTemplate>(
                    "service_templates",
                    &[("is_active", "true")],
                    Some(Order::asc("display_order")),
                )
                .await
            },
            ctx.link().callback(Msg::Loaded),
        );

        Templates {
            services: Vec::new(),
            templates: Vec::new(),
            category: None,
            previewing: None,
            lang,
            _listen: listen,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Services(Ok(services)) => {
                self.services = services;
                true
            }
            Msg::Services(Err(_)) => false,
            Msg::Loaded(Ok(templates)) => {
                self.templates = templates;
                true
            }
            Msg::Loaded(Err(_)) => false,
            Msg::Context(handle) => {
                self.lang = handle;
                true
            }
            Msg::Filter(category) => {
                self.category = category;
                true
            }
            Msg::Preview(index) => {
                self.previewing = Some(index);
                true
            }
            Msg::Close => {
                self.previewing = None;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let visible: Vec<(usize, &ServiceTemplate)> = self
            .templates
            .iter()
            .enumerate()
            .filter(|(_, t)| self.category.as_ref().is_none_or(|c| &t.category == c))
            .collect();

        html! {
            <section id="templates" class="templates">
                <div class="container">
                    <h2>
                        { self.lang.t("templates_title") }
                        { " " }
                        <span class="text-gradient">{ self.lang.t("templates_accent") }</span>
                    </h2>
                    <p class="subtitle">{ self.lang.t("templates_subtitle") }</p>

                    <div class="filter-bar">
                        <button
                            class={classes!("filter-btn", self.category.is_none().then_some("active"))}
                            onclick={ctx.link().callback(|_| Msg::Filter(None))}
                        >
                            { "All" }
                        </button>
                        { for self.services.iter().map(|service| {
                            let active =
                                self.category.as_deref() == Some(service.service_name.as_str());
                            let picked = service.service_name.clone();
                            html! {
                                <button
                                    class={classes!("filter-btn", active.then_some("active"))}
                                    onclick={ctx.link().callback(move |_| Msg::Filter(Some(picked.clone())))}
                                >
                                    { &service.service_name }
                                </button>
                            }
                        }) }
                    </div>

                    <div class="template-grid">
                        { for visible.into_iter().map(|(index, template)| self.card(ctx, index, template)) }
                    </div>
                    { self.dialog(ctx) }
                </div>
            </section>
        }
    }
}

impl Templates {
    fn card(&self, ctx: &Context<Self>, index: usize, template: &ServiceTemplate) -> Html {
        html! {
            <div class="glass-card template">
                <img src={template.preview_url.clone()} alt={template.template_name.clone()} />
                <div class="template-body">
                    <h3>{ &template.template_name }</h3>
                    <p>{ &template.description }</p>
                    <div class="template-actions">
                        <button
                            class="btn outline"
                            onclick={ctx.link().callback(move |_| Msg::Preview(index))}
                        >
                            { self.lang.t("view_demo") }
                        </button>
                        <a
                            class="btn gradient-primary"
                            href={template.demo_url.clone()}
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            { self.lang.t("open") }
                        </a>
                    </div>
                </div>
            </div>
        }
    }

    fn dialog(&self, ctx: &Context<Self>) -> Html {
        let Some(template) = self.previewing.and_then(|i| self.templates.get(i)) else {
            return Html::default();
        };
        html! {
            <div class="dialog-backdrop" onclick={ctx.link().callback(|_| Msg::Close)}>
                <div
                    class="dialog preview"
                    onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                >
                    <h3>{ &template.template_name }</h3>
                    <iframe
                        src={template.demo_url.clone()}
                        title={template.template_name.clone()}
                    />
                </div>
            </div>
        }
    }
}
