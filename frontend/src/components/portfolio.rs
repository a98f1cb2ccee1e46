use crate::api::{ApiError, Order};
use crate::context::{DataContext, LanguageHandle};
use crate::query::run_query;
use common::cache::CacheKey;
use common::model::Demo;
use yew::prelude::*;

pub enum Msg {
    Loaded(Result<Vec<Demo>, ApiError>),
    Context(LanguageHandle),
    Filter(Option<String>),
}

/// Published demo projects, filterable by category. `None` means all.
pub struct Portfolio {
    demos: Vec<Demo>,
    category: Option<String>,
    lang: LanguageHandle,
    _listen: ContextHandle<LanguageHandle>,
}

impl Component for Portfolio {
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
            CacheKey::Demos,
            async move {
                api.select::<Demo>(
                    "demos",
                    &[("is_published", "true")],
                    Some(Order::asc("display_order")),
                )
                .await
            },
            ctx.link().callback(Msg::Loaded),
        );
        Portfolio {
            demos: Vec::new(),
            category: None,
            lang,
            _listen: listen,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok(demos)) => {
                self.demos = demos;
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
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let mut categories: Vec<String> =
            self.demos.iter().map(|d| d.category.clone()).collect();
        categories.sort();
        categories.dedup();

        let visible = self
            .demos
            .iter()
            .filter(|d| self.category.as_ref().is_none_or(|c| &d.category == c));

        html! {
            <section id="portfolio" class="portfolio">
                <div class="container">
                    <h2>
                        { self.lang.t("portfolio_title") }
                        { " " }
                        <span class="text-gradient">{ self.lang.t("portfolio_build") }</span>
                    </h2>
                    <p class="subtitle">{ self.lang.t("portfolio_subtitle") }</p>

                    <div class="filter-bar">
                        <button
                            class={classes!("filter-btn", self.category.is_none().then_some("active"))}
                            onclick={ctx.link().callback(|_| Msg::Filter(None))}
                        >
                            { "All" }
                        </button>
                        { for categories.iter().map(|category| {
                            let active = self.category.as_deref() == Some(category.as_str());
                            let picked = category.clone();
                            html! {
                                <button
                                    class={classes!("filter-btn", active.then_some("active"))}
                                    onclick={ctx.link().callback(move |_| Msg::Filter(Some(picked.clone())))}
                                >
                                    { category }
                                </button>
                            }
                        }) }
                    </div>

                    <div class="demo-grid">
                        { for visible.map(|demo| self.demo_card(demo)) }
                    </div>
                </div>
            </section>
        }
    }
}

impl Portfolio {
    fn demo_card(&self, demo: &Demo) -> Html {
        html! {
            <div class="glass-card demo">
                <img src={demo.preview_image.clone()} alt={demo.project_name.clone()} />
                <div class="demo-body">
                    <span class="category">{ &demo.category }</span>
                    <h3>{ &demo.project_name }</h3>
                    <p>{ &demo.description }</p>
                    <ul class="features">
                        { for demo.key_features.iter().map(|feature| html! { <li>{ feature }</li> }) }
                    </ul>
                    <a
                        class="btn outline"
                        href={demo.demo_url.clone()}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        { self.lang.t("view_demo") }
                    </a>
                </div>
            </div>
        }
    }
}
