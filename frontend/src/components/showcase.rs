use crate::api::{ApiError, Order};
use crate::context::{DataContext, LanguageHandle};
use crate::query::run_query;
use common::cache::CacheKey;
use common::model::PortfolioProject;
use yew::prelude::*;

pub enum Msg {
    Loaded(Result<Vec<PortfolioProject>, ApiError>),
    Context(LanguageHandle),
    Open(usize),
    Close,
    Step(isize),
}

/// Delivered-project showcase with a detail dialog and prev/next
/// stepping between projects.
pub struct Showcase {
    projects: Vec<PortfolioProject>,
    selected: Option<usize>,
    lang: LanguageHandle,
    _listen: ContextHandle<LanguageHandle>,
}

impl Component for Showcase {
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
            CacheKey::PortfolioProjects,
            async move {
                api.select::<PortfolioProject>(
                    "portfolio_projects",
                    &[("is_published", "true")],
                    Some(Order::asc("display_order")),
                )
                .await
            },
            ctx.link().callback(Msg::Loaded),
        );
        Showcase {
            projects: Vec::new(),
            selected: None,
            lang,
            _listen: listen,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok(projects)) => {
                self.projects = projects;
                true
            }
            Msg::Loaded(Err(_)) => false,
            Msg::Context(handle) => {
                self.lang = handle;
                true
            }
            Msg::Open(index) => {
                self.selected = Some(index);
                true
            }
            Msg::Close => {
                self.selected = None;
                true
            }
            Msg::Step(delta) => {
                if let Some(current) = self.selected {
                    let len = self.projects.len() as isize;
                    if len > 0 {
                        let next = (current as isize + delta).rem_euclid(len);
                        self.selected = Some(next as usize);
                    }
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <section class="showcase">
                <div class="container">
                    <div class="project-grid">
                        { for self.projects.iter().enumerate().map(|(index, project)| {
                            let onclick = ctx.link().callback(move |_| Msg::Open(index));
                            html! {
                                <div class="glass-card project" {onclick}>
                                    <img src={project.thumbnail_url.clone()} alt={project.project_name.clone()} />
                                    <h3>{ &project.project_name }</h3>
                                    <span class="category">{ &project.category }</span>
                                    <span class="open">{ self.lang.t("open") }</span>
                                </div>
                            }
                        }) }
                    </div>
                    { self.dialog(ctx) }
                </div>
            </section>
        }
    }
}

impl Showcase {
    fn dialog(&self, ctx: &Context<Self>) -> Html {
        let Some(project) = self.selected.and_then(|i| self.projects.get(i)) else {
            return Html::default();
        };
        let t = &self.lang;
        html! {
            <div class="dialog-backdrop" onclick={ctx.link().callback(|_| Msg::Close)}>
                <div class="dialog" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                    <img src={project.thumbnail_url.clone()} alt={project.project_name.clone()} />
                    <h3>{ &project.project_name }</h3>
                    <h4>{ t.t("project_details") }</h4>
                    <p>{ &project.description }</p>
                    <dl>
                        <dt>{ t.t("category") }</dt>
                        <dd>{ &project.category }</dd>
                        <dt>{ t.t("delivery") }</dt>
                        <dd>{ &project.delivery_time }</dd>
                    </dl>
                    <h4>{ t.t("key_features") }</h4>
                    <ul>
                        { for project.features.iter().map(|feature| html! { <li>{ feature }</li> }) }
                    </ul>
                    <div class="dialog-actions">
                        <button onclick={ctx.link().callback(|_| Msg::Step(-1))}>
                            { t.t("previous") }
                        </button>
                        <a
                            class="btn gradient-primary"
                            href={project.demo_url.clone()}
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            { t.t("open_full_site") }
                        </a>
                        <button onclick={ctx.link().callback(|_| Msg::Step(1))}>
                            { t.t("next") }
                        </button>
                    </div>
                </div>
            </div>
        }
    }
}
