use super::nav::AdminNav;
use crate::api::{ApiError, Order};
use crate::context::DataContext;
use crate::query::{run_mutation, run_query};
use crate::toast;
use common::cache::{CacheKey, Entity};
use common::model::{Demo, NewDemo};
use common::text::{join_line_list, split_line_list};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

const CATEGORIES: [&str; 4] = [
    "Landing Pages",
    "Admin Panels",
    "E-commerce",
    "Web Applications",
];

pub enum Msg {
    Loaded(Result<Vec<Demo>, ApiError>),
    Refresh,
    OpenNew,
    OpenEdit(Demo),
    CloseDialog,
    SetName(String),
    SetCategory(String),
    SetDescription(String),
    SetFeatures(String),
    SetDemoUrl(String),
    SetPreviewImage(String),
    SetDisplayOrder(String),
    ToggleFeatured,
    TogglePublished,
    Save,
    Saved(Result<(), ApiError>),
    Delete(String),
    Deleted(Result<(), ApiError>),
}

/// Demo catalogue management: list ordered by `display_order`, one
/// dialog for both create and edit. Key features are edited as one
/// feature per line.
pub struct Demos {
    demos: Vec<Demo>,
    dialog_open: bool,
    editing: Option<String>,
    form: DemoForm,
    saving: bool,
    subscription: usize,
}

#[derive(Default)]
struct DemoForm {
    project_name: String,
    category: String,
    description: String,
    key_features: String,
    demo_url: String,
    preview_image: String,
    is_featured: bool,
    is_published: bool,
    display_order: i32,
}

impl DemoForm {
    fn blank(next_order: i32) -> Self {
        DemoForm {
            is_published: true,
            display_order: next_order,
            ..DemoForm::default()
        }
    }

    fn from_demo(demo: &Demo) -> Self {
        DemoForm {
            project_name: demo.project_name.clone(),
            category: demo.category.clone(),
            description: demo.description.clone(),
            key_features: join_line_list(&demo.key_features),
            demo_url: demo.demo_url.clone(),
            preview_image: demo.preview_image.clone(),
            is_featured: demo.is_featured,
            is_published: demo.is_published,
            display_order: demo.display_order,
        }
    }

    fn payload(&self) -> NewDemo {
        NewDemo {
            project_name: self.project_name.trim().to_string(),
            category: self.category.clone(),
            description: self.description.trim().to_string(),
            key_features: split_line_list(&self.key_features),
            demo_url: self.demo_url.trim().to_string(),
            preview_image: self.preview_image.trim().to_string(),
            is_featured: self.is_featured,
            is_published: self.is_published,
            display_order: self.display_order,
        }
    }
}

impl Component for Demos {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let data = DataContext::of(ctx);
        let subscription = data
            .cache
            .subscribe(CacheKey::DemosAdmin, ctx.link().callback(|_| Msg::Refresh));
        load(ctx.link().clone());
        Demos {
            demos: Vec::new(),
            dialog_open: false,
            editing: None,
            form: DemoForm::blank(1),
            saving: false,
            subscription,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok(demos)) => {
                self.demos = demos;
                true
            }
            Msg::Loaded(Err(_)) => false,
            Msg::Refresh => {
                load(ctx.link().clone());
                false
            }
            Msg::OpenNew => {
                self.editing = None;
                self.form = DemoForm::blank(self.demos.len() as i32 + 1);
                self.dialog_open = true;
                true
            }
            Msg::OpenEdit(demo) => {
                self.form = DemoForm::from_demo(&demo);
                self.editing = Some(demo.id);
                self.dialog_open = true;
                true
            }
            Msg::CloseDialog => {
                self.dialog_open = false;
                true
            }
            Msg::SetName(v) => {
                self.form.project_name = v;
                false
            }
            Msg::SetCategory(v) => {
                self.form.category = v;
                true
            }
            Msg::SetDescription(v) => {
                self.form.description = v;
                false
            }
            Msg::SetFeatures(v) => {
                self.form.key_features = v;
                false
            }
            Msg::SetDemoUrl(v) => {
                self.form.demo_url = v;
                false
            }
            Msg::SetPreviewImage(v) => {
                self.form.preview_image = v;
                false
            }
            Msg::SetDisplayOrder(v) => {
                self.form.display_order = v.parse().unwrap_or(0);
                false
            }
            Msg::ToggleFeatured => {
                self.form.is_featured = !self.form.is_featured;
                true
            }
            Msg::TogglePublished => {
                self.form.is_published = !self.form.is_published;
                true
            }
            Msg::Save => {
                if self.saving {
                    return false;
                }
                self.saving = true;
                let payload = self.form.payload();
                let editing = self.editing.clone();
                let data = DataContext::of(ctx);
                let api = data.api.clone();
                run_mutation(
                    data.cache.clone(),
                    Entity::Demo,
                    async move {
                        match editing {
                            Some(id) => {
                                let patch = serde_json::to_value(&payload)
                                    .map_err(|e| ApiError::Decode(e.to_string()))?;
                                api.update("demos", &id, &patch).await
                            }
                            None => api.insert("demos", &payload).await,
                        }
                    },
                    ctx.link().callback(Msg::Saved),
                );
                true
            }
            Msg::Saved(result) => {
                self.saving = false;
                match result {
                    Ok(()) => {
                        toast::info(if self.editing.is_some() {
                            "Demo updated."
                        } else {
                            "Demo created."
                        });
                        self.dialog_open = false;
                        self.editing = None;
                        self.form = DemoForm::blank(self.demos.len() as i32 + 1);
                    }
                    Err(_) => toast::error("Saving the demo failed."),
                }
                true
            }
            Msg::Delete(id) => {
                let data = DataContext::of(ctx);
                let api = data.api.clone();
                run_mutation(
                    data.cache.clone(),
                    Entity::Demo,
                    async move { api.delete("demos", &id).await },
                    ctx.link().callback(Msg::Deleted),
                );
                false
            }
            Msg::Deleted(Ok(())) => {
                toast::info("Demo deleted.");
                false
            }
            Msg::Deleted(Err(_)) => {
                toast::error("Deleting the demo failed.");
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="admin-page">
                <AdminNav title="Manage" accent="Demos" />
                <div class="container">
                    <button
                        class="btn gradient-primary"
                        onclick={ctx.link().callback(|_| Msg::OpenNew)}
                    >
                        { "Add Demo" }
                    </button>
                    <div class="card-grid">
                        { for self.demos.iter().map(|demo| card(ctx, demo)) }
                    </div>
                    { self.dialog(ctx) }
                </div>
            </div>
        }
    }

    fn destroy(&mut self, ctx: &Context<Self>) {
        DataContext::of(ctx).cache.unsubscribe(self.subscription);
    }
}

fn card(ctx: &Context<Demos>, demo: &Demo) -> Html {
    let edit = demo.clone();
    let delete_id = demo.id.clone();
    html! {
        <div class="glass-card demo">
            <img src={demo.preview_image.clone()} alt={demo.project_name.clone()} />
            <h3>{ &demo.project_name }</h3>
            <p class="category">{ &demo.category }</p>
            <div class="badges">
                if demo.is_featured {
                    <span class="badge">{ "Featured" }</span>
                }
                if !demo.is_published {
                    <span class="badge muted">{ "Hidden" }</span>
                }
            </div>
            <div class="actions">
                <button
                    class="btn outline"
                    onclick={ctx.link().callback(move |_| Msg::OpenEdit(edit.clone()))}
                >
                    { "Edit" }
                </button>
                <button
                    class="btn ghost danger"
                    onclick={ctx.link().callback(move |_| Msg::Delete(delete_id.clone()))}
                >
                    { "Delete" }
                </button>
            </div>
        </div>
    }
}

impl Demos {
    fn dialog(&self, ctx: &Context<Self>) -> Html {
        if !self.dialog_open {
            return Html::default();
        }
        let link = ctx.link();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Save
        });
        html! {
            <div class="dialog-backdrop" onclick={link.callback(|_| Msg::CloseDialog)}>
                <div class="dialog" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                    <h3>{ if self.editing.is_some() { "Edit Demo" } else { "Add Demo" } }</h3>
                    <form {onsubmit}>
                        <label>{ "Project Name" }</label>
                        <input
                            required=true
                            value={self.form.project_name.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                Msg::SetName(e.target_unchecked_into::<HtmlInputElement>().value())
                            })}
                        />

                        <label>{ "Category" }</label>
                        <select
                            onchange={link.callback(|e: Event| {
                                Msg::SetCategory(e.target_unchecked_into::<HtmlSelectElement>().value())
                            })}
                        >
                            <option value="" selected={self.form.category.is_empty()}>
                                { "Select category" }
                            </option>
                            { for CATEGORIES.iter().map(|category| html! {
                                <option
                                    value={*category}
                                    selected={self.form.category == *category}
                                >
                                    { *category }
                                </option>
                            }) }
                        </select>

                        <label>{ "Description" }</label>
                        <textarea
                            required=true
                            rows="3"
                            value={self.form.description.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                Msg::SetDescription(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                            })}
                        />

                        <label>{ "Key Features (one per line)" }</label>
                        <textarea
                            rows="4"
                            value={self.form.key_features.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                Msg::SetFeatures(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                            })}
                        />

                        <label>{ "Demo URL" }</label>
                        <input
                            value={self.form.demo_url.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                Msg::SetDemoUrl(e.target_unchecked_into::<HtmlInputElement>().value())
                            })}
                        />

                        <label>{ "Preview Image URL" }</label>
                        <input
                            value={self.form.preview_image.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                Msg::SetPreviewImage(e.target_unchecked_into::<HtmlInputElement>().value())
                            })}
                        />

                        <label>{ "Display Order" }</label>
                        <input
                            type="number"
                            value={self.form.display_order.to_string()}
                            oninput={link.callback(|e: InputEvent| {
                                Msg::SetDisplayOrder(e.target_unchecked_into::<HtmlInputElement>().value())
                            })}
                        />

                        <label class="checkbox">
                            <input
                                type="checkbox"
                                checked={self.form.is_featured}
                                onchange={link.callback(|_| Msg::ToggleFeatured)}
                            />
                            { "Featured" }
                        </label>
                        <label class="checkbox">
                            <input
                                type="checkbox"
                                checked={self.form.is_published}
                                onchange={link.callback(|_| Msg::TogglePublished)}
                            />
                            { "Published" }
                        </label>

                        <button type="submit" class="btn gradient-primary" disabled={self.saving}>
                            { if self.editing.is_some() { "Update Demo" } else { "Create Demo" } }
                        </button>
                    </form>
                </div>
            </div>
        }
    }
}

fn load(link: Scope<Demos>) {
    let data = DataContext::of_scope(&link);
    let api = data.api.clone();
    run_query(
        data.cache.clone(),
        CacheKey::DemosAdmin,
        async move {
            api.select::<Demo>("demos", &[], Some(Order::asc("display_order")))
                .await
        },
        link.callback(Msg::Loaded),
    );
}
