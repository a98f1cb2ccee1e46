use super::nav::AdminNav;
use crate::api::{ApiClient, ApiError, Order};
use crate::context::DataContext;
use crate::query::{run_mutation, run_query};
use crate::toast;
use common::cache::{CacheKey, Entity};
use common::model::{NewProject, PortfolioProject};
use common::text::{join_line_list, split_line_list};
use gloo_console::warn;
use uuid::Uuid;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

const BUCKET: &str = "project-screenshots";

pub enum Msg {
    Loaded(Result<Vec<PortfolioProject>, ApiError>),
    Refresh,
    OpenNew,
    OpenEdit(PortfolioProject),
    CloseDialog,
    SetName(String),
    SetCategory(String),
    SetDescription(String),
    SetDemoUrl(String),
    SetDeliveryTime(String),
    SetFeatures(String),
    SetDisplayOrder(String),
    TogglePublished,
    PickThumbnail(Option<web_sys::File>),
    Save,
    Saved(Result<(), ApiError>),
    Delete(String),
    Deleted(Result<(), ApiError>),
}

/// Portfolio project management. A picked thumbnail is uploaded to the
/// screenshot bucket before the row write; if the write then fails the
/// uploaded object is removed again so the bucket does not collect
/// orphans.
pub struct Portfolio {
    projects: Vec<PortfolioProject>,
    dialog_open: bool,
    editing: Option<String>,
    form: ProjectForm,
    thumbnail: Option<web_sys::File>,
    saving: bool,
    subscription: usize,
}

#[derive(Default)]
struct ProjectForm {
    project_name: String,
    category: String,
    description: String,
    demo_url: String,
    thumbnail_url: String,
    delivery_time: String,
    features: String,
    is_published: bool,
    display_order: i32,
}

impl ProjectForm {
    fn blank(next_order: i32) -> Self {
        ProjectForm {
            is_published: true,
            display_order: next_order,
            ..ProjectForm::default()
        }
    }

    fn from_project(project: &PortfolioProject) -> Self {
        ProjectForm {
            project_name: project.project_name.clone(),
            category: project.category.clone(),
            description: project.description.clone(),
            demo_url: project.demo_url.clone(),
            thumbnail_url: project.thumbnail_url.clone(),
            delivery_time: project.delivery_time.clone(),
            features: join_line_list(&project.features),
            is_published: project.is_published,
            display_order: project.display_order,
        }
    }

    fn payload(&self, thumbnail_url: String) -> NewProject {
        NewProject {
            project_name: self.project_name.trim().to_string(),
            category: self.category.trim().to_string(),
            description: self.description.trim().to_string(),
            features: split_line_list(&self.features),
            demo_url: self.demo_url.trim().to_string(),
            thumbnail_url,
            delivery_time: self.delivery_time.trim().to_string(),
            is_published: self.is_published,
            display_order: self.display_order,
        }
    }
}

impl Component for Portfolio {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let data = DataContext::of(ctx);
        let subscription = data.cache.subscribe(
            CacheKey::PortfolioAdmin,
            ctx.link().callback(|_| Msg::Refresh),
        );
        load(ctx.link().clone());
        Portfolio {
            projects: Vec::new(),
            dialog_open: false,
            editing: None,
            form: ProjectForm::default(),
            thumbnail: None,
            saving: false,
            subscription,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok(projects)) => {
                self.projects = projects;
                true
            }
            Msg::Loaded(Err(_)) => false,
            Msg::Refresh => {
                load(ctx.link().clone());
                false
            }
            Msg::OpenNew => {
                self.editing = None;
                self.form = ProjectForm::blank(self.projects.len() as i32 + 1);
                self.thumbnail = None;
                self.dialog_open = true;
                true
            }
            Msg::OpenEdit(project) => {
                self.form = ProjectForm::from_project(&project);
                self.editing = Some(project.id);
                self.thumbnail = None;
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
                false
            }
            Msg::SetDescription(v) => {
                self.form.description = v;
                false
            }
            Msg::SetDemoUrl(v) => {
                self.form.demo_url = v;
                false
            }
            Msg::SetDeliveryTime(v) => {
                self.form.delivery_time = v;
                false
            }
            Msg::SetFeatures(v) => {
                self.form.features = v;
                false
            }
            Msg::SetDisplayOrder(v) => {
                self.form.display_order = v.parse().unwrap_or(0);
                false
            }
            Msg::TogglePublished => {
                self.form.is_published = !self.form.is_published;
                true
            }
            Msg::PickThumbnail(file) => {
                self.thumbnail = file;
                true
            }
            Msg::Save => {
                if self.saving {
                    return false;
                }
                self.saving = true;
                let form_url = self.form.thumbnail_url.clone();
                let payload = self.form.payload(String::new());
                let editing = self.editing.clone();
                let file = self.thumbnail.clone();
                let data = DataContext::of(ctx);
                let api = data.api.clone();
                run_mutation(
                    data.cache.clone(),
                    Entity::PortfolioProject,
                    async move {
                        save_project(&api, editing, payload, form_url, file).await
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
                            "Project updated."
                        } else {
                            "Project added."
                        });
                        self.dialog_open = false;
                        self.editing = None;
                        self.thumbnail = None;
                    }
                    Err(_) => toast::error("Saving the project failed."),
                }
                true
            }
            Msg::Delete(id) => {
                let data = DataContext::of(ctx);
                let api = data.api.clone();
                run_mutation(
                    data.cache.clone(),
                    Entity::PortfolioProject,
                    async move { api.delete("portfolio_projects", &id).await },
                    ctx.link().callback(Msg::Deleted),
                );
                false
            }
            Msg::Deleted(Ok(())) => {
                toast::info("Project deleted.");
                false
            }
            Msg::Deleted(Err(_)) => {
                toast::error("Deleting the project failed.");
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="admin-page">
                <AdminNav title="Portfolio" accent="Projects" />
                <div class="container">
                    <button
                        class="btn gradient-primary"
                        onclick={ctx.link().callback(|_| Msg::OpenNew)}
                    >
                        { "Add Project" }
                    </button>
                    <div class="glass-card table-card">
                        <table>
                            <thead>
                                <tr>
                                    <th>{ "Thumbnail" }</th>
                                    <th>{ "Name" }</th>
                                    <th>{ "Category" }</th>
                                    <th>{ "Delivery" }</th>
                                    <th>{ "Published" }</th>
                                    <th>{ "Actions" }</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for self.projects.iter().map(|project| row(ctx, project)) }
                            </tbody>
                        </table>
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

/// Uploads the picked thumbnail (when any), then writes the row. A
/// fresh upload is deleted again when the row write fails.
async fn save_project(
    api: &ApiClient,
    editing: Option<String>,
    mut payload: NewProject,
    existing_url: String,
    file: Option<web_sys::File>,
) -> Result<(), ApiError> {
    let uploaded = match &file {
        Some(file) => {
            let name = object_name(&file.name());
            let url = api.upload(BUCKET, &name, file).await?;
            payload.thumbnail_url = url;
            Some(name)
        }
        None => {
            payload.thumbnail_url = existing_url;
            None
        }
    };

    let written = match editing {
        Some(id) => {
            let patch = serde_json::to_value(&payload)
                .map_err(|e| ApiError::Decode(e.to_string()))?;
            api.update("portfolio_projects", &id, &patch).await
        }
        None => api.insert("portfolio_projects", &payload).await,
    };

    if written.is_err() {
        if let Some(name) = uploaded {
            if api.remove_object(BUCKET, &name).await.is_err() {
                warn!(format!("orphaned upload left in {BUCKET}: {name}"));
            }
        }
    }
    written
}

/// Random object name keeping the file's extension.
fn object_name(file_name: &str) -> String {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty())
        .unwrap_or("bin");
    format!("{}.{ext}", Uuid::new_v4())
}

fn row(ctx: &Context<Portfolio>, project: &PortfolioProject) -> Html {
    let edit = project.clone();
    let delete_id = project.id.clone();
    html! {
        <tr>
            <td>
                <img src={project.thumbnail_url.clone()} alt={project.project_name.clone()} />
            </td>
            <td class="name">{ &project.project_name }</td>
            <td>{ &project.category }</td>
            <td>{ &project.delivery_time }</td>
            <td>{ if project.is_published { "Yes" } else { "No" } }</td>
            <td>
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
            </td>
        </tr>
    }
}

impl Portfolio {
    fn dialog(&self, ctx: &Context<Self>) -> Html {
        if !self.dialog_open {
            return Html::default();
        }
        let link = ctx.link();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Save
        });
        let pick = link.callback(|e: Event| {
            let input = e.target_unchecked_into::<HtmlInputElement>();
            Msg::PickThumbnail(input.files().and_then(|files| files.get(0)))
        });
        html! {
            <div class="dialog-backdrop" onclick={link.callback(|_| Msg::CloseDialog)}>
                <div class="dialog" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                    <h3>{ if self.editing.is_some() { "Edit Project" } else { "Add Project" } }</h3>
                    <form {onsubmit}>
                        <label>{ "Thumbnail" }</label>
                        if !self.form.thumbnail_url.is_empty() && self.thumbnail.is_none() {
                            <img class="preview" src={self.form.thumbnail_url.clone()} />
                        }
                        <input type="file" accept="image/*" onchange={pick} />

                        <label>{ "Project Name *" }</label>
                        <input
                            required=true
                            value={self.form.project_name.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                Msg::SetName(e.target_unchecked_into::<HtmlInputElement>().value())
                            })}
                        />

                        <label>{ "Category *" }</label>
                        <input
                            required=true
                            value={self.form.category.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                Msg::SetCategory(e.target_unchecked_into::<HtmlInputElement>().value())
                            })}
                        />

                        <label>{ "Description *" }</label>
                        <textarea
                            required=true
                            rows="3"
                            value={self.form.description.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                Msg::SetDescription(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                            })}
                        />

                        <label>{ "Demo URL *" }</label>
                        <input
                            required=true
                            value={self.form.demo_url.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                Msg::SetDemoUrl(e.target_unchecked_into::<HtmlInputElement>().value())
                            })}
                        />

                        <label>{ "Delivery Time *" }</label>
                        <input
                            required=true
                            placeholder="e.g. 3 days"
                            value={self.form.delivery_time.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                Msg::SetDeliveryTime(e.target_unchecked_into::<HtmlInputElement>().value())
                            })}
                        />

                        <label>{ "Features (one per line)" }</label>
                        <textarea
                            rows="4"
                            value={self.form.features.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                Msg::SetFeatures(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                            })}
                        />

                        <label class="checkbox">
                            <input
                                type="checkbox"
                                checked={self.form.is_published}
                                onchange={link.callback(|_| Msg::TogglePublished)}
                            />
                            { "Published" }
                        </label>

                        <label>{ "Display Order" }</label>
                        <input
                            type="number"
                            value={self.form.display_order.to_string()}
                            oninput={link.callback(|e: InputEvent| {
                                Msg::SetDisplayOrder(e.target_unchecked_into::<HtmlInputElement>().value())
                            })}
                        />

                        <button type="submit" class="btn gradient-primary" disabled={self.saving}>
                            { if self.saving { "Uploading..." } else { "Save" } }
                        </button>
                    </form>
                </div>
            </div>
        }
    }
}

fn load(link: Scope<Portfolio>) {
    let data = DataContext::of_scope(&link);
    let api = data.api.clone();
    run_query(
        data.cache.clone(),
        CacheKey::PortfolioAdmin,
        async move {
            api.select::<PortfolioProject>(
                "portfolio_projects",
                &[],
                Some(Order::asc("display_order")),
            )
            .await
        },
        link.callback(Msg::Loaded),
    );
}

#[cfg(test)]
mod tests {
    use super::object_name;

    #[test]
    fn object_names_keep_the_extension() {
        assert!(object_name("photo.png").ends_with(".png"));
        assert!(object_name("archive.tar.gz").ends_with(".gz"));
        assert!(object_name("noext").ends_with(".bin"));
        assert!(object_name("trailing.").ends_with(".bin"));
    }

    #[test]
    fn object_names_are_unique() {
        assert_ne!(object_name("a.png"), object_name("a.png"));
    }
}
