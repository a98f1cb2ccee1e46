use super::nav::AdminNav;
use crate::api::{ApiError, Order};
use crate::context::DataContext;
use crate::query::{run_mutation, run_query};
use crate::toast;
use common::cache::{CacheKey, Entity};
use common::model::{NewServiceTemplate, ServiceTemplate};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

pub enum Msg {
    Loaded(Result<Vec<ServiceTemplate>, ApiError>),
    Refresh,
    OpenNew,
    OpenEdit(ServiceTemplate),
    CloseDialog,
    SetName(String),
    SetCategory(String),
    SetDescription(String),
    SetDemoUrl(String),
    SetPreviewUrl(String),
    SetDisplayOrder(String),
    ToggleActive,
    Save,
    Saved(Result<(), ApiError>),
    Delete(String),
    Deleted(Result<(), ApiError>),
}

/// Service template management, same create/edit dialog shape as the
/// demo screen but without file uploads.
pub struct Templates {
    templates: Vec<ServiceTemplate>,
    dialog_open: bool,
    editing: Option<String>,
    form: TemplateForm,
    saving: bool,
    subscription: usize,
}

#[derive(Default)]
struct TemplateForm {
    template_name: String,
    category: String,
    description: String,
    demo_url: String,
    preview_url: String,
    is_active: bool,
    display_order: i32,
}

impl TemplateForm {
    fn blank(next_order: i32) -> Self {
        TemplateForm {
            is_active: true,
            display_order: next_order,
            ..TemplateForm::default()
        }
    }

    fn from_template(template: &ServiceTemplate) -> Self {
        TemplateForm {
            template_name: template.template_name.clone(),
            category: template.category.clone(),
            description: template.description.clone(),
            demo_url: template.demo_url.clone(),
            preview_url: template.preview_url.clone(),
            is_active: template.is_active,
            display_order: template.display_order,
        }
    }

    fn payload(&self) -> NewServiceTemplate {
        NewServiceTemplate {
            template_name: self.template_name.trim().to_string(),
            category: self.category.trim().to_string(),
            description: self.description.trim().to_string(),
            demo_url: self.demo_url.trim().to_string(),
            preview_url: self.preview_url.trim().to_string(),
            is_active: self.is_active,
            display_order: self.display_order,
        }
    }
}

impl Component for Templates {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let data = DataContext::of(ctx);
        let subscription = data.cache.subscribe(
            CacheKey::TemplatesAdmin,
            ctx.link().callback(|_| Msg::Refresh),
        );
        load(ctx.link().clone());
        Templates {
            templates: Vec::new(),
            dialog_open: false,
            editing: None,
            form: TemplateForm::blank(1),
            saving: false,
            subscription,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok(templates)) => {
                self.templates = templates;
                true
            }
            Msg::Loaded(Err(_)) => false,
            Msg::Refresh => {
                load(ctx.link().clone());
                false
            }
            Msg::OpenNew => {
                self.editing = None;
                self.form = TemplateForm::blank(self.templates.len() as i32 + 1);
                self.dialog_open = true;
                true
            }
            Msg::OpenEdit(template) => {
                self.form = TemplateForm::from_template(&template);
                self.editing = Some(template.id);
                self.dialog_open = true;
                true
            }
            Msg::CloseDialog => {
                self.dialog_open = false;
                true
            }
            Msg::SetName(v) => {
                self.form.template_name = v;
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
            Msg::SetPreviewUrl(v) => {
                self.form.preview_url = v;
                false
            }
            Msg::SetDisplayOrder(v) => {
                self.form.display_order = v.parse().unwrap_or(0);
                false
            }
            Msg::ToggleActive => {
                self.form.is_active = !self.form.is_active;
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
                    Entity::ServiceTemplate,
                    async move {
                        match editing {
                            Some(id) => {
                                let patch = serde_json::to_value(&payload)
                                    .map_err(|e| ApiError::Decode(e.to_string()))?;
                                api.update("service_templates", &id, &patch).await
                            }
                            None => api.insert("service_templates", &payload).await,
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
                            "Template updated."
                        } else {
                            "Template created."
                        });
                        self.dialog_open = false;
                        self.editing = None;
                        self.form = TemplateForm::blank(self.templates.len() as i32 + 1);
                    }
                    Err(_) => toast::error("Saving the template failed."),
                }
                true
            }
            Msg::Delete(id) => {
                let data = DataContext::of(ctx);
                let api = data.api.clone();
                run_mutation(
                    data.cache.clone(),
                    Entity::ServiceTemplate,
                    async move { api.delete("service_templates", &id).await },
                    ctx.link().callback(Msg::Deleted),
                );
                false
            }
            Msg::Deleted(Ok(())) => {
                toast::info("Template deleted.");
                false
            }
            Msg::Deleted(Err(_)) => {
                toast::error("Deleting the template failed.");
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="admin-page">
                <AdminNav title="Manage" accent="Templates" />
                <div class="container">
                    <button
                        class="btn gradient-primary"
                        onclick={ctx.link().callback(|_| Msg::OpenNew)}
                    >
                        { "Add Template" }
                    </button>
                    <div class="glass-card table-card">
                        <table>
                            <thead>
                                <tr>
                                    <th>{ "Name" }</th>
                                    <th>{ "Category" }</th>
                                    <th>{ "Active" }</th>
                                    <th>{ "Order" }</th>
                                    <th>{ "Actions" }</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for self.templates.iter().map(|template| row(ctx, template)) }
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

fn row(ctx: &Context<Templates>, template: &ServiceTemplate) -> Html {
    let edit = template.clone();
    let delete_id = template.id.clone();
    html! {
        <tr>
            <td class="name">{ &template.template_name }</td>
            <td>{ &template.category }</td>
            <td>{ if template.is_active { "Yes" } else { "No" } }</td>
            <td>{ template.display_order }</td>
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

impl Templates {
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
                    <h3>
                        { if self.editing.is_some() { "Edit Template" } else { "Add Template" } }
                    </h3>
                    <form {onsubmit}>
                        <label>{ "Template Name *" }</label>
                        <input
                            required=true
                            value={self.form.template_name.clone()}
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

                        <label>{ "Preview Image URL *" }</label>
                        <input
                            required=true
                            value={self.form.preview_url.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                Msg::SetPreviewUrl(e.target_unchecked_into::<HtmlInputElement>().value())
                            })}
                        />

                        <label class="checkbox">
                            <input
                                type="checkbox"
                                checked={self.form.is_active}
                                onchange={link.callback(|_| Msg::ToggleActive)}
                            />
                            { "Active" }
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
                            { if self.editing.is_some() { "Update Template" } else { "Create Template" } }
                        </button>
                    </form>
                </div>
            </div>
        }
    }
}

fn load(link: Scope<Templates>) {
    let data = DataContext::of_scope(&link);
    let api = data.api.clone();
    run_query(
        data.cache.clone(),
        CacheKey::TemplatesAdmin,
        async move {
            api.select::<ServiceTemplate>("service_templates", &[], Some(Order::asc("display_order")))
                .await
        },
        link.callback(Msg::Loaded),
    );
}

#[cfg(test)]
mod tests {
    use super::TemplateForm;

    #[test]
    fn blank_form_seeds_the_next_display_order() {
        let form = TemplateForm::blank(4);
        assert_eq!(form.display_order, 4);
        assert!(form.is_active);
        assert!(form.template_name.is_empty());
    }
}
