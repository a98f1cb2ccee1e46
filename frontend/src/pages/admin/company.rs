use super::nav::AdminNav;
use crate::api::ApiError;
use crate::context::DataContext;
use crate::query::{run_mutation, run_query};
use crate::toast;
use common::cache::{CacheKey, Entity};
use common::model::CompanyInfo;
use serde_json::json;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

/// Editable fields of the singleton company row.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Description,
    Email,
    Whatsapp,
    Telegram,
    Founder1Name,
    Founder1Title,
    Founder1Bio,
    Founder1Photo,
    Founder1Linkedin,
    Founder2Name,
    Founder2Title,
    Founder2Bio,
    Founder2Photo,
    Founder2Linkedin,
}

pub enum Msg {
    Loaded(Result<CompanyInfo, ApiError>),
    Edit(Field, String),
    Save,
    Saved(Result<(), ApiError>),
}

/// The company settings form, pre-populated from the singleton row.
/// There is no create or delete here, only an in-place update.
pub struct CompanyInfoPage {
    row_id: Option<String>,
    form: CompanyForm,
    saving: bool,
}

#[derive(Default)]
struct CompanyForm {
    company_description: String,
    email: String,
    whatsapp: String,
    telegram: String,
    founder1_name: String,
    founder1_title: String,
    founder1_bio: String,
    founder1_photo: String,
    founder1_linkedin: String,
    founder2_name: String,
    founder2_title: String,
    founder2_bio: String,
    founder2_photo: String,
    founder2_linkedin: String,
}

impl CompanyForm {
    fn from_info(info: &CompanyInfo) -> Self {
        CompanyForm {
            company_description: info.company_description.clone(),
            email: info.email.clone(),
            whatsapp: info.whatsapp.clone(),
            telegram: info.telegram.clone(),
            founder1_name: info.founder1_name.clone(),
            founder1_title: info.founder1_title.clone(),
            founder1_bio: info.founder1_bio.clone(),
            founder1_photo: info.founder1_photo.clone(),
            founder1_linkedin: info.founder1_linkedin.clone().unwrap_or_default(),
            founder2_name: info.founder2_name.clone(),
            founder2_title: info.founder2_title.clone(),
            founder2_bio: info.founder2_bio.clone(),
            founder2_photo: info.founder2_photo.clone(),
            founder2_linkedin: info.founder2_linkedin.clone().unwrap_or_default(),
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Description => &mut self.company_description,
            Field::Email => &mut self.email,
            Field::Whatsapp => &mut self.whatsapp,
            Field::Telegram => &mut self.telegram,
            Field::Founder1Name => &mut self.founder1_name,
            Field::Founder1Title => &mut self.founder1_title,
            Field::Founder1Bio => &mut self.founder1_bio,
            Field::Founder1Photo => &mut self.founder1_photo,
            Field::Founder1Linkedin => &mut self.founder1_linkedin,
            Field::Founder2Name => &mut self.founder2_name,
            Field::Founder2Title => &mut self.founder2_title,
            Field::Founder2Bio => &mut self.founder2_bio,
            Field::Founder2Photo => &mut self.founder2_photo,
            Field::Founder2Linkedin => &mut self.founder2_linkedin,
        }
    }

    fn patch(&self) -> serde_json::Value {
        json!({
            "company_description": self.company_description,
            "email": self.email,
            "whatsapp": self.whatsapp,
            "telegram": self.telegram,
            "founder1_name": self.founder1_name,
            "founder1_title": self.founder1_title,
            "founder1_bio": self.founder1_bio,
            "founder1_photo": self.founder1_photo,
            "founder1_linkedin": nullable(&self.founder1_linkedin),
            "founder2_name": self.founder2_name,
            "founder2_title": self.founder2_title,
            "founder2_bio": self.founder2_bio,
            "founder2_photo": self.founder2_photo,
            "founder2_linkedin": nullable(&self.founder2_linkedin),
        })
    }
}

fn nullable(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

impl Component for CompanyInfoPage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let data = DataContext::of(ctx);
        let api = data.api.clone();
        run_query(
            data.cache.clone(),
            CacheKey::CompanyInfo,
            async move { api.select_single::<CompanyInfo>("company_info").await },
            ctx.link().callback(Msg::Loaded),
        );
        CompanyInfoPage {
            row_id: None,
            form: CompanyForm::default(),
            saving: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok(info)) => {
                self.form = CompanyForm::from_info(&info);
                self.row_id = Some(info.id);
                true
            }
            Msg::Loaded(Err(_)) => false,
            Msg::Edit(field, value) => {
                *self.form.field_mut(field) = value;
                false
            }
            Msg::Save => {
                let Some(id) = self.row_id.clone() else {
                    return false;
                };
                if self.saving {
                    return false;
                }
                self.saving = true;
                let patch = self.form.patch();
                let data = DataContext::of(ctx);
                let api = data.api.clone();
                run_mutation(
                    data.cache.clone(),
                    Entity::CompanyInfo,
                    async move { api.update("company_info", &id, &patch).await },
                    ctx.link().callback(Msg::Saved),
                );
                true
            }
            Msg::Saved(result) => {
                self.saving = false;
                match result {
                    Ok(()) => toast::info("Company information updated."),
                    Err(_) => toast::error("Saving company information failed."),
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Save
        });
        html! {
            <div class="admin-page">
                <AdminNav title="Company" accent="Info" />
                <div class="container">
                    <form class="glass-card form" {onsubmit}>
                        <label>{ "Company Description" }</label>
                        { self.text_area(ctx, Field::Description, &self.form.company_description) }

                        <div class="row">
                            <div>
                                <label>{ "Email" }</label>
                                { self.text_input(ctx, Field::Email, &self.form.email) }
                            </div>
                            <div>
                                <label>{ "WhatsApp" }</label>
                                { self.text_input(ctx, Field::Whatsapp, &self.form.whatsapp) }
                            </div>
                            <div>
                                <label>{ "Telegram" }</label>
                                { self.text_input(ctx, Field::Telegram, &self.form.telegram) }
                            </div>
                        </div>

                        <h3>{ "Founder 1" }</h3>
                        <label>{ "Name" }</label>
                        { self.text_input(ctx, Field::Founder1Name, &self.form.founder1_name) }
                        <label>{ "Title" }</label>
                        { self.text_input(ctx, Field::Founder1Title, &self.form.founder1_title) }
                        <label>{ "Bio" }</label>
                        { self.text_area(ctx, Field::Founder1Bio, &self.form.founder1_bio) }
                        <label>{ "Photo URL" }</label>
                        { self.text_input(ctx, Field::Founder1Photo, &self.form.founder1_photo) }
                        <label>{ "LinkedIn" }</label>
                        { self.text_input(ctx, Field::Founder1Linkedin, &self.form.founder1_linkedin) }

                        <h3>{ "Founder 2" }</h3>
                        <label>{ "Name" }</label>
                        { self.text_input(ctx, Field::Founder2Name, &self.form.founder2_name) }
                        <label>{ "Title" }</label>
                        { self.text_input(ctx, Field::Founder2Title, &self.form.founder2_title) }
                        <label>{ "Bio" }</label>
                        { self.text_area(ctx, Field::Founder2Bio, &self.form.founder2_bio) }
                        <label>{ "Photo URL" }</label>
                        { self.text_input(ctx, Field::Founder2Photo, &self.form.founder2_photo) }
                        <label>{ "LinkedIn" }</label>
                        { self.text_input(ctx, Field::Founder2Linkedin, &self.form.founder2_linkedin) }

                        <button type="submit" class="btn gradient-primary" disabled={self.saving}>
                            { if self.saving { "Saving..." } else { "Save Changes" } }
                        </button>
                    </form>
                </div>
            </div>
        }
    }
}

impl CompanyInfoPage {
    fn text_input(&self, ctx: &Context<Self>, field: Field, value: &str) -> Html {
        html! {
            <input
                value={value.to_string()}
                oninput={ctx.link().callback(move |e: InputEvent| {
                    Msg::Edit(field, e.target_unchecked_into::<HtmlInputElement>().value())
                })}
            />
        }
    }

    fn text_area(&self, ctx: &Context<Self>, field: Field, value: &str) -> Html {
        html! {
            <textarea
                rows="3"
                value={value.to_string()}
                oninput={ctx.link().callback(move |e: InputEvent| {
                    Msg::Edit(field, e.target_unchecked_into::<HtmlTextAreaElement>().value())
                })}
            />
        }
    }
}
