use super::messages::Msg;
use super::state::Contact;
use crate::context::DataContext;
use crate::query::run_mutation;
use crate::toast;
use common::cache::Entity;
use common::model::NewInquiry;
use common::validate::validate_inquiry;
use yew::prelude::*;

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

pub fn update(component: &mut Contact, ctx: &Context<Contact>, msg: Msg) -> bool {
    match msg {
        Msg::CompanyLoaded(Ok(info)) => {
            component.company = Some(info);
            true
        }
        Msg::CompanyLoaded(Err(_)) => false,
        Msg::ServicesLoaded(Ok(services)) => {
            component.services = services;
            true
        }
        Msg::ServicesLoaded(Err(_)) => false,
        Msg::SetName(value) => {
            component.full_name = value;
            false
        }
        Msg::SetEmail(value) => {
            component.email = value;
            false
        }
        Msg::SetPhone(value) => {
            component.phone = value;
            false
        }
        Msg::SetCompanyName(value) => {
            component.company_name = value;
            false
        }
        Msg::SetService(value) => {
            component.service_type = value;
            true
        }
        Msg::SetTimeline(value) => {
            component.timeline = value;
            true
        }
        Msg::SetBudget(value) => {
            component.budget_range = value;
            true
        }
        Msg::SetDescription(value) => {
            component.project_description = value;
            false
        }
        Msg::Submit => {
            if component.submitting {
                return false;
            }
            let inquiry = NewInquiry {
                full_name: component.full_name.trim().to_string(),
                email: component.email.trim().to_string(),
                phone: optional(&component.phone),
                company_name: optional(&component.company_name),
                service_type: component.service_type.clone(),
                project_description: component.project_description.trim().to_string(),
                timeline: component.timeline.clone(),
                budget_range: optional(&component.budget_range),
            };
            if let Err(violation) = validate_inquiry(&inquiry) {
                toast::error(violation.message);
                return false;
            }
            component.submitting = true;
            let data = DataContext::of(ctx);
            let api = data.api.clone();
            run_mutation(
                data.cache.clone(),
                Entity::ContactInquiry,
                async move { api.insert("contact_inquiries", &inquiry).await },
                ctx.link().callback(Msg::Submitted),
            );
            true
        }
        Msg::Submitted(result) => {
            component.submitting = false;
            match result {
                Ok(()) => {
                    component.reset_form();
                    toast::info("Inquiry sent! We'll get back to you within 24 hours.");
                }
                Err(_) => toast::error("Failed to send inquiry. Please try again."),
            }
            true
        }
    }
}
