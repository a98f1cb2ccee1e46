use super::messages::Msg;
use super::state::Reviews;
use crate::context::DataContext;
use crate::query::run_mutation;
use crate::toast;
use common::cache::Entity;
use common::model::NewReview;
use common::validate::validate_review;
use yew::prelude::*;

pub fn update(component: &mut Reviews, ctx: &Context<Reviews>, msg: Msg) -> bool {
    match msg {
        Msg::Loaded(Ok(reviews)) => {
            component.reviews = reviews;
            true
        }
        Msg::Loaded(Err(_)) => false,
        Msg::Context(handle) => {
            component.lang = handle;
            true
        }
        Msg::Refresh => {
            super::load(ctx.link().clone());
            false
        }
        Msg::OpenDialog => {
            component.dialog_open = true;
            true
        }
        Msg::CloseDialog => {
            component.dialog_open = false;
            true
        }
        Msg::SetRating(rating) => {
            component.rating = rating;
            true
        }
        Msg::SetName(value) => {
            component.reviewer_name = value;
            false
        }
        Msg::SetCompany(value) => {
            component.company = value;
            false
        }
        Msg::SetText(value) => {
            component.review_text = value;
            false
        }
        Msg::Submit => {
            if component.submitting {
                return false;
            }
            let review = NewReview {
                reviewer_name: component.reviewer_name.trim().to_string(),
                company: match component.company.trim() {
                    "" => None,
                    company => Some(company.to_string()),
                },
                rating: component.rating,
                review_text: component.review_text.trim().to_string(),
            };
            // Rejected submissions never reach the network.
            if let Err(violation) = validate_review(&review) {
                toast::error(violation.message);
                return false;
            }
            component.submitting = true;
            let data = DataContext::of(ctx);
            let api = data.api.clone();
            run_mutation(
                data.cache.clone(),
                Entity::Review,
                async move { api.insert("reviews", &review).await },
                ctx.link().callback(Msg::Submitted),
            );
            true
        }
        Msg::Submitted(Ok(())) => {
            component.submitting = false;
            component.dialog_open = false;
            component.reset_form();
            toast::info("Review submitted! It will be published after approval.");
            true
        }
        Msg::Submitted(Err(err)) => {
            component.submitting = false;
            toast::error(&format!("Failed to submit review: {err}"));
            true
        }
    }
}
