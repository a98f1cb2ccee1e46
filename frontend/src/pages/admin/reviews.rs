use super::nav::AdminNav;
use crate::api::{ApiError, Order};
use crate::context::DataContext;
use crate::query::{run_mutation, run_query};
use crate::toast;
use common::cache::{CacheKey, Entity};
use common::model::Review;
use serde_json::json;
use yew::html::Scope;
use yew::prelude::*;

pub enum Msg {
    Loaded(Result<Vec<Review>, ApiError>),
    Refresh,
    Approve(String),
    Delete(String),
    Mutated(Result<(), ApiError>, &'static str),
}

/// Moderation screen: pending reviews on top, published below.
/// Approving a review stamps `approved_at` so the public ordering is
/// stable.
pub struct Reviews {
    reviews: Vec<Review>,
    subscription: usize,
}

impl Component for Reviews {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let data = DataContext::of(ctx);
        let subscription = data
            .cache
            .subscribe(CacheKey::ReviewsAdmin, ctx.link().callback(|_| Msg::Refresh));
        load(ctx.link().clone());
        Reviews {
            reviews: Vec::new(),
            subscription,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok(reviews)) => {
                self.reviews = reviews;
                true
            }
            Msg::Loaded(Err(_)) => false,
            Msg::Refresh => {
                load(ctx.link().clone());
                false
            }
            Msg::Approve(id) => {
                let data = DataContext::of(ctx);
                let api = data.api.clone();
                let approved_at = String::from(js_sys::Date::new_0().to_iso_string());
                run_mutation(
                    data.cache.clone(),
                    Entity::Review,
                    async move {
                        api.update(
                            "reviews",
                            &id,
                            &json!({ "is_approved": true, "approved_at": approved_at }),
                        )
                        .await
                    },
                    ctx.link().callback(|r| Msg::Mutated(r, "Review approved.")),
                );
                false
            }
            Msg::Delete(id) => {
                let data = DataContext::of(ctx);
                let api = data.api.clone();
                run_mutation(
                    data.cache.clone(),
                    Entity::Review,
                    async move { api.delete("reviews", &id).await },
                    ctx.link().callback(|r| Msg::Mutated(r, "Review deleted.")),
                );
                false
            }
            Msg::Mutated(Ok(()), notice) => {
                toast::info(notice);
                false
            }
            Msg::Mutated(Err(_), _) => {
                toast::error("Operation failed. Please try again.");
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let (pending, published): (Vec<&Review>, Vec<&Review>) =
            self.reviews.iter().partition(|r| !r.is_approved);
        html! {
            <div class="admin-page">
                <AdminNav title="Manage" accent="Reviews" />
                <div class="container">
                    <h2>{ "Pending Reviews" }</h2>
                    <div class="card-grid">
                        { for pending.iter().map(|review| card(ctx, review, false)) }
                    </div>

                    <h2>{ "Published Reviews" }</h2>
                    <div class="card-grid">
                        { for published.iter().map(|review| card(ctx, review, true)) }
                    </div>
                </div>
            </div>
        }
    }

    fn destroy(&mut self, ctx: &Context<Self>) {
        DataContext::of(ctx).cache.unsubscribe(self.subscription);
    }
}

fn card(ctx: &Context<Reviews>, review: &Review, published: bool) -> Html {
    let approve_id = review.id.clone();
    let delete_id = review.id.clone();
    html! {
        <div class="glass-card review">
            <div class="stars">
                { for (1..=5).map(|i| html! {
                    <span class={classes!("star", (i <= review.rating).then_some("filled"))}>
                        { if i <= review.rating { "★" } else { "☆" } }
                    </span>
                }) }
            </div>
            <p class="text">{ &review.review_text }</p>
            <div class="byline">
                <p class="name">{ &review.reviewer_name }</p>
                if let Some(company) = &review.company {
                    <p class="company">{ company }</p>
                }
            </div>
            <div class="actions">
                if !published {
                    <button
                        class="btn gradient-primary"
                        onclick={ctx.link().callback(move |_| Msg::Approve(approve_id.clone()))}
                    >
                        { "Approve" }
                    </button>
                }
                <button
                    class="btn outline danger"
                    onclick={ctx.link().callback(move |_| Msg::Delete(delete_id.clone()))}
                >
                    { "Delete" }
                </button>
            </div>
        </div>
    }
}

fn load(link: Scope<Reviews>) {
    let data = DataContext::of_scope(&link);
    let api = data.api.clone();
    run_query(
        data.cache.clone(),
        CacheKey::ReviewsAdmin,
        async move {
            api.select::<Review>("reviews", &[], Some(Order::desc("created_at")))
                .await
        },
        link.callback(Msg::Loaded),
    );
}
