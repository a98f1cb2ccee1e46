use super::messages::Msg;
use super::state::Reviews;
use common::model::Review;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

pub fn view(component: &Reviews, ctx: &Context<Reviews>) -> Html {
    let t = &component.lang;
    html! {
        <section id="reviews" class="reviews">
            <div class="container">
                <h2>
                    { t.t("reviews_title") }
                    { " " }
                    <span class="text-gradient">{ t.t("reviews_accent") }</span>
                </h2>
                <p class="subtitle">{ t.t("reviews_subtitle") }</p>
                <button
                    class="btn gradient-primary"
                    onclick={ctx.link().callback(|_| Msg::OpenDialog)}
                >
                    { t.t("reviews_cta") }
                </button>

                <div class="review-grid">
                    { for component.reviews.iter().map(review_card) }
                </div>

                { dialog(component, ctx) }
            </div>
        </section>
    }
}

fn review_card(review: &Review) -> Html {
    html! {
        <div class="glass-card review">
            { stars(review.rating) }
            <p class="text">{ format!("\"{}\"", review.review_text) }</p>
            <div class="byline">
                <p class="name">{ &review.reviewer_name }</p>
                if let Some(company) = &review.company {
                    <p class="company">{ company }</p>
                }
            </div>
        </div>
    }
}

fn stars(rating: i32) -> Html {
    html! {
        <div class="stars">
            { for (1..=5).map(|i| html! {
                <span class={classes!("star", (i <= rating).then_some("filled"))}>
                    { if i <= rating { "★" } else { "☆" } }
                </span>
            }) }
        </div>
    }
}

fn dialog(component: &Reviews, ctx: &Context<Reviews>) -> Html {
    if !component.dialog_open {
        return Html::default();
    }
    let link = ctx.link();
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });
    html! {
        <div class="dialog-backdrop" onclick={link.callback(|_| Msg::CloseDialog)}>
            <div class="dialog" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <h3>{ "Leave a Review" }</h3>
                <form {onsubmit}>
                    <label>{ "Rating" }</label>
                    <div class="star-picker">
                        { for (1..=5).map(|i| {
                            let filled = i <= component.rating;
                            html! {
                                <button
                                    type="button"
                                    class={classes!("star", filled.then_some("filled"))}
                                    onclick={link.callback(move |_| Msg::SetRating(i))}
                                >
                                    { if filled { "★" } else { "☆" } }
                                </button>
                            }
                        }) }
                    </div>

                    <label>{ "Name" }</label>
                    <input
                        required=true
                        value={component.reviewer_name.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::SetName(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />

                    <label>{ "Company (Optional)" }</label>
                    <input
                        value={component.company.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::SetCompany(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />

                    <label>{ "Review" }</label>
                    <textarea
                        required=true
                        rows="4"
                        value={component.review_text.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::SetText(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                        })}
                    />

                    <button
                        type="submit"
                        class="btn gradient-primary"
                        disabled={component.submitting}
                    >
                        { if component.submitting { "Submitting..." } else { "Submit Review" } }
                    </button>
                </form>
            </div>
        </div>
    }
}
