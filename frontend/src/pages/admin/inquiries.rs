use super::nav::AdminNav;
use crate::api::{ApiError, Order};
use crate::context::DataContext;
use crate::query::{run_mutation, run_query};
use crate::toast;
use common::cache::{CacheKey, Entity};
use common::model::{ContactInquiry, InquiryStatus};
use serde_json::json;
use web_sys::HtmlSelectElement;
use yew::html::Scope;
use yew::prelude::*;

pub enum Msg {
    Loaded(Result<Vec<ContactInquiry>, ApiError>),
    Refresh,
    SetStatus(String, InquiryStatus),
    AskDelete(String),
    CancelDelete,
    ConfirmDelete,
    Mutated(Result<(), ApiError>, &'static str),
}

/// Inquiry table: per-row status select and deletion behind a
/// confirmation dialog.
pub struct Inquiries {
    inquiries: Vec<ContactInquiry>,
    pending_delete: Option<String>,
    subscription: usize,
}

impl Component for Inquiries {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let data = DataContext::of(ctx);
        let subscription = data
            .cache
            .subscribe(CacheKey::Inquiries, ctx.link().callback(|_| Msg::Refresh));
        load(ctx.link().clone());
        Inquiries {
            inquiries: Vec::new(),
            pending_delete: None,
            subscription,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok(inquiries)) => {
                self.inquiries = inquiries;
                true
            }
            Msg::Loaded(Err(_)) => false,
            Msg::Refresh => {
                load(ctx.link().clone());
                false
            }
            Msg::SetStatus(id, status) => {
                let data = DataContext::of(ctx);
                let api = data.api.clone();
                run_mutation(
                    data.cache.clone(),
                    Entity::ContactInquiry,
                    async move {
                        api.update(
                            "contact_inquiries",
                            &id,
                            &json!({ "status": status.as_str() }),
                        )
                        .await
                    },
                    ctx.link()
                        .callback(|r| Msg::Mutated(r, "Inquiry status updated.")),
                );
                false
            }
            Msg::AskDelete(id) => {
                self.pending_delete = Some(id);
                true
            }
            Msg::CancelDelete => {
                self.pending_delete = None;
                true
            }
            Msg::ConfirmDelete => {
                let Some(id) = self.pending_delete.take() else {
                    return false;
                };
                let data = DataContext::of(ctx);
                let api = data.api.clone();
                run_mutation(
                    data.cache.clone(),
                    Entity::ContactInquiry,
                    async move { api.delete("contact_inquiries", &id).await },
                    ctx.link()
                        .callback(|r| Msg::Mutated(r, "Inquiry deleted.")),
                );
                true
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
        html! {
            <div class="admin-page">
                <AdminNav title="Manage" accent="Inquiries" />
                <div class="container">
                    <div class="glass-card table-card">
                        <table>
                            <thead>
                                <tr>
                                    <th>{ "Name" }</th>
                                    <th>{ "Email" }</th>
                                    <th>{ "Service" }</th>
                                    <th>{ "Timeline" }</th>
                                    <th>{ "Status" }</th>
                                    <th>{ "Date" }</th>
                                    <th>{ "Actions" }</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for self.inquiries.iter().map(|inquiry| row(ctx, inquiry)) }
                            </tbody>
                        </table>
                    </div>
                    { self.delete_dialog(ctx) }
                </div>
            </div>
        }
    }

    fn destroy(&mut self, ctx: &Context<Self>) {
        DataContext::of(ctx).cache.unsubscribe(self.subscription);
    }
}

impl Inquiries {
    fn delete_dialog(&self, ctx: &Context<Self>) -> Html {
        if self.pending_delete.is_none() {
            return Html::default();
        }
        let link = ctx.link();
        html! {
            <div class="dialog-backdrop">
                <div class="dialog">
                    <h3>{ "Delete Inquiry" }</h3>
                    <p>
                        { "Are you sure you want to delete this inquiry? \
                           This action cannot be undone." }
                    </p>
                    <div class="actions">
                        <button class="btn outline" onclick={link.callback(|_| Msg::CancelDelete)}>
                            { "Cancel" }
                        </button>
                        <button class="btn danger" onclick={link.callback(|_| Msg::ConfirmDelete)}>
                            { "Delete" }
                        </button>
                    </div>
                </div>
            </div>
        }
    }
}

fn row(ctx: &Context<Inquiries>, inquiry: &ContactInquiry) -> Html {
    let id = inquiry.id.clone();
    let onchange = ctx.link().callback(move |e: Event| {
        let value = e.target_unchecked_into::<HtmlSelectElement>().value();
        Msg::SetStatus(id.clone(), InquiryStatus::parse(&value))
    });
    let delete_id = inquiry.id.clone();
    html! {
        <tr>
            <td class="name">{ &inquiry.full_name }</td>
            <td>{ &inquiry.email }</td>
            <td>{ &inquiry.service_type }</td>
            <td>{ &inquiry.timeline }</td>
            <td>
                <select {onchange}>
                    { for InquiryStatus::ALL.iter().map(|status| html! {
                        <option
                            value={status.as_str()}
                            selected={inquiry.status == *status}
                        >
                            { status.label() }
                        </option>
                    }) }
                </select>
            </td>
            <td>{ format_date(&inquiry.created_at) }</td>
            <td>
                <button
                    class="btn ghost danger"
                    onclick={ctx.link().callback(move |_| Msg::AskDelete(delete_id.clone()))}
                >
                    { "Delete" }
                </button>
            </td>
        </tr>
    }
}

/// Date part of an ISO timestamp; the raw value when it has no `T`.
fn format_date(timestamp: &str) -> String {
    timestamp
        .split('T')
        .next()
        .unwrap_or(timestamp)
        .to_string()
}

fn load(link: Scope<Inquiries>) {
    let data = DataContext::of_scope(&link);
    let api = data.api.clone();
    run_query(
        data.cache.clone(),
        CacheKey::Inquiries,
        async move {
            api.select::<ContactInquiry>(
                "contact_inquiries",
                &[],
                Some(Order::desc("created_at")),
            )
            .await
        },
        link.callback(Msg::Loaded),
    );
}

#[cfg(test)]
mod tests {
    use super::format_date;

    #[test]
    fn date_part_is_extracted_from_iso_timestamps() {
        assert_eq!(format_date("2024-05-01T12:30:00Z"), "2024-05-01");
        assert_eq!(format_date("2024-05-01"), "2024-05-01");
        assert_eq!(format_date(""), "");
    }
}
