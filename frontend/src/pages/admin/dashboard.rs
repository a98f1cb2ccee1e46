use crate::api::ApiError;
use crate::app::Route;
use crate::context::DataContext;
use crate::query::run_query;
use crate::toast;
use common::cache::CacheKey;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

pub enum Msg {
    InquiriesCount(Result<u64, ApiError>),
    PendingCount(Result<u64, ApiError>),
    Logout,
    LoggedOut,
}

/// Landing screen of the admin area: the two headline counters and a
/// card per management screen.
pub struct Dashboard {
    inquiries: Option<u64>,
    pending_reviews: Option<u64>,
}

impl Component for Dashboard {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let data = DataContext::of(ctx);

        let api = data.api.clone();
        run_query(
            data.cache.clone(),
            CacheKey::InquiriesCount,
            async move { api.count("contact_inquiries", &[]).await },
            ctx.link().callback(Msg::InquiriesCount),
        );

        let api = data.api.clone();
        run_query(
            data.cache.clone(),
            CacheKey::PendingReviewsCount,
            async move { api.count("reviews", &[("is_approved", "false")]).await },
            ctx.link().callback(Msg::PendingCount),
        );

        Dashboard {
            inquiries: None,
            pending_reviews: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::InquiriesCount(Ok(count)) => {
                self.inquiries = Some(count);
                true
            }
            Msg::PendingCount(Ok(count)) => {
                self.pending_reviews = Some(count);
                true
            }
            Msg::InquiriesCount(Err(_)) | Msg::PendingCount(Err(_)) => false,
            Msg::Logout => {
                let api = DataContext::of(ctx).api.clone();
                let done = ctx.link().callback(|()| Msg::LoggedOut);
                spawn_local(async move {
                    api.sign_out().await;
                    done.emit(());
                });
                false
            }
            Msg::LoggedOut => {
                toast::info("You have been logged out.");
                // The session guard notices the cleared store and
                // bounces to the login screen.
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="admin-page">
                <nav class="admin-nav glass-card">
                    <div class="container">
                        <h1>
                            { "Admin " }
                            <span class="text-gradient">{ "Dashboard" }</span>
                        </h1>
                        <button
                            class="btn outline"
                            onclick={ctx.link().callback(|_| Msg::Logout)}
                        >
                            { "Logout" }
                        </button>
                    </div>
                </nav>

                <div class="container">
                    <div class="counters">
                        { counter("Total Inquiries", self.inquiries) }
                        { counter("Pending Reviews", self.pending_reviews) }
                    </div>

                    <div class="card-grid">
                        { card(Route::AdminInquiries, "Inquiries", "Manage contact form submissions") }
                        { card(Route::AdminDemos, "Demos", "Add and manage portfolio demos") }
                        { card(Route::AdminReviews, "Reviews", "Approve and manage reviews") }
                        { card(Route::AdminServices, "Services", "Manage service offerings") }
                        { card(Route::AdminPortfolio, "Portfolio", "Manage portfolio projects") }
                        { card(Route::AdminTemplates, "Templates", "Manage service templates") }
                        { card(Route::AdminTeam, "Team Members", "Manage team members") }
                        { card(Route::AdminCompanyInfo, "Company Info", "Update company information") }
                        { card(Route::AdminSettings, "Settings", "Site settings") }
                    </div>
                </div>
            </div>
        }
    }
}

fn counter(label: &str, value: Option<u64>) -> Html {
    html! {
        <div class="glass-card counter">
            <p class="label">{ label }</p>
            <p class="value">
                { value.map_or_else(|| "–".to_string(), |v| v.to_string()) }
            </p>
        </div>
    }
}

fn card(to: Route, title: &str, blurb: &str) -> Html {
    html! {
        <Link<Route> {to} classes="card-link">
            <div class="glass-card nav-card">
                <h3>{ title }</h3>
                <p>{ blurb }</p>
            </div>
        </Link<Route>>
    }
}
