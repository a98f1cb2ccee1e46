use crate::context::{DataContext, LanguageProvider, ThemeProvider};
use crate::pages::admin;
use crate::pages::{Home, NotFound};
use yew::prelude::*;
use yew_router::prelude::*;

/// Route table: one public landing page plus the admin screens under
/// the disguised `/secret/admin` prefix.
#[derive(Clone, Copy, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/secret/admin")]
    AdminLogin,
    #[at("/secret/admin/dashboard")]
    AdminDashboard,
    #[at("/secret/admin/inquiries")]
    AdminInquiries,
    #[at("/secret/admin/reviews")]
    AdminReviews,
    #[at("/secret/admin/demos")]
    AdminDemos,
    #[at("/secret/admin/portfolio")]
    AdminPortfolio,
    #[at("/secret/admin/team")]
    AdminTeam,
    #[at("/secret/admin/templates")]
    AdminTemplates,
    #[at("/secret/admin/company")]
    AdminCompanyInfo,
    #[at("/secret/admin/services")]
    AdminServices,
    #[at("/secret/admin/settings")]
    AdminSettings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub struct App {
    data: DataContext,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        App {
            data: DataContext::new(),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <ThemeProvider>
                <LanguageProvider>
                    <ContextProvider<DataContext> context={self.data.clone()}>
                        <BrowserRouter>
                            <Switch<Route> render={switch} />
                        </BrowserRouter>
                    </ContextProvider<DataContext>>
                </LanguageProvider>
            </ThemeProvider>
        }
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::AdminLogin => html! { <admin::Login /> },
        Route::AdminDashboard => guarded(html! { <admin::Dashboard /> }),
        Route::AdminInquiries => guarded(html! { <admin::Inquiries /> }),
        Route::AdminReviews => guarded(html! { <admin::Reviews /> }),
        Route::AdminDemos => guarded(html! { <admin::Demos /> }),
        Route::AdminPortfolio => guarded(html! { <admin::Portfolio /> }),
        Route::AdminTeam => guarded(html! { <admin::Team /> }),
        Route::AdminTemplates => guarded(html! { <admin::Templates /> }),
        Route::AdminCompanyInfo => guarded(html! { <admin::CompanyInfoPage /> }),
        Route::AdminServices => guarded(html! { <admin::Services /> }),
        Route::AdminSettings => guarded(html! { <admin::Settings /> }),
        Route::NotFound => html! { <NotFound /> },
    }
}

/// Every admin screen except login renders behind the session guard.
fn guarded(inner: Html) -> Html {
    html! { <admin::SessionGuard>{ inner }</admin::SessionGuard> }
}
