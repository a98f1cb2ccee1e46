use crate::api::{ApiError, Session};
use crate::app::Route;
use crate::context::DataContext;
use crate::toast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

pub enum Msg {
    SetEmail(String),
    SetPassword(String),
    Submit,
    Done(Result<Session, ApiError>),
}

/// Email and password sign-in for the admin area. A session that is
/// already live skips the form entirely.
pub struct Login {
    email: String,
    password: String,
    busy: bool,
}

impl Component for Login {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        if DataContext::of(ctx).session.current().is_some() {
            if let Some(navigator) = ctx.link().navigator() {
                navigator.push(&Route::AdminDashboard);
            }
        }
        Login {
            email: String::new(),
            password: String::new(),
            busy: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetEmail(value) => {
                self.email = value;
                false
            }
            Msg::SetPassword(value) => {
                self.password = value;
                false
            }
            Msg::Submit => {
                if self.busy || self.email.is_empty() || self.password.is_empty() {
                    return false;
                }
                self.busy = true;
                let api = DataContext::of(ctx).api.clone();
                let email = self.email.clone();
                let password = self.password.clone();
                let done = ctx.link().callback(Msg::Done);
                spawn_local(async move {
                    done.emit(api.sign_in(&email, &password).await);
                });
                true
            }
            Msg::Done(result) => {
                self.busy = false;
                match result {
                    Ok(_) => {
                        if let Some(navigator) = ctx.link().navigator() {
                            navigator.push(&Route::AdminDashboard);
                        }
                    }
                    Err(_) => toast::error("Login failed. Check your credentials."),
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });
        html! {
            <div class="admin-login">
                <div class="glass-card">
                    <h1>
                        { "Admin " }
                        <span class="text-gradient">{ "Login" }</span>
                    </h1>
                    <form {onsubmit}>
                        <label>{ "Email" }</label>
                        <input
                            type="email"
                            required=true
                            value={self.email.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                Msg::SetEmail(e.target_unchecked_into::<HtmlInputElement>().value())
                            })}
                        />
                        <label>{ "Password" }</label>
                        <input
                            type="password"
                            required=true
                            value={self.password.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                Msg::SetPassword(e.target_unchecked_into::<HtmlInputElement>().value())
                            })}
                        />
                        <button type="submit" class="btn gradient-primary" disabled={self.busy}>
                            { if self.busy { "Signing in..." } else { "Sign In" } }
                        </button>
                    </form>
                </div>
            </div>
        }
    }
}
