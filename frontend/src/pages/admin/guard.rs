use crate::app::Route;
use crate::context::DataContext;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
}

pub enum Msg {
    SessionChanged,
}

/// Renders its children only while an admin session is live.
///
/// The session store is checked on mount and then watched, so a
/// sign-out or token expiry on any screen bounces straight back to the
/// login page instead of waiting for the next navigation.
pub struct SessionGuard {
    authed: bool,
    subscription: usize,
}

impl Component for SessionGuard {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let data = DataContext::of(ctx);
        let subscription = data
            .session
            .subscribe(ctx.link().callback(|()| Msg::SessionChanged));
        let authed = data.session.current().is_some();
        if !authed {
            redirect(ctx);
        }
        SessionGuard {
            authed,
            subscription,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SessionChanged => {
                let authed = DataContext::of(ctx).session.current().is_some();
                if self.authed && !authed {
                    redirect(ctx);
                }
                let changed = self.authed != authed;
                self.authed = authed;
                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if !self.authed {
            return Html::default();
        }
        html! { <>{ ctx.props().children.clone() }</> }
    }

    fn destroy(&mut self, ctx: &Context<Self>) {
        DataContext::of(ctx).session.unsubscribe(self.subscription);
    }
}

fn redirect(ctx: &Context<SessionGuard>) {
    if let Some(navigator) = ctx.link().navigator() {
        navigator.push(&Route::AdminLogin);
    }
}
