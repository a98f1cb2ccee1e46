//! Public reviews section: approved reviews newest-first, plus the
//! submission dialog. A submitted review lands unapproved and stays
//! invisible here until an admin approves it.

use crate::api::Order;
use crate::context::DataContext;
use crate::query::run_query;
use common::cache::CacheKey;
use common::model::Review;
use yew::html::Scope;
use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::Reviews;

impl Component for Reviews {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let (lang, listen) = ctx
            .link()
            .context(ctx.link().callback(Msg::Context))
            .expect("language context missing");
        let data = DataContext::of(ctx);
        let subscription = data
            .cache
            .subscribe(CacheKey::Reviews, ctx.link().callback(|_| Msg::Refresh));
        load(ctx.link().clone());
        Reviews::new(lang, listen, subscription)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn destroy(&mut self, ctx: &Context<Self>) {
        DataContext::of(ctx).cache.unsubscribe(self.subscription);
    }
}

pub(super) fn load(link: Scope<Reviews>) {
    let data = DataContext::of_scope(&link);
    let api = data.api.clone();
    run_query(
        data.cache.clone(),
        CacheKey::Reviews,
        async move {
            api.select::<Review>(
                "reviews",
                &[("is_approved", "true")],
                Some(Order::desc("created_at")),
            )
            .await
        },
        link.callback(Msg::Loaded),
    );
}
