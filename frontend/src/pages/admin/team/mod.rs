//! Team member management, including the photo upload into the team
//! bucket. An upload whose row write then fails is removed again.

use crate::api::Order;
use crate::context::DataContext;
use crate::query::run_query;
use common::cache::CacheKey;
use common::model::TeamMember;
use yew::html::Scope;
use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::Team;

pub(super) const BUCKET: &str = "team-photos";

impl Component for Team {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let data = DataContext::of(ctx);
        let subscription = data
            .cache
            .subscribe(CacheKey::TeamAdmin, ctx.link().callback(|_| Msg::Refresh));
        load(ctx.link().clone());
        Team::new(subscription)
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

pub(super) fn load(link: Scope<Team>) {
    let data = DataContext::of_scope(&link);
    let api = data.api.clone();
    run_query(
        data.cache.clone(),
        CacheKey::TeamAdmin,
        async move {
            api.select::<TeamMember>("team_members", &[], Some(Order::asc("display_order")))
                .await
        },
        link.callback(Msg::Loaded),
    );
}
