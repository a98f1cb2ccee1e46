use crate::api::{ApiError, Order};
use crate::context::{DataContext, LanguageHandle};
use crate::query::run_query;
use common::cache::CacheKey;
use common::model::TeamMember;
use yew::prelude::*;

pub enum Msg {
    Loaded(Result<Vec<TeamMember>, ApiError>),
    Context(LanguageHandle),
}

pub struct Team {
    members: Vec<TeamMember>,
    lang: LanguageHandle,
    _listen: ContextHandle<LanguageHandle>,
}

impl Component for Team {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let (lang, listen) = ctx
            .link()
            .context(ctx.link().callback(Msg::Context))
            .expect("language context missing");
        let data = DataContext::of(ctx);
        let api = data.api.clone();
        run_query(
            data.cache.clone(),
            CacheKey::TeamMembers,
            async move {
                api.select::<TeamMember>(
                    "team_members",
                    &[],
                    Some(Order::asc("display_order")),
                )
                .await
            },
            ctx.link().callback(Msg::Loaded),
        );
        Team {
            members: Vec::new(),
            lang,
            _listen: listen,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok(members)) => {
                self.members = members;
                true
            }
            Msg::Loaded(Err(_)) => false,
            Msg::Context(handle) => {
                self.lang = handle;
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <section class="team">
                <div class="container">
                    <h2>
                        { self.lang.t("team_title") }
                        { " " }
                        <span class="text-gradient">{ self.lang.t("team_dream") }</span>
                    </h2>
                    <div class="team-grid">
                        { for self.members.iter().map(member_card) }
                    </div>
                </div>
            </section>
        }
    }
}

fn member_card(member: &TeamMember) -> Html {
    html! {
        <div class="glass-card member">
            <img src={member.photo_url.clone()} alt={member.name.clone()} />
            <h3>{ &member.name }</h3>
            <p class="title">{ &member.title }</p>
            if let Some(company) = &member.company {
                <p class="company">{ company }</p>
            }
            <p class="bio">{ &member.bio }</p>
            <div class="skills">
                { for member.skills.iter().map(|skill| html! {
                    <span class="skill">{ skill }</span>
                }) }
            </div>
            <div class="links">
                if let Some(url) = &member.linkedin {
                    <a href={url.clone()} target="_blank" rel="noopener noreferrer">{ "LinkedIn" }</a>
                }
                if let Some(url) = &member.twitter {
                    <a href={url.clone()} target="_blank" rel="noopener noreferrer">{ "Twitter" }</a>
                }
            </div>
        </div>
    }
}
