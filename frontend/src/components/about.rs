use crate::api::ApiError;
use crate::context::DataContext;
use crate::query::run_query;
use common::cache::CacheKey;
use common::model::CompanyInfo;
use yew::prelude::*;

pub enum Msg {
    Loaded(Result<CompanyInfo, ApiError>),
}

/// Company description and the two founder profiles. A fetch failure
/// just leaves the section empty.
pub struct About {
    info: Option<CompanyInfo>,
}

impl Component for About {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let data = DataContext::of(ctx);
        let api = data.api.clone();
        run_query(
            data.cache.clone(),
            CacheKey::CompanyInfo,
            async move { api.select_single::<CompanyInfo>("company_info").await },
            ctx.link().callback(Msg::Loaded),
        );
        About { info: None }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok(info)) => {
                self.info = Some(info);
                true
            }
            Msg::Loaded(Err(_)) => false,
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let Some(info) = &self.info else {
            return html! { <section id="about" class="about" /> };
        };
        html! {
            <section id="about" class="about">
                <div class="container">
                    <h2>{ "About " }<span class="text-gradient">{ "Us" }</span></h2>
                    <p class="description">{ &info.company_description }</p>
                    <div class="founders">
                        { founder_card(&info.founder1_name, &info.founder1_title, &info.founder1_bio, &info.founder1_photo, info.founder1_linkedin.as_deref()) }
                        { founder_card(&info.founder2_name, &info.founder2_title, &info.founder2_bio, &info.founder2_photo, info.founder2_linkedin.as_deref()) }
                    </div>
                </div>
            </section>
        }
    }
}

fn founder_card(
    name: &str,
    title: &str,
    bio: &str,
    photo: &str,
    linkedin: Option<&str>,
) -> Html {
    html! {
        <div class="glass-card founder">
            <img src={photo.to_string()} alt={name.to_string()} />
            <h3>{ name }</h3>
            <p class="title">{ title }</p>
            <p class="bio">{ bio }</p>
            if let Some(url) = linkedin {
                <a href={url.to_string()} target="_blank" rel="noopener noreferrer">
                    { "LinkedIn" }
                </a>
            }
        </div>
    }
}
