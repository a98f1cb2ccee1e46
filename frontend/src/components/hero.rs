use crate::context::LanguageHandle;
use yew::prelude::*;

pub enum Msg {
    Context(LanguageHandle),
}

pub struct Hero {
    lang: LanguageHandle,
    _listen: ContextHandle<LanguageHandle>,
}

impl Component for Hero {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let (lang, listen) = ctx
            .link()
            .context(ctx.link().callback(Msg::Context))
            .expect("language context missing");
        Hero { lang, _listen: listen }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let Msg::Context(handle) = msg;
        self.lang = handle;
        true
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let t = &self.lang;
        html! {
            <section class="hero">
                <div class="container">
                    <h1>
                        { t.t("hero_title") }
                        { " " }
                        <span class="text-gradient">{ t.t("hero_days") }</span>
                    </h1>
                    <p class="subtitle">{ t.t("hero_subtitle") }</p>
                    <div class="hero-actions">
                        <a class="btn gradient-primary" href="#contact">{ t.t("cta_start") }</a>
                        <a class="btn outline" href="#portfolio">{ t.t("cta_portfolio") }</a>
                    </div>
                </div>
            </section>
        }
    }
}
