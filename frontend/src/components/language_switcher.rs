use crate::context::{Language, LanguageHandle};
use yew::prelude::*;

pub enum Msg {
    Context(LanguageHandle),
    Pick(Language),
}

/// Small button row switching the active language.
pub struct LanguageSwitcher {
    lang: LanguageHandle,
    _listen: ContextHandle<LanguageHandle>,
}

impl Component for LanguageSwitcher {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let (lang, listen) = ctx
            .link()
            .context(ctx.link().callback(Msg::Context))
            .expect("language context missing");
        LanguageSwitcher {
            lang,
            _listen: listen,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Context(handle) => {
                self.lang = handle;
                true
            }
            Msg::Pick(language) => {
                self.lang.set(language);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="language-switcher">
                { for Language::ALL.iter().map(|&language| {
                    let active = language == self.lang.language;
                    html! {
                        <button
                            class={classes!("lang-btn", active.then_some("active"))}
                            title={language.label()}
                            onclick={ctx.link().callback(move |_| Msg::Pick(language))}
                        >
                            { language.code().to_uppercase() }
                        </button>
                    }
                }) }
            </div>
        }
    }
}
