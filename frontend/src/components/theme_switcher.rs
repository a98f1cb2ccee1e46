use crate::context::{Theme, ThemeHandle};
use yew::prelude::*;

pub enum Msg {
    Context(ThemeHandle),
    Pick(Theme),
}

pub struct ThemeSwitcher {
    theme: ThemeHandle,
    _listen: ContextHandle<ThemeHandle>,
}

impl Component for ThemeSwitcher {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let (theme, listen) = ctx
            .link()
            .context(ctx.link().callback(Msg::Context))
            .expect("theme context missing");
        ThemeSwitcher {
            theme,
            _listen: listen,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Context(handle) => {
                self.theme = handle;
                true
            }
            Msg::Pick(theme) => {
                self.theme.set(theme);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="theme-switcher">
                { for Theme::ALL.iter().map(|&theme| {
                    let active = theme == self.theme.theme;
                    html! {
                        <button
                            class={classes!("theme-dot", theme.class_name(), active.then_some("active"))}
                            title={theme.code()}
                            onclick={ctx.link().callback(move |_| Msg::Pick(theme))}
                        />
                    }
                }) }
            </div>
        }
    }
}
