use super::{LanguageSwitcher, ThemeSwitcher};
use yew::prelude::*;

const SECTIONS: [(&str, &str); 5] = [
    ("#about", "About"),
    ("#services", "Services"),
    ("#portfolio", "Portfolio"),
    ("#reviews", "Reviews"),
    ("#contact", "Contact"),
];

pub struct Navbar;

impl Component for Navbar {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Navbar
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <nav class="navbar">
                <div class="container">
                    <a href="#" class="brand">{ "RapidFlow Labs" }</a>
                    <div class="nav-links">
                        { for SECTIONS.iter().map(|(href, label)| html! {
                            <a href={*href}>{ label }</a>
                        }) }
                    </div>
                    <div class="nav-controls">
                        <LanguageSwitcher />
                        <ThemeSwitcher />
                    </div>
                </div>
            </nav>
        }
    }
}
