use crate::components::{
    About, Contact, Hero, Navbar, Portfolio, Process, Reviews, Services, Showcase, Team, Templates,
};
use yew::prelude::*;

/// The public landing page: every marketing section in order, then the
/// footer. All data loading happens inside the sections themselves.
pub struct Home;

impl Component for Home {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Home
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="page">
                <Navbar />
                <Hero />
                <About />
                <Services />
                <Templates />
                <Portfolio />
                <Showcase />
                <Process />
                <Team />
                <Reviews />
                <Contact />
                <footer class="footer">
                    <div class="container">
                        <p>{ "© 2024 RapidFlow Labs. All rights reserved." }</p>
                        <p>{ "Built for fast, quality web development" }</p>
                    </div>
                </footer>
            </div>
        }
    }
}
