use yew::prelude::*;

const STEPS: [(&str, &str); 4] = [
    ("Discover", "We map your goals, audience and scope in a short call."),
    ("Design", "A clickable prototype lands in your inbox within days."),
    ("Build", "Implementation in fast, reviewable increments."),
    ("Launch", "Deployment, handover and a support window after go-live."),
];

pub struct Process;

impl Component for Process {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Process
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <section class="process">
                <div class="container">
                    <h2>{ "How We " }<span class="text-gradient">{ "Work" }</span></h2>
                    <ol class="steps">
                        { for STEPS.iter().enumerate().map(|(index, (title, text))| html! {
                            <li class="glass-card step">
                                <span class="step-number">{ index + 1 }</span>
                                <h3>{ title }</h3>
                                <p>{ text }</p>
                            </li>
                        }) }
                    </ol>
                </div>
            </section>
        }
    }
}
