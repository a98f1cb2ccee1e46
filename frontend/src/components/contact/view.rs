use super::messages::Msg;
use super::state::Contact;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

const TIMELINES: [&str; 4] = ["1 day", "2-3 days", "1 week", "flexible"];
const BUDGETS: [(&str, &str); 4] = [
    ("<$1000", "Less than $1,000"),
    ("$1000-$3000", "$1,000 - $3,000"),
    ("$3000-$5000", "$3,000 - $5,000"),
    ("$5000+", "$5,000+"),
];

pub fn view(component: &Contact, ctx: &Context<Contact>) -> Html {
    html! {
        <section id="contact" class="contact">
            <div class="container">
                <h2>
                    { "Get In " }
                    <span class="text-gradient">{ "Touch" }</span>
                </h2>
                <p class="subtitle">
                    { "Ready to start your project? Contact us and let's build something amazing together" }
                </p>
                <div class="contact-grid">
                    { form(component, ctx) }
                    { channels(component) }
                </div>
            </div>
        </section>
    }
}

fn form(component: &Contact, ctx: &Context<Contact>) -> Html {
    let link = ctx.link();
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });
    html! {
        <div class="glass-card form">
            <form {onsubmit}>
                <div class="row">
                    <div>
                        <label>{ "Full Name *" }</label>
                        <input
                            required=true
                            value={component.full_name.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                Msg::SetName(e.target_unchecked_into::<HtmlInputElement>().value())
                            })}
                        />
                    </div>
                    <div>
                        <label>{ "Email *" }</label>
                        <input
                            type="email"
                            required=true
                            value={component.email.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                Msg::SetEmail(e.target_unchecked_into::<HtmlInputElement>().value())
                            })}
                        />
                    </div>
                </div>

                <div class="row">
                    <div>
                        <label>{ "Phone/Telegram" }</label>
                        <input
                            value={component.phone.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                Msg::SetPhone(e.target_unchecked_into::<HtmlInputElement>().value())
                            })}
                        />
                    </div>
                    <div>
                        <label>{ "Company/Project Name" }</label>
                        <input
                            value={component.company_name.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                Msg::SetCompanyName(e.target_unchecked_into::<HtmlInputElement>().value())
                            })}
                        />
                    </div>
                </div>

                <div>
                    <label>{ "Service *" }</label>
                    <select
                        value={component.service_type.clone()}
                        onchange={link.callback(|e: Event| {
                            Msg::SetService(e.target_unchecked_into::<HtmlSelectElement>().value())
                        })}
                    >
                        <option value="" selected={component.service_type.is_empty()}>
                            { "Select a service" }
                        </option>
                        { for component.services.iter().map(|service| html! {
                            <option
                                value={service.service_name.clone()}
                                selected={component.service_type == service.service_name}
                            >
                                { &service.service_name }
                            </option>
                        }) }
                    </select>
                </div>

                <div class="row">
                    <div>
                        <label>{ "Timeline *" }</label>
                        <select
                            value={component.timeline.clone()}
                            onchange={link.callback(|e: Event| {
                                Msg::SetTimeline(e.target_unchecked_into::<HtmlSelectElement>().value())
                            })}
                        >
                            <option value="" selected={component.timeline.is_empty()}>
                                { "Select timeline" }
                            </option>
                            { for TIMELINES.iter().map(|value| html! {
                                <option
                                    value={*value}
                                    selected={component.timeline == *value}
                                >
                                    { *value }
                                </option>
                            }) }
                        </select>
                    </div>
                    <div>
                        <label>{ "Budget Range" }</label>
                        <select
                            value={component.budget_range.clone()}
                            onchange={link.callback(|e: Event| {
                                Msg::SetBudget(e.target_unchecked_into::<HtmlSelectElement>().value())
                            })}
                        >
                            <option value="" selected={component.budget_range.is_empty()}>
                                { "Optional" }
                            </option>
                            { for BUDGETS.iter().map(|(value, label)| html! {
                                <option
                                    value={*value}
                                    selected={component.budget_range == *value}
                                >
                                    { *label }
                                </option>
                            }) }
                        </select>
                    </div>
                </div>

                <div>
                    <label>{ "Project Description *" }</label>
                    <textarea
                        required=true
                        rows="5"
                        placeholder="Tell us about your project..."
                        value={component.project_description.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::SetDescription(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                        })}
                    />
                </div>

                <button
                    type="submit"
                    class="btn gradient-primary"
                    disabled={component.submitting}
                >
                    { if component.submitting { "Sending..." } else { "Submit Inquiry" } }
                </button>
            </form>
        </div>
    }
}

fn channels(component: &Contact) -> Html {
    let Some(info) = &component.company else {
        return html! { <div class="channels" /> };
    };
    let telegram = info.telegram.trim_start_matches('@');
    let whatsapp: String = info.whatsapp.chars().filter(char::is_ascii_digit).collect();
    html! {
        <div class="channels">
            <div class="glass-card">
                <h3>{ "Direct Contact" }</h3>
                { channel("mailto", format!("mailto:{}", info.email), "Email", &info.email) }
                { channel("telegram", format!("https://t.me/{telegram}"), "Telegram", &info.telegram) }
                { channel("whatsapp", format!("https://wa.me/{whatsapp}"), "WhatsApp", &info.whatsapp) }
            </div>
            <div class="glass-card">
                <h3>{ "Response Time" }</h3>
                <p>
                    { "We typically respond within 24 hours. For urgent inquiries, \
                       please contact us directly via Telegram or WhatsApp." }
                </p>
            </div>
        </div>
    }
}

fn channel(kind: &str, href: String, name: &str, value: &str) -> Html {
    html! {
        <a class={classes!("channel", kind.to_string())} {href} target="_blank" rel="noopener noreferrer">
            <p class="name">{ name }</p>
            <p class="value">{ value }</p>
        </a>
    }
}
