use super::messages::Msg;
use super::state::Team;
use crate::pages::admin::AdminNav;
use common::model::TeamMember;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

pub fn view(component: &Team, ctx: &Context<Team>) -> Html {
    html! {
        <div class="admin-page">
            <AdminNav title="Manage" accent="Team" />
            <div class="container">
                <button
                    class="btn gradient-primary"
                    onclick={ctx.link().callback(|_| Msg::OpenNew)}
                >
                    { "Add Team Member" }
                </button>
                <div class="glass-card table-card">
                    <table>
                        <thead>
                            <tr>
                                <th>{ "Photo" }</th>
                                <th>{ "Name" }</th>
                                <th>{ "Title" }</th>
                                <th>{ "Skills" }</th>
                                <th>{ "Actions" }</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for component.members.iter().map(|member| row(ctx, member)) }
                        </tbody>
                    </table>
                </div>
                { dialog(component, ctx) }
            </div>
        </div>
    }
}

fn row(ctx: &Context<Team>, member: &TeamMember) -> Html {
    let edit = member.clone();
    let delete_id = member.id.clone();
    html! {
        <tr>
            <td>
                <img class="avatar" src={member.photo_url.clone()} alt={member.name.clone()} />
            </td>
            <td class="name">{ &member.name }</td>
            <td>{ &member.title }</td>
            <td>{ member.skills.join(", ") }</td>
            <td>
                <button
                    class="btn outline"
                    onclick={ctx.link().callback(move |_| Msg::OpenEdit(edit.clone()))}
                >
                    { "Edit" }
                </button>
                <button
                    class="btn ghost danger"
                    onclick={ctx.link().callback(move |_| Msg::Delete(delete_id.clone()))}
                >
                    { "Delete" }
                </button>
            </td>
        </tr>
    }
}

fn dialog(component: &Team, ctx: &Context<Team>) -> Html {
    if !component.dialog_open {
        return Html::default();
    }
    let link = ctx.link();
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Save
    });
    let pick = link.callback(|e: Event| {
        let input = e.target_unchecked_into::<HtmlInputElement>();
        Msg::PickPhoto(input.files().and_then(|files| files.get(0)))
    });
    html! {
        <div class="dialog-backdrop" onclick={link.callback(|_| Msg::CloseDialog)}>
            <div class="dialog" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <h3>
                    { if component.editing.is_some() { "Edit Team Member" } else { "Add Team Member" } }
                </h3>
                <form {onsubmit}>
                    <label>{ "Photo" }</label>
                    if !component.form.photo_url.is_empty() && component.photo.is_none() {
                        <img class="preview" src={component.form.photo_url.clone()} />
                    }
                    <input type="file" accept="image/*" onchange={pick} />

                    <label>{ "Name *" }</label>
                    <input
                        required=true
                        value={component.form.name.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::SetName(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />

                    <label>{ "Title *" }</label>
                    <input
                        required=true
                        value={component.form.title.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::SetTitle(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />

                    <label>{ "Company" }</label>
                    <input
                        value={component.form.company.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::SetCompany(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />

                    <label>{ "Bio *" }</label>
                    <textarea
                        required=true
                        rows="3"
                        value={component.form.bio.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::SetBio(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                        })}
                    />

                    <label>{ "Skills (comma-separated)" }</label>
                    <input
                        value={component.form.skills.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::SetSkills(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />

                    <div class="row">
                        <div>
                            <label>{ "LinkedIn URL" }</label>
                            <input
                                value={component.form.linkedin.clone()}
                                oninput={link.callback(|e: InputEvent| {
                                    Msg::SetLinkedin(e.target_unchecked_into::<HtmlInputElement>().value())
                                })}
                            />
                        </div>
                        <div>
                            <label>{ "Twitter URL" }</label>
                            <input
                                value={component.form.twitter.clone()}
                                oninput={link.callback(|e: InputEvent| {
                                    Msg::SetTwitter(e.target_unchecked_into::<HtmlInputElement>().value())
                                })}
                            />
                        </div>
                    </div>

                    <label>{ "Display Order" }</label>
                    <input
                        type="number"
                        value={component.form.display_order.to_string()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::SetDisplayOrder(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />

                    <button type="submit" class="btn gradient-primary" disabled={component.saving}>
                        { if component.saving { "Uploading..." } else { "Save" } }
                    </button>
                </form>
            </div>
        </div>
    }
}
