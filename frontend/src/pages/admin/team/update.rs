use super::messages::Msg;
use super::state::Team;
use super::{load, BUCKET};
use crate::api::{ApiClient, ApiError};
use crate::context::DataContext;
use crate::query::run_mutation;
use crate::toast;
use common::cache::Entity;
use common::model::NewTeamMember;
use gloo_console::warn;
use uuid::Uuid;
use yew::prelude::*;

pub fn update(component: &mut Team, ctx: &Context<Team>, msg: Msg) -> bool {
    match msg {
        Msg::Loaded(Ok(members)) => {
            component.members = members;
            true
        }
        Msg::Loaded(Err(_)) => false,
        Msg::Refresh => {
            load(ctx.link().clone());
            false
        }
        Msg::OpenNew => {
            component.editing = None;
            component.form = super::state::MemberForm::blank(component.members.len() as i32 + 1);
            component.photo = None;
            component.dialog_open = true;
            true
        }
        Msg::OpenEdit(member) => {
            component.form = super::state::MemberForm::from_member(&member);
            component.editing = Some(member.id);
            component.photo = None;
            component.dialog_open = true;
            true
        }
        Msg::CloseDialog => {
            component.dialog_open = false;
            true
        }
        Msg::SetName(v) => {
            component.form.name = v;
            false
        }
        Msg::SetTitle(v) => {
            component.form.title = v;
            false
        }
        Msg::SetCompany(v) => {
            component.form.company = v;
            false
        }
        Msg::SetBio(v) => {
            component.form.bio = v;
            false
        }
        Msg::SetSkills(v) => {
            component.form.skills = v;
            false
        }
        Msg::SetLinkedin(v) => {
            component.form.linkedin = v;
            false
        }
        Msg::SetTwitter(v) => {
            component.form.twitter = v;
            false
        }
        Msg::SetDisplayOrder(v) => {
            component.form.display_order = v.parse().unwrap_or(0);
            false
        }
        Msg::PickPhoto(file) => {
            component.photo = file;
            true
        }
        Msg::Save => {
            if component.saving {
                return false;
            }
            component.saving = true;
            let existing_url = component.form.photo_url.clone();
            let payload = component.form.payload(String::new());
            let editing = component.editing.clone();
            let file = component.photo.clone();
            let data = DataContext::of(ctx);
            let api = data.api.clone();
            run_mutation(
                data.cache.clone(),
                Entity::TeamMember,
                async move { save_member(&api, editing, payload, existing_url, file).await },
                ctx.link().callback(Msg::Saved),
            );
            true
        }
        Msg::Saved(result) => {
            component.saving = false;
            match result {
                Ok(()) => {
                    toast::info(if component.editing.is_some() {
                        "Team member updated."
                    } else {
                        "Team member added."
                    });
                    component.dialog_open = false;
                    component.editing = None;
                    component.photo = None;
                }
                Err(_) => toast::error("Saving the team member failed."),
            }
            true
        }
        Msg::Delete(id) => {
            let data = DataContext::of(ctx);
            let api = data.api.clone();
            run_mutation(
                data.cache.clone(),
                Entity::TeamMember,
                async move { api.delete("team_members", &id).await },
                ctx.link().callback(Msg::Deleted),
            );
            false
        }
        Msg::Deleted(Ok(())) => {
            toast::info("Team member deleted.");
            false
        }
        Msg::Deleted(Err(_)) => {
            toast::error("Deleting the team member failed.");
            false
        }
    }
}

async fn save_member(
    api: &ApiClient,
    editing: Option<String>,
    mut payload: NewTeamMember,
    existing_url: String,
    file: Option<web_sys::File>,
) -> Result<(), ApiError> {
    let uploaded = match &file {
        Some(file) => {
            let ext = file
                .name()
                .rsplit_once('.')
                .map(|(_, ext)| ext.to_string())
                .filter(|ext| !ext.is_empty())
                .unwrap_or_else(|| "bin".to_string());
            let name = format!("{}.{ext}", Uuid::new_v4());
            payload.photo_url = api.upload(BUCKET, &name, file).await?;
            Some(name)
        }
        None => {
            payload.photo_url = existing_url;
            None
        }
    };

    let written = match editing {
        Some(id) => {
            let patch =
                serde_json::to_value(&payload).map_err(|e| ApiError::Decode(e.to_string()))?;
            api.update("team_members", &id, &patch).await
        }
        None => api.insert("team_members", &payload).await,
    };

    if written.is_err() {
        if let Some(name) = uploaded {
            if api.remove_object(BUCKET, &name).await.is_err() {
                warn!(format!("orphaned upload left in {BUCKET}: {name}"));
            }
        }
    }
    written
}
