use crate::api::ApiError;
use common::model::TeamMember;

pub enum Msg {
    Loaded(Result<Vec<TeamMember>, ApiError>),
    Refresh,
    OpenNew,
    OpenEdit(TeamMember),
    CloseDialog,
    SetName(String),
    SetTitle(String),
    SetCompany(String),
    SetBio(String),
    SetSkills(String),
    SetLinkedin(String),
    SetTwitter(String),
    SetDisplayOrder(String),
    PickPhoto(Option<web_sys::File>),
    Save,
    Saved(Result<(), ApiError>),
    Delete(String),
    Deleted(Result<(), ApiError>),
}
