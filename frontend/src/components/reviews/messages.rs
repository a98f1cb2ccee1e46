use crate::api::ApiError;
use crate::context::LanguageHandle;
use common::model::Review;

pub enum Msg {
    Loaded(Result<Vec<Review>, ApiError>),
    Context(LanguageHandle),
    Refresh,
    OpenDialog,
    CloseDialog,
    SetRating(i32),
    SetName(String),
    SetCompany(String),
    SetText(String),
    Submit,
    Submitted(Result<(), ApiError>),
}
