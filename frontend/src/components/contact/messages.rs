use crate::api::ApiError;
use common::model::{CompanyInfo, Service};

pub enum Msg {
    CompanyLoaded(Result<CompanyInfo, ApiError>),
    ServicesLoaded(Result<Vec<Service>, ApiError>),
    SetName(String),
    SetEmail(String),
    SetPhone(String),
    SetCompanyName(String),
    SetService(String),
    SetTimeline(String),
    SetBudget(String),
    SetDescription(String),
    Submit,
    Submitted(Result<(), ApiError>),
}
