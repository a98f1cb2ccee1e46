//! Typed client for the hosted data service: table reads and writes,
//! object storage, and the auth/session endpoints. All network traffic
//! in the application goes through [`ApiClient`].

mod client;
mod config;
mod error;
mod session;

pub use client::{ApiClient, Order};
pub use error::ApiError;
pub use session::{Session, SessionStore};
