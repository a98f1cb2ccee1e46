//! Admin screens, all reachable under the `/secret/admin` prefix and
//! rendered behind [`SessionGuard`].

mod company;
mod dashboard;
mod demos;
mod guard;
mod inquiries;
mod login;
mod nav;
mod portfolio;
mod reviews;
mod services;
mod settings;
mod team;
mod templates;

pub use company::CompanyInfoPage;
pub use dashboard::Dashboard;
pub use demos::Demos;
pub use guard::SessionGuard;
pub use inquiries::Inquiries;
pub use login::Login;
pub use nav::AdminNav;
pub use portfolio::Portfolio;
pub use reviews::Reviews;
pub use services::Services;
pub use settings::Settings;
pub use team::Team;
pub use templates::Templates;
