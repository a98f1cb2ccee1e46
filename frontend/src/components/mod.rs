//! Public site sections, composed top-to-bottom on the landing page.

mod about;
pub mod contact;
mod hero;
mod language_switcher;
mod navbar;
mod portfolio;
mod process;
pub mod reviews;
mod services;
mod showcase;
mod team;
mod templates;
mod theme_switcher;

pub use about::About;
pub use contact::Contact;
pub use hero::Hero;
pub use language_switcher::LanguageSwitcher;
pub use navbar::Navbar;
pub use portfolio::Portfolio;
pub use process::Process;
pub use reviews::Reviews;
pub use services::Services;
pub use showcase::Showcase;
pub use team::Team;
pub use templates::Templates;
pub use theme_switcher::ThemeSwitcher;
