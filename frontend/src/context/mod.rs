//! Application-wide contexts: the shared data handles (api client,
//! query cache, session store) and the persisted language/theme
//! preferences.

mod data;
mod language;
mod theme;
mod translations;

pub use data::DataContext;
pub use language::{Language, LanguageHandle, LanguageProvider};
pub use theme::{Theme, ThemeHandle, ThemeProvider};
