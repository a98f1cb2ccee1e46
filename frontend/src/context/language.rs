//! Selected UI language: read from local storage once at startup,
//! written back on every change, falling back to English whenever the
//! stored value is absent or unrecognized.

use super::translations;
use yew::prelude::*;

const STORAGE_KEY: &str = "language";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Ru,
    Uz,
    Id,
}

impl Language {
    pub const ALL: [Language; 4] =
        [Language::En, Language::Ru, Language::Uz, Language::Id];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
            Language::Uz => "uz",
            Language::Id => "id",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en" => Some(Language::En),
            "ru" => Some(Language::Ru),
            "uz" => Some(Language::Uz),
            "id" => Some(Language::Id),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ru => "Русский",
            Language::Uz => "O'zbekcha",
            Language::Id => "Indonesia",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::En
    }
}

/// Translates a key for the given language. An unknown key comes back
/// unchanged, so a missing entry shows up as placeholder text instead
/// of taking the page down.
pub fn translate(language: Language, key: &str) -> String {
    match translations::lookup(language, key) {
        Some(text) => text.to_string(),
        None => {
            #[cfg(target_arch = "wasm32")]
            gloo_console::warn!(format!("missing translation {key:?} for {language:?}"));
            key.to_string()
        }
    }
}

/// Context value handed to consumers: the active language plus the
/// change callback wired back to the provider.
#[derive(Clone, PartialEq)]
pub struct LanguageHandle {
    pub language: Language,
    on_change: Callback<Language>,
}

impl LanguageHandle {
    pub fn t(&self, key: &str) -> String {
        translate(self.language, key)
    }

    pub fn set(&self, language: Language) {
        self.on_change.emit(language);
    }
}

#[derive(Properties, PartialEq)]
pub struct ProviderProps {
    #[prop_or_default]
    pub children: Html,
}

pub enum Msg {
    Set(Language),
}

/// Owns the selected language for the whole tree.
pub struct LanguageProvider {
    handle: LanguageHandle,
}

impl Component for LanguageProvider {
    type Message = Msg;
    type Properties = ProviderProps;

    fn create(ctx: &Context<Self>) -> Self {
        LanguageProvider {
            handle: LanguageHandle {
                language: load_stored(),
                on_change: ctx.link().callback(Msg::Set),
            },
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Set(language) => {
                if self.handle.language == language {
                    return false;
                }
                persist(language);
                self.handle.language = language;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <ContextProvider<LanguageHandle> context={self.handle.clone()}>
                { ctx.props().children.clone() }
            </ContextProvider<LanguageHandle>>
        }
    }
}

fn load_stored() -> Language {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
    match stored.as_deref().map(Language::from_code) {
        Some(Some(language)) => language,
        Some(None) => {
            gloo_console::warn!("stored language not recognized, using default");
            Language::default()
        }
        None => Language::default(),
    }
}

fn persist(language: Language) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(STORAGE_KEY, language.code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrecognized_codes_fall_back_to_default() {
        for code in ["de", "EN", "", "english"] {
            assert_eq!(Language::from_code(code), None);
        }
        assert_eq!(Language::default(), Language::En);
    }

    #[test]
    fn codes_round_trip() {
        for language in Language::ALL {
            assert_eq!(Language::from_code(language.code()), Some(language));
        }
    }

    #[test]
    fn unknown_key_translates_to_itself() {
        for language in Language::ALL {
            assert_eq!(translate(language, "definitely_missing"), "definitely_missing");
        }
    }

    #[test]
    fn known_key_translates_per_language() {
        assert_eq!(translate(Language::En, "services_word"), "Services");
        assert_eq!(translate(Language::Ru, "services_word"), "Услуги");
        assert_ne!(translate(Language::Uz, "view_demo"), "view_demo");
    }
}
