//! Selected color theme, persisted like the language and mirrored to a
//! `theme-*` class on the document element so the stylesheet can key
//! off it.

use yew::prelude::*;

const STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
    Purple,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Dark, Theme::Light, Theme::Purple];

    pub fn code(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
            Theme::Purple => "purple",
        }
    }

    pub fn from_code(code: &str) -> Option<Theme> {
        match code {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            "purple" => Some(Theme::Purple),
            _ => None,
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            Theme::Dark => "theme-dark",
            Theme::Light => "theme-light",
            Theme::Purple => "theme-purple",
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Purple
    }
}

#[derive(Clone, PartialEq)]
pub struct ThemeHandle {
    pub theme: Theme,
    on_change: Callback<Theme>,
}

impl ThemeHandle {
    pub fn set(&self, theme: Theme) {
        self.on_change.emit(theme);
    }
}

#[derive(Properties, PartialEq)]
pub struct ProviderProps {
    #[prop_or_default]
    pub children: Html,
}

pub enum Msg {
    Set(Theme),
}

pub struct ThemeProvider {
    handle: ThemeHandle,
}

impl Component for ThemeProvider {
    type Message = Msg;
    type Properties = ProviderProps;

    fn create(ctx: &Context<Self>) -> Self {
        let theme = load_stored();
        apply_document_class(theme);
        ThemeProvider {
            handle: ThemeHandle {
                theme,
                on_change: ctx.link().callback(Msg::Set),
            },
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Set(theme) => {
                if self.handle.theme == theme {
                    return false;
                }
                persist(theme);
                apply_document_class(theme);
                self.handle.theme = theme;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <ContextProvider<ThemeHandle> context={self.handle.clone()}>
                { ctx.props().children.clone() }
            </ContextProvider<ThemeHandle>>
        }
    }
}

fn load_stored() -> Theme {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
        .as_deref()
        .and_then(Theme::from_code)
        .unwrap_or_default()
}

fn persist(theme: Theme) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(STORAGE_KEY, theme.code());
    }
}

/// Swaps the `theme-*` class on `<html>`; all other theme classes are
/// removed first.
fn apply_document_class(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let classes = root.class_list();
    for other in Theme::ALL {
        let _ = classes.remove_1(other.class_name());
    }
    let _ = classes.add_1(theme.class_name());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_purple() {
        assert_eq!(Theme::default(), Theme::Purple);
    }

    #[test]
    fn codes_round_trip_and_unknown_falls_through() {
        for theme in Theme::ALL {
            assert_eq!(Theme::from_code(theme.code()), Some(theme));
        }
        assert_eq!(Theme::from_code("solarized"), None);
    }
}
