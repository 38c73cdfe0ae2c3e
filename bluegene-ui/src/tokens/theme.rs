// Theme management.
// Light is the default: the site is a public marketing page.

use zoon::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Theme {
    Light,
    Dark,
}

const STORAGE_KEY: &str = "bluegene-theme";

static THEME: Lazy<Mutable<Theme>> = Lazy::new(|| {
    let stored_theme = local_storage()
        .get(STORAGE_KEY)
        .unwrap_or(Ok(String::new()))
        .unwrap_or_default();

    let initial_theme = match stored_theme.as_str() {
        "dark" => Theme::Dark,
        _ => Theme::Light,
    };

    Mutable::new(initial_theme)
});

/// Current theme as a signal for reactive styling.
pub fn theme() -> impl Signal<Item = Theme> {
    THEME.signal()
}

/// Set the theme and persist the choice to localStorage.
pub fn set_theme(new_theme: Theme) {
    THEME.set(new_theme);

    let theme_str = match new_theme {
        Theme::Light => "light",
        Theme::Dark => "dark",
    };
    let _ = local_storage().insert(STORAGE_KEY, theme_str);
}

/// Current theme value (non-reactive).
pub fn current_theme() -> Theme {
    THEME.get()
}

pub fn toggle_theme() {
    let new_theme = match current_theme() {
        Theme::Light => Theme::Dark,
        Theme::Dark => Theme::Light,
    };
    set_theme(new_theme);
}
