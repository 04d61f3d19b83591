//! Theme management for the site.
//!
//! Light, dark, or whatever the operating system prefers. The choice is
//! persisted in localStorage and applied as `data-theme` on `<body>`.

pub mod theme_toggle;

pub use theme_toggle::ThemeToggle;

use crate::shared::browser_state::listen;
use crate::shared::storage;
use leptos::prelude::*;
use web_sys::window;

const THEME_STORAGE_KEY: &str = "portfolio-theme";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::System => "System",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "light" => Theme::Light,
            "dark" => Theme::Dark,
            _ => Theme::System,
        }
    }

    pub fn all() -> [Theme; 3] {
        [Theme::Light, Theme::Dark, Theme::System]
    }

    /// Neighbour in toggle order, wrapping around at both ends
    pub fn step(&self, delta: isize) -> Theme {
        let all = Theme::all();
        let len = all.len() as isize;
        let index = all.iter().position(|t| t == self).unwrap_or(0) as isize;
        all[((index + delta).rem_euclid(len)) as usize]
    }
}

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

fn dark_scheme_query() -> Option<web_sys::MediaQueryList> {
    window().and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
}

fn system_prefers_dark() -> bool {
    dark_scheme_query().map(|q| q.matches()).unwrap_or(false)
}

/// Concrete palette for a theme choice given the current OS preference.
fn palette(theme: Theme, system_dark: bool) -> &'static str {
    match theme {
        Theme::System if system_dark => "dark",
        Theme::System => "light",
        other => other.as_str(),
    }
}

/// Set `data-theme` on body to the concrete palette in use.
fn apply_theme(theme: Theme) {
    let resolved = palette(theme, system_prefers_dark());
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.set_attribute("data-theme", resolved);
    }
}

/// Re-resolve the palette whenever the OS scheme flips while `System` is chosen.
fn follow_system_scheme(theme: RwSignal<Theme>) {
    let Some(query) = dark_scheme_query() else {
        return;
    };
    listen(&query, "change", move |_| {
        let current = theme.get_untracked();
        if current == Theme::System {
            log::debug!("system color scheme changed");
            apply_theme(current);
        }
    });
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    /// Set the theme and persist to storage.
    pub fn set_theme(&self, theme: Theme) {
        log::debug!("theme -> {}", theme.as_str());
        self.theme.set(theme);
        storage::set_string(THEME_STORAGE_KEY, theme.as_str());
        apply_theme(theme);
    }

    pub fn get_theme(&self) -> Theme {
        self.theme.get()
    }
}

#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let initial_theme = storage::get_string(THEME_STORAGE_KEY)
        .map(|s| Theme::from_str(&s))
        .unwrap_or_default();
    apply_theme(initial_theme);

    let theme = RwSignal::new(initial_theme);
    follow_system_scheme(theme);
    provide_context(ThemeContext { theme });

    children()
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_wraps() {
        assert_eq!(Theme::Light.step(1), Theme::Dark);
        assert_eq!(Theme::System.step(1), Theme::Light);
        assert_eq!(Theme::Light.step(-1), Theme::System);
    }

    #[test]
    fn test_unknown_stored_value_is_system() {
        assert_eq!(Theme::from_str("forest"), Theme::System);
        assert_eq!(Theme::from_str("dark"), Theme::Dark);
    }

    #[test]
    fn test_system_palette_tracks_os_scheme() {
        assert_eq!(palette(Theme::System, true), "dark");
        assert_eq!(palette(Theme::System, false), "light");
    }

    #[test]
    fn test_explicit_palette_ignores_os_scheme() {
        assert_eq!(palette(Theme::Light, true), "light");
        assert_eq!(palette(Theme::Dark, false), "dark");
    }
}
