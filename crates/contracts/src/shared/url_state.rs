//! Helpers for reading and writing the URL state the site cares about:
//! the current path and the `focus` query parameter.

use crate::enums::{normalize_focus, ProjectFocus};
use std::collections::HashMap;

/// Name of the query parameter carrying the work-page filter
pub const FOCUS_PARAM: &str = "focus";

/// Link to `base_path` with the given focus applied.
///
/// The default focus clears the parameter instead of writing `focus=all`.
pub fn focus_href(base_path: &str, focus: ProjectFocus) -> String {
    if focus.is_default() {
        base_path.to_string()
    } else {
        format!("{}?{}={}", base_path, FOCUS_PARAM, focus.as_str())
    }
}

/// Extract and normalize the focus from a raw query string.
///
/// Accepts the string with or without the leading `?`. Pairs are decoded one
/// at a time so a malformed or nested unrelated parameter cannot hide the
/// focus. When `focus` repeats, the first occurrence wins.
pub fn focus_from_query(query: &str) -> ProjectFocus {
    let raw = query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .find_map(|pair| {
            serde_qs::from_str::<HashMap<String, String>>(pair)
                .ok()
                .and_then(|mut decoded| decoded.remove(FOCUS_PARAM))
        });
    normalize_focus(raw.as_deref())
}

/// `true` when `current_path` is `section` itself or lies underneath it.
///
/// Matching is segment aware: `/work/lovibe` is inside `/work`, `/workshop`
/// is not. The root never acts as a section, otherwise every page would match.
pub fn is_within_section(current_path: &str, section: &str) -> bool {
    if section == "/" {
        return current_path == "/";
    }
    let section = section.trim_end_matches('/');
    match current_path.strip_prefix(section) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_href() {
        assert_eq!(focus_href("/work", ProjectFocus::All), "/work");
        assert_eq!(
            focus_href("/work", ProjectFocus::GamesWeb3),
            "/work?focus=games-web3"
        );
    }

    #[test]
    fn test_focus_from_query() {
        assert_eq!(focus_from_query("?focus=devops"), ProjectFocus::Devops);
        assert_eq!(focus_from_query("focus=devops"), ProjectFocus::Devops);
        assert_eq!(
            focus_from_query("?ref=nav&focus=full-stack"),
            ProjectFocus::FullStack
        );
        assert_eq!(focus_from_query(""), ProjectFocus::All);
        assert_eq!(focus_from_query("?focus="), ProjectFocus::All);
        assert_eq!(focus_from_query("?focus=DEVOPS"), ProjectFocus::All);
    }

    #[test]
    fn test_focus_survives_unrelated_parameters() {
        assert_eq!(focus_from_query("?tag=a&tag=b&focus=devops"), ProjectFocus::Devops);
        assert_eq!(focus_from_query("?utm[source]=x&focus=devops"), ProjectFocus::Devops);
        assert_eq!(focus_from_query("?ref=%E0%A4&focus=devops"), ProjectFocus::Devops);
        assert_eq!(focus_from_query("?focus=dev%6Fps"), ProjectFocus::Devops);
    }

    #[test]
    fn test_repeated_focus_takes_first() {
        assert_eq!(
            focus_from_query("?focus=devops&focus=full-stack"),
            ProjectFocus::Devops
        );
        assert_eq!(focus_from_query("?focus=bogus&focus=devops"), ProjectFocus::All);
    }

    #[test]
    fn test_is_within_section() {
        assert!(is_within_section("/work", "/work"));
        assert!(is_within_section("/work/lovibe", "/work"));
        assert!(!is_within_section("/workshop", "/work"));
        assert!(!is_within_section("/about-me", "/work"));
        assert!(is_within_section("/", "/"));
        assert!(!is_within_section("/work", "/"));
    }
}
