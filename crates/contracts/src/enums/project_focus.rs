use serde::{Deserialize, Serialize};
use std::fmt;

/// Filter bucket a project can belong to on the work page.
///
/// The slug (`as_str`) is what travels in the `focus` query parameter.
/// `All` is the catch-all and the only default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectFocus {
    #[default]
    All,
    FrontendHeavy,
    BackendHeavy,
    FullStack,
    Devops,
    GamesWeb3,
}

impl ProjectFocus {
    /// Slug used in URLs and serialized data
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectFocus::All => "all",
            ProjectFocus::FrontendHeavy => "frontend-heavy",
            ProjectFocus::BackendHeavy => "backend-heavy",
            ProjectFocus::FullStack => "full-stack",
            ProjectFocus::Devops => "devops",
            ProjectFocus::GamesWeb3 => "games-web3",
        }
    }

    /// Human readable label for selects and nav entries
    pub fn label(&self) -> &'static str {
        match self {
            ProjectFocus::All => "All projects",
            ProjectFocus::FrontendHeavy => "Frontend-heavy",
            ProjectFocus::BackendHeavy => "Backend-heavy",
            ProjectFocus::FullStack => "Full-stack",
            ProjectFocus::Devops => "DevOps / Data",
            ProjectFocus::GamesWeb3 => "Games & Web3",
        }
    }

    /// One-line explanation shown under the focus select
    pub fn description(&self) -> &'static str {
        match self {
            ProjectFocus::All => "Show a curated mix of full-stack, AI, dashboards, and games.",
            ProjectFocus::FrontendHeavy => {
                "Projects where UX, React/Next.js, and client flows do the heavy lifting."
            }
            ProjectFocus::BackendHeavy => {
                "Systems focused on orchestration, APIs, and data handling."
            }
            ProjectFocus::FullStack => {
                "End-to-end builds where I owned both frontend and backend."
            }
            ProjectFocus::Devops => {
                "Work with pipelines, event-driven flows, or infrastructure concerns."
            }
            ProjectFocus::GamesWeb3 => {
                "Experimental engines and playful, non-traditional interfaces."
            }
        }
    }

    /// All members in display order, default first
    pub fn all() -> [ProjectFocus; 6] {
        [
            ProjectFocus::All,
            ProjectFocus::FrontendHeavy,
            ProjectFocus::BackendHeavy,
            ProjectFocus::FullStack,
            ProjectFocus::Devops,
            ProjectFocus::GamesWeb3,
        ]
    }

    pub fn is_default(&self) -> bool {
        *self == ProjectFocus::All
    }

    /// Exact slug lookup. Case and whitespace variants do not match.
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::all().into_iter().find(|focus| focus.as_str() == slug)
    }
}

impl fmt::Display for ProjectFocus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map an untrusted `focus` query value onto a valid member.
///
/// Missing, empty and unrecognized values all collapse to the default.
pub fn normalize_focus(raw: Option<&str>) -> ProjectFocus {
    raw.and_then(ProjectFocus::from_slug).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_slugs_round_trip() {
        for focus in ProjectFocus::all() {
            assert_eq!(normalize_focus(Some(focus.as_str())), focus);
        }
    }

    #[test]
    fn test_default_equivalence() {
        assert_eq!(normalize_focus(None), ProjectFocus::All);
        assert_eq!(normalize_focus(Some("")), ProjectFocus::All);
        assert_eq!(normalize_focus(Some("all")), ProjectFocus::All);
    }

    #[test]
    fn test_strict_matching() {
        assert_eq!(normalize_focus(Some("DevOps")), ProjectFocus::All);
        assert_eq!(normalize_focus(Some(" devops")), ProjectFocus::All);
        assert_eq!(normalize_focus(Some("devops ")), ProjectFocus::All);
        assert_eq!(normalize_focus(Some("games_web3")), ProjectFocus::All);
        assert_eq!(normalize_focus(Some("<script>")), ProjectFocus::All);
    }

    #[test]
    fn test_serde_uses_slug() {
        let json = serde_json::to_string(&ProjectFocus::GamesWeb3).unwrap();
        assert_eq!(json, "\"games-web3\"");
        let parsed: ProjectFocus = serde_json::from_str("\"backend-heavy\"").unwrap();
        assert_eq!(parsed, ProjectFocus::BackendHeavy);
    }

    #[test]
    fn test_display_matches_slug() {
        assert_eq!(ProjectFocus::FullStack.to_string(), "full-stack");
    }

    proptest! {
        #[test]
        fn normalize_is_total_and_idempotent(raw in ".*") {
            let once = normalize_focus(Some(&raw));
            prop_assert!(ProjectFocus::all().contains(&once));
            let twice = normalize_focus(Some(&once.to_string()));
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn unknown_values_fall_back_to_default(raw in "[A-Za-z0-9 _-]{0,24}") {
            let expected = ProjectFocus::from_slug(&raw).unwrap_or(ProjectFocus::All);
            prop_assert_eq!(normalize_focus(Some(&raw)), expected);
        }
    }
}
