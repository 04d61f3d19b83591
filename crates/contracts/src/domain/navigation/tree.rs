use crate::enums::ProjectFocus;
use crate::shared::url_state::focus_href;

/// Icon shown next to a navigation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavIcon {
    Home,
    User,
    Toolbox,
    Folder,
    Briefcase,
    FileDown,
    Handshake,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavPriority {
    Primary,
    Secondary,
}

/// Second-level navigation entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavChild {
    pub label: &'static str,
    pub target_path: &'static str,
    /// `None` means the child only takes part in path matching
    pub target_focus: Option<ProjectFocus>,
    pub aria_label: &'static str,
}

impl NavChild {
    pub fn href(&self) -> String {
        match self.target_focus {
            Some(focus) => focus_href(self.target_path, focus),
            None => self.target_path.to_string(),
        }
    }
}

/// Top-level navigation entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavNode {
    pub label: &'static str,
    pub target_path: &'static str,
    pub target_focus: Option<ProjectFocus>,
    pub icon: NavIcon,
    pub aria_label: &'static str,
    pub priority: NavPriority,
    /// Static file served as a download rather than a routed page
    pub download: bool,
    /// Also shown as a call-to-action in the header
    pub header_cta: bool,
    pub children: &'static [NavChild],
}

impl NavNode {
    pub fn href(&self) -> String {
        match self.target_focus {
            Some(focus) => focus_href(self.target_path, focus),
            None => self.target_path.to_string(),
        }
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

const fn work_child(
    label: &'static str,
    focus: ProjectFocus,
    aria_label: &'static str,
) -> NavChild {
    NavChild {
        label,
        target_path: WORK_PATH,
        target_focus: Some(focus),
        aria_label,
    }
}

pub const HOME_PATH: &str = "/";
pub const ABOUT_PATH: &str = "/about-me";
pub const EXPERTISE_PATH: &str = "/expertise";
pub const WORK_PATH: &str = "/work";
pub const EXPERIENCE_PATH: &str = "/experience";
pub const HIRE_ME_PATH: &str = "/hire-me";
pub const RESUME_PATH: &str = "/Ashwin_Pulipati_Resume.pdf";

const WORK_CHILDREN: &[NavChild] = &[
    work_child("All Projects", ProjectFocus::All, "View all selected projects"),
    work_child(
        "Frontend-heavy",
        ProjectFocus::FrontendHeavy,
        "View frontend-heavy projects",
    ),
    work_child(
        "Backend-heavy",
        ProjectFocus::BackendHeavy,
        "View backend-heavy projects",
    ),
    work_child("Full-stack", ProjectFocus::FullStack, "View full-stack projects"),
    work_child(
        "DevOps / Data",
        ProjectFocus::Devops,
        "View DevOps and data projects",
    ),
    work_child(
        "Games & Web3",
        ProjectFocus::GamesWeb3,
        "View game and Web3 experiments",
    ),
];

/// Site navigation, shared by the sidebar and the header
pub const NAV_ITEMS: &[NavNode] = &[
    NavNode {
        label: "Home",
        target_path: HOME_PATH,
        target_focus: None,
        icon: NavIcon::Home,
        aria_label: "Go to home section",
        priority: NavPriority::Primary,
        download: false,
        header_cta: false,
        children: &[],
    },
    NavNode {
        label: "About Me",
        target_path: ABOUT_PATH,
        target_focus: None,
        icon: NavIcon::User,
        aria_label: "Learn more about Ashwin Pulipati",
        priority: NavPriority::Secondary,
        download: false,
        header_cta: false,
        children: &[],
    },
    NavNode {
        label: "Expertise",
        target_path: EXPERTISE_PATH,
        target_focus: None,
        icon: NavIcon::Toolbox,
        aria_label: "View areas of technical expertise",
        priority: NavPriority::Secondary,
        download: false,
        header_cta: false,
        children: &[],
    },
    NavNode {
        label: "Work",
        target_path: WORK_PATH,
        target_focus: None,
        icon: NavIcon::Folder,
        aria_label: "Browse work and case studies",
        priority: NavPriority::Primary,
        download: false,
        header_cta: false,
        children: WORK_CHILDREN,
    },
    NavNode {
        label: "Experience",
        target_path: EXPERIENCE_PATH,
        target_focus: None,
        icon: NavIcon::Briefcase,
        aria_label: "View professional experience",
        priority: NavPriority::Secondary,
        download: false,
        header_cta: false,
        children: &[],
    },
    NavNode {
        label: "Resume",
        target_path: RESUME_PATH,
        target_focus: None,
        icon: NavIcon::FileDown,
        aria_label: "Download resume as PDF",
        priority: NavPriority::Secondary,
        download: true,
        header_cta: true,
        children: &[],
    },
    NavNode {
        label: "Hire Me",
        target_path: HIRE_ME_PATH,
        target_focus: None,
        icon: NavIcon::Handshake,
        aria_label: "Contact me for opportunities",
        priority: NavPriority::Primary,
        download: false,
        header_cta: true,
        children: &[],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_tree_is_well_formed() {
        for node in NAV_ITEMS {
            assert!(!node.label.is_empty());
            assert!(node.target_path.starts_with('/'), "{}", node.label);
            for child in node.children {
                assert!(!child.label.is_empty());
                assert!(child.target_path.starts_with('/'), "{}", child.label);
            }
        }
    }

    #[test]
    fn test_sibling_targets_are_distinct() {
        for node in NAV_ITEMS {
            let hrefs: Vec<String> = node.children.iter().map(NavChild::href).collect();
            for (i, href) in hrefs.iter().enumerate() {
                assert!(!hrefs[i + 1..].contains(href), "duplicate {href}");
            }
        }
    }

    #[test]
    fn test_work_child_hrefs() {
        let work = NAV_ITEMS.iter().find(|n| n.label == "Work").unwrap();
        let hrefs: Vec<String> = work.children.iter().map(NavChild::href).collect();
        assert_eq!(
            hrefs,
            vec![
                "/work",
                "/work?focus=frontend-heavy",
                "/work?focus=backend-heavy",
                "/work?focus=full-stack",
                "/work?focus=devops",
                "/work?focus=games-web3",
            ]
        );
    }
}
