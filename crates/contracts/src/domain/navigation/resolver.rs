//! Active-state resolution for the navigation tree.
//!
//! Every evaluation starts from scratch: the tree is static and the flags are
//! derived from the current path and the already normalized focus.

use super::tree::{NavChild, NavNode};
use crate::enums::ProjectFocus;
use crate::shared::url_state::is_within_section;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputedNavChild<'a> {
    pub child: &'a NavChild,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputedNavNode<'a> {
    pub node: &'a NavNode,
    pub is_active: bool,
    pub children: Vec<ComputedNavChild<'a>>,
}

impl ComputedNavNode<'_> {
    pub fn active_child(&self) -> Option<&ComputedNavChild<'_>> {
        self.children.iter().find(|c| c.is_active)
    }
}

/// Exact match on path and, when the target carries one, on focus.
fn target_matches(
    target_path: &str,
    target_focus: Option<ProjectFocus>,
    current_path: &str,
    current_focus: ProjectFocus,
) -> bool {
    if current_path != target_path {
        return false;
    }
    target_focus.map_or(true, |focus| focus == current_focus)
}

fn child_is_active(child: &NavChild, current_path: &str, current_focus: ProjectFocus) -> bool {
    target_matches(
        child.target_path,
        child.target_focus,
        current_path,
        current_focus,
    )
}

fn node_matches(node: &NavNode, current_path: &str, current_focus: ProjectFocus) -> bool {
    if node.download {
        return false;
    }
    match node.target_focus {
        Some(_) => target_matches(
            node.target_path,
            node.target_focus,
            current_path,
            current_focus,
        ),
        None => is_within_section(current_path, node.target_path),
    }
}

/// Compute the `is_active` flag of every node and child.
///
/// `current_path` must already be stripped of its query string and
/// `current_focus` must already be normalized.
pub fn resolve_active_state<'a>(
    tree: &'a [NavNode],
    current_path: &str,
    current_focus: ProjectFocus,
) -> Vec<ComputedNavNode<'a>> {
    tree.iter()
        .map(|node| {
            let children: Vec<ComputedNavChild<'a>> = node
                .children
                .iter()
                .map(|child| ComputedNavChild {
                    child,
                    is_active: !node.download
                        && child_is_active(child, current_path, current_focus),
                })
                .collect();
            let is_active = node_matches(node, current_path, current_focus)
                || children.iter().any(|c| c.is_active);
            ComputedNavNode {
                node,
                is_active,
                children,
            }
        })
        .collect()
}

/// Entries promoted to the header call-to-action bar
pub fn header_links(tree: &[NavNode]) -> impl Iterator<Item = &NavNode> {
    tree.iter().filter(|node| node.header_cta)
}

/// Header links highlight for the whole section and never for downloads.
pub fn header_link_is_active(node: &NavNode, current_path: &str) -> bool {
    !node.download && is_within_section(current_path, node.target_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::navigation::tree::{NavIcon, NavPriority, NAV_ITEMS};
    use proptest::prelude::*;

    fn find<'a>(computed: &'a [ComputedNavNode<'a>], label: &str) -> &'a ComputedNavNode<'a> {
        computed
            .iter()
            .find(|n| n.node.label == label)
            .unwrap_or_else(|| panic!("no nav node {label}"))
    }

    fn active_labels(computed: &[ComputedNavNode<'_>]) -> Vec<&'static str> {
        computed
            .iter()
            .filter(|n| n.is_active)
            .map(|n| n.node.label)
            .collect()
    }

    #[test]
    fn test_work_focus_child_is_active() {
        let computed = resolve_active_state(NAV_ITEMS, "/work", ProjectFocus::BackendHeavy);
        let work = find(&computed, "Work");
        assert!(work.is_active);
        for child in &work.children {
            assert_eq!(
                child.is_active,
                child.child.label == "Backend-heavy",
                "{}",
                child.child.label
            );
        }
        assert_eq!(active_labels(&computed), vec!["Work"]);
    }

    #[test]
    fn test_default_focus_activates_all_projects_child() {
        let computed = resolve_active_state(NAV_ITEMS, "/work", ProjectFocus::All);
        let work = find(&computed, "Work");
        assert!(work.is_active);
        assert_eq!(
            work.active_child().map(|c| c.child.label),
            Some("All Projects")
        );
        assert_eq!(work.children.iter().filter(|c| c.is_active).count(), 1);
    }

    #[test]
    fn test_other_section_does_not_match_work() {
        let computed = resolve_active_state(NAV_ITEMS, "/about-me", ProjectFocus::All);
        let work = find(&computed, "Work");
        assert!(!work.is_active);
        assert!(work.children.iter().all(|c| !c.is_active));
        assert_eq!(active_labels(&computed), vec!["About Me"]);
    }

    #[test]
    fn test_root_only_activates_home() {
        for focus in ProjectFocus::all() {
            let computed = resolve_active_state(NAV_ITEMS, "/", focus);
            assert_eq!(active_labels(&computed), vec!["Home"]);
        }
    }

    #[test]
    fn test_home_is_not_a_section_prefix() {
        let computed = resolve_active_state(NAV_ITEMS, "/experience", ProjectFocus::All);
        assert!(!find(&computed, "Home").is_active);
        assert!(find(&computed, "Experience").is_active);
    }

    #[test]
    fn test_nested_path_keeps_section_active() {
        let computed = resolve_active_state(NAV_ITEMS, "/work/lovibe", ProjectFocus::All);
        let work = find(&computed, "Work");
        assert!(work.is_active);
        assert!(work.children.iter().all(|c| !c.is_active));
    }

    #[test]
    fn test_sibling_path_sharing_a_prefix_does_not_match() {
        let computed = resolve_active_state(NAV_ITEMS, "/workshop", ProjectFocus::All);
        assert!(active_labels(&computed).is_empty());
    }

    #[test]
    fn test_download_nodes_are_never_active() {
        let computed = resolve_active_state(
            NAV_ITEMS,
            "/Ashwin_Pulipati_Resume.pdf",
            ProjectFocus::All,
        );
        assert!(!find(&computed, "Resume").is_active);
    }

    #[test]
    fn test_focus_ignored_outside_its_path() {
        let computed = resolve_active_state(NAV_ITEMS, "/hire-me", ProjectFocus::Devops);
        assert_eq!(active_labels(&computed), vec!["Hire Me"]);
        assert!(find(&computed, "Work").children.iter().all(|c| !c.is_active));
    }

    #[test]
    fn test_top_level_node_with_focus() {
        const TREE: &[NavNode] = &[NavNode {
            label: "Games",
            target_path: "/work",
            target_focus: Some(ProjectFocus::GamesWeb3),
            icon: NavIcon::Folder,
            aria_label: "Games",
            priority: NavPriority::Secondary,
            download: false,
            header_cta: false,
            children: &[],
        }];
        assert!(resolve_active_state(TREE, "/work", ProjectFocus::GamesWeb3)[0].is_active);
        assert!(!resolve_active_state(TREE, "/work", ProjectFocus::All)[0].is_active);
        assert!(!resolve_active_state(TREE, "/work/x", ProjectFocus::GamesWeb3)[0].is_active);
    }

    #[test]
    fn test_header_links() {
        let links: Vec<&str> = header_links(NAV_ITEMS).map(|n| n.label).collect();
        assert_eq!(links, vec!["Resume", "Hire Me"]);

        let hire_me = NAV_ITEMS.iter().find(|n| n.label == "Hire Me").unwrap();
        let resume = NAV_ITEMS.iter().find(|n| n.label == "Resume").unwrap();
        assert!(header_link_is_active(hire_me, "/hire-me"));
        assert!(!header_link_is_active(hire_me, "/work"));
        assert!(!header_link_is_active(resume, "/Ashwin_Pulipati_Resume.pdf"));
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let a = resolve_active_state(NAV_ITEMS, "/work", ProjectFocus::FullStack);
        let b = resolve_active_state(NAV_ITEMS, "/work", ProjectFocus::FullStack);
        assert_eq!(a, b);
    }

    fn any_focus() -> impl Strategy<Value = ProjectFocus> {
        prop::sample::select(ProjectFocus::all().to_vec())
    }

    fn any_path() -> impl Strategy<Value = String> {
        prop_oneof![
            prop::sample::select(vec![
                "/".to_string(),
                "/about-me".to_string(),
                "/expertise".to_string(),
                "/work".to_string(),
                "/work/lovibe".to_string(),
                "/experience".to_string(),
                "/hire-me".to_string(),
                "/workshop".to_string(),
            ]),
            "/[a-z/-]{0,16}",
        ]
    }

    proptest! {
        #[test]
        fn at_most_one_active_branch(path in any_path(), focus in any_focus()) {
            let computed = resolve_active_state(NAV_ITEMS, &path, focus);
            prop_assert_eq!(computed.len(), NAV_ITEMS.len());
            prop_assert!(computed.iter().filter(|n| n.is_active).count() <= 1);
            for node in &computed {
                prop_assert_eq!(node.children.len(), node.node.children.len());
                prop_assert!(node.children.iter().filter(|c| c.is_active).count() <= 1);
                if node.children.iter().any(|c| c.is_active) {
                    prop_assert!(node.is_active);
                }
            }
        }

        #[test]
        fn root_prefix_never_leaks(focus in any_focus()) {
            let computed = resolve_active_state(NAV_ITEMS, "/", focus);
            for node in computed.iter().filter(|n| n.node.target_path != "/") {
                prop_assert!(!node.is_active);
            }
        }
    }
}
