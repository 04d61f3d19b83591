use super::catalog::ProjectRecord;
use crate::enums::ProjectFocus;

/// Stable filter of `records` down to those tagged with `focus`.
///
/// The catch-all returns every record. Results borrow from the input.
pub fn filter_by_focus(records: &[ProjectRecord], focus: ProjectFocus) -> Vec<&ProjectRecord> {
    if focus.is_default() {
        return records.iter().collect();
    }
    records.iter().filter(|r| r.has_focus(focus)).collect()
}

/// Live-region text under the work page header
pub fn gallery_summary(visible: usize, total: usize, focus: ProjectFocus) -> String {
    if focus.is_default() {
        format!("Showing {} of {} projects.", visible, total)
    } else {
        format!(
            "Showing {} of {} projects for “{}”.",
            visible,
            total,
            focus.label()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::work::catalog::PROJECTS;
    use proptest::prelude::*;

    fn record(id: &'static str, focus_tags: &'static [ProjectFocus]) -> ProjectRecord {
        ProjectRecord {
            id,
            title: id,
            subtitle: None,
            description: "",
            image_url: None,
            live_url: None,
            github_url: None,
            tags: &[],
            focus_tags,
        }
    }

    #[test]
    fn test_default_returns_everything_in_order() {
        let filtered = filter_by_focus(PROJECTS, ProjectFocus::All);
        let ids: Vec<&str> = filtered.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["lovibe", "optipathway", "pastella", "skyerix", "veloria"]);
    }

    #[test]
    fn test_single_match() {
        let filtered = filter_by_focus(PROJECTS, ProjectFocus::GamesWeb3);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "veloria");
        assert!(std::ptr::eq(filtered[0], &PROJECTS[4]));
    }

    #[test]
    fn test_preserves_relative_order() {
        let filtered = filter_by_focus(PROJECTS, ProjectFocus::FrontendHeavy);
        let ids: Vec<&str> = filtered.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["lovibe", "optipathway", "pastella", "skyerix"]);
    }

    #[test]
    fn test_empty_catalog() {
        assert!(filter_by_focus(&[], ProjectFocus::Devops).is_empty());
        assert!(filter_by_focus(&[], ProjectFocus::All).is_empty());
    }

    #[test]
    fn test_gallery_summary() {
        assert_eq!(
            gallery_summary(5, 5, ProjectFocus::All),
            "Showing 5 of 5 projects."
        );
        assert_eq!(
            gallery_summary(1, 5, ProjectFocus::GamesWeb3),
            "Showing 1 of 5 projects for “Games & Web3”."
        );
    }

    const TAG_SETS: &[&[ProjectFocus]] = &[
        &[ProjectFocus::FrontendHeavy],
        &[ProjectFocus::BackendHeavy, ProjectFocus::Devops],
        &[ProjectFocus::FullStack, ProjectFocus::FrontendHeavy],
        &[ProjectFocus::GamesWeb3],
        &[ProjectFocus::Devops],
    ];

    proptest! {
        #[test]
        fn filter_is_an_ordered_subsequence(
            picks in prop::collection::vec(0..TAG_SETS.len(), 0..12),
            focus in prop::sample::select(ProjectFocus::all().to_vec()),
        ) {
            let records: Vec<ProjectRecord> =
                picks.iter().map(|&i| record("p", TAG_SETS[i])).collect();
            let filtered = filter_by_focus(&records, focus);

            if focus.is_default() {
                prop_assert_eq!(filtered.len(), records.len());
            }
            for r in &filtered {
                prop_assert!(focus.is_default() || r.has_focus(focus));
            }

            // Every output element points into the input, in increasing position.
            let mut last = None;
            for r in &filtered {
                let pos = records.iter().position(|x| std::ptr::eq(x, *r));
                prop_assert!(pos.is_some());
                prop_assert!(last < pos);
                last = pos;
            }
            let expected = records.iter().filter(|r| focus.is_default() || r.has_focus(focus)).count();
            prop_assert_eq!(filtered.len(), expected);
        }
    }
}
