//! Experience timeline content and the small amount of logic around it.

use crate::shared::shell_context::ShellContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tenure {
    Current,
    Past,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceItem {
    pub id: &'static str,
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub tenure: Tenure,
    pub focus: &'static str,
    pub stack: &'static [&'static str],
    pub impact_highlights: &'static [&'static str],
}

pub const EXPERIENCE_ITEMS: &[ExperienceItem] = &[
    ExperienceItem {
        id: "lean-se",
        company: "Lean Innovation Labs",
        role: "Software Engineer",
        period: "Oct 2024 — Present",
        location: "USA · Remote-first",
        tenure: Tenure::Current,
        focus: "Building production-grade features for AI-heavy products with a strong focus on UX stability and delivery speed.",
        stack: &["TypeScript", "React", "Next.js", "Node.js", "Ant Design", "CI/CD"],
        impact_highlights: &[
            "Shipped usability features like resizable panels and fast reset actions that reduced task-related clicks and smoothed daily workflows.",
            "Eliminated critical UI/UX issues by customizing design-system components instead of rewriting them, improving stability in production.",
            "Replaced manual Excel workflows by rapidly shipping targeted tools that saved hours of repetitive work per week.",
        ],
    },
    ExperienceItem {
        id: "phygtl-pm",
        company: "Phygtl",
        role: "Product Manager Intern",
        period: "Feb 2025 — Mar 2025",
        location: "USA · Student-focused product",
        tenure: Tenure::Past,
        focus: "Discovering UX friction, structuring feedback from thousands of users, and turning it into precise, high-impact changes.",
        stack: &["UX research", "Surveys", "SSO onboarding", "Analytics"],
        impact_highlights: &[
            "Ran UX surveys and analyzed responses from thousands of users to pinpoint validation and tooltip issues that created unnecessary support load.",
            "Shadowed onboarding sessions to map real friction points in SSO setup, then drove changes that improved activation speed.",
            "Reframed navigation and “getting started” flows so new users had a clearer first-run experience and lower drop-off.",
        ],
    },
    ExperienceItem {
        id: "js-associates",
        company: "JS Associates",
        role: "Full-Stack Web Developer",
        period: "May 2020 — May 2022",
        location: "India · Client projects",
        tenure: Tenure::Past,
        focus: "Owning end-to-end feature work across React frontends and Node backends for revenue-critical flows and internal tooling.",
        stack: &["React", "Node.js", "REST APIs", "SQL", "GitHub Actions"],
        impact_highlights: &[
            "Owned the development of a new e-commerce checkout flow, tuning both frontend and backend to cut page load time and friction.",
            "Built and rolled out a shared React component library that sped up feature delivery and made UI behavior more predictable.",
            "Helped stabilize production systems by resolving Node.js deadlocks and adding a reliable E2E testing layer around critical flows.",
        ],
    },
    ExperienceItem {
        id: "rowan-ms",
        company: "Rowan University",
        role: "M.S. Computer Science",
        period: "Aug 2022 — May 2024",
        location: "Glassboro, NJ · Graduate program",
        tenure: Tenure::Past,
        focus: "Deepening fundamentals in algorithms, systems, and data, while turning coursework projects into production-minded builds.",
        stack: &["Algorithms", "Databases", "Distributed systems", "Python", "SQL"],
        impact_highlights: &[
            "Used academic projects as a playground for real architectures rather than throwaway demos, focusing on maintainability and observability.",
            "Explored full-stack patterns that now show up in portfolio work, from dashboards and AI tools to data-heavy backends.",
            "Collaborated with peers from varied backgrounds, mirroring the cross-functional dynamics of real engineering teams.",
        ],
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceSummary {
    pub total_roles: usize,
    pub current_roles: usize,
    pub timeline_span: &'static str,
}

pub fn experience_summary(items: &[ExperienceItem]) -> ExperienceSummary {
    ExperienceSummary {
        total_roles: items.len(),
        current_roles: items.iter().filter(|i| i.tenure == Tenure::Current).count(),
        timeline_span: "2020 → Present",
    }
}

/// Note under the timeline. Being offline outranks being idle.
pub fn connection_note(ctx: &ShellContext) -> &'static str {
    if !ctx.is_online {
        "You appear to be offline. This page stays fully readable and keyboard-accessible."
    } else if ctx.is_idle {
        "You’ve been idle for a bit. Your place on the timeline is preserved."
    } else {
        "Scroll or use the timeline to see how I grow roles over time instead of just changing titles."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary() {
        let summary = experience_summary(EXPERIENCE_ITEMS);
        assert_eq!(summary.total_roles, 4);
        assert_eq!(summary.current_roles, 1);
    }

    #[test]
    fn test_connection_note_priority() {
        let mut ctx = ShellContext::default();
        assert!(connection_note(&ctx).starts_with("Scroll"));
        ctx.is_idle = true;
        assert!(connection_note(&ctx).contains("idle"));
        ctx.is_online = false;
        assert!(connection_note(&ctx).contains("offline"));
    }
}
