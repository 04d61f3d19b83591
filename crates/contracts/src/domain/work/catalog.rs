use crate::enums::ProjectFocus;

/// Entry of the work gallery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRecord {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub description: &'static str,
    pub image_url: Option<&'static str>,
    pub live_url: Option<&'static str>,
    pub github_url: Option<&'static str>,
    pub tags: &'static [&'static str],
    /// Filter buckets this project shows up under. Never empty.
    pub focus_tags: &'static [ProjectFocus],
}

impl ProjectRecord {
    pub fn has_focus(&self, focus: ProjectFocus) -> bool {
        self.focus_tags.contains(&focus)
    }
}

pub const PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        id: "lovibe",
        title: "Lovibe – AI-Powered Code Generation Sandbox",
        subtitle: Some("Secure AI coding environment with event-driven orchestration"),
        description: "A full-stack AI platform that turns natural language prompts into executable code inside a sandboxed environment, wired with an event-driven backend for multi-step agent workflows.",
        image_url: Some("/lovibe.png"),
        live_url: Some("https://lovibe.vercel.app"),
        github_url: Some("https://github.com/Ashwin-Pulipati/lovibe"),
        tags: &["Full-stack", "AI", "Code execution", "tRPC", "Prisma", "Neon", "Clerk"],
        focus_tags: &[
            ProjectFocus::FullStack,
            ProjectFocus::BackendHeavy,
            ProjectFocus::FrontendHeavy,
            ProjectFocus::Devops,
        ],
    },
    ProjectRecord {
        id: "optipathway",
        title: "OptiPathway – F-1 Visa Timeline Assistant",
        subtitle: Some("Guided timelines and calculators for F-1 students"),
        description: "An interactive resource hub for F-1 students that brings timelines, calculators, and guides into a single, accessible interface with centralized state and clear legal disclaimers.",
        image_url: Some("/optipathway.png"),
        live_url: Some("https://optipathway.vercel.app"),
        github_url: Some("https://github.com/Ashwin-Pulipati/optipathway"),
        tags: &["Frontend", "Next.js", "State management", "Accessibility"],
        focus_tags: &[ProjectFocus::FrontendHeavy, ProjectFocus::FullStack],
    },
    ProjectRecord {
        id: "pastella",
        title: "Pastella – AI Vibe-Coded Color Palette Generator",
        subtitle: Some("Gemini-powered palette generation for brand and UI work"),
        description: "An AI-native workflow that uses Gemini 2.5 Pro to generate, refine, and stabilize color palettes from vibe-based prompts, enforced through a structured JSON schema.",
        image_url: Some("/pastella.png"),
        live_url: Some("https://pastella.vercel.app"),
        github_url: Some("https://github.com/Ashwin-Pulipati/pastella"),
        tags: &["Frontend", "AI", "Design tooling", "Next.js"],
        focus_tags: &[ProjectFocus::FrontendHeavy],
    },
    ProjectRecord {
        id: "skyerix",
        title: "Skyerix – Full-Stack Weather Dashboard",
        subtitle: Some("Data-heavy weather insights with maps, charts, and caching"),
        description: "A responsive, data-intensive weather dashboard powered by React Query, custom hooks, and map visualizations, designed to keep complex server state predictable and fast.",
        image_url: Some("/skyerix.png"),
        live_url: Some("https://skyerix.vercel.app"),
        github_url: Some("https://github.com/Ashwin-Pulipati/skyerix"),
        tags: &["Full-stack", "React Query", "Recharts", "Leaflet"],
        focus_tags: &[
            ProjectFocus::FullStack,
            ProjectFocus::FrontendHeavy,
            ProjectFocus::BackendHeavy,
        ],
    },
    ProjectRecord {
        id: "veloria",
        title: "Veloria – 2D Adventure JavaScript Game Engine",
        subtitle: Some("Custom engine built on HTML5 Canvas for smooth 2D play"),
        description: "A vanilla JavaScript game engine that drives combat, pathfinding, and animation over HTML5 Canvas with an optimized rendering pipeline tuned for a smooth 60fps experience.",
        image_url: Some("/veloria.png"),
        live_url: Some("https://ashwin-pulipati.github.io/veloria"),
        github_url: Some("https://github.com/Ashwin-Pulipati/veloria"),
        tags: &["Game engine", "Canvas", "JavaScript", "Performance"],
        focus_tags: &[ProjectFocus::GamesWeb3],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_well_formed() {
        for (i, project) in PROJECTS.iter().enumerate() {
            assert!(!project.focus_tags.is_empty(), "{}", project.id);
            assert!(
                !project.focus_tags.contains(&ProjectFocus::All),
                "{} is tagged with the catch-all",
                project.id
            );
            assert!(
                PROJECTS[i + 1..].iter().all(|p| p.id != project.id),
                "duplicate id {}",
                project.id
            );
        }
    }
}
