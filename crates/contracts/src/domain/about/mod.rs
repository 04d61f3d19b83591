//! Copy for the home and about pages.

pub const PROFILE_TAGS: &[&str] = &[
    "Full-Stack Engineer • React / TypeScript",
    "Node.js • Python • SQL • Django / FastAPI",
    "Open to relocation • Remote-friendly",
];

pub const SKILL_TAGS: &[&str] = &[
    "AI-native Platforms & Tooling",
    "Frontend Experience (Next.js, UX)",
    "Backend & APIs (Node, Django, FastAPI)",
    "DevOps Pipelines & Observability",
];

pub const DAY_TO_DAY: &[&str] = &[
    "Translate fuzzy, real-world requirements into clear scopes, technical plans, and delivery milestones.",
    "Build end-to-end features across React/Next.js frontends and Node/Python backends with a strong focus on reliability.",
    "Treat testing, CI/CD, and observability (logs, metrics, traces) as first-class parts of the work, not bolt-ons.",
    "Continuously tighten UX details (accessibility, responsiveness, performance) so the product feels trustworthy and fast.",
];

pub const TEAMS_EXPECT: &[&str] = &[
    "Thoughtful collaboration with PMs, designers, and engineers from RFCs and diagrams to rollouts and post-mortems.",
    "Early visibility into trade-offs and risks, with pragmatic options instead of surprises late in the cycle.",
    "Comfort working across stacks: tuning React performance, debugging APIs, and wiring CI pipelines when needed.",
    "A bias toward ownership: leaving modules, docs, and workflows clearer and more maintainable than I found them.",
];

pub const OUTSIDE_OF_WORK: &[&str] = &[
    "Exploring new stacks through side projects: AI sandboxes, game engines, and domain-focused apps.",
    "Studying real-world system design patterns from SaaS, e-commerce, and infrastructure-heavy products.",
    "Tinkering with dev-tools, CLIs, and small utilities that remove friction for future projects.",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEntry {
    pub period: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const TIMELINE_ITEMS: &[TimelineEntry] = &[
    TimelineEntry {
        period: "2024 → Now",
        title: "Software Engineer – Lean Innovation Labs",
        body: "Building and maintaining production-grade systems while reducing UI/UX issues, improving workflows, and contributing to a fast-moving AI-heavy engineering environment.",
    },
    TimelineEntry {
        period: "2022 → 2024",
        title: "Master’s in Computer Science – Rowan University",
        body: "Strengthened full-stack fundamentals across algorithms, backend systems, databases, and large-scale application architecture while building multiple personal/portfolio projects.",
    },
    TimelineEntry {
        period: "2020 → 2022",
        title: "Full-Stack Web Developer – JS Associates",
        body: "Owned end-to-end development of React and Node.js modules, introduced CI/CD automation, and stabilized production systems through better testing, performance tuning, and debugging.",
    },
];

/// Working principles shown on the landing page
pub const HOW_I_WORK: &[&str] = &[
    "Start from real constraints, then choose the right stack across web, mobile, data, and infra.",
    "Treat AI, automation, and observability as first-class features, not afterthoughts.",
    "Ship iteratively with automated checks, clean git history, and lightweight documentation.",
];

/// Key/value pairs of the home-page snapshot card
pub const SNAPSHOT: &[(&str, &str)] = &[
    ("Focus", "AI-native full-stack & frontend"),
    ("Tooling", "React, Next.js, Node, Python, AWS, CI/CD"),
    ("Quality", "Accessibility, tests, observability"),
    ("Collaboration", "Founders, PMs, designers, and engineers"),
];
