//! Expertise page content.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackId {
    ProductFrontend,
    BackendApis,
    PlatformDevops,
}

impl TrackId {
    pub fn code(&self) -> &'static str {
        match self {
            TrackId::ProductFrontend => "product-frontend",
            TrackId::BackendApis => "backend-apis",
            TrackId::PlatformDevops => "platform-devops",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpertiseTrack {
    pub id: TrackId,
    pub label: &'static str,
    pub subtitle: &'static str,
    pub outcomes: &'static [&'static str],
    pub stack: &'static [&'static str],
}

/// Capability rows and tool groups share one icon/tone vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupIcon {
    Palette,
    Database,
    Satellite,
    Blocks,
    Factory,
    Handshake,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledGroup {
    pub title: &'static str,
    pub icon: GroupIcon,
    pub items: &'static [&'static str],
}

pub const EXPERTISE_TRACKS: &[ExpertiseTrack] = &[
    ExpertiseTrack {
        id: TrackId::ProductFrontend,
        label: "AI-native Product Frontend",
        subtitle: "Accessible, data-heavy interfaces that still feel fast",
        outcomes: &[
            "Design and ship responsive, component-driven UIs that work across desktop and mobile.",
            "Bake in accessibility, keyboard flows, and sensible empty/error/loading states from day one.",
            "Wire dashboards, admin tools, and AI features so complex flows still feel simple to use.",
        ],
        stack: &[
            "TypeScript",
            "React",
            "Next.js",
            "shadcn/ui",
            "Tailwind CSS",
            "Framer Motion",
            "TanStack Query",
            "Testing Library",
        ],
    },
    ExpertiseTrack {
        id: TrackId::BackendApis,
        label: "Backend, Data & APIs",
        subtitle: "From CRUD to analytics and workflow engines",
        outcomes: &[
            "Model domains into clear, versioned API contracts that are easy to consume and extend.",
            "Implement business logic, background jobs, and queue-like flows without burying behavior.",
            "Design data models and queries that support reporting, auditability, and future analytics.",
        ],
        stack: &[
            "Node.js",
            "TypeScript",
            "REST / RPC APIs",
            "PostgreSQL",
            "SQL",
            "Prisma / ORMs",
            "Redis",
            "Background jobs",
        ],
    },
    ExpertiseTrack {
        id: TrackId::PlatformDevops,
        label: "Platform, Observability & Delivery",
        subtitle: "From laptop → staging → production safely",
        outcomes: &[
            "Automate CI/CD so main branches stay healthy and changes ship in small, low-risk slices.",
            "Use feature flags, staged rollouts, and environment parity instead of big-bang deploys.",
            "Add logs, metrics, and traces so issues show up on dashboards before users report them.",
        ],
        stack: &[
            "Git & GitHub Flow",
            "GitHub Actions",
            "Docker",
            "Vercel / Edge",
            "AWS basics",
            "Monitoring & logs",
            "Feature flags",
        ],
    },
];

pub const CAPABILITY_ROWS: &[LabeledGroup] = &[
    LabeledGroup {
        title: "Architecture & Design",
        icon: GroupIcon::Blocks,
        items: &[
            "Turn fuzzy product requirements into small, composable services and UI flows.",
            "Design data models and API boundaries that stay stable as features grow.",
            "Make deliberate trade-offs between performance, complexity, delivery speed, and cost.",
        ],
    },
    LabeledGroup {
        title: "Delivery & Quality",
        icon: GroupIcon::Factory,
        items: &[
            "Add tests where they matter most: critical paths, integrations, and regressions.",
            "Use metrics, logs, and traces to debug production issues without guesswork.",
            "Keep READMEs, runbooks, and onboarding docs current as systems evolve.",
        ],
    },
    LabeledGroup {
        title: "Collaboration & Ownership",
        icon: GroupIcon::Handshake,
        items: &[
            "Run lightweight RFCs and design reviews so feedback arrives before build time.",
            "Partner closely with PM, design, and data to keep scope, risks, and impact visible.",
            "Own work past launch: refinements, incidents, and the unglamorous cleanup afterwards.",
        ],
    },
];

pub const TOOL_GROUPS: &[LabeledGroup] = &[
    LabeledGroup {
        title: "Frontend & DX",
        icon: GroupIcon::Palette,
        items: &[
            "TypeScript",
            "React / Next.js",
            "shadcn/ui",
            "Tailwind",
            "Framer Motion",
            "Storybook",
        ],
    },
    LabeledGroup {
        title: "Backend, Data & Analytics",
        icon: GroupIcon::Database,
        items: &[
            "Node.js",
            "REST / RPC APIs",
            "PostgreSQL",
            "SQL",
            "Prisma / ORMs",
            "Redis / caching",
        ],
    },
    LabeledGroup {
        title: "Platform, Observability & Workflow",
        icon: GroupIcon::Satellite,
        items: &[
            "GitHub Actions",
            "CI pipelines",
            "Docker",
            "Vercel / Edge",
            "Monitoring & alerts",
            "Feature flags",
        ],
    },
];

pub fn expertise_note(reduce_motion: bool) -> &'static str {
    if reduce_motion {
        "This page is designed to stay readable and useful even with motion effects reduced."
    } else {
        "Subtle gradients and depth highlight the parts of the stack I lean on most for AI-aware, data-heavy products."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_track_codes_are_unique() {
        let codes: HashSet<&str> = EXPERTISE_TRACKS.iter().map(|t| t.id.code()).collect();
        assert_eq!(codes.len(), EXPERTISE_TRACKS.len());
    }

    #[test]
    fn test_groups_are_filled() {
        for group in CAPABILITY_ROWS.iter().chain(TOOL_GROUPS) {
            assert!(!group.title.is_empty());
            assert!(!group.items.is_empty(), "{} has no items", group.title);
        }
    }

    #[test]
    fn test_note_follows_motion_preference() {
        assert_ne!(expertise_note(true), expertise_note(false));
        assert!(expertise_note(true).contains("motion effects reduced"));
    }
}
