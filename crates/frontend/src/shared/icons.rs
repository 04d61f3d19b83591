//! Inline SVG icons (Lucide outlines).
//!
//! Icons are addressed by enum so every variant is guaranteed a drawing.

use contracts::domain::expertise::GroupIcon;
use contracts::domain::hire_me::QuickFactIcon;
use contracts::domain::navigation::NavIcon;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiIcon {
    Home,
    User,
    Toolbox,
    Folder,
    Briefcase,
    FileDown,
    Handshake,
    ChevronRight,
    PanelLeft,
    Sun,
    Moon,
    Monitor,
    Copy,
    Check,
    Mail,
    ArrowRight,
    ExternalLink,
    Github,
    MapPin,
    Clock,
    Users,
    Terminal,
    Palette,
    Database,
    Satellite,
    Blocks,
    Factory,
    WifiOff,
}

fn paths(icon: UiIcon) -> AnyView {
    match icon {
        UiIcon::Home => view! {
            <path d="M15 21v-8a1 1 0 0 0-1-1h-4a1 1 0 0 0-1 1v8"/>
            <path d="M3 10a2 2 0 0 1 .709-1.528l7-5.999a2 2 0 0 1 2.582 0l7 5.999A2 2 0 0 1 21 10v9a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"/>
        }.into_any(),
        UiIcon::User => view! {
            <path d="M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2"/>
            <circle cx="12" cy="7" r="4"/>
        }.into_any(),
        UiIcon::Toolbox => view! {
            <path d="M16 12v4"/>
            <path d="M16 6a2 2 0 0 1 1.414.586l4 4A2 2 0 0 1 22 12v7a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2v-7a2 2 0 0 1 .586-1.414l4-4A2 2 0 0 1 8 6z"/>
            <path d="M16 6V4a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v2"/>
            <path d="M2 14h20"/>
            <path d="M8 12v4"/>
        }.into_any(),
        UiIcon::Folder => view! {
            <path d="M20 20a2 2 0 0 0 2-2V8a2 2 0 0 0-2-2h-7.9a2 2 0 0 1-1.69-.9L9.6 3.9A2 2 0 0 0 7.93 3H4a2 2 0 0 0-2 2v13a2 2 0 0 0 2 2Z"/>
            <path d="M8 10v4"/>
            <path d="M12 10v2"/>
            <path d="M16 10v6"/>
        }.into_any(),
        UiIcon::Briefcase => view! {
            <path d="M16 20V4a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16"/>
            <rect width="20" height="14" x="2" y="6" rx="2"/>
        }.into_any(),
        UiIcon::FileDown => view! {
            <path d="M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z"/>
            <path d="M14 2v4a2 2 0 0 0 2 2h4"/>
            <path d="M12 18v-6"/>
            <path d="m9 15 3 3 3-3"/>
        }.into_any(),
        UiIcon::Handshake => view! {
            <path d="m11 17 2 2a1 1 0 1 0 3-3"/>
            <path d="m14 14 2.5 2.5a1 1 0 1 0 3-3l-3.88-3.88a3 3 0 0 0-4.24 0l-.88.88a1 1 0 1 1-3-3l2.81-2.81a5.79 5.79 0 0 1 7.06-.87l.47.28a2 2 0 0 0 1.42.25L21 4"/>
            <path d="m21 3 1 11h-2"/>
            <path d="M3 3 2 14l6.5 6.5a1 1 0 1 0 3-3"/>
            <path d="M3 4h8"/>
        }.into_any(),
        UiIcon::ChevronRight => view! { <path d="m9 18 6-6-6-6"/> }.into_any(),
        UiIcon::PanelLeft => view! {
            <rect width="18" height="18" x="3" y="3" rx="2"/>
            <path d="M9 3v18"/>
        }.into_any(),
        UiIcon::Sun => view! {
            <circle cx="12" cy="12" r="4"/>
            <path d="M12 2v2"/>
            <path d="M12 20v2"/>
            <path d="m4.93 4.93 1.41 1.41"/>
            <path d="m17.66 17.66 1.41 1.41"/>
            <path d="M2 12h2"/>
            <path d="M20 12h2"/>
            <path d="m6.34 17.66-1.41 1.41"/>
            <path d="m19.07 4.93-1.41 1.41"/>
        }.into_any(),
        UiIcon::Moon => view! { <path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"/> }.into_any(),
        UiIcon::Monitor => view! {
            <rect width="20" height="14" x="2" y="3" rx="2"/>
            <path d="M8 21h8"/>
            <path d="M12 17v4"/>
        }.into_any(),
        UiIcon::Copy => view! {
            <rect width="14" height="14" x="8" y="8" rx="2" ry="2"/>
            <path d="M4 16c-1.1 0-2-.9-2-2V4c0-1.1.9-2 2-2h10c1.1 0 2 .9 2 2"/>
        }.into_any(),
        UiIcon::Check => view! { <path d="M20 6 9 17l-5-5"/> }.into_any(),
        UiIcon::Mail => view! {
            <rect width="20" height="16" x="2" y="4" rx="2"/>
            <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>
        }.into_any(),
        UiIcon::ArrowRight => view! {
            <path d="M5 12h14"/>
            <path d="m12 5 7 7-7 7"/>
        }.into_any(),
        UiIcon::ExternalLink => view! {
            <path d="M15 3h6v6"/>
            <path d="M10 14 21 3"/>
            <path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"/>
        }.into_any(),
        UiIcon::Github => view! {
            <path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/>
            <path d="M9 18c-4.51 2-5-2-7-2"/>
        }.into_any(),
        UiIcon::MapPin => view! {
            <path d="M20 10c0 4.993-5.539 10.193-7.399 11.799a1 1 0 0 1-1.202 0C9.539 20.193 4 14.993 4 10a8 8 0 0 1 16 0"/>
            <circle cx="12" cy="10" r="3"/>
        }.into_any(),
        UiIcon::Clock => view! {
            <circle cx="12" cy="12" r="10"/>
            <polyline points="12 6 12 12 16 14"/>
        }.into_any(),
        UiIcon::Users => view! {
            <path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/>
            <circle cx="9" cy="7" r="4"/>
            <path d="M22 21v-2a4 4 0 0 0-3-3.87"/>
            <path d="M16 3.13a4 4 0 0 1 0 7.75"/>
        }.into_any(),
        UiIcon::Terminal => view! {
            <polyline points="4 17 10 11 4 5"/>
            <line x1="12" x2="20" y1="19" y2="19"/>
        }.into_any(),
        UiIcon::Palette => view! {
            <circle cx="13.5" cy="6.5" r=".5"/>
            <circle cx="17.5" cy="10.5" r=".5"/>
            <circle cx="8.5" cy="7.5" r=".5"/>
            <circle cx="6.5" cy="12.5" r=".5"/>
            <path d="M12 2C6.5 2 2 6.5 2 12s4.5 10 10 10c.926 0 1.648-.746 1.648-1.688 0-.437-.18-.835-.437-1.125-.29-.289-.438-.652-.438-1.125a1.64 1.64 0 0 1 1.668-1.668h1.996c3.051 0 5.555-2.503 5.555-5.554C21.965 6.012 17.461 2 12 2z"/>
        }.into_any(),
        UiIcon::Database => view! {
            <ellipse cx="12" cy="5" rx="9" ry="3"/>
            <path d="M3 5V19A9 3 0 0 0 21 19V5"/>
            <path d="M3 12A9 3 0 0 0 21 12"/>
        }.into_any(),
        UiIcon::Satellite => view! {
            <path d="M13 7 9 3 5 7l4 4"/>
            <path d="m17 11 4 4-4 4-4-4"/>
            <path d="m8 12 4 4 6-6-4-4Z"/>
            <path d="m16 8 3-3"/>
            <path d="M9 21a6 6 0 0 0-6-6"/>
        }.into_any(),
        UiIcon::Blocks => view! {
            <rect width="7" height="7" x="14" y="3" rx="1"/>
            <path d="M10 21V8a1 1 0 0 0-1-1H4a1 1 0 0 0-1 1v12a1 1 0 0 0 1 1h12a1 1 0 0 0 1-1v-5a1 1 0 0 0-1-1H3"/>
        }.into_any(),
        UiIcon::Factory => view! {
            <path d="M2 20a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V8l-7 5V8l-7 5V4a2 2 0 0 0-2-2H4a2 2 0 0 0-2 2Z"/>
            <path d="M17 18h1"/>
            <path d="M12 18h1"/>
            <path d="M7 18h1"/>
        }.into_any(),
        UiIcon::WifiOff => view! {
            <path d="M12 20h.01"/>
            <path d="M8.5 16.429a5 5 0 0 1 7 0"/>
            <path d="M5 12.859a10 10 0 0 1 5.17-2.69"/>
            <path d="M19 12.859a10 10 0 0 0-2.007-1.523"/>
            <path d="M2 8.82a15 15 0 0 1 4.177-2.643"/>
            <path d="M22 8.82a15 15 0 0 0-11.288-3.764"/>
            <path d="m2 2 20 20"/>
        }.into_any(),
    }
}

pub fn ui_icon(icon: UiIcon) -> AnyView {
    sized_icon(icon, 20)
}

pub fn sized_icon(icon: UiIcon, size: u32) -> AnyView {
    view! {
        <svg
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {paths(icon)}
        </svg>
    }
    .into_any()
}

pub fn nav_icon(icon: NavIcon) -> AnyView {
    ui_icon(match icon {
        NavIcon::Home => UiIcon::Home,
        NavIcon::User => UiIcon::User,
        NavIcon::Toolbox => UiIcon::Toolbox,
        NavIcon::Folder => UiIcon::Folder,
        NavIcon::Briefcase => UiIcon::Briefcase,
        NavIcon::FileDown => UiIcon::FileDown,
        NavIcon::Handshake => UiIcon::Handshake,
    })
}

pub fn quick_fact_icon(icon: QuickFactIcon) -> AnyView {
    sized_icon(
        match icon {
            QuickFactIcon::MapPin => UiIcon::MapPin,
            QuickFactIcon::Clock => UiIcon::Clock,
            QuickFactIcon::Users => UiIcon::Users,
            QuickFactIcon::Briefcase => UiIcon::Briefcase,
        },
        16,
    )
}

pub fn group_icon(icon: GroupIcon) -> AnyView {
    ui_icon(match icon {
        GroupIcon::Palette => UiIcon::Palette,
        GroupIcon::Database => UiIcon::Database,
        GroupIcon::Satellite => UiIcon::Satellite,
        GroupIcon::Blocks => UiIcon::Blocks,
        GroupIcon::Factory => UiIcon::Factory,
        GroupIcon::Handshake => UiIcon::Handshake,
    })
}
