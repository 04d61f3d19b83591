use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Outline,
    Gradient,
    Success,
}

impl BadgeVariant {
    fn css_class(&self) -> &'static str {
        match self {
            BadgeVariant::Outline => "badge--outline",
            BadgeVariant::Gradient => "badge--gradient",
            BadgeVariant::Success => "badge--success",
        }
    }
}

#[component]
pub fn Badge(
    #[prop(optional)]
    variant: BadgeVariant,
    /// Badge content
    children: Children,
) -> impl IntoView {
    view! {
        <span class=format!("badge {}", variant.css_class())>
            {children()}
        </span>
    }
}

/// Wrapped row of outline badges
#[component]
pub fn TagList(tags: &'static [&'static str]) -> impl IntoView {
    view! {
        <ul class="tag-list">
            {tags.iter().map(|tag| view! {
                <li><Badge>{*tag}</Badge></li>
            }).collect_view()}
        </ul>
    }
}
