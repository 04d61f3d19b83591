use crate::layout::global_context::use_global_context;
use crate::routes::route_state::use_route_state;
use crate::shared::components::{Badge, BadgeVariant, CardAnimated, PageHeader, TagList};
use crate::shared::icons::{ui_icon, UiIcon};
use contracts::domain::experience::{
    connection_note, experience_summary, ExperienceItem, Tenure, EXPERIENCE_ITEMS,
};
use leptos::prelude::*;

fn item_anchor(id: &str) -> String {
    format!("experience-{}", id)
}

fn scroll_to_item(id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(&item_anchor(id)));
    match element {
        Some(el) => el.scroll_into_view_with_bool(true),
        None => log::warn!("timeline entry {} not found", id),
    }
}

#[component]
fn TimelineItem(item: &'static ExperienceItem, active_id: RwSignal<&'static str>, index: usize) -> impl IntoView {
    let is_active = move || active_id.get() == item.id;

    view! {
        <li
            id=item_anchor(item.id)
            class="timeline__item"
            class:timeline__item--active=is_active
            on:focusin=move |_| active_id.set(item.id)
            on:mouseenter=move |_| active_id.set(item.id)
        >
            <CardAnimated delay_ms={index as u32 * 60}>
                <header class="timeline__head">
                    <div>
                        <h2 class="timeline__title">{item.role}</h2>
                        <p class="timeline__company">{item.company}</p>
                    </div>
                    {(item.tenure == Tenure::Current).then(|| view! {
                        <Badge variant=BadgeVariant::Success>"Current"</Badge>
                    })}
                </header>
                <p class="timeline__meta">
                    {ui_icon(UiIcon::Clock)}<span>{item.period}</span>
                    {ui_icon(UiIcon::MapPin)}<span>{item.location}</span>
                </p>
                <p class="timeline__focus">{item.focus}</p>
                <ul class="bullet-list">
                    {item.impact_highlights.iter().map(|line| view! {
                        <li><span class="gradient-bullet" aria-hidden="true"></span>{*line}</li>
                    }).collect_view()}
                </ul>
                <TagList tags=item.stack />
            </CardAnimated>
        </li>
    }
}

#[component]
pub fn ExperiencePage() -> impl IntoView {
    let ctx = use_global_context();
    let route = use_route_state();
    let summary = experience_summary(EXPERIENCE_ITEMS);
    let first_id = EXPERIENCE_ITEMS.first().map(|item| item.id).unwrap_or_default();
    let active_id = RwSignal::new(first_id);

    let note = move || {
        let shell = ctx.shell_context(&route.path.get(), route.focus.get());
        connection_note(&shell)
    };

    view! {
        <section class="page page--experience" aria-labelledby="experience-heading">
            <PageHeader
                eyebrow="Experience"
                title="A timeline that blends product thinking, engineering depth, and real-world constraints."
                heading_id="experience-heading"
                subtitle="These roles show how I move from individual contributor work to owning flows end-to-end: talking to users, building the systems underneath, and keeping delivery predictable."
            />

            <dl class="experience-summary" aria-label="Experience overview">
                <div class="surface-soft">
                    <dt>"Timeline span"</dt>
                    <dd>{summary.timeline_span}</dd>
                </div>
                <div class="surface-soft">
                    <dt>"Experience focus"</dt>
                    <dd>{format!("{} roles ({} current) · Full-stack · Product · Academic", summary.total_roles, summary.current_roles)}</dd>
                </div>
                <div class="surface-soft">
                    <dt>"Collaboration style"</dt>
                    <dd>"Distributed · Product-led"</dd>
                </div>
            </dl>

            <p class="page__note" role="status">{note}</p>

            <div class="experience-layout">
                <nav class="timeline-nav" aria-label="Quick timeline navigation">
                    <span class="eyebrow">"Snapshot"</span>
                    <ul>
                        {EXPERIENCE_ITEMS.iter().map(|item| {
                            let is_active = move || active_id.get() == item.id;
                            view! {
                                <li>
                                    <button
                                        type="button"
                                        class="timeline-nav__item"
                                        class:timeline-nav__item--active=is_active
                                        aria-current=move || is_active().then_some("step")
                                        on:click=move |_| {
                                            active_id.set(item.id);
                                            scroll_to_item(item.id);
                                        }
                                    >
                                        <span>{item.company}</span>
                                        <span class="timeline-nav__role">{item.role}</span>
                                    </button>
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                </nav>

                <ol class="timeline" aria-label="Detailed experience timeline">
                    {EXPERIENCE_ITEMS.iter().enumerate().map(|(index, item)| view! {
                        <TimelineItem item=item active_id=active_id index=index />
                    }).collect_view()}
                </ol>
            </div>
        </section>
    }
}
