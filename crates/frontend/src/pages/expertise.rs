use crate::layout::global_context::use_global_context;
use crate::shared::components::{CardAnimated, PageHeader, TagList};
use crate::shared::icons::{group_icon, ui_icon, UiIcon};
use contracts::domain::expertise::{
    expertise_note, ExpertiseTrack, LabeledGroup, TrackId, CAPABILITY_ROWS, EXPERTISE_TRACKS,
    TOOL_GROUPS,
};
use contracts::domain::navigation::tree::{EXPERIENCE_PATH, HIRE_ME_PATH, WORK_PATH};
use leptos::prelude::*;

#[component]
fn TrackCard(track: &'static ExpertiseTrack, selected: RwSignal<TrackId>, index: usize) -> impl IntoView {
    let is_selected = move || selected.get() == track.id;

    view! {
        <CardAnimated delay_ms={index as u32 * 60} class="track-card">
            <article
                id=format!("track-{}", track.id.code())
                class="track-card__body"
                class:track-card__body--selected=is_selected
                on:mouseenter=move |_| selected.set(track.id)
                on:focusin=move |_| selected.set(track.id)
                tabindex="0"
            >
                <h3>{track.label}</h3>
                <p class="track-card__subtitle">{track.subtitle}</p>
                <ul class="bullet-list">
                    {track.outcomes.iter().map(|outcome| view! {
                        <li><span class="gradient-bullet" aria-hidden="true"></span>{*outcome}</li>
                    }).collect_view()}
                </ul>
                <TagList tags=track.stack />
            </article>
        </CardAnimated>
    }
}

#[component]
fn GroupCard(group: &'static LabeledGroup) -> impl IntoView {
    view! {
        <div class="surface-soft group-card">
            <h3 class="group-card__title">
                {group_icon(group.icon)}
                {group.title}
            </h3>
            <TagList tags=group.items />
        </div>
    }
}

#[component]
pub fn ExpertisePage() -> impl IntoView {
    let ctx = use_global_context();
    let selected = RwSignal::new(TrackId::ProductFrontend);

    view! {
        <section class="page page--expertise" aria-labelledby="expertise-heading">
            <PageHeader
                eyebrow="Skillset"
                title="I work across the stack, but I’m most useful where product, data, and reliability overlap."
                heading_id="expertise-heading"
                subtitle="This page is a map of how I like to contribute: building UIs people actually enjoy using, wiring the APIs and data underneath them, and keeping the whole system observable and shippable."
            >
                <a href=WORK_PATH class="button button--primary" aria-label="View projects that use these skills">
                    "See it in projects"
                    {ui_icon(UiIcon::ArrowRight)}
                </a>
                <a href=HIRE_ME_PATH class="button button--ghost">"Discuss a role"</a>
            </PageHeader>

            <p class="page__note">{move || expertise_note(ctx.reduce_motion.get())}</p>

            <div class="tracks-grid">
                {EXPERTISE_TRACKS.iter().enumerate().map(|(index, track)| view! {
                    <TrackCard track=track selected=selected index=index />
                }).collect_view()}
            </div>

            <h2 class="eyebrow">"Tooling I’m comfortable owning"</h2>
            <div class="group-grid">
                {TOOL_GROUPS.iter().map(|group| view! { <GroupCard group=group /> }).collect_view()}
            </div>

            <h2 class="eyebrow">"How that expertise shows up on teams"</h2>
            <div class="group-grid">
                {CAPABILITY_ROWS.iter().map(|group| view! { <GroupCard group=group /> }).collect_view()}
            </div>

            <section class="surface-soft collaboration-note" aria-label="Collaboration preferences">
                {ui_icon(UiIcon::Users)}
                <div>
                    <h2>"Where I’ve been most effective"</h2>
                    <p>
                        "Cross-functional teams that care about clean UX, stable APIs, observability, \
                         and a steady delivery rhythm more than flashy rewrites."
                    </p>
                </div>
                <a href=EXPERIENCE_PATH class="button button--ghost" aria-label="View detailed experience timeline">
                    "View experience"
                </a>
            </section>
        </section>
    }
}
