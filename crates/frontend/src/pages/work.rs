//! Project gallery filtered by the `focus` query parameter.
//!
//! The URL is the only source of truth for the active focus: the select
//! writes to the URL and the gallery reads back from the route state.

use crate::layout::global_context::use_global_context;
use crate::routes::route_state::use_route_state;
use crate::shared::components::{CardAnimated, TagList};
use crate::shared::icons::{ui_icon, UiIcon};
use contracts::domain::navigation::tree::WORK_PATH;
use contracts::domain::work::{filter_by_focus, gallery_summary, ProjectRecord, PROJECTS};
use contracts::enums::{normalize_focus, ProjectFocus};
use contracts::shared::url_state::focus_href;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use thaw::Select;

#[component]
fn ProjectCard(project: &'static ProjectRecord, index: usize) -> impl IntoView {
    view! {
        <CardAnimated delay_ms={index as u32 * 70} class="project-card">
            <article aria-labelledby=format!("project-{}", project.id)>
                {project.image_url.map(|src| view! {
                    <img class="project-card__image" src=src alt=format!("{} preview", project.title) loading="lazy" />
                })}
                <h2 id=format!("project-{}", project.id) class="project-card__title">{project.title}</h2>
                {project.subtitle.map(|subtitle| view! {
                    <p class="project-card__subtitle">{subtitle}</p>
                })}
                <p class="project-card__description">{project.description}</p>
                <TagList tags=project.tags />
                <div class="project-card__links">
                    {project.live_url.map(|href| view! {
                        <a
                            href=href
                            target="_blank"
                            rel="noreferrer noopener"
                            class="button button--primary"
                            aria-label=format!("Open the live {} site in a new tab", project.title)
                        >
                            "Live"
                            {ui_icon(UiIcon::ExternalLink)}
                        </a>
                    })}
                    {project.github_url.map(|href| view! {
                        <a
                            href=href
                            target="_blank"
                            rel="noreferrer noopener"
                            class="button button--ghost"
                            aria-label=format!("Open the {} source on GitHub in a new tab", project.title)
                        >
                            {ui_icon(UiIcon::Github)}
                            "Code"
                        </a>
                    })}
                </div>
            </article>
        </CardAnimated>
    }
}

#[component]
pub fn WorkPage() -> impl IntoView {
    let ctx = use_global_context();
    let route = use_route_state();
    let navigate = use_navigate();

    let select_value = RwSignal::new(route.focus.get_untracked().as_str().to_string());

    // URL -> select (sidebar links, back/forward)
    Effect::new(move |_| {
        let slug = route.focus.get().as_str().to_string();
        if select_value.get_untracked() != slug {
            select_value.set(slug);
        }
    });

    // select -> URL
    Effect::new(move |prev: Option<String>| {
        let current = select_value.get();
        if prev.is_some() && prev.as_ref() != Some(&current) {
            let next = normalize_focus(Some(&current));
            if next != route.focus.get_untracked() {
                log::debug!("work focus -> {}", next);
                navigate(
                    &focus_href(WORK_PATH, next),
                    NavigateOptions {
                        scroll: false,
                        ..Default::default()
                    },
                );
            }
        }
        current
    });

    let visible = Memo::new(move |_| filter_by_focus(PROJECTS, route.focus.get()));
    let summary = move || gallery_summary(visible.with(Vec::len), PROJECTS.len(), route.focus.get());

    view! {
        <section
            class="page page--work"
            class:page--animated=move || !ctx.reduce_motion.get()
            aria-labelledby="work-heading"
        >
            <div class="work__header">
                <div>
                    <p class="eyebrow">"Selected work"</p>
                    <h1 id="work-heading">
                        "A small set of projects that show how I "
                        <span class="text-gradient">"design, build, and ship across the stack."</span>
                    </h1>
                    <p id="work-intro" class="lead">
                        "These projects span AI sandboxes, timelines, dashboards, and a custom game \
                         engine. They’re representative of the kinds of systems I like to own \
                         end-to-end: user-facing, data-heavy, and grounded in real constraints."
                    </p>
                </div>

                <div class="focus-filter" aria-label="Filter projects by focus area">
                    <div role="group" aria-labelledby="work-focus-label">
                        <p id="work-focus-label" class="eyebrow">"Filter by focus"</p>
                        <Select value=select_value>
                            {ProjectFocus::all().into_iter().map(|focus| view! {
                                <option value=focus.as_str()>{focus.label()}</option>
                            }).collect_view()}
                        </Select>
                    </div>
                    <p class="focus-filter__description">{move || route.focus.get().description()}</p>
                </div>
            </div>

            <p class="work__summary" aria-live="polite" aria-atomic="true">{summary}</p>

            <section class="project-gallery" aria-label="Project gallery" aria-describedby="work-intro">
                <For
                    each=move || visible.get()
                    key=|project| project.id
                    children=move |project: &'static ProjectRecord| {
                        let index = PROJECTS.iter().position(|p| p.id == project.id).unwrap_or(0);
                        view! { <ProjectCard project=project index=index /> }
                    }
                />
                <Show when=move || visible.with(Vec::is_empty)>
                    <p class="project-gallery__empty">"No projects match this filter yet."</p>
                </Show>
            </section>
        </section>
    }
}
