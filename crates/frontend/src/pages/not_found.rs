use crate::routes::route_state::use_route_state;
use crate::shared::icons::{ui_icon, UiIcon};
use contracts::domain::navigation::tree::{HOME_PATH, WORK_PATH};
use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let route = use_route_state();
    log::warn!("no route for {}", route.path.get_untracked());

    view! {
        <section class="page page--not-found" aria-labelledby="not-found-heading">
            <p class="eyebrow">"404"</p>
            <h1 id="not-found-heading">"This page doesn’t exist."</h1>
            <p class="lead">{move || format!("Nothing lives at {}.", route.path.get())}</p>
            <div class="home__cta">
                <a href=HOME_PATH class="button button--primary">
                    {ui_icon(UiIcon::Home)}
                    "Back to home"
                </a>
                <a href=WORK_PATH class="button button--ghost">
                    "Browse projects"
                    {ui_icon(UiIcon::ArrowRight)}
                </a>
            </div>
        </section>
    }
}
