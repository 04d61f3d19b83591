use crate::shared::components::{Badge, BadgeVariant, CardAnimated, TagList};
use crate::shared::icons::{ui_icon, UiIcon};
use contracts::domain::about::{HOW_I_WORK, PROFILE_TAGS, SNAPSHOT};
use contracts::domain::navigation::tree::{ABOUT_PATH, EXPERTISE_PATH, RESUME_PATH, WORK_PATH};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="page page--home" aria-labelledby="home-heading">
            <div class="home__hero">
                <Badge variant=BadgeVariant::Success>
                    <span class="status-dot" aria-hidden="true"></span>
                    "Available for hire"
                </Badge>

                <h1 id="home-heading" class="home__title">
                    <span class="text-gradient">"If it runs on code,"</span>
                    <span>"I design, build, and ship it."</span>
                </h1>
                <p class="home__lead">
                    "I'm Ashwin Pulipati, a full-stack engineer who moves comfortably across web apps, \
                     AI workflows, DevOps pipelines, mobile experiences, and even game engines. From \
                     real-estate and e-commerce backends to AI-powered tools and weather dashboards, \
                     I focus on shipping systems that are reliable, maintainable, and actually used."
                </p>

                <TagList tags=PROFILE_TAGS />

                <div class="home__cta">
                    <a href=WORK_PATH class="button button--primary" aria-label="View Ashwin's selected work">
                        "View selected work"
                        {ui_icon(UiIcon::ArrowRight)}
                    </a>
                    <a
                        href=RESUME_PATH
                        download=""
                        class="button button--ghost"
                        aria-label="Download Ashwin's résumé"
                    >
                        {ui_icon(UiIcon::FileDown)}
                        "Download résumé"
                    </a>
                </div>
            </div>

            <div class="home__side">
                <CardAnimated class="snapshot-card">
                    <div class="snapshot-card__head">
                        <span class="snapshot-card__label">
                            {ui_icon(UiIcon::Terminal)}
                            "Snapshot"
                        </span>
                        <Badge variant=BadgeVariant::Gradient>
                            "Currently shipping multi-stack, AI-aware products"
                        </Badge>
                    </div>
                    <dl class="snapshot-card__list">
                        {SNAPSHOT.iter().map(|(term, value)| view! {
                            <div>
                                <dt>{*term}</dt>
                                <dd>{*value}</dd>
                            </div>
                        }).collect_view()}
                    </dl>
                </CardAnimated>

                <CardAnimated delay_ms=80 class="surface-soft">
                    <p class="eyebrow">"How I like to work"</p>
                    <ul class="bullet-list">
                        {HOW_I_WORK.iter().map(|line| view! {
                            <li><span class="gradient-bullet" aria-hidden="true"></span>{*line}</li>
                        }).collect_view()}
                    </ul>
                    <p class="home__more">
                        <a href=ABOUT_PATH>"Learn more about how I work"</a>
                        " · "
                        <a href=EXPERTISE_PATH>"See the full stack I work in"</a>
                    </p>
                </CardAnimated>
            </div>
        </section>
    }
}
