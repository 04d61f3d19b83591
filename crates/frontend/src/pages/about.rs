use crate::shared::components::{Badge, BadgeVariant, CardAnimated, TagList};
use crate::shared::icons::{ui_icon, UiIcon};
use contracts::domain::about::{
    DAY_TO_DAY, OUTSIDE_OF_WORK, PROFILE_TAGS, SKILL_TAGS, TEAMS_EXPECT, TIMELINE_ITEMS,
};
use contracts::domain::navigation::tree::RESUME_PATH;
use leptos::prelude::*;

const GITHUB_URL: &str = "https://github.com/Ashwin-Pulipati";
const LINKEDIN_URL: &str = "https://www.linkedin.com/in/ashwinpulipati/";

#[component]
fn Pillar(title: &'static str, items: &'static [&'static str]) -> impl IntoView {
    view! {
        <section class="surface-soft pillar">
            <h2 class="eyebrow">{title}</h2>
            <ul class="bullet-list">
                {items.iter().map(|item| view! {
                    <li><span class="gradient-bullet" aria-hidden="true"></span>{*item}</li>
                }).collect_view()}
            </ul>
        </section>
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="page page--about about-grid">
            <section class="surface-soft about__intro" aria-labelledby="about-heading">
                <p class="eyebrow">"At a glance"</p>
                <h1 id="about-heading">"A product-minded engineer who bridges UX, systems, and delivery."</h1>
                <p class="lead">
                    "Translate fuzzy, real-world requirements into clear scopes, technical plans, and \
                     delivery milestones. Build end-to-end features across React/Next.js frontends and \
                     Node/Python backends with a strong focus on reliability."
                </p>
                <div class="about__profile-tags">
                    {PROFILE_TAGS.iter().map(|tag| view! { <p>{*tag}</p> }).collect_view()}
                </div>
            </section>

            <CardAnimated class="about__hero">
                <section aria-label="Profile and primary actions">
                    <Badge variant=BadgeVariant::Success>"Open to new roles"</Badge>
                    <h2 class="text-gradient">"Ashwin Pulipati"</h2>
                    <p>"Full-Stack Software Engineer"</p>
                    <TagList tags=SKILL_TAGS />
                    <p class="about__tagline">
                        "From AI-powered sandboxes to dashboards and engines, I enjoy owning the path \
                         from idea to production."
                    </p>
                    <div class="about__actions">
                        <a href=RESUME_PATH download="" class="button button--primary" aria-label="Open résumé">
                            {ui_icon(UiIcon::FileDown)}
                            "Download résumé"
                        </a>
                        <a
                            href=GITHUB_URL
                            target="_blank"
                            rel="noreferrer noopener"
                            class="button button--ghost"
                            aria-label="Open Ashwin's GitHub profile in a new tab"
                        >
                            {ui_icon(UiIcon::Github)}
                            "GitHub"
                        </a>
                        <a
                            href=LINKEDIN_URL
                            target="_blank"
                            rel="noreferrer noopener"
                            class="button button--ghost"
                            aria-label="Open Ashwin's LinkedIn profile in a new tab"
                        >
                            {ui_icon(UiIcon::ExternalLink)}
                            "LinkedIn"
                        </a>
                    </div>
                </section>
            </CardAnimated>

            <Pillar title="How I work day-to-day" items=DAY_TO_DAY />
            <Pillar title="What teams can expect" items=TEAMS_EXPECT />

            <section class="surface-soft about__timeline" aria-labelledby="timeline-heading">
                <h2 id="timeline-heading" class="eyebrow">"Timeline"</h2>
                <ol class="timeline">
                    {TIMELINE_ITEMS.iter().map(|entry| view! {
                        <li class="timeline__item">
                            <span class="timeline__period">{entry.period}</span>
                            <h3 class="timeline__title">{entry.title}</h3>
                            <p>{entry.body}</p>
                        </li>
                    }).collect_view()}
                </ol>

                <h2 class="eyebrow">"Outside of work"</h2>
                <ul class="bullet-list">
                    {OUTSIDE_OF_WORK.iter().map(|item| view! {
                        <li><span class="gradient-bullet" aria-hidden="true"></span>{*item}</li>
                    }).collect_view()}
                </ul>
            </section>
        </div>
    }
}
