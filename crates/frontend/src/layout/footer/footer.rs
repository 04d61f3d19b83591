use crate::shared::icons::{ui_icon, UiIcon};
use contracts::domain::navigation::tree::HIRE_ME_PATH;
use contracts::domain::navigation::NAV_ITEMS;
use contracts::shared::config::SiteConfig;
use leptos::prelude::*;

const SOURCE_URL: &str = "https://github.com/Ashwin-Pulipati/ashwinpulipati.portfolio";

#[component]
pub fn Footer() -> impl IntoView {
    let owner_name = use_context::<SiteConfig>()
        .map(|config| config.site.owner_name)
        .unwrap_or_default();
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer data-zone="footer" class="footer">
            <div class="footer__brand">
                <a href="/" aria-label="Back to home" class="footer__title text-gradient">
                    {owner_name.clone()}
                </a>
                <span class="footer__copyright">
                    {format!("© {} Made with care by {}", year, owner_name)}
                </span>
            </div>

            <nav aria-label="Footer navigation" class="footer__nav">
                {NAV_ITEMS.iter().map(|node| view! {
                    <a
                        href=node.href()
                        class="footer__link"
                        download=node.download.then_some("")
                    >
                        {node.label}
                    </a>
                }).collect_view()}
            </nav>

            <div class="footer__actions">
                <a href=HIRE_ME_PATH class="button button--ghost" title="Open to roles & collaborations">
                    "Let's work together"
                    {ui_icon(UiIcon::ArrowRight)}
                </a>
                <a
                    href=SOURCE_URL
                    target="_blank"
                    rel="noreferrer noopener"
                    class="button button--ghost"
                    aria-label="Open the site source on GitHub in a new tab"
                >
                    {ui_icon(UiIcon::Github)}
                </a>
            </div>
        </footer>
    }
}
