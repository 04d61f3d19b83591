use crate::layout::global_context::use_global_context;
use crate::routes::route_state::use_route_state;
use crate::shared::icons::{nav_icon, ui_icon, UiIcon};
use crate::shared::theme::ThemeToggle;
use contracts::domain::navigation::{header_link_is_active, header_links, NAV_ITEMS};
use contracts::shared::config::SiteConfig;
use leptos::prelude::*;

const SCROLLED_AFTER_PX: f64 = 8.0;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_global_context();
    let route = use_route_state();
    let owner_name = use_context::<SiteConfig>()
        .map(|config| config.site.owner_name)
        .unwrap_or_default();

    let scrolled = RwSignal::new(false);
    let handle = window_event_listener(leptos::ev::scroll, move |_| {
        let y = web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0);
        scrolled.set(y > SCROLLED_AFTER_PX);
    });
    on_cleanup(move || handle.remove());

    view! {
        <header data-zone="header" class="header" class:header--scrolled=move || scrolled.get()>
            <div class="header__content">
                <button
                    type="button"
                    class="button button--ghost header__toggle"
                    aria-label=move || if ctx.sidebar_open.get() { "Collapse sidebar" } else { "Expand sidebar" }
                    aria-expanded=move || if ctx.sidebar_open.get() { "true" } else { "false" }
                    aria-controls="app-sidebar"
                    on:click=move |_| ctx.toggle_sidebar()
                >
                    {ui_icon(UiIcon::PanelLeft)}
                </button>
                <a href="/" class="header__title text-gradient">{owner_name}</a>
            </div>

            <span class="header__offline" role="status" aria-live="polite">
                <Show when=move || !ctx.is_online.get()>
                    {ui_icon(UiIcon::WifiOff)}
                    <span class="sr-only">"You are offline. Cached pages stay available."</span>
                </Show>
            </span>

            <nav class="header__actions" aria-label="Quick links">
                {header_links(NAV_ITEMS).map(|node| {
                    let is_active = move || header_link_is_active(node, &route.path.get());
                    view! {
                        <a
                            href=node.href()
                            class="button header__link"
                            class:header__link--active=is_active
                            aria-label=node.aria_label
                            aria-current=move || is_active().then_some("page")
                            download=node.download.then_some("")
                        >
                            {nav_icon(node.icon)}
                            <span class="header__link-label">{node.label}</span>
                        </a>
                    }
                }).collect_view()}
                <ThemeToggle />
            </nav>
        </header>
    }
}
