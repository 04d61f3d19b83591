use crate::layout::global_context::use_global_context;
use crate::shared::icons::{ui_icon, UiIcon};
use crate::shared::theme::ThemeToggle;
use leptos::prelude::*;

/// Bottom of the sidebar: theme switcher, or a single button that expands
/// the sidebar while it is collapsed.
#[component]
pub fn NavFooter() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <div class="app-sidebar__footer">
            <Show
                when=move || ctx.sidebar_open.get()
                fallback=move || view! {
                    <button
                        type="button"
                        class="button button--ghost"
                        aria-label="Open sidebar to change theme"
                        on:click=move |_| ctx.sidebar_open.set(true)
                    >
                        {ui_icon(UiIcon::Sun)}
                    </button>
                }
            >
                <span class="app-sidebar__label">"Theme"</span>
                <ThemeToggle />
            </Show>
        </div>
    }
}
