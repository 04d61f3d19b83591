use super::{use_theme, Theme};
use crate::shared::icons::{ui_icon, UiIcon};
use leptos::ev::KeyboardEvent;
use leptos::prelude::*;

fn theme_icon(theme: Theme) -> UiIcon {
    match theme {
        Theme::Light => UiIcon::Sun,
        Theme::Dark => UiIcon::Moon,
        Theme::System => UiIcon::Monitor,
    }
}

/// Three-way radio group; left/right arrows cycle through the options.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();

    let on_keydown = move |ev: KeyboardEvent| {
        let delta = match ev.key().as_str() {
            "ArrowRight" => 1,
            "ArrowLeft" => -1,
            _ => return,
        };
        ev.prevent_default();
        ctx.set_theme(ctx.theme.get_untracked().step(delta));
    };

    view! {
        <div class="theme-toggle" role="radiogroup" aria-label="Color theme" on:keydown=on_keydown>
            {Theme::all().into_iter().map(|theme| {
                let is_active = move || ctx.get_theme() == theme;
                view! {
                    <button
                        type="button"
                        role="radio"
                        class="theme-toggle__item"
                        class:theme-toggle__item--active=is_active
                        aria-checked=move || if is_active() { "true" } else { "false" }
                        aria-label=format!("Switch to {} theme", theme.display_name())
                        title=theme.display_name()
                        on:click=move |_| ctx.set_theme(theme)
                    >
                        {ui_icon(theme_icon(theme))}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
