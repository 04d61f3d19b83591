//! Thaw `Card` with a fade-up entrance.
//!
//! The `card-appear` keyframes live in `style/main.css`. Pass growing
//! `delay_ms` values for a stagger effect; the animation is skipped entirely
//! when the visitor prefers reduced motion.

use crate::layout::global_context::use_global_context;
use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds
    #[prop(optional)]
    delay_ms: u32,
    /// Extra classes on the card
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let ctx = use_global_context();
    let style = move || {
        if ctx.reduce_motion.get() {
            String::new()
        } else {
            format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms)
        }
    };

    view! {
        <Card class=format!("surface-card {}", class) attr:style=style>
            {children()}
        </Card>
    }
}
