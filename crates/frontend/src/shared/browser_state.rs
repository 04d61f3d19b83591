//! Browser-level signals: connectivity, idleness and motion preference.
//!
//! Listeners live for the lifetime of the page, so their closures are leaked
//! with `forget()`.

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// No pointer/keyboard/scroll activity for this long marks the visitor idle
pub const IDLE_AFTER_MS: f64 = 60_000.0;
const IDLE_POLL_MS: u32 = 5_000;
const ACTIVITY_EVENTS: [&str; 5] = ["mousemove", "keydown", "pointerdown", "scroll", "touchstart"];

pub(crate) fn listen(target: &web_sys::EventTarget, event: &str, handler: impl FnMut(web_sys::Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    if target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("could not subscribe to '{}' events", event);
    }
    closure.forget();
}

pub fn watch_online(is_online: RwSignal<bool>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    is_online.set(window.navigator().on_line());

    listen(&window, "online", move |_| {
        log::info!("connection restored");
        is_online.set(true);
    });
    listen(&window, "offline", move |_| {
        log::warn!("connection lost");
        is_online.set(false);
    });
}

pub fn watch_idle(is_idle: RwSignal<bool>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let last_activity = RwSignal::new(js_sys::Date::now());

    for event in ACTIVITY_EVENTS {
        listen(&window, event, move |_| {
            last_activity.set(js_sys::Date::now());
            if is_idle.get_untracked() {
                is_idle.set(false);
            }
        });
    }

    Interval::new(IDLE_POLL_MS, move || {
        let idle = js_sys::Date::now() - last_activity.get_untracked() >= IDLE_AFTER_MS;
        if idle != is_idle.get_untracked() {
            is_idle.set(idle);
        }
    })
    .forget();
}

pub fn watch_reduced_motion(reduce_motion: RwSignal<bool>) {
    let query = web_sys::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten());
    let Some(query) = query else {
        return;
    };
    reduce_motion.set(query.matches());

    let watched = query.clone();
    listen(&query, "change", move |_| {
        reduce_motion.set(watched.matches());
    });
}
