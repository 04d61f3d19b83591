//! Transient toast notices rendered in the bottom corner.

use crate::layout::global_context::use_global_context;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Error,
}

impl NoticeKind {
    fn css_class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "notice notice--success",
            NoticeKind::Info => "notice notice--info",
            NoticeKind::Error => "notice notice--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

#[component]
pub fn Toaster() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || ctx.notices.get()
                key=|notice| notice.id
                children=move |notice| {
                    let Notice { id, kind, title, description } = notice;
                    view! {
                        <div class=kind.css_class()>
                            <div class="notice__body">
                                <strong>{title}</strong>
                                {(!description.is_empty()).then(|| view! {
                                    <p class="notice__description">{description}</p>
                                })}
                            </div>
                            <button
                                class="button button--icon"
                                aria-label="Dismiss"
                                on:click=move |_| ctx.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
