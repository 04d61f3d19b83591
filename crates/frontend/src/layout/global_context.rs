use crate::shared::browser_state;
use crate::shared::notify::{Notice, NoticeKind};
use contracts::enums::ProjectFocus;
use contracts::shared::shell_context::ShellContext;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

const NOTICE_TTL_MS: u32 = 4_000;

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub sidebar_open: RwSignal<bool>,
    pub is_online: RwSignal<bool>,
    pub is_idle: RwSignal<bool>,
    pub reduce_motion: RwSignal<bool>,
    pub notices: RwSignal<Vec<Notice>>,
    next_notice_id: RwSignal<u64>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            sidebar_open: RwSignal::new(true),
            is_online: RwSignal::new(true),
            is_idle: RwSignal::new(false),
            reduce_motion: RwSignal::new(false),
            notices: RwSignal::new(vec![]),
            next_notice_id: RwSignal::new(0),
        }
    }

    /// Wire online/offline, idle and reduced-motion listeners into the signals.
    pub fn init_browser_listeners(&self) {
        browser_state::watch_online(self.is_online);
        browser_state::watch_idle(self.is_idle);
        browser_state::watch_reduced_motion(self.reduce_motion);
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|open| *open = !*open);
    }

    /// Snapshot of the ambient state for pure domain helpers
    pub fn shell_context(&self, current_path: &str, current_focus: ProjectFocus) -> ShellContext {
        ShellContext {
            current_path: current_path.to_string(),
            current_focus,
            is_online: self.is_online.get(),
            is_idle: self.is_idle.get(),
            reduce_motion: self.reduce_motion.get(),
        }
    }

    pub fn notify(&self, kind: NoticeKind, title: &str, description: &str) {
        let id = self.next_notice_id.get_untracked();
        self.next_notice_id.set(id + 1);
        log::debug!("notice #{} {:?}: {}", id, kind, title);
        self.notices.update(|list| {
            list.push(Notice {
                id,
                kind,
                title: title.to_string(),
                description: description.to_string(),
            })
        });

        let this = *self;
        Timeout::new(NOTICE_TTL_MS, move || this.dismiss(id)).forget();
    }

    pub fn dismiss(&self, id: u64) {
        self.notices.update(|list| list.retain(|n| n.id != id));
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
