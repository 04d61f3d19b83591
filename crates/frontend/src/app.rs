use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::theme::ThemeProvider;
use contracts::shared::config::SiteConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = SiteConfig::load().unwrap_or_else(|e| {
        log::warn!("Falling back to default site config: {}", e);
        SiteConfig::default()
    });
    if !config.emailjs.is_configured() {
        log::info!("EmailJS credentials missing, contact form will copy drafts instead of sending");
    }
    provide_context(config);

    // Sidebar state, browser listeners and notices for the whole app.
    let ctx = AppGlobalContext::new();
    ctx.init_browser_listeners();
    provide_context(ctx);

    view! {
        <ThemeProvider>
            <AppRoutes />
        </ThemeProvider>
    }
}
