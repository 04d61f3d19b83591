pub mod footer;
pub mod global_context;
pub mod header;
pub mod left;

use crate::routes::route_state::provide_route_state;
use crate::shared::notify::Toaster;
use leptos::prelude::*;

/// Application shell shared by every route.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                   |
/// +------------------------------------------+
/// |  Sidebar  |           Content            |
/// |           +------------------------------+
/// |           |           Footer             |
/// +------------------------------------------+
/// ```
///
/// Must be mounted inside the `Router`; the route state is provided here so
/// the header, sidebar and pages all read the same memos.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    provide_route_state();
    let ctx = global_context::use_global_context();

    view! {
        <div
            class="app-layout"
            class:app-layout--idle=move || ctx.is_idle.get()
            class:app-layout--reduce-motion=move || ctx.reduce_motion.get()
        >
            <a class="skip-link" href="#main-content">"Skip to content"</a>
            <header::Header />

            <div class="app-body">
                <left::Sidebar />

                <div class="app-main">
                    <main id="main-content" class="app-content" tabindex="-1">
                        {children()}
                    </main>
                    <footer::Footer />
                </div>
            </div>

            <Toaster />
        </div>
    }
}
