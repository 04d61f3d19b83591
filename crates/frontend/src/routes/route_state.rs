use contracts::enums::ProjectFocus;
use contracts::shared::url_state::focus_from_query;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Current path and normalized focus, recomputed on every navigation.
#[derive(Clone, Copy)]
pub struct RouteState {
    pub path: Memo<String>,
    pub focus: Memo<ProjectFocus>,
}

/// Derive the route state from the router location and provide it.
/// Must be called under the `Router`.
pub fn provide_route_state() -> RouteState {
    let location = use_location();
    let pathname = location.pathname;
    let search = location.search;

    let path = Memo::new(move |_| pathname.get());
    let focus = Memo::new(move |_| focus_from_query(&search.get()));

    Effect::new(move |_| {
        log::debug!("route {} (focus: {})", path.get(), focus.get());
    });

    let state = RouteState { path, focus };
    provide_context(state);
    state
}

pub fn use_route_state() -> RouteState {
    use_context::<RouteState>().expect("RouteState context not found")
}
