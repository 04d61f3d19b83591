//! Primary navigation sidebar.
//!
//! Active flags come from `resolve_active_state` over the static nav tree;
//! the sidebar only renders them. Groups with children are collapsible and
//! open themselves whenever one of their entries becomes active.

use super::NavFooter;
use crate::layout::global_context::use_global_context;
use crate::routes::route_state::use_route_state;
use crate::shared::icons::{nav_icon, ui_icon, UiIcon};
use contracts::domain::navigation::{
    resolve_active_state, ComputedNavNode, NavNode, NavPriority, NAV_ITEMS,
};
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_global_context();
    let route = use_route_state();

    let computed: Memo<Vec<ComputedNavNode<'static>>> = Memo::new(move |_| {
        resolve_active_state(NAV_ITEMS, &route.path.get(), route.focus.get())
    });

    view! {
        <aside
            id="app-sidebar"
            data-zone="left"
            class="app-sidebar"
            class:app-sidebar--collapsed=move || !ctx.sidebar_open.get()
        >
            <nav aria-label="Primary navigation">
                <p class="app-sidebar__label">"Navigation"</p>
                <ul class="app-sidebar__menu">
                    {NAV_ITEMS.iter().enumerate().map(|(index, node)| {
                        if node.has_children() {
                            view! { <NavGroup node=node index=index computed=computed /> }.into_any()
                        } else {
                            view! { <NavLink node=node index=index computed=computed /> }.into_any()
                        }
                    }).collect_view()}
                </ul>
            </nav>
            <NavFooter />
        </aside>
    }
}

fn node_active(computed: Memo<Vec<ComputedNavNode<'static>>>, index: usize) -> bool {
    computed.with(|nodes| nodes.get(index).is_some_and(|n| n.is_active))
}

fn child_active(
    computed: Memo<Vec<ComputedNavNode<'static>>>,
    index: usize,
    child_index: usize,
) -> bool {
    computed.with(|nodes| {
        nodes
            .get(index)
            .and_then(|n| n.children.get(child_index))
            .is_some_and(|c| c.is_active)
    })
}

#[component]
fn NavLink(
    node: &'static NavNode,
    index: usize,
    computed: Memo<Vec<ComputedNavNode<'static>>>,
) -> impl IntoView {
    let is_active = move || node_active(computed, index);

    view! {
        <li
            class="app-sidebar__item"
            class:app-sidebar__item--secondary={node.priority == NavPriority::Secondary}
        >
            <a
                href=node.href()
                class="app-sidebar__link"
                class:app-sidebar__link--active=is_active
                title=node.label
                aria-label=node.aria_label
                aria-current=move || is_active().then_some("page")
                download=node.download.then_some("")
            >
                {nav_icon(node.icon)}
                <span class="app-sidebar__text">{node.label}</span>
            </a>
        </li>
    }
}

#[component]
fn NavGroup(
    node: &'static NavNode,
    index: usize,
    computed: Memo<Vec<ComputedNavNode<'static>>>,
) -> impl IntoView {
    let ctx = use_global_context();
    let is_active = move || node_active(computed, index);
    let expanded = RwSignal::new(is_active());

    Effect::new(move |_| {
        if is_active() {
            expanded.set(true);
        }
    });

    let on_toggle = move |_| {
        // The collapsed rail has no room for sub-items; open the sidebar first.
        if !ctx.sidebar_open.get_untracked() {
            ctx.sidebar_open.set(true);
            expanded.set(true);
            return;
        }
        expanded.update(|open| *open = !*open);
    };

    // Collapsed rail tooltip names the active entry, e.g. "Work · DevOps".
    let tooltip = move || {
        computed.with(|nodes| {
            nodes
                .get(index)
                .and_then(|n| n.active_child())
                .map(|c| format!("{} · {}", node.label, c.child.label))
                .unwrap_or_else(|| node.label.to_string())
        })
    };

    let submenu_id = format!("nav-group-{}", index);
    let controls_id = submenu_id.clone();

    view! {
        <li
            class="app-sidebar__item"
            class:app-sidebar__item--secondary={node.priority == NavPriority::Secondary}
            class:app-sidebar__item--open=move || expanded.get()
        >
            <button
                type="button"
                class="app-sidebar__link"
                class:app-sidebar__link--active=is_active
                title=tooltip
                aria-label=node.aria_label
                aria-expanded=move || if expanded.get() { "true" } else { "false" }
                aria-controls=controls_id
                on:click=on_toggle
            >
                {nav_icon(node.icon)}
                <span class="app-sidebar__text">{node.label}</span>
                <span class="app-sidebar__chevron">{ui_icon(UiIcon::ChevronRight)}</span>
            </button>
            <Show when=move || expanded.get() && ctx.sidebar_open.get()>
                <ul id=submenu_id.clone() class="app-sidebar__submenu">
                    {node.children.iter().enumerate().map(|(child_index, child)| {
                        let child_is_active = move || child_active(computed, index, child_index);
                        view! {
                            <li>
                                <a
                                    href=child.href()
                                    class="app-sidebar__sublink"
                                    class:app-sidebar__sublink--active=child_is_active
                                    aria-label=child.aria_label
                                    aria-current=move || child_is_active().then_some("page")
                                >
                                    {child.label}
                                </a>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </Show>
        </li>
    }
}
