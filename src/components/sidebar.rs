use leptos::prelude::*;

use crate::models::{AppState, View, NAV_SECTIONS};

const PRODUCT_VERSION: &str = concat!("Purchasync v", env!("CARGO_PKG_VERSION"));

/// Collapsible navigation rail grouped into sections.
#[component]
pub fn Sidebar() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState context missing");
    let collapsed = move || state.sidebar_collapsed.get();

    let sections = NAV_SECTIONS
        .iter()
        .map(|section| {
            view! {
                <div class="sidebar__section">
                    <Show when=move || !collapsed()>
                        <h3 class="sidebar__heading">{section.title}</h3>
                    </Show>
                    {section.views.iter().map(|view| view! { <NavItem view=*view /> }).collect_view()}
                </div>
            }
        })
        .collect_view();

    view! {
        <aside class=move || {
            if collapsed() { "sidebar sidebar--collapsed" } else { "sidebar" }
        }>
            <div class="sidebar__header">
                <Show when=move || !collapsed()>
                    <div class="sidebar__brand">
                        <span class="sidebar__logo">"P"</span>
                        <span class="sidebar__name">"Purchasync"</span>
                    </div>
                </Show>
                <button
                    type="button"
                    class="icon-button sidebar__toggle"
                    aria-label="Toggle sidebar"
                    on:click=move |_| state.toggle_sidebar()
                >
                    {move || if collapsed() { "›" } else { "‹" }}
                </button>
            </div>
            <nav class="sidebar__nav">{sections}</nav>
            <div class="sidebar__footer">
                <Show
                    when=move || !collapsed()
                    fallback=|| view! { <span class="sidebar__dot"></span> }
                >
                    <div class="sidebar__version">{PRODUCT_VERSION}</div>
                    <div class="sidebar__copyright">"© 2024 All rights reserved"</div>
                </Show>
            </div>
        </aside>
    }
}

#[component]
fn NavItem(view: View) -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState context missing");
    let is_active = move || state.active_view.get() == view;
    let collapsed = move || state.sidebar_collapsed.get();

    view! {
        <button
            type="button"
            class=move || if is_active() { "nav-item nav-item--active" } else { "nav-item" }
            title=move || collapsed().then_some(view.label())
            on:click=move |_| state.navigate(view)
        >
            <span class="nav-item__icon">{view.icon()}</span>
            <Show when=move || !collapsed()>
                <span class="nav-item__text">
                    <span class="nav-item__label">{view.label()}</span>
                    <Show when=move || !is_active()>
                        <span class="nav-item__description">{view.description()}</span>
                    </Show>
                </span>
            </Show>
        </button>
    }
}
