use leptos::prelude::*;

use crate::models::notification::badge_text;
use crate::models::task::CURRENT_USER;
use crate::models::team::initials;
use crate::models::{AppState, View};

/// Fixed header with the bell and the profile shortcut.
#[component]
pub fn TopNavigation() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState context missing");

    view! {
        <header class=move || {
            if state.sidebar_collapsed.get() { "topbar topbar--wide" } else { "topbar" }
        }>
            <div class="topbar__title">{move || state.active_view.get().label()}</div>
            <div class="topbar__actions">
                <NotificationBell />
                <button
                    type="button"
                    class="topbar__profile"
                    title="Profile"
                    on:click=move |_| state.navigate(View::Profile)
                >
                    <span class="avatar">{initials(CURRENT_USER)}</span>
                    <span class="topbar__user">{CURRENT_USER}</span>
                </button>
            </div>
        </header>
    }
}

/// Bell button with the unread badge; opens the notification center.
#[component]
pub fn NotificationBell() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState context missing");
    let badge = move || badge_text(state.unread_alerts());

    view! {
        <button
            type="button"
            class="icon-button bell"
            title="Notifications"
            on:click=move |_| state.open_notification_center()
        >
            "🔔"
            {move || badge().map(|text| view! { <span class="bell__badge">{text}</span> })}
        </button>
    }
}
