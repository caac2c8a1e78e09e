use leptos::prelude::*;

use crate::models::{AppState, View};

/// Slide-over panel with the latest alerts.
#[component]
pub fn NotificationCenter() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState context missing");

    let open_alert = move |id: String, target: View| {
        state.mark_alert_read(&id);
        state.close_notification_center();
        state.navigate(target);
    };

    let rows = move || {
        state
            .alerts
            .get()
            .into_iter()
            .map(|alert| {
                let class =
                    if alert.unread { "alert-row alert-row--unread" } else { "alert-row" };
                let id = alert.id.clone();
                let target = alert.kind.view();
                view! {
                    <button type="button" class=class on:click=move |_| open_alert(id.clone(), target)>
                        <span class="alert-row__icon">{alert.kind.icon()}</span>
                        <span class="alert-row__text">
                            <span class="alert-row__title">{alert.title}</span>
                            <span class="alert-row__body">{alert.body}</span>
                            <span class="alert-row__time">{alert.time}</span>
                        </span>
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <Show when=move || state.notification_center_open.get()>
            <div class="slide-over-backdrop" on:click=move |_| state.close_notification_center()></div>
            <aside class="slide-over" role="dialog" aria-label="Notifications">
                <div class="slide-over__header">
                    <h3>"Notifications"</h3>
                    <button
                        type="button"
                        class="link-button"
                        disabled=move || state.unread_alerts() == 0
                        on:click=move |_| state.mark_all_alerts_read()
                    >
                        "Mark all read"
                    </button>
                    <button
                        type="button"
                        class="icon-button"
                        aria-label="Close"
                        on:click=move |_| state.close_notification_center()
                    >
                        "✕"
                    </button>
                </div>
                <div class="slide-over__body">{rows}</div>
                <div class="slide-over__footer">
                    <button
                        type="button"
                        class="button button--secondary"
                        on:click=move |_| {
                            state.close_notification_center();
                            state.navigate(View::Notifications);
                        }
                    >
                        "View all notifications"
                    </button>
                </div>
            </aside>
        </Show>
    }
}
