use leptos::prelude::*;

use crate::components::{CountBadge, EmptyState, ListToolbar, PageHeader};
use crate::models::notification::ALERT_FILTERS;
use crate::models::{AppState, ListState};

#[component]
pub fn Notifications() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState context missing");
    let list = ListState::new();

    let visible = Memo::new(move |_| state.alerts.with(|all| list.apply(all)));
    let unread = Signal::derive(move || state.unread_alerts());

    let rows = move || {
        visible
            .get()
            .into_iter()
            .map(|alert| {
                let id = alert.id.clone();
                let target = alert.kind.view();
                let class =
                    if alert.unread { "alert-row alert-row--unread" } else { "alert-row" };
                view! {
                    <article class=class>
                        <span class="alert-row__icon">{alert.kind.icon()}</span>
                        <div class="alert-row__text">
                            <span class="alert-row__title">{alert.title.clone()}</span>
                            <span class="alert-row__body">{alert.body.clone()}</span>
                            <span class="alert-row__time">{alert.time.clone()}</span>
                        </div>
                        <div class="list-row__actions">
                            <button
                                type="button"
                                class="link-button"
                                on:click=move |_| state.navigate(target)
                            >
                                "Open"
                            </button>
                            {alert
                                .unread
                                .then(|| {
                                    view! {
                                        <button
                                            type="button"
                                            class="link-button"
                                            on:click=move |_| state.mark_alert_read(&id)
                                        >
                                            "Mark as read"
                                        </button>
                                    }
                                })}
                        </div>
                    </article>
                }
            })
            .collect_view()
    };

    view! {
        <section class="notifications">
            <PageHeader title="Notifications" subtitle="Updates on your RFQs and suppliers" icon="🔔">
                <CountBadge count=unread suffix=" unread" />
                <button
                    type="button"
                    class="button button--secondary"
                    disabled=move || unread.get() == 0
                    on:click=move |_| state.mark_all_alerts_read()
                >
                    "Mark all as read"
                </button>
            </PageHeader>
            <ListToolbar
                query=list.query
                filter=list.filter
                placeholder="Search notifications..."
                keys=ALERT_FILTERS.to_vec()
            />
            <div class="list">{rows}</div>
            {move || {
                visible.with(Vec::is_empty).then(|| {
                    let hint = if list.has_query() {
                        "Try adjusting your search"
                    } else {
                        "You're all caught up"
                    };
                    view! { <EmptyState icon="🔔" title="No notifications" hint=hint /> }
                })
            }}
        </section>
    }
}
