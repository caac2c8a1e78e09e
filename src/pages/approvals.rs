use leptos::prelude::*;

use crate::components::{CountBadge, EmptyState, ListToolbar, PageHeader};
use crate::console;
use crate::models::approval::{decide, pending_count, sample_approval_requests, APPROVAL_FILTERS};
use crate::models::calendar::display_date;
use crate::models::quotation::QuoteStatus;
use crate::models::ListState;

#[component]
pub fn Approvals() -> impl IntoView {
    let requests = RwSignal::new(sample_approval_requests());
    let list = ListState::new();

    let visible = Memo::new(move |_| requests.with(|all| list.apply(all)));
    let pending = Signal::derive(move || requests.with(|all| pending_count(all)));

    let settle = move |id: String, approve: bool| {
        let mut changed = false;
        requests.update(|all| changed = decide(all, &id, approve));
        if changed {
            let verdict = if approve { "approved" } else { "rejected" };
            console::info(&format!("Approval request {id} {verdict}"));
        }
    };

    let rows = move || {
        visible
            .get()
            .into_iter()
            .map(|request| {
                let is_pending = request.status == QuoteStatus::Pending;
                let (approve_id, reject_id) = (request.id.clone(), request.id.clone());
                view! {
                    <article class="list-row">
                        <div class="list-row__main">
                            <div class="list-row__heading">
                                <span class="badge badge--blue">{request.rfq_number.clone()}</span>
                                <h3 class="list-row__title">{request.title.clone()}</h3>
                                <span class=request.status.approval_badge_class()>
                                    {request.status.approval_label()}
                                </span>
                            </div>
                            <div class="list-row__meta">
                                <span>"👤 " {request.requested_by.clone()}</span>
                                <span class="list-row__value">{request.amount.clone()}</span>
                                <span>"Requested " {display_date(request.requested_on)}</span>
                            </div>
                            <p class="list-row__description">{request.note.clone()}</p>
                        </div>
                        {is_pending
                            .then(|| {
                                view! {
                                    <div class="list-row__actions">
                                        <button
                                            type="button"
                                            class="button button--success button--small"
                                            on:click=move |_| settle(approve_id.clone(), true)
                                        >
                                            "✔ Approve"
                                        </button>
                                        <button
                                            type="button"
                                            class="button button--danger button--small"
                                            on:click=move |_| settle(reject_id.clone(), false)
                                        >
                                            "✖ Reject"
                                        </button>
                                    </div>
                                }
                            })}
                    </article>
                }
            })
            .collect_view()
    };

    view! {
        <section class="approvals">
            <PageHeader title="Approvals" subtitle="Requests waiting on your sign-off" icon="✔">
                <CountBadge count=pending suffix=" pending" />
            </PageHeader>
            <ListToolbar
                query=list.query
                filter=list.filter
                placeholder="Search approvals..."
                keys=APPROVAL_FILTERS.to_vec()
            />
            <div class="list">{rows}</div>
            {move || {
                visible.with(Vec::is_empty).then(|| {
                    let hint = if list.has_query() {
                        "Try adjusting your search"
                    } else {
                        "Nothing is waiting for approval"
                    };
                    view! { <EmptyState icon="✔" title="No approval requests" hint=hint /> }
                })
            }}
        </section>
    }
}
