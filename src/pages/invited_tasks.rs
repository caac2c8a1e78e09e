use leptos::prelude::*;

use crate::components::{CountBadge, EmptyState, ListToolbar, PageHeader};
use crate::console;
use crate::models::calendar::display_date;
use crate::models::invitation::{
    pending_count, respond, sample_invitations, InvitationStatus, INVITATION_FILTERS,
};
use crate::models::ListState;

#[component]
pub fn InvitedTasks() -> impl IntoView {
    let invitations = RwSignal::new(sample_invitations());
    let list = ListState::new();

    let visible = Memo::new(move |_| invitations.with(|all| list.apply(all)));
    let pending = Signal::derive(move || invitations.with(|all| pending_count(all)));

    let answer = move |id: String, accept: bool| {
        let mut changed = false;
        invitations.update(|all| changed = respond(all, &id, accept));
        if changed {
            let verb = if accept { "Accepted" } else { "Declined" };
            console::info(&format!("{verb} invitation {id}"));
        }
    };

    let rows = move || {
        visible
            .get()
            .into_iter()
            .map(|invitation| {
                let is_pending = invitation.status == InvitationStatus::Pending;
                let (accept_id, decline_id) = (invitation.id.clone(), invitation.id.clone());
                view! {
                    <article class="list-row">
                        <div class="list-row__main">
                            <div class="list-row__heading">
                                <h3 class="list-row__title">{invitation.title.clone()}</h3>
                                <span class=invitation.priority.badge_class()>
                                    {invitation.priority.label()}
                                </span>
                                <span class=invitation.status.badge_class()>
                                    {invitation.status.label()}
                                </span>
                            </div>
                            <p class="list-row__description">{invitation.description.clone()}</p>
                            <div class="list-row__meta">
                                <span>
                                    {format!("👤 {} • {}", invitation.invited_by, invitation.inviter_company)}
                                </span>
                                <span>{invitation.category.clone()}</span>
                                {invitation
                                    .estimated_value
                                    .clone()
                                    .map(|value| view! { <span class="list-row__value">{value}</span> })}
                            </div>
                            <div class="list-row__meta">
                                <span>"Invited " {display_date(invitation.invited_on)}</span>
                                <span>"📅 Due " {display_date(invitation.due)}</span>
                            </div>
                        </div>
                        {is_pending
                            .then(|| {
                                view! {
                                    <div class="list-row__actions">
                                        <button
                                            type="button"
                                            class="button button--success button--small"
                                            on:click=move |_| answer(accept_id.clone(), true)
                                        >
                                            "✔ Accept"
                                        </button>
                                        <button
                                            type="button"
                                            class="button button--danger button--small"
                                            on:click=move |_| answer(decline_id.clone(), false)
                                        >
                                            "✖ Decline"
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
        <section class="invited-tasks">
            <PageHeader
                title="Invited Tasks"
                subtitle="Work other teams have invited you to join"
                icon="📨"
            >
                <CountBadge count=pending suffix=" pending" />
            </PageHeader>
            <ListToolbar
                query=list.query
                filter=list.filter
                placeholder="Search by title, description or inviter..."
                keys=INVITATION_FILTERS.to_vec()
            />
            <div class="list">{rows}</div>
            {move || {
                visible.with(Vec::is_empty).then(|| {
                    let hint = if list.has_query() {
                        "Try adjusting your search"
                    } else {
                        "You have no task invitations right now"
                    };
                    view! { <EmptyState icon="📨" title="No invitations found" hint=hint /> }
                })
            }}
        </section>
    }
}
