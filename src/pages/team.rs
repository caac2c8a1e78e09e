use leptos::prelude::*;

use crate::components::{EmptyState, ListToolbar, PageHeader};
use crate::models::team::{initials, sample_team, TEAM_FILTERS};
use crate::models::ListState;

#[component]
pub fn Team() -> impl IntoView {
    let members = RwSignal::new(sample_team());
    let list = ListState::new();

    let visible = Memo::new(move |_| members.with(|all| list.apply(all)));

    let rows = move || {
        visible
            .get()
            .into_iter()
            .map(|member| {
                let status = if member.active { "badge badge--green" } else { "badge badge--gray" };
                view! {
                    <article class="list-row">
                        <span class="avatar">{initials(&member.name)}</span>
                        <div class="list-row__main">
                            <div class="list-row__heading">
                                <h3 class="list-row__title">{member.name.clone()}</h3>
                                <span class=member.role.badge_class()>{member.role.label()}</span>
                                <span class=status>{if member.active { "Active" } else { "Inactive" }}</span>
                            </div>
                            <div class="list-row__meta">
                                <span>"✉ " {member.email.clone()}</span>
                                <span>{member.department.clone()}</span>
                            </div>
                        </div>
                    </article>
                }
            })
            .collect_view()
    };

    view! {
        <section class="team">
            <PageHeader title="Team" subtitle="People working on your procurement" icon="👥" />
            <ListToolbar
                query=list.query
                filter=list.filter
                placeholder="Search by name, email or role..."
                keys=TEAM_FILTERS.to_vec()
            />
            <div class="list">{rows}</div>
            {move || {
                visible.with(Vec::is_empty).then(|| {
                    let hint = if list.has_query() {
                        "Try adjusting your search"
                    } else {
                        "Invite colleagues to collaborate on RFQs"
                    };
                    view! { <EmptyState icon="👥" title="No team members found" hint=hint /> }
                })
            }}
        </section>
    }
}
