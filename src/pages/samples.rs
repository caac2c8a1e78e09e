use leptos::prelude::*;

use crate::components::{EmptyState, ListToolbar, PageHeader};
use crate::models::calendar::display_date;
use crate::models::sample::{sample_samples, SAMPLE_FILTERS};
use crate::models::ListState;

#[component]
pub fn Samples() -> impl IntoView {
    let samples = RwSignal::new(sample_samples());
    let list = ListState::new();

    let visible = Memo::new(move |_| samples.with(|all| list.apply(all)));

    let rows = move || {
        visible
            .get()
            .into_iter()
            .map(|sample| {
                view! {
                    <article class="list-row">
                        <div class="list-row__main">
                            <div class="list-row__heading">
                                <h3 class="list-row__title">{sample.product}</h3>
                                <span class=sample.status.badge_class()>{sample.status.label()}</span>
                            </div>
                            <div class="list-row__meta">
                                <span>"🏢 " {sample.supplier}</span>
                                <span>{sample.category}</span>
                                <span>"📍 " {sample.location}</span>
                                <span>"Requested " {display_date(sample.requested_on)}</span>
                            </div>
                            <p class="list-row__description">{sample.notes}</p>
                        </div>
                    </article>
                }
            })
            .collect_view()
    };

    view! {
        <section class="samples">
            <PageHeader title="Samples" subtitle="Track product samples from suppliers" icon="📦" />
            <ListToolbar
                query=list.query
                filter=list.filter
                placeholder="Search by product or supplier..."
                keys=SAMPLE_FILTERS.to_vec()
            />
            <div class="list">{rows}</div>
            {move || {
                visible.with(Vec::is_empty).then(|| {
                    let hint = if list.has_query() {
                        "Try adjusting your search"
                    } else {
                        "Request a sample from a supplier to track it here"
                    };
                    view! { <EmptyState icon="📦" title="No samples found" hint=hint /> }
                })
            }}
        </section>
    }
}
