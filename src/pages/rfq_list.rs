use leptos::prelude::*;

use crate::clock;
use crate::components::{
    CreateRfqModal, DatePicker, DocumentRequirementsModal, EmptyState, ListToolbar, PageHeader,
    TeamSelector,
};
use crate::console;
use crate::models::calendar::{display_date, parse_iso_date};
use crate::models::listing::update_by_id;
use crate::models::requirements::{mandatory_count, DocumentRequirement};
use crate::models::rfq::{
    next_rfq_number, sample_rfqs, sort_rfqs, Rfq, RfqKind, RfqSort, RFQ_FILTERS,
};
use crate::models::{ListState, SortDirection};

/// Which dialog is open over the list, with the RFQ it edits.
#[derive(Debug, Clone, PartialEq, Eq)]
enum RfqDialog {
    Create,
    Deadline(String),
    Team(String),
    Documents(String),
}

#[component]
pub fn RfqList() -> impl IntoView {
    let rfqs = RwSignal::new(sample_rfqs());
    let list = ListState::new();
    let sort = RwSignal::new(RfqSort::default());
    let direction = RwSignal::new(SortDirection::Descending);
    let dialog = RwSignal::new(None::<RfqDialog>);

    let visible = Memo::new(move |_| {
        let mut shown = rfqs.with(|all| list.apply(all));
        sort_rfqs(&mut shown, sort.get(), direction.get());
        shown
    });

    let close = move || dialog.set(None);
    let edit = move |id: &str, change: &dyn Fn(&mut Rfq)| {
        rfqs.update(|all| {
            update_by_id(all, id, change);
        });
    };

    let create = move |kind: RfqKind| {
        let today = clock::today();
        rfqs.update(|all| {
            let number = next_rfq_number(all, today);
            let draft = Rfq::draft(clock::fresh_id(), number, kind, today);
            console::log("RFQ created", &draft);
            all.push(draft);
        });
    };

    let rows = move || {
        visible
            .get()
            .into_iter()
            .map(|rfq| {
                let id = rfq.id.clone();
                let (deadline_id, team_id, docs_id) = (id.clone(), id.clone(), id);
                let team = if rfq.team.is_empty() {
                    "No team assigned".to_string()
                } else {
                    rfq.team.join(", ")
                };
                view! {
                    <article class="list-row">
                        <div class="list-row__main">
                            <div class="list-row__heading">
                                <span class="badge badge--blue">{rfq.number.clone()}</span>
                                <h3 class="list-row__title">{rfq.title.clone()}</h3>
                                <span class=rfq.status.badge_class()>{rfq.status.label()}</span>
                            </div>
                            <div class="list-row__meta">
                                <span>"📅 Deadline: " {display_date(rfq.deadline)}</span>
                                <span>{rfq.category.clone()}</span>
                                <span class="list-row__value">{rfq.estimated_value.clone()}</span>
                            </div>
                            <div class="list-row__meta">
                                <span>{format!("{} suppliers invited", rfq.suppliers_invited)}</span>
                                <span>{format!("{} quotations received", rfq.quotations_received)}</span>
                                <span>"Created " {display_date(rfq.created)}</span>
                            </div>
                            <div class="list-row__meta">
                                <span>"👥 " {team}</span>
                                <span>
                                    {format!(
                                        "📎 {} documents ({} mandatory)",
                                        rfq.documents.len(),
                                        mandatory_count(&rfq.documents),
                                    )}
                                </span>
                            </div>
                        </div>
                        <div class="list-row__actions">
                            <button
                                type="button"
                                class="icon-button"
                                title="Change deadline"
                                on:click=move |_| dialog.set(Some(RfqDialog::Deadline(deadline_id.clone())))
                            >
                                "📅"
                            </button>
                            <button
                                type="button"
                                class="icon-button"
                                title="Assign team"
                                on:click=move |_| dialog.set(Some(RfqDialog::Team(team_id.clone())))
                            >
                                "👥"
                            </button>
                            <button
                                type="button"
                                class="icon-button"
                                title="Document requirements"
                                on:click=move |_| dialog.set(Some(RfqDialog::Documents(docs_id.clone())))
                            >
                                "📎"
                            </button>
                        </div>
                    </article>
                }
            })
            .collect_view()
    };

    let find = move |id: &str| rfqs.with_untracked(|all| all.iter().find(|r| r.id == id).cloned());

    let dialog_view = move || {
        let Some(open) = dialog.get() else {
            return ().into_any();
        };
        match open {
            RfqDialog::Create => view! {
                <CreateRfqModal on_close=move || close() on_select=Callback::new(create) />
            }
            .into_any(),
            RfqDialog::Deadline(id) => {
                let current = find(&id).map(|r| r.deadline);
                let save = move |value: String| {
                    if let Some(date) = parse_iso_date(&value) {
                        edit(&id, &|r| r.deadline = date);
                        console::info(&format!("Deadline for {id} set to {value}"));
                    }
                    close();
                };
                match current {
                    Some(selected) => view! {
                        <DatePicker
                            today=clock::today()
                            selected=selected
                            on_close=move || close()
                            on_save=Callback::new(save)
                        />
                    }
                    .into_any(),
                    None => view! {
                        <DatePicker today=clock::today() on_close=move || close() on_save=Callback::new(save) />
                    }
                    .into_any(),
                }
            }
            RfqDialog::Team(id) => {
                let current = find(&id).map(|r| r.team).unwrap_or_default();
                let save = move |members: Vec<String>| {
                    console::log("Team assigned", &members);
                    edit(&id, &|r| r.team.clone_from(&members));
                    close();
                };
                view! { <TeamSelector selected=current on_close=move || close() on_save=Callback::new(save) /> }
                    .into_any()
            }
            RfqDialog::Documents(id) => {
                let current = find(&id).map(|r| r.documents).unwrap_or_default();
                let save = move |documents: Vec<DocumentRequirement>| {
                    console::log("Document requirements saved", &documents);
                    edit(&id, &|r| r.documents.clone_from(&documents));
                };
                view! {
                    <DocumentRequirementsModal initial=current on_close=move || close() on_save=Callback::new(save) />
                }
                .into_any()
            }
        }
    };

    view! {
        <section class="rfq-list">
            <PageHeader title="RFQ List" subtitle="Manage your request for quotations" icon="📄">
                <button
                    type="button"
                    class="button button--primary"
                    on:click=move |_| dialog.set(Some(RfqDialog::Create))
                >
                    "➕ Create RFQ"
                </button>
            </PageHeader>

            <ListToolbar
                query=list.query
                filter=list.filter
                placeholder="Search RFQs by title or number..."
                keys=RFQ_FILTERS.to_vec()
            >
                <div class="sort-control">
                    <select
                        class="input input--compact"
                        on:change=move |ev| {
                            let label = event_target_value(&ev);
                            if let Some(choice) = RfqSort::ALL.into_iter().find(|s| s.label() == label) {
                                sort.set(choice);
                            }
                        }
                    >
                        {RfqSort::ALL
                            .into_iter()
                            .map(|choice| {
                                view! {
                                    <option value=choice.label() prop:selected=move || sort.get() == choice>
                                        {format!("Sort: {}", choice.label())}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                    <button
                        type="button"
                        class="icon-button"
                        title="Toggle sort direction"
                        on:click=move |_| direction.update(|d| *d = d.toggled())
                    >
                        {move || direction.get().arrow()}
                    </button>
                </div>
            </ListToolbar>

            <div class="list">{rows}</div>

            {move || {
                visible.with(Vec::is_empty).then(|| {
                    let hint = if list.has_query() {
                        "Try adjusting your search"
                    } else {
                        "Create your first RFQ to get started"
                    };
                    view! { <EmptyState icon="📄" title="No RFQs found" hint=hint /> }
                })
            }}

            {dialog_view}
        </section>
    }
}
