use leptos::prelude::*;

use crate::clock;
use crate::components::{
    DocumentRequirementsModal, EmptyState, ListToolbar, PageHeader, SupplierSearchModal,
};
use crate::console;
use crate::models::listing::update_by_id;
use crate::models::requirements::{mandatory_count, DocumentRequirement};
use crate::models::supplier::{
    empty_state_hint, sample_suppliers, sort_suppliers, supplier_filters, toggle_favorite, Supplier,
    SupplierDraft, SupplierSort,
};
use crate::models::{AppState, ListState, SortDirection};

#[component]
pub fn Suppliers() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState context missing");
    let suppliers = RwSignal::new(sample_suppliers());
    let list = ListState::new();
    let sort = RwSignal::new(SupplierSort::default());
    let direction = RwSignal::new(SortDirection::Ascending);
    let wizard_open = RwSignal::new(false);
    let documents_for = RwSignal::new(None::<Supplier>);

    let visible = Memo::new(move |_| {
        let mut shown = suppliers.with(|all| list.apply(all));
        sort_suppliers(&mut shown, sort.get(), direction.get());
        shown
    });

    let add_supplier = move |draft: SupplierDraft| {
        let supplier = draft.into_supplier(clock::fresh_id());
        state.show_banner(format!("{} added to your suppliers", supplier.contact.name));
        suppliers.update(|all| all.push(supplier));
    };

    let save_documents = move |documents: Vec<DocumentRequirement>| {
        let Some(target) = documents_for.get_untracked() else {
            return;
        };
        console::log(&format!("Document requirements for {}", target.contact.name), &documents);
        suppliers.update(|all| {
            update_by_id(all, &target.id, |s| s.documents = documents);
        });
    };

    let rows = move || {
        visible
            .get()
            .into_iter()
            .map(|supplier| {
                let c = supplier.contact.clone();
                let id = supplier.id.clone();
                let docs_target = supplier.clone();
                let star_class = if supplier.favorite {
                    "icon-button star star--on"
                } else {
                    "icon-button star"
                };
                let documents = if supplier.documents.is_empty() {
                    "No document requirements".to_string()
                } else {
                    format!(
                        "{} documents ({} mandatory)",
                        supplier.documents.len(),
                        mandatory_count(&supplier.documents),
                    )
                };
                view! {
                    <article class="list-row">
                        <div class="list-row__main">
                            <div class="list-row__heading">
                                <h3 class="list-row__title">{c.name.clone()}</h3>
                                <span class=c.kind.badge_class()>{c.kind.label()}</span>
                                <span
                                    class=supplier.standing.badge_class()
                                    title=supplier.standing.description()
                                >
                                    {supplier.standing.label()}
                                </span>
                            </div>
                            <div class="list-row__meta">
                                <span>"📍 " {c.location.display()}</span>
                                <span>{format!("{} • {}", c.category, c.sub_category)}</span>
                            </div>
                            <div class="list-row__meta">
                                <span>"👤 " {c.contact_person.clone()}</span>
                                <span>"✉ " {c.email.clone()}</span>
                                <span>"📞 " {c.phone.clone()}</span>
                            </div>
                            <div class="list-row__meta">
                                <span>"📎 " {documents}</span>
                                {supplier
                                    .documents_on_file
                                    .then(|| view! { <span class="badge badge--gray">"Documents requested"</span> })}
                            </div>
                        </div>
                        <div class="list-row__actions">
                            <button
                                type="button"
                                class=star_class
                                title="Favorite"
                                on:click=move |_| {
                                    suppliers.update(|all| {
                                        toggle_favorite(all, &id);
                                    });
                                }
                            >
                                {if supplier.favorite { "★" } else { "☆" }}
                            </button>
                            <button
                                type="button"
                                class="button button--secondary button--small"
                                on:click=move |_| documents_for.set(Some(docs_target.clone()))
                            >
                                "📄 Documents"
                            </button>
                        </div>
                    </article>
                }
            })
            .collect_view()
    };

    view! {
        <section class="suppliers">
            <PageHeader title="Suppliers" subtitle="Your approved and credit suppliers" icon="🏢">
                <button type="button" class="button button--primary" on:click=move |_| wizard_open.set(true)>
                    "➕ Add Supplier"
                </button>
            </PageHeader>

            <ListToolbar
                query=list.query
                filter=list.filter
                placeholder="Search by name, location or contact..."
                keys=supplier_filters()
            >
                <div class="sort-control">
                    {SupplierSort::ALL
                        .into_iter()
                        .map(|choice| {
                            let class = move || {
                                if sort.get() == choice { "chip chip--active" } else { "chip" }
                            };
                            view! {
                                <button
                                    type="button"
                                    class=class
                                    on:click=move |_| {
                                        if sort.get_untracked() == choice {
                                            direction.update(|d| *d = d.toggled());
                                        } else {
                                            sort.set(choice);
                                            direction.set(SortDirection::Ascending);
                                        }
                                    }
                                >
                                    {choice.label()}
                                    {move || (sort.get() == choice).then(|| direction.get().arrow())}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </ListToolbar>

            <div class="list">{rows}</div>

            {move || {
                visible.with(Vec::is_empty).then(|| {
                    view! {
                        <EmptyState
                            icon="🏢"
                            title="No suppliers found"
                            hint=empty_state_hint(list.has_query())
                        />
                    }
                })
            }}

            <Show when=move || wizard_open.get()>
                <SupplierSearchModal on_close=move || wizard_open.set(false) on_save=Callback::new(add_supplier) />
            </Show>
            {move || {
                documents_for
                    .get()
                    .map(|supplier| {
                        view! {
                            <DocumentRequirementsModal
                                initial=supplier.documents
                                on_close=move || documents_for.set(None)
                                on_save=Callback::new(save_documents)
                            />
                        }
                    })
            }}
        </section>
    }
}
