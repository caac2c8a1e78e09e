use leptos::prelude::*;
use leptos::tachys::dom::window;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::components::{text_field, ModalFrame};
use crate::console;
use crate::models::supplier::{
    marketplace_search, sample_directory, should_search, Assignment, DirectoryEntry,
    ManualSupplierForm, SupplierDraft, SupplierType, WizardView, SEARCH_DEBOUNCE_MS,
};

/// Add-supplier wizard: pick a source, find or enter the supplier, then assign a standing.
#[component]
pub fn SupplierSearchModal(
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_save: Callback<SupplierDraft>,
) -> impl IntoView {
    let step = RwSignal::new(WizardView::Options);
    let query = RwSignal::new(String::new());
    let results = RwSignal::new(Vec::<DirectoryEntry>::new());
    let searching = RwSignal::new(false);
    let selected = RwSignal::new(None::<DirectoryEntry>);
    let assignment = RwSignal::new(Assignment::default());
    let manual = RwSignal::new(ManualSupplierForm::default());

    let pending_search = StoredValue::new(None::<i32>);
    let cancel_pending = move || {
        if let Some(handle) = pending_search.get_value() {
            window().clear_timeout_with_handle(handle);
            pending_search.set_value(None);
        }
    };

    // Debounced marketplace search; every keystroke restarts the timer
    Effect::new(move |_| {
        let text = query.get();
        let on_marketplace = step.get() == WizardView::Marketplace;
        cancel_pending();

        if on_marketplace && should_search(&text) {
            searching.set(true);
            let run = Closure::once_into_js(move || {
                pending_search.set_value(None);
                results.set(marketplace_search(&sample_directory(), &text));
                searching.set(false);
            });
            match window().set_timeout_with_callback_and_timeout_and_arguments_0(
                run.unchecked_ref(),
                SEARCH_DEBOUNCE_MS,
            ) {
                Ok(handle) => pending_search.set_value(Some(handle)),
                Err(e) => {
                    console::warn(&format!("Supplier search timer failed: {e:?}"));
                    searching.set(false);
                }
            }
        } else {
            results.set(Vec::new());
            searching.set(false);
        }
    });

    on_cleanup(cancel_pending);

    let close = move || {
        cancel_pending();
        step.set(WizardView::Options);
        query.set(String::new());
        results.set(Vec::new());
        searching.set(false);
        selected.set(None);
        assignment.set(Assignment::default());
        manual.set(ManualSupplierForm::default());
        on_close.run(());
    };

    let finish = move |draft: SupplierDraft| {
        console::log("Supplier added", &draft);
        on_save.run(draft);
        close();
    };

    let assign = move |_: leptos::ev::MouseEvent| {
        if let Some(entry) = selected.get_untracked() {
            finish(SupplierDraft::new(entry.contact, assignment.get_untracked()));
        }
    };

    let save_manual = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match manual.with_untracked(ManualSupplierForm::submit) {
            Ok(contact) => finish(SupplierDraft::new(contact, assignment.get_untracked())),
            Err(e) => console::debug("Manual supplier not saved", &e),
        }
    };

    let options_view = move || {
        WizardView::ENTRY_POINTS
            .into_iter()
            .map(|target| {
                view! {
                    <button type="button" class="option-card" on:click=move |_| step.set(target)>
                        <span class="option-card__icon">{target.icon()}</span>
                        <span class="option-card__text">
                            <span class="option-card__title">{target.title()}</span>
                            <span class="option-card__description">{target.description()}</span>
                        </span>
                        <span class="option-card__arrow">"→"</span>
                    </button>
                }
            })
            .collect_view()
    };

    let scan_view = move || {
        view! {
            <div class="scan-panel">
                <div class="scan-panel__frame">"📇"</div>
                <button
                    type="button"
                    class="button button--primary"
                    on:click=|_| console::info("Camera capture is not available in this build")
                >
                    "Start Camera"
                </button>
                <p class="modal__hint">
                    "Make sure the business card is well-lit and all text is clearly visible"
                </p>
            </div>
        }
    };

    let result_rows = move || {
        results
            .get()
            .into_iter()
            .map(|entry| {
                let c = entry.contact.clone();
                view! {
                    <button
                        type="button"
                        class="result-row"
                        on:click=move |_| {
                            selected.set(Some(entry.clone()));
                            step.set(WizardView::Assign);
                        }
                    >
                        <span class="result-row__name">{c.name.clone()}</span>
                        <span class=c.kind.badge_class()>{c.kind.label()}</span>
                        <span class="result-row__meta">"📍 " {c.location.display()}</span>
                        <span class="result-row__meta">
                            {format!("{} • {}", c.category, c.sub_category)}
                        </span>
                        <span class="result-row__action">"Select"</span>
                    </button>
                }
            })
            .collect_view()
    };

    let marketplace_view = move || {
        view! {
            <div class="marketplace">
                <label class="search-bar">
                    <span class="search-bar__icon">"🔍"</span>
                    <input
                        type="text"
                        class="search-bar__input"
                        placeholder="Search by supplier name, location, or type..."
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                </label>
                {move || {
                    let typed_enough = query.with(|q| should_search(q));
                    if !typed_enough {
                        view! {
                            <p class="modal__hint">"Start typing to search our supplier marketplace"</p>
                        }
                            .into_any()
                    } else if searching.get() {
                        view! { <p class="modal__hint">"Searching suppliers..."</p> }.into_any()
                    } else if results.with(Vec::is_empty) {
                        view! {
                            <div class="empty-state">
                                <p class="empty-state__hint">
                                    {move || format!("We couldn't find any suppliers matching \"{}\"", query.get())}
                                </p>
                                <button
                                    type="button"
                                    class="button button--primary"
                                    on:click=move |_| step.set(WizardView::Manual)
                                >
                                    "Add New Supplier"
                                </button>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! { <div class="result-list">{result_rows}</div> }.into_any()
                    }
                }}
            </div>
        }
    };

    let manual_view = move || {
        view! {
            <form class="form" on:submit=save_manual>
                {text_field(manual, "Supplier Name *", "text", |f| f.name.clone(), |f, v| f.name = v)}
                {text_field(manual, "Email *", "email", |f| f.email.clone(), |f, v| f.email = v)}
                {text_field(manual, "Phone", "tel", |f| f.phone.clone(), |f, v| f.phone = v)}
                {text_field(manual, "Contact Person", "text", |f| f.contact_person.clone(), |f, v| f.contact_person = v)}
                {text_field(manual, "City", "text", |f| f.city.clone(), |f, v| f.city = v)}
                {text_field(manual, "Country", "text", |f| f.country.clone(), |f, v| f.country = v)}
                {text_field(manual, "Category", "text", |f| f.category.clone(), |f, v| f.category = v)}
                <label class="form__field">
                    <span class="form__label">"Supplier Type"</span>
                    <select
                        class="input"
                        on:change=move |ev| {
                            let key = event_target_value(&ev);
                            manual.update(|f| f.kind = SupplierType::from_key(&key));
                        }
                    >
                        {SupplierType::ALL
                            .into_iter()
                            .map(|kind| {
                                view! {
                                    <option
                                        value=kind.filter_key()
                                        prop:selected=move || manual.with(|f| f.kind.unwrap_or(SupplierType::Distributor) == kind)
                                    >
                                        {kind.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
                <div class="modal__footer">
                    <button type="button" class="button button--secondary" on:click=move |_| step.set(WizardView::Options)>
                        "Back"
                    </button>
                    <button type="submit" class="button button--primary">"Save Supplier"</button>
                </div>
            </form>
        }
    };

    let assign_view = move || {
        let Some(entry) = selected.get() else {
            return ().into_any();
        };
        let c = entry.contact;
        view! {
            <div class="assign">
                <div class="assign__summary">
                    <h4>{c.name.clone()}</h4>
                    <span class=c.kind.badge_class()>{c.kind.label()}</span>
                    <p class="result-row__meta">"📍 " {c.location.display()}</p>
                    <p class="result-row__meta">{format!("{} • {}", c.category, c.sub_category)}</p>
                </div>
                <fieldset class="form__field">
                    <legend class="form__label">"Assignment Options"</legend>
                    {Assignment::CHOICES
                        .into_iter()
                        .map(|standing| {
                            view! {
                                <label class="radio-card">
                                    <input
                                        type="radio"
                                        name="assignment"
                                        prop:checked=move || assignment.with(|a| a.standing == standing)
                                        on:change=move |_| assignment.update(|a| a.standing = standing)
                                    />
                                    <span class="radio-card__title">{standing.label()}</span>
                                    <span class="radio-card__description">{standing.description()}</span>
                                </label>
                            }
                        })
                        .collect_view()}
                </fieldset>
                <label class="checkbox-row">
                    <input
                        type="checkbox"
                        prop:checked=move || assignment.with(|a| a.request_documents)
                        on:change=move |ev| {
                            let on = event_target_checked(&ev);
                            assignment.update(|a| a.request_documents = on);
                        }
                    />
                    "Ask supplier to upload business documents (licenses, certificates, etc.)"
                </label>
                <Show when=move || assignment.with(|a| a.standing == Assignment::CHOICES[1])>
                    <div class="notice notice--warning">
                        <p class="notice__title">"Credit Supplier Confirmation Required"</p>
                        <p>
                            "The supplier will receive an email invitation to confirm their credit supplier status. They will remain in \"Pending\" status until confirmed."
                        </p>
                    </div>
                </Show>
                <div class="modal__footer">
                    <button
                        type="button"
                        class="button button--secondary"
                        on:click=move |_| step.set(WizardView::Marketplace)
                    >
                        "Back to Search"
                    </button>
                    <button type="button" class="button button--primary" on:click=assign>
                        "✔ Assign Supplier"
                    </button>
                </div>
            </div>
        }
        .into_any()
    };

    view! {
        <ModalFrame title="Add Supplier" icon="🏢" on_close=Callback::new(move |()| close()) wide=true>
            <div class="wizard__step">
                <Show when=move || step.get() != WizardView::Options>
                    <button
                        type="button"
                        class="icon-button"
                        aria-label="Back"
                        on:click=move |_| step.update(|s| *s = s.back())
                    >
                        "←"
                    </button>
                </Show>
                <h4 class="wizard__title">{move || step.get().title()}</h4>
            </div>
            {move || match step.get() {
                WizardView::Options => options_view().into_any(),
                WizardView::Scan => scan_view().into_any(),
                WizardView::Marketplace => marketplace_view().into_any(),
                WizardView::Manual => manual_view().into_any(),
                WizardView::Assign => assign_view(),
            }}
        </ModalFrame>
    }
}
