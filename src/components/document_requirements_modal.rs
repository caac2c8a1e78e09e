use leptos::prelude::*;

use crate::clock;
use crate::components::ModalFrame;
use crate::console;
use crate::models::requirements::{
    add_requirement, default_requirements, mandatory_count, remove_requirement, toggle_mandatory,
    DocumentRequirement,
};

/// Editor for the documents a supplier has to provide.
///
/// Opens with `initial`, or the standard three requirements when that is empty.
#[component]
pub fn DocumentRequirementsModal(
    #[prop(optional)] initial: Vec<DocumentRequirement>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_save: Callback<Vec<DocumentRequirement>>,
) -> impl IntoView {
    let seed = if initial.is_empty() {
        default_requirements()
    } else {
        initial
    };
    let requirements = RwSignal::new(seed);
    let draft = RwSignal::new(String::new());

    let add = move || {
        let name = draft.get_untracked();
        let mut added = Ok(());
        requirements.update(|list| {
            let id = format!("{}-{}", clock::fresh_id(), list.len());
            added = add_requirement(list, id, &name);
        });
        match added {
            Ok(()) => draft.set(String::new()),
            Err(e) => console::debug("Requirement not added", &e),
        }
    };

    let rows = move || {
        requirements
            .get()
            .into_iter()
            .map(|req| {
                let toggle_id = req.id.clone();
                let remove_id = req.id.clone();
                let badge = if req.mandatory {
                    "badge badge--red"
                } else {
                    "badge badge--gray"
                };
                view! {
                    <li class="requirement-row">
                        <span class="requirement-row__name">{req.name.clone()}</span>
                        <button
                            type="button"
                            class=badge
                            title="Toggle mandatory"
                            on:click=move |_| requirements.update(|list| toggle_mandatory(list, &toggle_id))
                        >
                            {req.label()}
                        </button>
                        <button
                            type="button"
                            class="icon-button"
                            aria-label="Remove"
                            on:click=move |_| requirements.update(|list| remove_requirement(list, &remove_id))
                        >
                            "🗑"
                        </button>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <ModalFrame title="Document Requirements" icon="📄" on_close=on_close>
            <p class="modal__lead">
                {move || {
                    requirements.with(|list| {
                        format!("{} documents, {} mandatory", list.len(), mandatory_count(list))
                    })
                }}
            </p>
            <ul class="requirement-list">{rows}</ul>
            <div class="inline-form">
                <input
                    type="text"
                    class="input"
                    placeholder="Add a document requirement"
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            add();
                        }
                    }
                />
                <button
                    type="button"
                    class="button button--secondary"
                    disabled=move || draft.with(|d| d.trim().is_empty())
                    on:click=move |_| add()
                >
                    "Add"
                </button>
            </div>
            <div class="modal__footer">
                <button type="button" class="button button--secondary" on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
                <button
                    type="button"
                    class="button button--primary"
                    on:click=move |_| {
                        on_save.run(requirements.get_untracked());
                        on_close.run(());
                    }
                >
                    "Save Requirements"
                </button>
            </div>
        </ModalFrame>
    }
}
