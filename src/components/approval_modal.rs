use leptos::prelude::*;

use crate::components::ModalFrame;
use crate::console;
use crate::models::quotation::{ApprovalRequestForm, Quotation};

/// Collects the approver's email and a note for a quotation.
#[component]
pub fn ApprovalModal(
    quote: Quotation,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_submit: Callback<ApprovalRequestForm>,
) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let comments = RwSignal::new(String::new());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match ApprovalRequestForm::validate(&email.get_untracked(), &comments.get_untracked()) {
            Ok(form) => on_submit.run(form),
            Err(e) => console::debug("Approval request not sent", &e),
        }
    };

    view! {
        <ModalFrame title="Send for Approval" icon="📨" on_close=on_close>
            <div class="quote-summary">
                <p class="quote-summary__title">{quote.rfq_title.clone()}</p>
                <p class="quote-summary__meta">
                    {format!("{} • {} • {}", quote.rfq_number, quote.supplier, quote.amount)}
                </p>
            </div>
            <form class="form" on:submit=submit>
                <label class="form__field">
                    <span class="form__label">"Approver Email *"</span>
                    <input
                        type="email"
                        class="input"
                        required=true
                        placeholder="approver@company.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    <span class="form__label">"Comments"</span>
                    <textarea
                        class="input"
                        rows="3"
                        placeholder="Add any notes for the approver"
                        prop:value=move || comments.get()
                        on:input=move |ev| comments.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="modal__footer">
                    <button type="button" class="button button--secondary" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || !email.with(|e| e.contains('@'))
                    >
                        "Send Request"
                    </button>
                </div>
            </form>
        </ModalFrame>
    }
}
