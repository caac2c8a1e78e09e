use leptos::prelude::*;

use crate::components::ModalFrame;
use crate::console;
use crate::models::rfq::RfqKind;

fn kind_description(kind: RfqKind) -> &'static str {
    match kind {
        RfqKind::Product => "Request quotes for physical goods and materials",
        RfqKind::Services => "Request quotes for professional or recurring services",
        RfqKind::Projects => "Request proposals for milestone-based projects",
    }
}

/// Asks what kind of RFQ to create.
#[component]
pub fn CreateRfqModal(
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_select: Callback<RfqKind>,
) -> impl IntoView {
    let choose = move |kind: RfqKind| {
        console::info(&format!("Creating RFQ for: {}", kind.label()));
        on_select.run(kind);
        on_close.run(());
    };

    view! {
        <ModalFrame title="Create New RFQ" icon="➕" on_close=on_close>
            <p class="modal__lead">"What would you like to source?"</p>
            <div class="option-list">
                {RfqKind::ALL
                    .into_iter()
                    .map(|kind| {
                        view! {
                            <button type="button" class="option-card" on:click=move |_| choose(kind)>
                                <span class="option-card__icon">{kind.icon()}</span>
                                <span class="option-card__text">
                                    <span class="option-card__title">{kind.label()}</span>
                                    <span class="option-card__description">
                                        {kind_description(kind)}
                                    </span>
                                </span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </ModalFrame>
    }
}
