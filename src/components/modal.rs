use leptos::prelude::*;

/// Backdrop plus dialog chrome shared by every modal.
#[component]
pub fn ModalFrame(
    title: &'static str,
    icon: &'static str,
    #[prop(into)] on_close: Callback<()>,
    #[prop(optional)] wide: bool,
    children: Children,
) -> impl IntoView {
    let dialog_class = if wide { "modal modal--wide" } else { "modal" };
    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div
                class=dialog_class
                role="dialog"
                aria-modal="true"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="modal__header">
                    <h3 class="modal__title">
                        <span class="modal__icon">{icon}</span>
                        {title}
                    </h3>
                    <button type="button" class="icon-button" aria-label="Close" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </div>
                <div class="modal__body">{children()}</div>
            </div>
        </div>
    }
}
