use leptos::prelude::*;
use leptos::tachys::dom::window;
use wasm_bindgen::JsCast;

use crate::models::AppState;

/// How long a banner stays up.
const DISMISS_AFTER_MS: i32 = 3000;

/// Transient success message in the top-right corner.
#[component]
pub fn SuccessBanner() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState context missing");

    let pending_dismissal = std::rc::Rc::new(std::cell::Cell::new(None::<i32>));

    Effect::new({
        let pending_dismissal = std::rc::Rc::clone(&pending_dismissal);
        move |_| {
            // A new banner restarts the countdown
            if let Some(handle) = pending_dismissal.take() {
                window().clear_timeout_with_handle(handle);
            }

            if state.banner.get().is_some() {
                let dismiss: wasm_bindgen::prelude::Closure<dyn FnMut()> =
                    wasm_bindgen::closure::Closure::new(move || {
                        state.clear_banner();
                    });

                if let Ok(handle) = window().set_timeout_with_callback_and_timeout_and_arguments_0(
                    dismiss.as_ref().unchecked_ref(),
                    DISMISS_AFTER_MS,
                ) {
                    pending_dismissal.set(Some(handle));
                    dismiss.forget();
                }
            }
        }
    });

    view! {
        <Show when=move || state.banner.get().is_some()>
            <div class="success-banner" role="status">
                <span class="success-banner__icon">"✔"</span>
                <span class="success-banner__text">
                    {move || state.banner.get().unwrap_or_default()}
                </span>
            </div>
        </Show>
    }
}
