use leptos::prelude::*;

use crate::models::task::JobAction;

/// Overflow menu for a task row. Clicking outside closes it.
#[component]
pub fn JobActionsMenu(
    closed_job: bool,
    #[prop(into)] on_action: Callback<JobAction>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="menu-backdrop" on:click=move |_| on_close.run(())></div>
        <div class="menu" role="menu">
            {JobAction::for_job(closed_job)
                .into_iter()
                .map(|action| {
                    view! {
                        <button
                            type="button"
                            class="menu__item"
                            role="menuitem"
                            on:click=move |_| {
                                on_action.run(action);
                                on_close.run(());
                            }
                        >
                            <span class="menu__icon">{action.icon()}</span>
                            {action.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
