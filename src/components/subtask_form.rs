use leptos::prelude::*;

use crate::components::ModalFrame;
use crate::console;
use crate::models::task::{Subtask, SubtaskForm as SubtaskDraft};
use crate::models::team::team_member_names;

/// Title, team and due date for a new task or subtask.
///
/// Submitting without a title does nothing; the form resets after save and on close.
#[component]
pub fn SubtaskForm(
    heading: &'static str,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_save: Callback<Subtask>,
) -> impl IntoView {
    let form = RwSignal::new(SubtaskDraft::default());
    let team_open = RwSignal::new(false);

    let reset = move || {
        form.set(SubtaskDraft::default());
        team_open.set(false);
    };

    let close = move || {
        reset();
        on_close.run(());
    };

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.with_untracked(SubtaskDraft::submit) {
            Ok(subtask) => {
                on_save.run(subtask);
                reset();
            }
            Err(e) => console::debug("Subtask not saved", &e),
        }
    };

    let team_options = move || {
        team_member_names()
            .into_iter()
            .map(|member| {
                let checked = {
                    let member = member.clone();
                    move || form.with(|f| f.assigned_team.contains(&member))
                };
                let toggle = {
                    let member = member.clone();
                    move |_: leptos::ev::Event| form.update(|f| f.toggle_member(&member))
                };
                view! {
                    <label class="dropdown__option">
                        <input type="checkbox" prop:checked=checked on:change=toggle />
                        <span>{member}</span>
                    </label>
                }
            })
            .collect_view()
    };

    let chips = move || {
        form.with(|f| f.assigned_team.clone())
            .into_iter()
            .map(|member| {
                let remove = {
                    let member = member.clone();
                    move |_: leptos::ev::MouseEvent| form.update(|f| f.toggle_member(&member))
                };
                view! {
                    <span class="chip chip--removable">
                        {member}
                        <button type="button" class="chip__remove" on:click=remove>"✕"</button>
                    </span>
                }
            })
            .collect_view()
    };

    view! {
        <ModalFrame title=heading icon="📝" on_close=Callback::new(move |()| close())>
            <form class="form" on:submit=submit>
                <label class="form__field">
                    <span class="form__label">"Title *"</span>
                    <input
                        type="text"
                        class="input"
                        placeholder="Enter subtask title"
                        prop:value=move || form.with(|f| f.title.clone())
                        on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                    />
                </label>

                <div class="form__field">
                    <span class="form__label">"Assign Team"</span>
                    <button type="button" class="dropdown__toggle" on:click=move |_| team_open.update(|o| *o = !*o)>
                        {move || form.with(SubtaskDraft::team_summary)}
                    </button>
                    <Show when=move || team_open.get()>
                        <div class="dropdown__menu">{team_options}</div>
                    </Show>
                    <div class="chip-row">{chips}</div>
                </div>

                <label class="form__field">
                    <span class="form__label">"Due Date"</span>
                    <input
                        type="date"
                        class="input"
                        prop:value=move || form.with(|f| f.due_date.clone())
                        on:input=move |ev| form.update(|f| f.due_date = event_target_value(&ev))
                    />
                </label>

                <div class="modal__footer">
                    <button type="button" class="button button--secondary" on:click=move |_| close()>
                        "Cancel"
                    </button>
                    <button type="submit" class="button button--primary">"Save"</button>
                </div>
            </form>
        </ModalFrame>
    }
}
