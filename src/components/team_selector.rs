use leptos::prelude::*;

use crate::components::ModalFrame;
use crate::models::team::{initials, team_member_names, TeamSelection};

/// Checkbox list for assigning team members to a record.
#[component]
pub fn TeamSelector(
    #[prop(into)] selected: Vec<String>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_save: Callback<Vec<String>>,
) -> impl IntoView {
    let selection = RwSignal::new(TeamSelection::new(&selected));

    let rows = team_member_names()
        .into_iter()
        .map(|member| {
            let avatar = initials(&member);
            let checked = {
                let member = member.clone();
                move || selection.with(|s| s.contains(&member))
            };
            let toggle = {
                let member = member.clone();
                move |_: leptos::ev::Event| selection.update(|s| s.toggle(&member))
            };
            view! {
                <label class="member-row">
                    <input type="checkbox" prop:checked=checked on:change=toggle />
                    <span class="avatar">{avatar}</span>
                    <span class="member-row__name">{member}</span>
                </label>
            }
        })
        .collect_view();

    view! {
        <ModalFrame title="Select Team" icon="👥" on_close=on_close>
            <div class="member-list">{rows}</div>
            <div class="modal__footer">
                <span class="modal__hint">
                    {move || format!("{} selected", selection.with(|s| s.members().len()))}
                </span>
                <button type="button" class="button button--secondary" on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
                <button
                    type="button"
                    class="button button--primary"
                    on:click=move |_| on_save.run(selection.get_untracked().into_members())
                >
                    "Save Team"
                </button>
            </div>
        </ModalFrame>
    }
}
