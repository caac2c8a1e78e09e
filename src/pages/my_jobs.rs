use leptos::prelude::*;

use crate::clock;
use crate::components::{EmptyState, JobActionsMenu, ListToolbar, PageHeader, SubtaskForm};
use crate::console;
use crate::models::calendar::display_date;
use crate::models::listing::update_by_id;
use crate::models::task::{
    apply_job_action, empty_state_hint, sample_tasks, JobAction, Subtask, Task, TASK_FILTERS,
};
use crate::models::ListState;

#[component]
pub fn MyJobs() -> impl IntoView {
    let tasks = RwSignal::new(sample_tasks());
    let list = ListState::new();
    let adding_task = RwSignal::new(false);
    let subtask_for = RwSignal::new(None::<String>);
    let menu_for = RwSignal::new(None::<String>);

    let visible = Memo::new(move |_| tasks.with(|all| list.apply(all)));

    let add_task = move |draft: Subtask| {
        let task = Task::from_draft(clock::fresh_id(), draft, clock::today());
        console::log("Task created", &task);
        tasks.update(|all| all.push(task));
        adding_task.set(false);
    };

    let add_subtask = move |draft: Subtask| {
        let Some(id) = subtask_for.get_untracked() else {
            return;
        };
        console::log(&format!("Subtask added to {id}"), &draft);
        tasks.update(|all| {
            update_by_id(all, &id, |t| t.subtasks.push(draft));
        });
        subtask_for.set(None);
    };

    let run_action = move |id: String, action: JobAction| {
        if action == JobAction::Edit {
            let task = tasks.with_untracked(|all| all.iter().find(|t| t.id == id).cloned());
            if let Some(task) = task {
                console::log("Edit task", &task);
            }
            return;
        }
        tasks.update(|all| apply_job_action(all, &id, action, &clock::fresh_id()));
        console::info(&format!("{} applied to task {id}", action.label()));
    };

    let rows = move || {
        visible
            .get()
            .into_iter()
            .map(|task| {
                let closed = task.is_closed();
                let (subtask_id, menu_id, action_id) =
                    (task.id.clone(), task.id.clone(), task.id.clone());
                let menu_open = {
                    let id = task.id.clone();
                    move || menu_for.with(|open| open.as_deref() == Some(id.as_str()))
                };
                let subtasks = task
                    .subtasks
                    .iter()
                    .map(|sub| {
                        let team = if sub.assigned_team.is_empty() {
                            "Unassigned".to_string()
                        } else {
                            sub.assigned_team.join(", ")
                        };
                        let due = sub.due.map(|d| format!("Due {}", display_date(d)));
                        view! {
                            <li class="subtask">
                                <span class="subtask__title">{sub.title.clone()}</span>
                                <span class="subtask__meta">"👥 " {team}</span>
                                {due.map(|d| view! { <span class="subtask__meta">{d}</span> })}
                            </li>
                        }
                    })
                    .collect_view();
                view! {
                    <article class="list-row">
                        <div class="list-row__main">
                            <div class="list-row__heading">
                                <h3 class="list-row__title">{task.title.clone()}</h3>
                                <span class=task.priority.badge_class()>{task.priority.label()}</span>
                                <span class=task.status.badge_class()>{task.status.label()}</span>
                            </div>
                            <p class="list-row__description">{task.description.clone()}</p>
                            <div class="list-row__meta">
                                <span>"👤 " {task.assignee.clone()}</span>
                                <span>"📅 Due " {display_date(task.due)}</span>
                                <span>{task.category.clone()}</span>
                            </div>
                            <ul class="subtask-list">{subtasks}</ul>
                        </div>
                        <div class="list-row__actions">
                            <button
                                type="button"
                                class="button button--secondary button--small"
                                on:click=move |_| subtask_for.set(Some(subtask_id.clone()))
                            >
                                "➕ Add subtask"
                            </button>
                            <div class="menu-anchor">
                                <button
                                    type="button"
                                    class="icon-button"
                                    title="More actions"
                                    on:click=move |_| menu_for.set(Some(menu_id.clone()))
                                >
                                    "⋯"
                                </button>
                                <Show when=menu_open.clone()>
                                    <JobActionsMenu
                                        closed_job=closed
                                        on_action={
                                            let id = action_id.clone();
                                            Callback::new(move |action: JobAction| run_action(id.clone(), action))
                                        }
                                        on_close=move || menu_for.set(None)
                                    />
                                </Show>
                            </div>
                        </div>
                    </article>
                }
            })
            .collect_view()
    };

    view! {
        <section class="my-jobs">
            <PageHeader title="My Tasks" subtitle="Work assigned to you and your team" icon="✅">
                <button type="button" class="button button--primary" on:click=move |_| adding_task.set(true)>
                    "➕ Add Task"
                </button>
            </PageHeader>
            <ListToolbar
                query=list.query
                filter=list.filter
                placeholder="Search tasks..."
                keys=TASK_FILTERS.to_vec()
            />
            <div class="list">{rows}</div>
            {move || {
                visible.with(Vec::is_empty).then(|| {
                    view! {
                        <EmptyState
                            icon="✅"
                            title="No tasks found"
                            hint=empty_state_hint(list.has_query())
                        />
                    }
                })
            }}

            <Show when=move || adding_task.get()>
                <SubtaskForm heading="Add Task" on_close=move || adding_task.set(false) on_save=Callback::new(add_task) />
            </Show>
            <Show when=move || subtask_for.with(Option::is_some)>
                <SubtaskForm
                    heading="Add Subtask"
                    on_close=move || subtask_for.set(None)
                    on_save=Callback::new(add_subtask)
                />
            </Show>
        </section>
    }
}
