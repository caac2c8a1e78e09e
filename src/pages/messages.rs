use leptos::prelude::*;

use crate::clock;
use crate::components::{CountBadge, EmptyState, ListToolbar, PageHeader};
use crate::console;
use crate::models::chat::{sample_threads, select_thread, send_message, total_unread, CHAT_FILTERS};
use crate::models::team::initials;
use crate::models::ListState;

#[component]
pub fn Messages() -> impl IntoView {
    let threads = RwSignal::new(sample_threads());
    let list = ListState::new();
    let active = RwSignal::new(None::<String>);
    let draft = RwSignal::new(String::new());

    let visible = Memo::new(move |_| threads.with(|all| list.apply(all)));
    let unread = Signal::derive(move || threads.with(|all| total_unread(all) as usize));

    let select = move |id: String| {
        threads.update(|all| {
            select_thread(all, &id);
        });
        draft.set(String::new());
        active.set(Some(id));
    };

    let send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = active.get_untracked() else {
            return;
        };
        let text = draft.get_untracked();
        let mut outcome = Ok(false);
        threads.update(|all| outcome = send_message(all, &id, &text, &clock::clock_time()));
        match outcome {
            Ok(true) => {
                console::info(&format!("Message sent to thread {id}"));
                draft.set(String::new());
            }
            Ok(false) => console::warn(&format!("Thread {id} no longer exists")),
            Err(e) => console::debug("Message not sent", &e),
        }
    };

    let thread_list = move || {
        visible
            .get()
            .into_iter()
            .map(|thread| {
                let id = thread.id.clone();
                let class = {
                    let id = thread.id.clone();
                    move || {
                        if active.with(|a| a.as_deref() == Some(id.as_str())) {
                            "thread-row thread-row--active"
                        } else {
                            "thread-row"
                        }
                    }
                };
                let preview = thread.preview();
                view! {
                    <button type="button" class=class on:click=move |_| select(id.clone())>
                        <span class="avatar">{initials(&thread.title)}</span>
                        <span class="thread-row__text">
                            <span class="thread-row__title">{thread.title.clone()}</span>
                            <span class="thread-row__preview">{preview}</span>
                        </span>
                        {(thread.unread > 0)
                            .then(|| view! { <span class="count-badge">{thread.unread}</span> })}
                    </button>
                }
            })
            .collect_view()
    };

    let conversation = move || {
        let current = active
            .get()
            .and_then(|id| threads.with(|all| all.iter().find(|t| t.id == id).cloned()));
        let Some(thread) = current else {
            return view! {
                <div class="conversation conversation--empty">
                    <p class="empty-state__hint">"Select a conversation to start messaging"</p>
                </div>
            }
            .into_any();
        };
        let bubbles = thread
            .messages
            .iter()
            .map(|message| {
                let class = if message.is_own() { "bubble bubble--own" } else { "bubble" };
                view! {
                    <div class=class>
                        <span class="bubble__author">{message.author.clone()}</span>
                        <p class="bubble__body">{message.body.clone()}</p>
                        <span class="bubble__time">{message.time.clone()}</span>
                    </div>
                }
            })
            .collect_view();
        view! {
            <div class="conversation">
                <div class="conversation__header">
                    <h3>{thread.title.clone()}</h3>
                    <span class="conversation__participants">{thread.participants.join(", ")}</span>
                </div>
                <div class="conversation__messages">{bubbles}</div>
                <form class="conversation__composer" on:submit=send>
                    <input
                        type="text"
                        class="input"
                        placeholder="Type a message..."
                        prop:value=move || draft.get()
                        on:input=move |ev| draft.set(event_target_value(&ev))
                    />
                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || draft.with(|d| d.trim().is_empty())
                    >
                        "Send"
                    </button>
                </form>
            </div>
        }
        .into_any()
    };

    view! {
        <section class="messages">
            <PageHeader title="Messages" subtitle="Chat with your team" icon="💬">
                <CountBadge count=unread suffix=" unread" />
            </PageHeader>
            <div class="messages__layout">
                <div class="messages__threads">
                    <ListToolbar
                        query=list.query
                        filter=list.filter
                        placeholder="Search conversations..."
                        keys=CHAT_FILTERS.to_vec()
                    />
                    {thread_list}
                    {move || {
                        visible.with(Vec::is_empty).then(|| {
                            let hint = if list.has_query() {
                                "Try adjusting your search"
                            } else {
                                "No conversations yet"
                            };
                            view! { <EmptyState icon="💬" title="No conversations" hint=hint /> }
                        })
                    }}
                </div>
                {conversation}
            </div>
        </section>
    }
}
