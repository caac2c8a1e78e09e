use leptos::prelude::*;

use crate::clock;
use crate::components::{CountBadge, EmptyState, ListToolbar, PageHeader};
use crate::console;
use crate::models::calendar::relative_time;
use crate::models::message::{
    empty_state_hint, mark_read, sample_messages, unread_count, INBOX_FILTERS,
};
use crate::models::ListState;

#[component]
pub fn Inbox() -> impl IntoView {
    let messages = RwSignal::new(sample_messages());
    let list = ListState::new();
    let opened = RwSignal::new(None::<String>);

    let visible = Memo::new(move |_| messages.with(|all| list.apply(all)));
    let unread = Signal::derive(move || messages.with(|all| unread_count(all)));

    let open = move |id: String| {
        messages.update(|all| {
            mark_read(all, &id);
        });
        console::info(&format!("Opened message {id}"));
        opened.update(|current| {
            *current = if current.as_deref() == Some(id.as_str()) { None } else { Some(id) };
        });
    };

    let rows = move || {
        let now = clock::now();
        visible
            .get()
            .into_iter()
            .map(|message| {
                let id = message.id.clone();
                let is_open = {
                    let id = message.id.clone();
                    move || opened.with(|o| o.as_deref() == Some(id.as_str()))
                };
                let class = if message.read {
                    "message-row"
                } else {
                    "message-row message-row--unread"
                };
                let received = message
                    .received_at
                    .map(|at| relative_time(at, now))
                    .unwrap_or_default();
                let preview = message.preview.clone();
                view! {
                    <article class=class on:click=move |_| open(id.clone())>
                        <span class=message.channel.icon_class()>{message.channel.icon()}</span>
                        <div class="message-row__main">
                            <div class="list-row__heading">
                                <span class="message-row__from">{message.from.clone()}</span>
                                {message
                                    .forwarded
                                    .then(|| view! { <span class="badge badge--purple">"Forwarded"</span> })}
                                <span class=message.priority.badge_class()>{message.priority.label()}</span>
                                <span class="message-row__time">{received}</span>
                            </div>
                            <h3 class="message-row__subject">{message.subject.clone()}</h3>
                            <p class=move || {
                                if is_open() { "message-row__body" } else { "message-row__preview" }
                            }>{preview}</p>
                            {message
                                .attachments
                                .map(|n| view! { <span class="message-row__meta">{format!("📎 {n} attachment(s)")}</span> })}
                        </div>
                        {(!message.read).then(|| view! { <span class="unread-dot"></span> })}
                    </article>
                }
            })
            .collect_view()
    };

    view! {
        <section class="inbox">
            <PageHeader title="Inbox" subtitle="Forwarded supplier emails and WhatsApp messages" icon="📥">
                <CountBadge count=unread suffix=" unread" />
            </PageHeader>
            <ListToolbar
                query=list.query
                filter=list.filter
                placeholder="Search messages..."
                keys=INBOX_FILTERS.to_vec()
            />
            <div class="list">{rows}</div>
            {move || {
                visible.with(Vec::is_empty).then(|| {
                    view! {
                        <EmptyState
                            icon="📥"
                            title="No messages found"
                            hint=empty_state_hint(list.has_query())
                        />
                    }
                })
            }}
        </section>
    }
}
