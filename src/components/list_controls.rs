use leptos::prelude::*;

use crate::models::listing::chip_label;

/// Page title block with an optional action area on the right.
#[component]
pub fn PageHeader(
    title: &'static str,
    subtitle: &'static str,
    icon: &'static str,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <header class="page-header">
            <div class="page-header__text">
                <h1 class="page-header__title">
                    <span class="page-header__icon">{icon}</span>
                    {title}
                </h1>
                <p class="page-header__subtitle">{subtitle}</p>
            </div>
            <div class="page-header__actions">{children.map(|c| c())}</div>
        </header>
    }
}

/// Free-text search box bound to a page's query signal.
#[component]
pub fn SearchBar(query: RwSignal<String>, placeholder: &'static str) -> impl IntoView {
    view! {
        <label class="search-bar">
            <span class="search-bar__icon">"🔍"</span>
            <input
                type="search"
                class="search-bar__input"
                placeholder=placeholder
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
        </label>
    }
}

/// One chip per filter key; the active key is highlighted.
#[component]
pub fn FilterChips(
    filter: RwSignal<String>,
    #[prop(into)] keys: Vec<&'static str>,
) -> impl IntoView {
    keys.into_iter()
        .map(|key| {
            let class = move || {
                if filter.with(|f| f == key) {
                    "chip chip--active"
                } else {
                    "chip"
                }
            };
            view! {
                <button type="button" class=class on:click=move |_| filter.set(key.to_string())>
                    {chip_label(key)}
                </button>
            }
        })
        .collect_view()
}

/// Search box and chips in one toolbar row.
#[component]
pub fn ListToolbar(
    query: RwSignal<String>,
    filter: RwSignal<String>,
    placeholder: &'static str,
    #[prop(into)] keys: Vec<&'static str>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="list-toolbar">
            <SearchBar query=query placeholder=placeholder />
            <div class="list-toolbar__chips">
                <FilterChips filter=filter keys=keys />
            </div>
            {children.map(|c| c())}
        </div>
    }
}

/// Shown in place of an empty result list.
#[component]
pub fn EmptyState(
    icon: &'static str,
    title: &'static str,
    #[prop(into)] hint: String,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state__icon">{icon}</div>
            <h3 class="empty-state__title">{title}</h3>
            <p class="empty-state__hint">{hint}</p>
        </div>
    }
}

/// Small pill with a count; hidden at zero.
#[component]
pub fn CountBadge(
    #[prop(into)] count: Signal<usize>,
    #[prop(optional)] suffix: &'static str,
) -> impl IntoView {
    view! {
        <Show when=move || { count.get() > 0 }>
            <span class="count-badge">{move || format!("{}{suffix}", count.get())}</span>
        </Show>
    }
}
