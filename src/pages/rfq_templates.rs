use leptos::prelude::*;

use crate::clock;
use crate::components::{EmptyState, ListToolbar, PageHeader};
use crate::console;
use crate::models::template::{empty_state_hint, sample_templates, use_template, TEMPLATE_FILTERS};
use crate::models::{AppState, ListState};

#[component]
pub fn RfqTemplates() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState context missing");
    let templates = RwSignal::new(sample_templates());
    let list = ListState::new();

    let visible = Memo::new(move |_| templates.with(|all| list.apply(all)));

    let apply_template = move |id: String| {
        let today = clock::today();
        let mut used = None;
        templates.update(|all| used = use_template(all, &id, today));
        if let Some(template) = used {
            console::log("Using template", &template);
            state.show_banner(template.used_message());
        }
    };

    let cards = move || {
        visible
            .get()
            .into_iter()
            .map(|template| {
                let id = template.id.clone();
                let last_used = template.last_used_label();
                view! {
                    <article class="card template-card">
                        <div class="template-card__heading">
                            <span class="template-card__icon">{template.kind.icon()}</span>
                            <h3 class="template-card__title">{template.name.clone()}</h3>
                            <span class="badge badge--gray">{template.kind.label()}</span>
                        </div>
                        <p class="template-card__description">{template.description.clone()}</p>
                        <div class="list-row__meta">
                            <span>{format!("{} sections", template.sections)}</span>
                            <span>{format!("Used {} times", template.usage_count)}</span>
                            <span>{last_used}</span>
                        </div>
                        <button
                            type="button"
                            class="button button--primary"
                            on:click=move |_| apply_template(id.clone())
                        >
                            "Use Template"
                        </button>
                    </article>
                }
            })
            .collect_view()
    };

    view! {
        <section class="rfq-templates">
            <PageHeader
                title="RFQ Templates"
                subtitle="Start new RFQs from proven templates"
                icon="📋"
            />
            <ListToolbar
                query=list.query
                filter=list.filter
                placeholder="Search templates..."
                keys=TEMPLATE_FILTERS.to_vec()
            />
            <div class="card-grid">{cards}</div>
            {move || {
                visible.with(Vec::is_empty).then(|| {
                    view! {
                        <EmptyState
                            icon="📋"
                            title="No templates found"
                            hint=empty_state_hint(list.has_query())
                        />
                    }
                })
            }}
        </section>
    }
}
