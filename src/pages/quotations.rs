use leptos::prelude::*;

use crate::clock;
use crate::components::{ApprovalModal, EmptyState, PageHeader, SearchBar};
use crate::console;
use crate::models::calendar::{display_date, relative_time};
use crate::models::quotation::{
    empty_state_hint, sample_quotations, send_for_approval, visible_quotations, ApprovalRequestForm,
    Quotation, QuotationFilters, QuotationTab, QuoteStatus,
};
use crate::models::AppState;

type FilterGet = fn(&QuotationFilters) -> String;
type FilterSet = fn(&mut QuotationFilters, String);

const APPROVAL_SENT: &str = "Approval request sent successfully!";

#[component]
pub fn Quotations() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState context missing");
    let quotes = RwSignal::new(sample_quotations());
    let tab = RwSignal::new(QuotationTab::default());
    let query = RwSignal::new(String::new());
    let filters = RwSignal::new(QuotationFilters::default());
    let filters_open = RwSignal::new(false);
    let approving = RwSignal::new(None::<Quotation>);

    let visible = Memo::new(move |_| {
        let text = query.get();
        filters.with(|f| quotes.with(|all| visible_quotations(all, tab.get(), &text, f)))
    });

    let submit_approval = move |form: ApprovalRequestForm| {
        let Some(quote) = approving.get_untracked() else {
            return;
        };
        quotes.update(|all| {
            send_for_approval(all, &quote.id, &form, clock::now());
        });
        console::log(&format!("Approval requested for {}", quote.rfq_number), &form);
        approving.set(None);
        state.show_banner(APPROVAL_SENT);
    };

    let tabs = QuotationTab::ALL
        .into_iter()
        .map(|t| {
            let class = move || if tab.get() == t { "tab tab--active" } else { "tab" };
            view! {
                <button type="button" class=class on:click=move |_| tab.set(t)>
                    {t.label()}
                    <span class="tab__count">{move || quotes.with(|all| t.count(all))}</span>
                </button>
            }
        })
        .collect_view();

    let rows = move || {
        let current_tab = tab.get();
        visible
            .get()
            .into_iter()
            .map(|quote| {
                let can_send = quote.can_send_for_approval(current_tab);
                let approval = quote.approval.clone().map(|approval| {
                    let sent = approval
                        .timestamp
                        .map(|ts| relative_time(ts, clock::now()))
                        .unwrap_or_default();
                    let approver = approval
                        .approver_name
                        .or(approval.approver_email)
                        .unwrap_or_default();
                    view! {
                        <div class="approval-line">
                            <span class=approval.status.approval_badge_class()>
                                {approval.status.icon()} " " {approval.status.approval_label()}
                            </span>
                            <span class="list-row__meta">{format!("{approver} • {sent}")}</span>
                            {approval
                                .comments
                                .map(|c| view! { <p class="approval-line__comments">{c}</p> })}
                        </div>
                    }
                });
                let for_modal = quote.clone();
                view! {
                    <article class="list-row">
                        <div class="list-row__main">
                            <div class="list-row__heading">
                                <span class="badge badge--blue">{quote.rfq_number.clone()}</span>
                                <h3 class="list-row__title">{quote.rfq_title.clone()}</h3>
                                <span class=quote.status.badge_class()>{quote.status.label()}</span>
                            </div>
                            <div class="list-row__meta">
                                <span>"🏢 " {quote.supplier.clone()}</span>
                                <span class="list-row__value">{quote.amount.clone()}</span>
                                <span>"Submitted " {display_date(quote.submitted)}</span>
                            </div>
                            <div class="list-row__meta">
                                <span>{quote.details.category.clone()}</span>
                                <span>"Deadline " {display_date(quote.details.deadline)}</span>
                            </div>
                            <p class="list-row__description">{quote.details.description.clone()}</p>
                            {approval}
                        </div>
                        <div class="list-row__actions">
                            {can_send
                                .then(|| {
                                    view! {
                                        <button
                                            type="button"
                                            class="button button--primary button--small"
                                            on:click=move |_| approving.set(Some(for_modal.clone()))
                                        >
                                            "📨 Send for Approval"
                                        </button>
                                    }
                                })}
                        </div>
                    </article>
                }
            })
            .collect_view()
    };

    let select = move |label: &'static str, current: FilterGet, apply: FilterSet, approval: bool| {
        view! {
            <label class="form__field">
                <span class="form__label">{label}</span>
                <select
                    class="input"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        filters.update(|f| apply(f, value));
                    }
                >
                    <option value="" prop:selected=move || filters.with(|f| current(f).is_empty())>"All"</option>
                    {QuoteStatus::ALL
                        .into_iter()
                        .map(|status| {
                            let text = if approval { status.approval_label() } else { status.label() };
                            view! {
                                <option
                                    value=status.key()
                                    prop:selected=move || filters.with(|f| current(f) == status.key())
                                >
                                    {text}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
        }
    };

    let date_input = move |label: &'static str, current: FilterGet, apply: FilterSet| {
        view! {
            <label class="form__field">
                <span class="form__label">{label}</span>
                <input
                    type="date"
                    class="input"
                    prop:value=move || filters.with(current)
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        filters.update(|f| apply(f, value));
                    }
                />
            </label>
        }
    };

    view! {
        <section class="quotations">
            <PageHeader
                title="Quotations"
                subtitle="Review supplier quotations and route them for approval"
                icon="💰"
            />

            <div class="tabs">{tabs}</div>

            <div class="list-toolbar">
                <SearchBar query=query placeholder="Search by RFQ title, number or supplier..." />
                <button
                    type="button"
                    class=move || {
                        if filters.with(QuotationFilters::is_active) {
                            "button button--secondary button--active"
                        } else {
                            "button button--secondary"
                        }
                    }
                    on:click=move |_| filters_open.update(|open| *open = !*open)
                >
                    "⚙ Filters"
                </button>
            </div>

            <Show when=move || filters_open.get()>
                <div class="filter-panel">
                    {date_input("From Date", |f| f.date_from.clone(), |f, v| f.date_from = v)}
                    {date_input("To Date", |f| f.date_to.clone(), |f, v| f.date_to = v)}
                    {select("Status", |f| f.status.clone(), |f, v| f.status = v, false)}
                    {select(
                        "Approval Status",
                        |f| f.approval_status.clone(),
                        |f, v| f.approval_status = v,
                        true,
                    )}
                    <Show when=move || filters.with(QuotationFilters::is_active)>
                        <button
                            type="button"
                            class="link-button"
                            on:click=move |_| filters.set(QuotationFilters::default())
                        >
                            "Clear all filters"
                        </button>
                    </Show>
                </div>
            </Show>

            <div class="list">{rows}</div>

            {move || {
                visible.with(Vec::is_empty).then(|| {
                    let searching = query.with(|q| !q.trim().is_empty())
                        || filters.with(QuotationFilters::is_active);
                    view! {
                        <EmptyState
                            icon="💰"
                            title="No quotations found"
                            hint=empty_state_hint(tab.get(), searching)
                        />
                    }
                })
            }}

            {move || {
                approving
                    .get()
                    .map(|quote| {
                        view! {
                            <ApprovalModal
                                quote=quote
                                on_close=move || approving.set(None)
                                on_submit=Callback::new(submit_approval)
                            />
                        }
                    })
            }}
        </section>
    }
}
