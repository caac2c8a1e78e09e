use leptos::prelude::*;

use crate::components::{CreateRfqModal, PageHeader, SupplierSearchModal};
use crate::console;
use crate::models::calendar::{display_date, iso_date, parse_iso_date};
use crate::models::dashboard::{dashboard_alerts, latest_quotations, top_suppliers, DateRange, KPIS};
use crate::models::rfq::RfqKind;
use crate::models::supplier::SupplierDraft;
use crate::models::{AppState, View};

#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState context missing");
    let range = RwSignal::new(DateRange::default());
    let create_open = RwSignal::new(false);
    let find_open = RwSignal::new(false);

    let on_kind = move |kind: RfqKind| {
        console::log("Dashboard create RFQ", &kind);
        state.navigate(View::RfqList);
    };
    let on_supplier = move |draft: SupplierDraft| {
        state.show_banner(format!("{} added to your suppliers", draft.contact.name));
    };

    let kpis = KPIS
        .iter()
        .map(|kpi| {
            view! {
                <div class=format!("kpi kpi--{}", kpi.accent)>
                    <span class="kpi__label">{kpi.label}</span>
                    <span class="kpi__value">{kpi.value}</span>
                </div>
            }
        })
        .collect_view();

    let suppliers = top_suppliers()
        .into_iter()
        .map(|s| {
            view! {
                <li class="summary-row">
                    <span class="summary-row__title">
                        {s.name}
                        {s.favorite.then_some(" ★")}
                    </span>
                    <span class="summary-row__meta">{format!("{} • {}", s.kind, s.location)}</span>
                    <span class=s.standing.badge_class()>{s.standing.label()}</span>
                </li>
            }
        })
        .collect_view();

    let quotations = latest_quotations()
        .into_iter()
        .map(|q| {
            view! {
                <li class="summary-row">
                    <span class="summary-row__title">{q.display_title().to_string()}</span>
                    <span class="summary-row__meta">
                        {format!("{} • {} • {}", q.supplier, q.value, display_date(q.date))}
                    </span>
                    <span class=q.badge_class>{q.status}</span>
                </li>
            }
        })
        .collect_view();

    let alerts = dashboard_alerts()
        .into_iter()
        .map(|a| {
            view! {
                <li class=a.tone.class()>
                    <span class="alert__icon">{a.tone.icon()}</span>
                    <span class="alert__message">{a.message}</span>
                    <span class="alert__time">{a.time}</span>
                    {a.unread.then(|| view! { <span class="unread-dot"></span> })}
                </li>
            }
        })
        .collect_view();

    view! {
        <section class="dashboard">
            <PageHeader title="Dashboard" subtitle="Overview of your procurement activity" icon="🏠">
                <button type="button" class="button button--secondary" on:click=move |_| find_open.set(true)>
                    "🔍 Find Suppliers"
                </button>
                <button type="button" class="button button--primary" on:click=move |_| create_open.set(true)>
                    "➕ Create RFQ"
                </button>
            </PageHeader>

            <div class="date-range">
                <label class="form__field">
                    <span class="form__label">"From"</span>
                    <input
                        type="date"
                        class="input"
                        prop:value=move || iso_date(range.get().from)
                        on:change=move |ev| {
                            if let Some(date) = parse_iso_date(&event_target_value(&ev)) {
                                range.update(|r| r.from = date);
                            }
                        }
                    />
                </label>
                <label class="form__field">
                    <span class="form__label">"To"</span>
                    <input
                        type="date"
                        class="input"
                        prop:value=move || iso_date(range.get().to)
                        on:change=move |ev| {
                            if let Some(date) = parse_iso_date(&event_target_value(&ev)) {
                                range.update(|r| r.to = date);
                            }
                        }
                    />
                </label>
            </div>

            <div class="kpi-grid">{kpis}</div>

            <div class="dashboard__columns">
                <div class="card">
                    <h2 class="card__title">"Top Suppliers"</h2>
                    <ul class="summary-list">{suppliers}</ul>
                </div>
                <div class="card">
                    <h2 class="card__title">"Latest Quotations"</h2>
                    <ul class="summary-list">{quotations}</ul>
                </div>
                <div class="card">
                    <h2 class="card__title">"Alerts"</h2>
                    <ul class="alert-list">{alerts}</ul>
                </div>
            </div>

            <Show when=move || create_open.get()>
                <CreateRfqModal on_close=move || create_open.set(false) on_select=Callback::new(on_kind) />
            </Show>
            <Show when=move || find_open.get()>
                <SupplierSearchModal on_close=move || find_open.set(false) on_save=Callback::new(on_supplier) />
            </Show>
        </section>
    }
}
