use chrono::NaiveDate;
use leptos::prelude::*;

use crate::components::ModalFrame;
use crate::models::calendar::{iso_date, month_grid, MonthCursor, WEEKDAY_HEADERS};

/// Month calendar for picking a deadline. Days before `today` cannot be picked.
#[component]
pub fn DatePicker(
    today: NaiveDate,
    #[prop(optional)] selected: Option<NaiveDate>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_save: Callback<String>,
) -> impl IntoView {
    let cursor = RwSignal::new(MonthCursor::containing(selected.unwrap_or(today)));

    let blanks = move || {
        (0..cursor.get().leading_blanks())
            .map(|_| view! { <span class="calendar__blank"></span> })
            .collect_view()
    };

    let days = move || {
        month_grid(cursor.get(), today, selected)
            .into_iter()
            .map(|cell| {
                let mut class = String::from("calendar__day");
                if cell.selected {
                    class.push_str(" calendar__day--selected");
                }
                if cell.disabled {
                    class.push_str(" calendar__day--disabled");
                }
                view! {
                    <button
                        type="button"
                        class=class
                        disabled=cell.disabled
                        on:click=move |_| {
                            if !cell.disabled {
                                on_save.run(iso_date(cell.date));
                            }
                        }
                    >
                        {cell.day}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <ModalFrame title="Select Date" icon="📅" on_close=on_close>
            <div class="calendar">
                <div class="calendar__nav">
                    <button type="button" class="icon-button" on:click=move |_| cursor.update(|c| *c = c.previous())>
                        "‹"
                    </button>
                    <span class="calendar__title">{move || cursor.get().title()}</span>
                    <button type="button" class="icon-button" on:click=move |_| cursor.update(|c| *c = c.next())>
                        "›"
                    </button>
                </div>
                <div class="calendar__grid">
                    {WEEKDAY_HEADERS
                        .iter()
                        .map(|label| view! { <span class="calendar__weekday">{*label}</span> })
                        .collect_view()}
                    {blanks}
                    {days}
                </div>
            </div>
            <div class="modal__footer">
                <button type="button" class="button button--secondary" on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
            </div>
        </ModalFrame>
    }
}
