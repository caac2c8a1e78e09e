//! Wall-clock reads from the browser. Models take dates as arguments so they
//! stay testable without a JS runtime.

use std::cell::Cell;

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::calendar::{session_id, timestamp_from_millis, ymd};

thread_local! {
    static ID_SEQUENCE: Cell<u32> = const { Cell::new(0) };
}

pub fn now() -> DateTime<Utc> {
    timestamp_from_millis(js_sys::Date::now()).unwrap_or_default()
}

/// Today's date in the user's local timezone.
#[allow(clippy::cast_possible_wrap)]
pub fn today() -> NaiveDate {
    let date = js_sys::Date::new_0();
    ymd(date.get_full_year() as i32, date.get_month() + 1, date.get_date())
}

/// Local `HH:MM`, used as a chat message time.
pub fn clock_time() -> String {
    let date = js_sys::Date::new_0();
    format!("{:02}:{:02}", date.get_hours(), date.get_minutes())
}

/// Id for a record created in this session, unique even within one millisecond.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn fresh_id() -> String {
    let seq = ID_SEQUENCE.with(|next| {
        let seq = next.get();
        next.set(seq.wrapping_add(1));
        seq
    });
    session_id(js_sys::Date::now() as u64, seq)
}
