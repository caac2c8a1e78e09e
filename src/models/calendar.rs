use chrono::{DateTime, Datelike, NaiveDate, Utc};

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const WEEKDAY_HEADERS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Build a date for seeded records; out-of-range input collapses to the epoch default.
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Parse an `<input type="date">` value.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// `M/D/YYYY`, the en-US short form the list rows use.
pub fn display_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

/// Parse an RFC 3339 timestamp from seeded data.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

#[allow(clippy::cast_possible_truncation)]
pub fn timestamp_from_millis(millis: f64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis as i64)
}

/// Record id from a creation time and a per-session sequence number.
pub fn session_id(millis: u64, seq: u32) -> String {
    format!("{millis}-{seq}")
}

/// "Just now" under an hour, whole hours under a day, whole days beyond.
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let hours = (now - then).num_minutes() / 60;
    if hours < 1 {
        "Just now".to_string()
    } else if hours < 24 {
        format!("{hours}h ago")
    } else {
        format!("{}d ago", hours / 24)
    }
}

/// The month shown by the date picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    pub year: i32,
    /// 1-based month
    pub month: u32,
}

impl MonthCursor {
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub const fn previous(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub const fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn first_day(self) -> NaiveDate {
        ymd(self.year, self.month, 1)
    }

    pub fn days_in_month(self) -> u32 {
        let days = (self.next().first_day() - self.first_day()).num_days();
        u32::try_from(days).unwrap_or(0)
    }

    /// Empty grid cells before day 1 in a Sunday-first week.
    pub fn leading_blanks(self) -> u32 {
        self.first_day().weekday().num_days_from_sunday()
    }

    pub fn date(self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    pub fn title(self) -> String {
        let index = usize::try_from(self.month.saturating_sub(1)).unwrap_or(0);
        format!("{} {}", MONTH_NAMES[index.min(11)], self.year)
    }
}

/// One cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub day: u32,
    pub date: NaiveDate,
    /// Before today; not selectable
    pub disabled: bool,
    pub selected: bool,
}

/// Day cells for `cursor`, flagging past days and the current selection.
pub fn month_grid(
    cursor: MonthCursor,
    today: NaiveDate,
    selected: Option<NaiveDate>,
) -> Vec<DayCell> {
    (1..=cursor.days_in_month())
        .filter_map(|day| {
            cursor.date(day).map(|date| DayCell {
                day,
                date,
                disabled: date < today,
                selected: selected == Some(date),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_ids_in_same_millisecond_differ() {
        let first = session_id(1_705_329_000_000, 0);
        let second = session_id(1_705_329_000_000, 1);
        assert_ne!(first, second);
        assert_eq!(first, "1705329000000-0");
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(MonthCursor { year: 2024, month: 2 }.days_in_month(), 29);
        assert_eq!(MonthCursor { year: 2023, month: 2 }.days_in_month(), 28);
        assert_eq!(MonthCursor { year: 2024, month: 12 }.days_in_month(), 31);
        assert_eq!(MonthCursor { year: 2024, month: 4 }.days_in_month(), 30);
    }

    #[test]
    fn test_leading_blanks() {
        // 1 January 2024 was a Monday
        assert_eq!(MonthCursor { year: 2024, month: 1 }.leading_blanks(), 1);
        // 1 September 2024 was a Sunday
        assert_eq!(MonthCursor { year: 2024, month: 9 }.leading_blanks(), 0);
    }

    #[test]
    fn test_navigation_wraps_years() {
        let january = MonthCursor { year: 2024, month: 1 };
        assert_eq!(january.previous(), MonthCursor { year: 2023, month: 12 });
        assert_eq!(january.previous().next(), january);
        assert_eq!(
            MonthCursor { year: 2024, month: 12 }.next(),
            MonthCursor { year: 2025, month: 1 }
        );
    }

    #[test]
    fn test_title() {
        assert_eq!(MonthCursor { year: 2024, month: 3 }.title(), "March 2024");
    }

    #[test]
    fn test_month_grid_flags_past_and_selected() {
        let cursor = MonthCursor { year: 2024, month: 1 };
        let today = ymd(2024, 1, 15);
        let grid = month_grid(cursor, today, Some(ymd(2024, 1, 20)));

        assert_eq!(grid.len(), 31);
        assert!(grid[13].disabled); // the 14th
        assert!(!grid[14].disabled); // today stays selectable
        assert!(grid[19].selected);
        assert_eq!(grid.iter().filter(|c| c.selected).count(), 1);
    }

    #[test]
    fn test_selection_in_other_month_is_not_highlighted() {
        let cursor = MonthCursor { year: 2024, month: 2 };
        let grid = month_grid(cursor, ymd(2024, 1, 1), Some(ymd(2024, 1, 20)));
        assert!(grid.iter().all(|c| !c.selected));
    }

    #[test]
    fn test_date_formats() {
        let date = ymd(2024, 1, 5);
        assert_eq!(iso_date(date), "2024-01-05");
        assert_eq!(display_date(date), "1/5/2024");
        assert_eq!(parse_iso_date("2024-01-05"), Some(date));
        assert_eq!(parse_iso_date(""), None);
    }

    #[test]
    fn test_relative_time() {
        let now = parse_timestamp("2024-01-15T15:00:00Z").unwrap();
        let at = |s: &str| parse_timestamp(s).unwrap();

        assert_eq!(relative_time(at("2024-01-15T14:30:00Z"), now), "Just now");
        assert_eq!(relative_time(at("2024-01-15T12:20:00Z"), now), "2h ago");
        assert_eq!(relative_time(at("2024-01-14T14:00:00Z"), now), "1d ago");
        assert_eq!(relative_time(at("2024-01-10T15:00:00Z"), now), "5d ago");
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_grid_covers_month(year in 1990i32..2100, month in 1u32..=12) {
            let cursor = MonthCursor { year, month };
            let grid = month_grid(cursor, ymd(1900, 1, 1), None);

            prop_assert!((28..=31).contains(&cursor.days_in_month()));
            prop_assert!(cursor.leading_blanks() < 7);
            prop_assert_eq!(grid.len() as u32, cursor.days_in_month());
            prop_assert!(grid.iter().all(|c| !c.disabled));
        }

        #[test]
        fn test_next_then_previous_is_identity(year in 1990i32..2100, month in 1u32..=12) {
            let cursor = MonthCursor { year, month };
            prop_assert_eq!(cursor.next().previous(), cursor);
        }
    }
}
