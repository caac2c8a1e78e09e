use std::cmp::Ordering;

use leptos::prelude::*;

/// Filter key that matches every record.
pub const ALL: &str = "all";

/// Record fields searched by the free-text box.
pub trait Searchable {
    fn haystack(&self) -> Vec<&str>;
}

/// Category membership for the filter chips.
pub trait Filterable {
    fn matches_filter(&self, key: &str) -> bool;
}

/// Records addressed by a stable id from row actions.
pub trait Identified {
    fn id(&self) -> &str;
}

/// Apply `edit` to the record with `id`; returns false when no record matched.
pub fn update_by_id<T, F>(records: &mut [T], id: &str, edit: F) -> bool
where
    T: Identified,
    F: FnOnce(&mut T),
{
    records
        .iter_mut()
        .find(|record| record.id() == id)
        .map(edit)
        .is_some()
}

/// A text query plus a category key, as entered on a list page.
#[derive(Debug, Clone, Copy)]
pub struct ListQuery<'a> {
    pub text: &'a str,
    pub filter: &'a str,
}

impl<'a> ListQuery<'a> {
    pub const fn new(text: &'a str, filter: &'a str) -> Self {
        Self { text, filter }
    }

    /// Case-insensitive containment over any searched field.
    pub fn matches_text<T: Searchable>(&self, record: &T) -> bool {
        let needle = self.text.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        record
            .haystack()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    pub fn matches<T: Searchable + Filterable>(&self, record: &T) -> bool {
        let category = self.filter == ALL || record.matches_filter(self.filter);
        category && self.matches_text(record)
    }
}

/// Records matching `query`, in source order.
pub fn apply<T>(records: &[T], query: &ListQuery<'_>) -> Vec<T>
where
    T: Searchable + Filterable + Clone,
{
    records
        .iter()
        .filter(|record| query.matches(*record))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Orient an ascending comparison.
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }

    pub const fn arrow(self) -> &'static str {
        match self {
            Self::Ascending => "↑",
            Self::Descending => "↓",
        }
    }
}

/// Stable sort by `key`; equal keys keep their relative order in both directions.
pub fn sort_records<T, K, F>(records: &mut [T], key: F, direction: SortDirection)
where
    K: Ord,
    F: Fn(&T) -> K,
{
    records.sort_by(|a, b| direction.apply(key(a).cmp(&key(b))));
}

/// Turn a filter key into a chip label: `"in-progress"` becomes `"In progress"`.
pub fn chip_label(key: &str) -> String {
    let spaced = key.replace('-', " ");
    let mut chars = spaced.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Parse a display amount such as `"$45,000"` into whole units.
pub fn parse_amount(display: &str) -> Option<u64> {
    let digits: String = display
        .chars()
        .take_while(|c| *c != '.')
        .filter(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

/// Compare two optional amounts. `direction` orders the known amounts; unknown
/// amounts go last either way.
pub fn compare_amounts(a: Option<u64>, b: Option<u64>, direction: SortDirection) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => direction.apply(a.cmp(&b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Search box and filter-chip state owned by one list page.
#[derive(Clone, Copy)]
pub struct ListState {
    pub query: RwSignal<String>,
    pub filter: RwSignal<String>,
}

impl ListState {
    pub fn new() -> Self {
        Self {
            query: RwSignal::new(String::new()),
            filter: RwSignal::new(ALL.to_string()),
        }
    }

    pub fn has_query(&self) -> bool {
        !self.query.with(|q| q.trim().is_empty())
    }

    /// Filter `records` against the current query; tracks both signals.
    pub fn apply<T>(&self, records: &[T]) -> Vec<T>
    where
        T: Searchable + Filterable + Clone,
    {
        let text = self.query.get();
        let filter = self.filter.get();
        apply(records, &ListQuery::new(&text, &filter))
    }
}

impl Default for ListState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: String,
        note: String,
        tag: &'static str,
    }

    impl Searchable for Row {
        fn haystack(&self) -> Vec<&str> {
            vec![self.name.as_str(), self.note.as_str()]
        }
    }

    impl Filterable for Row {
        fn matches_filter(&self, key: &str) -> bool {
            self.tag == key
        }
    }

    fn row(name: &str, note: &str, tag: &'static str) -> Row {
        Row {
            name: name.to_string(),
            note: note.to_string(),
            tag,
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            row("Office Equipment", "desks and chairs", "published"),
            row("IT Services", "annual support", "draft"),
            row("Marketing Campaign", "Q1 digital", "published"),
        ]
    }

    #[test]
    fn test_empty_query_and_all_returns_everything() {
        let result = apply(&rows(), &ListQuery::new("", ALL));
        assert_eq!(result, rows());
    }

    #[test]
    fn test_text_match_is_case_insensitive() {
        let result = apply(&rows(), &ListQuery::new("OFFICE", ALL));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Office Equipment");
    }

    #[test]
    fn test_text_matches_secondary_field() {
        let result = apply(&rows(), &ListQuery::new("support", ALL));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "IT Services");
    }

    #[test]
    fn test_filter_and_text_combine() {
        let result = apply(&rows(), &ListQuery::new("i", "published"));
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|r| r.tag == "published"));

        let none = apply(&rows(), &ListQuery::new("services", "published"));
        assert!(none.is_empty());
    }

    #[test]
    fn test_whitespace_query_matches_everything() {
        assert_eq!(apply(&rows(), &ListQuery::new("   ", ALL)).len(), 3);
    }

    #[test]
    fn test_chip_label() {
        assert_eq!(chip_label("all"), "All");
        assert_eq!(chip_label("in-progress"), "In progress");
        assert_eq!(chip_label("to-do"), "To do");
        assert_eq!(chip_label("whatsapp"), "Whatsapp");
        assert_eq!(chip_label(""), "");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("$45,000"), Some(45_000));
        assert_eq!(parse_amount("$1,250,000.50"), Some(1_250_000));
        assert_eq!(parse_amount("TBD"), None);
    }

    #[test]
    fn test_compare_amounts_puts_unknown_last() {
        let mut amounts = vec![None, Some(5), Some(1)];
        amounts.sort_by(|a, b| compare_amounts(*a, *b, SortDirection::Ascending));
        assert_eq!(amounts, vec![Some(1), Some(5), None]);

        amounts.sort_by(|a, b| compare_amounts(*a, *b, SortDirection::Descending));
        assert_eq!(amounts, vec![Some(5), Some(1), None]);
    }

    #[test]
    fn test_sort_records_descending() {
        let mut data = rows();
        sort_records(&mut data, |r| r.name.clone(), SortDirection::Descending);
        let names: Vec<_> = data.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Office Equipment", "Marketing Campaign", "IT Services"]);
    }

    impl Identified for Row {
        fn id(&self) -> &str {
            &self.name
        }
    }

    #[test]
    fn test_update_by_id() {
        let mut data = rows();
        assert!(update_by_id(&mut data, "IT Services", |r| r.tag = "published"));
        assert_eq!(data[1].tag, "published");
        assert!(!update_by_id(&mut data, "missing", |r| r.tag = "draft"));
    }

    #[test]
    fn test_sort_direction_toggle() {
        assert_eq!(SortDirection::Ascending.toggled(), SortDirection::Descending);
        assert_eq!(SortDirection::Descending.toggled(), SortDirection::Ascending);
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        label: String,
        group: u8,
    }

    impl Searchable for Item {
        fn haystack(&self) -> Vec<&str> {
            vec![self.label.as_str()]
        }
    }

    impl Filterable for Item {
        fn matches_filter(&self, key: &str) -> bool {
            key.parse::<u8>().is_ok_and(|g| g == self.group)
        }
    }

    fn items() -> impl Strategy<Value = Vec<Item>> {
        prop::collection::vec(
            ("[a-zA-Z ]{0,12}", 0u8..4).prop_map(|(label, group)| Item { label, group }),
            0..40,
        )
    }

    proptest! {
        #[test]
        fn test_result_is_ordered_subsequence(
            records in items(),
            text in "[a-z]{0,3}",
            group in 0u8..4,
        ) {
            let filter = group.to_string();
            let result = apply(&records, &ListQuery::new(&text, &filter));

            // Every result appears in the source, in the same relative order
            let mut cursor = records.iter();
            for found in &result {
                prop_assert!(cursor.any(|r| r == found));
            }
        }

        #[test]
        fn test_every_result_matches(records in items(), text in "[a-z]{1,3}") {
            let result = apply(&records, &ListQuery::new(&text, ALL));
            for found in &result {
                prop_assert!(found.label.to_lowercase().contains(&text));
            }
        }

        #[test]
        fn test_all_filter_with_empty_query_is_identity(records in items()) {
            prop_assert_eq!(apply(&records, &ListQuery::new("", ALL)), records);
        }

        #[test]
        fn test_sort_is_ordered(mut values in prop::collection::vec(0u32..1000, 0..50)) {
            sort_records(&mut values, |v| *v, SortDirection::Ascending);
            for pair in values.windows(2) {
                prop_assert!(pair[0] <= pair[1]);
            }
        }

        #[test]
        fn test_unknown_amounts_trail(
            mut amounts in prop::collection::vec(prop::option::of(0u64..1000), 0..30),
            descending in any::<bool>(),
        ) {
            let direction = if descending {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            };
            amounts.sort_by(|a, b| compare_amounts(*a, *b, direction));
            let known = amounts.iter().take_while(|a| a.is_some()).count();
            prop_assert!(amounts[known..].iter().all(Option::is_none));
        }
    }
}
