use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

use crate::models::calendar::ymd;
use crate::models::listing::{
    compare_amounts, parse_amount, sort_records, Filterable, Identified, Searchable,
    SortDirection,
};
use crate::models::requirements::DocumentRequirement;

pub const RFQ_FILTERS: [&str; 5] = ["all", "draft", "published", "closed", "cancelled"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RfqStatus {
    Draft,
    Published,
    Closed,
    Cancelled,
}

impl RfqStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Published => "Published",
            Self::Closed => "Closed",
            Self::Cancelled => "Cancelled",
        }
    }

    pub const fn filter_key(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Closed => "closed",
            Self::Cancelled => "cancelled",
        }
    }

    pub const fn badge_class(self) -> &'static str {
        match self {
            Self::Draft => "badge badge--gray",
            Self::Published => "badge badge--blue",
            Self::Closed => "badge badge--green",
            Self::Cancelled => "badge badge--red",
        }
    }
}

/// What an RFQ asks suppliers for; chosen in the create dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RfqKind {
    Product,
    Services,
    Projects,
}

impl RfqKind {
    pub const ALL: [Self; 3] = [Self::Product, Self::Services, Self::Projects];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Product => "Product",
            Self::Services => "Services",
            Self::Projects => "Projects",
        }
    }

    pub const fn filter_key(self) -> &'static str {
        match self {
            Self::Product => "product",
            Self::Services => "services",
            Self::Projects => "projects",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Product => "📦",
            Self::Services => "⚙",
            Self::Projects => "📂",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rfq {
    pub id: String,
    pub number: String,
    pub title: String,
    pub category: String,
    pub status: RfqStatus,
    pub deadline: NaiveDate,
    pub suppliers_invited: u32,
    pub quotations_received: u32,
    pub created: NaiveDate,
    pub estimated_value: String,
    pub team: Vec<String>,
    pub documents: Vec<DocumentRequirement>,
}

impl Rfq {
    /// A fresh draft for `kind`, due thirty days after `today`.
    pub fn draft(id: impl Into<String>, number: String, kind: RfqKind, today: NaiveDate) -> Self {
        Self {
            id: id.into(),
            number,
            title: format!("New {} RFQ", kind.label()),
            category: kind.label().to_string(),
            status: RfqStatus::Draft,
            deadline: today.checked_add_days(Days::new(30)).unwrap_or(today),
            suppliers_invited: 0,
            quotations_received: 0,
            created: today,
            estimated_value: "TBD".to_string(),
            team: Vec::new(),
            documents: Vec::new(),
        }
    }
}

impl Identified for Rfq {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for Rfq {
    fn haystack(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.number.as_str()]
    }
}

impl Filterable for Rfq {
    fn matches_filter(&self, key: &str) -> bool {
        self.status.filter_key() == key
    }
}

/// Column the RFQ list is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RfqSort {
    #[default]
    Created,
    Deadline,
    Value,
}

impl RfqSort {
    pub const ALL: [Self; 3] = [Self::Created, Self::Deadline, Self::Value];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Created => "Created",
            Self::Deadline => "Deadline",
            Self::Value => "Value",
        }
    }
}

pub fn sort_rfqs(rfqs: &mut [Rfq], sort: RfqSort, direction: SortDirection) {
    match sort {
        RfqSort::Created => sort_records(rfqs, |r| r.created, direction),
        RfqSort::Deadline => sort_records(rfqs, |r| r.deadline, direction),
        RfqSort::Value => rfqs.sort_by(|a, b| {
            compare_amounts(
                parse_amount(&a.estimated_value),
                parse_amount(&b.estimated_value),
                direction,
            )
        }),
    }
}

/// Next `RFQ-<year>-NNN` number after the highest one issued that year.
pub fn next_rfq_number(rfqs: &[Rfq], today: NaiveDate) -> String {
    let prefix = format!("RFQ-{}-", today.year());
    let highest = rfqs
        .iter()
        .filter_map(|r| r.number.strip_prefix(&prefix))
        .filter_map(|seq| seq.parse::<u32>().ok())
        .max()
        .unwrap_or(0);
    format!("{prefix}{:03}", highest + 1)
}

pub fn sample_rfqs() -> Vec<Rfq> {
    let rfq = |id: &str,
               number: &str,
               title: &str,
               category: &str,
               status: RfqStatus,
               deadline: NaiveDate,
               invited: u32,
               received: u32,
               created: NaiveDate,
               value: &str| Rfq {
        id: id.to_string(),
        number: number.to_string(),
        title: title.to_string(),
        category: category.to_string(),
        status,
        deadline,
        suppliers_invited: invited,
        quotations_received: received,
        created,
        estimated_value: value.to_string(),
        team: Vec::new(),
        documents: Vec::new(),
    };

    vec![
        rfq(
            "1",
            "RFQ-2024-001",
            "Office Equipment Procurement",
            "Office Supplies",
            RfqStatus::Published,
            ymd(2024, 1, 30),
            5,
            3,
            ymd(2024, 1, 10),
            "$45,000",
        ),
        rfq(
            "2",
            "RFQ-2024-002",
            "IT Services Annual Contract",
            "Technology",
            RfqStatus::Published,
            ymd(2024, 1, 28),
            8,
            6,
            ymd(2024, 1, 8),
            "$120,000",
        ),
        rfq(
            "3",
            "RFQ-2024-003",
            "Marketing Campaign Development",
            "Services",
            RfqStatus::Closed,
            ymd(2024, 1, 25),
            4,
            4,
            ymd(2024, 1, 5),
            "$32,000",
        ),
        rfq(
            "4",
            "RFQ-2024-004",
            "Manufacturing Materials Q2",
            "Manufacturing",
            RfqStatus::Draft,
            ymd(2024, 2, 15),
            0,
            0,
            ymd(2024, 1, 12),
            "$250,000",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::listing::{apply, ListQuery, ALL};

    #[test]
    fn test_search_matches_number_or_title() {
        let rfqs = sample_rfqs();
        assert_eq!(apply(&rfqs, &ListQuery::new("rfq-2024-003", ALL)).len(), 1);
        assert_eq!(apply(&rfqs, &ListQuery::new("equipment", ALL)).len(), 1);
        // Category is not searched
        assert!(apply(&rfqs, &ListQuery::new("technology", ALL)).is_empty());
    }

    #[test]
    fn test_status_filter() {
        let rfqs = sample_rfqs();
        assert_eq!(apply(&rfqs, &ListQuery::new("", "published")).len(), 2);
        assert_eq!(apply(&rfqs, &ListQuery::new("", "draft")).len(), 1);
        assert!(apply(&rfqs, &ListQuery::new("", "cancelled")).is_empty());
    }

    #[test]
    fn test_sort_by_value_descending() {
        let mut rfqs = sample_rfqs();
        sort_rfqs(&mut rfqs, RfqSort::Value, SortDirection::Descending);
        let numbers: Vec<_> = rfqs.iter().map(|r| r.number.as_str()).collect();
        assert_eq!(
            numbers,
            vec!["RFQ-2024-004", "RFQ-2024-002", "RFQ-2024-001", "RFQ-2024-003"]
        );
    }

    #[test]
    fn test_sort_by_deadline() {
        let mut rfqs = sample_rfqs();
        sort_rfqs(&mut rfqs, RfqSort::Deadline, SortDirection::Ascending);
        assert_eq!(rfqs[0].number, "RFQ-2024-003");
        assert_eq!(rfqs[3].number, "RFQ-2024-004");
    }

    #[test]
    fn test_tbd_value_sorts_last() {
        let mut rfqs = sample_rfqs();
        rfqs.push(Rfq::draft("9", "RFQ-2024-005".into(), RfqKind::Services, ymd(2024, 1, 20)));
        sort_rfqs(&mut rfqs, RfqSort::Value, SortDirection::Ascending);
        assert_eq!(rfqs.last().unwrap().estimated_value, "TBD");
    }

    #[test]
    fn test_tbd_value_sorts_last_descending() {
        let mut rfqs = sample_rfqs();
        rfqs.push(Rfq::draft("9", "RFQ-2024-005".into(), RfqKind::Services, ymd(2024, 1, 20)));
        sort_rfqs(&mut rfqs, RfqSort::Value, SortDirection::Descending);
        let values: Vec<_> = rfqs.iter().map(|r| r.estimated_value.as_str()).collect();
        assert_eq!(values.last(), Some(&"TBD"));
        assert_eq!(rfqs[0].number, "RFQ-2024-004");
    }

    #[test]
    fn test_next_rfq_number() {
        let rfqs = sample_rfqs();
        assert_eq!(next_rfq_number(&rfqs, ymd(2024, 3, 1)), "RFQ-2024-005");
        assert_eq!(next_rfq_number(&rfqs, ymd(2025, 1, 2)), "RFQ-2025-001");
    }

    #[test]
    fn test_draft_defaults() {
        let draft = Rfq::draft("x", "RFQ-2024-005".into(), RfqKind::Product, ymd(2024, 1, 20));
        assert_eq!(draft.status, RfqStatus::Draft);
        assert_eq!(draft.title, "New Product RFQ");
        assert_eq!(draft.deadline, ymd(2024, 2, 19));
        assert_eq!(draft.created, ymd(2024, 1, 20));
    }
}
