use chrono::NaiveDate;
use serde::Serialize;

use crate::models::calendar::ymd;
use crate::models::listing::{Filterable, Identified, Searchable};

pub const SAMPLE_FILTERS: [&str; 6] = [
    "all",
    "requested",
    "received",
    "testing",
    "approved",
    "rejected",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SampleStatus {
    Requested,
    Received,
    Testing,
    Approved,
    Rejected,
}

impl SampleStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Requested => "Requested",
            Self::Received => "Received",
            Self::Testing => "Testing",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }

    pub const fn filter_key(self) -> &'static str {
        match self {
            Self::Requested => "requested",
            Self::Received => "received",
            Self::Testing => "testing",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    pub const fn badge_class(self) -> &'static str {
        match self {
            Self::Requested => "badge badge--blue",
            Self::Received => "badge badge--green",
            Self::Testing => "badge badge--yellow",
            Self::Approved => "badge badge--emerald",
            Self::Rejected => "badge badge--red",
        }
    }
}

/// A physical product sample requested from a supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sample {
    pub id: String,
    pub product: String,
    pub supplier: String,
    pub category: String,
    pub requested_on: NaiveDate,
    pub status: SampleStatus,
    pub location: String,
    pub notes: String,
}

impl Identified for Sample {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for Sample {
    fn haystack(&self) -> Vec<&str> {
        vec![self.product.as_str(), self.supplier.as_str()]
    }
}

impl Filterable for Sample {
    fn matches_filter(&self, key: &str) -> bool {
        self.status.filter_key() == key
    }
}

pub fn sample_samples() -> Vec<Sample> {
    let sample = |id: &str,
                  product: &str,
                  supplier: &str,
                  category: &str,
                  requested_on: NaiveDate,
                  status,
                  location: &str,
                  notes: &str| Sample {
        id: id.to_string(),
        product: product.to_string(),
        supplier: supplier.to_string(),
        category: category.to_string(),
        requested_on,
        status,
        location: location.to_string(),
        notes: notes.to_string(),
    };

    vec![
        sample(
            "1",
            "Executive Office Chair",
            "TechCorp Industries",
            "Office Furniture",
            ymd(2024, 1, 15),
            SampleStatus::Received,
            "Warehouse A",
            "Ergonomic design with lumbar support",
        ),
        sample(
            "2",
            "LED Monitor 27\"",
            "Global Supply Co.",
            "IT Equipment",
            ymd(2024, 1, 12),
            SampleStatus::Testing,
            "IT Lab",
            "4K resolution, USB-C connectivity",
        ),
        sample(
            "3",
            "Coffee Machine",
            "Innovation Partners",
            "Kitchen Equipment",
            ymd(2024, 1, 10),
            SampleStatus::Approved,
            "Office Kitchen",
            "Automatic espresso machine with milk frother",
        ),
        sample(
            "4",
            "Security Camera",
            "Quality Components",
            "Security Equipment",
            ymd(2024, 1, 8),
            SampleStatus::Requested,
            "Pending",
            "IP camera with night vision capability",
        ),
        sample(
            "5",
            "Standing Desk",
            "Design Masters",
            "Office Furniture",
            ymd(2024, 1, 5),
            SampleStatus::Rejected,
            "Returned",
            "Height adjustment mechanism was faulty",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::listing::{apply, ListQuery, ALL};

    #[test]
    fn test_search_product_or_supplier() {
        let samples = sample_samples();
        assert_eq!(apply(&samples, &ListQuery::new("design masters", ALL)).len(), 1);
        assert_eq!(apply(&samples, &ListQuery::new("monitor", ALL)).len(), 1);
        // Notes are not searched
        assert!(apply(&samples, &ListQuery::new("lumbar", ALL)).is_empty());
    }

    #[test]
    fn test_status_filters() {
        let samples = sample_samples();
        for key in SAMPLE_FILTERS.iter().skip(1) {
            assert_eq!(apply(&samples, &ListQuery::new("", key)).len(), 1, "{key}");
        }
    }
}
