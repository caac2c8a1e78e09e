use chrono::NaiveDate;
use serde::Serialize;

use crate::models::calendar::ymd;
use crate::models::listing::{update_by_id, Filterable, Identified, Searchable};
use crate::models::quotation::QuoteStatus;

pub const APPROVAL_FILTERS: [&str; 4] = ["all", "pending", "approved", "rejected"];

/// An RFQ or award waiting on a sign-off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApprovalRequest {
    pub id: String,
    pub rfq_number: String,
    pub title: String,
    pub requested_by: String,
    pub amount: String,
    pub requested_on: NaiveDate,
    pub status: QuoteStatus,
    pub note: String,
}

impl Identified for ApprovalRequest {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for ApprovalRequest {
    fn haystack(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.rfq_number.as_str(),
            self.requested_by.as_str(),
        ]
    }
}

impl Filterable for ApprovalRequest {
    fn matches_filter(&self, key: &str) -> bool {
        self.status.key() == key
    }
}

/// Settle a pending request. Requests already decided are left alone.
pub fn decide(requests: &mut [ApprovalRequest], id: &str, approve: bool) -> bool {
    let mut changed = false;
    update_by_id(requests, id, |request| {
        if request.status == QuoteStatus::Pending {
            request.status = if approve {
                QuoteStatus::Approved
            } else {
                QuoteStatus::Rejected
            };
            changed = true;
        }
    });
    changed
}

pub fn pending_count(requests: &[ApprovalRequest]) -> usize {
    requests
        .iter()
        .filter(|r| r.status == QuoteStatus::Pending)
        .count()
}

pub fn sample_approval_requests() -> Vec<ApprovalRequest> {
    let request = |id: &str,
                   rfq_number: &str,
                   title: &str,
                   requested_by: &str,
                   amount: &str,
                   requested_on: NaiveDate,
                   status,
                   note: &str| ApprovalRequest {
        id: id.to_string(),
        rfq_number: rfq_number.to_string(),
        title: title.to_string(),
        requested_by: requested_by.to_string(),
        amount: amount.to_string(),
        requested_on,
        status,
        note: note.to_string(),
    };
    vec![
        request(
            "a1",
            "RFQ-2024-001",
            "Office Equipment Procurement",
            "Sarah Johnson",
            "$45,000",
            ymd(2024, 1, 15),
            QuoteStatus::Pending,
            "Lowest of five quotations, delivery within 3 weeks",
        ),
        request(
            "a2",
            "RFQ-2024-002",
            "IT Services Contract",
            "Lisa Wilson",
            "$78,500",
            ymd(2024, 1, 14),
            QuoteStatus::Pending,
            "Annual contract, renewal option included",
        ),
        request(
            "a3",
            "RFQ-2024-003",
            "Marketing Campaign Q1",
            "Emma Martinez",
            "$32,000",
            ymd(2024, 1, 12),
            QuoteStatus::Approved,
            "Approved within budget",
        ),
        request(
            "a4",
            "RFQ-2024-004",
            "Manufacturing Materials",
            "David Brown",
            "$125,000",
            ymd(2024, 1, 10),
            QuoteStatus::Rejected,
            "Exceeds Q1 allocation, resubmit in Q2",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::listing::{apply, ListQuery};

    #[test]
    fn test_status_filters() {
        let requests = sample_approval_requests();
        assert_eq!(apply(&requests, &ListQuery::new("", "pending")).len(), 2);
        assert_eq!(apply(&requests, &ListQuery::new("", "approved")).len(), 1);
        assert_eq!(apply(&requests, &ListQuery::new("", "rejected")).len(), 1);
    }

    #[test]
    fn test_decide_only_pending() {
        let mut requests = sample_approval_requests();
        assert!(decide(&mut requests, "a1", true));
        assert!(decide(&mut requests, "a2", false));
        assert_eq!(requests[0].status, QuoteStatus::Approved);
        assert_eq!(requests[1].status, QuoteStatus::Rejected);
        assert_eq!(pending_count(&requests), 0);

        assert!(!decide(&mut requests, "a4", true));
        assert_eq!(requests[3].status, QuoteStatus::Rejected);
    }
}
