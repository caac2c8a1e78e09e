use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::models::calendar::{parse_iso_date, parse_timestamp, ymd};
use crate::models::error::{required_email, ValidationError};
use crate::models::listing::{Identified, ListQuery, Searchable};

/// Review state of a quotation, and of an approval request on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QuoteStatus {
    Pending,
    Approved,
    Rejected,
}

impl QuoteStatus {
    pub const ALL: [Self; 3] = [Self::Pending, Self::Approved, Self::Rejected];

    pub const fn key(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending Review",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }

    /// Label used on the approval badge and in the approval-status select
    pub const fn approval_label(self) -> &'static str {
        match self {
            Self::Pending => "Approval Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }

    pub const fn badge_class(self) -> &'static str {
        match self {
            Self::Pending => "badge badge--yellow",
            Self::Approved => "badge badge--green",
            Self::Rejected => "badge badge--red",
        }
    }

    pub const fn approval_badge_class(self) -> &'static str {
        match self {
            Self::Pending => "badge badge--orange",
            Self::Approved => "badge badge--green",
            Self::Rejected => "badge badge--red",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Pending => "🕒",
            Self::Approved => "✔",
            Self::Rejected => "✖",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Approval {
    pub status: QuoteStatus,
    pub approver_name: Option<String>,
    pub approver_email: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
    pub comments: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RfqDetails {
    pub category: String,
    pub description: String,
    pub deadline: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quotation {
    pub id: String,
    pub rfq_number: String,
    pub rfq_title: String,
    pub supplier: String,
    pub amount: String,
    pub submitted: NaiveDate,
    pub status: QuoteStatus,
    pub approval: Option<Approval>,
    pub details: RfqDetails,
}

impl Quotation {
    /// Only received quotations without an approval request can be sent.
    pub const fn can_send_for_approval(&self, tab: QuotationTab) -> bool {
        matches!(tab, QuotationTab::Received) && self.approval.is_none()
    }
}

impl Identified for Quotation {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for Quotation {
    fn haystack(&self) -> Vec<&str> {
        vec![
            self.rfq_title.as_str(),
            self.rfq_number.as_str(),
            self.supplier.as_str(),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuotationTab {
    #[default]
    Received,
    Approved,
    Rejected,
}

impl QuotationTab {
    pub const ALL: [Self; 3] = [Self::Received, Self::Approved, Self::Rejected];

    pub const fn status(self) -> QuoteStatus {
        match self {
            Self::Received => QuoteStatus::Pending,
            Self::Approved => QuoteStatus::Approved,
            Self::Rejected => QuoteStatus::Rejected,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Received => "Received",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Received => "received",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    pub fn count(self, quotes: &[Quotation]) -> usize {
        quotes.iter().filter(|q| q.status == self.status()).count()
    }
}

/// Advanced filter panel values, kept as the raw input strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuotationFilters {
    pub date_from: String,
    pub date_to: String,
    pub status: String,
    pub approval_status: String,
}

impl QuotationFilters {
    pub fn is_active(&self) -> bool {
        [
            &self.date_from,
            &self.date_to,
            &self.status,
            &self.approval_status,
        ]
        .iter()
        .any(|value| !value.is_empty())
    }

    pub fn matches(&self, quote: &Quotation) -> bool {
        let status_ok = self.status.is_empty() || quote.status.key() == self.status;
        let approval_ok = self.approval_status.is_empty()
            || quote
                .approval
                .as_ref()
                .is_some_and(|a| a.status.key() == self.approval_status);

        // The range applies only once both ends are set
        let range_ok = match (
            parse_iso_date(&self.date_from),
            parse_iso_date(&self.date_to),
        ) {
            (Some(from), Some(to)) => quote.submitted >= from && quote.submitted <= to,
            _ => true,
        };

        status_ok && approval_ok && range_ok
    }
}

/// Quotes for `tab` that pass the search box and the filter panel.
pub fn visible_quotations(
    quotes: &[Quotation],
    tab: QuotationTab,
    query: &str,
    filters: &QuotationFilters,
) -> Vec<Quotation> {
    let search = ListQuery::new(query, crate::models::listing::ALL);
    quotes
        .iter()
        .filter(|q| q.status == tab.status())
        .filter(|q| search.matches_text(*q))
        .filter(|q| filters.matches(q))
        .cloned()
        .collect()
}

/// Approval request entered in the approval dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApprovalRequestForm {
    pub approver_email: String,
    pub comments: String,
}

impl ApprovalRequestForm {
    pub fn validate(email: &str, comments: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            approver_email: required_email(email, "Approver email")?,
            comments: comments.trim().to_string(),
        })
    }
}

/// Attach a pending approval to the quote with `id`.
pub fn send_for_approval(
    quotes: &mut [Quotation],
    id: &str,
    form: &ApprovalRequestForm,
    now: DateTime<Utc>,
) -> bool {
    crate::models::listing::update_by_id(quotes, id, |quote| {
        quote.approval = Some(Approval {
            status: QuoteStatus::Pending,
            approver_name: None,
            approver_email: Some(form.approver_email.clone()),
            timestamp: Some(now),
            comments: (!form.comments.is_empty()).then(|| form.comments.clone()),
        });
    })
}

pub fn empty_state_hint(tab: QuotationTab, searching: bool) -> String {
    if searching {
        format!(
            "Try adjusting your search or filters for {} quotations",
            tab.key()
        )
    } else {
        format!("No {} quotations found", tab.key())
    }
}

pub fn sample_quotations() -> Vec<Quotation> {
    let details = |category: &str, description: &str, deadline: NaiveDate| RfqDetails {
        category: category.to_string(),
        description: description.to_string(),
        deadline,
    };
    let approval = |status, name: &str, email: &str, at: &str, comments: Option<&str>| Approval {
        status,
        approver_name: Some(name.to_string()),
        approver_email: Some(email.to_string()),
        timestamp: parse_timestamp(at),
        comments: comments.map(str::to_string),
    };

    vec![
        Quotation {
            id: "1".into(),
            rfq_number: "RFQ-2024-001".into(),
            rfq_title: "Office Equipment Procurement".into(),
            supplier: "TechCorp Industries".into(),
            amount: "$45,000".into(),
            submitted: ymd(2024, 1, 15),
            status: QuoteStatus::Pending,
            approval: None,
            details: details(
                "Office Equipment",
                "Complete office setup including desks, chairs, and computers",
                ymd(2024, 1, 30),
            ),
        },
        Quotation {
            id: "2".into(),
            rfq_number: "RFQ-2024-002".into(),
            rfq_title: "IT Services Contract".into(),
            supplier: "Global Supply Co.".into(),
            amount: "$78,500".into(),
            submitted: ymd(2024, 1, 14),
            status: QuoteStatus::Pending,
            approval: Some(approval(
                QuoteStatus::Pending,
                "Sarah Johnson",
                "sarah.johnson@company.com",
                "2024-01-16T10:30:00Z",
                None,
            )),
            details: details(
                "IT Services",
                "Annual IT support and maintenance contract",
                ymd(2024, 1, 28),
            ),
        },
        Quotation {
            id: "3".into(),
            rfq_number: "RFQ-2024-003".into(),
            rfq_title: "Marketing Campaign".into(),
            supplier: "Innovation Partners".into(),
            amount: "$32,000".into(),
            submitted: ymd(2024, 1, 13),
            status: QuoteStatus::Approved,
            approval: Some(approval(
                QuoteStatus::Approved,
                "Mike Davis",
                "mike.davis@company.com",
                "2024-01-15T14:20:00Z",
                Some("Quote looks reasonable and within budget. Approved for procurement."),
            )),
            details: details(
                "Marketing",
                "Q1 digital marketing campaign development",
                ymd(2024, 1, 25),
            ),
        },
        Quotation {
            id: "4".into(),
            rfq_number: "RFQ-2024-004".into(),
            rfq_title: "Manufacturing Materials".into(),
            supplier: "Quality Components Inc.".into(),
            amount: "$125,000".into(),
            submitted: ymd(2024, 1, 12),
            status: QuoteStatus::Rejected,
            approval: Some(approval(
                QuoteStatus::Rejected,
                "Director Smith",
                "director@company.com",
                "2024-01-14T16:45:00Z",
                Some("Quote exceeds our Q1 budget allocation. Please negotiate or find alternative supplier."),
            )),
            details: details(
                "Manufacturing",
                "Raw materials for Q2 production cycle",
                ymd(2024, 2, 15),
            ),
        },
        Quotation {
            id: "5".into(),
            rfq_number: "RFQ-2024-005".into(),
            rfq_title: "Logistics Services".into(),
            supplier: "Swift Logistics".into(),
            amount: "$67,200".into(),
            submitted: ymd(2024, 1, 11),
            status: QuoteStatus::Pending,
            approval: None,
            details: details(
                "Logistics",
                "Shipping and warehousing services",
                ymd(2024, 2, 1),
            ),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_filters() -> QuotationFilters {
        QuotationFilters::default()
    }

    #[test]
    fn test_tab_counts() {
        let quotes = sample_quotations();
        assert_eq!(QuotationTab::Received.count(&quotes), 3);
        assert_eq!(QuotationTab::Approved.count(&quotes), 1);
        assert_eq!(QuotationTab::Rejected.count(&quotes), 1);
    }

    #[test]
    fn test_search_covers_supplier_number_and_title() {
        let quotes = sample_quotations();
        let by_supplier =
            visible_quotations(&quotes, QuotationTab::Received, "swift", &no_filters());
        assert_eq!(by_supplier.len(), 1);
        assert_eq!(by_supplier[0].id, "5");

        let by_number =
            visible_quotations(&quotes, QuotationTab::Received, "RFQ-2024-002", &no_filters());
        assert_eq!(by_number.len(), 1);

        // Search never crosses tabs
        let other_tab =
            visible_quotations(&quotes, QuotationTab::Received, "marketing", &no_filters());
        assert!(other_tab.is_empty());
    }

    #[test]
    fn test_date_range_needs_both_bounds() {
        let quotes = sample_quotations();
        let only_from = QuotationFilters {
            date_from: "2024-01-15".into(),
            ..QuotationFilters::default()
        };
        assert_eq!(
            visible_quotations(&quotes, QuotationTab::Received, "", &only_from).len(),
            3
        );

        let range = QuotationFilters {
            date_from: "2024-01-14".into(),
            date_to: "2024-01-15".into(),
            ..QuotationFilters::default()
        };
        let ids: Vec<_> = visible_quotations(&quotes, QuotationTab::Received, "", &range)
            .into_iter()
            .map(|q| q.id)
            .collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_approval_status_filter_excludes_quotes_without_approval() {
        let quotes = sample_quotations();
        let filters = QuotationFilters {
            approval_status: "pending".into(),
            ..QuotationFilters::default()
        };
        let ids: Vec<_> = visible_quotations(&quotes, QuotationTab::Received, "", &filters)
            .into_iter()
            .map(|q| q.id)
            .collect();
        assert_eq!(ids, vec!["2"]);
    }

    #[test]
    fn test_filters_active_flag() {
        assert!(!no_filters().is_active());
        let filters = QuotationFilters {
            status: "approved".into(),
            ..QuotationFilters::default()
        };
        assert!(filters.is_active());
    }

    #[test]
    fn test_send_for_approval_attaches_pending_request() {
        let mut quotes = sample_quotations();
        let form = ApprovalRequestForm::validate(" lead@company.com ", "Please review").unwrap();
        let now = parse_timestamp("2024-01-17T09:00:00Z").unwrap();

        assert!(quotes[0].can_send_for_approval(QuotationTab::Received));
        assert!(send_for_approval(&mut quotes, "1", &form, now));

        let approval = quotes[0].approval.as_ref().unwrap();
        assert_eq!(approval.status, QuoteStatus::Pending);
        assert_eq!(approval.approver_email.as_deref(), Some("lead@company.com"));
        assert_eq!(approval.comments.as_deref(), Some("Please review"));
        assert_eq!(approval.timestamp, Some(now));
        assert!(!quotes[0].can_send_for_approval(QuotationTab::Received));
    }

    #[test]
    fn test_approval_form_requires_email() {
        assert!(ApprovalRequestForm::validate("", "x").is_err());
        assert!(ApprovalRequestForm::validate("not-an-email", "x").is_err());
    }

    #[test]
    fn test_send_action_hidden_outside_received_tab() {
        let quotes = sample_quotations();
        assert!(!quotes[0].can_send_for_approval(QuotationTab::Approved));
    }

    #[test]
    fn test_empty_state_hint() {
        assert_eq!(
            empty_state_hint(QuotationTab::Approved, false),
            "No approved quotations found"
        );
        assert!(empty_state_hint(QuotationTab::Received, true).contains("received"));
    }
}
