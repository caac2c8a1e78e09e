use serde::Serialize;

use crate::models::listing::{update_by_id, Filterable, Identified, Searchable};
use crate::models::View;

/// Badge counts above this render as `"99+"`.
const BADGE_CAP: usize = 99;

pub const ALERT_FILTERS: [&str; 2] = ["all", "unread"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AlertKind {
    Quotation,
    Approval,
    Supplier,
    Deadline,
    Message,
}

impl AlertKind {
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Quotation => "📄",
            Self::Approval => "✔",
            Self::Supplier => "🏢",
            Self::Deadline => "⏰",
            Self::Message => "💬",
        }
    }

    /// Page that deals with this kind of alert.
    pub const fn view(self) -> View {
        match self {
            Self::Quotation => View::Quotations,
            Self::Approval => View::Approvals,
            Self::Supplier => View::Suppliers,
            Self::Deadline => View::RfqList,
            Self::Message => View::Inbox,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub id: String,
    pub kind: AlertKind,
    pub title: String,
    pub body: String,
    pub time: String,
    pub unread: bool,
}

impl Identified for Alert {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for Alert {
    fn haystack(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.body.as_str()]
    }
}

impl Filterable for Alert {
    fn matches_filter(&self, key: &str) -> bool {
        key == "unread" && self.unread
    }
}

pub fn unread_count(alerts: &[Alert]) -> usize {
    alerts.iter().filter(|a| a.unread).count()
}

pub fn mark_read(alerts: &mut [Alert], id: &str) -> bool {
    update_by_id(alerts, id, |a| a.unread = false)
}

pub fn mark_all_read(alerts: &mut [Alert]) {
    for alert in alerts {
        alert.unread = false;
    }
}

/// Text on the bell badge; `None` hides the badge.
pub fn badge_text(count: usize) -> Option<String> {
    match count {
        0 => None,
        n if n > BADGE_CAP => Some(format!("{BADGE_CAP}+")),
        n => Some(n.to_string()),
    }
}

pub fn sample_alerts() -> Vec<Alert> {
    let alert = |id: &str, kind, title: &str, body: &str, time: &str, unread: bool| Alert {
        id: id.to_string(),
        kind,
        title: title.to_string(),
        body: body.to_string(),
        time: time.to_string(),
        unread,
    };
    vec![
        alert(
            "n1",
            AlertKind::Quotation,
            "New quotation received",
            "TechCorp Industries submitted a quotation for RFQ-2024-001",
            "2 hours ago",
            true,
        ),
        alert(
            "n2",
            AlertKind::Approval,
            "Approval requested",
            "Sarah Johnson needs approval for Office Equipment Procurement",
            "3 hours ago",
            true,
        ),
        alert(
            "n3",
            AlertKind::Supplier,
            "Supplier profile updated",
            "Global Supply Co. updated their company profile",
            "4 hours ago",
            true,
        ),
        alert(
            "n4",
            AlertKind::Deadline,
            "Deadline approaching",
            "Marketing Campaign Q1 closes in 2 days",
            "1 day ago",
            true,
        ),
        alert(
            "n5",
            AlertKind::Message,
            "New forwarded email",
            "director@company.com forwarded the Q2 budget approval",
            "1 day ago",
            true,
        ),
        alert(
            "n6",
            AlertKind::Quotation,
            "Quotation rejected",
            "Manufacturing Materials quotation from MegaManuf Inc. was rejected",
            "2 days ago",
            false,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::listing::{apply, ListQuery, ALL};

    #[test]
    fn test_seed_unread_count() {
        assert_eq!(unread_count(&sample_alerts()), 5);
    }

    #[test]
    fn test_badge_text() {
        assert_eq!(badge_text(0), None);
        assert_eq!(badge_text(5).as_deref(), Some("5"));
        assert_eq!(badge_text(99).as_deref(), Some("99"));
        assert_eq!(badge_text(100).as_deref(), Some("99+"));
    }

    #[test]
    fn test_unread_filter() {
        let alerts = sample_alerts();
        assert_eq!(apply(&alerts, &ListQuery::new("", "unread")).len(), 5);
        assert_eq!(apply(&alerts, &ListQuery::new("", ALL)).len(), 6);
    }

    #[test]
    fn test_mark_one_and_all() {
        let mut alerts = sample_alerts();
        assert!(mark_read(&mut alerts, "n2"));
        assert_eq!(unread_count(&alerts), 4);
        mark_all_read(&mut alerts);
        assert_eq!(unread_count(&alerts), 0);
    }

    #[test]
    fn test_alert_routes() {
        assert_eq!(AlertKind::Deadline.view(), View::RfqList);
        assert_eq!(AlertKind::Message.view(), View::Inbox);
    }
}
