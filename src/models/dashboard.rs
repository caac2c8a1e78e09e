use chrono::NaiveDate;
use serde::Serialize;

use crate::models::calendar::ymd;

/// Suppliers shown in the dashboard's top list.
pub const TOP_SUPPLIER_COUNT: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Kpi {
    pub label: &'static str,
    pub value: &'static str,
    pub accent: &'static str,
}

pub const KPIS: [Kpi; 4] = [
    Kpi {
        label: "Total RFQs",
        value: "147",
        accent: "blue",
    },
    Kpi {
        label: "Total RFQ Value",
        value: "$2.4M",
        accent: "green",
    },
    Kpi {
        label: "Vendors Invited",
        value: "89",
        accent: "purple",
    },
    Kpi {
        label: "Quotations Received",
        value: "234",
        accent: "orange",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Standing {
    Preferred,
    Credit,
}

impl Standing {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Preferred => "Preferred",
            Self::Credit => "Credit",
        }
    }

    pub const fn badge_class(self) -> &'static str {
        match self {
            Self::Preferred => "badge badge--green",
            Self::Credit => "badge badge--blue",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupplierSummary {
    pub name: &'static str,
    pub kind: &'static str,
    pub location: &'static str,
    pub standing: Standing,
    pub favorite: bool,
}

pub fn top_suppliers() -> Vec<SupplierSummary> {
    use Standing::{Credit, Preferred};
    let rows = [
        ("TechCorp Industries", "Product", "CA, USA", Preferred, true),
        ("Global Supply Co.", "Service", "NY, USA", Credit, false),
        ("Innovation Partners", "Freelancer", "TX, USA", Preferred, true),
        ("MegaManuf Inc.", "Product", "IL, USA", Preferred, false),
        ("Swift Logistics", "Service", "FL, USA", Credit, false),
        ("Design Masters", "Freelancer", "WA, USA", Preferred, true),
        ("Quality Components", "Product", "CO, USA", Credit, false),
        ("Expert Consultants", "Service", "MA, USA", Preferred, true),
        ("Creative Solutions", "Freelancer", "OR, USA", Credit, false),
        ("Reliable Parts Co.", "Product", "AZ, USA", Preferred, false),
    ];
    rows.into_iter()
        .take(TOP_SUPPLIER_COUNT)
        .map(|(name, kind, location, standing, favorite)| SupplierSummary {
            name,
            kind,
            location,
            standing,
            favorite,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuotationSummary {
    pub rfq_title: &'static str,
    pub supplier: &'static str,
    pub value: &'static str,
    pub status: &'static str,
    pub badge_class: &'static str,
    pub date: NaiveDate,
}

impl QuotationSummary {
    /// Title without the trailing `RFQ-YYYY-NNN` reference.
    pub fn display_title(&self) -> &str {
        strip_rfq_number(self.rfq_title)
    }
}

/// Drop an `RFQ-` reference (and whatever follows it) from a title.
pub fn strip_rfq_number(title: &str) -> &str {
    title
        .find("RFQ-")
        .map_or(title, |index| title[..index].trim_end())
}

pub fn latest_quotations() -> Vec<QuotationSummary> {
    let row = |rfq_title, supplier, value, status: &'static str, date| QuotationSummary {
        rfq_title,
        supplier,
        value,
        status,
        badge_class: match status {
            "Submitted" => "badge badge--green",
            "Accepted" => "badge badge--blue",
            _ => "badge badge--yellow",
        },
        date,
    };
    vec![
        row(
            "Office Equipment RFQ-2024-001",
            "TechCorp Industries",
            "$45,000",
            "Submitted",
            ymd(2024, 1, 15),
        ),
        row(
            "IT Services RFQ-2024-002",
            "Global Supply Co.",
            "$78,500",
            "Pending",
            ymd(2024, 1, 14),
        ),
        row(
            "Marketing Campaign RFQ-2024-003",
            "Innovation Partners",
            "$32,000",
            "Accepted",
            ymd(2024, 1, 13),
        ),
        row(
            "Manufacturing Materials RFQ-2024-004",
            "MegaManuf Inc.",
            "$125,000",
            "Submitted",
            ymd(2024, 1, 12),
        ),
        row(
            "Logistics Services RFQ-2024-005",
            "Swift Logistics",
            "$67,200",
            "Pending",
            ymd(2024, 1, 11),
        ),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AlertTone {
    Success,
    Info,
    Warning,
}

impl AlertTone {
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Success => "✔",
            Self::Info => "ℹ",
            Self::Warning => "⚠",
        }
    }

    pub const fn class(self) -> &'static str {
        match self {
            Self::Success => "alert alert--success",
            Self::Info => "alert alert--info",
            Self::Warning => "alert alert--warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardAlert {
    pub message: &'static str,
    pub time: &'static str,
    pub tone: AlertTone,
    pub unread: bool,
}

pub fn dashboard_alerts() -> Vec<DashboardAlert> {
    vec![
        DashboardAlert {
            message: "New quotation received from TechCorp Industries",
            time: "2 hours ago",
            tone: AlertTone::Success,
            unread: true,
        },
        DashboardAlert {
            message: "Supplier Global Supply Co. updated their profile",
            time: "4 hours ago",
            tone: AlertTone::Info,
            unread: true,
        },
        DashboardAlert {
            message: "RFQ deadline approaching for Marketing Campaign",
            time: "1 day ago",
            tone: AlertTone::Warning,
            unread: false,
        },
    ]
}

/// Reporting window shown above the KPI tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl Default for DateRange {
    fn default() -> Self {
        Self {
            from: ymd(2024, 1, 1),
            to: ymd(2024, 1, 31),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_suppliers_capped() {
        let suppliers = top_suppliers();
        assert_eq!(suppliers.len(), TOP_SUPPLIER_COUNT);
        assert_eq!(suppliers[0].name, "TechCorp Industries");
        assert_eq!(suppliers[7].name, "Expert Consultants");
    }

    #[test]
    fn test_strip_rfq_number() {
        assert_eq!(strip_rfq_number("IT Services RFQ-2024-002"), "IT Services");
        assert_eq!(strip_rfq_number("No reference"), "No reference");
        assert_eq!(strip_rfq_number("RFQ-2024-009"), "");
    }

    #[test]
    fn test_latest_quotations_display() {
        let quotes = latest_quotations();
        assert_eq!(quotes.len(), 5);
        assert_eq!(quotes[3].display_title(), "Manufacturing Materials");
        assert_eq!(quotes[2].badge_class, "badge badge--blue");
    }

    #[test]
    fn test_default_range_is_january() {
        let range = DateRange::default();
        assert!(range.from < range.to);
    }
}
