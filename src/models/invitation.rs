use chrono::NaiveDate;
use serde::Serialize;

use crate::models::calendar::ymd;
use crate::models::listing::{update_by_id, Filterable, Identified, Searchable};
use crate::models::task::Priority;

pub const INVITATION_FILTERS: [&str; 4] = ["all", "pending", "accepted", "declined"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InvitationStatus {
    Pending,
    Accepted,
    Declined,
}

impl InvitationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Accepted => "Accepted",
            Self::Declined => "Declined",
        }
    }

    pub const fn filter_key(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Declined => "declined",
        }
    }

    pub const fn badge_class(self) -> &'static str {
        match self {
            Self::Pending => "badge badge--orange",
            Self::Accepted => "badge badge--green",
            Self::Declined => "badge badge--red",
        }
    }
}

/// A task another organisation invited us to take on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invitation {
    pub id: String,
    pub title: String,
    pub description: String,
    pub invited_by: String,
    pub inviter_company: String,
    pub category: String,
    pub priority: Priority,
    pub status: InvitationStatus,
    pub invited_on: NaiveDate,
    pub due: NaiveDate,
    pub estimated_value: Option<String>,
}

impl Identified for Invitation {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for Invitation {
    fn haystack(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.description.as_str(),
            self.invited_by.as_str(),
        ]
    }
}

impl Filterable for Invitation {
    fn matches_filter(&self, key: &str) -> bool {
        self.status.filter_key() == key
    }
}

pub fn pending_count(invitations: &[Invitation]) -> usize {
    invitations
        .iter()
        .filter(|i| i.status == InvitationStatus::Pending)
        .count()
}

/// Accept or decline; only pending invitations change.
pub fn respond(invitations: &mut [Invitation], id: &str, accept: bool) -> bool {
    let mut changed = false;
    update_by_id(invitations, id, |invitation| {
        if invitation.status == InvitationStatus::Pending {
            invitation.status = if accept {
                InvitationStatus::Accepted
            } else {
                InvitationStatus::Declined
            };
            changed = true;
        }
    });
    changed
}

pub fn sample_invitations() -> Vec<Invitation> {
    let invitation = |id: &str,
                      title: &str,
                      description: &str,
                      by: &str,
                      company: &str,
                      category: &str,
                      priority,
                      status,
                      invited_on: NaiveDate,
                      due: NaiveDate,
                      value: &str| Invitation {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        invited_by: by.to_string(),
        inviter_company: company.to_string(),
        category: category.to_string(),
        priority,
        status,
        invited_on,
        due,
        estimated_value: Some(value.to_string()),
    };

    vec![
        invitation(
            "1",
            "Supply Chain Optimization Consultation",
            "Provide expertise on optimizing procurement processes for manufacturing operations",
            "Jennifer Smith",
            "Manufacturing Corp",
            "Consulting",
            Priority::High,
            InvitationStatus::Pending,
            ymd(2024, 1, 15),
            ymd(2024, 2, 15),
            "$25,000",
        ),
        invitation(
            "2",
            "Vendor Assessment for IT Equipment",
            "Evaluate and recommend suppliers for enterprise IT hardware procurement",
            "Robert Johnson",
            "Tech Solutions Inc",
            "Assessment",
            Priority::Medium,
            InvitationStatus::Pending,
            ymd(2024, 1, 14),
            ymd(2024, 1, 30),
            "$15,000",
        ),
        invitation(
            "3",
            "Procurement Process Audit",
            "Conduct comprehensive audit of current procurement workflows and compliance",
            "Maria Garcia",
            "Global Enterprises",
            "Audit",
            Priority::Medium,
            InvitationStatus::Accepted,
            ymd(2024, 1, 12),
            ymd(2024, 2, 28),
            "$40,000",
        ),
        invitation(
            "4",
            "Supplier Negotiation Training",
            "Deliver training workshop on advanced supplier negotiation techniques",
            "David Wilson",
            "Learning Solutions",
            "Training",
            Priority::Low,
            InvitationStatus::Declined,
            ymd(2024, 1, 10),
            ymd(2024, 1, 25),
            "$8,000",
        ),
        invitation(
            "5",
            "Cost Reduction Strategy Development",
            "Develop comprehensive cost reduction strategy for procurement operations",
            "Susan Lee",
            "Efficiency Partners",
            "Strategy",
            Priority::High,
            InvitationStatus::Pending,
            ymd(2024, 1, 13),
            ymd(2024, 3, 1),
            "$35,000",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::listing::{apply, ListQuery, ALL};

    #[test]
    fn test_search_includes_inviter() {
        let invitations = sample_invitations();
        let found = apply(&invitations, &ListQuery::new("maria", ALL));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "3");
    }

    #[test]
    fn test_pending_count() {
        assert_eq!(pending_count(&sample_invitations()), 3);
    }

    #[test]
    fn test_accept_and_decline_pending() {
        let mut invitations = sample_invitations();
        assert!(respond(&mut invitations, "1", true));
        assert!(respond(&mut invitations, "2", false));
        assert_eq!(invitations[0].status, InvitationStatus::Accepted);
        assert_eq!(invitations[1].status, InvitationStatus::Declined);
        assert_eq!(pending_count(&invitations), 1);
    }

    #[test]
    fn test_responding_to_settled_invitation_is_noop() {
        let mut invitations = sample_invitations();
        assert!(!respond(&mut invitations, "4", true));
        assert_eq!(invitations[3].status, InvitationStatus::Declined);
        assert!(!respond(&mut invitations, "missing", true));
    }
}
