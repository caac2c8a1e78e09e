use serde::Serialize;

use crate::models::listing::{Filterable, Identified, Searchable};

pub const TEAM_FILTERS: [&str; 5] = ["all", "admin", "buyer", "approver", "viewer"];

/// Names offered by the team pickers.
pub const TEAM_MEMBERS: [&str; 6] = [
    "John Buyer",
    "Sarah Johnson",
    "Mike Davis",
    "Lisa Wilson",
    "Emma Martinez",
    "David Brown",
];

pub fn team_member_names() -> Vec<String> {
    TEAM_MEMBERS.iter().map(ToString::to_string).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Role {
    Admin,
    Buyer,
    Approver,
    Viewer,
}

impl Role {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Buyer => "Buyer",
            Self::Approver => "Approver",
            Self::Viewer => "Viewer",
        }
    }

    pub const fn filter_key(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Buyer => "buyer",
            Self::Approver => "approver",
            Self::Viewer => "viewer",
        }
    }

    pub const fn badge_class(self) -> &'static str {
        match self {
            Self::Admin => "badge badge--purple",
            Self::Buyer => "badge badge--blue",
            Self::Approver => "badge badge--green",
            Self::Viewer => "badge badge--gray",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub department: String,
    pub active: bool,
}

impl Identified for TeamMember {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for TeamMember {
    fn haystack(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.role.label()]
    }
}

impl Filterable for TeamMember {
    fn matches_filter(&self, key: &str) -> bool {
        self.role.filter_key() == key
    }
}

/// First letter of each word, upper-cased: `"Mike Davis"` gives `"MD"`.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Working copy of a team picker's checkboxes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamSelection {
    selected: Vec<String>,
}

impl TeamSelection {
    pub fn new(initial: &[String]) -> Self {
        Self {
            selected: initial.to_vec(),
        }
    }

    pub fn contains(&self, member: &str) -> bool {
        self.selected.iter().any(|m| m == member)
    }

    /// Add or remove `member`, keeping the order members were picked in.
    pub fn toggle(&mut self, member: &str) {
        if let Some(pos) = self.selected.iter().position(|m| m == member) {
            self.selected.remove(pos);
        } else {
            self.selected.push(member.to_string());
        }
    }

    pub fn members(&self) -> &[String] {
        &self.selected
    }

    pub fn into_members(self) -> Vec<String> {
        self.selected
    }
}

pub fn sample_team() -> Vec<TeamMember> {
    let member = |id: &str,
                  name: &str,
                  email: &str,
                  role,
                  department: &str,
                  active: bool| TeamMember {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        department: department.to_string(),
        active,
    };
    vec![
        member("1", "John Buyer", "john.buyer@company.com", Role::Admin, "Procurement", true),
        member("2", "Sarah Johnson", "sarah.johnson@company.com", Role::Buyer, "Procurement", true),
        member("3", "Mike Davis", "mike.davis@company.com", Role::Approver, "Finance", true),
        member("4", "Lisa Wilson", "lisa.wilson@company.com", Role::Buyer, "Operations", true),
        member(
            "5",
            "Emma Martinez",
            "emma.martinez@company.com",
            Role::Buyer,
            "Supplier Relations",
            true,
        ),
        member("6", "David Brown", "david.brown@company.com", Role::Viewer, "Logistics", false),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::listing::{apply, ListQuery, ALL};

    #[test]
    fn test_initials() {
        assert_eq!(initials("Mike Davis"), "MD");
        assert_eq!(initials("emma  de la cruz"), "EDLC");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_selection_toggle_round_trip() {
        let mut selection = TeamSelection::new(&["Mike Davis".to_string()]);
        assert!(selection.contains("Mike Davis"));
        selection.toggle("Lisa Wilson");
        selection.toggle("Mike Davis");
        assert_eq!(selection.members(), ["Lisa Wilson".to_string()]);
        selection.toggle("Lisa Wilson");
        assert!(selection.into_members().is_empty());
    }

    #[test]
    fn test_search_and_role_filter() {
        let team = sample_team();
        assert_eq!(apply(&team, &ListQuery::new("", "buyer")).len(), 3);
        assert_eq!(apply(&team, &ListQuery::new("approver", ALL)).len(), 1);
        assert_eq!(apply(&team, &ListQuery::new("lisa.wilson@", ALL))[0].id, "4");
    }

    #[test]
    fn test_roster_names_match_picker() {
        let names = team_member_names();
        assert!(sample_team().iter().all(|m| names.contains(&m.name)));
    }
}
