use serde::Serialize;

use crate::models::error::{required, required_email, ValidationError};
use crate::models::listing::{
    sort_records, update_by_id, Filterable, Identified, Searchable, SortDirection, ALL,
};
use crate::models::requirements::DocumentRequirement;

/// Minimum query length before the marketplace is searched.
pub const MIN_SEARCH_CHARS: usize = 2;

/// Debounce between the last keystroke and the marketplace search.
pub const SEARCH_DEBOUNCE_MS: i32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SupplierType {
    Distributor,
    Manufacturer,
    ServiceProvider,
    Retailer,
    Wholesaler,
}

impl SupplierType {
    pub const ALL: [Self; 5] = [
        Self::Distributor,
        Self::Manufacturer,
        Self::ServiceProvider,
        Self::Retailer,
        Self::Wholesaler,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Distributor => "Distributor",
            Self::Manufacturer => "Manufacturer",
            Self::ServiceProvider => "Service Provider",
            Self::Retailer => "Retailer",
            Self::Wholesaler => "Wholesaler",
        }
    }

    pub const fn filter_key(self) -> &'static str {
        match self {
            Self::Distributor => "distributor",
            Self::Manufacturer => "manufacturer",
            Self::ServiceProvider => "service-provider",
            Self::Retailer => "retailer",
            Self::Wholesaler => "wholesaler",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.filter_key() == key)
    }

    pub const fn badge_class(self) -> &'static str {
        match self {
            Self::Distributor => "badge badge--blue",
            Self::Manufacturer => "badge badge--green",
            Self::ServiceProvider => "badge badge--purple",
            Self::Retailer => "badge badge--orange",
            Self::Wholesaler => "badge badge--indigo",
        }
    }
}

/// Relationship state of a supplier on our roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum SupplierStanding {
    #[default]
    Approved,
    CreditPending,
    CreditConfirmed,
}

impl SupplierStanding {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Approved => "Approved",
            Self::CreditPending => "Credit Pending",
            Self::CreditConfirmed => "Credit Confirmed",
        }
    }

    pub const fn badge_class(self) -> &'static str {
        match self {
            Self::Approved => "badge badge--green",
            Self::CreditPending => "badge badge--yellow",
            Self::CreditConfirmed => "badge badge--blue",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Approved => {
                "Supplier can immediately receive RFQs and participate in procurement processes."
            }
            Self::CreditPending => {
                "Supplier will receive a confirmation email and must accept before becoming active."
            }
            Self::CreditConfirmed => "Supplier has confirmed their credit status.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub city: String,
    pub country: String,
}

impl Location {
    pub fn new(city: &str, country: &str) -> Self {
        Self {
            city: city.to_string(),
            country: country.to_string(),
        }
    }

    pub fn display(&self) -> String {
        match (self.city.is_empty(), self.country.is_empty()) {
            (true, true) => String::new(),
            (false, true) => self.city.clone(),
            (true, false) => self.country.clone(),
            (false, false) => format!("{}, {}", self.city, self.country),
        }
    }
}

/// Contact details shared by roster and marketplace suppliers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupplierContact {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub contact_person: String,
    pub location: Location,
    pub category: String,
    pub sub_category: String,
    pub kind: SupplierType,
}

/// A supplier on our roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Supplier {
    pub id: String,
    pub contact: SupplierContact,
    pub standing: SupplierStanding,
    pub documents_on_file: bool,
    pub favorite: bool,
    pub documents: Vec<DocumentRequirement>,
}

impl Supplier {
    pub fn onboard(
        id: impl Into<String>,
        contact: SupplierContact,
        standing: SupplierStanding,
        documents_on_file: bool,
    ) -> Self {
        Self {
            id: id.into(),
            contact,
            standing,
            documents_on_file,
            favorite: false,
            documents: Vec::new(),
        }
    }
}

impl Identified for Supplier {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for Supplier {
    fn haystack(&self) -> Vec<&str> {
        vec![
            self.contact.name.as_str(),
            self.contact.location.city.as_str(),
            self.contact.location.country.as_str(),
            self.contact.contact_person.as_str(),
        ]
    }
}

impl Filterable for Supplier {
    fn matches_filter(&self, key: &str) -> bool {
        self.contact.kind.filter_key() == key
    }
}

pub fn supplier_filters() -> Vec<&'static str> {
    std::iter::once(ALL)
        .chain(SupplierType::ALL.iter().map(|t| t.filter_key()))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SupplierSort {
    #[default]
    Name,
    Location,
}

impl SupplierSort {
    pub const ALL: [Self; 2] = [Self::Name, Self::Location];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Location => "Location",
        }
    }
}

pub fn sort_suppliers(suppliers: &mut [Supplier], sort: SupplierSort, direction: SortDirection) {
    match sort {
        SupplierSort::Name => sort_records(suppliers, |s| s.contact.name.to_lowercase(), direction),
        SupplierSort::Location => sort_records(
            suppliers,
            |s| s.contact.location.display().to_lowercase(),
            direction,
        ),
    }
}

pub fn toggle_favorite(suppliers: &mut [Supplier], id: &str) -> bool {
    update_by_id(suppliers, id, |s| s.favorite = !s.favorite)
}

/// A supplier listed in the shared marketplace database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryEntry {
    pub id: String,
    pub contact: SupplierContact,
}

/// Case-insensitive match on name, city, country or type. Queries shorter than
/// [`MIN_SEARCH_CHARS`] return nothing.
pub fn marketplace_search(directory: &[DirectoryEntry], query: &str) -> Vec<DirectoryEntry> {
    if query.chars().count() < MIN_SEARCH_CHARS {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    directory
        .iter()
        .filter(|entry| {
            let c = &entry.contact;
            [
                c.name.as_str(),
                c.location.city.as_str(),
                c.location.country.as_str(),
                c.kind.label(),
            ]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

pub fn should_search(query: &str) -> bool {
    query.chars().count() >= MIN_SEARCH_CHARS
}

/// Steps of the add-supplier wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardView {
    #[default]
    Options,
    Scan,
    Marketplace,
    Manual,
    Assign,
}

impl WizardView {
    pub const ENTRY_POINTS: [Self; 3] = [Self::Scan, Self::Marketplace, Self::Manual];

    pub const fn title(self) -> &'static str {
        match self {
            Self::Options => "Add Supplier",
            Self::Scan => "Scan Business Card",
            Self::Marketplace => "Search Marketplace",
            Self::Manual => "Add Manually",
            Self::Assign => "Assign Supplier",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Options => "Choose how to add a supplier",
            Self::Scan => "Scan a business card to extract supplier information",
            Self::Marketplace => "Find suppliers from our marketplace database",
            Self::Manual => "Enter supplier information manually",
            Self::Assign => "Set the supplier's standing",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Options => "➕",
            Self::Scan => "📇",
            Self::Marketplace => "🏪",
            Self::Manual => "✎",
            Self::Assign => "🛡",
        }
    }

    /// Where the back arrow leads.
    pub const fn back(self) -> Self {
        match self {
            Self::Assign => Self::Marketplace,
            _ => Self::Options,
        }
    }
}

/// Standing chosen on the assign step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Assignment {
    pub standing: SupplierStanding,
    pub request_documents: bool,
}

impl Assignment {
    pub const CHOICES: [SupplierStanding; 2] =
        [SupplierStanding::Approved, SupplierStanding::CreditPending];
}

/// What the add-supplier wizard hands back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupplierDraft {
    pub contact: SupplierContact,
    pub standing: SupplierStanding,
    pub documents_on_file: bool,
}

impl SupplierDraft {
    pub const fn new(contact: SupplierContact, assignment: Assignment) -> Self {
        Self {
            contact,
            standing: assignment.standing,
            documents_on_file: assignment.request_documents,
        }
    }

    pub fn into_supplier(self, id: impl Into<String>) -> Supplier {
        Supplier::onboard(id, self.contact, self.standing, self.documents_on_file)
    }
}

/// Raw input of the manual entry form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ManualSupplierForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub contact_person: String,
    pub city: String,
    pub country: String,
    pub category: String,
    pub kind: Option<SupplierType>,
}

impl ManualSupplierForm {
    pub fn submit(&self) -> Result<SupplierContact, ValidationError> {
        Ok(SupplierContact {
            name: required(&self.name, "Supplier name")?,
            email: required_email(&self.email, "Email")?,
            phone: self.phone.trim().to_string(),
            contact_person: self.contact_person.trim().to_string(),
            location: Location::new(self.city.trim(), self.country.trim()),
            category: self.category.trim().to_string(),
            sub_category: String::new(),
            kind: self.kind.unwrap_or(SupplierType::Distributor),
        })
    }
}

pub fn empty_state_hint(searching: bool) -> &'static str {
    if searching {
        "Try adjusting your search"
    } else {
        "Add your first supplier to get started"
    }
}

#[allow(clippy::too_many_arguments)]
fn contact(
    name: &str,
    email: &str,
    phone: &str,
    person: &str,
    (city, country): (&str, &str),
    category: &str,
    sub_category: &str,
    kind: SupplierType,
) -> SupplierContact {
    SupplierContact {
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        contact_person: person.to_string(),
        location: Location::new(city, country),
        category: category.to_string(),
        sub_category: sub_category.to_string(),
        kind,
    }
}

pub fn sample_directory() -> Vec<DirectoryEntry> {
    vec![
        DirectoryEntry {
            id: "db1".into(),
            contact: contact(
                "Global Tech Solutions",
                "contact@globaltech.com",
                "+1-555-0100",
                "Alice Johnson",
                ("San Francisco", "USA"),
                "Technology",
                "Hardware",
                SupplierType::Distributor,
            ),
        },
        DirectoryEntry {
            id: "db2".into(),
            contact: contact(
                "Premium Manufacturing Co.",
                "info@premiummfg.com",
                "+1-555-0200",
                "Bob Wilson",
                ("Detroit", "USA"),
                "Manufacturing",
                "Components",
                SupplierType::Manufacturer,
            ),
        },
        DirectoryEntry {
            id: "db3".into(),
            contact: contact(
                "Elite Services Group",
                "hello@eliteservices.com",
                "+1-555-0300",
                "Carol Davis",
                ("New York", "USA"),
                "Services",
                "Consulting",
                SupplierType::ServiceProvider,
            ),
        },
    ]
}

pub fn sample_suppliers() -> Vec<Supplier> {
    let supplier = |id: &str,
                    contact: SupplierContact,
                    standing,
                    on_file: bool,
                    favorite: bool| Supplier {
        favorite,
        ..Supplier::onboard(id, contact, standing, on_file)
    };

    vec![
        supplier(
            "s1",
            contact(
                "TechCorp Industries",
                "sales@techcorp.com",
                "+1-555-1100",
                "Sarah Johnson",
                ("San Jose", "USA"),
                "Technology",
                "Office Equipment",
                SupplierType::Manufacturer,
            ),
            SupplierStanding::Approved,
            true,
            true,
        ),
        supplier(
            "s2",
            contact(
                "Global Supply Co.",
                "procurement@globalsupply.com",
                "+1-555-1200",
                "Tom Baker",
                ("New York", "USA"),
                "Services",
                "IT Support",
                SupplierType::ServiceProvider,
            ),
            SupplierStanding::CreditConfirmed,
            true,
            false,
        ),
        supplier(
            "s3",
            contact(
                "Innovation Partners",
                "quotes@innovationpartners.com",
                "+1-555-1300",
                "Nina Patel",
                ("Austin", "USA"),
                "Marketing",
                "Campaigns",
                SupplierType::ServiceProvider,
            ),
            SupplierStanding::Approved,
            false,
            true,
        ),
        supplier(
            "s4",
            contact(
                "MegaManuf Inc.",
                "orders@megamanuf.com",
                "+1-555-1400",
                "Carlos Ruiz",
                ("Chicago", "USA"),
                "Manufacturing",
                "Raw Materials",
                SupplierType::Wholesaler,
            ),
            SupplierStanding::CreditPending,
            false,
            false,
        ),
        supplier(
            "s5",
            contact(
                "Quality Components",
                "info@qualitycomponents.com",
                "+1-555-1500",
                "Grace Kim",
                ("Denver", "USA"),
                "Manufacturing",
                "Components",
                SupplierType::Distributor,
            ),
            SupplierStanding::Approved,
            true,
            false,
        ),
        supplier(
            "s6",
            contact(
                "Northern Office Retail",
                "hello@northernoffice.ca",
                "+1-555-1600",
                "Liam Scott",
                ("Toronto", "Canada"),
                "Office Supplies",
                "Stationery",
                SupplierType::Retailer,
            ),
            SupplierStanding::CreditPending,
            false,
            false,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::listing::{apply, ListQuery};

    fn names(suppliers: &[Supplier]) -> Vec<&str> {
        suppliers.iter().map(|s| s.contact.name.as_str()).collect()
    }

    #[test]
    fn test_marketplace_needs_two_characters() {
        let directory = sample_directory();
        assert!(marketplace_search(&directory, "").is_empty());
        assert!(marketplace_search(&directory, "g").is_empty());
        assert!(!should_search("g"));
        assert!(should_search("gl"));
    }

    #[test]
    fn test_marketplace_matches_name_city_country_type() {
        let directory = sample_directory();
        assert_eq!(marketplace_search(&directory, "DETROIT")[0].id, "db2");
        assert_eq!(marketplace_search(&directory, "service provider")[0].id, "db3");
        assert_eq!(marketplace_search(&directory, "global")[0].id, "db1");
        assert_eq!(marketplace_search(&directory, "usa").len(), 3);
        // Contact person is not part of the marketplace search
        assert!(marketplace_search(&directory, "alice").is_empty());
    }

    #[test]
    fn test_roster_search_and_type_filter() {
        let suppliers = sample_suppliers();
        let by_country = apply(&suppliers, &ListQuery::new("canada", ALL));
        assert_eq!(names(&by_country), vec!["Northern Office Retail"]);
        let by_contact = apply(&suppliers, &ListQuery::new("nina", ALL));
        assert_eq!(names(&by_contact), vec!["Innovation Partners"]);
        assert_eq!(apply(&suppliers, &ListQuery::new("", "service-provider")).len(), 2);
    }

    #[test]
    fn test_filters_cover_every_type() {
        let filters = supplier_filters();
        assert_eq!(filters.len(), 6);
        assert_eq!(filters[0], ALL);
        for key in &filters[1..] {
            assert!(SupplierType::from_key(key).is_some(), "{key}");
        }
    }

    #[test]
    fn test_sort_by_name_and_location() {
        let mut suppliers = sample_suppliers();
        sort_suppliers(&mut suppliers, SupplierSort::Name, SortDirection::Ascending);
        assert_eq!(names(&suppliers)[0], "Global Supply Co.");

        sort_suppliers(&mut suppliers, SupplierSort::Location, SortDirection::Ascending);
        assert_eq!(suppliers[0].contact.location.city, "Austin");
        sort_suppliers(&mut suppliers, SupplierSort::Location, SortDirection::Descending);
        assert_eq!(suppliers[0].contact.location.city, "Toronto");
    }

    #[test]
    fn test_toggle_favorite() {
        let mut suppliers = sample_suppliers();
        assert!(toggle_favorite(&mut suppliers, "s2"));
        assert!(suppliers[1].favorite);
        assert!(toggle_favorite(&mut suppliers, "s2"));
        assert!(!suppliers[1].favorite);
        assert!(!toggle_favorite(&mut suppliers, "nope"));
    }

    #[test]
    fn test_manual_form_requires_name_and_email() {
        let mut form = ManualSupplierForm::default();
        assert_eq!(form.submit(), Err(ValidationError::MissingField("Supplier name")));
        form.name = "Acme".into();
        assert_eq!(form.submit(), Err(ValidationError::MissingField("Email")));
        form.email = "acme".into();
        assert!(matches!(form.submit(), Err(ValidationError::InvalidEmail(_))));
        form.email = "sales@acme.com".into();
        form.city = "Lyon".into();
        let contact = form.submit().unwrap();
        assert_eq!(contact.location.display(), "Lyon");
        assert_eq!(contact.kind, SupplierType::Distributor);
    }

    #[test]
    fn test_onboarded_supplier_defaults() {
        let entry = sample_directory().remove(0);
        let supplier =
            Supplier::onboard("n1", entry.contact, SupplierStanding::CreditPending, true);
        assert!(!supplier.favorite);
        assert!(supplier.documents.is_empty());
        assert_eq!(supplier.standing.label(), "Credit Pending");
    }

    #[test]
    fn test_draft_carries_assignment() {
        let entry = sample_directory().remove(1);
        let assignment = Assignment {
            standing: SupplierStanding::CreditPending,
            request_documents: true,
        };
        let supplier = SupplierDraft::new(entry.contact, assignment).into_supplier("n2");
        assert_eq!(supplier.contact.name, "Premium Manufacturing Co.");
        assert_eq!(supplier.standing, SupplierStanding::CreditPending);
        assert!(supplier.documents_on_file);
    }

    #[test]
    fn test_wizard_back_navigation() {
        assert_eq!(WizardView::Assign.back(), WizardView::Marketplace);
        assert_eq!(WizardView::Manual.back(), WizardView::Options);
    }
}
