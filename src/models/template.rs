use chrono::NaiveDate;
use serde::Serialize;

use crate::models::calendar::{display_date, ymd};
use crate::models::listing::{update_by_id, Filterable, Identified, Searchable};
use crate::models::rfq::RfqKind;

pub const TEMPLATE_FILTERS: [&str; 4] = ["all", "product", "services", "projects"];

/// Reusable RFQ skeleton.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RfqTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub kind: RfqKind,
    pub sections: u32,
    pub usage_count: u32,
    pub last_used: Option<NaiveDate>,
}

impl RfqTemplate {
    pub fn last_used_label(&self) -> String {
        self.last_used
            .map_or_else(|| "Never used".to_string(), |d| format!("Last used {}", display_date(d)))
    }

    /// Success banner after the template is used.
    pub fn used_message(&self) -> String {
        format!("Template \"{}\" used", self.name)
    }
}

impl Identified for RfqTemplate {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for RfqTemplate {
    fn haystack(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }
}

impl Filterable for RfqTemplate {
    fn matches_filter(&self, key: &str) -> bool {
        self.kind.filter_key() == key
    }
}

/// Bump the usage counter and stamp `today` as last used.
pub fn use_template(
    templates: &mut [RfqTemplate],
    id: &str,
    today: NaiveDate,
) -> Option<RfqTemplate> {
    let mut used = None;
    update_by_id(templates, id, |template| {
        template.usage_count += 1;
        template.last_used = Some(today);
        used = Some(template.clone());
    });
    used
}

pub fn empty_state_hint(searching: bool) -> &'static str {
    if searching {
        "Try adjusting your search"
    } else {
        "Save an RFQ as a template to reuse it here"
    }
}

pub fn sample_templates() -> Vec<RfqTemplate> {
    let template = |id: &str,
                    name: &str,
                    description: &str,
                    kind,
                    sections: u32,
                    usage_count: u32,
                    last_used: Option<NaiveDate>| {
        RfqTemplate {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            kind,
            sections,
            usage_count,
            last_used,
        }
    };
    vec![
        template(
            "t1",
            "Office Furniture Standard",
            "Desks, chairs and storage with delivery and assembly terms",
            RfqKind::Product,
            6,
            12,
            Some(ymd(2024, 1, 10)),
        ),
        template(
            "t2",
            "IT Hardware Refresh",
            "Laptops, monitors and peripherals with warranty requirements",
            RfqKind::Product,
            8,
            7,
            Some(ymd(2024, 1, 5)),
        ),
        template(
            "t3",
            "Managed IT Services",
            "Annual support contract with SLA and escalation matrix",
            RfqKind::Services,
            9,
            4,
            Some(ymd(2023, 12, 18)),
        ),
        template(
            "t4",
            "Marketing Agency Retainer",
            "Campaign planning and creative services on a monthly retainer",
            RfqKind::Services,
            5,
            2,
            None,
        ),
        template(
            "t5",
            "Facility Renovation",
            "Milestone-based construction project with site visit schedule",
            RfqKind::Projects,
            11,
            1,
            Some(ymd(2023, 11, 30)),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::listing::{apply, ListQuery, ALL};

    #[test]
    fn test_kind_filter() {
        let templates = sample_templates();
        assert_eq!(apply(&templates, &ListQuery::new("", "product")).len(), 2);
        assert_eq!(apply(&templates, &ListQuery::new("", "projects")).len(), 1);
    }

    #[test]
    fn test_search_description() {
        let templates = sample_templates();
        let found = apply(&templates, &ListQuery::new("sla", ALL));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "t3");
    }

    #[test]
    fn test_use_template_increments_count() {
        let mut templates = sample_templates();
        let today = ymd(2024, 1, 16);
        let used = use_template(&mut templates, "t4", today).unwrap();
        assert_eq!(used.usage_count, 3);
        assert_eq!(templates[3].last_used, Some(today));
        assert!(use_template(&mut templates, "missing", today).is_none());
    }

    #[test]
    fn test_banner_does_not_claim_a_new_rfq() {
        let templates = sample_templates();
        let message = templates[0].used_message();
        assert_eq!(message, "Template \"Office Furniture Standard\" used");
        assert!(!message.contains("new RFQ"));
    }

    #[test]
    fn test_last_used_label() {
        let mut template = sample_templates().remove(0);
        template.last_used = None;
        assert_eq!(template.last_used_label(), "Never used");
        template.last_used = Some(ymd(2024, 1, 16));
        let expected = format!("Last used {}", display_date(ymd(2024, 1, 16)));
        assert_eq!(template.last_used_label(), expected);
    }
}
