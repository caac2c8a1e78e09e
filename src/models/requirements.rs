use serde::Serialize;

use crate::models::error::{required, ValidationError};

/// A document the supplier is asked to provide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentRequirement {
    pub id: String,
    pub name: String,
    pub mandatory: bool,
}

impl DocumentRequirement {
    pub fn new(id: impl Into<String>, name: impl Into<String>, mandatory: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            mandatory,
        }
    }

    pub const fn label(&self) -> &'static str {
        if self.mandatory {
            "Mandatory"
        } else {
            "Optional"
        }
    }
}

/// Requirements the editor opens with.
pub fn default_requirements() -> Vec<DocumentRequirement> {
    vec![
        DocumentRequirement::new("1", "Business License", true),
        DocumentRequirement::new("2", "Tax Certificate", true),
        DocumentRequirement::new("3", "Insurance Certificate", false),
    ]
}

/// Append a new optional requirement named by the trimmed input.
pub fn add_requirement(
    list: &mut Vec<DocumentRequirement>,
    id: impl Into<String>,
    name: &str,
) -> Result<(), ValidationError> {
    let name = required(name, "Document name")?;
    list.push(DocumentRequirement::new(id, name, false));
    Ok(())
}

pub fn remove_requirement(list: &mut Vec<DocumentRequirement>, id: &str) {
    list.retain(|req| req.id != id);
}

pub fn toggle_mandatory(list: &mut [DocumentRequirement], id: &str) {
    if let Some(req) = list.iter_mut().find(|req| req.id == id) {
        req.mandatory = !req.mandatory;
    }
}

pub fn mandatory_count(list: &[DocumentRequirement]) -> usize {
    list.iter().filter(|req| req.mandatory).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let list = default_requirements();
        assert_eq!(list.len(), 3);
        assert_eq!(mandatory_count(&list), 2);
        assert_eq!(list[2].label(), "Optional");
    }

    #[test]
    fn test_add_trims_and_defaults_to_optional() {
        let mut list = default_requirements();
        add_requirement(&mut list, "4", "  ISO 9001 Certificate ").unwrap();
        let added = list.last().unwrap();
        assert_eq!(added.name, "ISO 9001 Certificate");
        assert!(!added.mandatory);
    }

    #[test]
    fn test_add_blank_is_rejected() {
        let mut list = default_requirements();
        assert!(add_requirement(&mut list, "4", "   ").is_err());
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_remove_and_toggle() {
        let mut list = default_requirements();
        toggle_mandatory(&mut list, "3");
        assert!(list[2].mandatory);
        toggle_mandatory(&mut list, "3");
        assert!(!list[2].mandatory);

        remove_requirement(&mut list, "1");
        assert_eq!(list.len(), 2);
        assert!(list.iter().all(|r| r.id != "1"));
    }
}
