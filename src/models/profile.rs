use serde::Serialize;

use crate::models::error::{required, required_email, ValidationError};

/// Company details on the My Company page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyProfile {
    pub name: String,
    pub industry: String,
    pub registration_number: String,
    pub tax_id: String,
    pub address: String,
    pub website: String,
    pub phone: String,
}

impl Default for CompanyProfile {
    fn default() -> Self {
        Self {
            name: "Acme Procurement Ltd.".into(),
            industry: "Manufacturing".into(),
            registration_number: "REG-2019-44721".into(),
            tax_id: "US-84-1234567".into(),
            address: "120 Market Street, San Francisco, CA".into(),
            website: "https://acme-procurement.example".into(),
            phone: "+1-555-0142".into(),
        }
    }
}

impl CompanyProfile {
    /// Normalised copy ready to save; the company name is mandatory.
    pub fn validated(&self) -> Result<Self, ValidationError> {
        Ok(Self {
            name: required(&self.name, "Company name")?,
            industry: self.industry.trim().to_string(),
            registration_number: self.registration_number.trim().to_string(),
            tax_id: self.tax_id.trim().to_string(),
            address: self.address.trim().to_string(),
            website: self.website.trim().to_string(),
            phone: self.phone.trim().to_string(),
        })
    }
}

/// Signed-in user's own details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub full_name: String,
    pub email: String,
    pub job_title: String,
    pub department: String,
    pub phone: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            full_name: "John Buyer".into(),
            email: "john.buyer@company.com".into(),
            job_title: "Senior Procurement Manager".into(),
            department: "Procurement".into(),
            phone: "+1-555-0199".into(),
        }
    }
}

impl UserProfile {
    pub fn validated(&self) -> Result<Self, ValidationError> {
        Ok(Self {
            full_name: required(&self.full_name, "Full name")?,
            email: required_email(&self.email, "Email")?,
            job_title: self.job_title.trim().to_string(),
            department: self.department.trim().to_string(),
            phone: self.phone.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_requires_name() {
        let company = CompanyProfile {
            name: "  ".into(),
            ..CompanyProfile::default()
        };
        assert_eq!(
            company.validated(),
            Err(ValidationError::MissingField("Company name"))
        );
    }

    #[test]
    fn test_company_trims_fields() {
        let company = CompanyProfile {
            name: " Acme ".into(),
            phone: " 123 ".into(),
            ..CompanyProfile::default()
        };
        let saved = company.validated().unwrap();
        assert_eq!(saved.name, "Acme");
        assert_eq!(saved.phone, "123");
    }

    #[test]
    fn test_user_requires_name_and_email() {
        assert!(UserProfile::default().validated().is_ok());
        let user = UserProfile {
            full_name: String::new(),
            ..UserProfile::default()
        };
        assert_eq!(user.validated(), Err(ValidationError::MissingField("Full name")));
        let user = UserProfile {
            email: "nobody".into(),
            ..UserProfile::default()
        };
        assert!(matches!(user.validated(), Err(ValidationError::InvalidEmail(_))));
    }
}
