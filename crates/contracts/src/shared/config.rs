//! Site configuration.
//!
//! Constructed once at startup and passed by reference (Leptos context) to
//! the components that need it. Nothing here is mutated after construction.

use serde::{Deserialize, Serialize};

/// Public company details shown in the footer and used by the enquiry
/// submission layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Process-wide site configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub company: CompanyInfo,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            company: CompanyInfo {
                name: "Empowering the Nation".to_string(),
                email: "info@empoweringthenation.co.za".to_string(),
                phone: "012 345 6789".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_company_details() {
        let config = SiteConfig::default();
        assert_eq!(config.company.name, "Empowering the Nation");
        assert!(config.company.email.contains('@'));
    }
}
