//! Footer copy: column headings and legal text

use serde::{Deserialize, Serialize};

use super::require_text;
use crate::content::ContentDocument;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterHeadings {
    pub navigate: String,
    pub categories: String,
    pub contact: String,
    #[serde(default = "default_popular_heading")]
    pub popular: String,
}

fn default_popular_heading() -> String {
    "Popular Articles".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalText {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disclaimer {
    pub label: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalTexts {
    pub full_copyright: LegalText,
    pub disclaimer: Disclaimer,
    pub copyright: LegalText,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfo {
    pub product_label: String,
}

/// Text content of the site footer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterContent {
    pub headings: FooterHeadings,
    pub legal: LegalTexts,
    pub company_info: CompanyInfo,
}

impl ContentDocument for FooterContent {
    const SCHEMA: &'static str = "footer-content";

    fn validate(&self) -> Result<(), String> {
        require_text("headings.navigate", &self.headings.navigate)?;
        require_text("headings.categories", &self.headings.categories)?;
        require_text("headings.contact", &self.headings.contact)?;
        require_text("legal.copyright.text", &self.legal.copyright.text)
    }
}
