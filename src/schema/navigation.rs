//! Navigation collections: links, social media and contact entries

use serde::{Deserialize, Serialize};

use super::{require_text, validate_each};
use crate::content::ContentDocument;

/// Optional classification attached to a navigation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Page,
    Category,
    Article,
    Legal,
    External,
}

/// One link in a navigation collection. Collection order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationEntry {
    pub href: String,
    pub text: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<EntryKind>,
}

impl NavigationEntry {
    pub fn new(href: &str, text: &str) -> Self {
        Self {
            href: href.to_string(),
            text: text.to_string(),
            kind: None,
        }
    }

    pub fn check(&self) -> Result<(), String> {
        require_text("href", &self.href)?;
        require_text("text", &self.text)
    }
}

impl ContentDocument for NavigationEntry {
    const SCHEMA: &'static str = "navigation-entry";

    fn validate(&self) -> Result<(), String> {
        self.check()
    }
}

/// How a contact entry is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Address,
    Email,
    Phone,
}

/// A line in the footer contact column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactEntry {
    #[serde(rename = "type")]
    pub kind: ContactKind,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// One or more SVG path definitions separated by `|`
    pub svg_path: String,
}

impl ContactEntry {
    /// Individual icon paths
    pub fn svg_paths(&self) -> Vec<&str> {
        self.svg_path
            .split('|')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }

    /// Link target for entries rendered as links
    pub fn link(&self) -> Option<String> {
        match self.kind {
            ContactKind::Email => Some(
                self.href
                    .clone()
                    .unwrap_or_else(|| format!("mailto:{}", self.value)),
            ),
            ContactKind::Phone => self.href.clone(),
            ContactKind::Address => None,
        }
    }
}

/// A social network profile link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    pub aria_label: String,
    pub svg_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMedia {
    pub title: String,
    pub links: Vec<SocialLink>,
}

/// Every navigation collection shown in the site chrome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterNavigation {
    pub main_nav_items: Vec<NavigationEntry>,
    pub category_items: Vec<NavigationEntry>,
    pub blog_items: Vec<NavigationEntry>,
    pub social_media: SocialMedia,
    pub contact_info: Vec<ContactEntry>,
    pub legal_links: Vec<NavigationEntry>,
}

impl ContentDocument for FooterNavigation {
    const SCHEMA: &'static str = "footer-navigation";

    fn validate(&self) -> Result<(), String> {
        validate_each("mainNavItems", &self.main_nav_items, NavigationEntry::check)?;
        validate_each("categoryItems", &self.category_items, NavigationEntry::check)?;
        validate_each("blogItems", &self.blog_items, NavigationEntry::check)?;
        validate_each("legalLinks", &self.legal_links, NavigationEntry::check)?;
        validate_each("contactInfo", &self.contact_info, |c| {
            require_text("value", &c.value)
        })?;
        validate_each("socialMedia.links", &self.social_media.links, |s| {
            require_text("url", &s.url)?;
            require_text("ariaLabel", &s.aria_label)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_kind_is_optional() {
        let plain: NavigationEntry =
            serde_json::from_str(r#"{"href": "/blog", "text": "Blog"}"#).unwrap();
        assert_eq!(plain, NavigationEntry::new("/blog", "Blog"));

        let legal: NavigationEntry =
            serde_json::from_str(r#"{"href": "/privacy", "text": "Privacidad", "type": "legal"}"#)
                .unwrap();
        assert_eq!(legal.kind, Some(EntryKind::Legal));
    }

    #[test]
    fn test_unknown_contact_kind_rejected() {
        let result = serde_json::from_str::<ContactEntry>(
            r#"{"type": "fax", "value": "555", "svgPath": "M0 0"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_svg_paths_split() {
        let entry: ContactEntry = serde_json::from_str(
            r#"{"type": "address", "value": "CDMX", "svgPath": "M17.657 16.657L13.414 20.9|M15 11a3 3 0 11-6 0"}"#,
        )
        .unwrap();
        assert_eq!(
            entry.svg_paths(),
            vec!["M17.657 16.657L13.414 20.9", "M15 11a3 3 0 11-6 0"]
        );
    }

    #[test]
    fn test_contact_links() {
        let email = ContactEntry {
            kind: ContactKind::Email,
            value: "info@topfinanzas.com".to_string(),
            href: None,
            svg_path: String::new(),
        };
        assert_eq!(email.link().as_deref(), Some("mailto:info@topfinanzas.com"));

        let address = ContactEntry {
            kind: ContactKind::Address,
            value: "Ciudad de México".to_string(),
            href: Some("https://maps.example".to_string()),
            svg_path: String::new(),
        };
        assert_eq!(address.link(), None);
    }
}
