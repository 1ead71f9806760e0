//! Blog article documents

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{require_text, validate_each, MediaReference, NavigationEntry, PageMetadata};
use crate::content::ContentDocument;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostContent {
    pub metadata: PageMetadata,
    pub title: String,
    /// Category link; its text also names the category page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<NavigationEntry>,
    pub author: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub views: u64,
    pub hero_image: MediaReference,
    pub excerpt: String,
    /// Markdown
    pub body: String,
    #[serde(default)]
    pub related: Vec<NavigationEntry>,
}

impl ContentDocument for BlogPostContent {
    const SCHEMA: &'static str = "blog-post";

    fn validate(&self) -> Result<(), String> {
        self.metadata.check()?;
        require_text("title", &self.title)?;
        require_text("body", &self.body)?;
        self.hero_image.check("heroImage")?;
        if let Some(category) = &self.category {
            category.check().map_err(|e| format!("category: {}", e))?;
        }
        validate_each("related", &self.related, NavigationEntry::check)
    }
}
