//! Home page content: banner and article cards

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{require_text, validate_each, MediaReference, PageMetadata};
use crate::content::ContentDocument;

/// Byline shown on an article card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleAuthor {
    pub name: String,
    pub avatar: MediaReference,
}

/// A linked article teaser with image, byline, date and view counter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleCard {
    pub href: String,
    pub title: String,
    pub image: MediaReference,
    pub author: ArticleAuthor,
    pub date: NaiveDate,
    pub views: u64,
}

impl ArticleCard {
    pub fn check(&self) -> Result<(), String> {
        require_text("href", &self.href)?;
        require_text("title", &self.title)?;
        self.image.check("image")?;
        self.author.avatar.check("author.avatar")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub title: String,
    /// Subtitle lines, rendered with line breaks between them
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePageContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<PageMetadata>,
    pub banner: Banner,
    pub featured: ArticleCard,
    pub latest: Vec<ArticleCard>,
}

impl ContentDocument for HomePageContent {
    const SCHEMA: &'static str = "home-page";

    fn validate(&self) -> Result<(), String> {
        if let Some(metadata) = &self.metadata {
            metadata.check()?;
        }
        require_text("banner.title", &self.banner.title)?;
        self.featured
            .check()
            .map_err(|e| format!("featured: {}", e))?;
        validate_each("latest", &self.latest, ArticleCard::check)
    }
}
