//! Credit-card product page documents

use serde::{Deserialize, Serialize};

use super::{require_text, validate_each, MediaReference, PageMetadata};
use crate::content::ContentDocument;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardHero {
    pub title: String,
    pub subtitle: String,
    pub image: MediaReference,
}

/// A short benefit callout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardHighlight {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSection {
    pub heading: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallToAction {
    pub text: String,
    pub href: String,
}

/// Everything shown on one credit-card page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCardPageContent {
    pub metadata: PageMetadata,
    pub hero: CardHero,
    #[serde(default)]
    pub highlights: Vec<CardHighlight>,
    #[serde(default)]
    pub sections: Vec<CardSection>,
    pub cta: CallToAction,
    #[serde(default)]
    pub disclaimer: String,
}

impl ContentDocument for CreditCardPageContent {
    const SCHEMA: &'static str = "credit-card-page";

    fn validate(&self) -> Result<(), String> {
        self.metadata.check()?;
        require_text("hero.title", &self.hero.title)?;
        self.hero.image.check("hero.image")?;
        validate_each("sections", &self.sections, |s| require_text("heading", &s.heading))?;
        require_text("cta.text", &self.cta.text)?;
        require_text("cta.href", &self.cta.href)
    }
}
