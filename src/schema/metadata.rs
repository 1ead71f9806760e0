//! Per-page document metadata

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::require_text;

/// Title, description and keywords for a page's `<head>`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Any further keys become `<meta name=... content=...>` tags, in authored order
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

impl PageMetadata {
    pub fn check(&self) -> Result<(), String> {
        require_text("metadata.title", &self.title)?;
        require_text("metadata.description", &self.description)
    }

    /// Extra string-valued metadata as (name, content) pairs
    pub fn extra_tags(&self) -> Vec<(String, String)> {
        self.extra
            .iter()
            .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
            .collect()
    }
}
