//! External image references

use serde::{Deserialize, Serialize};

use super::require_text;
use crate::content::ContentDocument;

/// Descriptive metadata for an image hosted on the media server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaReference {
    pub url: String,
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl MediaReference {
    /// Media is referenced only by absolute URL
    pub fn check(&self, field: &str) -> Result<(), String> {
        let absolute = self.url.starts_with("https://") || self.url.starts_with("http://");
        if !absolute {
            return Err(format!(
                "`{}.url` must be an absolute http(s) URL, got {:?}",
                field, self.url
            ));
        }
        require_text(&format!("{}.alt", field), &self.alt)
    }

    /// `width="..." height="..."` attributes, empty when dimensions are unknown
    pub fn size_attrs(&self) -> String {
        match (self.width, self.height) {
            (Some(w), Some(h)) => format!(r#" width="{}" height="{}""#, w, h),
            (Some(w), None) => format!(r#" width="{}""#, w),
            (None, Some(h)) => format!(r#" height="{}""#, h),
            (None, None) => String::new(),
        }
    }
}

impl ContentDocument for MediaReference {
    const SCHEMA: &'static str = "media";

    fn validate(&self) -> Result<(), String> {
        self.check("media")
    }
}
