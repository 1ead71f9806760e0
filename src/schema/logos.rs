//! Brand logos

use serde::{Deserialize, Serialize};

use super::MediaReference;
use crate::content::ContentDocument;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Logos {
    /// Shown on dark backgrounds (footer)
    pub white_logo: MediaReference,
    /// Shown on light backgrounds (header)
    pub color_logo: MediaReference,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<MediaReference>,
}

impl ContentDocument for Logos {
    const SCHEMA: &'static str = "logos";

    fn validate(&self) -> Result<(), String> {
        self.white_logo.check("whiteLogo")?;
        self.color_logo.check("colorLogo")?;
        match &self.favicon {
            Some(favicon) => favicon.check("favicon"),
            None => Ok(()),
        }
    }
}
