//! Site chrome: header and footer view models built from content documents

mod footer;
mod header;

pub use footer::{ContactView, FooterView, LegalLinkView};
pub use header::{HeaderItem, HeaderView};

use serde::Serialize;

use crate::schema::MediaReference;

/// An image ready for a template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageView {
    pub url: String,
    pub alt: String,
    /// Pre-rendered ` width=".." height=".."`, possibly empty
    pub size_attrs: String,
}

impl From<&MediaReference> for ImageView {
    fn from(media: &MediaReference) -> Self {
        Self {
            url: media.url.clone(),
            alt: media.alt.clone(),
            size_attrs: media.size_attrs(),
        }
    }
}
