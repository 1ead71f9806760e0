//! Content module - the content store and the generic typed loader

mod format;
mod markdown;
mod store;

pub use format::ContentFormat;
pub use markdown::MarkdownRenderer;
pub use store::{slug_of, CachePolicy, ContentStore};

use serde::de::DeserializeOwned;

/// A structured document whose shape is known at the call site.
///
/// Deserialization checks structure; `validate` adds the semantic checks serde
/// cannot express. Either failing makes the load a schema mismatch.
pub trait ContentDocument: DeserializeOwned {
    /// Schema name used in error messages
    const SCHEMA: &'static str;

    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Untyped documents, for listing and checking the store
impl ContentDocument for serde_json::Value {
    const SCHEMA: &'static str = "any";
}
