//! Helper functions for templates
//!
//! URL generation, HTML escaping and text shaping, date and counter formatting.

mod date;
mod html;
mod number;
mod url;

pub use date::*;
pub use html::*;
pub use number::*;
pub use url::*;
