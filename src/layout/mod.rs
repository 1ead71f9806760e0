//! Presentation rules shared by the page renderers
//!
//! - Viewport classification and the layout variant it selects
//! - The viewport signal pages subscribe to for re-rendering
//! - Path predicates used to filter navigation collections

mod filter;
mod signal;
mod viewport;

pub use filter::{filter_entries, PathFilter};
pub use signal::{ViewportSignal, ViewportSubscription};
pub use viewport::{LayoutVariant, RenderEnv, Viewport, MOBILE_BREAKPOINT};
