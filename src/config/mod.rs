//! Configuration module

mod site;

pub use site::ContentConfig;
pub use site::DocumentsConfig;
pub use site::FontConfig;
pub use site::FooterConfig;
pub use site::LabelsConfig;
pub use site::NavFilterConfig;
pub use site::SiteConfig;
pub use site::ViewportConfig;
