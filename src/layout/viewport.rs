//! Viewport classification

use serde::Serialize;

/// Widths strictly below this are mobile
pub const MOBILE_BREAKPOINT: u32 = 768;

/// Observed viewport of the client a page is rendered for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
}

impl Viewport {
    pub fn new(width: u32) -> Self {
        Self { width }
    }

    /// Layout variant for this width at the given breakpoint
    pub fn layout(&self, breakpoint: u32) -> LayoutVariant {
        LayoutVariant::for_width(self.width, breakpoint)
    }
}

/// The two pre-defined layouts a page can switch between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutVariant {
    Mobile,
    Desktop,
}

impl LayoutVariant {
    /// `width < breakpoint` is mobile; the breakpoint itself is desktop
    pub fn for_width(width: u32, breakpoint: u32) -> Self {
        if width < breakpoint {
            LayoutVariant::Mobile
        } else {
            LayoutVariant::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        self == LayoutVariant::Mobile
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LayoutVariant::Mobile => "mobile",
            LayoutVariant::Desktop => "desktop",
        }
    }

    /// Class list of the home page banner section
    pub fn banner_class(self) -> String {
        format!("banner-section banner-section-{}", self.as_str())
    }
}

/// Environment signals a render pass depends on, passed in explicitly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderEnv {
    pub viewport: Viewport,
    pub breakpoint: u32,
}

impl RenderEnv {
    pub fn new(width: u32, breakpoint: u32) -> Self {
        Self {
            viewport: Viewport::new(width),
            breakpoint,
        }
    }

    pub fn layout(&self) -> LayoutVariant {
        self.viewport.layout(self.breakpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_boundary() {
        assert_eq!(LayoutVariant::for_width(0, 768), LayoutVariant::Mobile);
        assert_eq!(LayoutVariant::for_width(767, 768), LayoutVariant::Mobile);
        assert_eq!(LayoutVariant::for_width(768, 768), LayoutVariant::Desktop);
        assert_eq!(LayoutVariant::for_width(1920, 768), LayoutVariant::Desktop);
    }

    #[test]
    fn test_banner_class() {
        assert_eq!(
            RenderEnv::new(767, MOBILE_BREAKPOINT).layout().banner_class(),
            "banner-section banner-section-mobile"
        );
        assert_eq!(
            RenderEnv::new(768, MOBILE_BREAKPOINT).layout().banner_class(),
            "banner-section banner-section-desktop"
        );
    }

    #[test]
    fn test_custom_breakpoint() {
        let env = RenderEnv::new(700, 640);
        assert_eq!(env.layout(), LayoutVariant::Desktop);
        assert!(Viewport::new(639).layout(640).is_mobile());
    }
}
