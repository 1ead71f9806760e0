//! Header view

use serde::Serialize;

use super::ImageView;
use crate::schema::{FooterNavigation, Logos};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderItem {
    pub href: String,
    pub text: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderView {
    pub logo: ImageView,
    pub items: Vec<HeaderItem>,
}

impl HeaderView {
    /// Main navigation with the entry for `current_path` marked active
    pub fn build(navigation: &FooterNavigation, logos: &Logos, current_path: &str) -> Self {
        let items = navigation
            .main_nav_items
            .iter()
            .map(|entry| HeaderItem {
                href: entry.href.clone(),
                text: entry.text.clone(),
                active: is_active(&entry.href, current_path),
            })
            .collect();

        Self {
            logo: ImageView::from(&logos.color_logo),
            items,
        }
    }
}

/// `/` only matches itself; other links match their own subtree
pub fn is_active(href: &str, current_path: &str) -> bool {
    let href = href.trim_end_matches('/');
    let current = current_path.trim_end_matches('/');
    if href.is_empty() {
        return current.is_empty();
    }
    current == href || current.starts_with(&format!("{}/", href))
}
