//! Navigation filtering by path predicate

use crate::config::NavFilterConfig;
use crate::schema::NavigationEntry;

/// Matches a path exactly against a set of paths or by prefix
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathFilter {
    exact: Vec<String>,
    prefixes: Vec<String>,
}

impl PathFilter {
    pub fn new<S: Into<String>>(
        exact: impl IntoIterator<Item = S>,
        prefixes: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            exact: exact.into_iter().map(Into::into).collect(),
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_config(config: &NavFilterConfig) -> Self {
        Self {
            exact: config.exact.clone(),
            prefixes: config.prefixes.clone(),
        }
    }

    pub fn matches(&self, href: &str) -> bool {
        self.exact.iter().any(|e| e == href) || self.prefixes.iter().any(|p| href.starts_with(p))
    }
}

/// Entries whose href passes the filter, in their original order
pub fn filter_entries(entries: &[NavigationEntry], filter: &PathFilter) -> Vec<NavigationEntry> {
    entries
        .iter()
        .filter(|entry| filter.matches(&entry.href))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn footer_filter() -> PathFilter {
        PathFilter::new(["/", "/blog"], ["/credit-cards"])
    }

    #[test]
    fn test_footer_navigation_filter() {
        let entries = vec![
            NavigationEntry::new("/", "Home"),
            NavigationEntry::new("/blog", "Blog"),
            NavigationEntry::new("/about", "About"),
        ];
        let filtered = filter_entries(&entries, &footer_filter());
        assert_eq!(
            filtered,
            vec![
                NavigationEntry::new("/", "Home"),
                NavigationEntry::new("/blog", "Blog"),
            ]
        );
    }

    #[test]
    fn test_prefix_and_exact() {
        let filter = footer_filter();
        assert!(filter.matches("/credit-cards"));
        assert!(filter.matches("/credit-cards/citi-double-cash"));
        assert!(!filter.matches("/blog/post/x"));
        assert!(!filter.matches("/about"));
        assert!(!filter.matches(""));
    }

    #[test]
    fn test_filter_is_idempotent_and_order_preserving() {
        let entries = vec![
            NavigationEntry::new("/credit-cards/b", "B"),
            NavigationEntry::new("/contact", "Contacto"),
            NavigationEntry::new("/", "Inicio"),
            NavigationEntry::new("/credit-cards/a", "A"),
            NavigationEntry::new("/", "Inicio otra vez"),
        ];
        let filter = footer_filter();
        let once = filter_entries(&entries, &filter);
        let twice = filter_entries(&once, &filter);
        assert_eq!(once, twice);
        let texts: Vec<_> = once.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["B", "Inicio", "A", "Inicio otra vez"]);
    }

    #[test]
    fn test_empty_filter_matches_nothing() {
        let entries = vec![NavigationEntry::new("/", "Home")];
        assert!(filter_entries(&entries, &PathFilter::default()).is_empty());
    }
}
