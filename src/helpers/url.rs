//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::SiteConfig;

/// Characters escaped in a URL path; `/` is kept
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/css/site.css") // -> "/es/css/site.css" with root "/es/"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    if is_external(path) {
        return path.to_string();
    }

    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Resolve an authored link: site-relative paths get the root, anything else
/// (external, `#fragment`, relative) is kept
///
/// # Examples
/// ```ignore
/// site_link(&config, "/blog") // -> "/mx/blog" with root "/mx/"
/// ```
pub fn site_link(config: &SiteConfig, href: &str) -> String {
    if href.starts_with('/') && !href.starts_with("//") {
        url_for(config, href)
    } else {
        href.to_string()
    }
}

/// Generate a full URL including the domain, percent-encoded
///
/// # Examples
/// ```ignore
/// full_url_for(&config, "/blog/") // -> "https://topfinanzas.com/blog/"
/// ```
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    if is_external(path) {
        return path.to_string();
    }
    let base = config.url.trim_end_matches('/');
    format!("{}{}", base, encode_path(&url_for(config, path)))
}

/// Percent-encode a URL path, keeping separators
pub fn encode_path(path: &str) -> String {
    utf8_percent_encode(path, PATH_SEGMENT).to_string()
}

/// Whether a link points off-site
pub fn is_external(url: &str) -> bool {
    url.starts_with("http://")
        || url.starts_with("https://")
        || url.starts_with("//")
        || url.starts_with("mailto:")
        || url.starts_with("tel:")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        SiteConfig {
            url: "https://topfinanzas.com".to_string(),
            root: "/mx/".to_string(),
            ..SiteConfig::default()
        }
    }

    #[test]
    fn test_url_for() {
        let config = test_config();
        assert_eq!(url_for(&config, "/css/site.css"), "/mx/css/site.css");
        assert_eq!(url_for(&config, "blog/"), "/mx/blog/");
        assert_eq!(url_for(&config, "/"), "/mx/");
        assert_eq!(
            url_for(&config, "https://media.topfinanzas.com/a.png"),
            "https://media.topfinanzas.com/a.png"
        );
    }

    #[test]
    fn test_site_link() {
        let config = test_config();
        assert_eq!(site_link(&config, "/credit-cards"), "/mx/credit-cards");
        assert_eq!(site_link(&config, "//cdn.example.com/a.js"), "//cdn.example.com/a.js");
        assert_eq!(site_link(&config, "mailto:info@topfinanzas.com"), "mailto:info@topfinanzas.com");
        assert_eq!(site_link(&config, "#top"), "#top");
    }

    #[test]
    fn test_full_url_for() {
        let config = test_config();
        assert_eq!(
            full_url_for(&config, "/blog/category/préstamos/"),
            "https://topfinanzas.com/mx/blog/category/pr%C3%A9stamos/"
        );
    }

    #[test]
    fn test_is_external() {
        assert!(is_external("mailto:info@topfinanzas.com"));
        assert!(!is_external("/credit-cards"));
    }
}
