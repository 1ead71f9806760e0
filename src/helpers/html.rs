//! HTML helper functions

use lazy_static::lazy_static;
use regex::Regex;

use super::url::url_for;
use crate::config::SiteConfig;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Generate a CSS link tag
///
/// # Examples
/// ```ignore
/// css(&config, "site") // -> <link rel="stylesheet" href="/css/site.css">
/// ```
pub fn css(config: &SiteConfig, path: &str) -> String {
    let path =
        if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//") {
            path.to_string()
        } else {
            let path = if path.ends_with(".css") {
                path.to_string()
            } else {
                format!("{}.css", path)
            };
            url_for(config, &format!("css/{}", path.trim_start_matches('/')))
        };

    format!(r#"<link rel="stylesheet" href="{}">"#, path)
}

/// Generate a favicon link tag
pub fn favicon_tag(href: &str) -> String {
    format!(r#"<link rel="icon" href="{}">"#, html_escape(href))
}

/// Generate Open Graph meta tags
pub fn open_graph(title: &str, description: &str, url: &str, image: Option<&str>) -> String {
    let mut tags = vec![
        r#"<meta property="og:type" content="website">"#.to_string(),
        format!(
            r#"<meta property="og:title" content="{}">"#,
            html_escape(title)
        ),
        format!(r#"<meta property="og:url" content="{}">"#, html_escape(url)),
    ];

    if !description.is_empty() {
        tags.push(format!(
            r#"<meta property="og:description" content="{}">"#,
            html_escape(description)
        ));
    }

    if let Some(img) = image {
        tags.push(format!(
            r#"<meta property="og:image" content="{}">"#,
            html_escape(img)
        ));
    }

    tags.join("\n")
}

/// Generate a `<meta name=.. content=..>` tag
pub fn meta_tag(name: &str, content: &str) -> String {
    format!(
        r#"<meta name="{}" content="{}">"#,
        html_escape(name),
        html_escape(content)
    )
}

/// Generate meta generator tag
pub fn meta_generator(generator: Option<&str>) -> String {
    let value = generator
        .map(str::to_string)
        .unwrap_or_else(|| format!("finsite {}", env!("CARGO_PKG_VERSION")));
    meta_tag("generator", &value)
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Strip HTML tags from a string
pub fn strip_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_tag = false;

    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
}

/// Collapse runs of whitespace (including newlines) into single spaces
pub fn collapse_whitespace(s: &str) -> String {
    WHITESPACE.replace_all(s.trim(), " ").into_owned()
}

/// Truncate a string to at most `length` characters, omission included
pub fn truncate(s: &str, length: usize, omission: Option<&str>) -> String {
    let omission = omission.unwrap_or("...");

    if s.chars().count() <= length {
        s.to_string()
    } else {
        let truncated: String = s
            .chars()
            .take(length.saturating_sub(omission.chars().count()))
            .collect();
        format!("{}{}", truncated.trim_end(), omission)
    }
}
