//! Built-in site templates using the Tera template engine
//!
//! The templates are embedded in the binary; pages supply a context built from
//! their content documents.

use anyhow::Result;
use chrono::NaiveDate;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::config::SiteConfig;
use crate::helpers::{format_count, html_escape, long_date, site_link, strip_html, truncate};

/// Default stylesheet written to `public/css/site.css` unless `static/` provides one
pub const SITE_CSS: &str = include_str!("site/site.css");

/// Template renderer with the embedded site templates
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all site templates loaded.
    ///
    /// Autoescaping is off: text and attribute values go through `esc`, and
    /// links through `link`, which also applies the site root.
    pub fn new(config: &SiteConfig) -> Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("site/layout.html")),
            ("macros.html", include_str!("site/macros.html")),
            ("home.html", include_str!("site/home.html")),
            ("blog_index.html", include_str!("site/blog_index.html")),
            ("blog_post.html", include_str!("site/blog_post.html")),
            ("credit_cards.html", include_str!("site/credit_cards.html")),
            ("credit_card.html", include_str!("site/credit_card.html")),
            // Partials
            (
                "partials/header.html",
                include_str!("site/partials/header.html"),
            ),
            (
                "partials/footer.html",
                include_str!("site/partials/footer.html"),
            ),
        ])?;

        tera.register_filter("esc", esc_filter);
        tera.register_filter(
            "link",
            LinkFilter {
                config: config.clone(),
            },
        );
        tera.register_filter("strip_html", strip_html_filter);
        tera.register_filter("truncate_chars", truncate_chars_filter);
        tera.register_filter("long_date", long_date_filter);
        tera.register_filter("count", count_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Tera filter: escape HTML special characters
fn esc_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("esc", "value", String, value);
    Ok(tera::Value::String(html_escape(&s)))
}

/// Tera filter: site-relative links get the configured root, then everything
/// is escaped for use inside an attribute
struct LinkFilter {
    config: SiteConfig,
}

impl tera::Filter for LinkFilter {
    fn filter(
        &self,
        value: &tera::Value,
        _args: &HashMap<String, tera::Value>,
    ) -> tera::Result<tera::Value> {
        let href = tera::try_get_value!("link", "value", String, value);
        Ok(tera::Value::String(html_escape(&site_link(
            &self.config,
            &href,
        ))))
    }
}

/// Tera filter: strip HTML tags
fn strip_html_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("strip_html", "value", String, value);
    Ok(tera::Value::String(strip_html(&s)))
}

/// Tera filter: truncate by character count
fn truncate_chars_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("truncate_chars", "value", String, value);
    let length = match args.get("length") {
        Some(val) => tera::try_get_value!("truncate_chars", "length", usize, val),
        None => 150,
    };
    let omission = match args.get("omission") {
        Some(val) => tera::try_get_value!("truncate_chars", "omission", String, val),
        None => "…".to_string(),
    };

    Ok(tera::Value::String(truncate(&s, length, Some(&omission))))
}

/// Tera filter: ISO date string to a long date in the given language
fn long_date_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("long_date", "value", String, value);
    let lang = match args.get("lang") {
        Some(val) => tera::try_get_value!("long_date", "lang", String, val),
        None => "es".to_string(),
    };

    match NaiveDate::parse_from_str(&s, "%Y-%m-%d") {
        Ok(date) => Ok(tera::Value::String(long_date(date, &lang))),
        // Not an ISO date: leave the literal as authored
        Err(_) => Ok(tera::Value::String(s)),
    }
}

/// Tera filter: thousands-grouped counter
fn count_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let n = tera::try_get_value!("count", "value", u64, value);
    Ok(tera::Value::String(format_count(n)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tera::Filter;

    fn args(pairs: &[(&str, tera::Value)]) -> HashMap<String, tera::Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_templates_compile() {
        assert!(TemplateRenderer::new(&SiteConfig::default()).is_ok());
    }

    #[test]
    fn test_link_filter() {
        let filter = LinkFilter {
            config: SiteConfig {
                root: "/mx/".to_string(),
                ..SiteConfig::default()
            },
        };
        let link = |href: &str| {
            filter
                .filter(&tera::Value::String(href.to_string()), &args(&[]))
                .unwrap()
        };
        assert_eq!(link("/blog"), tera::Value::String("/mx/blog".to_string()));
        assert_eq!(
            link("/blog?x=1&y=\"2\""),
            tera::Value::String("/mx/blog?x=1&amp;y=&quot;2&quot;".to_string())
        );
        assert_eq!(
            link("https://www.banxico.org.mx"),
            tera::Value::String("https://www.banxico.org.mx".to_string())
        );
        assert_eq!(link("#top"), tera::Value::String("#top".to_string()));
    }

    #[test]
    fn test_long_date_filter() {
        let out = long_date_filter(
            &tera::Value::String("2025-02-25".to_string()),
            &args(&[("lang", tera::Value::String("es-mx".to_string()))]),
        )
        .unwrap();
        assert_eq!(out, tera::Value::String("febrero 25, 2025".to_string()));

        let literal = long_date_filter(&tera::Value::String("ayer".to_string()), &args(&[]))
            .unwrap();
        assert_eq!(literal, tera::Value::String("ayer".to_string()));
    }

    #[test]
    fn test_count_filter() {
        let out = count_filter(&tera::Value::from(12345u64), &args(&[])).unwrap();
        assert_eq!(out, tera::Value::String("12,345".to_string()));
    }

    #[test]
    fn test_truncate_chars_filter() {
        let out = truncate_chars_filter(
            &tera::Value::String("Una guía completa para gestionarlo".to_string()),
            &args(&[("length", tera::Value::from(10))]),
        )
        .unwrap();
        assert_eq!(out, tera::Value::String("Una guía…".to_string()));
    }

    #[test]
    fn test_esc_filter() {
        let out = esc_filter(&tera::Value::String("A & B".to_string()), &args(&[])).unwrap();
        assert_eq!(out, tera::Value::String("A &amp; B".to_string()));
    }
}
