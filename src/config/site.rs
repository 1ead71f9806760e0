//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::content::CachePolicy;
use crate::layout::MOBILE_BREAKPOINT;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub author: String,
    pub language: String,
    pub generator: Option<String>,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub content_dir: String,
    pub public_dir: String,
    pub static_dir: String,

    // Content
    pub content: ContentConfig,
    pub documents: DocumentsConfig,

    // Presentation
    pub viewport: ViewportConfig,
    pub footer: FooterConfig,
    pub font: FontConfig,
    pub labels: LabelsConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "TopFinanzas - Soluciones Inteligentes para Tarjetas de Crédito".to_string(),
            description: "Encuentra la tarjeta de crédito perfecta adaptada a tus necesidades \
                          con las recomendaciones expertas de TopFinanzas."
                .to_string(),
            keywords: vec![
                "tarjetas de crédito".to_string(),
                "comparación de tarjetas de crédito".to_string(),
                "cashback".to_string(),
                "recompensas".to_string(),
                "TopFinanzas".to_string(),
                "México".to_string(),
            ],
            author: "Top Finanzas".to_string(),
            language: "es-mx".to_string(),
            generator: None,

            url: "https://topfinanzas.com".to_string(),
            root: "/".to_string(),

            content_dir: "content".to_string(),
            public_dir: "public".to_string(),
            static_dir: "static".to_string(),

            content: ContentConfig::default(),
            documents: DocumentsConfig::default(),

            viewport: ViewportConfig::default(),
            footer: FooterConfig::default(),
            font: FontConfig::default(),
            labels: LabelsConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }
}

/// Content store behaviour
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    pub cache: CachePolicy,
}

/// Store identifiers of the documents each page reads
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentsConfig {
    pub footer_navigation: String,
    pub footer_text: String,
    pub logos: String,
    pub home: String,
    /// Directory of blog article documents, one per post
    pub blog_dir: String,
    /// Directory of credit-card page documents, one per card
    pub credit_cards_dir: String,
}

impl Default for DocumentsConfig {
    fn default() -> Self {
        Self {
            footer_navigation: "navigation/footer".to_string(),
            footer_text: "texts/footer".to_string(),
            logos: "images/logos".to_string(),
            home: "pages/home".to_string(),
            blog_dir: "blog".to_string(),
            credit_cards_dir: "credit-cards".to_string(),
        }
    }
}

/// Viewport classification
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Widths below this are mobile
    pub breakpoint: u32,
    /// Width assumed when generating static files
    pub default_width: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            breakpoint: MOBILE_BREAKPOINT,
            default_width: 1280,
        }
    }
}

/// Footer presentation rules
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    /// Which main navigation entries appear in the "navigate" column
    pub navigation: NavFilterConfig,
}

/// Path predicate: exact matches or prefix matches
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavFilterConfig {
    pub exact: Vec<String>,
    pub prefixes: Vec<String>,
}

impl Default for NavFilterConfig {
    fn default() -> Self {
        Self {
            exact: vec!["/".to_string(), "/blog".to_string()],
            prefixes: vec!["/credit-cards".to_string()],
        }
    }
}

/// Web font settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub family: String,
    /// CSS custom property the family is exposed as
    pub variable: String,
    pub weights: Vec<u16>,
    pub fallback: Vec<String>,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "Poppins".to_string(),
            variable: "--font-poppins".to_string(),
            weights: vec![400, 500, 600],
            fallback: vec![
                "system-ui".to_string(),
                "Segoe UI".to_string(),
                "Roboto".to_string(),
                "Helvetica".to_string(),
                "Arial".to_string(),
                "sans-serif".to_string(),
            ],
        }
    }
}

impl FontConfig {
    /// Value for a CSS `font-family` declaration
    pub fn stack(&self) -> String {
        std::iter::once(&self.family)
            .chain(self.fallback.iter())
            .map(|name| {
                if name.contains(' ') {
                    format!("\"{}\"", name)
                } else {
                    name.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Interface strings that are not part of any content document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelsConfig {
    /// Suffix of view counters ("721 vistas")
    pub views: String,
    pub related: String,
    pub empty: String,
    pub menu: String,
    pub blog_title: String,
    pub credit_cards_title: String,
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            views: "vistas".to_string(),
            related: "Artículos relacionados".to_string(),
            empty: "Aún no hay publicaciones.".to_string(),
            menu: "Menú".to_string(),
            blog_title: "Blog".to_string(),
            credit_cards_title: "Tarjetas de crédito".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.language, "es-mx");
        assert_eq!(config.viewport.breakpoint, 768);
        assert_eq!(config.content.cache, CachePolicy::Memoize);
        assert_eq!(config.footer.navigation.exact, vec!["/", "/blog"]);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: Mi Sitio
language: es
content:
  cache: reread
viewport:
  breakpoint: 640
footer:
  navigation:
    prefixes: ["/credit-cards", "/loans"]
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "Mi Sitio");
        assert_eq!(config.language, "es");
        assert_eq!(config.content.cache, CachePolicy::Reread);
        assert_eq!(config.viewport.breakpoint, 640);
        assert_eq!(config.viewport.default_width, 1280);
        assert_eq!(config.footer.navigation.exact, vec!["/", "/blog"]);
        assert_eq!(config.footer.navigation.prefixes.len(), 2);
        assert_eq!(config.documents.home, "pages/home");
    }

    #[test]
    fn test_font_stack() {
        let font = FontConfig {
            fallback: vec!["Segoe UI".to_string(), "sans-serif".to_string()],
            ..FontConfig::default()
        };
        assert_eq!(font.stack(), r#"Poppins, "Segoe UI", sans-serif"#);
    }
}
