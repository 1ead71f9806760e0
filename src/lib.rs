//! finsite: a static site generator for a content-driven financial marketing site
//!
//! Page content (navigation, footer copy, logos, articles, credit-card pages)
//! lives in structured documents under `content/`. Each page loads the
//! documents it needs through one generic typed loader and renders them with
//! built-in Tera templates.

pub mod commands;
pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod layout;
pub mod schema;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// A site rooted at a directory
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content store root
    pub content_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
    /// Assets copied verbatim into the output
    pub static_dir: PathBuf,
}

impl Site {
    /// Open the site in `base_dir`, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);
        let public_dir = base_dir.join(&config.public_dir);
        let static_dir = base_dir.join(&config.static_dir);

        Ok(Self {
            config,
            base_dir,
            content_dir,
            public_dir,
            static_dir,
        })
    }

    /// Path of the configuration file
    pub fn config_path(&self) -> PathBuf {
        self.base_dir.join("_config.yml")
    }

    /// Generate the static site at the configured default width
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self, None)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
