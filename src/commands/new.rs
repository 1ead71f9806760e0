//! Create a new content document

use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;

use crate::content::ContentFormat;
use crate::Site;

/// Kind of per-item document to scaffold
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DocumentKind {
    /// A blog article
    Blog,
    /// A credit-card product page
    Card,
}

/// Placeholder image until the author sets a real one
const PLACEHOLDER_IMAGE: &str = "https://media.topfinanzas.com/images/placeholder.webp";

/// Create a document named after the slug of `title`; returns its path
pub fn create_document(
    site: &Site,
    title: &str,
    kind: DocumentKind,
    format: ContentFormat,
) -> Result<PathBuf> {
    let slug = slug::slugify(title);
    if slug.is_empty() {
        anyhow::bail!("Title {:?} has no characters usable in a URL", title);
    }

    let docs = &site.config.documents;
    let (dir, file_name, document) = match kind {
        DocumentKind::Blog => (
            &docs.blog_dir,
            format!("{}.{}", slug, format.extension()),
            blog_document(site, title),
        ),
        DocumentKind::Card => (
            &docs.credit_cards_dir,
            format!("{}.content.{}", slug, format.extension()),
            card_document(title),
        ),
    };

    let target_dir = site.content_dir.join(dir);
    fs::create_dir_all(&target_dir)?;
    let file_path = target_dir.join(file_name);

    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let body = format
        .serialize(&document)
        .map_err(|e| anyhow::anyhow!("serializing {}: {}", file_path.display(), e))?;
    fs::write(&file_path, body).with_context(|| format!("writing {}", file_path.display()))?;

    println!("Created: {:?}", file_path);
    Ok(file_path)
}

fn blog_document(site: &Site, title: &str) -> Value {
    let today = chrono::Local::now().date_naive();
    json!({
        "metadata": {
            "title": title,
            "description": title,
            "keywords": []
        },
        "title": title,
        "author": site.config.author,
        "date": today.format("%Y-%m-%d").to_string(),
        "views": 0,
        "heroImage": {
            "url": PLACEHOLDER_IMAGE,
            "alt": title
        },
        "excerpt": "",
        "body": format!("## {}\n", title),
        "related": []
    })
}

fn card_document(title: &str) -> Value {
    json!({
        "metadata": {
            "title": title,
            "description": title,
            "keywords": []
        },
        "hero": {
            "title": title,
            "subtitle": "",
            "image": {
                "url": PLACEHOLDER_IMAGE,
                "alt": title
            }
        },
        "highlights": [],
        "sections": [],
        "cta": {
            "text": "Solicitar ahora",
            "href": "#"
        },
        "disclaimer": ""
    })
}
