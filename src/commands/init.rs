//! Initialize a new site

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Files written by `init`, relative to the site directory
const SCAFFOLD: [(&str, &str); 8] = [
    ("_config.yml", include_str!("scaffold/_config.yml")),
    (
        "content/navigation/footer.json",
        include_str!("scaffold/content/navigation/footer.json"),
    ),
    (
        "content/texts/footer.json",
        include_str!("scaffold/content/texts/footer.json"),
    ),
    (
        "content/images/logos.json",
        include_str!("scaffold/content/images/logos.json"),
    ),
    (
        "content/pages/home.json",
        include_str!("scaffold/content/pages/home.json"),
    ),
    (
        "content/blog/your-first-paycheck.json",
        include_str!("scaffold/content/blog/your-first-paycheck.json"),
    ),
    (
        "content/blog/what-are-online-loans.json",
        include_str!("scaffold/content/blog/what-are-online-loans.json"),
    ),
    (
        "content/credit-cards/citi-double-cash.content.json",
        include_str!("scaffold/content/credit-cards/citi-double-cash.content.json"),
    ),
];

/// Initialize a new site in the given directory.
///
/// Existing files are left untouched, so running it on a site only fills in
/// what is missing.
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir.join("static"))
        .with_context(|| format!("creating {}", target_dir.display()))?;

    for (relative, body) in SCAFFOLD {
        let path = target_dir.join(relative);
        if path.exists() {
            tracing::warn!("Keeping existing {:?}", path);
            continue;
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, body).with_context(|| format!("writing {}", path.display()))?;
        tracing::debug!("Created: {:?}", path);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{CachePolicy, ContentStore};
    use crate::schema::{
        BlogPostContent, CreditCardPageContent, FooterContent, FooterNavigation,
        HomePageContent, Logos,
    };
    use crate::Site;
    use tempfile::TempDir;

    #[test]
    fn test_scaffold_documents_match_schemas() {
        let dir = TempDir::new().unwrap();
        init_site(dir.path()).unwrap();

        let site = Site::new(dir.path()).unwrap();
        assert_eq!(site.config.language, "es-mx");

        let store = ContentStore::new(&site.content_dir, CachePolicy::Reread);
        let docs = &site.config.documents;
        store.load::<FooterNavigation>(&docs.footer_navigation).unwrap();
        store.load::<FooterContent>(&docs.footer_text).unwrap();
        store.load::<Logos>(&docs.logos).unwrap();
        store.load::<HomePageContent>(&docs.home).unwrap();
        store
            .load::<BlogPostContent>("blog/your-first-paycheck")
            .unwrap();
        store
            .load::<BlogPostContent>("blog/what-are-online-loans")
            .unwrap();
        store
            .load::<CreditCardPageContent>("credit-cards/citi-double-cash.content.json")
            .unwrap();
    }

    #[test]
    fn test_init_keeps_existing_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("_config.yml"), "title: Mi sitio\n").unwrap();
        init_site(dir.path()).unwrap();

        let config = fs::read_to_string(dir.path().join("_config.yml")).unwrap();
        assert_eq!(config, "title: Mi sitio\n");
        assert!(dir.path().join("content/pages/home.json").is_file());
        assert!(dir.path().join("static").is_dir());
    }
}
