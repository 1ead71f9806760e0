//! Clean the public directory

use anyhow::{Context, Result};
use std::fs;

use crate::Site;

/// Remove everything generated into the public directory
pub fn run(site: &Site) -> Result<()> {
    if site.public_dir.exists() {
        fs::remove_dir_all(&site.public_dir)
            .with_context(|| format!("removing {}", site.public_dir.display()))?;
        tracing::info!("Deleted: {:?}", site.public_dir);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_clean_removes_public() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("public/blog")).unwrap();
        fs::write(dir.path().join("public/blog/index.html"), "x").unwrap();

        let site = Site::new(dir.path()).unwrap();
        run(&site).unwrap();
        assert!(!dir.path().join("public").exists());

        // Nothing to clean is fine
        run(&site).unwrap();
    }
}
