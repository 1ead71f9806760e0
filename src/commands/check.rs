//! Check that every document parses and every page renders

use anyhow::Result;

use crate::generator::Generator;
use crate::Site;

/// Load every document and render every route in memory without writing.
///
/// Returns an error naming the number of failures when anything is broken.
pub fn run(site: &Site) -> Result<()> {
    let generator = Generator::new(site)?;
    let store = generator.store();
    let mut failures = 0;

    let documents = store.documents("")?;
    for id in &documents {
        if let Err(e) = store.load_value(id) {
            println!("  ! {}", e);
            failures += 1;
        }
    }
    println!("Documents: {} checked", documents.len());

    let rendered = generator.render_all(&generator.default_env())?;
    let total = rendered.len();
    for (route, html) in rendered {
        match html {
            Ok(_) => tracing::debug!("Rendered {}", route),
            Err(e) => {
                println!("  ! {:#}", e);
                failures += 1;
            }
        }
    }
    println!("Pages: {} checked", total);

    if failures > 0 {
        anyhow::bail!("{} problem(s) found", failures);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::init::init_site;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_check_scaffolded_site() {
        let dir = TempDir::new().unwrap();
        init_site(dir.path()).unwrap();
        let site = Site::new(dir.path()).unwrap();
        run(&site).unwrap();
        assert!(!dir.path().join("public").exists());
    }

    #[test]
    fn test_check_reports_schema_mismatch() {
        let dir = TempDir::new().unwrap();
        init_site(dir.path()).unwrap();
        fs::write(
            dir.path().join("content/images/logos.json"),
            r#"{"whiteLogo": {"url": "/relative.png", "alt": "x"}, "colorLogo": {"url": "https://a/b.png", "alt": "y"}}"#,
        )
        .unwrap();

        let site = Site::new(dir.path()).unwrap();
        assert!(run(&site).is_err());
    }
}
