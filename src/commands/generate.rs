//! Generate static files

use anyhow::Result;
use notify::Watcher;
use std::path::Path;
use std::sync::mpsc::channel;
use std::time::{Duration, Instant};

use crate::generator::Generator;
use crate::Site;

/// Generate the site for a viewport `width`, or the configured default width
pub fn run(site: &Site, width: Option<u32>) -> Result<()> {
    let start = Instant::now();

    let generator = Generator::new(site)?;
    let env = match width {
        Some(width) => generator.env_for_width(width),
        None => generator.default_env(),
    };
    tracing::info!(
        "Rendering for a {}px viewport ({} layout)",
        env.viewport.width,
        env.layout().as_str()
    );

    generator.generate(&env)?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}

/// Watch content, static assets and the config file, regenerating on change
pub async fn watch(site: &Site, width: Option<u32>) -> Result<()> {
    let site = site.clone();
    tokio::task::spawn_blocking(move || watch_blocking(&site, width)).await?
}

fn watch_blocking(site: &Site, width: Option<u32>) -> Result<()> {
    let (tx, rx) = channel();

    let mut watcher = notify::recommended_watcher(move |res| {
        if let Ok(event) = res {
            let _ = tx.send(event);
        }
    })?;

    watcher.watch(&site.content_dir, notify::RecursiveMode::Recursive)?;
    if site.static_dir.exists() {
        watcher.watch(&site.static_dir, notify::RecursiveMode::Recursive)?;
    }
    let config_path = site.config_path();
    if config_path.exists() {
        watcher.watch(Path::new(&config_path), notify::RecursiveMode::NonRecursive)?;
    }

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    let mut last_rebuild = Instant::now();

    loop {
        match rx.recv_timeout(Duration::from_millis(100)) {
            Ok(_event) => {
                // Debounce: only rebuild if more than 500ms since last rebuild
                if last_rebuild.elapsed() > Duration::from_millis(500) {
                    tracing::info!("File changed, regenerating...");
                    // Reopen the site so config edits apply
                    let result = Site::new(&site.base_dir).and_then(|site| run(&site, width));
                    if let Err(e) = result {
                        tracing::error!("Generation failed: {:#}", e);
                    }
                    last_rebuild = Instant::now();
                }
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    Ok(())
}
