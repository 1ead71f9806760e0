//! Content store - resolves identifiers to documents and loads them as typed schemas

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, Mutex};
use walkdir::WalkDir;

use super::format::ContentFormat;
use super::ContentDocument;
use crate::error::{ContentError, Result};

/// Whether repeated loads of the same document hit the disk again
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CachePolicy {
    /// Parse each document once per store
    #[default]
    Memoize,
    /// Read and parse on every call
    Reread,
}

/// Read-only view over a directory of structured content documents
pub struct ContentStore {
    root: PathBuf,
    policy: CachePolicy,
    cache: Mutex<HashMap<PathBuf, Arc<Value>>>,
}

impl ContentStore {
    /// Create a store rooted at `root`
    pub fn new<P: AsRef<Path>>(root: P, policy: CachePolicy) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            policy,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Root directory of the store
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn policy(&self) -> CachePolicy {
        self.policy
    }

    /// Load the document at `id` typed as `T`.
    ///
    /// Fails with `NotFound` when nothing is stored under `id`, `Malformed` when
    /// the stored text does not parse, and `SchemaMismatch` when the parsed data
    /// does not deserialize into `T` or fails `T::validate`.
    pub fn load<T: ContentDocument>(&self, id: &str) -> Result<T> {
        let path = self.resolve(id)?;
        let value = self.read_value(&path)?;

        let document = T::deserialize(value.as_ref()).map_err(|e| ContentError::SchemaMismatch {
            path: path.clone(),
            schema: T::SCHEMA,
            message: e.to_string(),
        })?;

        document
            .validate()
            .map_err(|message| ContentError::SchemaMismatch {
                path: path.clone(),
                schema: T::SCHEMA,
                message,
            })?;

        tracing::debug!("Loaded {} as {}", id, T::SCHEMA);
        Ok(document)
    }

    /// Load the document at `id` without a schema
    pub fn load_value(&self, id: &str) -> Result<Arc<Value>> {
        let path = self.resolve(id)?;
        self.read_value(&path)
    }

    /// Whether a document is stored under `id`
    pub fn exists(&self, id: &str) -> bool {
        self.resolve(id).is_ok()
    }

    /// Resolve an identifier to a file inside the store.
    ///
    /// Identifiers with a supported extension are used as is; otherwise each of
    /// `ContentFormat::PROBE_EXTENSIONS` is appended in turn.
    pub fn resolve(&self, id: &str) -> Result<PathBuf> {
        let relative = Path::new(id);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if id.trim().is_empty() || escapes {
            return Err(ContentError::InvalidPath {
                path: id.to_string(),
            });
        }

        if ContentFormat::from_path(relative).is_some() {
            let candidate = self.root.join(relative);
            if candidate.is_file() {
                return Ok(candidate);
            }
            return Err(ContentError::NotFound {
                path: id.to_string(),
            });
        }

        for ext in ContentFormat::PROBE_EXTENSIONS {
            let candidate = self.root.join(format!("{}.{}", id, ext));
            if candidate.is_file() {
                return Ok(candidate);
            }
        }

        let bare = self.root.join(relative);
        if bare.is_file() {
            return Err(ContentError::UnsupportedFormat { path: bare });
        }

        Err(ContentError::NotFound {
            path: id.to_string(),
        })
    }

    /// List identifiers of all documents under `dir`, sorted
    pub fn documents(&self, dir: &str) -> Result<Vec<String>> {
        let base = self.root.join(dir);
        if !base.is_dir() {
            return Ok(Vec::new());
        }

        let mut ids: Vec<String> = WalkDir::new(&base)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file() && ContentFormat::from_path(e.path()).is_some())
            .filter_map(|e| {
                let relative = e.path().strip_prefix(&self.root).ok()?;
                let parts: Vec<_> = relative
                    .components()
                    .filter_map(|c| c.as_os_str().to_str())
                    .collect();
                Some(parts.join("/"))
            })
            .collect();

        ids.sort();
        Ok(ids)
    }

    fn read_value(&self, path: &Path) -> Result<Arc<Value>> {
        if self.policy == CachePolicy::Memoize {
            if let Some(value) = self.cache_lock().get(path) {
                return Ok(Arc::clone(value));
            }
        }

        let format =
            ContentFormat::from_path(path).ok_or_else(|| ContentError::UnsupportedFormat {
                path: path.to_path_buf(),
            })?;

        let raw = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ContentError::NotFound {
                path: path.to_string_lossy().to_string(),
            },
            _ => ContentError::Io {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        let value = format
            .parse(&raw)
            .map(Arc::new)
            .map_err(|message| ContentError::Malformed {
                path: path.to_path_buf(),
                message,
            })?;

        if self.policy == CachePolicy::Memoize {
            self.cache_lock()
                .insert(path.to_path_buf(), Arc::clone(&value));
        }

        Ok(value)
    }

    fn cache_lock(&self) -> std::sync::MutexGuard<'_, HashMap<PathBuf, Arc<Value>>> {
        // A poisoned cache only ever holds fully parsed values
        self.cache.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// URL slug for a per-item document identifier.
///
/// `credit-cards/citi-double-cash.content.json` -> `citi-double-cash`. File
/// names that are not already slugs are slugified; `None` when nothing usable
/// remains (`..`, `.json`).
pub fn slug_of(id: &str) -> Option<String> {
    let name = id.rsplit('/').next().unwrap_or(id);
    let stem = match name.rsplit_once('.') {
        Some((stem, ext)) if ContentFormat::from_extension(ext).is_some() => stem,
        _ => name,
    };
    let slug = slug::slugify(stem.trim_end_matches(".content"));
    if slug.is_empty() {
        None
    } else {
        Some(slug)
    }
}
