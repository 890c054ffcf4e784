//! Resource content lookup
//!
//! The pipeline only needs raw text by resource id. [`DirResourceSource`]
//! serves resources from a directory of `<id>.<ext>` files, where the
//! extension decides the [`ResourceKind`].

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::TestpadError;
use crate::types::{ResourceContent, ResourceKind};

/// Regex for valid resource ids (compiled once)
mod patterns {
    use std::sync::LazyLock;

    pub static RESOURCE_ID: LazyLock<regex::Regex> =
        LazyLock::new(|| regex::Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());
}

/// Check a resource id: letters, digits, `_` and `-` only
pub fn is_valid_resource_id(id: &str) -> bool {
    patterns::RESOURCE_ID.is_match(id)
}

/// Source of raw resource content
pub trait ResourceSource {
    /// Fetch a resource's kind and raw text
    fn resource_content(&self, resource_id: &str) -> Result<ResourceContent, TestpadError>;
}

/// Resources stored as files in one directory
#[derive(Debug, Clone)]
pub struct DirResourceSource {
    dir: PathBuf,
}

impl DirResourceSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Ids and kinds of every recognized resource, sorted by id
    pub fn list_resources(&self) -> Result<Vec<(String, ResourceKind)>, TestpadError> {
        let mut resources = Vec::new();
        if !self.dir.is_dir() {
            return Ok(resources);
        }

        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if let Some((id, kind)) = classify_path(&path) {
                resources.push((id, kind));
            }
        }
        resources.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(resources)
    }

    /// Path and kind of the file backing a resource id
    fn locate(&self, resource_id: &str) -> Result<(PathBuf, ResourceKind), TestpadError> {
        let not_found = || TestpadError::ResourceNotFound {
            id: resource_id.to_string(),
        };

        if !is_valid_resource_id(resource_id) || !self.dir.is_dir() {
            return Err(not_found());
        }

        let mut matches = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if let Some((id, kind)) = classify_path(&path) {
                if id == resource_id {
                    matches.push((path, kind));
                }
            }
        }
        matches.sort_by(|a, b| a.0.cmp(&b.0));

        if matches.len() > 1 {
            log::warn!(
                "resource {} has {} backing files, using {}",
                resource_id,
                matches.len(),
                matches[0].0.display()
            );
        }
        matches.into_iter().next().ok_or_else(not_found)
    }
}

impl ResourceSource for DirResourceSource {
    fn resource_content(&self, resource_id: &str) -> Result<ResourceContent, TestpadError> {
        let (path, kind) = self.locate(resource_id)?;
        let bytes = fs::read(&path)?;
        // Spreadsheet exports are not always valid UTF-8
        let content = String::from_utf8_lossy(&bytes).into_owned();
        log::debug!(
            "loaded {} resource {} ({} bytes)",
            kind,
            resource_id,
            content.len()
        );

        Ok(ResourceContent {
            kind,
            content: if content.trim().is_empty() {
                None
            } else {
                Some(content)
            },
        })
    }
}

/// Resource id and kind for a file path, if it names a resource
fn classify_path(path: &Path) -> Option<(String, ResourceKind)> {
    if !path.is_file() {
        return None;
    }
    let id = path.file_stem()?.to_str()?;
    let kind = ResourceKind::from_extension(path.extension()?.to_str()?)?;
    if !is_valid_resource_id(id) {
        return None;
    }
    Some((id.to_string(), kind))
}
