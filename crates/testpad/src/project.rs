//! Project context shared by commands

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use testpad_core::{
    Config, DirResourceSource, ParsedTestpad, ResourceKind, ResourceSource, TestpadError,
    find_project_root, parse_testpad,
};

use crate::store::SqliteResultStore;

/// An initialized project and its configuration
#[derive(Debug, Clone)]
pub struct Project {
    pub root: PathBuf,
    pub config: Config,
}

impl Project {
    /// Find the enclosing project and load its config
    pub fn discover() -> Result<Self, TestpadError> {
        let root = find_project_root()?;
        let config = Config::load_from_project(&root)?;
        log::debug!("project root: {}", root.display());
        Ok(Self { root, config })
    }

    /// Resource source over the configured resources directory
    pub fn resources(&self) -> DirResourceSource {
        DirResourceSource::new(self.config.resources_path(&self.root))
    }

    /// Open the configured results database
    pub fn open_store(&self) -> Result<SqliteResultStore, TestpadError> {
        SqliteResultStore::open(self.config.database_path(&self.root))
    }

    /// Fetch and parse a testpad resource
    ///
    /// Fails if the resource is another kind or has no content.
    pub fn load_testpad(&self, resource_id: &str) -> Result<ParsedTestpad, TestpadError> {
        let resource = self.resources().resource_content(resource_id)?;
        if resource.kind != ResourceKind::Testpad {
            return Err(TestpadError::UnsupportedResource {
                id: resource_id.to_string(),
                kind: resource.kind.to_string(),
                expected: ResourceKind::Testpad.to_string(),
            });
        }
        let content = resource.content.ok_or_else(|| TestpadError::EmptyContent {
            id: resource_id.to_string(),
        })?;
        Ok(parse_testpad(&content))
    }

    /// The user a command acts for: `--user`, else `default_user`
    pub fn resolve_user(&self, user: Option<String>) -> Result<String, TestpadError> {
        user.or_else(|| self.config.testpad.default_user.clone())
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| {
                TestpadError::Config(
                    "no user given: pass --user or set default_user in .testpad/config.toml"
                        .to_string(),
                )
            })
    }
}

/// Read an exported file given on the command line
pub fn read_input_file(path: &str) -> anyhow::Result<String> {
    let path = Path::new(path);
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    // Spreadsheet exports are not always valid UTF-8
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(default_user: Option<&str>) -> Project {
        let mut config = Config::default();
        config.testpad.default_user = default_user.map(str::to_string);
        Project {
            root: PathBuf::from("/tmp/project"),
            config,
        }
    }

    #[test]
    fn test_resolve_user_prefers_flag() {
        let p = project(Some("fallback"));
        assert_eq!(p.resolve_user(Some("flag".to_string())).unwrap(), "flag");
        assert_eq!(p.resolve_user(None).unwrap(), "fallback");
    }

    #[test]
    fn test_resolve_user_missing() {
        let p = project(None);
        let err = p.resolve_user(None).unwrap_err();
        assert_eq!(err.code(), "E002");
        assert!(p.resolve_user(Some("  ".to_string())).is_err());
    }

    #[test]
    fn test_read_input_file_missing() {
        let err = read_input_file("/no/such/export.csv").unwrap_err();
        assert!(format!("{:#}", err).contains("failed to read /no/such/export.csv"));
    }

    #[test]
    fn test_read_input_file_lossy() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("latin1.csv");
        fs::write(&path, b"SCRIPT\nName,Caf\xe9\n").unwrap();
        let content = read_input_file(path.to_str().unwrap()).unwrap();
        assert!(content.starts_with("SCRIPT\nName,Caf"));
    }
}
