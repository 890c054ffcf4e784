//! Configuration handling for testpad

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::TestpadError;

/// Name of the project directory holding config, resources and results
pub const PROJECT_DIR: &str = ".testpad";

/// Name of the config file inside the project directory
pub const CONFIG_FILE: &str = "config.toml";

/// Testpad configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Testpad-specific settings
    #[serde(default)]
    pub testpad: TestpadConfig,
}

/// Core testpad settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestpadConfig {
    /// Directory holding resource files, relative to `.testpad/`
    #[serde(default = "default_resources_dir")]
    pub resources_dir: String,

    /// SQLite database for stored results, relative to `.testpad/`
    #[serde(default = "default_database")]
    pub database: String,

    /// User id used when a command is given no `--user`
    #[serde(default)]
    pub default_user: Option<String>,
}

fn default_resources_dir() -> String {
    "resources".to_string()
}

fn default_database() -> String {
    "results.db".to_string()
}

impl Default for TestpadConfig {
    fn default() -> Self {
        Self {
            resources_dir: default_resources_dir(),
            database: default_database(),
            default_user: None,
        }
    }
}

impl Config {
    /// Parse a config from TOML text
    pub fn from_toml(content: &str) -> Result<Self, TestpadError> {
        toml::from_str(content).map_err(|e| TestpadError::Config(e.to_string()))
    }

    /// Load `.testpad/config.toml` from a project root
    ///
    /// A missing file yields the defaults.
    pub fn load_from_project(project_root: &Path) -> Result<Self, TestpadError> {
        let path = project_root.join(PROJECT_DIR).join(CONFIG_FILE);
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        Self::from_toml(&content)
    }

    /// Absolute path of the resources directory
    pub fn resources_path(&self, project_root: &Path) -> PathBuf {
        project_root
            .join(PROJECT_DIR)
            .join(&self.testpad.resources_dir)
    }

    /// Absolute path of the results database
    pub fn database_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(PROJECT_DIR).join(&self.testpad.database)
    }
}

/// Find the project root by walking up from the current directory
pub fn find_project_root() -> Result<PathBuf, TestpadError> {
    let cwd = std::env::current_dir()?;
    find_project_root_from(&cwd)
}

/// Find the nearest ancestor of `start` (inclusive) containing `.testpad/`
pub fn find_project_root_from(start: &Path) -> Result<PathBuf, TestpadError> {
    start
        .ancestors()
        .find(|dir| dir.join(PROJECT_DIR).is_dir())
        .map(Path::to_path_buf)
        .ok_or(TestpadError::NotInitialized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_section_missing() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.testpad.resources_dir, "resources");
        assert_eq!(config.testpad.database, "results.db");
        assert!(config.testpad.default_user.is_none());
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_toml(
            r#"[testpad]
default_user = "tester-7"
"#,
        )
        .unwrap();
        assert_eq!(config.testpad.default_user.as_deref(), Some("tester-7"));
        assert_eq!(config.testpad.database, "results.db");
    }

    #[test]
    fn test_malformed_config() {
        let err = Config::from_toml("[testpad\nresources_dir = ").unwrap_err();
        assert_eq!(err.code(), "E002");
    }

    #[test]
    fn test_find_project_root_walks_up() {
        let temp = tempfile::tempdir().unwrap();
        fs::create_dir_all(temp.path().join(PROJECT_DIR)).unwrap();
        let nested = temp.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let root = find_project_root_from(&nested).unwrap();
        assert_eq!(root, temp.path());
    }

    #[test]
    fn test_find_project_root_missing() {
        let temp = tempfile::tempdir().unwrap();
        let err = find_project_root_from(temp.path()).unwrap_err();
        assert!(matches!(err, TestpadError::NotInitialized));
    }

    #[test]
    fn test_load_from_project_paths() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join(PROJECT_DIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join(CONFIG_FILE),
            "[testpad]\nresources_dir = \"pads\"\ndatabase = \"r.sqlite\"\n",
        )
        .unwrap();

        let config = Config::load_from_project(temp.path()).unwrap();
        assert_eq!(config.resources_path(temp.path()), dir.join("pads"));
        assert_eq!(config.database_path(temp.path()), dir.join("r.sqlite"));
    }
}
