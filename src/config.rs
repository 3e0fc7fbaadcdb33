use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SyncError};

/// Config filename, looked up in the project root.
const CONFIG_FILE: &str = "cvsync.toml";
/// Default target HTML file, relative to the project root.
const DEFAULT_HTML_FILE: &str = "index.html";

/// Project-level configuration resolved from the working directory.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory holding the Word document and the HTML resume.
    pub project_root: PathBuf,
    /// Path to the HTML resume being patched.
    pub html_path: PathBuf,
    /// Path to the config file.
    pub config_path: PathBuf,
    /// User settings loaded from cvsync.toml.
    pub settings: UserSettings,
}

/// User-configurable settings from cvsync.toml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    /// Target HTML file, relative to the project root.
    pub html_file: String,
    /// Document extensions to look for (first match wins).
    pub document_extensions: Vec<String>,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            html_file: DEFAULT_HTML_FILE.into(),
            document_extensions: vec!["docx".into(), "doc".into()],
        }
    }
}

impl Config {
    /// Create config for a given project root.
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        let project_root = project_root.into();
        let config_path = project_root.join(CONFIG_FILE);

        let settings = Self::load_settings(&config_path).unwrap_or_default();
        let html_path = project_root.join(&settings.html_file);

        Self {
            project_root,
            html_path,
            config_path,
            settings,
        }
    }

    /// Create config from the current working directory.
    pub fn from_cwd() -> Result<Self> {
        let cwd = std::env::current_dir()
            .map_err(|e| SyncError::Config(format!("cannot get cwd: {e}")))?;
        Ok(Self::new(cwd))
    }

    /// Load settings from cvsync.toml if it exists.
    fn load_settings(config_path: &Path) -> Option<UserSettings> {
        if !config_path.exists() {
            return None;
        }
        let content = std::fs::read_to_string(config_path).ok()?;
        toml::from_str(&content).ok()
    }

    /// Check whether a file extension matches a configured document extension.
    #[must_use]
    pub fn is_document_extension(&self, ext: &str) -> bool {
        self.settings
            .document_extensions
            .iter()
            .any(|e| e.eq_ignore_ascii_case(ext))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn config_new_sets_paths() {
        let cfg = Config::new("/tmp/project");
        assert_eq!(cfg.project_root, PathBuf::from("/tmp/project"));
        assert_eq!(cfg.html_path, PathBuf::from("/tmp/project/index.html"));
        assert_eq!(cfg.config_path, PathBuf::from("/tmp/project/cvsync.toml"));
    }

    #[test]
    fn default_settings() {
        let settings = UserSettings::default();
        assert_eq!(settings.html_file, "index.html");
        assert_eq!(settings.document_extensions, vec!["docx", "doc"]);
    }

    #[test]
    fn is_document_extension_case_insensitive() {
        let cfg = Config::new("/tmp/project");
        assert!(cfg.is_document_extension("docx"));
        assert!(cfg.is_document_extension("DOCX"));
        assert!(cfg.is_document_extension("doc"));
        assert!(!cfg.is_document_extension("pdf"));
    }

    #[test]
    fn settings_loaded_from_toml() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join("cvsync.toml"),
            "html_file = \"resume.html\"\ndocument_extensions = [\"docx\"]\n",
        )
        .unwrap();

        let cfg = Config::new(tmp.path());
        assert_eq!(cfg.settings.html_file, "resume.html");
        assert_eq!(cfg.html_path, tmp.path().join("resume.html"));
        assert!(!cfg.is_document_extension("doc"));
    }

    #[test]
    fn load_invalid_config_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("cvsync.toml"), "invalid toml {{{{").unwrap();

        let cfg = Config::new(tmp.path());
        assert_eq!(cfg.settings.html_file, "index.html");
    }
}
