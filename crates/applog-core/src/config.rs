use crate::entry::ActionKind;
use crate::error::AppLogError;
use crate::result::AppLogResult;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const ERROR_DIR_VAR: &str = "LOGGER_FOLDER_PATH";
pub const DEFAULT_CONSOLE_PREFIX: &str = "[APP] ";

/// Resolved logger settings, built once and handed to the loggers
///
/// Directories are optional here; a logger asks for its own directory when it
/// writes and gets `MissingSetting` only if that one is unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    pub error_dir: Option<PathBuf>,
    pub created_dir: Option<PathBuf>,
    pub updated_dir: Option<PathBuf>,
    pub deleted_dir: Option<PathBuf>,
    pub console_prefix: String,
    pub ansi: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            error_dir: None,
            created_dir: None,
            updated_dir: None,
            deleted_dir: None,
            console_prefix: DEFAULT_CONSOLE_PREFIX.to_string(),
            ansi: true,
        }
    }
}

/// On-disk shape of `config.toml`; every field is optional
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub error_dir: Option<PathBuf>,
    #[serde(default)]
    pub created_dir: Option<PathBuf>,
    #[serde(default)]
    pub updated_dir: Option<PathBuf>,
    #[serde(default)]
    pub deleted_dir: Option<PathBuf>,
    #[serde(default)]
    pub console_prefix: Option<String>,
    #[serde(default)]
    pub ansi: Option<bool>,
}

impl FileConfig {
    pub fn from_toml(content: &str) -> AppLogResult<Self> {
        toml::from_str(content).map_err(|e| AppLogError::InvalidConfig(e.to_string()))
    }

    /// Fill unset directories from a variable lookup; non-empty values win
    fn overlay(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty()).map(PathBuf::from);
        if let Some(dir) = var(ERROR_DIR_VAR) {
            self.error_dir = Some(dir);
        }
        if let Some(dir) = var(ActionKind::Create.env_var()) {
            self.created_dir = Some(dir);
        }
        if let Some(dir) = var(ActionKind::Update.env_var()) {
            self.updated_dir = Some(dir);
        }
        if let Some(dir) = var(ActionKind::Delete.env_var()) {
            self.deleted_dir = Some(dir);
        }
        self
    }

    fn resolve(self) -> LoggerConfig {
        let set = |dir: Option<PathBuf>| dir.filter(|d| !d.as_os_str().is_empty());
        LoggerConfig {
            error_dir: set(self.error_dir),
            created_dir: set(self.created_dir),
            updated_dir: set(self.updated_dir),
            deleted_dir: set(self.deleted_dir),
            console_prefix: self
                .console_prefix
                .unwrap_or_else(|| DEFAULT_CONSOLE_PREFIX.to_string()),
            ansi: self.ansi.unwrap_or(true),
        }
    }
}

impl LoggerConfig {
    pub fn new(
        error_dir: impl Into<PathBuf>,
        created_dir: impl Into<PathBuf>,
        updated_dir: impl Into<PathBuf>,
        deleted_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            error_dir: Some(error_dir.into()),
            created_dir: Some(created_dir.into()),
            updated_dir: Some(updated_dir.into()),
            deleted_dir: Some(deleted_dir.into()),
            ..Self::default()
        }
    }

    /// All four directories as siblings under one root
    pub fn under(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self::new(
            root.join("errors"),
            root.join("created"),
            root.join("updated"),
            root.join("deleted"),
        )
    }

    pub fn with_error_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.error_dir = Some(dir.into());
        self
    }

    pub fn with_action_dir(mut self, kind: ActionKind, dir: impl Into<PathBuf>) -> Self {
        let dir = Some(dir.into());
        match kind {
            ActionKind::Create => self.created_dir = dir,
            ActionKind::Update => self.updated_dir = dir,
            ActionKind::Delete => self.deleted_dir = dir,
        }
        self
    }

    pub fn with_console_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.console_prefix = prefix.into();
        self
    }

    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    /// Error log directory, or `MissingSetting` naming its variable
    pub fn error_dir(&self) -> AppLogResult<&Path> {
        self.error_dir
            .as_deref()
            .ok_or_else(|| AppLogError::MissingSetting(ERROR_DIR_VAR.to_string()))
    }

    /// Directory for one action kind, or `MissingSetting` naming its variable
    pub fn dir_for(&self, kind: ActionKind) -> AppLogResult<&Path> {
        let dir = match kind {
            ActionKind::Create => &self.created_dir,
            ActionKind::Update => &self.updated_dir,
            ActionKind::Delete => &self.deleted_dir,
        };
        dir.as_deref()
            .ok_or_else(|| AppLogError::MissingSetting(kind.env_var().to_string()))
    }

    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/applog/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("applog/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("applog\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Directories from the four environment variables only
    pub fn from_env() -> AppLogResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppLogResult<Self> {
        Ok(FileConfig::default().overlay(lookup).resolve())
    }

    /// Platform config file (if any), overlaid by the environment
    pub fn load() -> AppLogResult<Self> {
        Self::load_with(|name| std::env::var(name).ok())
    }

    /// Platform config file (if any), overlaid by `lookup`
    pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> AppLogResult<Self> {
        let file = match Self::config_path() {
            Some(path) => Self::read_file_config(&path)?,
            None => FileConfig::default(),
        };
        Ok(file.overlay(lookup).resolve())
    }

    pub fn load_from(
        path: &Path,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> AppLogResult<Self> {
        Ok(Self::read_file_config(path)?.overlay(lookup).resolve())
    }

    fn read_file_config(path: &Path) -> AppLogResult<FileConfig> {
        if !path.exists() {
            return Ok(FileConfig::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| AppLogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        FileConfig::from_toml(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    fn full_env() -> impl Fn(&str) -> Option<String> {
        env(&[
            ("LOGGER_FOLDER_PATH", "/tmp/errors"),
            ("CREATED_SUCCESS_FOLDER_PATH", "/tmp/created"),
            ("UPDATED_SUCCESS_FOLDER_PATH", "/tmp/updated"),
            ("DELETED_SUCCESS_FOLDER_PATH", "/tmp/deleted"),
        ])
    }

    #[test]
    fn test_from_lookup_reads_all_directories() {
        let config = LoggerConfig::from_lookup(full_env()).unwrap();
        assert_eq!(config.error_dir().unwrap(), Path::new("/tmp/errors"));
        assert_eq!(config.dir_for(ActionKind::Create).unwrap(), Path::new("/tmp/created"));
        assert_eq!(config.dir_for(ActionKind::Update).unwrap(), Path::new("/tmp/updated"));
        assert_eq!(config.dir_for(ActionKind::Delete).unwrap(), Path::new("/tmp/deleted"));
        assert_eq!(config.console_prefix, "[APP] ");
        assert!(config.ansi);
    }

    #[test]
    fn test_error_dir_alone_is_enough_for_error_logging() {
        let config =
            LoggerConfig::from_lookup(env(&[("LOGGER_FOLDER_PATH", "/tmp/errors")])).unwrap();

        assert_eq!(config.error_dir().unwrap(), Path::new("/tmp/errors"));
        assert!(config.created_dir.is_none());
    }

    #[test]
    fn test_missing_variable_is_named_when_its_directory_is_needed() {
        let lookup = env(&[
            ("LOGGER_FOLDER_PATH", "/tmp/errors"),
            ("CREATED_SUCCESS_FOLDER_PATH", "/tmp/created"),
            ("DELETED_SUCCESS_FOLDER_PATH", "/tmp/deleted"),
        ]);
        let config = LoggerConfig::from_lookup(lookup).unwrap();

        assert!(config.dir_for(ActionKind::Create).is_ok());
        match config.dir_for(ActionKind::Update) {
            Err(AppLogError::MissingSetting(name)) => {
                assert_eq!(name, "UPDATED_SUCCESS_FOLDER_PATH")
            }
            other => panic!("expected MissingSetting, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_variable_counts_as_missing() {
        let lookup = env(&[
            ("LOGGER_FOLDER_PATH", ""),
            ("CREATED_SUCCESS_FOLDER_PATH", "/tmp/created"),
            ("UPDATED_SUCCESS_FOLDER_PATH", "/tmp/updated"),
            ("DELETED_SUCCESS_FOLDER_PATH", "/tmp/deleted"),
        ]);
        let config = LoggerConfig::from_lookup(lookup).unwrap();
        assert!(matches!(
            config.error_dir(),
            Err(AppLogError::MissingSetting(name)) if name == "LOGGER_FOLDER_PATH"
        ));
    }

    #[test]
    fn test_file_config_overlaid_by_environment() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
error_dir = "/srv/errors"
created_dir = "/srv/created"
updated_dir = "/srv/updated"
deleted_dir = "/srv/deleted"
console_prefix = "[API] "
ansi = false
"#,
        )
        .unwrap();

        let config =
            LoggerConfig::load_from(&path, env(&[("DELETED_SUCCESS_FOLDER_PATH", "/tmp/gone")]))
                .unwrap();
        assert_eq!(config.error_dir, Some(PathBuf::from("/srv/errors")));
        assert_eq!(config.deleted_dir, Some(PathBuf::from("/tmp/gone")));
        assert_eq!(config.console_prefix, "[API] ");
        assert!(!config.ansi);
    }

    #[test]
    fn test_missing_file_falls_back_to_environment() {
        let dir = tempdir().unwrap();
        let config = LoggerConfig::load_from(&dir.path().join("absent.toml"), full_env()).unwrap();
        assert_eq!(config.created_dir, Some(PathBuf::from("/tmp/created")));
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "error_dir = [").unwrap();
        assert!(matches!(
            LoggerConfig::load_from(&path, full_env()),
            Err(AppLogError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_under_root() {
        let config = LoggerConfig::under("/data/logs");
        assert_eq!(config.error_dir, Some(PathBuf::from("/data/logs/errors")));
        assert_eq!(config.created_dir, Some(PathBuf::from("/data/logs/created")));
    }
}
