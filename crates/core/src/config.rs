//! TOML-based configuration for the roster tools.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::csv_codec::DEFAULT_FILENAME;
use crate::error::{Result, RosterError};

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "roster.toml";

/// Top-level configuration, deserialized from a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct RosterConfig {
    #[serde(default)]
    pub roster: RosterSection,
}

/// Roster storage settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterSection {
    /// CSV file the roster is loaded from and saved to.
    #[serde(default = "default_data_file")]
    pub data_file: String,
    /// Save after every change made from the interactive menu.
    #[serde(default = "default_autosave")]
    pub autosave: bool,
}

impl Default for RosterSection {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            autosave: default_autosave(),
        }
    }
}

fn default_data_file() -> String {
    DEFAULT_FILENAME.into()
}

fn default_autosave() -> bool {
    true
}

impl RosterConfig {
    /// Load configuration from a TOML file at the given path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| RosterError::Config(format!("failed to parse config: {e}")))?;
        Ok(config)
    }

    /// Like [`RosterConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match Self::load(path) {
            Err(RosterError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok(Self::generate_default())
            }
            other => other,
        }
    }

    /// Validate the configuration, returning an error for invalid values.
    pub fn validate(&self) -> Result<()> {
        if self.roster.data_file.trim().is_empty() {
            return Err(RosterError::Config(
                "roster.data_file must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Generate the configuration written by `roster init`.
    pub fn generate_default() -> Self {
        Self::default()
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| RosterError::Config(format!("failed to serialize config: {e}")))
    }

    pub fn data_file(&self) -> PathBuf {
        PathBuf::from(&self.roster.data_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_TOML: &str = r#"
[roster]
data_file = "/srv/school/students.csv"
autosave = false
"#;

    #[test]
    fn parse_full_config() {
        let cfg: RosterConfig = toml::from_str(SAMPLE_TOML).expect("sample TOML should parse");
        assert_eq!(cfg.roster.data_file, "/srv/school/students.csv");
        assert!(!cfg.roster.autosave);
        assert_eq!(cfg.data_file(), PathBuf::from("/srv/school/students.csv"));
    }

    #[test]
    fn missing_fields_use_defaults() {
        let cfg: RosterConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.roster.data_file, "students.csv");
        assert!(cfg.roster.autosave);

        let cfg: RosterConfig = toml::from_str("[roster]\nautosave = false\n").unwrap();
        assert_eq!(cfg.roster.data_file, "students.csv");
    }

    #[test]
    fn roundtrip_serialization() {
        let cfg: RosterConfig = toml::from_str(SAMPLE_TOML).unwrap();
        let serialized = cfg.to_toml().expect("should serialize");
        let deserialized: RosterConfig =
            toml::from_str(&serialized).expect("should deserialize roundtrip");
        assert_eq!(deserialized, cfg);
    }

    #[test]
    fn generate_default_is_valid() {
        let cfg = RosterConfig::generate_default();
        cfg.validate().expect("default config should be valid");
    }

    #[test]
    fn validate_requires_data_file() {
        let mut cfg = RosterConfig::generate_default();
        cfg.roster.data_file = "  ".into();
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("data_file"));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.toml");
        std::fs::write(&path, SAMPLE_TOML).unwrap();

        let cfg = RosterConfig::load(&path).expect("should load from file");
        assert_eq!(cfg.roster.data_file, "/srv/school/students.csv");
    }

    #[test]
    fn load_nonexistent_file_returns_io_error() {
        let result = RosterConfig::load(Path::new("/nonexistent/roster.toml"));
        assert!(matches!(result, Err(RosterError::Io(_))));
    }

    #[test]
    fn load_or_default_on_missing_file() {
        let cfg = RosterConfig::load_or_default(Path::new("/nonexistent/roster.toml")).unwrap();
        assert_eq!(cfg, RosterConfig::generate_default());
    }

    #[test]
    fn load_invalid_toml_returns_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "this is [[[not valid toml").unwrap();

        let result = RosterConfig::load(&path);
        assert!(matches!(result, Err(RosterError::Config(_))));
        assert!(result.unwrap_err().to_string().contains("config"));

        let result = RosterConfig::load_or_default(&path);
        assert!(result.is_err());
    }
}
