pub mod add;
pub mod delete;
pub mod display;
pub mod init;
pub mod input;
pub mod list;
pub mod menu;
pub mod update;

use std::path::Path;

use roster_core::config::RosterConfig;
use roster_core::csv_codec::load_roster;
use roster_core::error::RosterError;
use roster_core::store::Roster;
use tracing::info;

/// Load the configuration and apply a `--file` override.
pub fn resolve_config(config_path: &str, file: Option<&str>) -> anyhow::Result<RosterConfig> {
    let mut config = RosterConfig::load_or_default(Path::new(config_path))?;
    if let Some(file) = file {
        config.roster.data_file = file.to_string();
    }
    config.validate()?;
    Ok(config)
}

/// Load the roster at `path`, starting empty when the file does not exist yet.
pub fn load_or_empty(path: &Path) -> anyhow::Result<Roster> {
    match load_roster(path) {
        Ok(roster) => Ok(roster),
        Err(RosterError::FileAbsent(_)) => {
            info!("No roster at {}, starting empty", path.display());
            Ok(Roster::new())
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::store::StudentRepository;

    #[test]
    fn resolve_config_defaults_when_missing() {
        let config = resolve_config("/nonexistent/roster.toml", None).unwrap();
        assert_eq!(config.roster.data_file, "students.csv");
    }

    #[test]
    fn resolve_config_file_override() {
        let config = resolve_config("/nonexistent/roster.toml", Some("/tmp/other.csv")).unwrap();
        assert_eq!(config.data_file(), Path::new("/tmp/other.csv"));
    }

    #[test]
    fn resolve_config_rejects_empty_override() {
        assert!(resolve_config("/nonexistent/roster.toml", Some("")).is_err());
    }

    #[test]
    fn load_or_empty_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let roster = load_or_empty(&dir.path().join("students.csv")).unwrap();
        assert!(roster.is_empty());
    }

    #[test]
    fn load_or_empty_propagates_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.csv");
        std::fs::write(&path, "ID,Name,Age,Grades\nS001,Ada,abc,\n").unwrap();
        assert!(load_or_empty(&path).is_err());
    }
}
