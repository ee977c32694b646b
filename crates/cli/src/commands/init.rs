use std::path::Path;

use roster_core::config::RosterConfig;
use tracing::info;

/// Run the `init` command: write a default configuration file.
pub fn run(config_path: &str, data_file: Option<&str>, force: bool) -> anyhow::Result<()> {
    let path = Path::new(config_path);
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists; pass --force to overwrite it",
            path.display()
        );
    }

    let mut config = RosterConfig::generate_default();
    if let Some(file) = data_file {
        config.roster.data_file = file.to_string();
    }
    config.validate()?;

    std::fs::write(path, config.to_toml()?)?;
    info!("Wrote configuration to {}", path.display());

    println!("Configuration written to {}", path.display());
    println!("  Data file: {}", config.roster.data_file);
    println!("  Autosave:  {}", config.roster.autosave);
    Ok(())
}
