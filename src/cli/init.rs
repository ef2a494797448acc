//! Init command implementation

use anyhow::{Result, bail};

use wordhint::config::Config;

/// Write a default config file at the global location
pub fn init_command(force: bool) -> Result<()> {
    let path = Config::global_config_path();

    if path.exists() && !force {
        bail!(
            "Config file already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save_to_file(&path)?;
    println!("Created {}", path.display());

    Ok(())
}
