//! Config subcommands handler

use std::path::Path;

use anyhow::Result;

use historai::Config;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config: &Config) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Print where the config file is read from.
pub fn handle_path(explicit: Option<&Path>) -> Result<()> {
    let path = super::config_path(explicit)?;
    println!("{}", path.display());
    Ok(())
}

/// Open configuration file in the default editor.
///
/// Uses $EDITOR environment variable (defaults to 'vi').
#[cfg(not(tarpaulin_include))]
pub fn handle_edit(explicit: Option<&Path>) -> Result<()> {
    let config_path = super::config_path(explicit)?;

    // Ensure config exists
    if !config_path.exists() {
        Config::default().save_to(&config_path)?;
    }

    // Get editor from environment
    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());

    eprintln!("Opening {} with {}", config_path.display(), editor);

    let status = std::process::Command::new(&editor)
        .arg(&config_path)
        .status()
        .map_err(|e| anyhow::anyhow!("Failed to open editor: {}", e))?;
    if !status.success() {
        anyhow::bail!("Editor exited with {}", status);
    }

    // Fail if the edited file no longer parses.
    Config::load_from(&config_path)?;
    Ok(())
}
