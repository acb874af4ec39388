//! Config command implementation.

use anyhow::Result;

use crate::config::Config;

/// Show the effective configuration.
pub fn show(config: &Config, json: bool) -> Result<()> {
    if json {
        return super::print_json(config);
    }

    println!("L'nui'suti CLI Configuration");
    println!("{:-<40}", "");
    println!(
        "Data Path:   {}",
        config
            .data_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(not set)".to_string())
    );
    println!("Seed Data:   {}", if config.no_seed { "off" } else { "on" });
    println!("Bind:        {}", config.bind);

    if let Some(config_path) = Config::config_file_path() {
        println!("\nConfig file: {}", config_path.display());
    }

    Ok(())
}

/// Print the config file location.
pub fn path() -> Result<()> {
    match Config::config_file_path() {
        Some(path) => println!("{}", path.display()),
        None => println!("(no config file path available)"),
    }
    Ok(())
}
