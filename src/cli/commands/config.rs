//! Config command handler
//!
//! `get` prints values; `set` and `unset` edit and persist the config file;
//! `reset` deletes the file after confirmation.

use crate::args::ConfigSubcommand;
use nu_transcript::config::Config;
use nu_transcript::{debug, error};
use std::io::{self, BufRead, Write};

/// Dispatch config subcommands
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    let outcome = match subcommand {
        None | Some(ConfigSubcommand::Get { key: None }) => {
            println!("\n=== Configuration ({}) ===\n", Config::get_config_file_path().display());
            print!("{config}");
            Ok(())
        }
        Some(ConfigSubcommand::Get { key: Some(key) }) => config
            .get(&key)
            .map(|value| println!("{value}"))
            .ok_or_else(|| format!("Unknown config key: '{key}'")),
        Some(ConfigSubcommand::Set { key, value }) => config
            .set(&key, &value)
            .and_then(|()| persist(config))
            .map(|()| println!("✓ Set {key} = {value}")),
        Some(ConfigSubcommand::Unset { key }) => config
            .unset(&key, defaults)
            .and_then(|()| persist(config))
            .map(|()| println!("✓ Reset {key} to default")),
        Some(ConfigSubcommand::Reset) => reset(),
    };

    if let Err(e) = outcome {
        error!("config: {e}");
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
}

fn persist(config: &Config) -> Result<(), String> {
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))?;
    debug!("Config saved to {}", Config::get_config_file_path().display());
    Ok(())
}

fn confirmed(prompt: &str) -> bool {
    print!("{prompt} (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    if io::stdin().lock().read_line(&mut response).is_err() {
        return false;
    }
    matches!(response.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

fn reset() -> Result<(), String> {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return Ok(());
    }
    if !confirmed("Reset configuration to defaults?") {
        println!("✗ Reset cancelled");
        return Ok(());
    }
    Config::reset().map_err(|e| format!("Failed to remove config file: {e}"))?;
    println!("✓ Config reset to defaults");
    Ok(())
}
