//! Example of loading logging configuration from a TOML file.
//!
//! Run with:
//! ```bash
//! cargo run --example config_toml
//! ```

use serde::Deserialize;
use std::fs;

use loglazy::{LazyLog, LogWork, logger_named};

#[derive(Deserialize)]
struct Config {
    log: loglazy::LogConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = "demos/config.toml";
    let config_content = fs::read_to_string(config_path)?;

    let root: Config = toml::from_str(&config_content)?;
    let config = root.log;
    config.validate()?;

    loglazy::init_logging(&config, None)?;

    let log = logger_named("sessions");
    log.log_debug(|| format!("config loaded from {config_path}"));

    let active = log.log_time_at("session sweep", config.timing_level, || {
        Ok::<_, std::io::Error>(vec!["alice", "bob"])
    })?;
    log.log_success_at(
        config.success_level,
        || format!("{} sessions kept", active.len()),
        || Ok::<_, std::io::Error>(()),
    )?;

    Ok(())
}
