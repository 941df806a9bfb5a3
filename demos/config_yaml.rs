//! Example of loading logging configuration from a YAML file.
//!
//! Run with:
//! ```bash
//! cargo run --example config_yaml
//! ```

use std::collections::HashMap;
use std::fs;

use loglazy::{LazyLog, LogWork, logger};

struct Importer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = "demos/config.yaml";
    let config_content = fs::read_to_string(config_path)?;

    let root: HashMap<String, serde_yaml::Value> = serde_yaml::from_str(&config_content)?;
    let config: loglazy::LogConfig = serde_yaml::from_value(root["log"].clone())?;

    let config = loglazy::LogBuilder::from_config(config).init()?;

    let log = logger::<Importer>();
    log.log_trace(|| "scanning inbox".to_string());

    let parsed = log.log_time_at("csv parse", config.timing_level, || {
        "1,2,3"
            .split(',')
            .map(str::parse::<u32>)
            .collect::<Result<Vec<_>, _>>()
    })?;
    log.log_info(|| format!("parsed {} values", parsed.len()));

    Ok(())
}
