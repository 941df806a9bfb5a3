use crate::{Error, LogConfig, Result};
use tracing::Subscriber;
#[cfg(feature = "time")]
use tracing_subscriber::fmt::time::OffsetTime;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

const CRATE_TARGET: &str = env!("CARGO_CRATE_NAME");

/// Initialize logging with the given configuration and optional CLI verbosity override.
pub fn init_logging(config: &LogConfig, cli_verbose: Option<u8>) -> Result<()> {
    config.validate()?;

    let log_spec = effective_log_spec(config, cli_verbose);
    let env_filter = EnvFilter::try_new(&log_spec).map_err(|e| Error::Init(e.to_string()))?;
    let registry = tracing_subscriber::registry().with(env_filter);

    if config.console {
        registry.with(console_layer(config)?).try_init()
    } else {
        // No output; events are still filtered, which keeps level checks honest.
        registry.try_init()
    }
    .map_err(|e| Error::Init(e.to_string()))
}

/// Build the console fmt layer, text or JSON.
fn console_layer<S>(config: &LogConfig) -> Result<Box<dyn Layer<S> + Send + Sync>>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let layer = tracing_subscriber::fmt::layer()
        .with_target(config.target)
        .with_thread_ids(config.thread_ids)
        .with_thread_names(config.thread_names);

    #[cfg(feature = "time")]
    let layer = layer.with_timer(OffsetTime::local_rfc_3339()?);

    Ok(if config.is_json() {
        layer.json().boxed()
    } else {
        layer.boxed()
    })
}

/// Determine the effective log specification, considering config and CLI overrides.
fn effective_log_spec(config: &LogConfig, cli_verbose: Option<u8>) -> String {
    // RUST_LOG takes precedence over everything
    if let Ok(rust_log) = std::env::var("RUST_LOG")
        && !rust_log.is_empty()
    {
        return rust_log;
    }

    // CLI verbose flag overrides config level
    if let Some(verbose) = cli_verbose {
        return match verbose {
            0 => config.level.clone(),
            1 => format!("{},{CRATE_TARGET}=debug", config.level),
            2 => format!("{},{CRATE_TARGET}=trace", config.level),
            _ => "trace".to_string(),
        };
    }

    if config.level.is_empty() {
        format!("info,{CRATE_TARGET}=info")
    } else {
        config.level.clone()
    }
}
