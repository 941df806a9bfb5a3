//! Basic console logging example.
//!
//! This example shows the gated helpers: messages are only built when their
//! level is enabled.

use loglazy::{LazyLog, logger, logger_named};

struct Catalog {
    items: Vec<&'static str>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    loglazy::builder()
        .with_console(true)
        .with_level("info")
        .init()?;

    let catalog = Catalog {
        items: vec!["lamp", "desk", "chair"],
    };
    let log = logger::<Catalog>();

    log.log_info(|| format!("catalog loaded with {} items", catalog.items.len()));
    // Debug is disabled at "info": the join below never runs.
    log.log_debug(|| format!("items: {}", catalog.items.join(", ")));

    let err = std::io::Error::other("price feed unreachable");
    log.log_warning_with(&err, || "serving cached prices".to_string());

    logger_named("checkout").pending("apply loyalty discounts", || {
        catalog.items.iter().map(|item| item.len()).sum::<usize>()
    });

    Ok(())
}
