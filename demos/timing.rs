//! Success and timing wrappers.
//!
//! Run with:
//! ```bash
//! cargo run --example timing
//! ```

use std::thread;
use std::time::Duration;

use loglazy::{LogLevel, LogWork, logger_named};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = loglazy::builder()
        .with_console(true)
        .with_level("debug")
        .with_timing_level(LogLevel::Info)
        .init()?;

    let log = logger_named("reports");

    let rows = log.log_time_at("report build", config.timing_level, || {
        thread::sleep(Duration::from_millis(1_200));
        Ok::<_, std::io::Error>(128)
    })?;

    log.log_success_at(
        config.success_level,
        || format!("published {rows} rows"),
        || Ok::<_, std::io::Error>(()),
    )?;

    // The failure is logged and handed back unchanged.
    let upload: Result<(), std::io::Error> = log.log_time("upload", || {
        thread::sleep(Duration::from_millis(300));
        Err(std::io::Error::other("bucket not found"))
    });
    if let Err(err) = upload {
        println!("upload failed as expected: {err}");
    }

    Ok(())
}
