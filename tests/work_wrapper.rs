mod common;

use std::cell::Cell;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::thread;
use std::time::Duration;

use common::{Line, Recorder, capture};
use loglazy::{LogLevel, LogWork, logger_named};
use tracing::level_filters::LevelFilter;

#[derive(Debug, PartialEq, Eq)]
struct Unsupported(u32);

#[test]
fn test_log_success_returns_value_and_logs_info() {
    let ran = Cell::new(false);
    let (result, out) = capture(LevelFilter::TRACE, || {
        logger_named("Test").log_success(">>>MESSAGE<<<", || {
            ran.set(true);
            Ok::<_, Unsupported>((0..10).map(|i| i * i).collect::<Vec<u32>>())
        })
    });

    assert!(ran.get());
    assert_eq!(result.unwrap()[9], 81);
    let lines = out.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("INFO"));
    assert!(lines[0].contains(">>>MESSAGE<<<"));
}

#[test]
fn test_log_success_with_producer() {
    let (result, out) = capture(LevelFilter::TRACE, || {
        logger_named("Test").log_success_with(|| ">>>MESSAGE<<<".to_string(), || {
            Ok::<_, Unsupported>(7)
        })
    });

    assert_eq!(result, Ok(7));
    let text = out.contents();
    assert!(text.contains("INFO"));
    assert!(text.contains(">>>MESSAGE<<<"));
}

#[test]
fn test_log_success_at_custom_level() {
    let channel = Recorder::up_to(LogLevel::Trace);
    let result = channel.log_success_at(LogLevel::Debug, || "loaded".to_string(), || {
        Ok::<_, Unsupported>("payload")
    });

    assert_eq!(result, Ok("payload"));
    assert_eq!(
        channel.lines(),
        vec![Line {
            level: LogLevel::Debug,
            message: "loaded".to_string(),
            error: None,
        }]
    );
}

#[test]
fn test_log_success_failure_returns_same_error() {
    let channel = Recorder::up_to(LogLevel::Trace);
    let result: Result<(), _> = channel.log_success("saved", || Err(Unsupported(17)));

    assert_eq!(result, Err(Unsupported(17)));
    assert_eq!(
        channel.lines(),
        vec![Line {
            level: LogLevel::Warning,
            message: "Failed: saved".to_string(),
            error: None,
        }]
    );
}

#[test]
fn test_log_success_message_not_built_before_work_finishes() {
    let channel = Recorder::up_to(LogLevel::Trace);
    let work_done = Cell::new(false);
    let built_early = Cell::new(false);

    let _ = channel.log_success_with(
        || {
            if !work_done.get() {
                built_early.set(true);
            }
            "done".to_string()
        },
        || {
            work_done.set(true);
            Ok::<_, Unsupported>(())
        },
    );

    assert!(!built_early.get());
    assert_eq!(channel.lines().len(), 1);
}

#[test]
fn test_log_success_disabled_level_skips_message() {
    let channel = Recorder::up_to(LogLevel::Warning);
    let result = channel.log_success_with(|| panic!("info message built while disabled"), || {
        Ok::<_, Unsupported>(1)
    });
    assert_eq!(result, Ok(1));
    assert!(channel.lines().is_empty());
}

#[test]
fn test_log_success_panic_logs_failure_and_keeps_panicking() {
    let channel = Recorder::up_to(LogLevel::Trace);
    let outcome = catch_unwind(AssertUnwindSafe(|| {
        channel.log_success("never finished", || -> Result<(), Unsupported> {
            panic!("worker exploded")
        })
    }));

    let payload = outcome.unwrap_err();
    assert_eq!(payload.downcast_ref::<&str>(), Some(&"worker exploded"));
    assert_eq!(
        channel.lines(),
        vec![Line {
            level: LogLevel::Warning,
            message: "Failed: never finished".to_string(),
            error: None,
        }]
    );
}

#[test]
fn test_log_time() {
    let (result, out) = capture(LevelFilter::TRACE, || {
        logger_named("Test").log_time("PROCESS_NAME", || {
            thread::sleep(Duration::from_secs(1));
            Ok::<_, Unsupported>("slept")
        })
    });

    assert_eq!(result, Ok("slept"));
    let lines = out.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("DEBUG"));
    assert!(lines[0].contains("The execution of the PROCESS_NAME took 1 second(s)"));
}

#[test]
fn test_log_time_info() {
    let (_, out) = capture(LevelFilter::TRACE, || {
        logger_named("Test").log_time_at("PROCESS_NAME", LogLevel::Info, || {
            thread::sleep(Duration::from_secs(1));
            Ok::<_, Unsupported>(())
        })
    });

    let text = out.contents();
    assert!(text.contains("INFO"));
    assert!(text.contains("PROCESS_NAME"));
    assert!(text.contains("took 1 second(s)"));
}

#[test]
fn test_log_time_fail() {
    let (result, out) = capture(LevelFilter::TRACE, || {
        logger_named("Test").log_time_at("PROCESS_NAME", LogLevel::Info, || {
            thread::sleep(Duration::from_secs(1));
            Err::<(), _>(Unsupported(3))
        })
    });

    assert_eq!(result, Err(Unsupported(3)));
    let lines = out.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("WARN"));
    assert!(lines[0].contains("PROCESS_NAME execution failed after 1 second(s)"));
}

#[test]
fn test_log_time_fast_work_in_milliseconds() {
    let channel = Recorder::up_to(LogLevel::Debug);
    let result = channel.log_time("quick", || Ok::<_, Unsupported>(5));

    assert_eq!(result, Ok(5));
    let lines = channel.lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].level, LogLevel::Debug);
    assert!(lines[0].message.starts_with("The execution of the quick took "));
    assert!(lines[0].message.ends_with(" milliseconds"));
}

#[test]
fn test_log_time_below_threshold_still_runs_work() {
    let channel = Recorder::up_to(LogLevel::Info);
    let ran = Cell::new(false);
    let result = channel.log_time("hidden", || {
        ran.set(true);
        Ok::<_, Unsupported>(())
    });

    assert!(ran.get());
    assert_eq!(result, Ok(()));
    assert!(channel.lines().is_empty());
}

#[test]
fn test_log_time_panic_logs_failure() {
    let channel = Recorder::up_to(LogLevel::Trace);
    let outcome = catch_unwind(AssertUnwindSafe(|| {
        channel.log_time("crashy", || -> Result<(), Unsupported> { panic!("boom") })
    }));

    assert!(outcome.is_err());
    let lines = channel.lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].level, LogLevel::Warning);
    assert!(lines[0].message.starts_with("crashy execution failed after "));
}
