//! The process-wide default logger, configured by the application.
//!
//! Lives in its own test binary so `init_default` runs before anything else
//! touches the shared logger.

use rust_leveled_logger::appenders::MemoryAppender;
use rust_leveled_logger::global;
use rust_leveled_logger::{LogFlags, LogLevel, Logger, LoggerError};
use std::panic::AssertUnwindSafe;
use std::sync::OnceLock;

fn installed() -> &'static MemoryAppender {
    static SINK: OnceLock<MemoryAppender> = OnceLock::new();
    SINK.get_or_init(|| {
        let sink = MemoryAppender::new();
        let logger = Logger::builder()
            .flags(LogFlags::TIME | LogFlags::SHORT_FILE)
            .min_level(LogLevel::Debug)
            .appender(sink.clone())
            .build()
            .unwrap();
        global::init_default(logger).expect("first init must succeed");
        sink
    })
}

// Single test function: the shared logger and its buffer are process-wide.
#[test]
fn test_installed_default_logger() {
    let sink = installed();

    let line = line!() + 1;
    global::info("started");
    global::trace("hidden");
    global::debug_fmt(format_args!("{} workers", 4));
    global::log(LogLevel::Error, "failed");

    let result = std::panic::catch_unwind(AssertUnwindSafe(|| {
        global::panic_fmt(format_args!("bad {}", 7))
    }));
    let payload = result.expect_err("panic must unwind");
    assert_eq!(payload.downcast_ref::<String>().map(String::as_str), Some("bad 7"));

    let lines = sink.lines();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("[INFO] "));
    assert!(lines[0].ends_with(&format!(" default_logger.rs:{} started", line)), "{}", lines[0]);
    assert!(lines[1].starts_with("[DEBUG] "));
    assert!(lines[1].contains(" default_logger.rs:"));
    assert!(lines[1].ends_with(" 4 workers"));
    assert!(lines[2].starts_with("[ERROR] ") && lines[2].ends_with(" failed"));
    assert!(lines[3].starts_with("[PANIC] ") && lines[3].ends_with(" bad 7"));

    assert_eq!(global::default_logger().level(), LogLevel::Debug.value());
    assert!(matches!(
        global::init_default(Logger::standard()),
        Err(LoggerError::DefaultAlreadyInitialized)
    ));
}
