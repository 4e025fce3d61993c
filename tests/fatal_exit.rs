//! Fatal records end the process with status 1.
//!
//! Each test re-runs this test binary on itself with `FATAL_CHILD` set. The
//! child performs the fatal call; the parent checks the exit status and what
//! reached stderr.

use rust_leveled_logger::appenders::{ConsoleAppender, FileAppender};
use rust_leveled_logger::{fatal, LogFlags, LogLevel, Logger, FATAL_EXIT_CODE};
use std::process::{Command, Output};
use tempfile::TempDir;

const CHILD_ENV: &str = "FATAL_CHILD";
const FILE_ENV: &str = "FATAL_CHILD_FILE";

fn is_child() -> bool {
    std::env::var_os(CHILD_ENV).is_some()
}

fn run_child(test_name: &str, envs: &[(&str, &str)]) -> Output {
    let exe = std::env::current_exe().expect("Failed to locate test binary");
    Command::new(exe)
        .args([test_name, "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_ENV, "1")
        .envs(envs.iter().copied())
        .output()
        .expect("Failed to run child process")
}

fn stderr_logger(level: LogLevel) -> Logger {
    Logger::builder()
        .flags(LogFlags::empty())
        .min_level(level)
        .appender(ConsoleAppender::stderr())
        .build()
        .unwrap()
}

#[test]
fn test_fatal_writes_and_exits_with_status_one() {
    if is_child() {
        stderr_logger(LogLevel::Trace).fatal("going down");
    }

    let output = run_child("test_fatal_writes_and_exits_with_status_one", &[]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(FATAL_EXIT_CODE));
    assert!(stderr.contains("[FATAL] going down\n"), "stderr was: {}", stderr);
}

#[test]
fn test_suppressed_fatal_still_exits() {
    if is_child() {
        // Threshold above FATAL: nothing is written, the exit still happens.
        let logger = Logger::builder()
            .flags(LogFlags::empty())
            .min_level_value(80)
            .appender(ConsoleAppender::stderr())
            .build()
            .unwrap();
        logger.fatal("silent");
    }

    let output = run_child("test_suppressed_fatal_still_exits", &[]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(FATAL_EXIT_CODE));
    assert!(!stderr.contains("silent"), "stderr was: {}", stderr);
}

#[test]
fn test_fatal_macro_formats_message() {
    if is_child() {
        let logger = stderr_logger(LogLevel::Error);
        fatal!(logger, "disk {} is {}% full", "/var", 100);
    }

    let output = run_child("test_fatal_macro_formats_message", &[]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(FATAL_EXIT_CODE));
    assert!(stderr.contains("[FATAL] disk /var is 100% full\n"), "stderr was: {}", stderr);
}

#[test]
fn test_fatal_flushes_file_appender_before_exit() {
    if is_child() {
        let path = std::env::var(FILE_ENV).expect("child needs a log path");
        let logger = Logger::builder()
            .flags(LogFlags::empty())
            .appender(FileAppender::new(path).unwrap())
            .build()
            .unwrap();
        logger.info("before");
        logger.fatal("last words");
    }

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("fatal.log");
    let output = run_child(
        "test_fatal_flushes_file_appender_before_exit",
        &[(FILE_ENV, log_file.to_str().unwrap())],
    );

    assert_eq!(output.status.code(), Some(FATAL_EXIT_CODE));
    let content = std::fs::read_to_string(&log_file).expect("Failed to read log file");
    assert_eq!(content, "[INFO] before\n[FATAL] last words\n");
}
