//! Tests against the process-wide default logger. The instance is shared by
//! every test in this binary, so each test configures its own severity
//! levels and leaves the others alone.

use std::sync::Arc;

use stream_logger::{log_info, log_info_tag, BufferSink, LogLevel};

#[test]
fn test_macros_hit_default_logger() {
    let sink = Arc::new(BufferSink::new());
    stream_logger::set_stream(LogLevel::Info, sink.clone());

    log_info_tag!("boot", "ready");
    log_info!("untagged");

    let out = sink.contents();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("boot: ready"));
    // Without an explicit tag the calling module path is the scope.
    assert!(lines[1].ends_with("default_log_tests: untagged"));

    stream_logger::disable_level(LogLevel::Info);
    log_info!("dropped");
    assert_eq!(sink.contents().lines().count(), 2);
}

#[test]
fn test_init_from_env_disables_listed_levels() {
    let sink = Arc::new(BufferSink::new());
    stream_logger::set_stream(LogLevel::Verbose, sink.clone());

    std::env::set_var("STREAM_LOG_DISABLE", "verbose, nonsense");
    stream_logger::init_from_env();

    assert!(!stream_logger::default_log()
        .read()
        .stream(LogLevel::Verbose)
        .unwrap()
        .enabled());
    stream_logger::default_log()
        .read()
        .print(LogLevel::Verbose, 0, "t", "dropped");
    assert!(sink.contents().is_empty());
}

#[test]
fn test_log_facade_bridge() {
    let sink = Arc::new(BufferSink::new());
    stream_logger::set_stream(LogLevel::Warning, sink.clone());

    stream_logger::compat::install().unwrap();
    log::warn!(target: "bridge", "via facade: {}", 7);

    let out = sink.contents();
    assert_eq!(out.lines().count(), 1);
    let line = out.lines().next().unwrap();
    assert!(line.ends_with("bridge: via facade: 7"));
    assert_eq!(line.split_whitespace().nth(4), Some("W"));
}

#[test]
fn test_update_pid_keeps_records_consistent() {
    let sink = Arc::new(BufferSink::new());
    stream_logger::set_stream(LogLevel::Error, sink.clone());

    stream_logger::update_pid();
    stream_logger::default_log()
        .read()
        .print(LogLevel::Error, 0, "t", "after refresh");

    let out = sink.contents();
    let line = out.lines().next().unwrap();
    assert_eq!(
        line.split_whitespace().nth(2),
        Some(std::process::id().to_string().as_str())
    );
}
