use std::sync::Arc;

use stream_logger::{log_print, BufferSink, LogLevel, Logger, SharedMutex};

fn field(record: &str, pos: usize) -> &str {
    record.split_whitespace().nth(pos).unwrap_or("")
}

fn lock_of(logger: &Logger, level: LogLevel) -> SharedMutex {
    logger.stream(level).unwrap().mutex().unwrap()
}

#[test]
fn test_default_construction_signs_and_grouping() {
    let logger = Logger::new();

    let expected = [
        (LogLevel::Info, 'I'),
        (LogLevel::Verbose, 'V'),
        (LogLevel::Warning, 'W'),
        (LogLevel::Error, 'E'),
        (LogLevel::Assert, 'A'),
    ];
    for (level, sign) in expected {
        let stream = logger.stream(level).unwrap();
        assert!(stream.enabled());
        assert_eq!(stream.sign(), sign);
    }

    // Info, Verbose and Warning share the stdout lock; Error and Assert
    // share the stderr lock; the two groups are independent.
    let info = lock_of(&logger, LogLevel::Info);
    assert!(Arc::ptr_eq(&info, &lock_of(&logger, LogLevel::Verbose)));
    assert!(Arc::ptr_eq(&info, &lock_of(&logger, LogLevel::Warning)));
    let error = lock_of(&logger, LogLevel::Error);
    assert!(Arc::ptr_eq(&error, &lock_of(&logger, LogLevel::Assert)));
    assert!(!Arc::ptr_eq(&info, &error));
}

#[cfg(feature = "level-debug")]
#[test]
fn test_debug_slot_joins_stdout_group() {
    let logger = Logger::new();
    let debug = logger.stream(LogLevel::Debug).unwrap();
    assert!(debug.enabled());
    assert_eq!(debug.sign(), 'D');
    assert!(Arc::ptr_eq(
        &lock_of(&logger, LogLevel::Debug),
        &lock_of(&logger, LogLevel::Info)
    ));
}

#[cfg(not(feature = "level-debug"))]
#[test]
fn test_debug_level_is_out_of_range() {
    let mut logger = Logger::new();
    assert!(logger.stream(LogLevel::Debug).is_none());

    // Out-of-range configuration and printing are silent no-ops.
    let sink = Arc::new(BufferSink::new());
    logger.set_stream(LogLevel::Debug, sink.clone());
    logger.disable_level(LogLevel::Debug);
    logger.print(LogLevel::Debug, 0, "t", "dropped");
    assert!(sink.contents().is_empty());
}

#[test]
fn test_set_stream_shares_lock_by_sink_identity() {
    let sink = Arc::new(BufferSink::new());
    let mut logger = Logger::new();

    logger.set_stream(LogLevel::Info, sink.clone());
    logger.print(LogLevel::Info, 0, "t", "one");

    let out = sink.contents();
    assert_eq!(out.lines().count(), 1);
    assert_eq!(field(out.lines().next().unwrap(), 4), "I");

    // Reconfiguring Warning to the sink Info already owns reuses Info's lock.
    logger.set_stream(LogLevel::Warning, sink.clone());
    assert!(Arc::ptr_eq(
        &lock_of(&logger, LogLevel::Info),
        &lock_of(&logger, LogLevel::Warning)
    ));

    logger.print(LogLevel::Warning, 0, "t", "two");
    let out = sink.contents();
    assert_eq!(out.lines().count(), 2);
    assert_eq!(field(out.lines().nth(1).unwrap(), 4), "W");
}

#[test]
fn test_set_stream_distinct_sinks_get_distinct_locks() {
    let mut logger = Logger::new();
    let first = Arc::new(BufferSink::new());
    let second = Arc::new(BufferSink::new());

    logger.set_stream(LogLevel::Info, first.clone());
    logger.set_stream(LogLevel::Warning, second.clone());

    assert!(!Arc::ptr_eq(
        &lock_of(&logger, LogLevel::Info),
        &lock_of(&logger, LogLevel::Warning)
    ));

    // A third level joining the first sink lands in the first lock group.
    logger.set_stream(LogLevel::Error, first);
    assert!(Arc::ptr_eq(
        &lock_of(&logger, LogLevel::Info),
        &lock_of(&logger, LogLevel::Error)
    ));
}

#[test]
fn test_disable_level_silences_only_that_level() {
    let sink = Arc::new(BufferSink::new());
    let mut logger = Logger::new();
    logger.set_stream(LogLevel::Info, sink.clone());
    logger.set_stream(LogLevel::Warning, sink.clone());

    logger.disable_level(LogLevel::Warning);
    logger.print(LogLevel::Warning, 0, "t", "dropped");
    assert!(sink.contents().is_empty());

    logger.print(LogLevel::Info, 0, "t", "kept");
    assert_eq!(sink.contents().lines().count(), 1);

    // Info's lock survived its sibling being disabled; re-enabling Warning
    // rejoins the group.
    logger.set_stream(LogLevel::Warning, sink.clone());
    assert!(Arc::ptr_eq(
        &lock_of(&logger, LogLevel::Info),
        &lock_of(&logger, LogLevel::Warning)
    ));
}

#[test]
fn test_numeric_bodies_render_as_decimal_text() {
    let sink = Arc::new(BufferSink::new());
    let mut logger = Logger::new();
    logger.set_stream(LogLevel::Info, sink.clone());

    logger.print(LogLevel::Info, 0, "t", &42);
    logger.print(LogLevel::Info, 0, "t", &-7i64);
    logger.print(LogLevel::Info, 0, "t", &2.5f64);
    logger.print(LogLevel::Info, 0, "t", &true);

    let out = sink.contents();
    let bodies: Vec<&str> = out.lines().map(|l| field(l, 6)).collect();
    assert_eq!(bodies, ["42", "-7", "2.5", "true"]);
}

#[test]
fn test_string_kinds_all_print() {
    let sink = Arc::new(BufferSink::new());
    let mut logger = Logger::new();
    logger.set_stream(LogLevel::Info, sink.clone());

    let owned = String::from("owned");
    let borrowed: &str = "borrowed";
    let cow = std::borrow::Cow::Borrowed("cow");
    logger.print(LogLevel::Info, 0, "t", &owned);
    logger.print(LogLevel::Info, 0, "t", borrowed);
    logger.print(LogLevel::Info, 0, "t", &cow);

    let out = sink.contents();
    let bodies: Vec<&str> = out.lines().map(|l| field(l, 6)).collect();
    assert_eq!(bodies, ["owned", "borrowed", "cow"]);
}

#[test]
fn test_multi_value_print_emits_in_order() {
    let sink = Arc::new(BufferSink::new());
    let mut logger = Logger::new();
    logger.set_stream(LogLevel::Verbose, sink.clone());

    log_print!(logger, LogLevel::Verbose, 0, "multi", "first", 2, "third");

    let out = sink.contents();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    for line in &lines {
        assert_eq!(field(line, 4), "V");
        assert_eq!(field(line, 5), "multi:");
    }
    assert!(lines[0].ends_with("multi: first"));
    assert!(lines[1].ends_with("multi: 2"));
    assert!(lines[2].ends_with("multi: third"));
}

#[test]
fn test_pid_field_matches_process_and_survives_update() {
    let sink = Arc::new(BufferSink::new());
    let mut logger = Logger::new();
    logger.set_stream(LogLevel::Info, sink.clone());

    logger.print(LogLevel::Info, 0, "t", "before");
    logger.update_pid();
    logger.print(LogLevel::Info, 0, "t", "after");

    let pid = std::process::id().to_string();
    let out = sink.contents();
    for line in out.lines() {
        assert_eq!(field(line, 2), pid);
    }
}

#[test]
fn test_level_names_parse() {
    assert_eq!("info".parse::<LogLevel>().unwrap(), LogLevel::Info);
    assert_eq!("Verbose".parse::<LogLevel>().unwrap(), LogLevel::Verbose);
    assert_eq!("WARNING".parse::<LogLevel>().unwrap(), LogLevel::Warning);
    assert_eq!("error".parse::<LogLevel>().unwrap(), LogLevel::Error);
    assert_eq!("assert".parse::<LogLevel>().unwrap(), LogLevel::Assert);
    assert_eq!("wtf".parse::<LogLevel>().unwrap(), LogLevel::Assert);
    assert_eq!("debug".parse::<LogLevel>().unwrap(), LogLevel::Debug);
    assert!("trace".parse::<LogLevel>().is_err());
}
