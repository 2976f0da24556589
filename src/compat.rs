//! Bridge from the `log` facade into the default logger.
//!
//! Installing the bridge routes ecosystem `log::info!`-style call sites
//! through [`default_log`](crate::default_log), with the record target as
//! the scope tag. Levels map Error→Error, Warn→Warning, Info→Info,
//! Debug→Debug and Trace→Verbose; a mapped level that is disabled (or has
//! no stream slot in this build) drops the record silently, like any other
//! print.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::default_log::default_log;
use crate::logger::LogLevel;

/// `log::Log` implementation forwarding to the default logger.
pub struct LogBridge;

static BRIDGE: LogBridge = LogBridge;

fn map_level(level: Level) -> LogLevel {
    match level {
        Level::Error => LogLevel::Error,
        Level::Warn => LogLevel::Warning,
        Level::Info => LogLevel::Info,
        Level::Debug => LogLevel::Debug,
        Level::Trace => LogLevel::Verbose,
    }
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        default_log()
            .read()
            .stream(map_level(metadata.level()))
            .is_some_and(|stream| stream.enabled())
    }

    fn log(&self, record: &Record) {
        let body = record.args().to_string();
        default_log()
            .read()
            .print(map_level(record.level()), 0, record.target(), &body);
    }

    fn flush(&self) {}
}

/// Registers the bridge as the global `log` logger and opens the facade's
/// level filter all the way; per-level filtering stays with the streams.
/// Fails if another global logger was installed first.
pub fn install() -> Result<(), SetLoggerError> {
    log::set_logger(&BRIDGE).map(|()| log::set_max_level(LevelFilter::Trace))
}
