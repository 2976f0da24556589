use std::sync::Arc;

use lazy_static::lazy_static;
use parking_lot::RwLock;

use crate::logger::{LogLevel, Logger};
use crate::sink::Sink;

lazy_static! {
    /// The process-wide default logger, lazily built with the default
    /// stdout/stderr routing on first touch and alive for the rest of the
    /// process. Printing takes the read lock, so any number of threads log
    /// concurrently; reconfiguration takes the write lock.
    static ref DEFAULT_LOG: RwLock<Logger> = RwLock::new(Logger::new());
}

/// The process-wide default logger, used by the per-level macros.
///
/// Prefer passing an explicitly constructed [`Logger`] where the call graph
/// allows dependency injection; the global exists for call sites that have
/// no logger handle, the way the convenience macros use it.
pub fn default_log() -> &'static RwLock<Logger> {
    &DEFAULT_LOG
}

/// Points `level` of the default logger at `sink`.
/// See [`Logger::set_stream`] for the lock-sharing rule.
pub fn set_stream(level: LogLevel, sink: Arc<dyn Sink>) {
    DEFAULT_LOG.write().set_stream(level, sink);
}

/// Disables `level` on the default logger.
pub fn disable_level(level: LogLevel) {
    DEFAULT_LOG.write().disable_level(level);
}

/// Refreshes the cached process id on the default logger. Call in the child
/// after a fork.
pub fn update_pid() {
    DEFAULT_LOG.write().update_pid();
}

/// Applies environment configuration to the default logger.
///
/// `STREAM_LOG_DISABLE` holds a comma-separated list of level names
/// (`info`, `verbose`, `warning`, `error`, `assert`/`wtf`, `debug`) to
/// disable at startup. Names that do not parse are ignored.
pub fn init_from_env() {
    if let Ok(value) = std::env::var("STREAM_LOG_DISABLE") {
        for name in value.split(',') {
            if let Ok(level) = name.trim().parse::<LogLevel>() {
                disable_level(level);
            }
        }
    }
}
