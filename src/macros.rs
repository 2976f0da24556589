//! Call-site macros.
//!
//! Each severity level has a pair of macros printing to the process-wide
//! default logger: `log_info!(values...)` tags records with the calling
//! module path, `log_info_tag!(tag, values...)` takes an explicit scope tag.
//! With the level's cargo feature disabled, both expand to an empty block;
//! the arguments are never evaluated, so a compiled-out level costs nothing
//! at the call site.
//!
//! `log_print!` is the multi-value entry point against an explicit
//! [`Logger`](crate::Logger) instance. Every value of a multi-value call is
//! emitted under its own lock acquisition; records from other threads may
//! land between two values of one call, never inside a single record.

/// Prints each value at the given level of an explicit logger.
///
/// Expands to one [`Logger::print`](crate::Logger::print) call per value,
/// in order, all sharing the level, indent and tag.
///
/// # Examples
///
/// ```
/// use stream_logger::{log_print, BufferSink, LogLevel, Logger};
/// use std::sync::Arc;
///
/// let sink = Arc::new(BufferSink::new());
/// let mut logger = Logger::new();
/// logger.set_stream(LogLevel::Warning, sink.clone());
/// log_print!(logger, LogLevel::Warning, 0, "disk", "low space:", 3, "GB left");
/// assert_eq!(sink.contents().lines().count(), 3);
/// ```
#[macro_export]
macro_rules! log_print {
    ($logger:expr, $level:expr, $indent:expr, $tag:expr, $($msg:expr),+ $(,)?) => {{
        let logger = &$logger;
        let level = $level;
        let indent = $indent;
        let tag = $tag;
        $( logger.print(level, indent, tag, &$msg); )+
    }};
}

/// Prints each value into the info stream of the default logger, tagged
/// with the calling module path.
#[cfg(feature = "level-info")]
#[macro_export]
macro_rules! log_info {
    ($($msg:expr),+ $(,)?) => {{
        let log = $crate::default_log().read();
        $( log.print($crate::LogLevel::Info, 0, module_path!(), &$msg); )+
    }};
}

#[cfg(not(feature = "level-info"))]
#[macro_export]
macro_rules! log_info {
    ($($msg:expr),+ $(,)?) => {{}};
}

/// Like [`log_info!`] with an explicit scope tag.
#[cfg(feature = "level-info")]
#[macro_export]
macro_rules! log_info_tag {
    ($tag:expr, $($msg:expr),+ $(,)?) => {{
        let log = $crate::default_log().read();
        let tag = $tag;
        $( log.print($crate::LogLevel::Info, 0, tag, &$msg); )+
    }};
}

#[cfg(not(feature = "level-info"))]
#[macro_export]
macro_rules! log_info_tag {
    ($tag:expr, $($msg:expr),+ $(,)?) => {{}};
}

/// Prints each value into the verbose stream of the default logger, tagged
/// with the calling module path.
#[cfg(feature = "level-verbose")]
#[macro_export]
macro_rules! log_verbose {
    ($($msg:expr),+ $(,)?) => {{
        let log = $crate::default_log().read();
        $( log.print($crate::LogLevel::Verbose, 0, module_path!(), &$msg); )+
    }};
}

#[cfg(not(feature = "level-verbose"))]
#[macro_export]
macro_rules! log_verbose {
    ($($msg:expr),+ $(,)?) => {{}};
}

/// Like [`log_verbose!`] with an explicit scope tag.
#[cfg(feature = "level-verbose")]
#[macro_export]
macro_rules! log_verbose_tag {
    ($tag:expr, $($msg:expr),+ $(,)?) => {{
        let log = $crate::default_log().read();
        let tag = $tag;
        $( log.print($crate::LogLevel::Verbose, 0, tag, &$msg); )+
    }};
}

#[cfg(not(feature = "level-verbose"))]
#[macro_export]
macro_rules! log_verbose_tag {
    ($tag:expr, $($msg:expr),+ $(,)?) => {{}};
}

/// Prints each value into the warning stream of the default logger, tagged
/// with the calling module path.
#[cfg(feature = "level-warning")]
#[macro_export]
macro_rules! log_warning {
    ($($msg:expr),+ $(,)?) => {{
        let log = $crate::default_log().read();
        $( log.print($crate::LogLevel::Warning, 0, module_path!(), &$msg); )+
    }};
}

#[cfg(not(feature = "level-warning"))]
#[macro_export]
macro_rules! log_warning {
    ($($msg:expr),+ $(,)?) => {{}};
}

/// Like [`log_warning!`] with an explicit scope tag.
#[cfg(feature = "level-warning")]
#[macro_export]
macro_rules! log_warning_tag {
    ($tag:expr, $($msg:expr),+ $(,)?) => {{
        let log = $crate::default_log().read();
        let tag = $tag;
        $( log.print($crate::LogLevel::Warning, 0, tag, &$msg); )+
    }};
}

#[cfg(not(feature = "level-warning"))]
#[macro_export]
macro_rules! log_warning_tag {
    ($tag:expr, $($msg:expr),+ $(,)?) => {{}};
}

/// Prints each value into the error stream of the default logger, tagged
/// with the calling module path.
#[cfg(feature = "level-error")]
#[macro_export]
macro_rules! log_error {
    ($($msg:expr),+ $(,)?) => {{
        let log = $crate::default_log().read();
        $( log.print($crate::LogLevel::Error, 0, module_path!(), &$msg); )+
    }};
}

#[cfg(not(feature = "level-error"))]
#[macro_export]
macro_rules! log_error {
    ($($msg:expr),+ $(,)?) => {{}};
}

/// Like [`log_error!`] with an explicit scope tag.
#[cfg(feature = "level-error")]
#[macro_export]
macro_rules! log_error_tag {
    ($tag:expr, $($msg:expr),+ $(,)?) => {{
        let log = $crate::default_log().read();
        let tag = $tag;
        $( log.print($crate::LogLevel::Error, 0, tag, &$msg); )+
    }};
}

#[cfg(not(feature = "level-error"))]
#[macro_export]
macro_rules! log_error_tag {
    ($tag:expr, $($msg:expr),+ $(,)?) => {{}};
}

/// Prints each value into the assert stream of the default logger, tagged
/// with the calling module path.
#[cfg(feature = "level-wtf")]
#[macro_export]
macro_rules! log_wtf {
    ($($msg:expr),+ $(,)?) => {{
        let log = $crate::default_log().read();
        $( log.print($crate::LogLevel::Assert, 0, module_path!(), &$msg); )+
    }};
}

#[cfg(not(feature = "level-wtf"))]
#[macro_export]
macro_rules! log_wtf {
    ($($msg:expr),+ $(,)?) => {{}};
}

/// Like [`log_wtf!`] with an explicit scope tag.
#[cfg(feature = "level-wtf")]
#[macro_export]
macro_rules! log_wtf_tag {
    ($tag:expr, $($msg:expr),+ $(,)?) => {{
        let log = $crate::default_log().read();
        let tag = $tag;
        $( log.print($crate::LogLevel::Assert, 0, tag, &$msg); )+
    }};
}

#[cfg(not(feature = "level-wtf"))]
#[macro_export]
macro_rules! log_wtf_tag {
    ($tag:expr, $($msg:expr),+ $(,)?) => {{}};
}

/// Prints each value into the debug stream of the default logger, tagged
/// with the calling module path. Requires the `level-debug` feature; under
/// `debug-restricted`, additionally requires `debug-allowed`.
#[cfg(all(
    feature = "level-debug",
    any(not(feature = "debug-restricted"), feature = "debug-allowed")
))]
#[macro_export]
macro_rules! log_debug {
    ($($msg:expr),+ $(,)?) => {{
        let log = $crate::default_log().read();
        $( log.print($crate::LogLevel::Debug, 0, module_path!(), &$msg); )+
    }};
}

#[cfg(not(all(
    feature = "level-debug",
    any(not(feature = "debug-restricted"), feature = "debug-allowed")
)))]
#[macro_export]
macro_rules! log_debug {
    ($($msg:expr),+ $(,)?) => {{}};
}

/// Like [`log_debug!`] with an explicit scope tag.
#[cfg(all(
    feature = "level-debug",
    any(not(feature = "debug-restricted"), feature = "debug-allowed")
))]
#[macro_export]
macro_rules! log_debug_tag {
    ($tag:expr, $($msg:expr),+ $(,)?) => {{
        let log = $crate::default_log().read();
        let tag = $tag;
        $( log.print($crate::LogLevel::Debug, 0, tag, &$msg); )+
    }};
}

#[cfg(not(all(
    feature = "level-debug",
    any(not(feature = "debug-restricted"), feature = "debug-allowed")
)))]
#[macro_export]
macro_rules! log_debug_tag {
    ($tag:expr, $($msg:expr),+ $(,)?) => {{}};
}
