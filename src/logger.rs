use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::log_stream::{LogStream, SharedMutex};
use crate::loggable::Loggable;
use crate::sink::{Sink, Stderr, Stdout};

/// Number of severity levels with a stream slot in every `Logger`.
///
/// The Debug slot only exists when the `level-debug` feature is enabled;
/// without it, printing at `LogLevel::Debug` falls out of range and is a
/// silent no-op.
#[cfg(feature = "level-debug")]
pub const LEVELS: usize = 6;
#[cfg(not(feature = "level-debug"))]
pub const LEVELS: usize = 5;

/// Severity levels, ordered by fixed numeric ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Info = 0,
    Verbose = 1,
    Warning = 2,
    Error = 3,
    Assert = 4,
    Debug = 5,
}

/// Error returned when parsing an unknown level name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level {:?}", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    /// Parses a case-insensitive level name. `wtf` is accepted as an alias
    /// for the assert level.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "info" => Ok(LogLevel::Info),
            "verbose" => Ok(LogLevel::Verbose),
            "warning" => Ok(LogLevel::Warning),
            "error" => Ok(LogLevel::Error),
            "assert" | "wtf" => Ok(LogLevel::Assert),
            "debug" => Ok(LogLevel::Debug),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

/// Multiplexer of per-severity log streams.
///
/// A `Logger` owns one `LogStream` per compiled-in severity level, routes
/// configuration to them, and fans print calls out to the right stream. Its
/// central correctness rule lives in [`Logger::set_stream`]: when a level is
/// pointed at a sink some other level already writes to, both levels end up
/// holding the same emission lock, so their records cannot corrupt each
/// other.
///
/// # Examples
///
/// ```
/// use stream_logger::{BufferSink, LogLevel, Logger};
/// use std::sync::Arc;
///
/// let sink = Arc::new(BufferSink::new());
/// let mut logger = Logger::new();
/// logger.set_stream(LogLevel::Info, sink.clone());
/// logger.print(LogLevel::Info, 0, "startup", "listening");
/// logger.print(LogLevel::Info, 1, "startup", &42);
///
/// let out = sink.contents();
/// assert!(out.contains("startup: listening"));
/// assert!(out.contains("startup:     42"));
/// ```
pub struct Logger {
    streams: Vec<LogStream>,
}

impl Logger {
    /// Builds the stream table with the default routing policy: the three
    /// least severe levels (and Debug, when compiled in) write to standard
    /// output behind one shared lock, Error and Assert write to standard
    /// error behind a second one.
    pub fn new() -> Self {
        let stdout: Arc<dyn Sink> = Arc::new(Stdout);
        let stderr: Arc<dyn Sink> = Arc::new(Stderr);
        let stdout_lock: SharedMutex = Arc::new(Mutex::new(()));
        let stderr_lock: SharedMutex = Arc::new(Mutex::new(()));

        let mut streams = Vec::with_capacity(LEVELS);
        streams.push(LogStream::with_sink('I', stdout.clone(), Some(stdout_lock.clone())));
        streams.push(LogStream::with_sink('V', stdout.clone(), Some(stdout_lock.clone())));
        streams.push(LogStream::with_sink('W', stdout.clone(), Some(stdout_lock.clone())));
        streams.push(LogStream::with_sink('E', stderr.clone(), Some(stderr_lock.clone())));
        streams.push(LogStream::with_sink('A', stderr, Some(stderr_lock)));
        #[cfg(feature = "level-debug")]
        streams.push(LogStream::with_sink('D', stdout, Some(stdout_lock)));

        Self { streams }
    }

    /// Points `level` at `sink`.
    ///
    /// If any *other* enabled level already targets the same sink (same
    /// `Arc` allocation), the new stream reuses that level's lock, so the two
    /// serialize against each other. Otherwise a fresh lock is created for
    /// this level alone. Out-of-range levels are ignored.
    pub fn set_stream(&mut self, level: LogLevel, sink: Arc<dyn Sink>) {
        let level = level as usize;
        if level >= self.streams.len() {
            return;
        }
        for i in 0..self.streams.len() {
            if i == level || !self.streams[i].enabled() {
                continue;
            }
            let shares_sink = self.streams[i]
                .sink()
                .is_some_and(|existing| Arc::ptr_eq(existing, &sink));
            if shares_sink {
                let lock = self.streams[i].mutex();
                self.streams[level].set_stream(sink, lock);
                return;
            }
        }
        self.streams[level].set_stream(sink, Some(Arc::new(Mutex::new(()))));
    }

    /// Disables `level`. Its sink and lock references are dropped; a lock
    /// still held by sibling levels stays alive for them. Out-of-range
    /// levels are ignored.
    pub fn disable_level(&mut self, level: LogLevel) {
        let level = level as usize;
        if level < self.streams.len() {
            self.streams[level].disable();
        }
    }

    /// Shared view of one level's stream, for inspection. `None` when the
    /// level has no slot in this build.
    pub fn stream(&self, level: LogLevel) -> Option<&LogStream> {
        self.streams.get(level as usize)
    }

    /// Prints one value at `level`.
    ///
    /// A silent no-op when the level is out of range or disabled. The value
    /// is rendered to its text body, then emitted record by record; see
    /// [`LogStream::print_str`] for the line-splitting rule. For several
    /// values in one call use [`log_print!`](crate::log_print), which
    /// expands to consecutive `print` calls. Each value locks the sink
    /// independently, so records from other threads may interleave between
    /// two values of one call (never inside a single record).
    pub fn print<T: Loggable + ?Sized>(&self, level: LogLevel, indent: usize, tag: &str, msg: &T) {
        let level = level as usize;
        if level < self.streams.len() && self.streams[level].enabled() {
            self.streams[level].print_str(indent, tag, &msg.to_body());
        }
    }

    /// Refreshes the cached process id of every stream. Call in the child
    /// after a fork.
    pub fn update_pid(&mut self) {
        for stream in &mut self.streams {
            stream.update_pid();
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
