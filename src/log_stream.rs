use std::fmt::Write as _;
use std::sync::Arc;
use std::thread;

use chrono::Local;
use parking_lot::Mutex;

use crate::sink::Sink;

/// Shared emission lock. Levels targeting the same sink hold clones of the
/// same `Arc`, so exactly one of them writes at a time.
pub type SharedMutex = Arc<Mutex<()>>;

/// One indent step, prepended once per indent level.
const INDENT: &str = "    ";

/// A single severity's output stream.
///
/// A `LogStream` owns the formatting and emission of one severity level: it
/// holds the severity sign character, a shared reference to the output sink,
/// the lock serializing writers of that sink, and the cached process id
/// stamped into every record.
///
/// The unit of atomicity is one formatted record. A multi-line body is split
/// into one record per line, each emitted under its own lock acquisition.
///
/// # Thread Safety
///
/// Printing takes `&self` and may be called from any number of threads.
/// Reconfiguration (`set_stream`, `set_sign`, `disable`, `update_pid`) takes
/// `&mut self` and is expected to happen from the owning `Logger`.
///
/// # Examples
///
/// ```
/// use stream_logger::{BufferSink, LogStream};
/// use std::sync::Arc;
///
/// let sink = Arc::new(BufferSink::new());
/// let stream = LogStream::with_sink('I', sink.clone(), None);
/// stream.print_str(0, "net", "connected");
///
/// let out = sink.contents();
/// assert!(out.trim_end().ends_with("I net: connected"));
/// ```
pub struct LogStream {
    pid: u32,
    sign: char,
    sink: Option<Arc<dyn Sink>>,
    lock: Option<SharedMutex>,
}

impl LogStream {
    /// Creates a disabled stream. The process id is still captured so a
    /// later `set_stream` starts emitting correct records immediately.
    pub fn new() -> Self {
        Self {
            pid: std::process::id(),
            sign: '\0',
            sink: None,
            lock: None,
        }
    }

    /// Creates an enabled stream.
    ///
    /// `lock` may be `None` when the sink is never shared, in which case no
    /// serialization is attempted on emission.
    pub fn with_sink(sign: char, sink: Arc<dyn Sink>, lock: Option<SharedMutex>) -> Self {
        Self {
            pid: std::process::id(),
            sign,
            sink: Some(sink),
            lock,
        }
    }

    /// Replaces the sink and its lock in one update.
    ///
    /// No validation happens here; the caller decides whether `lock` must be
    /// shared with other streams targeting the same sink.
    pub fn set_stream(&mut self, sink: Arc<dyn Sink>, lock: Option<SharedMutex>) {
        self.sink = Some(sink);
        self.lock = lock;
    }

    /// Replaces the severity sign. Already-emitted records are unaffected.
    pub fn set_sign(&mut self, sign: char) {
        self.sign = sign;
    }

    /// The severity sign stamped into records.
    pub fn sign(&self) -> char {
        self.sign
    }

    /// The current sink, if the stream is enabled.
    pub fn sink(&self) -> Option<&Arc<dyn Sink>> {
        self.sink.as_ref()
    }

    /// The lock serializing writers of this stream's sink, if any.
    pub fn mutex(&self) -> Option<SharedMutex> {
        self.lock.clone()
    }

    /// Whether a sink is configured.
    pub fn enabled(&self) -> bool {
        self.sink.is_some()
    }

    /// Drops the sink and lock together. Sign and cached pid survive, so a
    /// later `set_stream` restores the previous identity.
    pub fn disable(&mut self) {
        self.sink = None;
        self.lock = None;
    }

    /// Re-reads the process id. There is no automatic fork detection; the
    /// owner must call this in the child after every fork, otherwise records
    /// keep reporting the parent's pid.
    pub fn update_pid(&mut self) {
        self.pid = std::process::id();
    }

    /// Prints a message, splitting it at every embedded `'\n'` into one
    /// record per segment. Empty segments are preserved, including a
    /// trailing one when the message ends with a line break, so a message
    /// with `k` breaks always yields `k + 1` records carrying the same tag
    /// and indent.
    ///
    /// Silently does nothing when the stream is disabled.
    pub fn print_str(&self, indent: usize, tag: &str, msg: &str) {
        if !self.enabled() {
            return;
        }
        for line in msg.split('\n') {
            self.println(indent, tag, line);
        }
    }

    /// Emits exactly one record:
    /// `MM-DD HH:MM:SS.nnnnnnnnn␠␠pid␠␠thread-id␠sign␠tag: <indent>line`,
    /// terminated by a newline. The record is formatted first, then written
    /// to the sink in a single call while holding the lock (when one is
    /// configured), so concurrent records never interleave mid-line.
    ///
    /// Write errors from the sink are not surfaced.
    pub fn println(&self, indent: usize, tag: &str, line: &str) {
        let sink = match &self.sink {
            Some(sink) => sink,
            None => return,
        };

        let now = Local::now();
        let mut record =
            String::with_capacity(40 + tag.len() + indent * INDENT.len() + line.len());
        let _ = write!(
            record,
            "{}.{:09}  {}  {:?} {} {}: ",
            now.format("%m-%d %H:%M:%S"),
            now.timestamp_subsec_nanos() % 1_000_000_000,
            self.pid,
            thread::current().id(),
            self.sign,
            tag
        );
        for _ in 0..indent {
            record.push_str(INDENT);
        }
        record.push_str(line);
        record.push('\n');

        match &self.lock {
            Some(lock) => {
                let _guard = lock.lock();
                let _ = sink.write_record(&record);
            }
            None => {
                let _ = sink.write_record(&record);
            }
        }
    }
}

impl Default for LogStream {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Fork is the only way the real pid changes, so refresh semantics are
    // checked by clobbering the cached value directly.
    #[test]
    fn test_update_pid_refreshes_cache() {
        let mut stream = LogStream::new();
        stream.pid = 0;
        stream.update_pid();
        assert_eq!(stream.pid, std::process::id());
    }

    #[test]
    fn test_new_captures_pid() {
        let stream = LogStream::new();
        assert_eq!(stream.pid, std::process::id());
        assert_eq!(stream.sign, '\0');
        assert!(!stream.enabled());
    }
}
