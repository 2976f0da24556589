use std::fs::File;
use std::io::{self, Write};

use parking_lot::Mutex;

/// Destination for fully formatted log records.
///
/// A sink only needs to support append-only sequential writes of text; any
/// buffering, encoding or placement is the implementation's business. Sinks
/// are shared between severity levels as `Arc<dyn Sink>`, and the `Arc`
/// allocation address is the sink's identity: the logger compares identities
/// to decide whether two levels must share one emission lock.
///
/// Serialization across threads is handled *outside* the sink by that shared
/// lock, so `write_record` takes `&self`; implementations wrapping handles
/// that need `&mut` access provide their own interior mutability.
///
/// # Usage
///
/// ```
/// use stream_logger::Sink;
/// use std::io::{self, Write};
///
/// // Sink that forwards every record to standard error
/// struct Forwarder;
///
/// impl Sink for Forwarder {
///     fn write_record(&self, record: &str) -> io::Result<()> {
///         io::stderr().lock().write_all(record.as_bytes())
///     }
/// }
/// ```
pub trait Sink: Send + Sync {
    /// Appends one formatted record (terminator included) to the sink.
    fn write_record(&self, record: &str) -> io::Result<()>;
}

/// Sink writing to the process standard output.
pub struct Stdout;

impl Sink for Stdout {
    fn write_record(&self, record: &str) -> io::Result<()> {
        io::stdout().lock().write_all(record.as_bytes())
    }
}

/// Sink writing to the process standard error.
pub struct Stderr;

impl Sink for Stderr {
    fn write_record(&self, record: &str) -> io::Result<()> {
        io::stderr().lock().write_all(record.as_bytes())
    }
}

/// Sink appending to an open file.
///
/// The file handle is owned by the sink but writes go through `&File`, so no
/// extra locking is needed here; the per-sink lock upstream keeps records
/// whole.
pub struct FileSink {
    file: File,
}

impl FileSink {
    pub fn new(file: File) -> Self {
        Self { file }
    }
}

impl Sink for FileSink {
    fn write_record(&self, record: &str) -> io::Result<()> {
        (&self.file).write_all(record.as_bytes())
    }
}

/// In-memory capture sink.
///
/// Accumulates records into a string buffer, mainly for tests and examples
/// that need to inspect what was emitted.
///
/// # Examples
///
/// ```
/// use stream_logger::{BufferSink, Sink};
///
/// let sink = BufferSink::new();
/// sink.write_record("one line\n").unwrap();
/// assert_eq!(sink.contents(), "one line\n");
/// ```
#[derive(Default)]
pub struct BufferSink {
    buffer: Mutex<String>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything written so far.
    pub fn contents(&self) -> String {
        self.buffer.lock().clone()
    }

    /// Discards everything written so far.
    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Sink for BufferSink {
    fn write_record(&self, record: &str) -> io::Result<()> {
        self.buffer.lock().push_str(record);
        Ok(())
    }
}
