//! # Stream Logger
//!
//! A multi-level, thread-safe text logging facility:
//!
//! * **Per-level sinks**: every severity level owns an independently
//!   configurable output stream, defaulting to stdout for Info/Verbose/
//!   Warning and stderr for Error/Assert
//! * **Corruption-free interleaving**: levels that target the same sink
//!   automatically share one emission lock, so concurrent records never mix
//!   mid-line
//! * **Self-describing records**: each line carries wall-clock time, process
//!   id, thread id, a one-character severity sign and a caller scope tag
//! * **Multi-line and multi-value messages**: embedded line breaks split
//!   into one record per line; variadic macros print several values per call
//! * **Compile-time level gating**: cargo features strip disabled levels to
//!   zero-cost no-ops at the call site
//!
//! ## Main Components
//!
//! * `LogStream`: one severity's sink reference, shared lock and
//!   line-formatting logic
//! * `Logger`: the per-level stream table, lock-sharing configuration and
//!   the print entry point
//! * `Sink`: the output abstraction (stdout, stderr, files, in-memory
//!   buffers, or your own)
//! * `default_log`: a process-wide default instance driven by the
//!   `log_info!`-family macros and the `log`-facade bridge in `compat`
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use stream_logger::{BufferSink, LogLevel, Logger};
//!
//! let sink = Arc::new(BufferSink::new());
//! let mut logger = Logger::new();
//! logger.set_stream(LogLevel::Info, sink.clone());
//! logger.set_stream(LogLevel::Warning, sink.clone());
//!
//! logger.print(LogLevel::Info, 0, "net", "listening on 0.0.0.0:8080");
//! logger.print(LogLevel::Warning, 1, "net", "no peers yet");
//!
//! // Both levels share one lock because they share the sink.
//! let info_lock = logger.stream(LogLevel::Info).unwrap().mutex().unwrap();
//! let warn_lock = logger.stream(LogLevel::Warning).unwrap().mutex().unwrap();
//! assert!(Arc::ptr_eq(&info_lock, &warn_lock));
//!
//! let out = sink.contents();
//! assert!(out.contains("I net: listening on 0.0.0.0:8080"));
//! assert!(out.contains("W net:     no peers yet"));
//! ```

pub mod compat;
pub mod default_log;
pub mod log_stream;
pub mod loggable;
pub mod logger;
pub mod sink;

mod macros;

pub use default_log::{default_log, disable_level, init_from_env, set_stream, update_pid};
pub use log_stream::{LogStream, SharedMutex};
pub use loggable::Loggable;
pub use logger::{LogLevel, Logger, ParseLevelError, LEVELS};
pub use sink::{BufferSink, FileSink, Sink, Stderr, Stdout};
