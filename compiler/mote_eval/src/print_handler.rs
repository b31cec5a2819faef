//! Print sink for program output.
//!
//! `display` and the program runner write through a [`SharedPrintHandler`]
//! instead of touching stdout, so tests can capture output and the CLI can
//! decide when buffered output is flushed.
//!
//! Uses enum dispatch instead of trait objects; there are only three sinks.

use std::io::{self, BufWriter, Stdout, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Buffered stdout. Nothing reaches the terminal until [`flush`] or the
/// buffer fills.
///
/// [`flush`]: StdoutPrintHandler::flush
pub struct StdoutPrintHandler {
    out: Mutex<BufWriter<Stdout>>,
}

impl StdoutPrintHandler {
    pub fn new() -> Self {
        StdoutPrintHandler {
            out: Mutex::new(BufWriter::new(io::stdout())),
        }
    }

    pub fn println(&self, msg: &str) {
        let mut out = self.out.lock();
        if let Err(err) = out.write_all(msg.as_bytes()).and_then(|()| out.write_all(b"\n")) {
            tracing::warn!(%err, "stdout write failed");
        }
    }

    pub fn print(&self, msg: &str) {
        if let Err(err) = self.out.lock().write_all(msg.as_bytes()) {
            tracing::warn!(%err, "stdout write failed");
        }
    }

    pub fn flush(&self) -> io::Result<()> {
        self.out.lock().flush()
    }
}

impl Default for StdoutPrintHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Print handler that captures output to a buffer.
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        BufferPrintHandler {
            buffer: Mutex::new(String::new()),
        }
    }

    pub fn println(&self, msg: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    pub fn print(&self, msg: &str) {
        self.buffer.lock().push_str(msg);
    }

    /// Everything captured so far.
    pub fn get_output(&self) -> String {
        self.buffer.lock().clone()
    }
}

impl Default for BufferPrintHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// The three output sinks.
pub enum PrintHandlerImpl {
    Stdout(StdoutPrintHandler),
    /// Captures to a buffer (tests).
    Buffer(BufferPrintHandler),
    /// Discards everything.
    Silent,
}

impl PrintHandlerImpl {
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.println(msg),
            Self::Buffer(h) => h.println(msg),
            Self::Silent => {}
        }
    }

    pub fn print(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.print(msg),
            Self::Buffer(h) => h.print(msg),
            Self::Silent => {}
        }
    }

    /// Push buffered output to its destination. Only stdout buffers.
    pub fn flush(&self) -> io::Result<()> {
        match self {
            Self::Stdout(h) => h.flush(),
            Self::Buffer(_) | Self::Silent => Ok(()),
        }
    }

    /// Captured output; empty for sinks that don't capture.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(h) => h.get_output(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }
}

/// Shared print handler that can be passed around.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler::new()))
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Silent)
}
