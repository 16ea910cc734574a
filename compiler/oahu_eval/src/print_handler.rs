//! Destination for program output.
//!
//! `print` and `println` write through a [`SharedPrintHandler`]: stdout for
//! the CLI, a buffer for tests and embedding, or nowhere at all.

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Output sink, dispatched by enum.
pub enum PrintHandlerImpl {
    /// Writes to stdout, flushing after every partial line.
    Stdout,
    /// Accumulates output in memory.
    Buffer(Mutex<String>),
    /// Discards output.
    Silent,
}

impl PrintHandlerImpl {
    /// Write `msg` without a line end.
    pub fn print(&self, msg: &str) {
        match self {
            Self::Stdout => {
                let mut out = io::stdout().lock();
                // A closed stdout is not an evaluation error.
                let _ = out.write_all(msg.as_bytes()).and_then(|()| out.flush());
            }
            Self::Buffer(buffer) => buffer.lock().push_str(msg),
            Self::Silent => {}
        }
    }

    /// Write `msg` followed by a newline.
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout => {
                let mut out = io::stdout().lock();
                let _ = writeln!(out, "{msg}");
            }
            Self::Buffer(buffer) => {
                let mut buffer = buffer.lock();
                buffer.push_str(msg);
                buffer.push('\n');
            }
            Self::Silent => {}
        }
    }

    /// Everything captured so far. Empty for non-capturing handlers.
    pub fn output(&self) -> String {
        match self {
            Self::Buffer(buffer) => buffer.lock().clone(),
            Self::Stdout | Self::Silent => String::new(),
        }
    }

    pub fn clear(&self) {
        if let Self::Buffer(buffer) = self {
            buffer.lock().clear();
        }
    }
}

pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout)
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(Mutex::new(String::new())))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Silent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_captures_print_and_println() {
        let handler = buffer_handler();
        handler.print("hello");
        handler.print(" ");
        handler.println("world");
        assert_eq!(handler.output(), "hello world\n");
    }

    #[test]
    fn buffer_clear_empties() {
        let handler = buffer_handler();
        handler.println("x");
        handler.clear();
        assert!(handler.output().is_empty());
    }

    #[test]
    fn silent_discards() {
        let handler = silent_handler();
        handler.println("hello");
        assert_eq!(handler.output(), "");
    }

    #[test]
    fn stdout_captures_nothing() {
        assert_eq!(stdout_handler().output(), "");
    }
}
