//! Tracing setup for the browser.
//!
//! Records are formatted by `tracing-subscriber` and handed to
//! `console.log` / `console.warn` / `console.error` one line at a time. On
//! native targets (unit tests) the same formatter writes to stderr.

use std::io::{self, Write};
use std::str::FromStr;

use thiserror::Error;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("unknown log level '{0}' (expected trace, debug, info, warn or error)")]
    InvalidLevel(String),
    #[error("failed to install tracing subscriber: {0}")]
    Install(String),
}

/// Parse a level name such as `"info"` or `"WARN"`.
pub fn parse_level(level: &str) -> Result<Level, LoggingError> {
    Level::from_str(level.trim()).map_err(|_| LoggingError::InvalidLevel(level.to_string()))
}

/// Install the global subscriber. Call once, before mounting the app.
pub fn init(level: &str) -> Result<(), LoggingError> {
    let level = parse_level(level)?;
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(ConsoleMakeWriter)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .try_init()
        .map_err(|e| LoggingError::Install(e.to_string()))
}

/// Hands out one [`ConsoleWriter`] per record.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted record and flushes it to the console on drop.
#[derive(Debug)]
pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buf: Vec::with_capacity(128),
        }
    }

    fn emit(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buf);
        emit_line(self.level, line.trim_end());
        self.buf.clear();
    }
}

impl Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.emit();
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        self.emit();
    }
}

#[cfg(target_arch = "wasm32")]
fn emit_line(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    let value = JsValue::from_str(line);
    match level {
        Level::ERROR => web_sys::console::error_1(&value),
        Level::WARN => web_sys::console::warn_1(&value),
        Level::INFO => web_sys::console::info_1(&value),
        _ => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit_line(_level: Level, line: &str) {
    eprintln!("{line}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_level_names_case_insensitively() {
        assert_eq!(parse_level("info").unwrap(), Level::INFO);
        assert_eq!(parse_level("WARN").unwrap(), Level::WARN);
        assert_eq!(parse_level(" debug ").unwrap(), Level::DEBUG);
    }

    #[test]
    fn rejects_unknown_level() {
        let err = parse_level("loud").unwrap_err();
        assert!(matches!(err, LoggingError::InvalidLevel(ref l) if l == "loud"));
    }

    #[test]
    fn writer_clears_buffer_on_flush() {
        let mut writer = ConsoleWriter::new(Level::INFO);
        writer.write_all(b"scrolled to contact\n").unwrap();
        assert!(!writer.buf.is_empty());
        writer.flush().unwrap();
        assert!(writer.buf.is_empty());
    }
}
