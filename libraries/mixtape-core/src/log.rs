//! Log sink capability consumed by the change engine
//!
//! The engine tags each operation with [`LogSink::set_prefix`] and then
//! reports every validation decision as one line through [`LogSink::log`].
//! It never formats to a concrete destination.

use std::fmt;

/// Destination for per-operation outcome lines
pub trait LogSink {
    /// Set the tag written before subsequent lines
    fn set_prefix(&mut self, prefix: &str);

    /// Write one formatted line
    fn log(&mut self, args: fmt::Arguments<'_>);
}

impl<S: LogSink + ?Sized> LogSink for &mut S {
    fn set_prefix(&mut self, prefix: &str) {
        (**self).set_prefix(prefix);
    }

    fn log(&mut self, args: fmt::Arguments<'_>) {
        (**self).log(args);
    }
}

impl<S: LogSink + ?Sized> LogSink for Box<S> {
    fn set_prefix(&mut self, prefix: &str) {
        (**self).set_prefix(prefix);
    }

    fn log(&mut self, args: fmt::Arguments<'_>) {
        (**self).log(args);
    }
}

/// Sink that forwards every line to `tracing` at info level
///
/// Timestamps and targets come from whatever subscriber is installed.
#[derive(Debug, Default)]
pub struct TracingSink {
    prefix: String,
}

impl TracingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LogSink for TracingSink {
    fn set_prefix(&mut self, prefix: &str) {
        prefix.clone_into(&mut self.prefix);
    }

    fn log(&mut self, args: fmt::Arguments<'_>) {
        tracing::info!("{}{}", self.prefix, args);
    }
}

/// Sink that discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl LogSink for NoopSink {
    fn set_prefix(&mut self, _prefix: &str) {}

    fn log(&mut self, _args: fmt::Arguments<'_>) {}
}

/// Sink that keeps every line in memory, prefix included
#[derive(Debug, Default, Clone)]
pub struct BufferSink {
    prefix: String,
    lines: Vec<String>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captured lines in emission order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// True when any captured line contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }

    /// Drop everything captured so far
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl LogSink for BufferSink {
    fn set_prefix(&mut self, prefix: &str) {
        prefix.clone_into(&mut self.prefix);
    }

    fn log(&mut self, args: fmt::Arguments<'_>) {
        self.lines.push(format!("{}{}", self.prefix, args));
    }
}
