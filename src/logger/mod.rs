//! Minimal front-end over a [`Handler`]: checks `enabled` before the caller's
//! attributes are collected, then builds the record and hands it over.
//!
//! There is no process-wide default logger; pass a `Logger` to whatever needs one.

use crate::attr::Attr;
use crate::handler::Handler;
use crate::level::Level;
use crate::record::Record;
use std::fmt;
use std::io;
use std::sync::Arc;

#[derive(Clone)]
pub struct Logger {
    handler: Arc<dyn Handler>,
}

impl Logger {
    pub fn new(handler: impl Handler + 'static) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }

    #[must_use]
    pub fn from_handler(handler: Arc<dyn Handler>) -> Self {
        Self { handler }
    }

    #[must_use]
    pub const fn handler(&self) -> &Arc<dyn Handler> {
        &self.handler
    }

    /// A logger whose records all carry `attrs`.
    #[must_use]
    pub fn with(&self, attrs: impl IntoIterator<Item = Attr>) -> Self {
        Self {
            handler: self.handler.with_attrs(attrs.into_iter().collect()),
        }
    }

    #[must_use]
    pub fn with_group(&self, name: &str) -> Self {
        Self {
            handler: self.handler.with_group(name),
        }
    }

    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        self.handler.enabled(level)
    }

    /// Like [`Logger::log`] but reports sink failures.
    ///
    /// # Errors
    /// Write failures from the handler's sink.
    #[track_caller]
    pub fn try_log<I>(&self, level: Level, msg: &str, attrs: I) -> io::Result<()>
    where
        I: IntoIterator<Item = Attr>,
    {
        if !self.handler.enabled(level) {
            return Ok(());
        }
        let record = Record::new(level, msg).with_attrs(attrs);
        self.handler.handle(&record)
    }

    /// Sink failures are dropped: a failing log line must not take the caller down.
    #[track_caller]
    pub fn log<I>(&self, level: Level, msg: &str, attrs: I)
    where
        I: IntoIterator<Item = Attr>,
    {
        let _ = self.try_log(level, msg, attrs);
    }

    #[track_caller]
    pub fn debug<I: IntoIterator<Item = Attr>>(&self, msg: &str, attrs: I) {
        self.log(Level::DEBUG, msg, attrs);
    }

    #[track_caller]
    pub fn info<I: IntoIterator<Item = Attr>>(&self, msg: &str, attrs: I) {
        self.log(Level::INFO, msg, attrs);
    }

    #[track_caller]
    pub fn warn<I: IntoIterator<Item = Attr>>(&self, msg: &str, attrs: I) {
        self.log(Level::WARN, msg, attrs);
    }

    #[track_caller]
    pub fn error<I: IntoIterator<Item = Attr>>(&self, msg: &str, attrs: I) {
        self.log(Level::ERROR, msg, attrs);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").finish_non_exhaustive()
    }
}
