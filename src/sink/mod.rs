//! Write destinations for formatted lines.
//!
//! Many producers may share one `Sink`; each line is handed over in a single
//! `write_all` while holding the sink's lock, so lines never interleave.

use parking_lot::Mutex;
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

#[derive(Clone)]
pub struct Sink(Target);

#[derive(Clone)]
enum Target {
    Stdout,
    Stderr,
    Writer(Arc<Mutex<Box<dyn Write + Send>>>),
}

impl Default for Sink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl Sink {
    #[must_use]
    pub const fn stdout() -> Self {
        Self(Target::Stdout)
    }

    #[must_use]
    pub const fn stderr() -> Self {
        Self(Target::Stderr)
    }

    /// Wraps any writer. Clones of the returned sink share the writer and its lock.
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self(Target::Writer(Arc::new(Mutex::new(Box::new(writer)))))
    }

    /// Appends to `path`, creating the file and its parent directories as needed.
    ///
    /// # Errors
    /// I/O errors from creating directories or opening the file.
    pub fn file(path: impl AsRef<Path>) -> Result<Self, crate::Error> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(file))
    }

    /// Writes one complete line.
    ///
    /// # Errors
    /// Whatever the underlying writer reports, unchanged.
    pub fn write_line(&self, line: &[u8]) -> io::Result<()> {
        match &self.0 {
            Target::Stdout => io::stdout().lock().write_all(line),
            Target::Stderr => io::stderr().lock().write_all(line),
            Target::Writer(w) => w.lock().write_all(line),
        }
    }

    /// # Errors
    /// Whatever the underlying writer reports, unchanged.
    pub fn flush(&self) -> io::Result<()> {
        match &self.0 {
            Target::Stdout => io::stdout().flush(),
            Target::Stderr => io::stderr().flush(),
            Target::Writer(w) => w.lock().flush(),
        }
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Target::Stdout => f.write_str("Sink(stdout)"),
            Target::Stderr => f.write_str("Sink(stderr)"),
            Target::Writer(_) => f.write_str("Sink(writer)"),
        }
    }
}
