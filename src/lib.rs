//! `hlog` - human friendly structured log handler.
//!
//! Turns leveled, attributed, possibly grouped records into one stable,
//! readable, optionally colored text line:
//!
//! - Builder-style immutable configuration (`with_level`, `with_group`, ...)
//! - Groups flattened into dotted keys (`req.id=42`)
//! - A designated attribute rendered as a message prefix (`api: started`)
//! - Per-attribute level overrides that let matching records below the
//!   minimum level through
//!
//! # Example
//!
//! ```
//! use hlog::{Attr, Level, LogHandler, Logger};
//!
//! let handler = LogHandler::new()
//!     .without_color()
//!     .with_prefix("svc")
//!     .with_attr_level(Attr::string("debug_id", "trace1"), Level::DEBUG);
//!
//! let logger = Logger::new(handler).with([Attr::string("svc", "api")]);
//! logger.info("started", [Attr::int("port", 8080)]);
//! logger.debug("suppressed", [Attr::string("debug_id", "other")]);
//! logger.debug("emitted", [Attr::string("debug_id", "trace1")]);
//! ```

pub mod attr;
pub mod config;
pub mod fmt;
pub mod handler;
pub mod internal;
pub mod level;
pub mod logger;
pub mod record;
pub mod sink;

mod error;

pub use attr::{Attr, LazyValue, Value};
pub use config::Config;
pub use error::Error;
pub use handler::{AttrLevel, Handler, LogHandler};
pub use level::Level;
pub use logger::Logger;
pub use record::{Record, Source};
pub use sink::Sink;
