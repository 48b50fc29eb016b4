//! hlog's own diagnostic logger, used while loading configuration.
//!
//! Nothing is reported until [`init`] or [`init_with`] runs; earlier calls are
//! dropped. Rendering never reports through here, so a failing sink can't
//! recurse into itself.

use crate::attr::Attr;
use crate::handler::{Handler, LogHandler};
use crate::level::Level;
use crate::logger::Logger;
use crate::sink::Sink;
use std::sync::OnceLock;

static INTERNAL_LOGGER: OnceLock<Logger> = OnceLock::new();

const COMPONENT_KEY: &str = "component";

/// Warnings and errors to stderr, tagged with the reporting component.
///
/// Only the first initialisation takes effect.
pub fn init() {
    INTERNAL_LOGGER.get_or_init(|| Logger::new(default_handler()));
}

/// Routes diagnostics through `handler` instead. Returns `false` if a logger
/// was already installed.
pub fn init_with(handler: impl Handler + 'static) -> bool {
    INTERNAL_LOGGER.set(Logger::new(handler)).is_ok()
}

fn default_handler() -> LogHandler {
    LogHandler::new()
        .with_level(Level::WARN)
        .with_writer(Sink::stderr())
        .with_prefix(COMPONENT_KEY)
}

fn log(level: Level, component: &str, msg: &str) {
    if let Some(logger) = INTERNAL_LOGGER.get() {
        logger.log(level, msg, [Attr::string(COMPONENT_KEY, component)]);
    }
}

pub fn debug(component: &str, msg: &str) {
    log(Level::DEBUG, component, msg);
}

pub fn warn(component: &str, msg: &str) {
    log(Level::WARN, component, msg);
}

pub fn error(component: &str, msg: &str) {
    log(Level::ERROR, component, msg);
}
