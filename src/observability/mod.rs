//! Observability for docvault
//!
//! Structured JSON-lines logging of lifecycle, authorization and request
//! events. Logging never affects the outcome of the operation it describes.
//!
//! ```ignore
//! use docvault::observability::{Event, Logger};
//!
//! Logger::info(Event::ServerListening.as_str(), &[("addr", "0.0.0.0:3000")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event with fields, at ERROR for error events
pub fn log_event(event: Event, fields: &[(&str, &str)]) {
    let severity = if event.is_error() {
        Severity::Error
    } else {
        Severity::Info
    };
    Logger::log(severity, event.as_str(), fields);
}
