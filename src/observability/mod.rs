//! Observability subsystem
//!
//! Structured JSON log lines for lifecycle events.
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on codec or extractor results
//! 3. No async or background threads
//! 4. Parse failures are returned to the caller, never logged here
//!
//! # Usage
//!
//! ```ignore
//! use pgmarshal::observability::{emit, Event};
//!
//! emit(Event::CodecCreated, &[("name", "int4")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event
pub fn log_event(severity: Severity, event: Event) {
    Logger::log(severity, event.as_str(), &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(severity: Severity, event: Event, fields: &[(&str, &str)]) {
    Logger::log(severity, event.as_str(), fields);
}

/// Log a lifecycle event at its own severity
pub fn emit(event: Event, fields: &[(&str, &str)]) {
    log_event_with_fields(event.severity(), event, fields);
}
