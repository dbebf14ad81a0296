//! Observable events
//!
//! Events are explicit and typed. The codec and extractor are pure, so the
//! only observable moments are configuration and codec construction.

use std::fmt;

use super::logger::Severity;

/// Observable events in pgmarshal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Configuration loaded and validated
    ConfigLoaded,
    /// Array codec bound to a name/delimiter pair
    CodecCreated,
    /// Native parser unavailable for the delimiter, reference parser used
    ParserFallback,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::CodecCreated => "CODEC_CREATED",
            Event::ParserFallback => "PARSER_FALLBACK",
        }
    }

    /// Severity the event is logged at
    ///
    /// Routine lifecycle events stay below the default INFO threshold so a
    /// host process's stdout is left alone.
    pub fn severity(&self) -> Severity {
        match self {
            Event::ConfigLoaded | Event::CodecCreated => Severity::Trace,
            Event::ParserFallback => Severity::Warn,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
