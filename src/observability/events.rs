//! Observable events
//!
//! Every lifecycle and data-changing action has a typed event. Log lines
//! carry it as the `event` field so they can be filtered by name.

use std::fmt;

/// Observable events in the framework registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Configuration loaded and validated
    ConfigLoaded,
    /// Record store opened
    StoreOpened,
    /// Server bound its listener and accepts requests
    Serving,
    /// Shutdown signal received
    ShutdownStart,
    /// In-flight requests drained, server stopped
    ShutdownComplete,

    // Data changes
    /// Framework record created
    FrameworkCreated,
    /// Framework record overwritten
    FrameworkUpdated,
    /// Framework record deleted
    FrameworkDeleted,

    // Failures
    /// Request rejected with an error envelope
    RequestRejected,
    /// Record store failed
    StoreFailed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::StoreOpened => "STORE_OPENED",
            Event::Serving => "SERVING",
            Event::ShutdownStart => "SHUTDOWN_START",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",
            Event::FrameworkCreated => "FRAMEWORK_CREATED",
            Event::FrameworkUpdated => "FRAMEWORK_UPDATED",
            Event::FrameworkDeleted => "FRAMEWORK_DELETED",
            Event::RequestRejected => "REQUEST_REJECTED",
            Event::StoreFailed => "STORE_FAILED",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
