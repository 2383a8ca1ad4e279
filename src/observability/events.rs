//! Observable events for docvault
//!
//! Every log line names one of these events.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Configuration loaded and validated
    ConfigLoaded,
    /// A root token was generated at boot
    RootTokenIssued,
    /// Listener bound, ready to serve
    ServerListening,
    /// Server loop exited
    ServerStopped,

    // Authorization
    /// A checked operation was refused
    AccessDenied,
    /// Global admin granted or revoked
    AdminSet,
    /// Namespace admin granted or revoked
    NamespaceAdminSet,
    /// Per-document rights overwritten
    TokenPermissionsSet,

    // Transport
    /// One HTTP request served
    HttpRequest,
    /// A request failed with a server-side error
    HttpInternalError,
}

impl Event {
    /// Returns the event name as it appears in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::RootTokenIssued => "ROOT_TOKEN_ISSUED",
            Event::ServerListening => "SERVER_LISTENING",
            Event::ServerStopped => "SERVER_STOPPED",
            Event::AccessDenied => "ACCESS_DENIED",
            Event::AdminSet => "ADMIN_SET",
            Event::NamespaceAdminSet => "NAMESPACE_ADMIN_SET",
            Event::TokenPermissionsSet => "TOKEN_PERMISSIONS_SET",
            Event::HttpRequest => "HTTP_REQUEST",
            Event::HttpInternalError => "HTTP_INTERNAL_ERROR",
        }
    }

    /// Events that indicate something went wrong on our side
    pub fn is_error(&self) -> bool {
        matches!(self, Event::HttpInternalError)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
