//! Errors surfaced by the guidance core.

use std::fmt;

use thiserror::Error;

/// Error code reported by the routing engine when rerouting fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutingErrorCode {
    Unknown,
    OutOfMemory,
    InvalidParameters,
    InvalidOperation,
    GraphDisconnected,
    NoStartPoint,
    NoEndPoint,
    RoutingCancelled,
    ViolatesOptions,
    InvalidCredentials,
    RequestTimeout,
    NoConnectivity,
    InsufficientMapData,
}

impl fmt::Display for RoutingErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoutingErrorCode::Unknown => "UNKNOWN",
            RoutingErrorCode::OutOfMemory => "OUT_OF_MEMORY",
            RoutingErrorCode::InvalidParameters => "INVALID_PARAMETERS",
            RoutingErrorCode::InvalidOperation => "INVALID_OPERATION",
            RoutingErrorCode::GraphDisconnected => "GRAPH_DISCONNECTED",
            RoutingErrorCode::NoStartPoint => "NO_START_POINT",
            RoutingErrorCode::NoEndPoint => "NO_END_POINT",
            RoutingErrorCode::RoutingCancelled => "ROUTING_CANCELLED",
            RoutingErrorCode::ViolatesOptions => "VIOLATES_OPTIONS",
            RoutingErrorCode::InvalidCredentials => "INVALID_CREDENTIALS",
            RoutingErrorCode::RequestTimeout => "REQUEST_TIMEOUT",
            RoutingErrorCode::NoConnectivity => "NO_CONNECTIVITY",
            RoutingErrorCode::InsufficientMapData => "INSUFFICIENT_MAP_DATA",
        };
        f.write_str(name)
    }
}

/// A failed reroute, passed on to listeners as received.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Rerouting failed: {code}{}", detail(.message))]
pub struct RoutingError {
    pub code: RoutingErrorCode,
    pub message: String,
}

impl RoutingError {
    pub fn new(code: RoutingErrorCode, message: impl Into<String>) -> Self {
        RoutingError {
            code,
            message: message.into(),
        }
    }
}

fn detail(message: &str) -> String {
    if message.is_empty() {
        String::new()
    } else {
        format!(" ({message})")
    }
}
