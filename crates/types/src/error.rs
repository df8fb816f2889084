//! Errors surfaced to SDK callers.

use thiserror::Error;

use crate::endpoint::ParamLocation;

/// Failures detectable from the call arguments alone.
///
/// Every variant is raised before any network attempt. Transport and HTTP
/// outcomes are never surfaced through this type; they arrive inside the
/// result envelope instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The operation id is not present in the endpoint catalog.
    #[error("unknown operation: {operation_id}")]
    UnknownOperation {
        /// Identifier the caller asked for.
        operation_id: String,
    },

    /// A parameter the endpoint declares as required was not supplied.
    #[error("missing required {location} parameter: {name}")]
    MissingParameter {
        /// Declared parameter name.
        name: String,
        /// Where the parameter would have been placed.
        location: ParamLocation,
    },

    /// The endpoint catalog declares a method the transport cannot send.
    #[error("unsupported HTTP method: {method}")]
    InvalidMethod {
        /// Offending method string.
        method: String,
    },
}

impl DispatchError {
    /// Convenience constructor for the missing-parameter case.
    pub fn missing(name: &str, location: ParamLocation) -> Self {
        Self::MissingParameter {
            name: name.to_string(),
            location,
        }
    }
}
