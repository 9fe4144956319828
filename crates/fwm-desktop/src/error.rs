//! Error types for the window manager
//!
//! Only window descriptors can be invalid. Every other operation is total:
//! stale window ids are ignored rather than reported.

/// Errors raised while validating a window descriptor.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DescriptorError {
    /// A required geometry field was not supplied.
    #[error("missing geometry field: {field}")]
    Missing { field: &'static str },

    /// A geometry field could not be parsed as an integer.
    #[error("geometry field {field} is not an integer: {value:?}")]
    NotAnInteger { field: &'static str, value: String },

    /// A JSON descriptor could not be decoded.
    #[error("invalid descriptor JSON: {0}")]
    Json(String),
}

impl From<serde_json::Error> for DescriptorError {
    fn from(e: serde_json::Error) -> Self {
        DescriptorError::Json(e.to_string())
    }
}
