//! Validation error types

/// Rejected request input
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Required field is empty or whitespace
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// Body could not be bound to the request type
    #[error("invalid request body: {reason}")]
    Body { reason: String },
}
