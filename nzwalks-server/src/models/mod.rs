//! Input models with validation at construction
//!
//! Invalid input returns ValidationError, not panic.

pub mod text;
pub mod validation;

pub use text::require_text;
pub use validation::ValidationError;
