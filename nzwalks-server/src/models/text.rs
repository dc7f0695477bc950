//! Required text fields (names and codes)

use super::ValidationError;

/// Check that a required text field carries something other than whitespace.
///
/// The value is returned exactly as sent; surrounding whitespace is kept and
/// there is no length limit.
///
/// # Example
/// ```
/// use nzwalks_server::models::require_text;
///
/// assert_eq!(require_text("name", " Tongariro ".into()).unwrap(), " Tongariro ");
/// assert!(require_text("name", "".into()).is_err());
/// assert!(require_text("name", "   ".into()).is_err());
/// ```
pub fn require_text(field: &'static str, value: String) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(value)
}
