//! Wire shapes exchanged over HTTP.
pub mod body;
pub mod query;
pub mod response;

use validator::ValidationError;

/// Reject empty or whitespace-only strings.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }

    Ok(())
}
