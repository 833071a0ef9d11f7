use crate::core::domain::error::ValidationError;

/// A Proxmox API token identifier, usually `user@realm!tokenname`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxmoxTokenId(String);

impl ProxmoxTokenId {
    /// Creates a new token identifier without validation.
    pub(crate) fn new_unchecked(token_id: String) -> Self {
        Self(token_id)
    }

    /// Returns the token identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validates a token identifier.
///
/// Only emptiness and header safety are checked; the `user@realm!name`
/// shape is left to the server since older deployments use other forms.
pub(crate) fn validate_token_id(token_id: &str) -> Result<(), ValidationError> {
    if token_id.is_empty() {
        return Err(ValidationError::field(
            "token_id",
            "Token ID cannot be empty",
        ));
    }
    if token_id.chars().any(char::is_control) {
        return Err(ValidationError::Format(
            "Token ID cannot contain control characters".to_string(),
        ));
    }
    if token_id.contains('=') {
        return Err(ValidationError::ConstraintViolation(
            "Token ID cannot contain '=' (it separates ID and secret in the header)".to_string(),
        ));
    }
    Ok(())
}
