use crate::core::domain::error::ValidationError;
use std::fmt;

/// The secret half of a Proxmox API token.
///
/// The `Debug` output is redacted so the secret never ends up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ProxmoxTokenSecret(String);

impl ProxmoxTokenSecret {
    /// Creates a new secret without validation.
    pub(crate) fn new_unchecked(secret: String) -> Self {
        Self(secret)
    }

    /// Returns the secret as a string slice.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ProxmoxTokenSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ProxmoxTokenSecret(***)")
    }
}

/// Validates a token secret.
pub(crate) fn validate_token_secret(secret: &str) -> Result<(), ValidationError> {
    if secret.is_empty() {
        return Err(ValidationError::field(
            "token_secret",
            "Token secret cannot be empty",
        ));
    }
    if secret.chars().any(char::is_control) {
        return Err(ValidationError::Format(
            "Token secret cannot contain control characters".to_string(),
        ));
    }
    Ok(())
}
