use crate::core::domain::{
    error::ValidationError,
    value_object::{ProxmoxTokenId, ProxmoxTokenSecret},
};
use reqwest::header::HeaderValue;

/// API token credentials, sent with every request as
/// `Authorization: PVEAPIToken=<token id>=<secret>`.
#[derive(Debug, Clone)]
pub struct ProxmoxAuth {
    token_id: ProxmoxTokenId,
    secret: ProxmoxTokenSecret,
}

impl ProxmoxAuth {
    pub fn new(token_id: ProxmoxTokenId, secret: ProxmoxTokenSecret) -> Self {
        Self { token_id, secret }
    }

    pub fn token_id(&self) -> &ProxmoxTokenId {
        &self.token_id
    }

    /// Builds the `Authorization` header value, flagged as sensitive.
    pub fn authorization_header(&self) -> Result<HeaderValue, ValidationError> {
        let mut value = HeaderValue::from_str(&format!(
            "PVEAPIToken={}={}",
            self.token_id.as_str(),
            self.secret.expose()
        ))
        .map_err(|e| {
            ValidationError::Format(format!("Token cannot be used as a header value: {}", e))
        })?;
        value.set_sensitive(true);
        Ok(value)
    }
}
