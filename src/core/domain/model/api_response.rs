//! Raw and decoded HTTP responses.
//!
//! Every Proxmox response body is an envelope of the form `{"data": ...}`.
//! [`RawResponse`] keeps what the transport received; [`ApiResponse`] pairs
//! the unwrapped payload with it so callers can still look at the status.

use crate::core::domain::error::{ProxmoxError, ProxmoxResult};
use reqwest::{StatusCode, header::HeaderMap};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::borrow::Cow;

/// A response exactly as it came back from the transport.
#[derive(Debug, Clone)]
pub struct RawResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// HTTP status code. Not interpreted by the library.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// The body as text, with invalid UTF-8 replaced.
    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Unwraps the `data` envelope into `T`.
    ///
    /// # Errors
    /// Returns [`ProxmoxError::Decode`] carrying this response when the body
    /// is not JSON, has no `data` field, or `data` does not match `T`.
    pub fn decode<T>(self) -> ProxmoxResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
    {
        match serde_json::from_slice::<Envelope<T>>(&self.body) {
            Ok(envelope) => Ok(ApiResponse {
                data: envelope.data,
                response: self,
            }),
            Err(e) => Err(ProxmoxError::decode(e, self)),
        }
    }
}

#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

/// A decoded payload together with the response it was read from.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    data: T,
    response: RawResponse,
}

impl<T> ApiResponse<T> {
    /// The decoded payload.
    #[must_use]
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Consumes the response, keeping only the payload.
    #[must_use]
    pub fn into_data(self) -> T {
        self.data
    }

    /// Splits the response into payload and raw response.
    #[must_use]
    pub fn into_parts(self) -> (T, RawResponse) {
        (self.data, self.response)
    }

    #[must_use]
    pub fn response(&self) -> &RawResponse {
        &self.response
    }

    /// Shorthand for `self.response().status()`.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.response.status
    }
}
