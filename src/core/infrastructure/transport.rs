//! The HTTP exchange itself, behind a trait so it can be swapped out.

use crate::core::domain::{error::TransportError, model::api_response::RawResponse};
use async_trait::async_trait;
use reqwest::{Method, header::HeaderMap};
use url::Url;

/// A fully resolved HTTP request, ready to be sent.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

/// Performs one HTTP request/response exchange.
///
/// Implementations own timeouts, TLS and connection pooling; the client
/// adds none of its own. [`reqwest::Client`] implements this trait and is
/// the default.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends `request` and returns whatever the server answered, whatever
    /// the status code.
    async fn send(&self, request: HttpRequest) -> Result<RawResponse, TransportError>;
}

#[async_trait]
impl HttpTransport for reqwest::Client {
    async fn send(&self, request: HttpRequest) -> Result<RawResponse, TransportError> {
        let mut builder = self
            .request(request.method, request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();

        Ok(RawResponse::new(status, headers, body))
    }
}
