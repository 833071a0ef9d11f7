//! Request descriptors, built per call and discarded afterwards.

use reqwest::Method;
use serde::Serialize;

/// A request relative to the API root (`.../api2/json/`).
///
/// The path is kept as individual segments; each one is percent-encoded on
/// its own when the request is resolved against the base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    method: Method,
    segments: Vec<String>,
    body: Option<serde_json::Value>,
}

impl ApiRequest {
    /// Creates a request from a slash separated path such as `nodes/pve1/qemu`.
    pub fn new(method: Method, path: &str) -> Self {
        Self::from_segments(method, path.split('/').filter(|s| !s.is_empty()))
    }

    /// Creates a GET request.
    pub fn get(path: &str) -> Self {
        Self::new(Method::GET, path)
    }

    /// Creates a request from already split path segments.
    pub fn from_segments<I, S>(method: Method, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method,
            segments: segments.into_iter().map(Into::into).collect(),
            body: None,
        }
    }

    /// Attaches a JSON body.
    ///
    /// # Errors
    /// Fails when `body` cannot be represented as JSON.
    pub fn with_body<B: Serialize>(mut self, body: &B) -> serde_json::Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The unencoded path, for display and logging.
    #[must_use]
    pub fn path(&self) -> String {
        self.segments.join("/")
    }

    #[must_use]
    pub fn body(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }
}
