//! Internal HTTP client that resolves, authenticates, sends and decodes API requests.

use crate::core::{
    domain::{
        error::{ProxmoxError, ProxmoxResult},
        model::{
            api_request::ApiRequest,
            api_response::{ApiResponse, RawResponse},
            proxmox_connection::ProxmoxConnection,
        },
    },
    infrastructure::{
        endpoint::Endpoint,
        transport::{HttpRequest, HttpTransport},
    },
};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Internal HTTP client that issues authenticated requests against the Proxmox API.
///
/// Every request carries `Authorization: PVEAPIToken=<id>=<secret>`. Status
/// codes are not interpreted and nothing is retried: whatever the transport
/// returns is handed back to the caller.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn HttpTransport>,
    connection: Arc<ProxmoxConnection>,
}

impl ApiClient {
    /// Creates a new `ApiClient` on top of the given transport.
    pub fn new(connection: ProxmoxConnection, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            connection: Arc::new(connection),
        }
    }

    /// Returns a reference to the underlying connection details.
    pub fn connection(&self) -> &ProxmoxConnection {
        &self.connection
    }

    /// Executes a catalog endpoint and decodes its `data` payload.
    ///
    /// # Errors
    /// * [`ProxmoxError::Configuration`] if the endpoint cannot be rendered
    ///   (missing or unexpected node name)
    /// * [`ProxmoxError::Transport`] if the exchange fails
    /// * [`ProxmoxError::Decode`] if the body does not match `T`
    pub async fn fetch<T>(
        &self,
        endpoint: &Endpoint<T>,
        node: Option<&str>,
    ) -> ProxmoxResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
    {
        let request = endpoint.request(node)?;
        debug!(operation = endpoint.name(), node, "executing endpoint");
        self.execute(&request).await
    }

    /// Sends an arbitrary request and decodes its `data` payload into `T`.
    ///
    /// # Errors
    /// Same as [`ApiClient::fetch`], minus endpoint rendering.
    pub async fn execute<T>(&self, request: &ApiRequest) -> ProxmoxResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
    {
        self.execute_raw(request).await?.decode()
    }

    /// Sends an arbitrary request without decoding the body.
    ///
    /// # Errors
    /// * [`ProxmoxError::Configuration`] if the request cannot be built
    /// * [`ProxmoxError::Transport`] if the exchange fails
    pub async fn execute_raw(&self, request: &ApiRequest) -> ProxmoxResult<RawResponse> {
        let http_request = self.build_request(request)?;
        let method = http_request.method.clone();
        let url = http_request.url.clone();

        debug!(%method, %url, "sending Proxmox API request");

        let response = self
            .transport
            .send(http_request)
            .await
            .map_err(ProxmoxError::Transport)?;

        debug!(
            %method,
            %url,
            status = response.status().as_u16(),
            "received Proxmox API response"
        );
        trace!(bytes = response.body().len(), "response body size");

        Ok(response)
    }

    /// Resolves the path against the base URL and attaches the headers.
    fn build_request(&self, request: &ApiRequest) -> ProxmoxResult<HttpRequest> {
        let url = self.connection.base_url().resolve(request.segments())?;

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            self.connection.auth().authorization_header()?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let body = match request.body() {
            Some(body) => {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                Some(body.to_string().into_bytes())
            }
            None => None,
        };

        Ok(HttpRequest {
            method: request.method().clone(),
            url,
            headers,
            body,
        })
    }
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("connection", &self.connection)
            .finish_non_exhaustive()
    }
}
