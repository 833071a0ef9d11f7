//! A typed client for the Proxmox Virtual Environment REST API,
//! authenticated with API tokens.
//!
//! Responses are decoded into typed records. Fields whose JSON type changed
//! between Proxmox releases (`vmid`, disk `wearout`, ...) are read through
//! [`IntOrString`], which accepts both an integer and a string.
//!
//! ```no_run
//! use proxmox_api_client::{ProxmoxClient, ProxmoxResult};
//!
//! #[tokio::main]
//! async fn main() -> ProxmoxResult<()> {
//!     let client = ProxmoxClient::builder()
//!         .credentials("root@pam!monitoring", "aaaaaaaa-bbbb-cccc-dddd-eeeeeeeeeeee")
//!         .base_url("https://pve.example.com:8006")
//!         .accept_invalid_certs(true)
//!         .build()?;
//!
//!     for node in client.nodes().list().await?.into_data() {
//!         println!("{}: {}", node.node, node.status);
//!     }
//!
//!     for resource in client.cluster().resources().await?.data() {
//!         if let Some(vmid) = &resource.vmid {
//!             println!("{} -> {vmid}", resource.id);
//!         }
//!     }
//!     Ok(())
//! }
//! ```

mod cluster;
mod core;
mod node;

pub use crate::cluster::application::service::cluster_service::ClusterService;
pub use crate::core::domain::{
    error::{ProxmoxError, ProxmoxResult, TransportError, ValidationError},
    model::{
        api_request::ApiRequest,
        api_response::{ApiResponse, RawResponse},
        ceph::{CephHealth, CephStatus},
        certificate::CertificateInfo,
        cluster_resource::{ClusterResource, ResourceType},
        cluster_status::ClusterStatusEntry,
        disk::DiskInfo,
        guest::{LxcContainer, QemuVm},
        node_status::{
            BootInfo, CpuInfo, CurrentKernel, KsmInfo, MemoryInfo, NodeStatus, RootFsInfo,
        },
        node_summary::NodeSummary,
        node_version::NodeVersion,
        storage::NodeStorage,
    },
    value_object::{API_PATH, DEFAULT_BASE_URL, IntOrString, ProxmoxTokenId, ProxmoxUrl},
};
pub use crate::core::infrastructure::{
    endpoint::{self as endpoints, Endpoint},
    transport::{HttpRequest, HttpTransport},
};
pub use crate::node::application::service::node_service::NodeService;
pub use reqwest::{Method, StatusCode};

use crate::core::{
    domain::{
        model::{proxmox_auth::ProxmoxAuth, proxmox_connection::ProxmoxConnection},
        value_object::{ProxmoxTokenSecret, validate_token_id, validate_token_secret},
    },
    infrastructure::api_client::ApiClient,
};
use serde::de::DeserializeOwned;
use std::env;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Environment variable holding the token identifier (`user@realm!name`).
pub const ENV_TOKEN_ID: &str = "PROXMOX_TOKEN_ID";
/// Environment variable holding the token secret.
pub const ENV_TOKEN_SECRET: &str = "PROXMOX_TOKEN_SECRET";
/// Optional environment variable overriding the base URL.
pub const ENV_BASE_URL: &str = "PROXMOX_BASE_URL";
/// Optional environment variable; `1` or `true` disables certificate checks.
pub const ENV_ACCEPT_INVALID_CERTS: &str = "PROXMOX_ACCEPT_INVALID_CERTS";

/// A client for the Proxmox VE API.
///
/// Immutable once built. Cloning is cheap and clones share the transport,
/// so a client can be handed to concurrent tasks as-is or behind an `Arc`.
///
/// Operations are grouped behind [`nodes()`](Self::nodes) and
/// [`cluster()`](Self::cluster). Each returns an [`ApiResponse`] holding the
/// decoded payload and the HTTP status; non-2xx statuses are not turned into
/// errors when the body still decodes.
#[derive(Debug, Clone)]
pub struct ProxmoxClient {
    api_client: ApiClient,
}

/// Builder for [`ProxmoxClient`] configuration.
///
/// Nothing is validated until [`build`](Self::build), which never touches
/// the network.
#[derive(Default)]
pub struct ProxmoxClientBuilder {
    token_id: Option<String>,
    token_secret: Option<String>,
    base_url: Option<String>,
    transport: Option<Arc<dyn HttpTransport>>,
    accept_invalid_certs: bool,
}

impl ProxmoxClientBuilder {
    /// Sets the API token identifier (`user@realm!tokenname`) and secret.
    pub fn credentials(mut self, token_id: impl Into<String>, secret: impl Into<String>) -> Self {
        self.token_id = Some(token_id.into());
        self.token_secret = Some(secret.into());
        self
    }

    /// Overrides the server address. Defaults to [`DEFAULT_BASE_URL`].
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sends requests through a preconfigured `reqwest` client.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.transport = Some(Arc::new(client));
        self
    }

    /// Sends requests through a custom transport.
    pub fn transport(mut self, transport: impl HttpTransport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Skips TLS certificate verification, for self-signed Proxmox
    /// certificates.
    ///
    /// Only applies to the default transport; it is ignored when
    /// [`http_client`](Self::http_client) or [`transport`](Self::transport)
    /// is used.
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Starts a builder from `PROXMOX_TOKEN_ID`, `PROXMOX_TOKEN_SECRET` and,
    /// when set, `PROXMOX_BASE_URL` and `PROXMOX_ACCEPT_INVALID_CERTS`.
    ///
    /// # Errors
    /// Returns [`ProxmoxError::Configuration`] when a required variable is
    /// missing or not valid unicode.
    pub fn from_env() -> ProxmoxResult<Self> {
        let token_id = required_var(ENV_TOKEN_ID, "token_id")?;
        let token_secret = required_var(ENV_TOKEN_SECRET, "token_secret")?;

        let mut builder = Self::default().credentials(token_id, token_secret);
        if let Ok(base_url) = env::var(ENV_BASE_URL) {
            builder = builder.base_url(base_url);
        }
        if let Ok(flag) = env::var(ENV_ACCEPT_INVALID_CERTS) {
            builder = builder.accept_invalid_certs(parse_flag(&flag));
        }
        Ok(builder)
    }

    /// Validates the configuration and builds the client.
    ///
    /// # Errors
    /// * [`ProxmoxError::Configuration`] for missing or malformed
    ///   credentials and unusable base URLs
    /// * [`ProxmoxError::Transport`] if the default `reqwest` client cannot
    ///   be initialized
    pub fn build(self) -> ProxmoxResult<ProxmoxClient> {
        let token_id = self
            .token_id
            .ok_or_else(|| ValidationError::field("token_id", "Token ID is required"))?;
        validate_token_id(&token_id)?;

        let token_secret = self
            .token_secret
            .ok_or_else(|| ValidationError::field("token_secret", "Token secret is required"))?;
        validate_token_secret(&token_secret)?;

        let base_url = match self.base_url {
            Some(url) => ProxmoxUrl::new(&url)?,
            None => ProxmoxUrl::default(),
        };

        let transport: Arc<dyn HttpTransport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(
                reqwest::Client::builder()
                    .danger_accept_invalid_certs(self.accept_invalid_certs)
                    .build()
                    .map_err(|e| ProxmoxError::Transport(Box::new(e)))?,
            ),
        };

        let auth = ProxmoxAuth::new(
            ProxmoxTokenId::new_unchecked(token_id),
            ProxmoxTokenSecret::new_unchecked(token_secret),
        );
        debug!(
            base_url = %base_url,
            token_id = auth.token_id().as_str(),
            "Proxmox client configured"
        );

        Ok(ProxmoxClient {
            api_client: ApiClient::new(ProxmoxConnection::new(base_url, auth), transport),
        })
    }
}

impl fmt::Debug for ProxmoxClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxmoxClientBuilder")
            .field("token_id", &self.token_id)
            .field("token_secret", &self.token_secret.as_ref().map(|_| "***"))
            .field("base_url", &self.base_url)
            .field("custom_transport", &self.transport.is_some())
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .finish()
    }
}

fn required_var(name: &str, field: &str) -> ProxmoxResult<String> {
    env::var(name)
        .map_err(|e| ValidationError::field(field, format!("{name}: {e}")).into())
}

fn parse_flag(value: &str) -> bool {
    let value = value.trim();
    value == "1" || value.eq_ignore_ascii_case("true")
}

impl ProxmoxClient {
    /// Builds a client for the default base URL with the given API token.
    ///
    /// # Errors
    /// Same as [`ProxmoxClientBuilder::build`].
    pub fn new(token_id: impl Into<String>, secret: impl Into<String>) -> ProxmoxResult<Self> {
        Self::builder().credentials(token_id, secret).build()
    }

    /// Creates a new builder for ProxmoxClient configuration
    pub fn builder() -> ProxmoxClientBuilder {
        ProxmoxClientBuilder::default()
    }

    /// Node-scoped operations.
    pub fn nodes(&self) -> NodeService<'_> {
        NodeService::new(&self.api_client)
    }

    /// Cluster-wide operations.
    pub fn cluster(&self) -> ClusterService<'_> {
        ClusterService::new(&self.api_client)
    }

    /// The normalized API root requests are resolved against.
    pub fn base_url(&self) -> &ProxmoxUrl {
        self.api_client.connection().base_url()
    }

    /// The API token identifier sent with every request.
    pub fn token_id(&self) -> &ProxmoxTokenId {
        self.api_client.connection().auth().token_id()
    }

    /// Executes an entry of the [`endpoints`] catalog.
    ///
    /// `node` must be given for node-scoped entries and omitted otherwise.
    pub async fn fetch<T>(
        &self,
        endpoint: &Endpoint<T>,
        node: Option<&str>,
    ) -> ProxmoxResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
    {
        self.api_client.fetch(endpoint, node).await
    }

    /// Sends a request the typed operations do not cover and decodes the
    /// `data` payload into `T`.
    ///
    /// ```no_run
    /// # use proxmox_api_client::{ProxmoxClient, ProxmoxResult};
    /// # async fn run(client: ProxmoxClient) -> ProxmoxResult<()> {
    /// use proxmox_api_client::{ApiRequest, IntOrString};
    ///
    /// let next_id: IntOrString = client
    ///     .execute(&ApiRequest::get("cluster/nextid"))
    ///     .await?
    ///     .into_data();
    /// # Ok(())
    /// # }
    /// ```
    pub async fn execute<T>(&self, request: &ApiRequest) -> ProxmoxResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
    {
        self.api_client.execute(request).await
    }

    /// Sends a request and returns the response undecoded.
    pub async fn execute_raw(&self, request: &ApiRequest) -> ProxmoxResult<RawResponse> {
        self.api_client.execute_raw(request).await
    }
}

#[cfg(test)]
mod tests;
