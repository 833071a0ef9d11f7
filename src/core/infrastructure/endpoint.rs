//! The endpoint catalog: every operation the client exposes, as data.
//!
//! Each [`Endpoint`] ties an operation name to its HTTP method, a path
//! template and the type its `data` payload decodes into. A single generic
//! routine ([`ApiClient::fetch`](super::api_client::ApiClient::fetch))
//! executes any of them.

use crate::core::domain::{
    error::ValidationError,
    model::{
        api_request::ApiRequest,
        ceph::CephStatus,
        certificate::CertificateInfo,
        cluster_resource::ClusterResource,
        cluster_status::ClusterStatusEntry,
        disk::DiskInfo,
        guest::{LxcContainer, QemuVm},
        node_status::NodeStatus,
        node_summary::NodeSummary,
        node_version::NodeVersion,
        storage::NodeStorage,
    },
};
use reqwest::Method;
use std::fmt;
use std::marker::PhantomData;

const NODE_PLACEHOLDER: &str = "{node}";

/// A catalog entry: operation name, method, path template and result shape.
pub struct Endpoint<T> {
    name: &'static str,
    method: Method,
    template: &'static str,
    _shape: PhantomData<fn() -> T>,
}

impl<T> Endpoint<T> {
    const fn get(name: &'static str, template: &'static str) -> Self {
        Self {
            name,
            method: Method::GET,
            template,
            _shape: PhantomData,
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    #[must_use]
    pub fn template(&self) -> &'static str {
        self.template
    }

    /// Returns `true` if the path template needs a node name.
    #[must_use]
    pub fn is_node_scoped(&self) -> bool {
        self.template.contains(NODE_PLACEHOLDER)
    }

    /// Renders the path template into a request.
    ///
    /// The node name becomes a single path segment, whatever characters it
    /// contains.
    ///
    /// # Errors
    /// Returns [`ValidationError::Field`] when the template needs a node and
    /// `node` is missing, empty, `.` or `..`, or when a node is given for a
    /// template that takes none.
    pub fn request(&self, node: Option<&str>) -> Result<ApiRequest, ValidationError> {
        match (self.is_node_scoped(), node) {
            (true, None) => {
                return Err(ValidationError::field(
                    "node",
                    format!("Operation '{}' requires a node name", self.name),
                ));
            }
            (true, Some("")) => {
                return Err(ValidationError::field("node", "Node name cannot be empty"));
            }
            (true, Some(name @ ("." | ".."))) => {
                return Err(ValidationError::field(
                    "node",
                    format!("Node name '{name}' is not a valid path segment"),
                ));
            }
            (false, Some(_)) => {
                return Err(ValidationError::field(
                    "node",
                    format!("Operation '{}' does not take a node name", self.name),
                ));
            }
            _ => {}
        }

        let segments = self.template.split('/').map(|segment| match (segment, node) {
            (NODE_PLACEHOLDER, Some(node)) => node,
            _ => segment,
        });
        Ok(ApiRequest::from_segments(self.method.clone(), segments))
    }
}

impl<T> fmt::Debug for Endpoint<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("name", &self.name)
            .field("method", &self.method)
            .field("template", &self.template)
            .finish()
    }
}

pub static NODES: Endpoint<Vec<NodeSummary>> = Endpoint::get("nodes", "nodes");
pub static NODE_STATUS: Endpoint<NodeStatus> = Endpoint::get("node_status", "nodes/{node}/status");
pub static NODE_VERSION: Endpoint<NodeVersion> =
    Endpoint::get("node_version", "nodes/{node}/version");
pub static NODE_QEMU: Endpoint<Vec<QemuVm>> = Endpoint::get("node_qemu", "nodes/{node}/qemu");
pub static NODE_LXC: Endpoint<Vec<LxcContainer>> = Endpoint::get("node_lxc", "nodes/{node}/lxc");
pub static NODE_DISKS: Endpoint<Vec<DiskInfo>> =
    Endpoint::get("node_disks", "nodes/{node}/disks/list");
pub static NODE_CERTIFICATES: Endpoint<Vec<CertificateInfo>> =
    Endpoint::get("node_certificates", "nodes/{node}/certificates/info");
pub static NODE_STORAGE: Endpoint<Vec<NodeStorage>> =
    Endpoint::get("node_storage", "nodes/{node}/storage");
pub static CLUSTER_STATUS: Endpoint<Vec<ClusterStatusEntry>> =
    Endpoint::get("cluster_status", "cluster/status");
pub static CLUSTER_RESOURCES: Endpoint<Vec<ClusterResource>> =
    Endpoint::get("cluster_resources", "cluster/resources");
pub static CLUSTER_CEPH_STATUS: Endpoint<CephStatus> =
    Endpoint::get("cluster_ceph_status", "cluster/ceph/status");
