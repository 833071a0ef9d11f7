use crate::{
    ApiResponse, ProxmoxResult,
    core::{
        domain::model::{
            certificate::CertificateInfo,
            disk::DiskInfo,
            guest::{LxcContainer, QemuVm},
            node_status::NodeStatus,
            node_summary::NodeSummary,
            node_version::NodeVersion,
            storage::NodeStorage,
        },
        infrastructure::{api_client::ApiClient, endpoint},
    },
};

/// Node-scoped operations, borrowed from a [`ProxmoxClient`](crate::ProxmoxClient)
/// via [`nodes()`](crate::ProxmoxClient::nodes).
///
/// Every method except [`list`](Self::list) takes the node name, which is
/// sent as a single percent-encoded path segment. An empty name is rejected
/// with [`ProxmoxError::Configuration`](crate::ProxmoxError::Configuration)
/// before any request is made.
#[derive(Debug, Clone, Copy)]
pub struct NodeService<'a> {
    client: &'a ApiClient,
}

impl<'a> NodeService<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Lists all nodes known to the cluster (`GET /nodes`).
    pub async fn list(&self) -> ProxmoxResult<ApiResponse<Vec<NodeSummary>>> {
        self.client.fetch(&endpoint::NODES, None).await
    }

    /// Detailed runtime status of a node: CPU, memory, kernel, load.
    pub async fn status(&self, node: &str) -> ProxmoxResult<ApiResponse<NodeStatus>> {
        self.client.fetch(&endpoint::NODE_STATUS, Some(node)).await
    }

    /// Proxmox VE version running on a node.
    pub async fn version(&self, node: &str) -> ProxmoxResult<ApiResponse<NodeVersion>> {
        self.client.fetch(&endpoint::NODE_VERSION, Some(node)).await
    }

    /// QEMU virtual machines hosted on a node.
    pub async fn qemu(&self, node: &str) -> ProxmoxResult<ApiResponse<Vec<QemuVm>>> {
        self.client.fetch(&endpoint::NODE_QEMU, Some(node)).await
    }

    /// LXC containers hosted on a node.
    pub async fn lxc(&self, node: &str) -> ProxmoxResult<ApiResponse<Vec<LxcContainer>>> {
        self.client.fetch(&endpoint::NODE_LXC, Some(node)).await
    }

    /// Physical disks attached to a node.
    pub async fn disks(&self, node: &str) -> ProxmoxResult<ApiResponse<Vec<DiskInfo>>> {
        self.client.fetch(&endpoint::NODE_DISKS, Some(node)).await
    }

    /// TLS certificates installed on a node, with their validity window.
    pub async fn certificates(
        &self,
        node: &str,
    ) -> ProxmoxResult<ApiResponse<Vec<CertificateInfo>>> {
        self.client
            .fetch(&endpoint::NODE_CERTIFICATES, Some(node))
            .await
    }

    /// Storages visible from a node, with usage figures.
    pub async fn storage(&self, node: &str) -> ProxmoxResult<ApiResponse<Vec<NodeStorage>>> {
        self.client.fetch(&endpoint::NODE_STORAGE, Some(node)).await
    }
}
