use crate::{
    ApiResponse, ProxmoxResult,
    core::{
        domain::model::{
            ceph::CephStatus, cluster_resource::ClusterResource, cluster_status::ClusterStatusEntry,
        },
        infrastructure::{api_client::ApiClient, endpoint},
    },
};

/// Cluster-wide operations, borrowed from a [`ProxmoxClient`](crate::ProxmoxClient)
/// via [`cluster()`](crate::ProxmoxClient::cluster).
#[derive(Debug, Clone, Copy)]
pub struct ClusterService<'a> {
    client: &'a ApiClient,
}

impl<'a> ClusterService<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Quorum and membership: one `cluster` entry plus one entry per node.
    pub async fn status(&self) -> ProxmoxResult<ApiResponse<Vec<ClusterStatusEntry>>> {
        self.client.fetch(&endpoint::CLUSTER_STATUS, None).await
    }

    /// Every resource the cluster manages (guests, storages, nodes, pools,
    /// SDN zones) as one flat list.
    pub async fn resources(&self) -> ProxmoxResult<ApiResponse<Vec<ClusterResource>>> {
        self.client.fetch(&endpoint::CLUSTER_RESOURCES, None).await
    }

    /// Ceph health. Only meaningful on clusters running Ceph; other clusters
    /// answer with an error status and a body that usually fails to decode.
    pub async fn ceph_status(&self) -> ProxmoxResult<ApiResponse<CephStatus>> {
        self.client
            .fetch(&endpoint::CLUSTER_CEPH_STATUS, None)
            .await
    }
}
