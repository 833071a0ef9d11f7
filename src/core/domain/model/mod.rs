pub mod api_request;
pub mod api_response;
pub mod ceph;
pub mod certificate;
pub mod cluster_resource;
pub mod cluster_status;
pub mod disk;
pub mod guest;
pub mod node_status;
pub mod node_summary;
pub mod node_version;
pub mod proxmox_auth;
pub mod proxmox_connection;
pub mod storage;
