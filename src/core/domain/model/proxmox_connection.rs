use crate::core::domain::{model::proxmox_auth::ProxmoxAuth, value_object::ProxmoxUrl};

/// Where and as whom the client talks to the Proxmox API.
///
/// Fixed at construction time and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ProxmoxConnection {
    base_url: ProxmoxUrl,
    auth: ProxmoxAuth,
}

impl ProxmoxConnection {
    pub fn new(base_url: ProxmoxUrl, auth: ProxmoxAuth) -> Self {
        Self { base_url, auth }
    }

    pub fn base_url(&self) -> &ProxmoxUrl {
        &self.base_url
    }

    pub fn auth(&self) -> &ProxmoxAuth {
        &self.auth
    }
}
