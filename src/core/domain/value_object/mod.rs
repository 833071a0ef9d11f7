mod int_or_string;
mod proxmox_token_id;
mod proxmox_token_secret;
mod proxmox_url;
pub(crate) mod serde_helpers;

pub use int_or_string::IntOrString;
pub use proxmox_token_id::ProxmoxTokenId;
pub use proxmox_token_secret::ProxmoxTokenSecret;
pub use proxmox_url::{API_PATH, DEFAULT_BASE_URL, ProxmoxUrl};

// Re-export validation functions for internal use
pub(crate) use proxmox_token_id::validate_token_id;
pub(crate) use proxmox_token_secret::validate_token_secret;
