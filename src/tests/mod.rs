mod resources;

use crate::ProxmoxClient;
use serde_json::Value;
use wiremock::{MockServer, ResponseTemplate};

pub(crate) const TEST_TOKEN_ID: &str = "test-token-id";
pub(crate) const TEST_TOKEN_SECRET: &str = "test-token";
pub(crate) const TEST_AUTHORIZATION: &str = "PVEAPIToken=test-token-id=test-token";

/// A client pointed at the mock server, using the test token.
pub(crate) fn test_client(mock_server: &MockServer) -> ProxmoxClient {
    ProxmoxClient::builder()
        .credentials(TEST_TOKEN_ID, TEST_TOKEN_SECRET)
        .base_url(mock_server.uri())
        .build()
        .unwrap()
}

/// A 200 response wrapping `data` in the Proxmox envelope.
pub(crate) fn envelope(data: Value) -> ResponseTemplate {
    let body = serde_json::json!({ "data": data });
    ResponseTemplate::new(200).set_body_json(body)
}
