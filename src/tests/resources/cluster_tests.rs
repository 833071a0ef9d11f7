use crate::{
    ProxmoxError, ResourceType, StatusCode,
    tests::{TEST_AUTHORIZATION, envelope, test_client},
};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

fn cluster_resources_fixture() -> serde_json::Value {
    json!([
        {
            "cpu": 0.00215395696684676,
            "disk": 0,
            "diskread": 1899047936,
            "diskwrite": 2697581568_u64,
            "id": "qemu/101",
            "maxcpu": 4,
            "maxdisk": 549755813888_u64,
            "maxmem": 17179869184_u64,
            "mem": 3865654169_u64,
            "name": "my-vm",
            "netin": 554461212,
            "netout": 13830445,
            "node": "node1",
            "status": "running",
            "template": 0,
            "type": "qemu",
            "uptime": 234806,
            "vmid": 101
        },
        {
            "id": "lxc/103",
            "maxdisk": 8589934592_u64,
            "name": "CT103",
            "node": "node1",
            "status": "stopped",
            "type": "lxc",
            "vmid": "103"
        },
        {
            "cgroup-mode": 2,
            "cpu": 0.0496424063946151,
            "disk": 5996113920_u64,
            "id": "node/node1",
            "level": "",
            "maxcpu": 16,
            "maxdisk": 100861726720_u64,
            "maxmem": 134850514944_u64,
            "mem": 64139268096_u64,
            "node": "node1",
            "status": "online",
            "type": "node",
            "uptime": 234832
        },
        {
            "content": "iso,backup,vztmpl",
            "disk": 5996113920_u64,
            "id": "storage/node1/local",
            "maxdisk": 100861726720_u64,
            "node": "node1",
            "plugintype": "dir",
            "shared": 0,
            "status": "available",
            "storage": "local",
            "type": "storage"
        },
        {
            "id": "sdn/node1/localnetwork",
            "node": "node1",
            "sdn": "localnetwork",
            "status": "ok",
            "type": "sdn"
        }
    ])
}

#[tokio::test]
async fn test_cluster_resources_success() {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/api2/json/cluster/resources"))
        .and(header("Authorization", TEST_AUTHORIZATION))
        .respond_with(envelope(cluster_resources_fixture()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let resources = client.cluster().resources().await.unwrap().into_data();
    assert_eq!(resources.len(), 5);

    let vm = &resources[0];
    assert_eq!(vm.resource_type, ResourceType::Qemu);
    assert!(vm.is_guest());
    assert_eq!(vm.vmid.as_deref(), Some("101"));
    assert_eq!(vm.name.as_deref(), Some("my-vm"));
    assert_eq!(vm.diskwrite, Some(2697581568));
    assert_eq!(vm.template, Some(0));

    let container = &resources[1];
    assert_eq!(container.resource_type, ResourceType::Lxc);
    assert_eq!(container.vmid.as_deref(), Some("103"));

    let node = &resources[2];
    assert_eq!(node.resource_type, ResourceType::Node);
    assert!(!node.is_guest());
    assert_eq!(node.vmid, None);
    assert_eq!(node.cgroup_mode, Some(2));
    assert_eq!(node.level.as_deref(), Some(""));

    let storage = &resources[3];
    assert_eq!(storage.resource_type, ResourceType::Storage);
    assert_eq!(storage.storage.as_deref(), Some("local"));
    assert_eq!(storage.plugintype.as_deref(), Some("dir"));
    assert_eq!(storage.shared, Some(0));
    assert_eq!(storage.cpu, None);

    let sdn = &resources[4];
    assert_eq!(sdn.resource_type, ResourceType::Sdn);
    assert_eq!(sdn.sdn.as_deref(), Some("localnetwork"));
}

#[tokio::test]
async fn test_cluster_resources_unknown_type() {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/api2/json/cluster/resources"))
        .respond_with(envelope(json!([
            {"id": "network/node1/vmbr0", "node": "node1", "type": "network"}
        ])))
        .mount(&mock_server)
        .await;

    let resources = client.cluster().resources().await.unwrap().into_data();
    assert_eq!(resources[0].resource_type, ResourceType::Unknown);
}

#[tokio::test]
async fn test_cluster_resources_is_repeatable() {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/api2/json/cluster/resources"))
        .respond_with(envelope(cluster_resources_fixture()))
        .expect(2)
        .mount(&mock_server)
        .await;

    let first = client.cluster().resources().await.unwrap().into_data();
    let second = client.cluster().resources().await.unwrap().into_data();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_cluster_status_success() {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/api2/json/cluster/status"))
        .respond_with(envelope(json!([
            {
                "id": "cluster",
                "name": "prd",
                "nodes": 3,
                "quorate": 1,
                "type": "cluster",
                "version": 5
            },
            {
                "id": "node/cmp2",
                "ip": "10.0.1.2",
                "level": "",
                "local": 0,
                "name": "cmp2",
                "nodeid": 2,
                "online": 1,
                "type": "node"
            },
            {
                "id": "node/cmp1",
                "ip": "10.0.1.1",
                "level": "",
                "local": 1,
                "name": "cmp1",
                "nodeid": 1,
                "online": 1,
                "type": "node"
            }
        ])))
        .mount(&mock_server)
        .await;

    let entries = client.cluster().status().await.unwrap().into_data();
    assert_eq!(entries.len(), 3);

    let cluster = &entries[0];
    assert_eq!(cluster.entry_type, "cluster");
    assert_eq!(cluster.name, "prd");
    assert_eq!(cluster.version, Some(5));
    assert_eq!(cluster.quorate, Some(1));
    assert_eq!(cluster.ip, None);

    let local = entries.iter().find(|e| e.local == Some(1)).unwrap();
    assert_eq!(local.name, "cmp1");
    assert_eq!(local.ip.as_deref(), Some("10.0.1.1"));
    assert_eq!(local.nodeid, Some(1));
}

#[tokio::test]
async fn test_cluster_ceph_status_success() {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/api2/json/cluster/ceph/status"))
        .respond_with(envelope(json!({
            "fsid": "7d4cfa5b-2d9b-4e7c-9f4e-0d6c1c1a7f10",
            "health": {"checks": {}, "mutes": [], "status": "HEALTH_OK"},
            "monmap": {"epoch": 3}
        })))
        .mount(&mock_server)
        .await;

    let ceph = client.cluster().ceph_status().await.unwrap().into_data();
    assert_eq!(ceph.health.status, "HEALTH_OK");
    assert!(ceph.health.is_ok());
    assert!(ceph.health.checks.is_empty());
}

#[tokio::test]
async fn test_cluster_ceph_status_with_warnings() {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/api2/json/cluster/ceph/status"))
        .respond_with(envelope(json!({
            "health": {
                "checks": {
                    "OSD_DOWN": {"severity": "HEALTH_WARN", "summary": {"message": "1 osds down"}}
                },
                "status": "HEALTH_WARN"
            }
        })))
        .mount(&mock_server)
        .await;

    let ceph = client.cluster().ceph_status().await.unwrap().into_data();
    assert!(!ceph.health.is_ok());
    assert!(ceph.health.checks.contains_key("OSD_DOWN"));
}

#[tokio::test]
async fn test_server_error_with_html_body() {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server);
    let body = "<html><body>Internal Error</body></html>";

    Mock::given(method("GET"))
        .and(path("/api2/json/cluster/resources"))
        .respond_with(ResponseTemplate::new(500).set_body_string(body))
        .mount(&mock_server)
        .await;

    let err = client.cluster().resources().await.unwrap_err();
    assert!(matches!(err, ProxmoxError::Decode { .. }));
    assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    assert!(err.response().unwrap().text().contains("Internal Error"));
}

#[tokio::test]
async fn test_missing_envelope_is_a_decode_error() {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server);
    let body = json!([{"id": "cluster"}]);

    Mock::given(method("GET"))
        .and(path("/api2/json/cluster/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let err = client.cluster().status().await.unwrap_err();
    assert!(matches!(err, ProxmoxError::Decode { .. }));
    assert_eq!(err.status(), Some(StatusCode::OK));
}
