//! Integration tests for the custom IOA façade using wiremock.

use falcon_sdk::{Credentials, CustomIoa, FalconClient, Params, TransportConfig};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper: creates a client pointed at the given wiremock server.
fn mock_client(server: &MockServer) -> FalconClient {
    let credentials = Credentials::new("mock-token", &server.uri());
    FalconClient::new(credentials, TransportConfig::default()).expect("build client")
}

fn params(value: serde_json::Value) -> Option<Params> {
    Some(value.as_object().expect("params literal").clone())
}

#[tokio::test]
async fn create_then_fetch_round_trips_the_rule_group() {
    let server = MockServer::start().await;
    let ioa = CustomIoa::new(mock_client(&server));

    let create_body = json!({
        "name": "staging-lateral-movement",
        "description": "Watches staging hosts",
        "platform": "windows"
    });
    Mock::given(method("POST"))
        .and(path("/ioarules/entities/rule-groups/v1"))
        .and(body_json(create_body.clone()))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "resources": [{"id": "rg-123", "name": "staging-lateral-movement"}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ioarules/entities/rule-groups/v1"))
        .and(query_param("ids", "rg-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "resources": [{
                "id": "rg-123",
                "name": "staging-lateral-movement",
                "enabled": false
            }]
        })))
        .mount(&server)
        .await;

    let created = ioa.create_rule_group(create_body).await.expect("create");
    assert_eq!(created.status_code, 201);
    let id = created.body["resources"][0]["id"]
        .as_str()
        .expect("created id");

    let fetched = ioa
        .get_rule_groups(params(json!({"ids": [id]})))
        .await
        .expect("fetch");
    assert_eq!(fetched.status_code, 200);
    assert_eq!(
        fetched.body["resources"][0]["name"],
        json!("staging-lateral-movement")
    );
}

#[tokio::test]
async fn clean_method_names_reach_the_suffixed_routes() {
    let server = MockServer::start().await;
    let ioa = CustomIoa::new(mock_client(&server));

    Mock::given(method("GET"))
        .and(path("/ioarules/entities/platforms/v1"))
        .and(query_param("ids", "windows"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "resources": [{"id": "windows", "label": "Windows"}]
        })))
        .mount(&server)
        .await;

    let envelope = ioa
        .get_platforms(params(json!({"ids": ["windows"]})))
        .await
        .expect("dispatch");

    assert_eq!(envelope.status_code, 200);
    assert_eq!(envelope.body["resources"][0]["label"], json!("Windows"));
}

#[tokio::test]
async fn rule_searches_carry_the_full_filter_set() {
    let server = MockServer::start().await;
    let ioa = CustomIoa::new(mock_client(&server));

    Mock::given(method("GET"))
        .and(path("/ioarules/queries/rule-groups-full/v1"))
        .and(query_param("filter", "enabled:true"))
        .and(query_param("q", "lateral"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "resources": [{"id": "rg-123"}]
        })))
        .mount(&server)
        .await;

    let envelope = ioa
        .query_rule_groups_full(params(json!({
            "filter": "enabled:true",
            "q": "lateral",
            "limit": 10
        })))
        .await
        .expect("dispatch");

    assert_eq!(envelope.status_code, 200);
}

#[tokio::test]
async fn rule_deletion_requires_the_owning_group() {
    let server = MockServer::start().await;
    let ioa = CustomIoa::new(mock_client(&server));

    let err = ioa
        .delete_rules(params(json!({"ids": ["rule-1"]})))
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "missing required query parameter: rule_group_id"
    );
    let received = server.received_requests().await.expect("recording on");
    assert!(received.is_empty(), "no request should have been sent");
}
