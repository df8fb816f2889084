//! Integration tests for the user management façade using wiremock.
//!
//! These tests mock the cloud gateway to verify that role grant/revoke
//! calls hit the wire with the documented query shape and that HTTP
//! outcomes pass through the envelope untouched.

use falcon_sdk::{Credentials, FalconClient, Params, TransportConfig, UserManagement};
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
async fn revoke_repeats_each_role_id_in_the_query() {
    let server = MockServer::start().await;
    let users = UserManagement::new(mock_client(&server));

    Mock::given(method("DELETE"))
        .and(path("/user-roles/entities/user-roles/v1"))
        .and(query_param("user_uuid", "U1"))
        .and(query_param("ids", "R1"))
        .and(query_param("ids", "R2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [],
            "resources": ["R1", "R2"]
        })))
        .mount(&server)
        .await;

    let envelope = users
        .revoke_user_role_ids(params(json!({"user_uuid": "U1", "ids": ["R1", "R2"]})))
        .await
        .expect("dispatch");

    assert_eq!(envelope.status_code, 200);
    assert_eq!(envelope.body["resources"], json!(["R1", "R2"]));
}

#[tokio::test]
async fn grant_sends_query_and_body_together() {
    let server = MockServer::start().await;
    let users = UserManagement::new(mock_client(&server));

    Mock::given(method("POST"))
        .and(path("/user-roles/entities/user-roles/v1"))
        .and(query_param("user_uuid", "U1"))
        .and(body_json(json!({"roleIds": ["security_lead"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "resources": ["security_lead"]
        })))
        .mount(&server)
        .await;

    let envelope = users
        .grant_user_role_ids(
            params(json!({"user_uuid": "U1"})),
            json!({"roleIds": ["security_lead"]}),
        )
        .await
        .expect("dispatch");

    assert_eq!(envelope.status_code, 200);
    assert_eq!(envelope.body["resources"], json!(["security_lead"]));
}

#[tokio::test]
async fn missing_user_uuid_fails_before_any_request() {
    let server = MockServer::start().await;
    let users = UserManagement::new(mock_client(&server));

    let err = users
        .revoke_user_role_ids(params(json!({"ids": ["R1"]})))
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "missing required query parameter: user_uuid"
    );
    let received = server.received_requests().await.expect("recording on");
    assert!(received.is_empty(), "no request should have been sent");
}

#[tokio::test]
async fn forbidden_status_passes_through_unraised() {
    let server = MockServer::start().await;
    let users = UserManagement::new(mock_client(&server));

    Mock::given(method("GET"))
        .and(path("/users/entities/users/v1"))
        .and(query_param("ids", "user-1"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "errors": [{"code": 403, "message": "access denied"}],
            "resources": []
        })))
        .mount(&server)
        .await;

    let envelope = users
        .retrieve_user(params(json!({"ids": ["user-1"]})))
        .await
        .expect("dispatch");

    assert_eq!(envelope.status_code, 403);
    assert!(!envelope.is_success());
    assert_eq!(envelope.body["errors"][0]["message"], json!("access denied"));
}

#[tokio::test]
async fn account_wide_listings_need_no_arguments() {
    let server = MockServer::start().await;
    let users = UserManagement::new(mock_client(&server));

    Mock::given(method("GET"))
        .and(path("/users/queries/emails-by-cid/v1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "resources": ["alice@example.com", "bob@example.com"]
        })))
        .mount(&server)
        .await;

    let envelope = users.retrieve_emails_by_cid().await.expect("dispatch");

    assert_eq!(envelope.status_code, 200);
    assert_eq!(
        envelope.body["resources"],
        json!(["alice@example.com", "bob@example.com"])
    );
}
