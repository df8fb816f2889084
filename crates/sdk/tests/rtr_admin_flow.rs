//! Integration tests for the Real Time Response administrator façade.

use falcon_sdk::{Credentials, FalconClient, Params, RealTimeResponseAdmin, TransportConfig};
use serde_json::json;
use wiremock::matchers::{body_json, body_string, header, method, path, query_param};
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
async fn batch_command_combines_timeout_query_with_body() {
    let server = MockServer::start().await;
    let rtr = RealTimeResponseAdmin::new(mock_client(&server));

    let command = json!({
        "batch_id": "batch-1",
        "base_command": "reg query",
        "command_string": "reg query HKLM\\Software"
    });
    Mock::given(method("POST"))
        .and(path("/real-time-response/combined/batch-admin-command/v1"))
        .and(query_param("timeout", "30"))
        .and(query_param("timeout_duration", "30s"))
        .and(body_json(command.clone()))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "combined": {"resources": {"aid-1": {"complete": false}}}
        })))
        .mount(&server)
        .await;

    let envelope = rtr
        .batch_admin_command(
            params(json!({"timeout": 30, "timeout_duration": "30s"})),
            command,
        )
        .await
        .expect("dispatch");

    assert_eq!(envelope.status_code, 201);
    assert_eq!(
        envelope.body["combined"]["resources"]["aid-1"]["complete"],
        json!(false)
    );
}

#[tokio::test]
async fn command_status_requires_the_full_cursor() {
    let server = MockServer::start().await;
    let rtr = RealTimeResponseAdmin::new(mock_client(&server));

    let err = rtr
        .check_admin_command_status(params(json!({"cloud_request_id": "req-1"})))
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "missing required query parameter: sequence_id"
    );
    let received = server.received_requests().await.expect("recording on");
    assert!(received.is_empty(), "no request should have been sent");
}

#[tokio::test]
async fn script_upload_round_trips_as_bytes() {
    let server = MockServer::start().await;
    let rtr = RealTimeResponseAdmin::new(mock_client(&server));

    let script = "#!/bin/sh\nps aux | head -5\n";
    Mock::given(method("POST"))
        .and(path("/real-time-response/entities/scripts/v1"))
        .and(header("content-type", "application/octet-stream"))
        .and(body_string(script))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {"writes": {"resources_affected": 1}}
        })))
        .mount(&server)
        .await;

    let envelope = rtr
        .create_scripts(script.as_bytes().to_vec())
        .await
        .expect("dispatch");

    assert_eq!(envelope.status_code, 200);
    assert_eq!(
        envelope.body["meta"]["writes"]["resources_affected"],
        json!(1)
    );
}

#[tokio::test]
async fn single_file_delete_sends_a_scalar_id() {
    let server = MockServer::start().await;
    let rtr = RealTimeResponseAdmin::new(mock_client(&server));

    Mock::given(method("DELETE"))
        .and(path("/real-time-response/entities/put-files/v1"))
        .and(query_param("ids", "pf-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {"writes": {"resources_affected": 1}}
        })))
        .mount(&server)
        .await;

    let envelope = rtr
        .delete_put_files(params(json!({"ids": "pf-1"})))
        .await
        .expect("dispatch");

    assert_eq!(envelope.status_code, 200);
}
