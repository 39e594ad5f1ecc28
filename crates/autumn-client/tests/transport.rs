//! Transport and normalization tests against a mock backend.

mod common;

use std::collections::HashMap;
use std::sync::Arc;

use autumn_client::{ApiResult, Autumn, AutumnError, AutumnOptions, ErrorCode, LATEST_API_VERSION};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{api_url, test_client, RecordingLogger, PUBLISHABLE_KEY, SECRET_KEY};

#[tokio::test]
async fn get_sends_auth_and_version_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/ping"))
        .and(header("authorization", format!("Bearer {SECRET_KEY}").as_str()))
        .and(header("content-type", "application/json"))
        .and(header("x-api-version", LATEST_API_VERSION))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"foo": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result: ApiResult<Value> = client.get("/ping").await.unwrap();

    assert_eq!(result, ApiResult::Data(json!({"foo": 1})));
}

#[tokio::test]
async fn post_sends_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/echo"))
        .and(body_json(json!({"customer_id": "cus_1", "value": 3})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result: ApiResult<Value> = client
        .post("/echo", &json!({"customer_id": "cus_1", "value": 3}))
        .await
        .unwrap();

    assert_eq!(result.data(), Some(&json!({"ok": true})));
}

#[tokio::test]
async fn delete_uses_delete_method() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/things/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"deleted": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result: ApiResult<Value> = client.delete("/things/1").await.unwrap();

    assert!(result.is_data());
}

#[tokio::test]
async fn not_found_becomes_error_result() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/customers/missing"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({"message": "not found", "code": "not_found"})),
        )
        .mount(&server)
        .await;

    let logger = Arc::new(RecordingLogger::default());
    let client = Autumn::with_options_in(
        AutumnOptions::new()
            .with_secret_key(SECRET_KEY)
            .with_url(api_url(&server))
            .with_logger(logger.clone()),
        &HashMap::<String, String>::new(),
    )
    .unwrap();

    let result: ApiResult<Value> = client.get("/customers/missing").await.unwrap();

    let error = result.error().expect("expected an error result");
    assert_eq!(error.status_code, 404);
    assert_eq!(error.message, "not found");
    assert_eq!(error.code, ErrorCode::from("not_found"));

    let lines = logger.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].1.contains("/customers/missing"));
    assert!(lines[0].1.contains("404"));
}

#[tokio::test]
async fn server_error_without_json_uses_placeholders() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/track"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result: ApiResult<Value> = client.post("/track", &json!({})).await.unwrap();

    let error = result.error().unwrap();
    assert_eq!(error.status_code, 500);
    assert_eq!(error.message, "HTTP 500");
    assert_eq!(error.code.as_str(), Some("unknown"));
}

#[tokio::test]
async fn success_with_non_json_body_has_empty_data() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/plain"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result: ApiResult<Value> = client.get("/plain").await.unwrap();

    assert_eq!(result, ApiResult::Data(Value::Null));
}

#[tokio::test]
async fn publishable_key_is_used_without_secret() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/ping"))
        .and(header("authorization", format!("Bearer {PUBLISHABLE_KEY}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = Autumn::with_options_in(
        AutumnOptions::new()
            .with_publishable_key(PUBLISHABLE_KEY)
            .with_url(api_url(&server)),
        &HashMap::<String, String>::new(),
    )
    .unwrap();

    assert!(client.get::<Value>("/ping").await.unwrap().is_data());
}

#[tokio::test]
async fn explicit_headers_are_sent_verbatim_with_version() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/ping"))
        .and(header("authorization", "Bearer from-proxy"))
        .and(header("x-tenant", "acme"))
        .and(header("x-api-version", "1.1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = Autumn::with_options_in(
        AutumnOptions::new()
            .with_headers([("Authorization", "Bearer from-proxy"), ("x-tenant", "acme")])
            .with_version("1.1")
            .with_url(api_url(&server)),
        &HashMap::<String, String>::new(),
    )
    .unwrap();

    assert_eq!(client.headers().len(), 3);
    assert!(client.get::<Value>("/ping").await.unwrap().is_data());
}

#[tokio::test]
async fn each_call_is_one_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/check"))
        .and(header_exists("x-api-version"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({"message": "slow down"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result: ApiResult<Value> = client.post("/check", &json!({})).await.unwrap();

    assert_eq!(result.error().map(|e| e.status_code), Some(429));
}

#[tokio::test]
async fn concurrent_calls_share_one_client() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"pong": true})))
        .expect(8)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let calls = (0..8).map(|_| client.get::<Value>("/ping"));
    let results = futures::future::join_all(calls).await;

    assert!(results
        .into_iter()
        .all(|r| r.unwrap() == ApiResult::Data(json!({"pong": true}))));
}

#[tokio::test]
async fn unreachable_backend_is_transport_error() {
    let client = Autumn::with_options_in(
        AutumnOptions::new()
            .with_secret_key(SECRET_KEY)
            .with_url("http://127.0.0.1:1/v1"),
        &HashMap::<String, String>::new(),
    )
    .unwrap();

    let err = client.get::<Value>("/ping").await.unwrap_err();
    assert!(matches!(err, AutumnError::Http(_)));
}
