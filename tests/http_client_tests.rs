//! Integration tests for the HTTP transport.
//!
//! These tests run the client against a local mock server and verify the
//! request shape, response classification and the 429 cooldown.

use std::time::Duration;

use quickbooks_api::{
    ClientId, ClientSecret, HttpError, MinorVersion, QuickBooksConfig, RealmId, RestClient,
    ServiceUrl, Session,
};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const REALM: &str = "4620816365";

fn create_test_session(access_token: &str) -> Session {
    Session::new(RealmId::new(REALM).unwrap(), access_token)
}

fn create_test_config(server: &MockServer) -> QuickBooksConfig {
    QuickBooksConfig::builder()
        .client_id(ClientId::new("test-client-id").unwrap())
        .client_secret(ClientSecret::new("test-client-secret").unwrap())
        .api_base_url(ServiceUrl::new(server.uri()).unwrap())
        .build()
        .unwrap()
}

fn create_test_client(server: &MockServer) -> RestClient {
    let config = create_test_config(server);
    RestClient::new(&create_test_session("test-access-token"), Some(&config)).unwrap()
}

// ============================================================================
// Request Shape Tests
// ============================================================================

#[tokio::test]
async fn test_get_targets_realm_path_with_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/v3/company/{REALM}/invoice/130")))
        .and(header("authorization", "Bearer test-access-token"))
        .and(header("accept", "application/json"))
        .and(query_param("minorversion", "75"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Invoice": {"Id": "130", "SyncToken": "0"},
            "time": "2015-07-24T10:48:27.082-07:00"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let response = client.get("invoice/130", None).await.unwrap();

    assert_eq!(response.code, 200);
    assert_eq!(response.body["Invoice"]["Id"], "130");
    assert_eq!(response.server_time(), Some("2015-07-24T10:48:27.082-07:00"));
}

#[tokio::test]
async fn test_minorversion_leads_the_query_string() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/v3/company/{REALM}/invoice")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    client
        .post(
            "invoice",
            Some(json!({"Id": "130", "SyncToken": "1"})),
            Some(vec![("operation".to_string(), "delete".to_string())]),
        )
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].url.query(),
        Some("minorversion=75&operation=delete")
    );

    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["Id"], "130");
    assert_eq!(body["SyncToken"], "1");
}

#[tokio::test]
async fn test_configured_minor_version_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("minorversion", "65"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let config = QuickBooksConfig::builder()
        .client_id(ClientId::new("test-client-id").unwrap())
        .client_secret(ClientSecret::new("test-client-secret").unwrap())
        .api_base_url(ServiceUrl::new(server.uri()).unwrap())
        .minor_version(MinorVersion::new(65))
        .build()
        .unwrap();
    let client = RestClient::new(&create_test_session("token"), Some(&config)).unwrap();

    client.get("preferences", None).await.unwrap();
}

#[tokio::test]
async fn test_minorversion_cannot_be_overridden() {
    let server = MockServer::start().await;
    let client = create_test_client(&server);

    let result = client
        .get(
            "invoice/130",
            Some(vec![("MinorVersion".to_string(), "4".to_string())]),
        )
        .await;

    assert!(matches!(result, Err(HttpError::InvalidRequest(_))));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_session_swaps_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("authorization", "Bearer rotated-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    client.update_session(&create_test_session("rotated-token"));

    client.get("companyinfo/4620816365", None).await.unwrap();
}

// ============================================================================
// Response Classification Tests
// ============================================================================

#[tokio::test]
async fn test_empty_success_body_decodes_as_empty_object() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let response = client.post("estimate/41/send", None, None).await.unwrap();

    assert_eq!(response.body, json!({}));
}

#[tokio::test]
async fn test_plain_text_success_body_decodes_as_string() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/v3/company/{REALM}/download/5000000000000010341")))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("https://intuit-qbo-prod.s3.amazonaws.com/receipt.jpg"),
        )
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let response = client
        .get("download/5000000000000010341", None)
        .await
        .unwrap();

    assert_eq!(
        response.body,
        json!("https://intuit-qbo-prod.s3.amazonaws.com/receipt.jpg")
    );
}

#[tokio::test]
async fn test_malformed_json_success_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{\"Invoice\":", "application/json"))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = client.get("invoice/130", None).await;

    match result {
        Err(HttpError::Decode(e)) => assert_eq!(e.status, 200),
        other => panic!("expected a decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fault_envelope_maps_to_fault_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(400)
                .insert_header("intuit_tid", "1-5f2b3c4d-abcdef")
                .set_body_json(json!({
                    "Fault": {
                        "Error": [{
                            "Message": "Object Not Found",
                            "Detail": "Object Not Found : Something you're trying to use has been made inactive.",
                            "code": "610",
                            "element": ""
                        }],
                        "type": "ValidationFault"
                    },
                    "time": "2015-02-09T10:11:11.123-08:00"
                })),
        )
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let error = client.get("bill/999", None).await.unwrap_err();

    assert_eq!(error.intuit_tid(), Some("1-5f2b3c4d-abcdef"));
    let fault = error.fault().unwrap();
    assert_eq!(fault.status, 400);
    assert_eq!(fault.fault.fault_type, "ValidationFault");
    assert_eq!(fault.fault.errors[0].code, "610");
    assert_eq!(fault.time.as_deref(), Some("2015-02-09T10:11:11.123-08:00"));
    assert!(fault.is_object_not_found());
}

#[tokio::test]
async fn test_non_fault_error_body_is_raw_response_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let error = client.get("invoice/130", None).await.unwrap_err();

    match error {
        HttpError::Response(e) => {
            assert_eq!(e.code, 502);
            assert_eq!(e.message, "Bad Gateway");
        }
        other => panic!("expected a response error, got {other:?}"),
    }
}

// ============================================================================
// Throttle Tests
// ============================================================================

#[tokio::test]
async fn test_429_starts_cooldown_that_refuses_without_sending() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).set_body_string("Too Many Requests"))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);

    let first = client.get("invoice/130", None).await;
    assert!(matches!(first, Err(HttpError::Throttled(_))));
    assert!(client.http_client().is_throttled());

    let second = client.get("invoice/131", None).await;
    match second {
        Err(HttpError::Throttled(e)) => assert_eq!(e.cooldown, Duration::from_secs(60)),
        other => panic!("expected a throttled error, got {other:?}"),
    }

    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_cooldown_expires() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let config = QuickBooksConfig::builder()
        .client_id(ClientId::new("test-client-id").unwrap())
        .client_secret(ClientSecret::new("test-client-secret").unwrap())
        .api_base_url(ServiceUrl::new(server.uri()).unwrap())
        .throttle_cooldown(Duration::from_millis(50))
        .build()
        .unwrap();
    let client = RestClient::new(&create_test_session("token"), Some(&config)).unwrap();

    assert!(client.get("invoice/130", None).await.is_err());
    tokio::time::sleep(Duration::from_millis(100)).await;

    assert!(client.get("invoice/130", None).await.is_ok());
}
