//! Integration tests for the OAuth 2.0 flow.
//!
//! Discovery, code exchange, refresh and revocation run against a local mock
//! server standing in for Intuit's endpoints.

use quickbooks_api::auth::oauth::{
    authorization_url, exchange_authorization_code, refresh_access_token, revoke_token,
    validate_callback, CallbackQuery,
};
use quickbooks_api::{
    ClientId, ClientSecret, DiscoveryDocument, OAuthError, QuickBooksConfig, RealmId, ServiceUrl,
};
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const REALM: &str = "4620816365";
const BASIC_CREDENTIALS: &str = "Basic dGVzdC1jbGllbnQtaWQ6dGVzdC1jbGllbnQtc2VjcmV0";

fn create_test_config() -> QuickBooksConfig {
    QuickBooksConfig::builder()
        .client_id(ClientId::new("test-client-id").unwrap())
        .client_secret(ClientSecret::new("test-client-secret").unwrap())
        .redirect_uri(ServiceUrl::new("https://myapp.example.com/callback").unwrap())
        .build()
        .unwrap()
}

fn create_discovery(server: &MockServer) -> DiscoveryDocument {
    DiscoveryDocument {
        issuer: "https://oauth.platform.intuit.com/op/v1".to_string(),
        authorization_endpoint: "https://appcenter.intuit.com/connect/oauth2".to_string(),
        token_endpoint: format!("{}/oauth2/v1/tokens/bearer", server.uri()),
        userinfo_endpoint: format!("{}/v1/openid_connect/userinfo", server.uri()),
        revocation_endpoint: format!("{}/oauth2/v1/tokens/revoke", server.uri()),
        jwks_uri: format!("{}/oauth2/v1/keys", server.uri()),
    }
}

fn token_response() -> serde_json::Value {
    json!({
        "token_type": "bearer",
        "access_token": "eyJlbmMiOiJBMTI4Q0JDLUhTMjU2",
        "refresh_token": "AB11730384931ocrNlRqi2e2KRQoCQ2k",
        "expires_in": 3600,
        "x_refresh_token_expires_in": 8_726_400
    })
}

// ============================================================================
// Discovery Tests
// ============================================================================

#[tokio::test]
async fn test_discovery_document_is_fetched() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/.well-known/openid_sandbox_configuration"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "issuer": "https://oauth.platform.intuit.com/op/v1",
            "authorization_endpoint": "https://appcenter.intuit.com/connect/oauth2",
            "token_endpoint": "https://oauth.platform.intuit.com/oauth2/v1/tokens/bearer",
            "userinfo_endpoint": "https://sandbox-accounts.platform.intuit.com/v1/openid_connect/userinfo",
            "revocation_endpoint": "https://developer.api.intuit.com/v2/oauth2/tokens/revoke",
            "jwks_uri": "https://oauth.platform.intuit.com/op/v1/jwks",
            "response_types_supported": ["code"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}/.well-known/openid_sandbox_configuration", server.uri());
    let discovery = DiscoveryDocument::fetch_from(&url).await.unwrap();

    assert_eq!(
        discovery.token_endpoint,
        "https://oauth.platform.intuit.com/oauth2/v1/tokens/bearer"
    );
    assert_eq!(
        discovery.revocation_endpoint,
        "https://developer.api.intuit.com/v2/oauth2/tokens/revoke"
    );
}

#[tokio::test]
async fn test_discovery_failure_reports_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .mount(&server)
        .await;

    let result = DiscoveryDocument::fetch_from(&server.uri()).await;

    assert!(matches!(
        result,
        Err(OAuthError::DiscoveryFailed { status: 503, .. })
    ));
}

// ============================================================================
// Authorization Flow Tests
// ============================================================================

#[tokio::test]
async fn test_full_authorization_code_flow() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth2/v1/tokens/bearer"))
        .and(header("authorization", BASIC_CREDENTIALS))
        .and(body_string_contains("grant_type=authorization_code"))
        .and(body_string_contains("code=Q011535008931rqveSVHQc9RhDjE"))
        .and(body_string_contains(
            "redirect_uri=https%3A%2F%2Fmyapp.example.com%2Fcallback",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_response()))
        .expect(1)
        .mount(&server)
        .await;

    let config = create_test_config();
    let discovery = create_discovery(&server);

    let request = authorization_url(&config, &discovery, None).unwrap();
    assert!(request.auth_url.contains("client_id=test-client-id"));

    let callback = CallbackQuery {
        code: Some("Q011535008931rqveSVHQc9RhDjE".to_string()),
        state: Some(request.state.to_string()),
        realm_id: Some(REALM.to_string()),
        error: None,
    };
    let grant = validate_callback(&callback, &request.state).unwrap();
    assert_eq!(grant.realm_id.as_ref(), REALM);

    let session = exchange_authorization_code(&config, &discovery, &grant.code, grant.realm_id)
        .await
        .unwrap();

    assert_eq!(session.access_token, "eyJlbmMiOiJBMTI4Q0JDLUhTMjU2");
    assert_eq!(
        session.refresh_token.as_deref(),
        Some("AB11730384931ocrNlRqi2e2KRQoCQ2k")
    );
    assert!(session.expires.is_some());
    assert!(session.is_active());
}

#[tokio::test]
async fn test_exchange_rejection_surfaces_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth2/v1/tokens/bearer"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": "invalid_grant"})))
        .mount(&server)
        .await;

    let result = exchange_authorization_code(
        &create_test_config(),
        &create_discovery(&server),
        "used-code",
        RealmId::new(REALM).unwrap(),
    )
    .await;

    match result {
        Err(OAuthError::TokenRequestFailed { status, message }) => {
            assert_eq!(status, 400);
            assert!(message.contains("invalid_grant"));
        }
        other => panic!("expected a token request failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_exchange_requires_redirect_uri() {
    let server = MockServer::start().await;
    let config = QuickBooksConfig::builder()
        .client_id(ClientId::new("test-client-id").unwrap())
        .client_secret(ClientSecret::new("test-client-secret").unwrap())
        .build()
        .unwrap();

    let result = exchange_authorization_code(
        &config,
        &create_discovery(&server),
        "code",
        RealmId::new(REALM).unwrap(),
    )
    .await;

    assert!(matches!(result, Err(OAuthError::MissingRedirectUri)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

// ============================================================================
// Refresh and Revocation Tests
// ============================================================================

#[tokio::test]
async fn test_refresh_returns_rotated_tokens() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth2/v1/tokens/bearer"))
        .and(header("authorization", BASIC_CREDENTIALS))
        .and(body_string_contains("grant_type=refresh_token"))
        .and(body_string_contains("refresh_token=old-refresh-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_response()))
        .expect(1)
        .mount(&server)
        .await;

    let session = refresh_access_token(
        &create_test_config(),
        &create_discovery(&server),
        "old-refresh-token",
        RealmId::new(REALM).unwrap(),
    )
    .await
    .unwrap();

    assert_eq!(session.realm_id.as_ref(), REALM);
    assert_eq!(
        session.refresh_token.as_deref(),
        Some("AB11730384931ocrNlRqi2e2KRQoCQ2k")
    );
}

#[tokio::test]
async fn test_revoke_posts_token_with_basic_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth2/v1/tokens/revoke"))
        .and(header("authorization", BASIC_CREDENTIALS))
        .and(body_string_contains("token=AB11730384931ocrNlRqi2e2KRQoCQ2k"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    revoke_token(
        &create_test_config(),
        &create_discovery(&server),
        "AB11730384931ocrNlRqi2e2KRQoCQ2k",
    )
    .await
    .unwrap();
}

#[tokio::test]
async fn test_revoke_failure_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth2/v1/tokens/revoke"))
        .respond_with(ResponseTemplate::new(400).set_body_string("invalid token"))
        .mount(&server)
        .await;

    let result = revoke_token(&create_test_config(), &create_discovery(&server), "bogus").await;

    assert!(matches!(
        result,
        Err(OAuthError::TokenRevocationFailed { status: 400, .. })
    ));
}
