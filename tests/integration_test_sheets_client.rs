use inquiry_backend::domain::models::inquiry::{Inquiry, NewInquiryParams};
use inquiry_backend::domain::ports::RecordStore;
use inquiry_backend::error::AppError;
use inquiry_backend::infra::sheets::google_sheets_store::GoogleSheetsStore;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TEST_KEY: &str = include_str!("keys/test_service_account.pem");

fn sample_inquiry() -> Inquiry {
    Inquiry::new(NewInquiryParams {
        name: "Alice Smith".to_string(),
        email: "alice@example.com".to_string(),
        phone: "(555) 555-5555".to_string(),
        message: Some("Two families".to_string()),
        week: Some("July 12-19".to_string()),
        guests: Some(4),
        rate: Some(6800),
    })
}

fn store_for(server: &MockServer) -> GoogleSheetsStore {
    GoogleSheetsStore::new(
        "sheet-123".to_string(),
        "svc@test-project.iam.gserviceaccount.com".to_string(),
        TEST_KEY.to_string(),
    )
    .with_endpoints(format!("{}/token", server.uri()), server.uri())
}

async fn mount_token_endpoint(server: &MockServer, expected_hits: u64) {
    Mock::given(method("POST"))
        .and(path("/token"))
        .and(body_string_contains("urn%3Aietf%3Aparams%3Aoauth%3Agrant-type%3Ajwt-bearer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "token-abc",
            "expires_in": 3600,
            "token_type": "Bearer"
        })))
        .expect(expected_hits)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_append_exchanges_token_and_posts_row() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, 1).await;

    Mock::given(method("POST"))
        .and(path("/v4/spreadsheets/sheet-123/values/Sheet1!A1:append"))
        .and(header("Authorization", "Bearer token-abc"))
        .and(body_string_contains("alice@example.com"))
        .and(body_string_contains("July 12-19"))
        .and(body_string_contains("New"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "updates": { "updatedRows": 1 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let store = store_for(&server);
    store.append_inquiry(&sample_inquiry()).await.unwrap();
}

#[tokio::test]
async fn test_cached_token_is_reused_across_appends() {
    let server = MockServer::start().await;
    // Two appends, one token exchange.
    mount_token_endpoint(&server, 1).await;

    Mock::given(method("POST"))
        .and(path("/v4/spreadsheets/sheet-123/values/Sheet1!A1:append"))
        .and(header("Authorization", "Bearer token-abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(2)
        .mount(&server)
        .await;

    let store = store_for(&server);
    store.append_inquiry(&sample_inquiry()).await.unwrap();
    store.append_inquiry(&sample_inquiry()).await.unwrap();
}

#[tokio::test]
async fn test_rejected_append_surfaces_record_store_error() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, 1).await;

    Mock::given(method("POST"))
        .and(path("/v4/spreadsheets/sheet-123/values/Sheet1!A1:append"))
        .respond_with(ResponseTemplate::new(403).set_body_string("PERMISSION_DENIED"))
        .mount(&server)
        .await;

    let store = store_for(&server);
    let err = store.append_inquiry(&sample_inquiry()).await.unwrap_err();
    assert!(matches!(err, AppError::RecordStore(_)));
}

#[tokio::test]
async fn test_failed_token_exchange_surfaces_credentials_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid_grant"))
        .mount(&server)
        .await;

    let store = store_for(&server);
    let err = store.append_inquiry(&sample_inquiry()).await.unwrap_err();
    assert!(matches!(err, AppError::Credentials(_)));
}

#[tokio::test]
async fn test_garbage_private_key_fails_before_any_request() {
    let server = MockServer::start().await;

    let store = GoogleSheetsStore::new(
        "sheet-123".to_string(),
        "svc@test-project.iam.gserviceaccount.com".to_string(),
        "not a pem".to_string(),
    )
    .with_endpoints(format!("{}/token", server.uri()), server.uri());

    let err = store.append_inquiry(&sample_inquiry()).await.unwrap_err();
    assert!(matches!(err, AppError::Credentials(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}
