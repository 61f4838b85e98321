use crate::common::{html_page, test_config};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use company_finder::api::router;
use company_finder::enrich::enrich;
use company_finder::input::load_company_names;
use company_finder::storage::SqliteStore;
use company_finder::url::normalize_target;
use company_finder::worker::crawl;
use std::sync::Arc;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Crawls one mock company site and enriches it with names
async fn crawled_store(server: &MockServer) -> Arc<SqliteStore> {
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html_page(
            r#"<p>(555) 123-4567</p><a href="https://facebook.com/Acme-Inc">fb</a>"#,
        )))
        .mount(server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir, 1);
    let store = Arc::new(SqliteStore::new_in_memory().unwrap());
    crawl(&config, store.clone(), vec![normalize_target(&server.uri()).unwrap()])
        .await
        .unwrap();

    let names_path = dir.path().join("names.csv");
    std::fs::write(
        &names_path,
        format!(
            "domain,company_commercial_name,company_legal_name,company_all_available_names\n\
             {},Acme,Acme Incorporated,Acme | Acme Anvils\n",
            server.uri()
        ),
    )
    .unwrap();
    let rows = load_company_names(&names_path).unwrap();
    let report = enrich(store.as_ref(), &rows).unwrap();
    assert_eq!(report.updated, 1);

    store
}

async fn get_json(store: Arc<SqliteStore>, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = router(store)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_lookup_by_facebook_profile() {
    let server = MockServer::start().await;
    let store = crawled_store(&server).await;

    let (status, body) = get_json(store, "/company?facebook_profile=facebook.com/Acme-Inc").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["url"], server.uri());
    assert_eq!(body["legal_name"], "Acme Incorporated");
    assert_eq!(body["phone_numbers"][0], "5551234567");
}

#[tokio::test]
async fn test_lookup_by_name_and_phone() {
    let server = MockServer::start().await;
    let store = crawled_store(&server).await;

    let (status, body) =
        get_json(store, "/company?company_name=acme%20anvils&phone_number=555-123-4567").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["url"], server.uri());
    assert_eq!(
        body["all_company_names"],
        serde_json::json!(["Acme", "Acme Incorporated", "Acme Anvils"])
    );
    assert!(body["score"].as_f64().unwrap() > 2.0);
}

#[tokio::test]
async fn test_lookup_unknown_company() {
    let server = MockServer::start().await;
    let store = crawled_store(&server).await;

    let (status, body) = get_json(store, "/company?facebook_profile=facebook.com/nobody").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Company not found");
}

#[tokio::test]
async fn test_lookup_malformed_profile() {
    let server = MockServer::start().await;
    let store = crawled_store(&server).await;

    let (status, body) = get_json(store, "/company?facebook_profile=not-a-profile").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["loc"][1], "facebook_profile");
}
