use crate::common::{html_page, test_config, write_seeds};
use company_finder::input::load_seeds;
use company_finder::storage::{SqliteStore, Store};
use company_finder::url::normalize_target;
use company_finder::worker::crawl;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_page(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(html_page(body))
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_crawl_merges_home_and_contact_page() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/",
        r#"<p>Call (555) 123-4567</p>
           <a href="https://twitter.com/AcmeCo">Twitter</a>
           <a href="/contact">Contact us</a>"#,
    )
    .await;
    mount_page(
        &server,
        "/contact",
        r#"<p>(555) 123-4567 or (555) 999-9999</p>
           <a href="https://www.facebook.com/Acme-Inc">Facebook</a>"#,
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir, 1);
    write_seeds(Path::new(&config.seeds.csv_path), &[&server.uri()]);
    let targets = load_seeds(Path::new(&config.seeds.csv_path), "domain").unwrap();

    let store = Arc::new(SqliteStore::new(Path::new(&config.store.database_path)).unwrap());
    let report = crawl(&config, store.clone(), targets).await.unwrap();
    assert_eq!(report.processed, 1);

    let record = store.get(&server.uri()).unwrap().expect("document stored");
    assert_eq!(record.error, None);
    assert_eq!(record.phone_numbers, vec!["5551234567", "5559999999"]);
    assert!(record.social_links.twitter.contains("twitter.com/acmeco"));
    assert!(record.social_links.facebook.contains("facebook.com/acme-inc"));
    assert_eq!(record.contact_page, Some(format!("{}/contact", server.uri())));
}

#[tokio::test]
async fn test_contact_page_links_are_not_followed() {
    let server = MockServer::start().await;
    mount_page(&server, "/", r#"<a href="/contact">Contact</a>"#).await;
    mount_page(&server, "/contact", r#"<a href="/contact-more">More contacts</a>"#).await;

    Mock::given(method("GET"))
        .and(path("/contact-more"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html_page("(555) 000-0000")))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir, 1);
    let store = Arc::new(SqliteStore::new_in_memory().unwrap());
    let target = normalize_target(&server.uri()).unwrap();

    crawl(&config, store.clone(), vec![target]).await.unwrap();

    let record = store.get(&server.uri()).unwrap().unwrap();
    assert!(record.phone_numbers.is_empty());
    assert_eq!(record.contact_page, Some(format!("{}/contact", server.uri())));
}

#[tokio::test]
async fn test_second_strategy_recovers_from_first_failure() {
    let server = MockServer::start().await;

    // First request fails, every later one succeeds
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_page(&server, "/", "<p>(555) 123-4567</p>").await;

    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir, 1);
    let store = Arc::new(SqliteStore::new_in_memory().unwrap());

    crawl(&config, store.clone(), vec![normalize_target(&server.uri()).unwrap()])
        .await
        .unwrap();

    let record = store.get(&server.uri()).unwrap().unwrap();
    assert_eq!(record.error, None);
    assert_eq!(record.phone_numbers, vec!["5551234567"]);
}

#[tokio::test]
async fn test_all_strategies_failing_stores_error_document() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(2)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir, 1);
    let store = Arc::new(SqliteStore::new_in_memory().unwrap());

    crawl(&config, store.clone(), vec![normalize_target(&server.uri()).unwrap()])
        .await
        .unwrap();

    let record = store.get(&server.uri()).unwrap().unwrap();
    let error = record.error.expect("error recorded");
    assert!(error.contains(&server.uri()));
    assert!(error.contains("503"));
    assert!(record.phone_numbers.is_empty());
    assert!(record.social_links.is_empty());
}

#[tokio::test]
async fn test_slow_server_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(html_page("(555) 123-4567"))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir, 1);
    let store = Arc::new(SqliteStore::new_in_memory().unwrap());

    crawl(&config, store.clone(), vec![normalize_target(&server.uri()).unwrap()])
        .await
        .unwrap();

    assert!(store.get(&server.uri()).unwrap().unwrap().is_error());
}

#[tokio::test]
async fn test_unreachable_target_stores_error_document() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir, 1);
    let store = Arc::new(SqliteStore::new_in_memory().unwrap());

    // Nothing listens on port 1
    let target = normalize_target("127.0.0.1:1").unwrap();
    crawl(&config, store.clone(), vec![target]).await.unwrap();

    let record = store.get("http://127.0.0.1:1").unwrap().unwrap();
    assert!(record.is_error());
    assert!(record.phone_numbers.is_empty());
}

#[tokio::test]
async fn test_contact_page_failure_keeps_primary_result() {
    let server = MockServer::start().await;
    mount_page(&server, "/", r#"<p>(555) 123-4567</p><a href="/contact">Contact</a>"#).await;
    Mock::given(method("GET"))
        .and(path("/contact"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir, 1);
    let store = Arc::new(SqliteStore::new_in_memory().unwrap());

    crawl(&config, store.clone(), vec![normalize_target(&server.uri()).unwrap()])
        .await
        .unwrap();

    let record = store.get(&server.uri()).unwrap().unwrap();
    assert_eq!(record.error, None);
    assert_eq!(record.phone_numbers, vec!["5551234567"]);
    assert_eq!(record.contact_page, Some(format!("{}/contact", server.uri())));
}

#[tokio::test]
async fn test_dispatching_target_twice_yields_one_document() {
    let server = MockServer::start().await;
    mount_page(&server, "/", "<p>(555) 123-4567</p>").await;

    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir, 2);
    let store = Arc::new(SqliteStore::new_in_memory().unwrap());
    let target = normalize_target(&server.uri()).unwrap();

    let report = crawl(&config, store.clone(), vec![target.clone(), target])
        .await
        .unwrap();

    assert_eq!(report.processed, 2);
    assert_eq!(store.count().unwrap(), 1);
}

#[tokio::test]
async fn test_two_workers_write_independent_documents() {
    let first = MockServer::start().await;
    let second = MockServer::start().await;
    mount_page(&first, "/", "<p>(555) 111-1111</p>").await;
    mount_page(
        &second,
        "/",
        r#"<p>(555) 222-2222</p><a href="https://linkedin.com/company/globex">in</a>"#,
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir, 2);
    let store = Arc::new(SqliteStore::new_in_memory().unwrap());
    let targets = vec![
        normalize_target(&first.uri()).unwrap(),
        normalize_target(&second.uri()).unwrap(),
    ];

    crawl(&config, store.clone(), targets).await.unwrap();

    let a = store.get(&first.uri()).unwrap().unwrap();
    let b = store.get(&second.uri()).unwrap().unwrap();
    assert_eq!(a.phone_numbers, vec!["5551111111"]);
    assert!(a.social_links.is_empty());
    assert_eq!(b.phone_numbers, vec!["5552222222"]);
    assert!(b.social_links.linkedin.contains("linkedin.com/company"));
}

#[tokio::test]
async fn test_malformed_seed_row_does_not_block_other_targets() {
    let first = MockServer::start().await;
    let second = MockServer::start().await;
    mount_page(&first, "/", "<p>(555) 111-1111</p>").await;
    mount_page(&second, "/", "<p>(555) 222-2222</p>").await;

    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir, 2);
    let seeds_path = Path::new(&config.seeds.csv_path);
    let (first_uri, second_uri) = (first.uri(), second.uri());
    write_seeds(seeds_path, &[first_uri.as_str(), "bad domain.com", second_uri.as_str()]);
    let targets = load_seeds(seeds_path, &config.seeds.domain_column).unwrap();
    assert_eq!(targets.len(), 2);

    let store = Arc::new(SqliteStore::new_in_memory().unwrap());
    crawl(&config, store.clone(), targets).await.unwrap();

    assert_eq!(store.count().unwrap(), 2);
    assert_eq!(store.count_successful().unwrap(), 2);
}
