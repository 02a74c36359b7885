use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;
use crate::normalize::normalize_url;

const TEST_UA: &str = "dealscout-test/0.1";

fn test_fetcher() -> PageFetcher {
    PageFetcher::new(5, TEST_UA).expect("failed to build test PageFetcher")
}

#[tokio::test]
async fn fetch_html_returns_body_and_sends_user_agent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(header("user-agent", TEST_UA))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body>ok</body></html>"))
        .expect(1)
        .mount(&server)
        .await;

    let url = normalize_url(&format!("{}/search", server.uri())).unwrap();
    let body = test_fetcher().fetch_html(&url).await.unwrap();
    assert!(body.contains("ok"));
}

#[tokio::test]
async fn fetch_html_maps_404_to_http_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let url = normalize_url(&format!("{}/missing", server.uri())).unwrap();
    let err = test_fetcher().fetch_html(&url).await.unwrap_err();
    assert!(
        matches!(err, ScraperError::HttpStatus { status: 404, .. }),
        "expected HttpStatus(404), got: {err:?}"
    );
    assert!(err.to_string().starts_with("Failed to fetch URL: "));
}

#[tokio::test]
async fn fetch_html_maps_server_error_to_http_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let url = normalize_url(&server.uri()).unwrap();
    let err = test_fetcher().fetch_html(&url).await.unwrap_err();
    assert!(
        matches!(err, ScraperError::HttpStatus { status: 503, .. }),
        "expected HttpStatus(503), got: {err:?}"
    );
}

#[tokio::test]
async fn fetch_html_maps_connection_refused_to_fetch_failed() {
    // Bind then drop a server so its port is very likely closed.
    let uri = {
        let server = MockServer::start().await;
        server.uri()
    };

    let url = normalize_url(&uri).unwrap();
    let err = test_fetcher().fetch_html(&url).await.unwrap_err();
    assert!(
        matches!(err, ScraperError::FetchFailed { .. }),
        "expected FetchFailed, got: {err:?}"
    );
}

#[tokio::test]
async fn fetch_html_maps_malformed_host_to_fetch_failed() {
    let url = normalize_url("http://exa mple").unwrap();
    let err = test_fetcher().fetch_html(&url).await.unwrap_err();
    assert!(
        matches!(err, ScraperError::FetchFailed { .. }),
        "expected FetchFailed, got: {err:?}"
    );
}

#[tokio::test]
async fn fetch_html_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("late")
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let fetcher = PageFetcher::new(1, TEST_UA).unwrap();
    let url = normalize_url(&server.uri()).unwrap();
    let err = fetcher.fetch_html(&url).await.unwrap_err();
    assert!(
        matches!(err, ScraperError::FetchFailed { .. }),
        "expected FetchFailed on timeout, got: {err:?}"
    );
}
