//! Integration tests for `ReverseGeocoder` using wiremock HTTP mocks.

use lunchr_geo::{GeoLookupError, PlaceLabel, ReverseGeocoder};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_geocoder(base_url: &str) -> ReverseGeocoder {
    ReverseGeocoder::new(base_url, 10, "lunchr-test/0.1")
        .expect("geocoder construction should not fail")
}

#[tokio::test]
async fn lookup_extracts_city_and_state() {
    let server = MockServer::start().await;
    let body = serde_json::json!({
        "address": {
            "city": "渋谷区",
            "state": "東京都",
            "country": "日本"
        }
    });
    Mock::given(method("GET"))
        .and(path("/reverse"))
        .and(query_param("format", "json"))
        .and(query_param("accept-language", "ja"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let geocoder = test_geocoder(&server.uri());
    let label = geocoder.lookup(35.6595, 139.7005).await.expect("lookup");
    assert_eq!(label.city, "渋谷区");
    assert_eq!(label.region, "東京都");
}

#[tokio::test]
async fn lookup_without_address_returns_generic_label() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reverse"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let geocoder = test_geocoder(&server.uri());
    let label = geocoder.lookup(0.0, 0.0).await.expect("lookup");
    assert_eq!(label, PlaceLabel::generic());
}

#[tokio::test]
async fn lookup_http_error_is_typed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reverse"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let geocoder = test_geocoder(&server.uri());
    let err = geocoder.lookup(35.0, 139.0).await.unwrap_err();
    assert!(
        matches!(err, GeoLookupError::Http { status: 503, .. }),
        "expected Http(503), got: {err:?}"
    );
}
