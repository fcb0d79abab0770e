//! Integration tests for `RouletteClient` using wiremock HTTP mocks.

use lunchr_api::{LocationMode, RouletteClient, RouletteError, SearchCriteria};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> RouletteClient {
    RouletteClient::new(base_url, 30, "lunchr-test/0.1")
        .expect("client construction should not fail")
}

fn current_mode_criteria() -> SearchCriteria {
    SearchCriteria {
        location_mode: LocationMode::Current,
        latitude: None,
        longitude: None,
        max_walking_time_min: Some(10),
        middle_area_code: None,
        budget_code: None,
        genre_code: None,
        lunch: 1,
    }
}

#[tokio::test]
async fn spin_returns_restaurant_and_distance() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "success": true,
        "restaurant": {
            "name": "Foo",
            "genre": "Bar",
            "address": "X",
            "budget_display": "¥1000",
            "map_url": "m",
            "hotpepper_url": "h"
        },
        "distance": {
            "time_display": "徒歩約8分",
            "distance_display": "500m"
        }
    });

    Mock::given(method("POST"))
        .and(path("/roulette"))
        .and(body_json(serde_json::json!({
            "location_mode": "current",
            "max_walking_time_min": 10,
            "lunch": 1
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let hit = client
        .spin(&current_mode_criteria())
        .await
        .expect("should parse hit");

    assert_eq!(hit.restaurant.name, "Foo");
    assert_eq!(hit.restaurant.genre, "Bar");
    assert_eq!(hit.restaurant.address, "X");
    assert_eq!(hit.restaurant.budget_display, "¥1000");
    assert_eq!(hit.restaurant.map_url, "m");
    assert_eq!(hit.restaurant.hotpepper_url, "h");
    let distance = hit.distance.expect("distance present in current mode");
    assert_eq!(distance.time_display, "徒歩約8分");
    assert_eq!(distance.distance_display, "500m");
}

#[tokio::test]
async fn spin_http_500_is_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/roulette"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.spin(&current_mode_criteria()).await.unwrap_err();
    assert!(
        matches!(err, RouletteError::Http { status: 500, .. }),
        "expected Http(500), got: {err:?}"
    );
}

#[tokio::test]
async fn spin_http_429_is_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/roulette"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.spin(&current_mode_criteria()).await.unwrap_err();
    assert!(
        matches!(err, RouletteError::Http { status: 429, .. }),
        "expected Http(429), got: {err:?}"
    );
}

#[tokio::test]
async fn spin_transport_failure_is_network_error() {
    // Nothing listens on this address; the connect fails before any HTTP.
    let client = test_client("http://127.0.0.1:1");
    let err = client.spin(&current_mode_criteria()).await.unwrap_err();
    assert!(
        matches!(err, RouletteError::Network(_)),
        "expected Network, got: {err:?}"
    );
}

#[tokio::test]
async fn spin_logical_failure_carries_message_and_suggestion() {
    let server = MockServer::start().await;
    let body = serde_json::json!({
        "success": false,
        "error": true,
        "message": "条件に合うレストランが見つかりませんでした",
        "suggestion": "条件を変えてもう一度お試しください"
    });
    Mock::given(method("POST"))
        .and(path("/roulette"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.spin(&current_mode_criteria()).await.unwrap_err();
    match err {
        RouletteError::Api {
            message,
            suggestion,
        } => {
            assert_eq!(
                message.as_deref(),
                Some("条件に合うレストランが見つかりませんでした")
            );
            assert_eq!(
                suggestion.as_deref(),
                Some("条件を変えてもう一度お試しください")
            );
        }
        other => panic!("expected Api, got: {other:?}"),
    }
}

#[tokio::test]
async fn spin_success_without_restaurant_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/roulette"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": true })),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.spin(&current_mode_criteria()).await.unwrap_err();
    assert!(
        matches!(err, RouletteError::MissingRestaurant { .. }),
        "expected MissingRestaurant, got: {err:?}"
    );
}

#[tokio::test]
async fn spin_invalid_json_is_deserialize_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/roulette"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.spin(&current_mode_criteria()).await.unwrap_err();
    assert!(
        matches!(err, RouletteError::Deserialize { .. }),
        "expected Deserialize, got: {err:?}"
    );
}

#[tokio::test]
async fn fetch_genres_returns_entries() {
    let server = MockServer::start().await;
    let body = serde_json::json!({
        "success": true,
        "genres": [
            { "code": "", "name": "指定なし" },
            { "code": "G001", "name": "和食" },
            { "code": "G006", "name": "イタリアン・フレンチ" }
        ]
    });
    Mock::given(method("GET"))
        .and(path("/api/genres"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let genres = client.fetch_genres().await.expect("should parse genres");
    assert_eq!(genres.len(), 3);
    assert_eq!(genres[1].code, "G001");
    assert_eq!(genres[1].name, "和食");
}

#[tokio::test]
async fn fetch_areas_failure_flag_is_api_error() {
    let server = MockServer::start().await;
    let body = serde_json::json!({ "success": false, "message": "master data unavailable" });
    Mock::given(method("GET"))
        .and(path("/api/areas"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch_areas().await.unwrap_err();
    assert!(
        matches!(err, RouletteError::Api { .. }),
        "expected Api, got: {err:?}"
    );
}
