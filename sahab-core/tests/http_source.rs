//! Integration tests for the HTTP weather source.
//!
//! Covers transport status handling, payload decoding, and the
//! application-level status flag, against a local mock server.

use sahab_core::source::{FetchError, HttpWeatherSource, WeatherSource};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn result_body() -> serde_json::Value {
    json!({
        "city": "Dubai",
        "dateTime": "1699999999",
        "weather_icon": "https://cdn.example.com/icons/partly-cloudy.png",
        "temp": 28.6,
        "unit": "°C",
        "weather": "partly cloudy",
        "feels_like": "31°",
        "high": 30.2,
        "low": 21.8,
        "humi": "58%",
        "wind_direction": "NW",
        "wind_speed": 11.5,
        "wind_speed_unit": "km/h"
    })
}

fn weather_body() -> serde_json::Value {
    json!({
        "Response": {
            "status": true,
            "message": "success",
            "result": result_body()
        }
    })
}

async fn mock_weather_endpoint(template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather.json"))
        .respond_with(template)
        .mount(&server)
        .await;
    server
}

fn source_for(server: &MockServer) -> HttpWeatherSource {
    HttpWeatherSource::with_endpoint(format!("{}/weather.json", server.uri()))
}

#[tokio::test]
async fn successful_fetch_maps_the_payload() {
    let server = mock_weather_endpoint(ResponseTemplate::new(200).set_body_json(weather_body())).await;

    let report = source_for(&server).current().await.expect("fetch should succeed");

    assert_eq!(report.city, "Dubai");
    assert_eq!(report.date_time, "1699999999");
    assert_eq!(report.icon_url, "https://cdn.example.com/icons/partly-cloudy.png");
    assert_eq!(report.humidity, "58%");
    assert_eq!(report.formatted_temp(), "28°C");
    assert_eq!(report.formatted_wind_speed(), "11.5 km/h");
}

#[tokio::test]
async fn api_status_false_surfaces_the_server_message() {
    let body = json!({
        "Response": {
            "status": false,
            "message": "No data",
            "result": result_body()
        }
    });
    let server = mock_weather_endpoint(ResponseTemplate::new(200).set_body_json(body)).await;

    let err = source_for(&server).current().await.unwrap_err();

    match err {
        FetchError::Api(message) => assert_eq!(message, "No data"),
        other => panic!("expected Api, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_decoding_error() {
    let server =
        mock_weather_endpoint(ResponseTemplate::new(200).set_body_string("not json")).await;

    let err = source_for(&server).current().await.unwrap_err();
    assert!(matches!(err, FetchError::Decoding(_)), "got {err:?}");
}

#[tokio::test]
async fn wrong_shape_is_a_decoding_error() {
    // Valid JSON, but the envelope is incomplete.
    let body = json!({ "Response": { "status": true } });
    let server = mock_weather_endpoint(ResponseTemplate::new(200).set_body_json(body)).await;

    let err = source_for(&server).current().await.unwrap_err();
    assert!(matches!(err, FetchError::Decoding(_)), "got {err:?}");
}

#[tokio::test]
async fn non_200_status_is_invalid_response_regardless_of_body() {
    // A perfectly decodable body does not rescue a 500.
    let server = mock_weather_endpoint(ResponseTemplate::new(500).set_body_json(weather_body())).await;

    let err = source_for(&server).current().await.unwrap_err();
    assert!(matches!(err, FetchError::InvalidResponse), "got {err:?}");
}

#[tokio::test]
async fn unparseable_endpoint_fails_without_a_request() {
    let err = HttpWeatherSource::with_endpoint("not a url")
        .current()
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::InvalidUrl), "got {err:?}");
}

#[tokio::test]
async fn transport_fault_is_unknown_with_a_detail() {
    // Grab a port wiremock owned, then shut the server down so the
    // connection is refused.
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let err = HttpWeatherSource::with_endpoint(format!("{uri}/weather.json"))
        .current()
        .await
        .unwrap_err();

    match err {
        FetchError::Unknown(detail) => assert!(!detail.is_empty()),
        other => panic!("expected Unknown, got {other:?}"),
    }
}
