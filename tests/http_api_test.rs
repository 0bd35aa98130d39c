use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use httpmock::prelude::*;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;
use vacation_calendar::adapters::{BuiltinCountries, NagerDateSource};
use vacation_calendar::core::HolidaySource;
use vacation_calendar::http::{create_router, AppState};
use vacation_calendar::HolidayService;

fn router_for(server: &MockServer, with_builtin: bool) -> Router {
    let nager: Arc<dyn HolidaySource> = Arc::new(
        NagerDateSource::new("nager", &server.url("/api/v3"), Duration::from_secs(5), &[]).unwrap(),
    );
    let mut sources = vec![nager];
    if with_builtin {
        sources.push(Arc::new(BuiltinCountries::new("builtin")));
    }
    create_router(AppState::new(HolidayService::new(sources)))
}

async fn call(router: Router, uri: &str) -> (StatusCode, Option<String>, serde_json::Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let source = response
        .headers()
        .get("x-holiday-source")
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, source, serde_json::from_slice(&bytes).unwrap())
}

async fn mock_india_2025(server: &MockServer) -> httpmock::Mock<'_> {
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v3/publicholidays/2025/IN");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([
                    {"date": "2025-01-26", "localName": "Republic Day", "name": "Republic Day", "global": true, "types": ["Public"]},
                    {"date": "2025-08-15", "localName": "Independence Day", "name": "Independence Day", "global": true, "types": ["Public"]},
                    {"date": "2025-08-15", "localName": "Independence Day", "name": "Independence Day", "global": true, "types": ["Public"]}
                ]));
        })
        .await
}

#[tokio::test]
async fn test_month_endpoint_end_to_end() {
    let server = MockServer::start_async().await;
    let upstream = mock_india_2025(&server).await;

    let (status, source, body) = call(router_for(&server, true), "/api/holidays/IN/2025/8").await;

    upstream.assert_async().await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(source.as_deref(), Some("nager"));
    assert_eq!(body["year"], 2025);
    assert_eq!(body["month"], 8);
    assert_eq!(body["monthName"], "August");
    assert_eq!(body["totalHolidays"], 2);

    let weeks = body["weeks"].as_array().unwrap();
    let colored: Vec<_> = weeks.iter().filter(|w| w["weekColor"] != "normal").collect();
    assert_eq!(colored.len(), 1);
    assert_eq!(colored[0]["holidayCount"], 1);
    assert_eq!(colored[0]["weekColor"], "green");
    assert_eq!(colored[0]["startDate"], "2025-08-11");
}

#[tokio::test]
async fn test_quarter_endpoint_end_to_end() {
    let server = MockServer::start_async().await;
    mock_india_2025(&server).await;

    let (status, _, body) = call(router_for(&server, true), "/api/holidays/IN/2025/quarter/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["quarter"], 1);
    let months = body["months"].as_array().unwrap();
    assert_eq!(months.len(), 3);
    assert_eq!(months[0]["monthName"], "January");
    assert_eq!(months[0]["totalHolidays"], 1);
    assert_eq!(months[1]["totalHolidays"], 0);
    assert_eq!(months[2]["monthName"], "March");
}

#[tokio::test]
async fn test_out_of_range_quarter_is_empty_not_error() {
    let server = MockServer::start_async().await;
    mock_india_2025(&server).await;

    let (status, _, body) = call(router_for(&server, true), "/api/holidays/IN/2025/quarter/7").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["quarter"], 7);
    assert_eq!(body["months"], serde_json::json!([]));
}

#[tokio::test]
async fn test_upstream_failure_degrades_to_empty_calendar() {
    let server = MockServer::start_async().await;
    let upstream = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v3/publicholidays/2025/DE");
            then.status(503);
        })
        .await;

    let (status, source, body) = call(router_for(&server, true), "/api/holidays/DE/2025/2").await;

    upstream.assert_async().await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(source.as_deref(), Some("unavailable"));
    assert_eq!(body["totalHolidays"], 0);
    let weeks = body["weeks"].as_array().unwrap();
    assert_eq!(weeks.len(), 5);
    assert!(weeks.iter().all(|w| w["weekColor"] == "normal"));
}

#[tokio::test]
async fn test_invalid_path_parameters_are_400() {
    let server = MockServer::start_async().await;

    for uri in [
        "/api/holidays/IN/2025/0",
        "/api/holidays/IN/2025/august",
        "/api/holidays/IN/year/1",
        "/api/holidays/IN/2025/quarter/first",
        "/api/holidays/IN/2025/quarter",
    ] {
        let (status, _, body) = call(router_for(&server, true), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert!(body["error"].is_string(), "{}", uri);
    }
}

#[tokio::test]
async fn test_countries_from_upstream_sorted() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v3/availablecountries");
            then.status(200).json_body(serde_json::json!([
                {"countryCode": "NL", "name": "Netherlands"},
                {"countryCode": "AD", "name": "Andorra"}
            ]));
        })
        .await;

    let (status, _, body) = call(router_for(&server, true), "/api/holidays/countries").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        serde_json::json!([
            {"code": "AD", "name": "Andorra"},
            {"code": "NL", "name": "Netherlands"}
        ])
    );
}

#[tokio::test]
async fn test_countries_fall_back_to_builtin_list() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v3/availablecountries");
            then.status(500);
        })
        .await;

    let (status, _, body) = call(router_for(&server, true), "/api/holidays/countries").await;

    assert_eq!(status, StatusCode::OK);
    let countries = body.as_array().unwrap();
    assert_eq!(countries.len(), 7);
    assert_eq!(countries[0]["name"], "Australia");
}

#[tokio::test]
async fn test_countries_without_fallback_is_500() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v3/availablecountries");
            then.status(500);
        })
        .await;

    let (status, _, body) = call(router_for(&server, false), "/api/holidays/countries").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, serde_json::json!({"error": "Failed to fetch countries"}));
}
