mod common;

use axum::http::StatusCode;
use common::{StubStatsProvider, country_day, country_summary};
use covid_tracker::domain::entities::GlobalSummary;

const API_ERROR_PREFIX: &str = "An error occurred while getting data from API ";

fn make_server(provider: StubStatsProvider) -> axum_test::TestServer {
    common::make_server(common::unreachable_pool(), provider)
}

// ─── HOME ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_home_renders_world_totals() {
    let server = make_server(StubStatsProvider::healthy());

    let response = server.get("/").await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("3400000"));
    assert!(body.contains("240000"));
    assert!(body.contains("1100000"));
}

#[tokio::test]
async fn test_home_outage_keeps_status_200() {
    let server = make_server(StubStatsProvider::outage());

    let response = server.get("/").await;

    response.assert_status_ok();
    assert!(response.text().starts_with(API_ERROR_PREFIX));
}

// ─── COUNTRY RESULT ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_country_result_one_row_per_day() {
    let server = make_server(StubStatsProvider::healthy());

    let response = server
        .get("/getCountryResult")
        .add_query_param("countryName", "egypt")
        .add_query_param("fromDate", "2020-04-01")
        .add_query_param("toDate", "2020-04-03")
        .await;

    response.assert_status_ok();
    let body = response.text();
    assert_eq!(body.matches("<td>Egypt</td>").count(), 3);
    for (cases, date) in [
        ("779", "2020-04-01T00:00:00Z"),
        ("865", "2020-04-02T00:00:00Z"),
        ("985", "2020-04-03T00:00:00Z"),
    ] {
        assert!(body.contains(&format!("<td>{cases}</td>")));
        assert!(body.contains(&format!("<td>{date}</td>")));
    }
}

#[tokio::test]
async fn test_country_result_empty_series() {
    let provider = StubStatsProvider {
        series: vec![],
        ..StubStatsProvider::healthy()
    };
    let server = make_server(provider);

    let response = server
        .get("/getCountryResult")
        .add_query_param("countryName", "atlantis")
        .add_query_param("fromDate", "2020-04-01")
        .add_query_param("toDate", "2020-04-03")
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("No data for this country"));
}

#[tokio::test]
async fn test_country_result_missing_fields_render_blank() {
    let mut day = country_day("Egypt", 1, "2020-04-01T00:00:00Z");
    day.cases = None;
    let provider = StubStatsProvider {
        series: vec![day],
        ..StubStatsProvider::healthy()
    };
    let server = make_server(provider);

    let response = server
        .get("/getCountryResult")
        .add_query_param("countryName", "egypt")
        .add_query_param("fromDate", "2020-04-01")
        .add_query_param("toDate", "2020-04-01")
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("<td></td>"));
}

#[tokio::test]
async fn test_country_result_outage_returns_400() {
    let server = make_server(StubStatsProvider::outage());

    let response = server
        .get("/getCountryResult")
        .add_query_param("countryName", "egypt")
        .add_query_param("fromDate", "2020-04-01")
        .add_query_param("toDate", "2020-04-03")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.text().starts_with(API_ERROR_PREFIX));
}

#[tokio::test]
async fn test_country_result_missing_query_is_rejected() {
    let server = make_server(StubStatsProvider::healthy());

    let response = server
        .get("/getCountryResult")
        .add_query_param("countryName", "egypt")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

// ─── ALL COUNTRIES ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_all_countries_one_row_per_country() {
    let provider = StubStatsProvider {
        summary: GlobalSummary {
            countries: vec![
                country_summary("Egypt", 100, 5, 80),
                country_summary("Jordan", 460, 9, 359),
                country_summary("Peru", 42534, 1200, 12434),
            ],
        },
        ..StubStatsProvider::healthy()
    };
    let server = make_server(provider);

    let response = server.get("/allCountries").await;

    response.assert_status_ok();
    let body = response.text();
    assert_eq!(body.matches("Add to my records").count(), 3);
    assert!(body.contains("Peru"));
    assert!(body.contains(r#"name="date" value="2020-05-01""#));
}

#[tokio::test]
async fn test_all_countries_outage_returns_400() {
    let server = make_server(StubStatsProvider::outage());

    let response = server.get("/allCountries").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.text().starts_with(API_ERROR_PREFIX));
}

// ─── ROUTER ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_trailing_slash_is_normalized() {
    let server = make_server(StubStatsProvider::healthy());

    let response = server.get("/allCountries/").await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_static_files_are_served() {
    let server = make_server(StubStatsProvider::healthy());

    let response = server.get("/css/style.css").await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let server = make_server(StubStatsProvider::healthy());

    let response = server.get("/does-not-exist").await;

    response.assert_status(StatusCode::NOT_FOUND);
}
