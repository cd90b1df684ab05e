// src/tests/router_tests/page_tests.rs

use super::{body_string, content_type, get, request};
use crate::errors::ServerError;
use crate::responses::error_response;
use crate::router::{handle, respond};
use crate::tests::utils::{test_state, FakeFetcher};
use http::Method;
use serde_json::Value;

#[test]
fn health_reports_fixed_payload() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state(FakeFetcher::failing());

    let mut resp = get(&state, "/health")?;
    assert_eq!(resp.status(), 200);

    let body: Value = serde_json::from_str(&body_string(&mut resp))?;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["uptime"], "running");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));

    let timestamp = body["timestamp"].as_str().unwrap_or_default();
    assert!(chrono::NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M:%S").is_ok());
    Ok(())
}

#[test]
fn map_page_lists_configured_sheets() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state(FakeFetcher::with_rows(Vec::new()));

    let mut resp = get(&state, "/")?;
    assert_eq!(resp.status(), 200);
    assert!(content_type(&resp).starts_with("text/html"));

    let body = body_string(&mut resp);
    for sheet in ["강남월세", "강남전세", "송파월세", "송파전세"] {
        assert!(body.contains(&format!("value=\"{sheet}\"")), "missing {sheet}");
    }
    for id in ["map", "propertyList", "searchInput", "filterButton", "monthlyRentEnd"] {
        assert!(body.contains(&format!("id=\"{id}\"")), "missing #{id}");
    }
    assert!(body.contains("ncpClientId=l9h74kh0v2"));
    assert!(body.contains("/static/js/map.js"));
    Ok(())
}

#[test]
fn map_script_is_served() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state(FakeFetcher::with_rows(Vec::new()));

    let mut resp = get(&state, "/static/js/map.js")?;

    assert_eq!(resp.status(), 200);
    assert!(content_type(&resp).starts_with("application/javascript"));
    assert!(body_string(&mut resp).contains("/api/properties/"));
    Ok(())
}

#[test]
fn unknown_route_is_not_found() {
    let state = test_state(FakeFetcher::with_rows(Vec::new()));

    assert!(matches!(get(&state, "/admin"), Err(ServerError::NotFound)));
    assert!(matches!(
        handle(request(Method::DELETE, "/health"), &state),
        Err(ServerError::MethodNotAllowed)
    ));
}

#[test]
fn page_errors_render_as_html() {
    let mut resp = error_response(&ServerError::NotFound, false);

    assert_eq!(resp.status(), 404);
    assert!(content_type(&resp).starts_with("text/html"));
    assert!(body_string(&mut resp).contains("Error 404"));
}

#[test]
fn rejected_api_requests_answer_with_json() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state(FakeFetcher::with_rows(Vec::new()));

    let mut resp = respond(request(Method::GET, "/api/unknown"), &state);
    assert_eq!(resp.status(), 404);
    assert!(content_type(&resp).starts_with("application/json"));
    let body: Value = serde_json::from_str(&body_string(&mut resp))?;
    assert_eq!(body["error"], "Not Found");

    let resp = respond(request(Method::POST, "/api/properties/x"), &state);
    assert_eq!(resp.status(), 405);
    assert!(content_type(&resp).starts_with("application/json"));
    Ok(())
}

#[test]
fn rejected_page_requests_answer_with_html() {
    let state = test_state(FakeFetcher::with_rows(Vec::new()));

    let mut resp = respond(request(Method::GET, "/missing"), &state);

    assert_eq!(resp.status(), 404);
    assert!(content_type(&resp).starts_with("text/html"));
    assert!(body_string(&mut resp).contains("Error 404"));
}

#[test]
fn successful_requests_pass_through() {
    let state = test_state(FakeFetcher::with_rows(Vec::new()));

    let resp = respond(request(Method::GET, "/health"), &state);

    assert_eq!(resp.status(), 200);
}
