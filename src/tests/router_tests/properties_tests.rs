// src/tests/router_tests/properties_tests.rs

use super::{body_string, content_type, get, request};
use crate::errors::ServerError;
use crate::responses::error_response;
use crate::router::handle;
use crate::tests::utils::{listing_row, test_state, FakeFetcher};
use http::Method;
use serde_json::{json, Value};

fn properties_path(sheet: &str) -> String {
    format!("/api/properties/{}", urlencoding::encode(sheet))
}

#[test]
fn returns_listings_as_json_array() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state(FakeFetcher::with_rows(vec![
        listing_row("A100", "Seoul-Gangnam", "갠매 있음"),
        listing_row("A101", "Seoul-Yeoksam", ""),
    ]));

    let mut resp = get(&state, &properties_path("강남월세"))?;

    assert_eq!(resp.status(), 200);
    assert!(content_type(&resp).starts_with("application/json"));

    let body: Value = serde_json::from_str(&body_string(&mut resp))?;
    assert_eq!(
        body,
        json!([
            {
                "id": "A100",
                "reg_date": "2024-01-01",
                "hyperlink": "https://new.land.naver.com/houses?articleNo=A100",
                "location": "Seoul-Gangnam",
                "status": "갠매",
                "deposit": "1억 5,000",
                "monthly_rent": "120",
            },
            {
                "id": "A101",
                "reg_date": "2024-01-01",
                "hyperlink": "https://new.land.naver.com/houses?articleNo=A101",
                "location": "Seoul-Yeoksam",
                "status": "일반",
                "deposit": "1억 5,000",
                "monthly_rent": "120",
            },
        ])
    );

    Ok(())
}

#[test]
fn unknown_sheet_returns_empty_array() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state(FakeFetcher::with_rows(vec![listing_row("A1", "Seoul", "")]));

    let mut resp = get(&state, &properties_path("마포월세"))?;

    assert_eq!(resp.status(), 200);
    assert_eq!(body_string(&mut resp), "[]");
    Ok(())
}

#[test]
fn upstream_failure_returns_empty_array() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state(FakeFetcher::failing());

    let mut resp = get(&state, &properties_path("강남전세"))?;

    assert_eq!(resp.status(), 200);
    assert_eq!(body_string(&mut resp), "[]");
    Ok(())
}

#[test]
fn missing_or_nested_sheet_segment_is_not_found() {
    let state = test_state(FakeFetcher::with_rows(Vec::new()));

    assert!(matches!(get(&state, "/api/properties/"), Err(ServerError::NotFound)));
    assert!(matches!(
        get(&state, "/api/properties/a/b"),
        Err(ServerError::NotFound)
    ));
}

#[test]
fn invalid_utf8_sheet_is_bad_request() {
    let state = test_state(FakeFetcher::with_rows(Vec::new()));

    assert!(matches!(
        get(&state, "/api/properties/%FF%FE"),
        Err(ServerError::BadRequest(_))
    ));
}

#[test]
fn non_get_is_rejected() {
    let state = test_state(FakeFetcher::with_rows(Vec::new()));

    let result = handle(request(Method::POST, &properties_path("강남월세")), &state);

    assert!(matches!(result, Err(ServerError::MethodNotAllowed)));
}

#[test]
fn api_errors_render_as_json() -> Result<(), Box<dyn std::error::Error>> {
    let mut resp = error_response(&ServerError::InternalError, true);

    assert_eq!(resp.status(), 500);
    assert!(content_type(&resp).starts_with("application/json"));

    let body: Value = serde_json::from_str(&body_string(&mut resp))?;
    assert_eq!(body, json!({ "error": "Internal Server Error" }));
    Ok(())
}
