use crate::errors::ServerError;
use astra::{Body, Response, ResponseBuilder};
use maud::{html, DOCTYPE};
use serde_json::json;

/// Convert a ServerError into a response. API callers get a JSON error
/// object, everything else an HTML page.
pub fn error_response(err: &ServerError, api: bool) -> Response {
    let status = err.status();
    let message = err.to_string();

    if api {
        render_json_error(status, &message)
    } else {
        render_html_error(status, &message)
    }
}

fn render_json_error(status: u16, message: &str) -> Response {
    let body = json!({ "error": message }).to_string();

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "application/json; charset=utf-8")
        .body(Body::from(body))
        .unwrap_or_else(|_| Response::new(Body::from("{\"error\":\"Internal Server Error\"}")))
}

/// Build a basic HTML error page
fn render_html_error(status: u16, message: &str) -> Response {
    let page = html! {
        (DOCTYPE)
        html lang="ko" {
            head {
                meta charset="utf-8";
                title { "Error " (status) }
                style { "body { font-family: system-ui, sans-serif; max-width: 720px; margin: 4rem auto; padding: 1rem; } p { color: #444; }" }
            }
            body {
                h1 { "Error " (status) }
                p { (message) }
                p { a href="/" { "← 지도로 돌아가기" } }
            }
        }
    };

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(page.into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
