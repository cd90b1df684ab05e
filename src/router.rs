use crate::domain::get_property_data;
use crate::errors::ServerError;
use crate::responses::{
    error_response, html_response, javascript_response, json_response, ResultResp,
};
use crate::state::AppState;
use crate::templates;
use astra::{Request, Response};
use serde_json::json;
use tracing::{debug, error};

const PROPERTIES_PREFIX: &str = "/api/properties/";
const MAP_SCRIPT_PATH: &str = "/static/js/map.js";
const MAP_SCRIPT: &str = include_str!("../static/js/map.js");

/// Route a request and render any error, as JSON under `/api/` and as an
/// HTML page elsewhere.
pub fn respond(req: Request, state: &AppState) -> Response {
    let api = is_api_path(req.uri().path());

    match handle(req, state) {
        Ok(resp) => resp,
        Err(err) if err.status() >= 500 => {
            error!(error = %err, "request failed");
            error_response(&err, api)
        }
        Err(err) => {
            debug!(error = %err, "request rejected");
            error_response(&err, api)
        }
    }
}

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    debug!(method, path, "request");

    match (method, path) {
        ("GET", "/") => html_response(templates::map_page(
            &state.config.naver_client_id,
            state.config.sheets.sheet_keys(),
        )),
        ("GET", "/health") => health(),
        ("GET", MAP_SCRIPT_PATH) => javascript_response(MAP_SCRIPT),
        ("GET", p) if p.starts_with(PROPERTIES_PREFIX) => properties(p, state),

        (_, "/" | "/health" | MAP_SCRIPT_PATH) => Err(ServerError::MethodNotAllowed),
        (_, p) if p.starts_with(PROPERTIES_PREFIX) => Err(ServerError::MethodNotAllowed),
        _ => Err(ServerError::NotFound),
    }
}

/// Errors on these paths are rendered as JSON rather than HTML.
pub fn is_api_path(path: &str) -> bool {
    path.starts_with("/api/")
}

fn properties(path: &str, state: &AppState) -> ResultResp {
    let sheet_key = sheet_key_from_path(path)?;
    let properties = get_property_data(state.fetcher.as_ref(), &state.config.sheets, &sheet_key);

    json_response(200, &properties)
}

fn sheet_key_from_path(path: &str) -> Result<String, ServerError> {
    let segment = path
        .strip_prefix(PROPERTIES_PREFIX)
        .filter(|s| !s.is_empty() && !s.contains('/'))
        .ok_or(ServerError::NotFound)?;

    urlencoding::decode(segment)
        .map(|s| s.into_owned())
        .map_err(|_| ServerError::BadRequest("sheet name is not valid UTF-8".into()))
}

fn health() -> ResultResp {
    json_response(
        200,
        &json!({
            "status": "healthy",
            "timestamp": chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            "uptime": "running",
            "version": env!("CARGO_PKG_VERSION"),
        }),
    )
}
