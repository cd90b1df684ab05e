mod page_tests;
mod properties_tests;

use crate::errors::ServerError;
use crate::router::handle;
use crate::state::AppState;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;

pub fn request(method: Method, path: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = method;
    *req.uri_mut() = path.parse().unwrap();
    req
}

pub fn get(state: &AppState, path: &str) -> Result<Response, ServerError> {
    handle(request(Method::GET, path), state)
}

pub fn body_string(resp: &mut Response) -> String {
    let mut body = String::new();
    resp.body_mut().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn content_type(resp: &Response) -> &str {
    resp.headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}
