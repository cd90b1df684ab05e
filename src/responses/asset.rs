use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

/// Serve a script compiled into the binary.
pub fn javascript_response(source: &'static str) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", "application/javascript; charset=utf-8")
        .header("Cache-Control", "public, max-age=300")
        .body(Body::from(source.to_string()))
        .map_err(|_| ServerError::InternalError)
}
