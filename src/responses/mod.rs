pub mod asset;
pub mod errors;
pub mod html;
pub mod json;

pub use crate::errors::ResultResp;
pub use asset::javascript_response;
pub use errors::error_response;
pub use html::html_response;
pub use json::json_response;
