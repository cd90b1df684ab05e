use serde::Deserialize;
use serde_json::Value;

/// One spreadsheet row as returned by the values endpoint. Cells are usually
/// strings, but nothing in the wire format guarantees it.
pub type RawRow = Vec<Value>;

// ValueRange
//  ├── range           "'[강남월세]'!A5:R1000"
//  ├── majorDimension  "ROWS"
//  └── values          [[cell, ...], ...]   (absent when the range is empty)

#[derive(Debug, Deserialize)]
pub struct ValueRange {
    pub range: Option<String>,
    #[serde(default)]
    pub values: Vec<RawRow>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: Option<i64>,
}
