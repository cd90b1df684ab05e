mod client;
mod credentials;
mod models;
mod sheets_error;

pub use client::SheetsClient;
pub use credentials::ServiceAccountKey;
pub use models::{RawRow, ValueRange};
pub use sheets_error::SheetsError;

/// Source of raw spreadsheet rows for an A1 range.
pub trait SheetFetcher: Send + Sync {
    fn fetch_rows(&self, range: &str) -> Result<Vec<RawRow>, SheetsError>;
}
