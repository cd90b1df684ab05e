use crate::sheets::ServiceAccountKey;
use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::warn;

const DEFAULT_SPREADSHEET_ID: &str = "1C0-kWVHt_SvWIPfmCzKVOKr0pMFArixYNNhNw-vdCoE";
const DEFAULT_SHEETS_API_BASE: &str = "https://sheets.googleapis.com";
const DEFAULT_NAVER_CLIENT_ID: &str = "l9h74kh0v2";

/// Sheet keys in the order the map page lists them, with their A1 ranges.
const DEFAULT_SHEET_RANGES: &[(&str, &str)] = &[
    ("강남월세", "'[강남월세]'!A5:R"),
    ("강남전세", "'[강남전세]'!A5:R"),
    ("송파월세", "'[송파월세]'!A5:R"),
    ("송파전세", "'[송파전세]'!A5:R"),
];

/// Application configuration, built once in `main` and borrowed everywhere else.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub max_workers: usize,
    pub naver_client_id: String,
    pub sheets: SheetsConfig,
}

/// Everything the Sheets fetcher and the aggregator need to know.
#[derive(Debug, Clone)]
pub struct SheetsConfig {
    pub spreadsheet_id: String,
    pub api_base: String,
    pub timeout: Duration,
    pub credentials: Option<ServiceAccountKey>,
    pub ranges: Vec<SheetRange>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRange {
    pub key: String,
    pub range: String,
}

impl SheetsConfig {
    /// Resolve a sheet key to its A1 range. Unknown keys resolve to `None`.
    pub fn range_for(&self, sheet_key: &str) -> Option<&str> {
        self.ranges
            .iter()
            .find(|r| r.key == sheet_key)
            .map(|r| r.range.as_str())
    }

    pub fn sheet_keys(&self) -> impl Iterator<Item = &str> {
        self.ranges.iter().map(|r| r.key.as_str())
    }
}

pub fn default_sheet_ranges() -> Vec<SheetRange> {
    DEFAULT_SHEET_RANGES
        .iter()
        .map(|(key, range)| SheetRange {
            key: key.to_string(),
            range: range.to_string(),
        })
        .collect()
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port: u16 = lookup("PORT")
            .unwrap_or_else(|| "5000".to_string())
            .parse()
            .context("PORT must be a valid number")?;
        let addr: SocketAddr = format!("{host}:{port}")
            .parse()
            .with_context(|| format!("HOST/PORT do not form a socket address: {host}:{port}"))?;

        let max_workers: usize = lookup("MAX_WORKERS")
            .unwrap_or_else(|| "8".to_string())
            .parse()
            .context("MAX_WORKERS must be a valid number")?;
        if max_workers == 0 {
            anyhow::bail!("MAX_WORKERS must be at least 1");
        }

        let timeout_secs: u64 = lookup("SHEETS_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".to_string())
            .parse()
            .context("SHEETS_TIMEOUT_SECS must be a valid number")?;

        let credentials = match lookup("GOOGLE_CREDENTIALS").filter(|raw| !raw.trim().is_empty()) {
            Some(raw) => Some(
                ServiceAccountKey::from_json(&raw)
                    .context("GOOGLE_CREDENTIALS is not a valid service account key")?,
            ),
            None => {
                warn!("GOOGLE_CREDENTIALS not set; every sheet fetch will return no listings");
                None
            }
        };

        Ok(Self {
            addr,
            max_workers,
            naver_client_id: lookup("NAVER_CLIENT_ID")
                .unwrap_or_else(|| DEFAULT_NAVER_CLIENT_ID.to_string()),
            sheets: SheetsConfig {
                spreadsheet_id: lookup("SPREADSHEET_ID")
                    .unwrap_or_else(|| DEFAULT_SPREADSHEET_ID.to_string()),
                api_base: lookup("SHEETS_API_BASE")
                    .unwrap_or_else(|| DEFAULT_SHEETS_API_BASE.to_string()),
                timeout: Duration::from_secs(timeout_secs),
                credentials,
                ranges: default_sheet_ranges(),
            },
        })
    }
}
