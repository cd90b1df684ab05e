// client.rs
use crate::config::SheetsConfig;
use crate::sheets::models::TokenResponse;
use crate::sheets::{RawRow, ServiceAccountKey, SheetFetcher, SheetsError, ValueRange};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use reqwest::blocking::Client;
use serde::Serialize;
use std::time::Instant;
use tracing::debug;

const USER_AGENT: &str = concat!("listing_map/", env!("CARGO_PKG_VERSION"));
const READONLY_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets.readonly";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: i64 = 3600;

/// Read-only Google Sheets v4 client authenticated as a service account.
pub struct SheetsClient {
    client: Client,
    config: SheetsConfig,
}

#[derive(Debug, Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

impl SheetsClient {
    pub fn new(config: &SheetsConfig) -> Result<Self, SheetsError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Exchange a signed JWT assertion for a short-lived access token.
    fn access_token(&self, key: &ServiceAccountKey) -> Result<String, SheetsError> {
        let assertion = sign_assertion(key, chrono::Utc::now().timestamp())?;

        let resp = self
            .client
            .post(&key.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()?;

        let status = resp.status();
        let text = resp.text()?;

        if !status.is_success() {
            return Err(SheetsError::Api {
                endpoint: "token endpoint",
                status: status.as_u16(),
                body: text,
            });
        }

        let token: TokenResponse = serde_json::from_str(&text)
            .map_err(|e| SheetsError::UnexpectedShape(format!("token response: {e}")))?;

        debug!(expires_in = ?token.expires_in, "obtained Sheets access token");
        Ok(token.access_token)
    }

    pub fn values_url(&self, range: &str) -> String {
        values_url(&self.config.api_base, &self.config.spreadsheet_id, range)
    }
}

impl SheetFetcher for SheetsClient {
    fn fetch_rows(&self, range: &str) -> Result<Vec<RawRow>, SheetsError> {
        let key = self
            .config
            .credentials
            .as_ref()
            .ok_or(SheetsError::MissingCredentials)?;

        let start = Instant::now();
        let token = self.access_token(key)?;

        debug!(range, "fetching sheet values");

        let resp = self
            .client
            .get(self.values_url(range))
            .bearer_auth(token)
            .query(&[
                ("majorDimension", "ROWS"),
                ("valueRenderOption", "FORMATTED_VALUE"),
            ])
            .send()?;

        let status = resp.status();
        let text = resp.text()?;

        if !status.is_success() {
            return Err(SheetsError::Api {
                endpoint: "values endpoint",
                status: status.as_u16(),
                body: text,
            });
        }

        let value_range: ValueRange = serde_json::from_str(&text)
            .map_err(|e| SheetsError::UnexpectedShape(format!("value range: {e}")))?;

        debug!(
            range,
            resolved = ?value_range.range,
            rows = value_range.values.len(),
            elapsed = ?start.elapsed(),
            "fetched sheet values"
        );

        Ok(value_range.values)
    }
}

fn sign_assertion(key: &ServiceAccountKey, now: i64) -> Result<String, SheetsError> {
    let claims = AssertionClaims {
        iss: &key.client_email,
        scope: READONLY_SCOPE,
        aud: &key.token_uri,
        iat: now,
        exp: now + ASSERTION_LIFETIME_SECS,
    };

    let mut header = Header::new(Algorithm::RS256);
    header.kid = key.private_key_id.clone();

    let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())?;
    Ok(encode(&header, &claims, &encoding_key)?)
}

/// Both the spreadsheet id and the A1 range are encoded as single path
/// segments; ranges contain quotes, brackets and `!`.
fn values_url(api_base: &str, spreadsheet_id: &str, range: &str) -> String {
    format!(
        "{}/v4/spreadsheets/{}/values/{}",
        api_base.trim_end_matches('/'),
        urlencoding::encode(spreadsheet_id),
        urlencoding::encode(range),
    )
}
