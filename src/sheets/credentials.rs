use crate::sheets::SheetsError;
use serde::Deserialize;
use std::fmt;

const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// The subset of a Google service-account JSON key needed to mint
/// read-only access tokens.
#[derive(Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    #[serde(default)]
    pub private_key_id: Option<String>,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

impl ServiceAccountKey {
    pub fn from_json(raw: &str) -> Result<Self, SheetsError> {
        let key: ServiceAccountKey =
            serde_json::from_str(raw).map_err(|e| SheetsError::Credentials(e.to_string()))?;

        if key.client_email.trim().is_empty() {
            return Err(SheetsError::Credentials("client_email is empty".into()));
        }
        if !key.private_key.contains("PRIVATE KEY") {
            return Err(SheetsError::Credentials(
                "private_key is not a PEM encoded key".into(),
            ));
        }

        Ok(key)
    }
}

// The private key must never end up in logs.
impl fmt::Debug for ServiceAccountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceAccountKey")
            .field("client_email", &self.client_email)
            .field("private_key_id", &self.private_key_id)
            .field("private_key", &"<redacted>")
            .field("token_uri", &self.token_uri)
            .finish()
    }
}
