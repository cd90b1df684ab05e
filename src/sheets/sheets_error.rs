use thiserror::Error;

#[derive(Debug, Error)]
pub enum SheetsError {
    #[error("no service account credentials configured")]
    MissingCredentials,
    #[error("invalid service account key: {0}")]
    Credentials(String),
    #[error("failed to sign token assertion: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("{endpoint} returned HTTP {status}: {body}")]
    Api {
        endpoint: &'static str,
        status: u16,
        body: String,
    },
    #[error("unexpected response shape: {0}")]
    UnexpectedShape(String),
}
