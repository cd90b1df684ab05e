use crate::config::AppConfig;
use crate::sheets::SheetFetcher;

/// Read-only state shared by every worker thread.
pub struct AppState {
    pub config: AppConfig,
    pub fetcher: Box<dyn SheetFetcher>,
}

impl AppState {
    pub fn new(config: AppConfig, fetcher: Box<dyn SheetFetcher>) -> Self {
        Self { config, fetcher }
    }
}
