// src/domain/aggregator.rs

use crate::config::SheetsConfig;
use crate::domain::normalizer::{ID_CELL, LOCATION_CELL};
use crate::domain::{classify, normalize, ListingRecord, ListingStatus, RowOutcome, SkipReason};
use crate::sheets::SheetFetcher;
use tracing::{debug, error, info, warn};

#[derive(Debug, Default)]
struct StatusCounts {
    private_sale: usize,
    normal: usize,
}

impl StatusCounts {
    fn record(&mut self, status: ListingStatus) {
        match status {
            ListingStatus::PrivateSale => self.private_sale += 1,
            ListingStatus::Normal => self.normal += 1,
        }
    }
}

/// Fetch one sheet and turn its rows into listing records, in sheet order.
///
/// Never fails: an unknown sheet key or any fetch error yields an empty list,
/// and malformed rows are dropped individually.
pub fn get_property_data<F>(fetcher: &F, config: &SheetsConfig, sheet_key: &str) -> Vec<ListingRecord>
where
    F: SheetFetcher + ?Sized,
{
    let Some(range) = config.range_for(sheet_key) else {
        error!(sheet = sheet_key, "invalid sheet type");
        return Vec::new();
    };

    debug!(sheet = sheet_key, range, "fetching property data");

    let rows = match fetcher.fetch_rows(range) {
        Ok(rows) => rows,
        Err(e) => {
            error!(sheet = sheet_key, range, error = %e, "failed to fetch property data");
            return Vec::new();
        }
    };

    if rows.is_empty() {
        return Vec::new();
    }

    info!(sheet = sheet_key, rows = rows.len(), "processing sheet rows");

    let mut properties = Vec::with_capacity(rows.len());
    let mut counts = StatusCounts::default();

    for (index, row) in rows.iter().enumerate() {
        let normalized = match normalize(row) {
            RowOutcome::Row(normalized) => normalized,
            RowOutcome::Skip(reason @ SkipReason::UnexpectedCell { .. }) => {
                warn!(
                    sheet = sheet_key,
                    row = index,
                    id = ?row.get(ID_CELL),
                    location = ?row.get(LOCATION_CELL),
                    reason = %reason,
                    "error processing row"
                );
                continue;
            }
            RowOutcome::Skip(reason) => {
                debug!(sheet = sheet_key, row = index, reason = %reason, "skipping row");
                continue;
            }
        };

        let status = classify(&normalized.status_text, sheet_key);
        counts.record(status);
        properties.push(normalized.into_record(status));
    }

    info!(
        sheet = sheet_key,
        total = properties.len(),
        private_sale = counts.private_sale,
        normal = counts.normal,
        "processing summary"
    );

    properties
}
