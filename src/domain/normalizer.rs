// src/domain/normalizer.rs

use crate::domain::{detail_link, ListingRecord, ListingStatus};
use serde_json::Value;
use std::fmt;

/// Rows shorter than this cannot carry a status marker (column Q).
pub const MIN_ROW_CELLS: usize = 17;

pub const ID_CELL: usize = 0;
const REG_DATE_CELL: usize = 1;
const DEPOSIT_CELL: usize = 9;
const MONTHLY_RENT_CELL: usize = 10;
pub const LOCATION_CELL: usize = 15;
const STATUS_CELL: usize = 16;

/// A sheet row with its meaningful cells extracted and trimmed, waiting for
/// a status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRow {
    pub id: String,
    pub registration_date: String,
    pub location: String,
    pub status_text: String,
    pub deposit: String,
    pub monthly_rent: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    TooShort { cells: usize },
    MissingId,
    MissingLocation,
    UnexpectedCell { index: usize, found: &'static str },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::TooShort { cells } => {
                write!(f, "row has {cells} cells, need {MIN_ROW_CELLS}")
            }
            SkipReason::MissingId => write!(f, "empty id cell"),
            SkipReason::MissingLocation => write!(f, "empty location cell"),
            SkipReason::UnexpectedCell { index, found } => {
                write!(f, "cell {index} holds a {found}, expected text")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Row(NormalizedRow),
    Skip(SkipReason),
}

impl NormalizedRow {
    pub fn into_record(self, status: ListingStatus) -> ListingRecord {
        ListingRecord {
            link: detail_link(&self.id),
            id: self.id,
            registration_date: self.registration_date,
            location: self.location,
            status,
            deposit: self.deposit,
            monthly_rent: self.monthly_rent,
        }
    }
}

/// Validate a raw row and pull out the listing fields.
pub fn normalize(row: &[Value]) -> RowOutcome {
    match extract(row) {
        Ok(normalized) => RowOutcome::Row(normalized),
        Err(reason) => RowOutcome::Skip(reason),
    }
}

fn extract(row: &[Value]) -> Result<NormalizedRow, SkipReason> {
    if row.len() < MIN_ROW_CELLS {
        return Err(SkipReason::TooShort { cells: row.len() });
    }

    let id = text_cell(row, ID_CELL)?;
    let registration_date = text_cell(row, REG_DATE_CELL)?;
    let location = text_cell(row, LOCATION_CELL)?;
    let status_text = coerced_cell(row, STATUS_CELL);
    let deposit = text_cell(row, DEPOSIT_CELL)?;
    let monthly_rent = text_cell(row, MONTHLY_RENT_CELL)?;

    if id.is_empty() {
        return Err(SkipReason::MissingId);
    }
    if location.is_empty() {
        return Err(SkipReason::MissingLocation);
    }

    Ok(NormalizedRow {
        id,
        registration_date,
        location,
        status_text,
        deposit,
        monthly_rent,
    })
}

/// A cell that must hold text. Missing cells read as empty.
fn text_cell(row: &[Value], index: usize) -> Result<String, SkipReason> {
    match row.get(index) {
        None => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.trim().to_string()),
        Some(other) => Err(SkipReason::UnexpectedCell {
            index,
            found: json_kind(other),
        }),
    }
}

/// The status cell accepts any value and renders it as text.
fn coerced_cell(row: &[Value], index: usize) -> String {
    match row.get(index) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.trim().to_string(),
        Some(other) => other.to_string().trim().to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
