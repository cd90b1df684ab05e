// src/domain/classifier.rs

use crate::domain::ListingStatus;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::info;

const PRIVATE_SALE: &str = "갠매";
const DIRECT_DEAL: &str = "직거래";
const INDIVIDUAL: &str = "개인";

/// Which status-column markers flag a private sale, per sheet. Sheets not
/// listed here never classify as private sale.
const MARKER_RULES: &[(&str, &[&str])] = &[
    ("강남월세", &[PRIVATE_SALE]),
    ("강남전세", &[DIRECT_DEAL, INDIVIDUAL, PRIVATE_SALE]),
    ("송파월세", &[PRIVATE_SALE]),
    ("송파전세", &[PRIVATE_SALE]),
];

struct Marker {
    word: &'static str,
    pattern: Regex,
}

struct SheetRule {
    sheet_key: &'static str,
    markers: Vec<Marker>,
}

static RULES: Lazy<Vec<SheetRule>> = Lazy::new(|| {
    MARKER_RULES
        .iter()
        .map(|&(sheet_key, words)| SheetRule {
            sheet_key,
            markers: words
                .iter()
                .map(|&word| Marker {
                    word,
                    pattern: spaced_pattern(word),
                })
                .collect(),
        })
        .collect()
});

/// Matches `word` with any amount of whitespace between its characters, so
/// "갠 매" and "갠매" are the same marker.
fn spaced_pattern(word: &str) -> Regex {
    let pattern = word
        .chars()
        .map(|c| regex::escape(&c.to_string()))
        .collect::<Vec<_>>()
        .join(r"\s*");

    // Escaped literals joined by `\s*` always form a valid pattern.
    Regex::new(&pattern).expect("marker pattern is valid")
}

/// Trim, drop non-breaking spaces, trim again.
fn normalize_status_text(text: &str) -> String {
    text.trim().replace('\u{00A0}', "").trim().to_string()
}

/// Classify a listing from its status-column text. Pure; the only side
/// effect is an audit log line when a marker matches.
pub fn classify(status_text: &str, sheet_key: &str) -> ListingStatus {
    let normalized = normalize_status_text(status_text);
    if normalized.is_empty() {
        return ListingStatus::Normal;
    }

    let Some(rule) = RULES.iter().find(|r| r.sheet_key == sheet_key) else {
        return ListingStatus::Normal;
    };

    match rule.markers.iter().find(|m| m.pattern.is_match(&normalized)) {
        Some(marker) => {
            info!(
                sheet = sheet_key,
                marker = marker.word,
                text = %normalized,
                "private sale marker found"
            );
            ListingStatus::PrivateSale
        }
        None => ListingStatus::Normal,
    }
}
