use serde::Serialize;

const DETAIL_URL_PREFIX: &str = "https://new.land.naver.com/houses?articleNo=";

/// Listing category shown on the map. Serialized with the labels the front
/// end filters on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ListingStatus {
    #[serde(rename = "일반")]
    Normal,
    /// Off-market listing bypassing the broker channel (갠매).
    #[serde(rename = "갠매")]
    PrivateSale,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingRecord {
    pub id: String,
    #[serde(rename = "reg_date")]
    pub registration_date: String,
    #[serde(rename = "hyperlink")]
    pub link: String,
    pub location: String,
    pub status: ListingStatus,
    pub deposit: String,
    pub monthly_rent: String,
}

/// Canonical detail page for an article id. The id is substituted verbatim.
pub fn detail_link(id: &str) -> String {
    format!("{DETAIL_URL_PREFIX}{id}")
}
