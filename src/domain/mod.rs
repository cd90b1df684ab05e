pub mod aggregator;
pub mod classifier;
pub mod listing;
pub mod normalizer;

pub use aggregator::get_property_data;
pub use classifier::classify;
pub use listing::{detail_link, ListingRecord, ListingStatus};
pub use normalizer::{normalize, RowOutcome, SkipReason};
