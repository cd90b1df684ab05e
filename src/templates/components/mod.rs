pub mod filters;

pub use filters::{amount_range, radio_group};
