//! Data model for record sets

mod record;

pub use record::{derive_header, Record, RecordSet};
