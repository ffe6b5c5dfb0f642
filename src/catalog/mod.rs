//! カタログ行の型と結合

mod types;
pub mod join;

pub use join::{join_on_vendor, CandidatePair};
pub use types::{
    MatchRecord, ReferenceItem, VendorProduct, OUTPUT_COLUMNS, REFERENCE_COLUMNS, VENDOR_COLUMNS,
};
