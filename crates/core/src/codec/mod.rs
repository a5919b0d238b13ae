//! Codec between nested values and flat dotted-path cache entries.
//!
//! The cache stores one string per leaf path while the durable store
//! keeps the nested document, so every read and write goes through
//! these pure functions. No I/O happens here.

mod coerce;
mod flatten;
mod paths;

pub use coerce::coerce;
pub use flatten::{flatten, is_truthy, unflatten, FieldWrite};
pub use paths::{clear_path, get_path, join_path, set_path, STORAGE_ROOT};
