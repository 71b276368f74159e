// src/lib.rs

//! Helpers for a CSV data-processing workflow: locate the newest dated drop
//! in a directory, and coerce raw string columns to numeric Arrow arrays
//! when the whole column converts.

pub mod convert;
pub mod discover;

pub use convert::{safe_to_numeric, to_record_batch, Coerced};
pub use discover::{find_latest, FindError, DEFAULT_EXTENSION};
