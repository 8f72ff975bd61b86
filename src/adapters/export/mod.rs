//! Export formats built from registry snapshots.

pub mod csv_utils;

pub use csv_utils::gradebook_to_csv;
