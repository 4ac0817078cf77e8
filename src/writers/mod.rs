//! Output writers for normalized catalog tables

pub mod csv_export;

pub use csv_export::{write_csv, write_csv_to};
