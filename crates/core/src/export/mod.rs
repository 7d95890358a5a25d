//! CSV export of calculation results.

mod csv_export;

pub use csv_export::*;
