//! Pure domain logic for the shift-tally defect tracker.
//!
//! This crate contains no database or I/O dependencies; all data is passed
//! in by the caller. The aggregation pipeline is `shift` (hour bucketing)
//! -> `roster` (employee name resolution) -> `matrix` (count matrix and
//! totals). `catalog` holds the reference-data rules for defect types and
//! color codes.

pub mod catalog;
pub mod error;
pub mod matrix;
pub mod roster;
pub mod shift;
pub mod types;
