//! Column-wise spread measurements
//!
//! Summarises every column of a numeric matrix by its mean, sample standard
//! deviation and coefficient of variation (in percent).

mod cv;

pub use cv::{coefficient_of_variation, column_summary, column_summary_from_rows, ColumnSummary};
