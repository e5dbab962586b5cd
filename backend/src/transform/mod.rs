//! Typing, aggregation and the end-to-end pipeline.
//!
//! - Typer: raw string rows to typed records
//! - Aggregate: summary statistics and model metrics
//! - Pipeline: file to response payload

pub mod aggregate;
pub mod pipeline;
pub mod typer;

pub use aggregate::{safe_number, summarize};
pub use pipeline::{analyze_bytes, analyze_text, load_analysis};
pub use typer::{type_cell, type_records};
