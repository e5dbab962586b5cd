//! # Housing Road - district housing density and road infrastructure API
//!
//! Loads a per-district CSV dataset, types every cell, and serves the records
//! together with dataset-wide summary statistics.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   CSV File  │────▶│   Parser    │────▶│    Typer    │────▶│  Aggregate  │──▶ { data, summary }
//! │  (UTF-8/…)  │     │ (RawTable)  │     │ (records)   │     │  (summary)  │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use housing_road::analyze_text;
//!
//! let payload = analyze_text("District,Avg_Density\nNorth,1200\nSouth,800\n");
//! assert_eq!(payload.summary.total_districts, 2);
//! assert_eq!(payload.summary.avg_density, 1000);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Load and server error types
//! - [`models`] - Typed records and summary types
//! - [`parser`] - Quote-aware line parser and byte decoding
//! - [`transform`] - Typing, aggregation and pipeline
//! - [`config`] - Runtime configuration
//! - [`api`] - HTTP API server

// Core modules
pub mod config;
pub mod error;
pub mod models;

// Parsing
pub mod parser;

// Typing and aggregation
pub mod transform;

// HTTP API
pub mod api;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::AppConfig;

pub use error::{LoadError, LoadResult, ServerError, ServerResult};

pub use models::{
    AnalysisPayload,
    CellValue,
    ModelMetrics,
    RecordBuilder,
    SummaryStatistics,
    TypedRecord,
};

pub use parser::{decode_content, parse_table, split_line, RawTable};

pub use transform::{
    analyze_bytes,
    analyze_text,
    load_analysis,
    safe_number,
    summarize,
    type_cell,
    type_records,
};

pub use api::types::{error_response, AnalysisResponse, ErrorBody, HealthResponse};

// Server
pub mod server {
    pub use crate::api::server::{router, start_server};
}
