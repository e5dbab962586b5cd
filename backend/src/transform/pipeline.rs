//! End-to-end pipeline: file bytes → table → typed records → summary.
//!
//! # Example
//!
//! ```rust,ignore
//! use housing_road::transform::pipeline::load_analysis;
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let payload = load_analysis(Path::new("data/housing_road_analysis.csv")).await?;
//!     println!("{} districts", payload.summary.total_districts);
//!     Ok(())
//! }
//! ```

use std::io::ErrorKind;
use std::path::Path;

use super::aggregate::summarize;
use super::typer::type_records;
use crate::api::logs::{log_error, log_info, log_success, log_warning};
use crate::error::{LoadError, LoadResult};
use crate::models::AnalysisPayload;
use crate::parser::{decode_content, parse_table};

/// Run parse, typing and aggregation over already-loaded text.
///
/// Total: malformed content degrades to text cells and zero contributions.
pub fn analyze_text(text: &str) -> AnalysisPayload {
    let table = parse_table(text);
    let data = type_records(&table);
    let summary = summarize(&data);

    AnalysisPayload { data, summary }
}

/// Same as [`analyze_text`] for raw file bytes in any supported encoding.
pub fn analyze_bytes(bytes: &[u8]) -> AnalysisPayload {
    analyze_text(&decode_content(bytes))
}

/// Read the data file and build the analysis payload.
///
/// A missing file is [`LoadError::SourceUnavailable`]; any other read error
/// is [`LoadError::ProcessingFailure`].
pub async fn load_analysis(path: &Path) -> LoadResult<AnalysisPayload> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log_warning(format!("Data file not found at {}", path.display()));
            return Err(LoadError::SourceUnavailable(path.to_path_buf()));
        }
        Err(e) => {
            log_error(format!("Failed to read {}: {}", path.display(), e));
            return Err(e.into());
        }
    };

    log_info(format!("Loaded {} bytes from {}", bytes.len(), path.display()));

    let payload = analyze_bytes(&bytes);

    log_success(format!(
        "Analyzed {} districts",
        payload.summary.total_districts
    ));

    Ok(payload)
}
