//! Dataset-wide summary statistics over typed records.
//!
//! All arithmetic goes through [`safe_number`], so malformed cells count as
//! zero and the summary never contains `NaN` or infinities.

use crate::models::{CellValue, ModelMetrics, SummaryStatistics, TypedRecord};

/// Column names the summary reads.
pub mod columns {
    pub const AVG_DENSITY: &str = "Avg_Density";
    pub const INFRASTRUCTURE_SCORE: &str = "Infrastructure_Score";
    pub const CONGESTION_LEVEL: &str = "Congestion_Level";
    pub const TOTAL_HOUSING_UNITS: &str = "Total_Housing_Units";
    pub const TOTAL_ROAD_LENGTH_KM: &str = "Total_Road_Length_KM";
    pub const MODEL_R2_SCORE: &str = "Model_R2_Score";
    pub const MODEL_MSE: &str = "Model_MSE";
    pub const MODEL_MAE: &str = "Model_MAE";
}

/// Map any cell to a finite number: finite numbers pass through, everything
/// else is `0.0`.
pub fn safe_number(value: &CellValue) -> f64 {
    match value {
        CellValue::Number(n) if n.is_finite() => *n,
        _ => 0.0,
    }
}

/// Like [`safe_number`], treating an absent cell as `0.0`.
fn safe_number_opt(value: Option<&CellValue>) -> f64 {
    value.map(safe_number).unwrap_or(0.0)
}

/// Round half away from zero at `decimals` decimal places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let rounded = (value * factor).round() / factor;
    if rounded.is_finite() {
        rounded
    } else {
        0.0
    }
}

/// Sum of a column across all records.
pub fn column_total(records: &[TypedRecord], column: &str) -> f64 {
    let total: f64 = records
        .iter()
        .map(|record| safe_number_opt(record.get(column)))
        .sum();
    // Finite inputs can still overflow.
    if total.is_finite() {
        total
    } else {
        0.0
    }
}

/// Mean of a column, `0.0` for an empty dataset.
pub fn column_mean(records: &[TypedRecord], column: &str) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    column_total(records, column) / records.len() as f64
}

/// Model metrics from the first record, all zero when there is none.
pub fn model_metrics(records: &[TypedRecord]) -> ModelMetrics {
    let Some(first) = records.first() else {
        return ModelMetrics::default();
    };

    ModelMetrics {
        r2_score: safe_number_opt(first.get(columns::MODEL_R2_SCORE)),
        mse: safe_number_opt(first.get(columns::MODEL_MSE)),
        mae: safe_number_opt(first.get(columns::MODEL_MAE)),
    }
}

/// Compute the summary for a whole dataset.
pub fn summarize(records: &[TypedRecord]) -> SummaryStatistics {
    SummaryStatistics {
        total_districts: records.len(),
        avg_density: round_to(column_mean(records, columns::AVG_DENSITY), 0) as i64,
        avg_infrastructure_score: round_to(column_mean(records, columns::INFRASTRUCTURE_SCORE), 1),
        avg_congestion_level: round_to(column_mean(records, columns::CONGESTION_LEVEL), 1),
        total_housing_units: column_total(records, columns::TOTAL_HOUSING_UNITS),
        total_road_length: round_to(column_total(records, columns::TOTAL_ROAD_LENGTH_KM), 1),
        model_metrics: model_metrics(records),
    }
}
