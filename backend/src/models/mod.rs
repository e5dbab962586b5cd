//! Domain models for the housing/road analysis pipeline.
//!
//! - [`CellValue`] - A typed cell: number when parseable, text otherwise
//! - [`TypedRecord`] - One district row, keyed by column name in header order
//! - [`RecordBuilder`] - Builds a [`TypedRecord`] by walking the header sequence
//! - [`SummaryStatistics`] - Dataset-wide aggregates
//! - [`ModelMetrics`] - Model quality indicators read from the first record
//! - [`AnalysisPayload`] - The `{ data, summary }` response body

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// Largest magnitude at which every whole `f64` is an exact integer (2^53).
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Serialize a number as a JSON integer when it holds a whole value.
///
/// `3.0` goes out as `3`, `2.5` stays `2.5`.
pub fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < MAX_EXACT_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

// =============================================================================
// Cell Value
// =============================================================================

/// A single typed cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Finite number parsed from the cell.
    Number(f64),
    /// Original (trimmed) cell text, possibly empty.
    Text(String),
}

impl CellValue {
    /// Numeric value, if this cell is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(_) => None,
        }
    }

    /// Text value, if this cell is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Number(_) => None,
            CellValue::Text(s) => Some(s),
        }
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::Number(n) => serialize_number(n, serializer),
            CellValue::Text(s) => serializer.serialize_str(s),
        }
    }
}

// =============================================================================
// Typed Record
// =============================================================================

/// One data row as an ordered mapping of column name to typed value.
///
/// Key order follows header order. Serializes as a JSON object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypedRecord {
    fields: Vec<(String, CellValue)>,
}

impl TypedRecord {
    /// Value for a column, if the record has it.
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.fields
            .iter()
            .find(|(name, _)| name.as_str() == column)
            .map(|(_, value)| value)
    }

    /// Column names in header order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// `(column, value)` pairs in header order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for TypedRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Builder that assembles a [`TypedRecord`] one header at a time.
///
/// A repeated column name keeps its first position and takes the latest value.
#[derive(Debug, Default)]
pub struct RecordBuilder {
    fields: Vec<(String, CellValue)>,
}

impl RecordBuilder {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Set the value for a column.
    pub fn field(&mut self, column: &str, value: CellValue) -> &mut Self {
        match self.fields.iter_mut().find(|(name, _)| name.as_str() == column) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((column.to_string(), value)),
        }
        self
    }

    pub fn build(self) -> TypedRecord {
        TypedRecord {
            fields: self.fields,
        }
    }
}

// =============================================================================
// Summary
// =============================================================================

/// Model quality indicators, read once from the first record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelMetrics {
    #[serde(serialize_with = "serialize_number")]
    pub r2_score: f64,
    #[serde(serialize_with = "serialize_number")]
    pub mse: f64,
    #[serde(serialize_with = "serialize_number")]
    pub mae: f64,
}

/// Dataset-wide summary statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStatistics {
    /// Number of records.
    pub total_districts: usize,
    /// Mean density, rounded to the nearest integer.
    pub avg_density: i64,
    /// Mean infrastructure score, one decimal.
    #[serde(serialize_with = "serialize_number")]
    pub avg_infrastructure_score: f64,
    /// Mean congestion level, one decimal.
    #[serde(serialize_with = "serialize_number")]
    pub avg_congestion_level: f64,
    /// Unrounded sum of housing units.
    #[serde(serialize_with = "serialize_number")]
    pub total_housing_units: f64,
    /// Road length sum, one decimal.
    #[serde(serialize_with = "serialize_number")]
    pub total_road_length: f64,
    pub model_metrics: ModelMetrics,
}

/// Success payload of the analysis endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisPayload {
    pub data: Vec<TypedRecord>,
    pub summary: SummaryStatistics,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cell_value_serialization() {
        assert_eq!(serde_json::to_value(CellValue::Number(3.0)).unwrap(), json!(3));
        assert_eq!(serde_json::to_value(CellValue::Number(-2.5)).unwrap(), json!(-2.5));
        assert_eq!(serde_json::to_value(CellValue::from("N/A")).unwrap(), json!("N/A"));
        assert_eq!(serde_json::to_value(CellValue::from("")).unwrap(), json!(""));
    }

    #[test]
    fn test_record_preserves_header_order() {
        let mut builder = RecordBuilder::default();
        builder
            .field("Zeta", CellValue::Number(1.0))
            .field("Alpha", CellValue::from("x"))
            .field("Mid", CellValue::Number(0.5));
        let record = builder.build();

        assert_eq!(record.columns().collect::<Vec<_>>(), vec!["Zeta", "Alpha", "Mid"]);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"Zeta":1,"Alpha":"x","Mid":0.5}"#);
    }

    #[test]
    fn test_duplicate_column_keeps_first_position_last_value() {
        let mut builder = RecordBuilder::with_capacity(3);
        builder
            .field("A", CellValue::Number(1.0))
            .field("B", CellValue::Number(2.0))
            .field("A", CellValue::from("later"));
        let record = builder.build();

        assert_eq!(record.len(), 2);
        assert_eq!(record.get("A"), Some(&CellValue::from("later")));
        assert_eq!(record.columns().next(), Some("A"));
    }

    #[test]
    fn test_summary_field_names() {
        let summary = SummaryStatistics {
            total_districts: 2,
            avg_density: 1200,
            avg_infrastructure_score: 7.5,
            avg_congestion_level: 3.0,
            total_housing_units: 4500.0,
            total_road_length: 12.3,
            model_metrics: ModelMetrics {
                r2_score: 0.87,
                mse: 12.0,
                mae: 2.5,
            },
        };

        assert_eq!(
            serde_json::to_value(&summary).unwrap(),
            json!({
                "totalDistricts": 2,
                "avgDensity": 1200,
                "avgInfrastructureScore": 7.5,
                "avgCongestionLevel": 3,
                "totalHousingUnits": 4500,
                "totalRoadLength": 12.3,
                "modelMetrics": { "r2Score": 0.87, "mse": 12, "mae": 2.5 }
            })
        );
    }
}
