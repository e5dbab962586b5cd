//! Raw string rows to typed records.

use crate::models::{CellValue, RecordBuilder, TypedRecord};
use crate::parser::RawTable;

/// Type a single trimmed cell.
///
/// A cell that parses as a finite decimal number (sign and exponent allowed)
/// becomes [`CellValue::Number`]; anything else, including `""`, `NaN` and
/// `inf`, is kept as [`CellValue::Text`].
pub fn type_cell(cell: &str) -> CellValue {
    match cell.parse::<f64>() {
        Ok(n) if n.is_finite() => CellValue::Number(n),
        _ => CellValue::Text(cell.to_string()),
    }
}

/// Convert every row of the table into a [`TypedRecord`], preserving order.
///
/// Each record has one entry per header. Missing trailing cells are typed
/// as `""`; cells beyond the last header are ignored.
pub fn type_records(table: &RawTable) -> Vec<TypedRecord> {
    (0..table.rows.len())
        .map(|row| {
            let mut builder = RecordBuilder::with_capacity(table.headers.len());
            for (column, header) in table.headers.iter().enumerate() {
                builder.field(header, type_cell(table.cell(row, column)));
            }
            builder.build()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_table;

    #[test]
    fn test_type_cell_numbers() {
        assert_eq!(type_cell("3"), CellValue::Number(3.0));
        assert_eq!(type_cell("-0.25"), CellValue::Number(-0.25));
        assert_eq!(type_cell("+7"), CellValue::Number(7.0));
        assert_eq!(type_cell("1.5e3"), CellValue::Number(1500.0));
        assert_eq!(type_cell(".5"), CellValue::Number(0.5));
    }

    #[test]
    fn test_type_cell_text() {
        assert_eq!(type_cell(""), CellValue::from(""));
        assert_eq!(type_cell("N/A"), CellValue::from("N/A"));
        assert_eq!(type_cell("1,2"), CellValue::from("1,2"));
        assert_eq!(type_cell("12abc"), CellValue::from("12abc"));
    }

    #[test]
    fn test_type_cell_non_finite_is_text() {
        assert_eq!(type_cell("NaN"), CellValue::from("NaN"));
        assert_eq!(type_cell("inf"), CellValue::from("inf"));
        assert_eq!(type_cell("-Infinity"), CellValue::from("-Infinity"));
        assert_eq!(type_cell("1e999"), CellValue::from("1e999"));
    }

    #[test]
    fn test_quoted_comma_record() {
        let records = type_records(&parse_table("A,B\n\"1,2\",3"));

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("A"), Some(&CellValue::from("1,2")));
        assert_eq!(records[0].get("B"), Some(&CellValue::Number(3.0)));
    }

    #[test]
    fn test_short_row_gets_empty_string() {
        let records = type_records(&parse_table("A,B,C\n1,2"));

        assert_eq!(records[0].len(), 3);
        assert_eq!(records[0].get("C"), Some(&CellValue::from("")));
    }

    #[test]
    fn test_extra_cells_ignored() {
        let records = type_records(&parse_table("A,B\n1,2,3,4"));
        assert_eq!(records[0].columns().collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn test_record_order_and_key_order() {
        let records = type_records(&parse_table("Name,Score\nb,2\na,1\nc,3"));

        let names: Vec<_> = records.iter().map(|r| r.get("Name").cloned()).collect();
        assert_eq!(
            names,
            vec![
                Some(CellValue::from("b")),
                Some(CellValue::from("a")),
                Some(CellValue::from("c"))
            ]
        );
        for record in &records {
            assert_eq!(record.columns().collect::<Vec<_>>(), vec!["Name", "Score"]);
        }
    }

    #[test]
    fn test_header_only_yields_no_records() {
        assert!(type_records(&parse_table("A,B\n")).is_empty());
    }
}
