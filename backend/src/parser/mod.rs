//! Comma-separated text to a raw table of header names and string cells.
//!
//! Records are single physical lines. A double quote toggles quoted mode and
//! is dropped from the output; commas inside quotes do not split fields.
//! A quoted field cannot span lines, since lines are split before scanning.

pub mod encoding;

pub use encoding::{decode_content, detect_encoding};

/// Headers plus unaligned string rows, as read from the text.
///
/// A row may hold fewer cells than there are headers (or more).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    /// Trimmed header names, in file order. Not necessarily unique.
    pub headers: Vec<String>,
    /// Trimmed cells per data line.
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Cell at `(row, column)`, or `""` when the row is too short.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Parse the full file content into a [`RawTable`].
///
/// Never fails. Empty content yields no headers and no rows; a header-only
/// file yields headers and no rows. Blank lines between records become a
/// row with a single empty cell.
///
/// # Example
/// ```
/// use housing_road::parser::parse_table;
///
/// let table = parse_table("A,B\n\"1,2\",3\n");
/// assert_eq!(table.headers, vec!["A", "B"]);
/// assert_eq!(table.rows, vec![vec!["1,2", "3"]]);
/// ```
pub fn parse_table(text: &str) -> RawTable {
    let content = text.trim_start_matches('\u{feff}').trim();
    if content.is_empty() {
        return RawTable::default();
    }

    let mut lines = content.split('\n');

    let headers: Vec<String> = lines
        .next()
        .map(|line| line.split(',').map(|h| h.trim().to_string()).collect())
        .unwrap_or_default();

    let rows = lines.map(split_line).collect();

    RawTable { headers, rows }
}

/// Split one physical line into trimmed fields.
///
/// Always returns at least one field.
pub fn split_line(line: &str) -> Vec<String> {
    let mut values = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                values.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    values.push(current.trim().to_string());

    values
}
