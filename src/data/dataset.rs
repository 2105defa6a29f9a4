use std::path::Path;
use std::sync::Arc;

use crate::foundation::error::{GlyphError, GlyphResult};

/// One dataset record: an ordered, non-empty sequence of finite values.
pub type Row = Vec<f64>;

/// Immutable, shareable collection of rows read once at startup.
///
/// Rows may differ in length; every row is laid out and normalized independently.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    rows: Arc<[Row]>,
    header: Option<Vec<String>>,
}

impl Dataset {
    /// Build a dataset from rows, rejecting empty rows and non-finite values.
    pub fn new(rows: Vec<Row>) -> GlyphResult<Self> {
        for (idx, row) in rows.iter().enumerate() {
            if row.is_empty() {
                return Err(GlyphError::validation(format!(
                    "row {idx} has no values (a glyph needs at least one vertex)"
                )));
            }
            if let Some(col) = row.iter().position(|v| !v.is_finite()) {
                return Err(GlyphError::validation(format!(
                    "row {idx} column {col} is not a finite number"
                )));
            }
        }
        Ok(Self {
            rows: rows.into(),
            header: None,
        })
    }

    /// Parse header-delimited CSV.
    ///
    /// The first non-empty line is the header; its field names are kept but otherwise unused.
    /// Each later non-empty line is one row of comma-separated numbers. Fields may be
    /// double-quoted; a quoted comma stays inside its field.
    pub fn from_csv_str(text: &str) -> GlyphResult<Self> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l.trim_end_matches('\r')))
            .filter(|(_, l)| !l.trim().is_empty());

        let Some((header_no, header_line)) = lines.next() else {
            return Err(GlyphError::data("CSV input is empty (missing header row)"));
        };
        let header = split_record(header_no, header_line)?
            .into_iter()
            .map(|f| f.trim().to_string())
            .collect::<Vec<_>>();

        let mut rows = Vec::<Row>::new();
        for (line_no, line) in lines {
            let mut row = Row::with_capacity(header.len());
            for (col, field) in split_record(line_no, line)?.iter().enumerate() {
                let field = field.trim();
                let v = field.parse::<f64>().map_err(|_| {
                    GlyphError::data(format!(
                        "line {line_no}, column {}: '{field}' is not a number",
                        col + 1
                    ))
                })?;
                if !v.is_finite() {
                    return Err(GlyphError::data(format!(
                        "line {line_no}, column {}: '{field}' is not a finite number",
                        col + 1
                    )));
                }
                row.push(v);
            }
            rows.push(row);
        }

        tracing::debug!(
            rows = rows.len(),
            columns = header.len(),
            "parsed CSV dataset"
        );

        let mut ds = Self::new(rows)?;
        ds.header = Some(header);
        Ok(ds)
    }

    /// Parse a JSON array of arrays of numbers.
    pub fn from_json_str(text: &str) -> GlyphResult<Self> {
        let rows: Vec<Row> = serde_json::from_str(text)
            .map_err(|e| GlyphError::data(format!("invalid dataset JSON: {e}")))?;
        Self::new(rows)
    }

    /// Load a dataset file: `.json` is parsed as JSON, anything else as CSV.
    pub fn from_path(path: impl AsRef<Path>) -> GlyphResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            GlyphError::data(format!("failed to read dataset '{}': {e}", path.display()))
        })?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&text)
        } else {
            Self::from_csv_str(&text)
        }
    }

    /// All rows, in file order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows (glyphs).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Header field names, when the source had a header.
    pub fn header(&self) -> Option<&[String]> {
        self.header.as_deref()
    }
}

/// Split one CSV record into fields.
///
/// Double-quoted fields may contain commas, and `""` inside quotes is a literal quote. Records
/// never span lines.
fn split_record(line_no: usize, line: &str) -> GlyphResult<Vec<String>> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut quoted = false;
    let mut chars = line.chars().peekable();

    let malformed = |col: usize, what: &str| {
        GlyphError::data(format!("line {line_no}, column {col}: {what}"))
    };

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                _ => field.push(c),
            }
            continue;
        }
        match c {
            ',' => {
                fields.push(std::mem::take(&mut field));
                quoted = false;
            }
            '"' if !quoted && field.trim().is_empty() => {
                field.clear();
                in_quotes = true;
                quoted = true;
            }
            '"' => return Err(malformed(fields.len() + 1, "stray quote in field")),
            c if quoted && !c.is_whitespace() => {
                return Err(malformed(fields.len() + 1, "text after closing quote"));
            }
            c => field.push(c),
        }
    }
    if in_quotes {
        return Err(malformed(fields.len() + 1, "unterminated quoted field"));
    }
    fields.push(field);
    Ok(fields)
}

#[cfg(test)]
#[path = "../../tests/unit/data/dataset.rs"]
mod tests;
