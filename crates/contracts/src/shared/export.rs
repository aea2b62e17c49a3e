//! CSV and JSON rendering for the export buttons.
//!
//! Rendering is pure; the frontend turns the returned text into a blob and
//! triggers the download.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("No data to export")]
    Empty,
    #[error("Failed to serialize export: {0}")]
    Serialize(String),
}

/// Records that can be written as CSV rows.
pub trait TabularExport {
    /// Column names, written as the first CSV line
    fn headers() -> Vec<&'static str>;

    /// One cell per header, in header order
    fn row(&self) -> Vec<String>;

    /// File name without extension, e.g. `stock_data`
    fn export_stem() -> &'static str;
}

/// Quotes a cell when it holds a comma, quote or line break.
pub fn escape_csv_cell(cell: &str) -> String {
    if cell.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

fn csv_line<S: AsRef<str>>(cells: &[S]) -> String {
    cells
        .iter()
        .map(|c| escape_csv_cell(c.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

pub fn to_csv<T: TabularExport>(rows: &[T]) -> Result<String, ExportError> {
    if rows.is_empty() {
        return Err(ExportError::Empty);
    }
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(csv_line(&T::headers()));
    lines.extend(rows.iter().map(|r| csv_line(&r.row())));
    Ok(lines.join("\n"))
}

/// Same as [`to_csv`] for a selection of borrowed rows (bulk export).
pub fn to_csv_refs<T: TabularExport>(rows: &[&T]) -> Result<String, ExportError> {
    if rows.is_empty() {
        return Err(ExportError::Empty);
    }
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(csv_line(&T::headers()));
    lines.extend(rows.iter().map(|r| csv_line(&r.row())));
    Ok(lines.join("\n"))
}

/// Pretty-printed JSON array of the full records.
pub fn to_json<T: Serialize>(rows: &[T]) -> Result<String, ExportError> {
    if rows.is_empty() {
        return Err(ExportError::Empty);
    }
    serde_json::to_string_pretty(rows).map_err(|e| ExportError::Serialize(e.to_string()))
}

/// Pretty-printed JSON of any serializable value (used for the all-stores bundle).
pub fn to_json_value<T: Serialize>(value: &T) -> Result<String, ExportError> {
    serde_json::to_string_pretty(value).map_err(|e| ExportError::Serialize(e.to_string()))
}

pub fn csv_filename<T: TabularExport>() -> String {
    format!("{}.csv", T::export_stem())
}

pub fn json_filename<T: TabularExport>() -> String {
    format!("{}.json", T::export_stem())
}

/// Export format picked in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv;charset=utf-8;",
            ExportFormat::Json => "application/json",
        }
    }

    /// Renders `rows` and names the file.
    pub fn render<T>(&self, rows: &[T]) -> Result<(String, String), ExportError>
    where
        T: TabularExport + Serialize,
    {
        let content = match self {
            ExportFormat::Csv => to_csv(rows)?,
            ExportFormat::Json => to_json(rows)?,
        };
        Ok((format!("{}.{}", T::export_stem(), self.extension()), content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Line {
        name: String,
        qty: u32,
    }

    impl TabularExport for Line {
        fn headers() -> Vec<&'static str> {
            vec!["name", "qty"]
        }

        fn row(&self) -> Vec<String> {
            vec![self.name.clone(), self.qty.to_string()]
        }

        fn export_stem() -> &'static str {
            "line_data"
        }
    }

    fn line(name: &str, qty: u32) -> Line {
        Line {
            name: name.to_string(),
            qty,
        }
    }

    #[test]
    fn test_escape_csv_cell() {
        assert_eq!(escape_csv_cell("plain"), "plain");
        assert_eq!(escape_csv_cell("a,b"), "\"a,b\"");
        assert_eq!(escape_csv_cell("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv_cell("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn test_csv_header_first() {
        let csv = to_csv(&[line("Cough Syrup, 100ml", 0), line("Paracetamol", 850)]).unwrap();
        assert_eq!(csv, "name,qty\n\"Cough Syrup, 100ml\",0\nParacetamol,850");
    }

    #[test]
    fn test_empty_export_rejected() {
        let empty: Vec<Line> = Vec::new();
        assert_eq!(to_csv(&empty), Err(ExportError::Empty));
        assert_eq!(to_json(&empty), Err(ExportError::Empty));
        assert_eq!(ExportError::Empty.to_string(), "No data to export");
    }

    #[test]
    fn test_json_is_array_of_records() {
        let json = to_json(&[line("Paracetamol", 850)]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["name"], "Paracetamol");
        assert_eq!(value[0]["qty"], 850);
    }

    #[test]
    fn test_filenames() {
        assert_eq!(csv_filename::<Line>(), "line_data.csv");
        assert_eq!(json_filename::<Line>(), "line_data.json");
        let (name, _) = ExportFormat::Json.render(&[line("x", 1)]).unwrap();
        assert_eq!(name, "line_data.json");
    }

    #[test]
    fn test_selected_rows_csv() {
        let a = line("a", 1);
        let b = line("b", 2);
        assert_eq!(to_csv_refs(&[&b, &a]).unwrap(), "name,qty\nb,2\na,1");
    }
}
