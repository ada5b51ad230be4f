use std::path::Path;

use csv::ReaderBuilder;

use covid_model::{PipelineError, Result};

/// Verbatim in-memory image of one CSV source.
///
/// Row order is preserved and cells are kept as read, beyond whitespace
/// trimming and BOM stripping. Type coercion is the transform layer's job.
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Resolve required columns to indices, failing on the first absent name.
    pub fn require_columns(&self, names: &[&str], path: &Path) -> Result<Vec<usize>> {
        names
            .iter()
            .map(|name| {
                self.column_index(name)
                    .ok_or_else(|| PipelineError::SchemaMismatch {
                        column: (*name).to_string(),
                        path: path.to_path_buf(),
                    })
            })
            .collect()
    }

    /// Cell value at (row, column), empty string when out of bounds.
    pub fn value(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map(String::as_str)
            .unwrap_or("")
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a CSV file into a [`CsvTable`].
///
/// The first record is the header row; every data row is padded or truncated
/// to the header width and fully blank rows are skipped.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    if !path.is_file() {
        return Err(PipelineError::SourceNotFound {
            path: path.to_path_buf(),
        });
    }
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|error| PipelineError::Csv(format!("{}: {error}", path.display())))?;
    let mut records = reader.records();
    let Some(first) = records.next() else {
        return Ok(CsvTable {
            headers: Vec::new(),
            rows: Vec::new(),
        });
    };
    let first = first.map_err(|error| PipelineError::Csv(format!("{}: {error}", path.display())))?;
    let headers: Vec<String> = first.iter().map(normalize_header).collect();

    let mut rows = Vec::new();
    for record in records {
        let record =
            record.map_err(|error| PipelineError::Csv(format!("{}: {error}", path.display())))?;
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            row.push(normalize_cell(record.get(idx).unwrap_or("")));
        }
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        rows.push(row);
    }
    Ok(CsvTable { headers, rows })
}
