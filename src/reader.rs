use std::io::Read;
use std::path::Path;

use crate::error::{ExtractoError, Result};
use crate::models::{Cell, RawRow};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SourceKind {
    Csv,
    Workbook,
}

impl SourceKind {
    pub fn for_path(path: &Path) -> Option<SourceKind> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(Self::Csv),
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Some(Self::Workbook),
            _ => None,
        }
    }
}

/// Decode a statement file into positional rows: no header handling, raw
/// values kept, missing cells as `Cell::Empty`, blank rows left out.
pub fn read_rows(path: &Path) -> Result<Vec<RawRow>> {
    match SourceKind::for_path(path) {
        Some(SourceKind::Csv) => {
            let file = std::fs::File::open(path)?;
            read_csv_rows(std::io::BufReader::new(file))
        }
        Some(SourceKind::Workbook) => read_workbook_rows(path),
        None => Err(ExtractoError::UnsupportedFile(path.display().to_string())),
    }
}

fn is_blank(row: &[Cell]) -> bool {
    row.iter().all(Cell::is_empty)
}

// ---------------------------------------------------------------------------
// CSV
// ---------------------------------------------------------------------------

/// CSV carries no types, so every non-blank field stays text for the value
/// parsers ("1.500" is fifteen hundred, "007" is a reference).
fn csv_cell(field: &str) -> Cell {
    if field.trim().is_empty() {
        Cell::Empty
    } else {
        Cell::Text(field.to_string())
    }
}

pub fn read_csv_rows<R: Read>(reader: R) -> Result<Vec<RawRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut rows = Vec::new();
    for result in rdr.byte_records() {
        let record = result?;
        // Bank exports are often Latin-1; keep what we can rather than fail.
        let row: RawRow = record
            .iter()
            .map(|field| csv_cell(&String::from_utf8_lossy(field)))
            .collect();
        if !is_blank(&row) {
            rows.push(row);
        }
    }
    Ok(rows)
}

// ---------------------------------------------------------------------------
// Workbooks (feature-gated)
// ---------------------------------------------------------------------------

#[cfg(feature = "xlsx")]
fn workbook_cell(data: &calamine::Data) -> Cell {
    use calamine::Data;
    match data {
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) => Cell::Number(*f),
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Bool(b) => Cell::text(if *b { "TRUE" } else { "FALSE" }),
        Data::Error(_) | Data::Empty => Cell::Empty,
    }
}

/// Rows of a sheet range with index 0 pinned to column A. calamine starts a
/// range at the first used column, so a sheet whose column A is empty needs
/// leading `Empty` cells to keep the fixed column positions.
#[cfg(feature = "xlsx")]
fn workbook_rows(range: &calamine::Range<calamine::Data>) -> Vec<RawRow> {
    let offset = range.start().map(|(_, col)| col as usize).unwrap_or(0);
    range
        .rows()
        .map(|r| {
            std::iter::repeat(Cell::Empty)
                .take(offset)
                .chain(r.iter().map(workbook_cell))
                .collect::<RawRow>()
        })
        .filter(|row| !is_blank(row))
        .collect()
}

#[cfg(feature = "xlsx")]
fn read_workbook_rows(path: &Path) -> Result<Vec<RawRow>> {
    use calamine::Reader;

    let mut workbook = calamine::open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ExtractoError::EmptyWorkbook(path.display().to_string()))??;
    Ok(workbook_rows(&range))
}

#[cfg(not(feature = "xlsx"))]
fn read_workbook_rows(path: &Path) -> Result<Vec<RawRow>> {
    Err(ExtractoError::UnsupportedFile(format!(
        "{} (built without spreadsheet support)",
        path.display()
    )))
}
