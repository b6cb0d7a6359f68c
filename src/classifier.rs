use crate::models::{cell_at, Cell, COL_DESCRIPTION};

pub const MIN_ROW_CELLS: usize = 5;

/// Running-balance rows in the statement carry this in their description.
pub const BALANCE_MARKER: &str = "SALDO";

/// True for rows that describe a real movement. Short rows, rows without a
/// description and balance rows are dropped.
pub fn is_valid_data_row(row: &[Cell]) -> bool {
    if row.len() < MIN_ROW_CELLS {
        return false;
    }
    let description = cell_at(row, COL_DESCRIPTION).display_text();
    let description = description.trim();
    !description.is_empty() && !description.to_uppercase().contains(BALANCE_MARKER)
}
