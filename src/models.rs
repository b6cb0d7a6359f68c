/// A single spreadsheet cell as delivered by the reader, before any parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Empty,
}

impl Cell {
    pub fn text(s: &str) -> Self {
        Cell::Text(s.to_string())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Cell rendered as plain text; numbers use their shortest decimal form.
    pub fn display_text(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => n.to_string(),
            Cell::Empty => String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Number(_) => false,
        }
    }
}

/// One positional row of a statement sheet.
pub type RawRow = Vec<Cell>;

// Column positions fixed by the bank's export layout.
pub const COL_DATE: usize = 1;
pub const COL_DESCRIPTION: usize = 2;
pub const COL_DEBIT: usize = 4;
pub const COL_CREDIT: usize = 5;
pub const COL_REFERENCE: usize = 7;

static EMPTY: Cell = Cell::Empty;

/// Cell at `idx`, or `Empty` when the row is shorter than that.
pub fn cell_at(row: &[Cell], idx: usize) -> &Cell {
    row.get(idx).unwrap_or(&EMPTY)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub date: String,
    pub description: String,
    pub reference: String,
    pub debit: f64,
    pub credit: f64,
    pub key: String,
}
