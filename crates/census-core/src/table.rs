use crate::layout::{COLUMN_HEADERS, COLUMN_WIDTHS, SHEET_NAME, title_text};

/// One spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Int(i64),
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(value)
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Text rendering used by flat formats such as CSV.
    pub fn render(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(value) => value.clone(),
            Cell::Int(value) => value.to_string(),
        }
    }
}

/// A single-sheet table: leading decorative rows, a header row, then data.
#[derive(Debug, Clone, PartialEq)]
pub struct CensusTable {
    pub sheet_name: &'static str,
    pub column_widths: &'static [u16],
    pub rows: Vec<Vec<Cell>>,
}

impl CensusTable {
    /// Rows placed before the data: blank, title, blank, blank, header.
    pub const PREAMBLE_ROWS: usize = 5;

    /// Start a table with the decorative rows and the column header row.
    pub fn with_preamble(presented_to: &str) -> Self {
        let mut header = Vec::with_capacity(COLUMN_HEADERS.len() + 1);
        header.push(Cell::Empty);
        header.extend(COLUMN_HEADERS.iter().map(|label| Cell::text(*label)));

        let rows = vec![
            vec![Cell::Empty],
            vec![Cell::Empty, Cell::text(title_text(presented_to))],
            vec![Cell::Empty],
            vec![Cell::Empty],
            header,
        ];

        Self {
            sheet_name: SHEET_NAME,
            column_widths: &COLUMN_WIDTHS,
            rows,
        }
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    /// Rows after the preamble.
    pub fn data_rows(&self) -> &[Vec<Cell>] {
        self.rows.get(Self::PREAMBLE_ROWS..).unwrap_or(&[])
    }
}
