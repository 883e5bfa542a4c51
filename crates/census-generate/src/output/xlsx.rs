use rust_xlsxwriter::Workbook;

use census_core::{Cell, CensusTable};

use crate::errors::GenerationError;
use crate::model::OutputFormat;
use crate::output::TableSerializer;

/// Single-sheet workbook writer.
pub struct XlsxSerializer;

impl TableSerializer for XlsxSerializer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Xlsx
    }

    fn serialize(&self, table: &CensusTable) -> Result<Vec<u8>, GenerationError> {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name(table.sheet_name)?;

        for (col, width) in table.column_widths.iter().enumerate() {
            sheet.set_column_width(col as u16, *width)?;
        }

        for (row_idx, row) in table.rows.iter().enumerate() {
            let row_num = row_idx as u32;
            for (col_idx, cell) in row.iter().enumerate() {
                let col_num = col_idx as u16;
                match cell {
                    Cell::Empty => {}
                    Cell::Text(value) => {
                        sheet.write_string(row_num, col_num, value.as_str())?;
                    }
                    Cell::Int(value) => {
                        sheet.write_number(row_num, col_num, *value as f64)?;
                    }
                }
            }
        }

        Ok(workbook.save_to_buffer()?)
    }
}
