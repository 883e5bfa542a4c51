use census_core::CensusTable;

use crate::errors::GenerationError;
use crate::model::OutputFormat;
use crate::output::TableSerializer;

/// Writes the table as CSV, preamble rows included.
///
/// Rows keep their own length, so records are written in flexible mode.
pub struct CsvSerializer;

impl TableSerializer for CsvSerializer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Csv
    }

    fn serialize(&self, table: &CensusTable) -> Result<Vec<u8>, GenerationError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_writer(Vec::new());

        for row in &table.rows {
            let record: Vec<String> = row.iter().map(|cell| cell.render()).collect();
            writer.write_record(&record)?;
        }

        writer.flush()?;
        writer.into_inner().map_err(|err| GenerationError::Io(err.into_error()))
    }
}
