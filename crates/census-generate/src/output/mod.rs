pub mod atomic;
pub mod csv;
pub mod xlsx;

use census_core::CensusTable;

use crate::errors::GenerationError;
use crate::model::OutputFormat;

pub use atomic::write_bytes_atomic;

/// Turns an assembled table into the bytes of one artifact.
pub trait TableSerializer {
    fn format(&self) -> OutputFormat;

    fn serialize(&self, table: &CensusTable) -> Result<Vec<u8>, GenerationError>;
}

pub fn serializer_for(format: OutputFormat) -> Box<dyn TableSerializer> {
    match format {
        OutputFormat::Xlsx => Box::new(xlsx::XlsxSerializer),
        OutputFormat::Csv => Box::new(csv::CsvSerializer),
    }
}
