use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use census_core::{DEFAULT_PRESENTED_TO, GenerationRequest};

/// Serialized artifact format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Xlsx,
    Csv,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Xlsx => "xlsx",
            Self::Csv => "csv",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = census_core::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "xlsx" => Ok(Self::Xlsx),
            "csv" => Ok(Self::Csv),
            _ => Err(census_core::Error::InvalidFormat(value.to_string())),
        }
    }
}

/// Options for the batch engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Organisation named in the title row.
    pub presented_to: String,
    /// Artifact format.
    pub format: OutputFormat,
    /// Maximum resample attempts for any constrained value.
    pub max_attempts: u32,
    /// Seed for the batch RNG; drawn from OS entropy when absent.
    pub seed: Option<u64>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            presented_to: DEFAULT_PRESENTED_TO.to_string(),
            format: OutputFormat::Xlsx,
            max_attempts: 1000,
            seed: None,
        }
    }
}

/// Summary of one delivered artifact.
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactReport {
    pub index: usize,
    pub file_name: String,
    pub location: String,
    pub households: u32,
    pub rows: u64,
    pub bytes: u64,
}

/// Report for a generation batch.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub batch_id: String,
    pub timestamp: String,
    pub seed: Option<u64>,
    pub format: OutputFormat,
    pub request: GenerationRequest,
    pub files: Vec<ArtifactReport>,
    pub households_total: u64,
    pub rows_total: u64,
    pub duration_ms: u64,
}

impl BatchReport {
    pub fn new(
        batch_id: String,
        timestamp: String,
        seed: Option<u64>,
        format: OutputFormat,
        request: GenerationRequest,
    ) -> Self {
        Self {
            batch_id,
            timestamp,
            seed,
            format,
            request,
            files: Vec::new(),
            households_total: 0,
            rows_total: 0,
            duration_ms: 0,
        }
    }

    pub fn record_artifact(&mut self, artifact: ArtifactReport) {
        self.households_total += u64::from(artifact.households);
        self.rows_total += artifact.rows;
        self.files.push(artifact);
    }

    /// Indices of files delivered so far.
    pub fn delivered_indices(&self) -> Vec<usize> {
        self.files.iter().map(|file| file.index).collect()
    }
}
