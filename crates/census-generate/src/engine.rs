use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use chrono::{NaiveDate, NaiveDateTime};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use census_core::{CensusTable, GenerationRequest};

use crate::delivery::ArtifactSink;
use crate::errors::GenerationError;
use crate::generators::{EmployeeIdPool, format_timestamp};
use crate::household::{build_household, row_cells};
use crate::model::{ArtifactReport, BatchReport, GenerateOptions};
use crate::output::serializer_for;

/// Prefix of every artifact file name.
pub const FILE_PREFIX: &str = "CensusFile";

/// Cooperative cancellation flag, checked between files.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Entry point for generating a batch of census files.
#[derive(Debug, Clone)]
pub struct BatchEngine {
    options: GenerateOptions,
}

impl BatchEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    /// Run a batch with a ChaCha RNG seeded from the options (or OS entropy).
    pub fn run(
        &self,
        request: &GenerationRequest,
        now: NaiveDateTime,
        sink: &mut dyn ArtifactSink,
        cancel: &CancellationToken,
    ) -> Result<BatchReport, GenerationError> {
        let seed = self.options.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.run_with_rng(request, now, &mut rng, Some(seed), sink, cancel)
    }

    /// Run a batch with a caller-supplied RNG.
    ///
    /// One RNG, one identifier pool and one timestamp cover every file of
    /// the batch. Files are produced and delivered one at a time; the first
    /// failure aborts the batch and the error lists the files already
    /// delivered.
    pub fn run_with_rng(
        &self,
        request: &GenerationRequest,
        now: NaiveDateTime,
        rng: &mut dyn RngCore,
        seed: Option<u64>,
        sink: &mut dyn ArtifactSink,
        cancel: &CancellationToken,
    ) -> Result<BatchReport, GenerationError> {
        let start = Instant::now();
        let batch_id = uuid::Uuid::new_v4().to_string();
        let timestamp = format_timestamp(now);
        let serializer = serializer_for(self.options.format);
        let file_name = format!(
            "{FILE_PREFIX}_{timestamp}.{}",
            serializer.format().extension()
        );
        let mut ids = EmployeeIdPool::new();
        let mut report = BatchReport::new(
            batch_id.clone(),
            timestamp,
            seed,
            serializer.format(),
            *request,
        );

        info!(
            batch_id = %batch_id,
            files = request.num_files(),
            households = request.num_households(),
            policy = %request.policy(),
            format = %serializer.format(),
            "batch started"
        );

        for index in 0..request.num_files() as usize {
            if cancel.is_cancelled() {
                warn!(batch_id = %batch_id, completed = index, "batch cancelled");
                return Err(GenerationError::Cancelled { completed: index });
            }

            let produced = self
                .build_table(request, now.date(), &mut ids, rng)
                .and_then(|table| {
                    let rows = table.data_rows().len() as u64;
                    Ok((rows, serializer.serialize(&table)?))
                });
            let (rows, data) = produced.map_err(|err| {
                warn!(
                    batch_id = %batch_id,
                    file_index = index,
                    error = %err,
                    "file generation failed"
                );
                GenerationError::FileFailed {
                    file_index: index,
                    delivered: report.delivered_indices(),
                    source: Box::new(err),
                }
            })?;

            let delivered = sink.deliver(&file_name, &data).map_err(|err| {
                warn!(batch_id = %batch_id, file_index = index, error = %err, "delivery failed");
                GenerationError::Delivery {
                    file_index: index,
                    delivered: report.delivered_indices(),
                    message: err.to_string(),
                }
            })?;

            info!(
                batch_id = %batch_id,
                file_index = index,
                file = %delivered.file_name,
                rows,
                bytes = delivered.bytes,
                "file delivered"
            );

            report.record_artifact(ArtifactReport {
                index,
                file_name: delivered.file_name,
                location: delivered.location,
                households: request.num_households(),
                rows,
                bytes: delivered.bytes,
            });
        }

        report.duration_ms = start.elapsed().as_millis() as u64;
        info!(
            batch_id = %batch_id,
            files = report.files.len(),
            rows = report.rows_total,
            duration_ms = report.duration_ms,
            "batch completed"
        );

        Ok(report)
    }

    /// Assemble one sheet: preamble rows, then every household's rows in order.
    pub fn build_table(
        &self,
        request: &GenerationRequest,
        today: NaiveDate,
        ids: &mut EmployeeIdPool,
        rng: &mut dyn RngCore,
    ) -> Result<CensusTable, GenerationError> {
        let mut table = CensusTable::with_preamble(&self.options.presented_to);
        for _ in 0..request.num_households() {
            let household = build_household(
                ids,
                request.policy(),
                today,
                self.options.max_attempts,
                rng,
            )?;
            for member in &household.members {
                table.push_row(row_cells(member));
            }
        }
        Ok(table)
    }
}
