//! Synthetic census generation for census files.
//!
//! This crate builds employee households with validity-constrained fields,
//! assembles them into sheets, and serializes each sheet into a deliverable
//! artifact (xlsx or csv).

pub mod delivery;
pub mod engine;
pub mod errors;
pub mod generators;
pub mod household;
pub mod model;
pub mod output;

pub use delivery::{ArtifactSink, DeliveredArtifact, DirectorySink, MemorySink};
pub use engine::{BatchEngine, CancellationToken};
pub use errors::GenerationError;
pub use household::{Household, HouseholdContext, build_household, build_row, row_cells};
pub use model::{ArtifactReport, BatchReport, GenerateOptions, OutputFormat};
