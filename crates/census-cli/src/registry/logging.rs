use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::{self, time::UtcTime};
use tracing_subscriber::prelude::*;

use super::{RegistryError, RegistryResult};

/// Level filter applied when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "info";

/// Route events to the run's `logs.ndjson` (one JSON object per line) and to
/// stderr in the human-readable format.
///
/// Installs the global subscriber, so it succeeds once per process.
pub fn init_run_logging(logs_path: &Path) -> RegistryResult<()> {
    let logs = OpenOptions::new()
        .create(true)
        .append(true)
        .open(logs_path)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let run_log = fmt::layer()
        .json()
        .with_timer(UtcTime::rfc_3339())
        .with_writer(Mutex::new(logs));
    let console = fmt::layer().with_target(false).with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(run_log)
        .with(console)
        .try_init()
        .map_err(|err| RegistryError::Logging(err.to_string()))
}
