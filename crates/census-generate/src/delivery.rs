//! Artifact delivery: hands serialized files to their destination.

use std::io;
use std::path::PathBuf;

use crate::output::write_bytes_atomic;

/// Where a delivered artifact ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveredArtifact {
    pub file_name: String,
    pub location: String,
    pub bytes: u64,
}

/// Destination for serialized artifacts.
pub trait ArtifactSink {
    fn deliver(&mut self, file_name: &str, data: &[u8]) -> io::Result<DeliveredArtifact>;
}

/// Writes artifacts into a directory.
///
/// A name that is already taken gets a ` (n)` suffix before the extension,
/// the way browsers save repeated downloads.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn available_path(&self, file_name: &str) -> PathBuf {
        let candidate = self.dir.join(file_name);
        if !candidate.exists() {
            return candidate;
        }

        let (stem, ext) = match file_name.rsplit_once('.') {
            Some((stem, ext)) => (stem, Some(ext)),
            None => (file_name, None),
        };
        let mut counter = 1_u32;
        loop {
            let name = match ext {
                Some(ext) => format!("{stem} ({counter}).{ext}"),
                None => format!("{stem} ({counter})"),
            };
            let candidate = self.dir.join(name);
            if !candidate.exists() {
                return candidate;
            }
            counter += 1;
        }
    }
}

impl ArtifactSink for DirectorySink {
    fn deliver(&mut self, file_name: &str, data: &[u8]) -> io::Result<DeliveredArtifact> {
        let path = self.available_path(file_name);
        write_bytes_atomic(&path, data)?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| file_name.to_string());
        Ok(DeliveredArtifact {
            file_name,
            location: path.display().to_string(),
            bytes: data.len() as u64,
        })
    }
}

/// Keeps artifacts in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub artifacts: Vec<(String, Vec<u8>)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ArtifactSink for MemorySink {
    fn deliver(&mut self, file_name: &str, data: &[u8]) -> io::Result<DeliveredArtifact> {
        self.artifacts.push((file_name.to_string(), data.to_vec()));
        Ok(DeliveredArtifact {
            file_name: file_name.to_string(),
            location: format!("memory:{}", self.artifacts.len() - 1),
            bytes: data.len() as u64,
        })
    }
}
