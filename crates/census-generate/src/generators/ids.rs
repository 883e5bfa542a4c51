use std::collections::HashSet;

use rand::RngCore;

use crate::errors::GenerationError;
use crate::generators::numeric_string;

const EMPLOYEE_ID_DIGITS: usize = 6;

/// Employee identifiers already issued within one batch.
///
/// Created at the start of a batch and shared by every file in it, so an
/// identifier never repeats across the files of one run.
#[derive(Debug, Clone, Default)]
pub struct EmployeeIdPool {
    used: HashSet<String>,
}

impl EmployeeIdPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a fresh 6-digit identifier and record it as used.
    pub fn issue(
        &mut self,
        rng: &mut dyn RngCore,
        max_attempts: u32,
    ) -> Result<String, GenerationError> {
        for _ in 0..max_attempts {
            let id = numeric_string(rng, EMPLOYEE_ID_DIGITS);
            if self.used.insert(id.clone()) {
                return Ok(id);
            }
        }
        Err(GenerationError::Exhausted {
            what: "employee id",
            attempts: max_attempts,
        })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.used.contains(id)
    }

    pub fn len(&self) -> usize {
        self.used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }
}
