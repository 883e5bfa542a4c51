use rand::RngCore;

use crate::errors::GenerationError;
use crate::generators::{numeric_string, pick};

const AREA_PREFIXES: [char; 3] = ['5', '6', '7'];

/// Generate a test-safe SSN shaped `AAA-GG-SSSS`.
///
/// The area starts with 5, 6 or 7 and is never `666`; the group is never
/// `00` and the serial never `0000`. Each part is resampled independently,
/// at most `max_attempts` times.
pub fn generate_ssn(
    rng: &mut dyn RngCore,
    max_attempts: u32,
) -> Result<String, GenerationError> {
    let area = resample("ssn area", max_attempts, rng, |rng| {
        let prefix = pick(&AREA_PREFIXES, rng).copied().unwrap_or('5');
        let area = format!("{prefix}{}", numeric_string(rng, 2));
        (area != "666").then_some(area)
    })?;
    let group = resample("ssn group", max_attempts, rng, |rng| {
        let group = numeric_string(rng, 2);
        (group != "00").then_some(group)
    })?;
    let serial = resample("ssn serial", max_attempts, rng, |rng| {
        let serial = numeric_string(rng, 4);
        (serial != "0000").then_some(serial)
    })?;

    Ok(format!("{area}-{group}-{serial}"))
}

fn resample<F>(
    what: &'static str,
    max_attempts: u32,
    rng: &mut dyn RngCore,
    mut sample: F,
) -> Result<String, GenerationError>
where
    F: FnMut(&mut dyn RngCore) -> Option<String>,
{
    for _ in 0..max_attempts {
        if let Some(value) = sample(rng) {
            return Ok(value);
        }
    }
    Err(GenerationError::Exhausted {
        what,
        attempts: max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn zero_attempts_exhausts() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let result = generate_ssn(&mut rng, 0);
        assert!(matches!(
            result,
            Err(GenerationError::Exhausted { what: "ssn area", attempts: 0 })
        ));
    }
}
