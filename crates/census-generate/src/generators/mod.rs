//! Field generators: identifiers, dates and person attributes.

pub mod dates;
pub mod ids;
pub mod person;
pub mod ssn;

use rand::{Rng, RngCore};

pub use dates::{compute_age, format_date, format_timestamp, sample_birthdate};
pub use ids::EmployeeIdPool;
pub use person::{
    employee_email, sample_employment, sample_first_name, sample_gender, sample_last_name,
};
pub use ssn::generate_ssn;

/// Random string of `len` decimal digits; leading zeros allowed.
pub fn numeric_string(rng: &mut dyn RngCore, len: usize) -> String {
    (0..len)
        .map(|_| char::from(b'0' + rng.random_range(0..10_u8)))
        .collect()
}

fn pick<'a, T>(values: &'a [T], rng: &mut dyn RngCore) -> Option<&'a T> {
    if values.is_empty() {
        return None;
    }
    values.get(rng.random_range(0..values.len()))
}
