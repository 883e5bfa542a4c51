use fake::Fake;
use fake::faker::name::en::{FirstName, LastName};
use rand::{Rng, RngCore};

use census_core::{EMAIL_DOMAIN, EmployeeClass, Employment, Gender, date_of_hire};

use crate::generators::{numeric_string, pick};

const INCOME_MIN: u32 = 50_000;
const INCOME_MAX: u32 = 90_000;

pub fn sample_first_name(rng: &mut dyn RngCore) -> String {
    FirstName().fake_with_rng(rng)
}

pub fn sample_last_name(rng: &mut dyn RngCore) -> String {
    LastName().fake_with_rng(rng)
}

pub fn sample_gender(rng: &mut dyn RngCore) -> Gender {
    if rng.random_bool(0.5) {
        Gender::Female
    } else {
        Gender::Male
    }
}

/// Employee email: sanitized first and last name, three digits, sandbox domain.
pub fn employee_email(first_name: &str, last_name: &str, rng: &mut dyn RngCore) -> String {
    let digits = numeric_string(rng, 3);
    format!(
        "{}{}{digits}@{EMAIL_DOMAIN}",
        letters_only(first_name),
        letters_only(last_name)
    )
}

pub fn sample_employment(rng: &mut dyn RngCore) -> Employment {
    Employment {
        date_of_hire: date_of_hire(),
        annual_income: rng.random_range(INCOME_MIN..=INCOME_MAX),
        class: pick(&EmployeeClass::ALL, rng)
            .copied()
            .unwrap_or(EmployeeClass::FullTimeSalaried),
    }
}

fn letters_only(value: &str) -> String {
    value
        .chars()
        .filter(|ch| ch.is_ascii_alphabetic())
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}
