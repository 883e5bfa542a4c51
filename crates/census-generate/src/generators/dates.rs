use std::ops::RangeInclusive;

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime};
use rand::{Rng, RngCore};

/// Completed years between `birth` and `as_of`.
///
/// One year is subtracted when the `(month, day)` of `as_of` falls before the
/// birthday. Returns `0` for birthdates after `as_of`.
pub fn compute_age(birth: NaiveDate, as_of: NaiveDate) -> u32 {
    let mut age = as_of.year() - birth.year();
    if (as_of.month(), as_of.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    u32::try_from(age).unwrap_or(0)
}

/// Sample a birthdate whose age as of `today` lies within `ages`.
///
/// Dates are uniform over the span from the day after the `max + 1`th
/// birthday cutoff up to the `min`th one.
pub fn sample_birthdate(
    rng: &mut dyn RngCore,
    ages: RangeInclusive<u32>,
    today: NaiveDate,
) -> NaiveDate {
    let latest = years_before(today, *ages.start());
    let earliest = years_before(today, ages.end().saturating_add(1))
        .checked_add_days(Days::new(1))
        .unwrap_or(latest);

    let span = (latest - earliest).num_days().max(0) as u64;
    let offset = rng.random_range(0..=span);
    earliest
        .checked_add_days(Days::new(offset))
        .unwrap_or(latest)
}

/// `MM/DD/YYYY`, zero-padded.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%m/%d/%Y").to_string()
}

/// `MMDDYYYYhhmm`, zero-padded; used in artifact file names.
pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format("%m%d%Y%H%M").to_string()
}

fn years_before(date: NaiveDate, years: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(years.saturating_mul(12)))
        .unwrap_or(date)
}
