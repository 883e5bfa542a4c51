use chrono::NaiveDate;
use rand::{Rng, RngCore};
use tracing::debug;

use census_core::{Cell, CompositionPolicy, PersonRecord, Role, STATIC_ADDRESS};

use crate::errors::GenerationError;
use crate::generators::{
    EmployeeIdPool, compute_age, employee_email, format_date, generate_ssn, sample_birthdate,
    sample_employment, sample_first_name, sample_gender, sample_last_name,
};

/// Identity shared by every member of one household.
#[derive(Debug, Clone, Copy)]
pub struct HouseholdContext<'a> {
    pub employee_id: &'a str,
    pub last_name: &'a str,
    /// Generation date; ages are computed against it.
    pub today: NaiveDate,
    pub max_attempts: u32,
}

/// One employee and their dependents, in output order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Household {
    pub employee_id: String,
    pub members: Vec<PersonRecord>,
}

/// Build one person row.
///
/// Employees keep the supplied `first_name` (sampled when `None`) and carry
/// an email plus employment fields. Other roles always get a freshly sampled
/// first name and inherit only the surname.
pub fn build_row(
    ctx: &HouseholdContext<'_>,
    role: Role,
    first_name: Option<&str>,
    rng: &mut dyn RngCore,
) -> Result<PersonRecord, GenerationError> {
    let is_employee = role == Role::Employee;

    let date_of_birth = sample_birthdate(rng, role.age_range(), ctx.today);
    let age = compute_age(date_of_birth, ctx.today);

    let first_name = match (is_employee, first_name) {
        (true, Some(name)) => name.to_string(),
        _ => sample_first_name(rng),
    };
    let email = if is_employee {
        employee_email(&first_name, ctx.last_name, rng)
    } else {
        String::new()
    };

    let ssn = generate_ssn(rng, ctx.max_attempts)?;
    let gender = sample_gender(rng);
    let employment = is_employee.then(|| sample_employment(rng));

    Ok(PersonRecord {
        employee_id: ctx.employee_id.to_string(),
        role,
        last_name: ctx.last_name.to_string(),
        first_name,
        email,
        ssn,
        date_of_birth,
        age,
        gender,
        employment,
    })
}

/// Build one household: the employee, a spouse when the policy has one,
/// then one or two children when the policy has them.
pub fn build_household(
    ids: &mut EmployeeIdPool,
    policy: CompositionPolicy,
    today: NaiveDate,
    max_attempts: u32,
    rng: &mut dyn RngCore,
) -> Result<Household, GenerationError> {
    let employee_id = ids.issue(rng, max_attempts)?;
    let last_name = sample_last_name(rng);
    let first_name = sample_first_name(rng);

    let ctx = HouseholdContext {
        employee_id: &employee_id,
        last_name: &last_name,
        today,
        max_attempts,
    };

    let mut members = vec![build_row(&ctx, Role::Employee, Some(&first_name), rng)?];

    if policy.includes_spouse() {
        members.push(build_row(&ctx, Role::Spouse, None, rng)?);
    }

    if policy.includes_children() {
        let child_count = rng.random_range(1..=2_u32);
        for _ in 0..child_count {
            members.push(build_row(&ctx, Role::Child, None, rng)?);
        }
    }

    debug!(
        employee_id = %employee_id,
        policy = %policy,
        members = members.len(),
        "household generated"
    );

    Ok(Household {
        employee_id,
        members,
    })
}

/// Project a record onto the sheet layout: spacer cell plus the data columns.
pub fn row_cells(record: &PersonRecord) -> Vec<Cell> {
    let employment = record.employment.as_ref();

    vec![
        Cell::Empty,
        Cell::text(record.employee_id.as_str()),
        Cell::text(record.last_name.as_str()),
        Cell::text(record.first_name.as_str()),
        Cell::text(record.email.as_str()),
        Cell::text(record.role.label()),
        Cell::text(record.ssn.as_str()),
        Cell::text(format_date(record.date_of_birth)),
        Cell::Int(i64::from(record.age)),
        Cell::text(record.gender.code()),
        Cell::text("N"),
        employment
            .map(|e| Cell::text(format_date(e.date_of_hire)))
            .unwrap_or(Cell::Empty),
        employment
            .map(|e| Cell::Int(i64::from(e.annual_income)))
            .unwrap_or(Cell::Empty),
        employment
            .map(|e| Cell::text(e.class.label()))
            .unwrap_or(Cell::Empty),
        Cell::text(STATIC_ADDRESS.line1),
        Cell::text(STATIC_ADDRESS.line2),
        Cell::text(STATIC_ADDRESS.city),
        Cell::text(STATIC_ADDRESS.zip),
        Cell::text(STATIC_ADDRESS.state),
        Cell::text("yes"),
        Cell::text("no"),
        // Contribution start date, current and renewal premiums: reserved.
        Cell::Empty,
        Cell::Empty,
        Cell::Empty,
    ]
}
