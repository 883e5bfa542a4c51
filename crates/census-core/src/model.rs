use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Requested household shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompositionPolicy {
    #[default]
    EmployeeOnly,
    EmployeeSpouse,
    EmployeeSpouseChild,
}

impl CompositionPolicy {
    pub const ALL: [CompositionPolicy; 3] = [
        CompositionPolicy::EmployeeOnly,
        CompositionPolicy::EmployeeSpouse,
        CompositionPolicy::EmployeeSpouseChild,
    ];

    /// Display label, e.g. `Employee + Spouse`.
    pub fn label(self) -> &'static str {
        match self {
            Self::EmployeeOnly => "Employee Only",
            Self::EmployeeSpouse => "Employee + Spouse",
            Self::EmployeeSpouseChild => "Employee + Spouse + Child",
        }
    }

    /// Stable identifier used in config files and CLI flags.
    pub fn id(self) -> &'static str {
        match self {
            Self::EmployeeOnly => "employee-only",
            Self::EmployeeSpouse => "employee-spouse",
            Self::EmployeeSpouseChild => "employee-spouse-child",
        }
    }

    pub fn includes_spouse(self) -> bool {
        matches!(self, Self::EmployeeSpouse | Self::EmployeeSpouseChild)
    }

    pub fn includes_children(self) -> bool {
        matches!(self, Self::EmployeeSpouseChild)
    }
}

impl fmt::Display for CompositionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CompositionPolicy {
    type Err = Error;

    /// Accepts either the identifier or the display label, case-insensitively.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim();
        Self::ALL
            .into_iter()
            .find(|policy| {
                policy.id().eq_ignore_ascii_case(needle)
                    || policy.label().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| Error::InvalidPolicy(value.to_string()))
    }
}

/// Member type of a person row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Employee,
    Spouse,
    Child,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Self::Employee => "Employee",
            Self::Spouse => "Spouse",
            Self::Child => "Child",
        }
    }

    /// Inclusive age range a birthdate is drawn from.
    pub fn age_range(self) -> RangeInclusive<u32> {
        match self {
            Self::Employee | Self::Spouse => 22..=60,
            Self::Child => 0..=25,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    /// Single-letter code written to the sheet.
    pub fn code(self) -> &'static str {
        match self {
            Self::Female => "F",
            Self::Male => "M",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeClass {
    FullTimeSalaried,
    FullTimeHourly,
    PartTimeSalaried,
    PartTimeHourly,
}

impl EmployeeClass {
    pub const ALL: [EmployeeClass; 4] = [
        EmployeeClass::FullTimeSalaried,
        EmployeeClass::FullTimeHourly,
        EmployeeClass::PartTimeSalaried,
        EmployeeClass::PartTimeHourly,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::FullTimeSalaried => "Full-Time Salaried",
            Self::FullTimeHourly => "Full-Time Hourly",
            Self::PartTimeSalaried => "Part-Time Salaried",
            Self::PartTimeHourly => "Part-Time Hourly",
        }
    }
}

/// Fields populated only on employee rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employment {
    pub date_of_hire: NaiveDate,
    pub annual_income: u32,
    pub class: EmployeeClass,
}

/// One generated person row.
///
/// Static columns (address, disabled flag, mailing and paperless answers,
/// premium placeholders) are not stored; they are filled in when the record
/// is projected onto the sheet layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonRecord {
    pub employee_id: String,
    pub role: Role,
    pub last_name: String,
    pub first_name: String,
    /// Empty for every role except [`Role::Employee`].
    pub email: String,
    pub ssn: String,
    pub date_of_birth: NaiveDate,
    pub age: u32,
    pub gender: Gender,
    pub employment: Option<Employment>,
}
