//! Fixed sheet layout shared with downstream consumers.
//!
//! Every row carries a leading spacer cell followed by [`DATA_COLUMNS`]
//! data cells. Column order is part of the output contract.

use chrono::NaiveDate;

/// Number of data columns per person row (spacer column excluded).
pub const DATA_COLUMNS: usize = 23;

/// Name of the single worksheet in every workbook.
pub const SHEET_NAME: &str = "Worksheet";

/// Mail domain used for synthetic employee emails.
pub const EMAIL_DOMAIN: &str = "yopmail.com";

/// Header labels in output order.
pub const COLUMN_HEADERS: [&str; DATA_COLUMNS] = [
    "EE ID",
    "Last Name",
    "First Name",
    "Email",
    "Member Type",
    "SSN",
    "Date of Birth",
    "Age",
    "Gender",
    "Disabled",
    "Date of Hire",
    "Annual Household Income",
    "Class Name",
    "Address Line 1",
    "Apt/Floor # Line 2",
    "City",
    "Zip Code",
    "State",
    "Mailing Same as Home (yes/no)",
    "Paperless (yes/no)",
    "Contribution Start Date",
    "Current Group Plan Premium",
    "Renewal Group Plan Premium",
];

/// Column width hints in characters, starting at the spacer column.
///
/// Only the first 19 columns carry a hint; the rest use the reader default.
pub const COLUMN_WIDTHS: [u16; 19] = [
    2, 10, 15, 15, 30, 15, 15, 12, 5, 5, 5, 12, 15, 20, 20, 10, 15, 10, 15,
];

/// Mailing address shared by every row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticAddress {
    pub line1: &'static str,
    pub line2: &'static str,
    pub city: &'static str,
    pub zip: &'static str,
    pub state: &'static str,
}

pub const STATIC_ADDRESS: StaticAddress = StaticAddress {
    line1: "1 Main Street",
    line2: "",
    city: "Hartford",
    zip: "06106",
    state: "Connecticut",
};

/// Fixed hire date stamped on employee rows.
pub fn date_of_hire() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or_default()
}

/// Title row text for the given organisation.
pub fn title_text(presented_to: &str) -> String {
    format!("Presented to: {presented_to}")
}
