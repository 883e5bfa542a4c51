//! Core contracts and helpers for census generation.
//!
//! This crate defines the household/person model, the fixed sheet layout,
//! and the clamped generation request shared by the generator and the CLI.

pub mod error;
pub mod layout;
pub mod model;
pub mod request;
pub mod table;

pub use error::{Error, Result};
pub use layout::{
    COLUMN_HEADERS, COLUMN_WIDTHS, DATA_COLUMNS, EMAIL_DOMAIN, SHEET_NAME, STATIC_ADDRESS,
    StaticAddress, date_of_hire, title_text,
};
pub use model::{CompositionPolicy, EmployeeClass, Employment, Gender, PersonRecord, Role};
pub use request::{FILES_RANGE, GenerationRequest, HOUSEHOLDS_RANGE, clamp_count, parse_count};
pub use table::{Cell, CensusTable};

/// Default organisation shown in the title row.
pub const DEFAULT_PRESENTED_TO: &str = "Apex Global Solutions";
