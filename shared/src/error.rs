//! Errors raised while building static lookup tables

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("Lookup table '{0}' is empty")]
    Empty(&'static str),

    #[error("Default entry '{name}' missing from table '{table}'")]
    MissingDefault { table: &'static str, name: String },

    #[error("Month {0} is not a valid month index")]
    InvalidMonth(u32),

    #[error("Month {month} is claimed by both {first} and {second}")]
    OverlappingMonth {
        month: u32,
        first: String,
        second: String,
    },

    #[error("Month {0} is not covered by any season")]
    UncoveredMonth(u32),

    #[error("Invalid range for {field}: min {min} > max {max}")]
    InvalidRange { field: String, min: i32, max: i32 },
}
