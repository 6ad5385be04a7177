//! Operario Dates - Portuguese-Brazilian date helpers.
//!
//! Robot inputs frequently carry dates as `Abr/2024`-style strings and
//! schedules are pinned to "the Nth business day of the month". This crate
//! converts between those forms and plain `dd/mm/yyyy` dates, with
//! Brazilian national holidays computed rather than tabulated.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod business;
pub mod months;

pub use business::{is_business_day, is_national_holiday, nth_business_day};
pub use months::{
    expand_month_name, first_day_of_month, last_day_of_month, month_name, month_number,
    year_and_month_name,
};

use thiserror::Error;

/// Errors from date conversion helpers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Input did not look like `Mes/AAAA`.
    #[error("invalid date '{0}': expected 'Mes/AAAA' (e.g. 'Abr/2024')")]
    InvalidFormat(String),

    /// Month abbreviation not recognized.
    #[error("unknown month abbreviation: '{0}'")]
    UnknownMonth(String),

    /// Month number outside 1-12.
    #[error("invalid month number: {0} (expected 1-12)")]
    InvalidMonthNumber(u32),

    /// No such calendar day (e.g. business day 25 of a month).
    #[error("month {month:02}/{year} has no business day {ordinal}")]
    NoSuchBusinessDay {
        /// Requested year.
        year: i32,
        /// Requested month.
        month: u32,
        /// Requested ordinal.
        ordinal: u32,
    },
}
