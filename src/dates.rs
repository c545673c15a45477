// src/dates.rs
//! Calendar arithmetic for time-to-expiry
//!
//! Year fractions use a fixed ACT/365 style convention:
//! ```text
//! t = (expiry - value) / DAYS_IN_YEAR
//! ```
//! where the numerator is a whole number of calendar days.

use chrono::NaiveDate;

/// Calendar days per year used for every year fraction in the crate
pub const DAYS_IN_YEAR: f64 = 365.0;

/// Signed number of calendar days from `start` to `end`
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    end.signed_duration_since(start).num_days()
}

/// Year fraction from `start` to `end`; negative when `end` precedes `start`
pub fn year_fraction(start: NaiveDate, end: NaiveDate) -> f64 {
    days_between(start, end) as f64 / DAYS_IN_YEAR
}
