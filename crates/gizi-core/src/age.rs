//! Age derivation from date of birth and measurement date.
//!
//! Ages are whole completed units: a month (or year) only counts once the
//! birth day (or birth month/day) has been reached in the measurement
//! calendar. Negative spans clamp to zero.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::category::Category;

/// Completed months between `birth` and `at`.
pub fn age_in_months(birth: Date, at: Date) -> u32 {
    let mut months = (i32::from(at.year()) - i32::from(birth.year())) * 12
        + (i32::from(at.month()) - i32::from(birth.month()));

    if at.day() < birth.day() {
        months -= 1;
    }

    months.max(0) as u32
}

/// Completed years between `birth` and `at`.
pub fn age_in_years(birth: Date, at: Date) -> u32 {
    let mut years = i32::from(at.year()) - i32::from(birth.year());

    if at.month() < birth.month() || (at.month() == birth.month() && at.day() < birth.day()) {
        years -= 1;
    }

    years.max(0) as u32
}

/// Age of a subject on the day of a measurement, with the category it
/// places them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AgeAtMeasurement {
    pub months: u32,
    pub years: u32,
    pub category: Category,
}

impl AgeAtMeasurement {
    pub fn between(birth: Date, at: Date) -> Self {
        let months = age_in_months(birth, at);
        Self {
            months,
            years: age_in_years(birth, at),
            category: Category::from_age_months(months),
        }
    }
}
