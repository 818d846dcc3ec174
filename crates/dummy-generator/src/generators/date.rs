//! Date generators.

use chrono::{Days, NaiveDate};
use content_core::DummyValue;
use rand::Rng;

/// Furthest a generated date reaches into the past, in days.
pub const MAX_DAYS_AGO: u64 = 365;

/// Generate a date between 1 and `MAX_DAYS_AGO` days before `today`.
pub fn generate_past_date<R: Rng>(rng: &mut R, today: NaiveDate) -> DummyValue {
    let days_ago = rng.random_range(1..=MAX_DAYS_AGO);
    let date = today
        .checked_sub_days(Days::new(days_ago))
        .unwrap_or(NaiveDate::MIN);
    DummyValue::Date(date)
}
