//! Numeric and boolean generators.

use content_core::DummyValue;
use rand::Rng;

/// Smallest value produced for `number` fields.
pub const NUMBER_MIN: i64 = 1;

/// Largest value produced for `number` fields.
pub const NUMBER_MAX: i64 = 100;

/// Generate a random integer in `[NUMBER_MIN, NUMBER_MAX]`.
pub fn generate_number<R: Rng>(rng: &mut R) -> DummyValue {
    DummyValue::Int(rng.random_range(NUMBER_MIN..=NUMBER_MAX))
}

/// Generate a fair random boolean.
pub fn generate_boolean<R: Rng>(rng: &mut R) -> DummyValue {
    DummyValue::Bool(rng.random_bool(0.5))
}
