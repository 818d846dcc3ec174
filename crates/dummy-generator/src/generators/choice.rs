//! Option pickers for `select` and `checkboxes` fields.

use content_core::DummyValue;
use rand::Rng;

/// Number of distinct options a choice field draws from.
pub const OPTION_COUNT: u32 = 5;

fn pick_option<R: Rng>(rng: &mut R) -> DummyValue {
    DummyValue::String(format!("option_{}", rng.random_range(1..=OPTION_COUNT)))
}

/// A single option name, `option_1` to `option_5`.
pub fn generate_select<R: Rng>(rng: &mut R) -> DummyValue {
    pick_option(rng)
}

/// A one-element list holding a single option name.
pub fn generate_checkboxes<R: Rng>(rng: &mut R) -> DummyValue {
    DummyValue::Array(vec![pick_option(rng)])
}
