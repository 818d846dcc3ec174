//! Record generator that turns a schema into placeholder records.

use crate::generators::generate_fields;
use chrono::NaiveDate;
use content_core::{DummyRecord, Schema, TargetKind};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Generator that produces placeholder records.
///
/// Randomized values come from a seeded RNG, and dates are computed relative
/// to a fixed reference day, so the same seed, day and schema always give the
/// same records.
pub struct DummyGenerator {
    /// Seeded random number generator for reproducibility
    rng: StdRng,
    /// Reference date for `date` fields
    today: NaiveDate,
    /// Index of the next record (drives the slug suffix)
    index: u64,
}

impl DummyGenerator {
    /// Create a new generator with the given seed and reference date.
    pub fn new(seed: u64, today: NaiveDate) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            today,
            index: 0,
        }
    }

    /// Set the index of the first record.
    ///
    /// Useful when appending to a target that already holds an earlier batch.
    pub fn with_start_index(mut self, index: u64) -> Self {
        self.index = index;
        self
    }

    /// Get the index of the next record.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Build one record for `schema` and advance the index.
    pub fn next_record(&mut self, kind: TargetKind, schema: &Schema) -> DummyRecord {
        let index = self.index;
        let fields = generate_fields(schema.fields(), &mut self.rng, self.today);
        self.index += 1;
        DummyRecord::new(index, kind.slug(index), fields)
    }

    /// Lazily generate `count` records for `schema`.
    pub fn records<'a>(
        &'a mut self,
        kind: TargetKind,
        schema: &'a Schema,
        count: u64,
    ) -> RecordIterator<'a> {
        RecordIterator {
            generator: self,
            kind,
            schema,
            remaining: count,
        }
    }
}

/// Iterator that lazily generates records.
pub struct RecordIterator<'a> {
    generator: &'a mut DummyGenerator,
    kind: TargetKind,
    schema: &'a Schema,
    remaining: u64,
}

impl Iterator for RecordIterator<'_> {
    type Item = DummyRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.next_record(self.kind, self.schema))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RecordIterator<'_> {}
