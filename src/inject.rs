//! Injection loop: generate records one at a time and persist each
//! immediately.
//!
//! There is no transaction around the batch. When a write fails, the records
//! written before it stay in place; [`FailurePolicy`] decides whether the
//! loop stops there or carries on with the next record.

use crate::resolve::resolve_schema;
use anyhow::Context;
use clap::ValueEnum;
use content_core::Target;
use content_store::ContentStore;
use dummy_generator::DummyGenerator;
use std::fmt;
use tracing::{debug, error, info, warn};

/// What to do when persisting a record fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum FailurePolicy {
    /// Abort the batch and return the error
    #[default]
    Stop,
    /// Log the failure and move on to the next record
    Continue,
}

/// Options for a single injection run.
#[derive(Clone, Copy, Debug, Default)]
pub struct InjectOptions {
    pub on_error: FailurePolicy,
    /// Generate records without writing them
    pub dry_run: bool,
}

/// Outcome of an injection run.
#[derive(Debug, Clone, PartialEq)]
pub struct InjectReport {
    pub target: Target,
    /// Number of records requested
    pub requested: u64,
    /// Number of records generated
    pub generated: u64,
    /// Number of records persisted
    pub created: u64,
    /// Number of records whose write failed
    pub failed: u64,
    pub dry_run: bool,
}

impl InjectReport {
    fn new(target: Target, requested: u64, dry_run: bool) -> Self {
        Self {
            target,
            requested,
            generated: 0,
            created: 0,
            failed: 0,
            dry_run,
        }
    }
}

impl fmt::Display for InjectReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = self.target.kind;
        if self.dry_run {
            return write!(
                f,
                "[DRY-RUN] {} dummy {} would be injected into the {}: {}",
                self.generated,
                kind.record_plural(),
                kind.noun(),
                self.target.title
            );
        }

        write!(
            f,
            "{} dummy {} injected into the {}: {}",
            self.created,
            kind.record_plural(),
            kind.noun(),
            self.target.title
        )?;
        if self.failed > 0 {
            write!(f, " ({} of {} failed)", self.failed, self.requested)?;
        }
        Ok(())
    }
}

/// Inject `count` placeholder records into `target`.
///
/// The target's schema is resolved once, then each record is generated and
/// written before the next one is started. Slugs come from the generator's
/// running index (`dummy-entry-{i}` / `dummy-term-{i}`).
pub async fn inject<S>(
    store: &S,
    generator: &mut DummyGenerator,
    target: &Target,
    count: u64,
    options: InjectOptions,
) -> anyhow::Result<InjectReport>
where
    S: ContentStore + ?Sized,
{
    let kind = target.kind;
    let schema = resolve_schema(store, kind, &target.handle)
        .await
        .with_context(|| format!("Failed to resolve schema for {} '{}'", kind.noun(), target.handle))?;

    info!(
        "Injecting {} dummy {} into {} '{}' ({} fields, backend={})",
        count,
        kind.record_plural(),
        kind.noun(),
        target.handle,
        schema.len(),
        store.backend_name()
    );

    let mut report = InjectReport::new(target.clone(), count, options.dry_run);

    for record in generator.records(kind, &schema, count) {
        report.generated += 1;

        if options.dry_run {
            debug!("[DRY-RUN] {} {}", record.slug, record.data_json());
            continue;
        }

        match store.create_record(target, &record).await {
            Ok(()) => {
                report.created += 1;
                debug!("Created {}", record.slug);
            }
            Err(e) => match options.on_error {
                FailurePolicy::Stop => {
                    error!(
                        "Stopping after {} of {} {}: failed to create '{}'",
                        report.created,
                        count,
                        kind.record_plural(),
                        record.slug
                    );
                    return Err(anyhow::Error::new(e).context(format!(
                        "Failed to create '{}' in {} '{}' ({} of {} created before the failure)",
                        record.slug,
                        kind.noun(),
                        target.handle,
                        report.created,
                        count
                    )));
                }
                FailurePolicy::Continue => {
                    warn!("Failed to create '{}': {}", record.slug, e);
                    report.failed += 1;
                }
            },
        }
    }

    info!(
        "Finished {} '{}': {} created, {} failed",
        kind.noun(),
        target.handle,
        report.created,
        report.failed
    );

    Ok(report)
}
