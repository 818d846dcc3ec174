//! Interactive prompts for choosing what to inject.
//!
//! Each function takes the value given on the command line, if any, and only
//! asks the user when it is missing.

use anyhow::bail;
use content_core::{Target, TargetKind};
use dialoguer::{theme::ColorfulTheme, Input, Select};

/// Number of records offered when the count is prompted for.
pub const DEFAULT_COUNT: u64 = 10;

/// Choose the target kind.
///
/// # Errors
/// when the selection cannot be shown
pub fn select_kind(kind: Option<TargetKind>) -> anyhow::Result<TargetKind> {
    if let Some(kind) = kind {
        return Ok(kind);
    }

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("What do you want to inject data into?")
        .default(0)
        .items(&TargetKind::ALL[..])
        .interact()?;
    Ok(TargetKind::ALL
        .get(selection)
        .copied()
        .unwrap_or(TargetKind::Collection))
}

/// Choose one of `targets`, all of the same kind.
///
/// A handle given on the command line must name one of the targets.
///
/// # Errors
/// when the handle is not eligible or the selection cannot be shown
pub fn select_target(
    kind: TargetKind,
    targets: &[Target],
    handle: Option<&str>,
) -> anyhow::Result<Target> {
    if let Some(handle) = handle {
        return find_target(kind, targets, handle);
    }

    let handles: Vec<&str> = targets.iter().map(|t| t.handle.as_str()).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Select a {}", kind.noun()))
        .default(0)
        .items(&handles[..])
        .interact()?;

    match targets.get(selection) {
        Some(target) => Ok(target.clone()),
        None => bail!("No {} selected.", kind.noun()),
    }
}

/// Find the target named `handle`.
pub fn find_target(kind: TargetKind, targets: &[Target], handle: &str) -> anyhow::Result<Target> {
    if let Some(target) = targets.iter().find(|t| t.handle == handle) {
        return Ok(target.clone());
    }

    let valid: Vec<&str> = targets.iter().map(|t| t.handle.as_str()).collect();
    bail!(
        "Unknown {} '{}'. Available {}: {}",
        kind.noun(),
        handle,
        kind.plural(),
        valid.join(", ")
    )
}

/// Question asked for the record count.
pub fn count_prompt(kind: TargetKind) -> &'static str {
    match kind {
        TargetKind::Collection => "How many records do you want to inject?",
        TargetKind::Taxonomy => "How many terms do you want to inject?",
    }
}

/// Ask how many records to create.
///
/// # Errors
/// when the input cannot be shown
pub fn ask_count(kind: TargetKind, count: Option<u64>) -> anyhow::Result<u64> {
    if let Some(count) = count {
        return Ok(count);
    }

    let count = Input::<u64>::with_theme(&ColorfulTheme::default())
        .with_prompt(count_prompt(kind))
        .default(DEFAULT_COUNT)
        .interact_text()?;
    Ok(count)
}
