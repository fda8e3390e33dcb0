//! Record service - saves interpretations through a store port

use chrono::Utc;

use crate::core::models::{InterpretationResult, SavedInterpretation};
use crate::core::ports::InterpretationStore;

/// Stamp a result with the current time and append it to the store
pub fn record(
    store: &dyn InterpretationStore,
    result: &InterpretationResult,
) -> anyhow::Result<SavedInterpretation> {
    let saved = SavedInterpretation::new(result.clone(), Utc::now());
    store.append(&saved)?;
    log::info!("Saved interpretation ({})", result.disorder);
    Ok(saved)
}

/// Load the most recent `limit` interpretations (all when `None`), oldest first
pub fn recent(
    store: &dyn InterpretationStore,
    limit: Option<usize>,
) -> anyhow::Result<Vec<SavedInterpretation>> {
    let mut all = store.load_all()?;
    if let Some(limit) = limit
        && all.len() > limit
    {
        all.drain(..all.len() - limit);
    }
    Ok(all)
}
