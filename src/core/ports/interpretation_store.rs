//! Interpretation store port
//!
//! Defines the interface for persisting interpretation history.

use super::super::models::SavedInterpretation;

/// Storage backend for saved interpretations
///
/// Implementations decide where and how records are kept. Records are
/// returned in the order they were appended.
#[cfg_attr(test, mockall::automock)]
pub trait InterpretationStore: Send + Sync {
    /// Append one interpretation to the history
    fn append(&self, record: &SavedInterpretation) -> anyhow::Result<()>;

    /// Load every saved interpretation, oldest first
    fn load_all(&self) -> anyhow::Result<Vec<SavedInterpretation>>;
}
