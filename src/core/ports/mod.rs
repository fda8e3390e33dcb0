//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundary between the pure interpretation logic
//! and the host's side features (persistence).
//!
//! Implementations live in the `adapters` module.

mod interpretation_store;

#[cfg(test)]
pub(crate) use interpretation_store::MockInterpretationStore;
pub use interpretation_store::InterpretationStore;
