//! File-based interpretation storage
//!
//! Implements `InterpretationStore` using a JSON Lines file.

mod store;

pub use store::JsonlInterpretationStore;
