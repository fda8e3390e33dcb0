//! Domain models for abg-analyzer
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`BloodGasReading`] - A parsed blood gas panel
//! - [`ReadingInput`] - The same panel as raw text, before validation
//! - [`BloodGasType`] - Arterial, venous or undetermined
//! - [`AcidBaseDisorder`] - Suggested primary disorder with likely causes
//! - [`InterpretationResult`] - Everything an interpretation produces

mod blood_gas_type;
mod disorder;
mod interpretation;
mod reading;

pub use blood_gas_type::BloodGasType;
pub use disorder::AcidBaseDisorder;
pub use interpretation::{InterpretationResult, SavedInterpretation};
pub use reading::{BloodGasReading, InputError, ReadingInput};
