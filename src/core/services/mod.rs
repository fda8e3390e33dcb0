//! Business logic services
//!
//! Pure functions that operate on domain models. Apart from [`recorder`],
//! which talks to a store through its port trait, nothing here performs I/O.
//!
//! - [`anion_gap`] - Anion gap arithmetic
//! - [`blood_gas`] - Arterial vs venous determination
//! - [`acid_base`] - Acid-base disorder rules
//! - [`interpreter`] - Composes the rules and formats the report
//! - [`recorder`] - Saves and lists interpretation history

pub mod acid_base;
pub mod anion_gap;
pub mod blood_gas;
pub mod interpreter;
pub mod recorder;

pub use acid_base::classify_acid_base_disorder;
pub use anion_gap::calculate_anion_gap;
pub use blood_gas::determine_blood_gas_type;
pub use interpreter::{format_value, interpret, interpret_reading};
pub use recorder::{recent, record};
