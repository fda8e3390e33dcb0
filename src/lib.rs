//! abg-analyzer - Arterial and venous blood gas interpretation
//!
//! This library provides the interpretation core (anion gap, blood gas type
//! and acid-base disorder classification) together with the pieces a host
//! needs around it: output rendering, configuration and a results history.
//!
//! # Examples
//!
//! ```
//! use abg_analyzer::core::models::{AcidBaseDisorder, BloodGasType, ReadingInput};
//! use abg_analyzer::core::services::interpret;
//!
//! let input = ReadingInput::new("7.2", "50", "24", "80").with_na("140").with_cl("104");
//! let result = interpret(&input).unwrap();
//!
//! assert_eq!(result.disorder, AcidBaseDisorder::RespiratoryAcidosis);
//! assert_eq!(result.blood_gas_type, BloodGasType::Undetermined);
//! assert_eq!(result.anion_gap, Some(12.0));
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;
