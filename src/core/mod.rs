//! Core domain logic for abg-analyzer
//!
//! This module contains the interpretation rules and the types that flow
//! through them. Nothing here renders output or reads configuration.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (readings, gas type, disorder, results)
//! - `services/` - Interpretation rules and history orchestration
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
