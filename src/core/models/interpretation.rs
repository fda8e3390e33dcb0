//! Interpretation results
//!
//! - [`InterpretationResult`] - the outcome of interpreting one reading
//! - [`SavedInterpretation`] - a result stamped with the time it was recorded

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AcidBaseDisorder, BloodGasReading, BloodGasType};

/// Outcome of interpreting a single [`BloodGasReading`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterpretationResult {
    /// The reading that was interpreted
    pub reading: BloodGasReading,
    /// Arterial, venous or undetermined
    pub blood_gas_type: BloodGasType,
    /// Anion gap, present iff sodium was supplied
    pub anion_gap: Option<f64>,
    /// Suggested primary disorder
    pub disorder: AcidBaseDisorder,
    /// Plain-text report for display
    pub report: String,
}

impl InterpretationResult {
    /// Suggestion sentence for the classified disorder
    #[must_use]
    pub fn suggestion(&self) -> String {
        self.disorder.suggestion()
    }
}

/// An interpretation persisted to the results history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedInterpretation {
    /// When the interpretation was recorded (UTC)
    pub recorded_at: DateTime<Utc>,
    /// The interpretation itself
    #[serde(flatten)]
    pub result: InterpretationResult,
}

impl SavedInterpretation {
    /// Stamp a result with the given time
    #[must_use]
    pub const fn new(result: InterpretationResult, recorded_at: DateTime<Utc>) -> Self {
        Self {
            recorded_at,
            result,
        }
    }
}
