//! Blood gas sample type

use serde::{Deserialize, Serialize};

/// Whether a sample looks arterial, venous, or neither
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BloodGasType {
    /// Arterial blood gas (ABG)
    Arterial,
    /// Venous blood gas (VBG)
    Venous,
    /// Values do not fit either pattern
    Undetermined,
}

impl BloodGasType {
    /// Report heading for this type
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Arterial => "Arterial Blood Gas (ABG)",
            Self::Venous => "Venous Blood Gas (VBG)",
            Self::Undetermined => "Unable to determine blood gas type.",
        }
    }
}

impl std::fmt::Display for BloodGasType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}
