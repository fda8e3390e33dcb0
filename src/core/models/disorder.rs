//! Acid-base disorder classification
//!
//! Each variant carries a short label and the likely causes shown to the
//! user. [`AcidBaseDisorder::suggestion`] joins them into the sentence that
//! ends a report.

use serde::{Deserialize, Serialize};

/// Primary acid-base disorder suggested by a reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcidBaseDisorder {
    /// Acidemia driven by CO2 retention
    RespiratoryAcidosis,
    /// Acidemia driven by bicarbonate loss
    MetabolicAcidosis,
    /// Alkalemia driven by CO2 loss
    RespiratoryAlkalosis,
    /// Alkalemia driven by bicarbonate gain
    MetabolicAlkalosis,
    /// No specific disorder identified
    WithinNormalRanges,
}

impl AcidBaseDisorder {
    /// Short name of the classification
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::RespiratoryAcidosis => "Respiratory Acidosis",
            Self::MetabolicAcidosis => "Metabolic Acidosis",
            Self::RespiratoryAlkalosis => "Respiratory Alkalosis",
            Self::MetabolicAlkalosis => "Metabolic Alkalosis",
            Self::WithinNormalRanges => "within normal ranges",
        }
    }

    /// Likely causes, empty for [`Self::WithinNormalRanges`]
    #[must_use]
    pub const fn rationale(self) -> &'static str {
        match self {
            Self::RespiratoryAcidosis => "Consider COPD, drug overdose, or hypoventilation.",
            Self::MetabolicAcidosis => "Possible causes include DKA, renal failure, or sepsis.",
            Self::RespiratoryAlkalosis => {
                "Common causes are hyperventilation, anxiety, or high altitude."
            },
            Self::MetabolicAlkalosis => {
                "Possible due to vomiting, diuretics, or excessive antacid use."
            },
            Self::WithinNormalRanges => "",
        }
    }

    /// Full suggestion sentence as displayed in a report
    #[must_use]
    pub fn suggestion(self) -> String {
        match self {
            Self::WithinNormalRanges => "ABG appears within normal ranges.".to_string(),
            _ => format!("{}: {}", self.label(), self.rationale()),
        }
    }

    /// Whether a specific disorder was identified
    #[must_use]
    pub const fn is_disorder(self) -> bool {
        !matches!(self, Self::WithinNormalRanges)
    }
}

impl std::fmt::Display for AcidBaseDisorder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
