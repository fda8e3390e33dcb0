//! Acid-base disorder classification
//!
//! The rules are evaluated top to bottom and the first match wins:
//!
//! 1. Acidemia (`ph < 7.35`): high pCO2 means respiratory acidosis, otherwise
//!    low HCO3 means metabolic acidosis.
//! 2. Alkalemia (`ph > 7.45`): low pCO2 means respiratory alkalosis, otherwise
//!    high HCO3 means metabolic alkalosis.
//! 3. Everything else, including acidemia or alkalemia that matches neither
//!    sub-rule, is reported as within normal ranges.

use crate::core::models::AcidBaseDisorder;

const PH_LOW: f64 = 7.35;
const PH_HIGH: f64 = 7.45;
const PCO2_LOW: f64 = 35.0;
const PCO2_HIGH: f64 = 45.0;
const HCO3_LOW: f64 = 22.0;
const HCO3_HIGH: f64 = 26.0;

/// Classify the primary acid-base disorder
#[must_use]
pub fn classify_acid_base_disorder(ph: f64, pco2: f64, hco3: f64) -> AcidBaseDisorder {
    let disorder = if ph < PH_LOW {
        if pco2 > PCO2_HIGH {
            AcidBaseDisorder::RespiratoryAcidosis
        } else if hco3 < HCO3_LOW {
            AcidBaseDisorder::MetabolicAcidosis
        } else {
            AcidBaseDisorder::WithinNormalRanges
        }
    } else if ph > PH_HIGH {
        if pco2 < PCO2_LOW {
            AcidBaseDisorder::RespiratoryAlkalosis
        } else if hco3 > HCO3_HIGH {
            AcidBaseDisorder::MetabolicAlkalosis
        } else {
            AcidBaseDisorder::WithinNormalRanges
        }
    } else {
        AcidBaseDisorder::WithinNormalRanges
    };

    log::debug!("pH {ph}, pCO2 {pco2}, HCO3 {hco3} classified as {disorder}");
    disorder
}
