//! Blood gas type determination

use crate::core::models::BloodGasType;

/// PaO2 must exceed this for an arterial sample (mmHg)
const ARTERIAL_MIN_PAO2: f64 = 75.0;

/// PaO2 must be below this for a venous sample (mmHg)
const VENOUS_MAX_PAO2: f64 = 50.0;

/// Normal pCO2 window, both ends inclusive (mmHg)
const PCO2_LOW: f64 = 35.0;
const PCO2_HIGH: f64 = 45.0;

/// Decide whether a sample is arterial or venous from its gas tensions
///
/// - Arterial: `pao2 > 75` and `35 <= pco2 <= 45`
/// - Venous: `pao2 < 50` and `pco2 > 45`
/// - Anything else is undetermined
#[must_use]
pub fn determine_blood_gas_type(pao2: f64, pco2: f64) -> BloodGasType {
    if pao2 > ARTERIAL_MIN_PAO2 && (PCO2_LOW..=PCO2_HIGH).contains(&pco2) {
        BloodGasType::Arterial
    } else if pao2 < VENOUS_MAX_PAO2 && pco2 > PCO2_HIGH {
        BloodGasType::Venous
    } else {
        BloodGasType::Undetermined
    }
}
