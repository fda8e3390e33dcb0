//! Anion gap calculation

/// Calculate the anion gap
///
/// Returns `None` when sodium or bicarbonate is missing. When chloride is
/// missing it contributes zero, so the result is `na - hco3`; callers that
/// need the standard formula must supply chloride.
#[must_use]
pub fn calculate_anion_gap(na: Option<f64>, cl: Option<f64>, hco3: Option<f64>) -> Option<f64> {
    let na = na?;
    let hco3 = hco3?;
    Some(cl.map_or(na - hco3, |cl| na - (cl + hco3)))
}
