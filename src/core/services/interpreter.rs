//! Interpretation service - composes the individual rules into a report
//!
//! This is pure business logic with no I/O: the same input always produces
//! byte-identical output.

use std::fmt::Write as _;

use crate::core::models::{BloodGasReading, InputError, InterpretationResult, ReadingInput};

use super::{calculate_anion_gap, classify_acid_base_disorder, determine_blood_gas_type};

/// Placeholder shown when the anion gap cannot be calculated
const NOT_AVAILABLE: &str = "N/A";

/// Parse raw input and interpret it
///
/// Fails with an [`InputError`] if any mandatory field is missing or not
/// numeric. Nothing is computed in that case.
pub fn interpret(input: &ReadingInput) -> Result<InterpretationResult, InputError> {
    let reading = input.parse()?;
    Ok(interpret_reading(&reading))
}

/// Interpret an already-validated reading
#[must_use]
pub fn interpret_reading(reading: &BloodGasReading) -> InterpretationResult {
    let blood_gas_type = determine_blood_gas_type(reading.pao2, reading.pco2);
    let anion_gap = calculate_anion_gap(reading.na, reading.cl, Some(reading.hco3));
    let disorder = classify_acid_base_disorder(reading.ph, reading.pco2, reading.hco3);

    let mut report = String::new();
    let _ = writeln!(report, "{blood_gas_type}");
    report.push('\n');
    let _ = writeln!(report, "pH: {}", format_value(reading.ph));
    let _ = writeln!(report, "pCO2: {}", format_value(reading.pco2));
    let _ = writeln!(report, "HCO3: {}", format_value(reading.hco3));
    let _ = writeln!(report, "PaO2: {}", format_value(reading.pao2));
    let _ = writeln!(
        report,
        "Anion Gap: {}",
        anion_gap.map_or_else(|| NOT_AVAILABLE.to_string(), format_value)
    );
    report.push('\n');
    let _ = write!(report, "Suggestion: {}", disorder.suggestion());

    InterpretationResult {
        reading: *reading,
        blood_gas_type,
        anion_gap,
        disorder,
        report,
    }
}

/// Format a lab value in shortest round-trip form, keeping one decimal for
/// whole numbers (`40.0`, `7.4`, `12.5`)
#[must_use]
pub fn format_value(value: f64) -> String {
    format!("{value:?}")
}
