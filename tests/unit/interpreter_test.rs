//! Tests for the interpretation rules
//!
//! Covers the documented boundary cases of each rule and the composed
//! `interpret` operation.

use abg_analyzer::core::models::{
    AcidBaseDisorder, BloodGasReading, BloodGasType, InputError, ReadingInput,
};
use abg_analyzer::core::services::{
    calculate_anion_gap, classify_acid_base_disorder, determine_blood_gas_type, interpret,
    interpret_reading,
};

// =============================================================================
// Anion Gap
// =============================================================================

#[test]
fn anion_gap_with_chloride() {
    assert_eq!(calculate_anion_gap(Some(140.0), Some(100.0), Some(24.0)), Some(16.0));
}

#[test]
fn anion_gap_without_chloride() {
    assert_eq!(calculate_anion_gap(Some(140.0), None, Some(24.0)), Some(116.0));
}

#[test]
fn anion_gap_absent_without_sodium_or_bicarbonate() {
    assert_eq!(calculate_anion_gap(None, None, Some(24.0)), None);
    assert_eq!(calculate_anion_gap(Some(140.0), None, None), None);
    assert_eq!(calculate_anion_gap(None, Some(100.0), None), None);
}

// =============================================================================
// Blood Gas Type
// =============================================================================

#[test]
fn blood_gas_type_boundaries() {
    assert_eq!(determine_blood_gas_type(76.0, 40.0), BloodGasType::Arterial);
    assert_eq!(determine_blood_gas_type(75.0, 40.0), BloodGasType::Undetermined);
    assert_eq!(determine_blood_gas_type(40.0, 50.0), BloodGasType::Venous);
    assert_eq!(determine_blood_gas_type(60.0, 50.0), BloodGasType::Undetermined);
}

#[test]
fn blood_gas_type_descriptions() {
    assert_eq!(BloodGasType::Arterial.to_string(), "Arterial Blood Gas (ABG)");
    assert_eq!(BloodGasType::Venous.to_string(), "Venous Blood Gas (VBG)");
    assert_eq!(BloodGasType::Undetermined.to_string(), "Unable to determine blood gas type.");
}

// =============================================================================
// Acid-Base Classification
// =============================================================================

#[test]
fn classification_labels() {
    assert_eq!(classify_acid_base_disorder(7.2, 50.0, 24.0).label(), "Respiratory Acidosis");
    assert_eq!(classify_acid_base_disorder(7.2, 40.0, 18.0).label(), "Metabolic Acidosis");
    assert_eq!(classify_acid_base_disorder(7.5, 30.0, 24.0).label(), "Respiratory Alkalosis");
    assert_eq!(classify_acid_base_disorder(7.5, 40.0, 30.0).label(), "Metabolic Alkalosis");
    assert_eq!(classify_acid_base_disorder(7.40, 40.0, 24.0).label(), "within normal ranges");
}

#[test]
fn acidemia_with_normal_gases_falls_through() {
    assert_eq!(
        classify_acid_base_disorder(7.30, 40.0, 28.0),
        AcidBaseDisorder::WithinNormalRanges
    );
}

#[test]
fn alkalemia_with_normal_gases_falls_through() {
    assert_eq!(
        classify_acid_base_disorder(7.50, 40.0, 20.0),
        AcidBaseDisorder::WithinNormalRanges
    );
}

#[test]
fn rationale_mentions_causes() {
    assert!(AcidBaseDisorder::MetabolicAcidosis.rationale().contains("DKA"));
    assert!(AcidBaseDisorder::RespiratoryAlkalosis.rationale().contains("high altitude"));
    assert!(AcidBaseDisorder::WithinNormalRanges.rationale().is_empty());
}

// =============================================================================
// Composed Interpretation
// =============================================================================

#[test]
fn interpret_full_panel() {
    let input = ReadingInput::new("7.2", "40", "18", "90").with_na("140").with_cl("100");
    let result = interpret(&input).unwrap();

    assert_eq!(result.blood_gas_type, BloodGasType::Arterial);
    assert_eq!(result.disorder, AcidBaseDisorder::MetabolicAcidosis);
    assert_eq!(result.anion_gap, Some(22.0));
    assert_eq!(
        result.report,
        "Arterial Blood Gas (ABG)\n\npH: 7.2\npCO2: 40.0\nHCO3: 18.0\nPaO2: 90.0\n\
         Anion Gap: 22.0\n\nSuggestion: Metabolic Acidosis: Possible causes include DKA, \
         renal failure, or sepsis."
    );
}

#[test]
fn interpret_echoes_reading() {
    let input = ReadingInput::new("7.4", "40", "24", "95").with_cl("104");
    let result = interpret(&input).unwrap();

    assert_eq!(result.reading, BloodGasReading::new(7.4, 40.0, 24.0, 95.0).with_cl(104.0));
    // Chloride alone is not enough for an anion gap
    assert_eq!(result.anion_gap, None);
}

#[test]
fn interpret_each_mandatory_field_is_required() {
    let fields = ["pH", "pCO2", "HCO3", "PaO2"];
    for (idx, field) in fields.iter().enumerate() {
        let mut values = ["7.4", "40", "24", "95"];
        values[idx] = "n/a";
        let input = ReadingInput::new(values[0], values[1], values[2], values[3]);
        match interpret(&input) {
            Err(InputError::NotNumeric { field: f, value }) => {
                assert_eq!(f, *field);
                assert_eq!(value, "n/a");
            },
            other => panic!("expected NotNumeric for {field}, got {other:?}"),
        }
    }
}

#[test]
fn interpret_missing_field() {
    let input = ReadingInput {
        pco2: Some("40".into()),
        hco3: Some("24".into()),
        pao2: Some("95".into()),
        ..ReadingInput::default()
    };
    assert_eq!(interpret(&input), Err(InputError::Missing { field: "pH" }));
}

#[test]
fn interpret_ignores_bad_optional_fields() {
    let input = ReadingInput::new("7.4", "40", "24", "95").with_na("??").with_cl("--");
    let result = interpret(&input).unwrap();
    assert_eq!(result.anion_gap, None);
    assert!(result.report.contains("Anion Gap: N/A"));
}

#[test]
fn interpret_reading_matches_interpret() {
    let input = ReadingInput::new("7.5", "30", "24", "80").with_na("140");
    let reading = input.parse().unwrap();
    assert_eq!(interpret(&input).unwrap(), interpret_reading(&reading));
}
