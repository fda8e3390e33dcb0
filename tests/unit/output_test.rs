//! Tests for the Output module
//!
//! Output provides structured result types that can be rendered as either
//! human-readable text or machine-parseable JSON.

use abg_analyzer::config::Theme;
use abg_analyzer::core::models::{BloodGasReading, SavedInterpretation};
use abg_analyzer::core::services::interpret_reading;
use abg_analyzer::output::{HistoryOutput, InterpretOutput, OperationResult, OutputMode};
use chrono::{TimeZone, Utc};

fn plain() {
    colored::control::set_override(false);
}

// =============================================================================
// OutputMode Tests
// =============================================================================

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

// =============================================================================
// InterpretOutput Tests
// =============================================================================

#[test]
fn interpret_output_serialization() {
    let result = interpret_reading(&BloodGasReading::new(7.2, 50.0, 24.0, 40.0).with_na(140.0));
    let output = InterpretOutput::new(&result, None);

    let json = serde_json::to_string(&output).unwrap();
    assert!(json.contains("\"blood_gas_type\":\"venous\""));
    assert!(json.contains("\"disorder\":\"respiratory_acidosis\""));
    assert!(json.contains("\"anion_gap\":116.0"));
    assert!(json.contains("Consider COPD"));
    assert!(!json.contains("saved_to"));
}

#[test]
fn interpret_output_human_matches_report() {
    plain();
    let result = interpret_reading(&BloodGasReading::new(7.4, 40.0, 24.0, 95.0));
    let output = InterpretOutput::new(&result, None);

    assert_eq!(output.to_human(Theme::Light), result.report);
    assert_eq!(output.to_human(Theme::Dark), result.report);
}

#[test]
fn interpret_output_mentions_save_location() {
    plain();
    let result = interpret_reading(&BloodGasReading::new(7.4, 40.0, 24.0, 95.0));
    let output = InterpretOutput::new(&result, Some("/tmp/results.jsonl".to_string()));

    assert!(output.to_human(Theme::Light).ends_with("\n\nSaved to /tmp/results.jsonl"));
    let json = serde_json::to_string(&output).unwrap();
    assert!(json.contains("\"saved_to\":\"/tmp/results.jsonl\""));
}

// =============================================================================
// HistoryOutput Tests
// =============================================================================

fn saved(reading: BloodGasReading) -> SavedInterpretation {
    let at = Utc.with_ymd_and_hms(2024, 5, 17, 14, 0, 0).unwrap();
    SavedInterpretation::new(interpret_reading(&reading), at)
}

#[test]
fn history_empty() {
    let output = HistoryOutput::new(&[]);
    assert_eq!(output.to_human(Theme::Light), "No saved interpretations.\n");

    let json = serde_json::to_string(&output).unwrap();
    assert!(json.contains("\"entries\":[]"));
}

#[test]
fn history_human_listing() {
    plain();
    let output = HistoryOutput::new(&[
        saved(BloodGasReading::new(7.5, 30.0, 24.0, 90.0)),
        saved(BloodGasReading::new(7.4, 40.0, 24.0, 95.0).with_na(140.0).with_cl(104.0)),
    ]);

    let text = output.to_human(Theme::Dark);
    assert!(text.starts_with("Saved interpretations (2):"));
    assert!(text.contains(
        "[2024-05-17T14:00:00+00:00] Unable to determine blood gas type. | Respiratory Alkalosis"
    ));
    assert!(text.contains("Arterial Blood Gas (ABG) | within normal ranges"));
    assert!(text.contains("pH 7.5  pCO2 30.0  HCO3 24.0  PaO2 90.0  AG N/A"));
    assert!(text.contains("AG 12.0"));
}

#[test]
fn history_json_entries() {
    let output = HistoryOutput::new(&[saved(BloodGasReading::new(7.2, 40.0, 18.0, 95.0))]);
    let json = serde_json::to_string(&output).unwrap();
    assert!(json.contains("\"recorded_at\":\"2024-05-17T14:00:00+00:00\""));
    assert!(json.contains("\"disorder\":\"metabolic_acidosis\""));
}

// =============================================================================
// OperationResult Tests
// =============================================================================

#[test]
fn operation_result_serialization() {
    let result = OperationResult::ok("Theme set to dark");
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"success\":true"));
    assert!(json.contains("Theme set to dark"));

    let failed = OperationResult::failed("nope");
    assert!(!failed.success);
}
