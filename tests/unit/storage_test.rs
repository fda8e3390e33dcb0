//! Tests for the JSON Lines interpretation store and history service

use abg_analyzer::adapters::file::JsonlInterpretationStore;
use abg_analyzer::core::models::{AcidBaseDisorder, ReadingInput};
use abg_analyzer::core::ports::InterpretationStore;
use abg_analyzer::core::services::{interpret, recent, record};
use std::fs;
use tempfile::TempDir;

#[test]
fn record_then_load() {
    let temp = TempDir::new().unwrap();
    let store = JsonlInterpretationStore::new(temp.path().join("results.jsonl"));

    let acidosis = interpret(&ReadingInput::new("7.2", "50", "24", "40")).unwrap();
    let alkalosis = interpret(&ReadingInput::new("7.5", "40", "30", "90")).unwrap();
    record(&store, &acidosis).unwrap();
    record(&store, &alkalosis).unwrap();

    let loaded = store.load_all().unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].result, acidosis);
    assert_eq!(loaded[1].result.disorder, AcidBaseDisorder::MetabolicAlkalosis);
    assert!(loaded[0].recorded_at <= loaded[1].recorded_at);
}

#[test]
fn recent_limits_to_newest() {
    let temp = TempDir::new().unwrap();
    let store = JsonlInterpretationStore::new(temp.path().join("results.jsonl"));

    for ph in ["7.30", "7.40", "7.50"] {
        let result = interpret(&ReadingInput::new(ph, "40", "24", "95")).unwrap();
        record(&store, &result).unwrap();
    }

    let last = recent(&store, Some(1)).unwrap();
    assert_eq!(last.len(), 1);
    assert_eq!(last[0].result.reading.ph, 7.5);
}

#[test]
fn record_uses_key_value_json() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("results.jsonl");
    let store = JsonlInterpretationStore::new(&path);

    let result =
        interpret(&ReadingInput::new("7.4", "40", "24", "95").with_na("140").with_cl("104"))
            .unwrap();
    record(&store, &result).unwrap();

    let line = fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
    assert_eq!(value["blood_gas_type"], "arterial");
    assert_eq!(value["anion_gap"], 12.0);
    assert_eq!(value["disorder"], "within_normal_ranges");
    assert_eq!(value["reading"]["na"], 140.0);
    assert!(value["report"].as_str().unwrap().starts_with("Arterial Blood Gas (ABG)"));
    assert!(value["recorded_at"].is_string());
}

#[test]
fn store_path_is_exposed() {
    let store = JsonlInterpretationStore::new("/data/abg/results.jsonl");
    assert_eq!(store.path(), std::path::Path::new("/data/abg/results.jsonl"));
}
