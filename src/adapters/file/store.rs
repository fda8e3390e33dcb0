//! JSON Lines interpretation store
//!
//! Each saved interpretation is one compact JSON object on its own line, so
//! appending never rewrites earlier records.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::core::models::SavedInterpretation;
use crate::core::ports::InterpretationStore;

/// File-backed store writing one JSON record per line
#[derive(Debug, Clone)]
pub struct JsonlInterpretationStore {
    path: PathBuf,
}

impl JsonlInterpretationStore {
    /// Create a store backed by `path` (the file is created on first append)
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl InterpretationStore for JsonlInterpretationStore {
    fn append(&self, record: &SavedInterpretation) -> anyhow::Result<()> {
        // JSON has no NaN or infinity; serde_json would write null and the
        // line could never be read back.
        if let Some(field) = non_finite_field(record) {
            anyhow::bail!(
                "Refusing to save to {}: {field} is not a finite number",
                self.path.display()
            );
        }

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let line = serde_json::to_string(record)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open {}", self.path.display()))?;
        writeln!(file, "{line}")?;
        Ok(())
    }

    fn load_all(&self) -> anyhow::Result<Vec<SavedInterpretation>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| {
                serde_json::from_str(line).with_context(|| {
                    format!("Corrupt record at {}:{}", self.path.display(), idx + 1)
                })
            })
            .collect()
    }
}

/// First value in the record that cannot be represented in JSON
fn non_finite_field(record: &SavedInterpretation) -> Option<&'static str> {
    let reading = &record.result.reading;
    [
        ("pH", Some(reading.ph)),
        ("pCO2", Some(reading.pco2)),
        ("HCO3", Some(reading.hco3)),
        ("PaO2", Some(reading.pao2)),
        ("Na", reading.na),
        ("Cl", reading.cl),
        ("anion gap", record.result.anion_gap),
    ]
    .into_iter()
    .find(|(_, value)| value.is_some_and(|v| !v.is_finite()))
    .map(|(field, _)| field)
}
