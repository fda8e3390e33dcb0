//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::fmt::Write as _;

use colored::{Color, Colorize};
use serde::Serialize;

use crate::config::Theme;
use crate::core::models::{
    AcidBaseDisorder, BloodGasReading, BloodGasType, InterpretationResult, SavedInterpretation,
};
use crate::core::services::format_value;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of an interpret operation
#[derive(Debug, Serialize)]
pub struct InterpretOutput {
    /// The interpreted values
    pub reading: BloodGasReading,
    /// Arterial, venous or undetermined
    pub blood_gas_type: BloodGasType,
    /// Anion gap if sodium was supplied
    pub anion_gap: Option<f64>,
    /// Disorder classification
    pub disorder: AcidBaseDisorder,
    /// Suggestion sentence
    pub suggestion: String,
    /// Full plain-text report
    pub report: String,
    /// Where the interpretation was saved, if it was
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_to: Option<String>,
}

/// Result of a history listing
#[derive(Debug, Serialize)]
pub struct HistoryOutput {
    /// Saved interpretations, oldest first
    pub entries: Vec<HistoryEntry>,
}

/// One saved interpretation in a history listing
#[derive(Debug, Serialize)]
pub struct HistoryEntry {
    /// When it was recorded (RFC3339)
    pub recorded_at: String,
    /// The interpreted values
    pub reading: BloodGasReading,
    /// Arterial, venous or undetermined
    pub blood_gas_type: BloodGasType,
    /// Anion gap if sodium was supplied
    pub anion_gap: Option<f64>,
    /// Disorder classification
    pub disorder: AcidBaseDisorder,
    /// Suggestion sentence
    pub suggestion: String,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

#[derive(Clone, Copy)]
struct Palette {
    heading: Color,
    disorder: Color,
    normal: Color,
}

const fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Light => Palette {
            heading: Color::Blue,
            disorder: Color::Red,
            normal: Color::Green,
        },
        Theme::Dark => Palette {
            heading: Color::BrightCyan,
            disorder: Color::BrightYellow,
            normal: Color::BrightGreen,
        },
    }
}

impl Palette {
    const fn for_disorder(self, disorder: AcidBaseDisorder) -> Color {
        if disorder.is_disorder() { self.disorder } else { self.normal }
    }
}

impl InterpretOutput {
    /// Build output from an interpretation result
    #[must_use]
    pub fn new(result: &InterpretationResult, saved_to: Option<String>) -> Self {
        Self {
            reading: result.reading,
            blood_gas_type: result.blood_gas_type,
            anion_gap: result.anion_gap,
            disorder: result.disorder,
            suggestion: result.suggestion(),
            report: result.report.clone(),
            saved_to,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode, theme: Theme) {
        match mode {
            OutputMode::Human => println!("{}", self.to_human(theme)),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }

    /// Human-readable text, with the heading and suggestion highlighted
    #[must_use]
    pub fn to_human(&self, theme: Theme) -> String {
        let palette = palette(theme);
        let suggestion_color = palette.for_disorder(self.disorder);

        let mut out = String::new();
        let last = self.report.lines().count().saturating_sub(1);
        for (idx, line) in self.report.lines().enumerate() {
            if idx == 0 {
                let _ = writeln!(out, "{}", line.color(palette.heading).bold());
            } else if idx == last && line.starts_with("Suggestion:") {
                let _ = write!(out, "{}", line.color(suggestion_color).bold());
            } else {
                let _ = writeln!(out, "{line}");
            }
        }

        if let Some(path) = &self.saved_to {
            let _ = write!(out, "\n\nSaved to {path}");
        }
        out
    }
}

impl From<&SavedInterpretation> for HistoryEntry {
    fn from(saved: &SavedInterpretation) -> Self {
        Self {
            recorded_at: saved.recorded_at.to_rfc3339(),
            reading: saved.result.reading,
            blood_gas_type: saved.result.blood_gas_type,
            anion_gap: saved.result.anion_gap,
            disorder: saved.result.disorder,
            suggestion: saved.result.suggestion(),
        }
    }
}

impl HistoryOutput {
    /// Build a listing from saved interpretations
    #[must_use]
    pub fn new(saved: &[SavedInterpretation]) -> Self {
        Self {
            entries: saved.iter().map(HistoryEntry::from).collect(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode, theme: Theme) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human(theme)),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }

    /// Human-readable listing
    #[must_use]
    pub fn to_human(&self, theme: Theme) -> String {
        if self.entries.is_empty() {
            return "No saved interpretations.\n".to_string();
        }

        let palette = palette(theme);
        let mut out = format!("Saved interpretations ({}):\n\n", self.entries.len());
        for e in &self.entries {
            let label = e.disorder.label().color(palette.for_disorder(e.disorder));
            let _ = writeln!(
                out,
                "  [{}] {} | {}",
                e.recorded_at,
                e.blood_gas_type.description().color(palette.heading),
                label
            );
            let _ = writeln!(
                out,
                "          pH {}  pCO2 {}  HCO3 {}  PaO2 {}  AG {}\n",
                format_value(e.reading.ph),
                format_value(e.reading.pco2),
                format_value(e.reading.hco3),
                format_value(e.reading.pao2),
                e.anion_gap.map_or_else(|| "N/A".to_string(), format_value)
            );
        }
        out
    }
}

impl OperationResult {
    /// Create a successful result
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Create a failed result
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
