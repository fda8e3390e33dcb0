//! Blood gas readings and their raw text input
//!
//! A [`ReadingInput`] is what a host collects from a form, CLI flags or a
//! request body: six text fields, any of which may be missing. Parsing it
//! yields a [`BloodGasReading`] with the four mandatory values present.
//!
//! # Examples
//!
//! ```
//! use abg_analyzer::core::models::{InputError, ReadingInput};
//!
//! let input = ReadingInput::new("7.40", "40", "24", "95").with_na("140");
//! let reading = input.parse().unwrap();
//! assert_eq!(reading.na, Some(140.0));
//! assert_eq!(reading.cl, None);
//!
//! let bad = ReadingInput::new("seven", "40", "24", "95");
//! assert!(matches!(bad.parse(), Err(InputError::NotNumeric { .. })));
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a mandatory field is missing or not a number
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// A mandatory field was not supplied (or was blank)
    #[error("missing value for {field}")]
    Missing {
        /// Field label, e.g. `pH`
        field: &'static str,
    },

    /// A mandatory field could not be parsed as a number
    #[error("{field} is not a number: {value:?}")]
    NotNumeric {
        /// Field label, e.g. `pCO2`
        field: &'static str,
        /// The offending text
        value: String,
    },
}

/// A single blood gas panel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BloodGasReading {
    /// Blood pH (dimensionless)
    pub ph: f64,
    /// Partial pressure of CO2 (mmHg)
    pub pco2: f64,
    /// Bicarbonate (mEq/L)
    pub hco3: f64,
    /// Partial pressure of O2 (mmHg)
    pub pao2: f64,
    /// Sodium (mEq/L)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub na: Option<f64>,
    /// Chloride (mEq/L)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cl: Option<f64>,
}

impl BloodGasReading {
    /// Create a reading from the four mandatory values
    #[must_use]
    pub const fn new(ph: f64, pco2: f64, hco3: f64, pao2: f64) -> Self {
        Self {
            ph,
            pco2,
            hco3,
            pao2,
            na: None,
            cl: None,
        }
    }

    /// Set the sodium value
    #[must_use]
    pub const fn with_na(mut self, na: f64) -> Self {
        self.na = Some(na);
        self
    }

    /// Set the chloride value
    #[must_use]
    pub const fn with_cl(mut self, cl: f64) -> Self {
        self.cl = Some(cl);
        self
    }
}

/// Unparsed reading as supplied by a host
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingInput {
    /// pH text
    #[serde(default)]
    pub ph: Option<String>,
    /// pCO2 text
    #[serde(default)]
    pub pco2: Option<String>,
    /// HCO3 text
    #[serde(default)]
    pub hco3: Option<String>,
    /// PaO2 text
    #[serde(default)]
    pub pao2: Option<String>,
    /// Na text (optional)
    #[serde(default)]
    pub na: Option<String>,
    /// Cl text (optional)
    #[serde(default)]
    pub cl: Option<String>,
}

impl ReadingInput {
    /// Create an input with the four mandatory fields filled in
    #[must_use]
    pub fn new(
        ph: impl Into<String>,
        pco2: impl Into<String>,
        hco3: impl Into<String>,
        pao2: impl Into<String>,
    ) -> Self {
        Self {
            ph: Some(ph.into()),
            pco2: Some(pco2.into()),
            hco3: Some(hco3.into()),
            pao2: Some(pao2.into()),
            na: None,
            cl: None,
        }
    }

    /// Set the sodium text
    #[must_use]
    pub fn with_na(mut self, na: impl Into<String>) -> Self {
        self.na = Some(na.into());
        self
    }

    /// Set the chloride text
    #[must_use]
    pub fn with_cl(mut self, cl: impl Into<String>) -> Self {
        self.cl = Some(cl.into());
        self
    }

    /// Parse into a [`BloodGasReading`]
    ///
    /// Mandatory fields must be present and numeric. Optional fields that are
    /// blank or not numeric are treated as absent.
    pub fn parse(&self) -> Result<BloodGasReading, InputError> {
        Ok(BloodGasReading {
            ph: mandatory("pH", self.ph.as_deref())?,
            pco2: mandatory("pCO2", self.pco2.as_deref())?,
            hco3: mandatory("HCO3", self.hco3.as_deref())?,
            pao2: mandatory("PaO2", self.pao2.as_deref())?,
            na: optional("Na", self.na.as_deref()),
            cl: optional("Cl", self.cl.as_deref()),
        })
    }
}

fn mandatory(field: &'static str, raw: Option<&str>) -> Result<f64, InputError> {
    let text = raw.map(str::trim).filter(|s| !s.is_empty());
    let Some(text) = text else {
        return Err(InputError::Missing { field });
    };
    text.parse().map_err(|_| InputError::NotNumeric {
        field,
        value: text.to_string(),
    })
}

fn optional(field: &str, raw: Option<&str>) -> Option<f64> {
    let text = raw.map(str::trim).filter(|s| !s.is_empty())?;
    match text.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("Ignoring non-numeric {field} value {text:?}");
            None
        },
    }
}
