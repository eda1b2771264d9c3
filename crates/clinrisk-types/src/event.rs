//! Clinical and medication event records
//!
//! Events are append-only historical facts supplied by an external store;
//! the engine never mutates them. Clinical events carry SNOMED CT-style
//! codes and may carry a numeric reading (e.g. a BMI value); medication
//! events carry dm+d-style product codes. The two streams share the
//! `CodedEvent` view so temporal queries are written once.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Common view over the clinical and medication event streams
pub trait CodedEvent {
    /// The event's domain code
    fn code(&self) -> &str;

    /// The date the event was recorded
    fn date(&self) -> NaiveDate;

    /// Numeric reading attached to the event, when one exists
    fn numeric_value(&self) -> Option<Decimal> {
        None
    }
}

/// A coded event from a patient's clinical record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicalEvent {
    /// Clinical code (SNOMED CT or similar vocabulary)
    pub code: String,
    /// Date the event was recorded
    pub date: NaiveDate,
    /// Optional numeric reading, e.g. a BMI measurement
    pub value: Option<Decimal>,
}

impl ClinicalEvent {
    /// Create an event with no numeric reading
    pub fn new(code: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            code: code.into(),
            date,
            value: None,
        }
    }

    /// Create an event carrying a numeric reading
    pub fn with_value(code: impl Into<String>, date: NaiveDate, value: Decimal) -> Self {
        Self {
            code: code.into(),
            date,
            value: Some(value),
        }
    }
}

impl CodedEvent for ClinicalEvent {
    fn code(&self) -> &str {
        &self.code
    }

    fn date(&self) -> NaiveDate {
        self.date
    }

    fn numeric_value(&self) -> Option<Decimal> {
        self.value
    }
}

/// A prescription issued from a patient's medication record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicationEvent {
    /// Medication product code (dm+d or similar vocabulary)
    pub code: String,
    /// Date the prescription was issued
    pub date: NaiveDate,
}

impl MedicationEvent {
    /// Create a medication event
    pub fn new(code: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            code: code.into(),
            date,
        }
    }
}

impl CodedEvent for MedicationEvent {
    fn code(&self) -> &str {
        &self.code
    }

    fn date(&self) -> NaiveDate {
        self.date
    }
}
