//! Patients and their event histories

use crate::event::{ClinicalEvent, MedicationEvent};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A patient and their full coded history
///
/// The history is an append-only record assembled by an external store;
/// events arrive in no particular order and the engine sorts on demand.
/// `patient_id` is carried through to output datasets as the row key and
/// plays no part in rule logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    /// Stable identifier used as the output row key
    pub patient_id: i64,
    /// Date of birth, used for age-gated rules
    pub date_of_birth: NaiveDate,
    /// Date of death, if recorded
    pub date_of_death: Option<NaiveDate>,
    /// Clinical event history
    pub clinical_events: Vec<ClinicalEvent>,
    /// Medication (prescription) history
    pub medications: Vec<MedicationEvent>,
}

impl Patient {
    /// Create a patient with an empty history
    pub fn new(patient_id: i64, date_of_birth: NaiveDate) -> Self {
        Self {
            patient_id,
            date_of_birth,
            date_of_death: None,
            clinical_events: Vec::new(),
            medications: Vec::new(),
        }
    }

    /// Record a date of death
    pub fn with_death_date(mut self, date: NaiveDate) -> Self {
        self.date_of_death = Some(date);
        self
    }

    /// Append a clinical event to the history
    pub fn with_clinical_event(mut self, event: ClinicalEvent) -> Self {
        self.clinical_events.push(event);
        self
    }

    /// Append a batch of clinical events to the history
    pub fn with_clinical_events(mut self, events: impl IntoIterator<Item = ClinicalEvent>) -> Self {
        self.clinical_events.extend(events);
        self
    }

    /// Append a medication event to the history
    pub fn with_medication(mut self, event: MedicationEvent) -> Self {
        self.medications.push(event);
        self
    }

    /// Append a batch of medication events to the history
    pub fn with_medications(mut self, events: impl IntoIterator<Item = MedicationEvent>) -> Self {
        self.medications.extend(events);
        self
    }

    /// Age in completed years on the given date
    ///
    /// Negative if the date precedes the date of birth.
    pub fn age_on(&self, date: NaiveDate) -> i32 {
        let dob = self.date_of_birth;
        let mut age = date.year() - dob.year();
        if (date.month(), date.day()) < (dob.month(), dob.day()) {
            age -= 1;
        }
        age
    }

    /// Whether the patient is alive on the given date
    ///
    /// Alive means no recorded death, or a recorded death strictly after
    /// the date.
    pub fn alive_on(&self, date: NaiveDate) -> bool {
        match self.date_of_death {
            Some(death) => death > date,
            None => true,
        }
    }
}
