//! Data model for clinical risk-group evaluation
//!
//! This crate defines the value types the rule engine operates on:
//! - Code sets (optionally categorised) loaded from external code lists
//! - Clinical and medication events, and the patients that own them
//! - The `Indicator` type produced by every rule evaluation
//! - Calendar window arithmetic and null-propagating comparisons

pub mod code_set;
pub mod compare;
pub mod dates;
pub mod event;
pub mod indicator;
pub mod patient;

pub use code_set::CodeSet;
pub use event::{ClinicalEvent, CodedEvent, MedicationEvent};
pub use indicator::Indicator;
pub use patient::Patient;
