//! Clinical risk-group classification for Rust
//!
//! This crate classifies patients into clinical risk groups (asthma,
//! chronic kidney disease, immunosuppression, severe obesity, diabetes,
//! severe mental illness, and more) as of a reference date, by evaluating
//! temporal predicates over each patient's clinical-event and medication
//! history. It provides:
//!
//! - An in-memory data model: code sets, events, patients, indicators
//! - Temporal query primitives over filtered event views
//! - Per-condition rules composed into first-true-wins cascades
//! - A composite at-risk indicator and a named variable catalog
//! - A batch builder producing one row per patient and one column per
//!   (variable, reference date) pair
//!
//! # Example
//!
//! ```ignore
//! use clinrisk::{Codelists, EvaluationPlan, VariableSet, build_dataset};
//!
//! let codes = Codelists { /* code sets loaded by the caller */ ..Default::default() };
//! let plan = EvaluationPlan::yearly(start_date, 3)?;
//! let dataset = build_dataset(&population, &VariableSet::primis(), &codes, &plan)?;
//! let at_risk_now = dataset.column("atrisk_0");
//! ```

// Re-export all public APIs from internal crates
pub use clinrisk_eval as eval;
pub use clinrisk_types as types;

// Convenience re-exports
pub use clinrisk_eval::{
    Cascade, Codelists, Dataset, EvalError, EvalResult, EvaluationPlan, PriorEvents, Variable,
    VariableSet, at_risk, build_dataset,
};
pub use clinrisk_types::{
    ClinicalEvent, CodeSet, CodedEvent, Indicator, MedicationEvent, Patient,
};
