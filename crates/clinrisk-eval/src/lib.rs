//! Risk-Group Rule Evaluation Engine
//!
//! This crate classifies patients into clinical risk groups as of a given
//! reference date by evaluating temporal predicates over in-memory event
//! histories. It provides:
//!
//! - **Event Stream Accessor**: [`PriorEvents`], a lazy filtered view over
//!   one patient's clinical or medication events
//! - **Temporal Query Primitives**: existence, count, most recent,
//!   earliest, nth earliest, category lookup
//! - **Cascade Evaluator**: [`Cascade`], ordered first-true-wins branches
//!   with a mandatory default
//! - **Condition Rules**: asthma, chronic kidney disease, diabetes, severe
//!   obesity, immunosuppression, severe mental illness, and the other
//!   risk-group rules
//! - **Composite Rule**: the aggregate at-risk indicator
//! - **Variable Catalog & Batch Builder**: named output columns evaluated
//!   over a whole population at one or more reference dates
//!
//! # Example
//!
//! ```ignore
//! use clinrisk_eval::{Codelists, EvaluationPlan, VariableSet, build_dataset};
//!
//! let codes = Codelists::default();
//! let plan = EvaluationPlan::yearly(start_date, 3)?;
//! let dataset = build_dataset(&population, &VariableSet::primis(), &codes, &plan)?;
//! ```
//!
//! # Null Handling
//!
//! Rules never fail on missing data. Date and value comparisons where
//! either side is absent resolve to false, and the cascade falls through
//! to its next arm or default. Only configuration mistakes (an empty plan,
//! colliding column names) surface as [`EvalError`], before any
//! per-patient work starts.

pub mod accessor;
pub mod batch;
pub mod cascade;
pub mod codelists;
pub mod composite;
pub mod error;
pub mod primitives;
pub mod rules;
pub mod variables;

// Re-export main types
pub use accessor::PriorEvents;
pub use batch::{Dataset, EvaluationPlan, build_dataset};
pub use cascade::Cascade;
pub use codelists::Codelists;
pub use composite::at_risk;
pub use error::{EvalError, EvalResult};
pub use variables::{Variable, VariableSet};
