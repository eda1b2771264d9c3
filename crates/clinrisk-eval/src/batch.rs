//! Batch dataset construction
//!
//! Applies a [`VariableSet`] to a whole population at one or more
//! reference dates, producing one row per patient and one named column per
//! (variable, date) pair. Column naming is validated up front; per-patient
//! evaluation is embarrassingly parallel and runs on the rayon pool.

use std::collections::HashSet;

use chrono::NaiveDate;
use clinrisk_types::{Indicator, Patient, dates};
use indexmap::IndexMap;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::codelists::Codelists;
use crate::error::{EvalError, EvalResult};
use crate::variables::VariableSet;

/// Reference dates to evaluate, each with its column-name suffix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationPlan {
    points: Vec<(NaiveDate, String)>,
}

impl EvaluationPlan {
    /// A single reference date; columns keep their bare stems
    pub fn single(reference: NaiveDate) -> Self {
        Self {
            points: vec![(reference, String::new())],
        }
    }

    /// `count` yearly reference dates from `start`, suffixed `_0`, `_1`, ...
    pub fn yearly(start: NaiveDate, count: u32) -> EvalResult<Self> {
        let points = (0..count)
            .map(|offset| (dates::years_after(start, offset), format!("_{offset}")))
            .collect();
        Self::from_points(points)
    }

    /// Explicit (reference date, suffix) pairs
    pub fn with_suffixes<I, S>(points: I) -> EvalResult<Self>
    where
        I: IntoIterator<Item = (NaiveDate, S)>,
        S: Into<String>,
    {
        let points = points
            .into_iter()
            .map(|(reference, suffix)| (reference, suffix.into()))
            .collect();
        Self::from_points(points)
    }

    fn from_points(points: Vec<(NaiveDate, String)>) -> EvalResult<Self> {
        if points.is_empty() {
            return Err(EvalError::EmptyPlan);
        }
        let mut seen = HashSet::new();
        for (_, suffix) in &points {
            if !seen.insert(suffix.as_str()) {
                return Err(EvalError::duplicate_suffix(suffix.clone()));
            }
        }
        Ok(Self { points })
    }

    /// The (reference date, suffix) pairs in plan order
    pub fn points(&self) -> impl Iterator<Item = (NaiveDate, &str)> {
        self.points
            .iter()
            .map(|(reference, suffix)| (*reference, suffix.as_str()))
    }

    /// Number of reference dates
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: construction rejects empty plans
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// One row per patient, one column per (variable, reference date)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    patient_ids: Vec<i64>,
    columns: IndexMap<String, Vec<Indicator>>,
}

impl Dataset {
    /// Patient ids in row order
    pub fn patient_ids(&self) -> &[i64] {
        &self.patient_ids
    }

    /// A column by name, in row order
    pub fn column(&self, name: &str) -> Option<&[Indicator]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    /// Column names in output order
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// One cell
    pub fn value(&self, column: &str, row: usize) -> Option<&Indicator> {
        self.columns.get(column).and_then(|values| values.get(row))
    }

    /// Number of rows
    pub fn num_rows(&self) -> usize {
        self.patient_ids.len()
    }

    /// Number of columns
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }
}

/// Evaluate `variables` for every patient at every plan date
///
/// Column names are `{stem}{suffix}`; the full name map is checked for
/// collisions before any per-patient work, so a bad configuration fails
/// the whole batch up front. Rows keep the population's order regardless
/// of evaluation order. The population is expected pre-filtered
/// (registration, alive status) by the caller.
pub fn build_dataset(
    population: &[Patient],
    variables: &VariableSet,
    codes: &Codelists,
    plan: &EvaluationPlan,
) -> EvalResult<Dataset> {
    let names = column_names(variables, plan)?;
    log::info!(
        "building dataset: {} patients, {} columns over {} reference dates",
        population.len(),
        names.len(),
        plan.len()
    );

    let rows: Vec<Vec<Indicator>> = population
        .par_iter()
        .map(|patient| {
            plan.points()
                .flat_map(|(reference, _)| variables.evaluate(patient, codes, reference))
                .collect()
        })
        .collect();

    let mut columns: IndexMap<String, Vec<Indicator>> = names
        .into_iter()
        .map(|name| (name, Vec::with_capacity(population.len())))
        .collect();
    for row in rows {
        for (column, value) in columns.values_mut().zip(row) {
            column.push(value);
        }
    }

    Ok(Dataset {
        patient_ids: population.iter().map(|patient| patient.patient_id).collect(),
        columns,
    })
}

/// The full `{stem}{suffix}` name map, rejected on any collision
fn column_names(variables: &VariableSet, plan: &EvaluationPlan) -> EvalResult<Vec<String>> {
    let mut stems = HashSet::new();
    for stem in variables.names() {
        if !stems.insert(stem) {
            return Err(EvalError::duplicate_variable(stem));
        }
    }

    let mut seen = HashSet::new();
    let mut names = Vec::with_capacity(variables.len() * plan.len());
    for (_, suffix) in plan.points() {
        for stem in variables.names() {
            let name = format!("{stem}{suffix}");
            if !seen.insert(name.clone()) {
                return Err(EvalError::duplicate_column(name));
            }
            names.push(name);
        }
    }
    Ok(names)
}
