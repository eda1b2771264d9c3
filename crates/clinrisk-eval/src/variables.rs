//! The named variable catalog
//!
//! Each catalog variable pairs a stable column stem with the rule that
//! computes it. A [`VariableSet`] is an ordered selection of catalog
//! variables and custom named columns, the unit the batch builder turns
//! into dataset columns.

use std::fmt;

use chrono::NaiveDate;
use clinrisk_types::{Indicator, Patient};

use crate::codelists::Codelists;
use crate::composite;
use crate::rules;

/// A catalog variable: one output column stem and its rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variable {
    /// Immunosuppression group
    Immunosuppressed,
    /// Chronic kidney disease
    ChronicKidneyDisease,
    /// Chronic respiratory disease, including active asthma
    ChronicRespiratoryDisease,
    /// Diabetes
    Diabetes,
    /// Chronic liver disease
    ChronicLiverDisease,
    /// Chronic heart disease
    ChronicHeartDisease,
    /// Chronic neurological disease
    ChronicNeurologicalDisease,
    /// Asplenia or dysfunction of the spleen
    Asplenia,
    /// Learning disability
    LearningDisability,
    /// Severe mental illness
    SevereMentalIllness,
    /// Severe obesity
    SevereObesity,
    /// At least one risk group
    AtRisk,
    /// Age in completed years at the reference date
    Age,
    /// Solid organ transplant
    SolidOrganTransplant,
    /// HIV/AIDS
    HivAids,
    /// Cancer diagnosed within the last three years
    RecentCancer,
}

impl Variable {
    /// Stable column stem, suffixed per reference date in batch output
    pub fn stem(self) -> &'static str {
        match self {
            Self::Immunosuppressed => "immunosuppressed",
            Self::ChronicKidneyDisease => "ckd",
            Self::ChronicRespiratoryDisease => "crd",
            Self::Diabetes => "diabetes",
            Self::ChronicLiverDisease => "cld",
            Self::ChronicHeartDisease => "chd",
            Self::ChronicNeurologicalDisease => "cns",
            Self::Asplenia => "asplenia",
            Self::LearningDisability => "learndis",
            Self::SevereMentalIllness => "smi",
            Self::SevereObesity => "severe_obesity",
            Self::AtRisk => "atrisk",
            Self::Age => "age",
            Self::SolidOrganTransplant => "sol_org_trans",
            Self::HivAids => "hiv_aids",
            Self::RecentCancer => "cancer",
        }
    }

    /// Evaluate this variable for one patient at one reference date
    pub fn evaluate(self, patient: &Patient, codes: &Codelists, reference: NaiveDate) -> Indicator {
        match self {
            Self::Immunosuppressed => rules::is_immunosuppressed(patient, codes, reference).into(),
            Self::ChronicKidneyDisease => {
                rules::has_chronic_kidney_disease(patient, codes, reference).into()
            }
            Self::ChronicRespiratoryDisease => {
                rules::has_chronic_respiratory_disease(patient, codes, reference).into()
            }
            Self::Diabetes => rules::has_diabetes(patient, codes, reference).into(),
            Self::ChronicLiverDisease => {
                rules::has_chronic_liver_disease(patient, codes, reference).into()
            }
            Self::ChronicHeartDisease => {
                rules::has_chronic_heart_disease(patient, codes, reference).into()
            }
            Self::ChronicNeurologicalDisease => {
                rules::has_chronic_neurological_disease(patient, codes, reference).into()
            }
            Self::Asplenia => rules::has_asplenia(patient, codes, reference).into(),
            Self::LearningDisability => {
                rules::has_learning_disability(patient, codes, reference).into()
            }
            Self::SevereMentalIllness => {
                rules::has_severe_mental_illness(patient, codes, reference).into()
            }
            Self::SevereObesity => rules::has_severe_obesity(patient, codes, reference).into(),
            Self::AtRisk => composite::at_risk(patient, codes, reference).into(),
            Self::Age => Indicator::Int(i64::from(patient.age_on(reference))),
            Self::SolidOrganTransplant => {
                rules::has_solid_organ_transplant(patient, codes, reference).into()
            }
            Self::HivAids => rules::has_hiv_aids(patient, codes, reference).into(),
            Self::RecentCancer => rules::has_recent_cancer(patient, codes, reference).into(),
        }
    }
}

/// A custom column rule
pub type CustomRule = dyn Fn(&Patient, &Codelists, NaiveDate) -> Indicator + Send + Sync;

enum Entry {
    Catalog(Variable),
    Custom { name: String, rule: Box<CustomRule> },
}

impl Entry {
    fn name(&self) -> &str {
        match self {
            Self::Catalog(variable) => variable.stem(),
            Self::Custom { name, .. } => name,
        }
    }

    fn evaluate(&self, patient: &Patient, codes: &Codelists, reference: NaiveDate) -> Indicator {
        match self {
            Self::Catalog(variable) => variable.evaluate(patient, codes, reference),
            Self::Custom { rule, .. } => rule(patient, codes, reference),
        }
    }
}

/// An ordered selection of output columns
#[derive(Default)]
pub struct VariableSet {
    entries: Vec<Entry>,
}

impl VariableSet {
    /// An empty selection
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The PRIMIS risk-group columns in their conventional order
    ///
    /// PRIMIS is the clinical rule set behind COVID-19 vaccination
    /// eligibility; its column set is the usual starting point for
    /// risk-group datasets.
    pub fn primis() -> Self {
        Self::new()
            .with(Variable::Immunosuppressed)
            .with(Variable::ChronicKidneyDisease)
            .with(Variable::ChronicRespiratoryDisease)
            .with(Variable::Diabetes)
            .with(Variable::ChronicLiverDisease)
            .with(Variable::ChronicHeartDisease)
            .with(Variable::ChronicNeurologicalDisease)
            .with(Variable::Asplenia)
            .with(Variable::LearningDisability)
            .with(Variable::SevereMentalIllness)
            .with(Variable::SevereObesity)
            .with(Variable::AtRisk)
    }

    /// Append a catalog variable
    #[must_use]
    pub fn with(mut self, variable: Variable) -> Self {
        self.entries.push(Entry::Catalog(variable));
        self
    }

    /// Append a custom named column
    ///
    /// The rule sees the same inputs as a catalog rule and may return any
    /// indicator kind, so derived date- or category-valued columns slot in
    /// next to the boolean ones.
    #[must_use]
    pub fn with_custom<R>(mut self, name: impl Into<String>, rule: R) -> Self
    where
        R: Fn(&Patient, &Codelists, NaiveDate) -> Indicator + Send + Sync + 'static,
    {
        self.entries.push(Entry::Custom {
            name: name.into(),
            rule: Box::new(rule),
        });
        self
    }

    /// Column stems in selection order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(Entry::name)
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no columns are selected
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Evaluate every column for one patient at one reference date
    pub fn evaluate(
        &self,
        patient: &Patient,
        codes: &Codelists,
        reference: NaiveDate,
    ) -> Vec<Indicator> {
        self.entries
            .iter()
            .map(|entry| entry.evaluate(patient, codes, reference))
            .collect()
    }
}

impl fmt::Debug for VariableSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
