//! Aggregate risk indicator

use chrono::NaiveDate;
use clinrisk_types::Patient;

use crate::codelists::Codelists;
use crate::rules;

/// Membership of at least one clinical risk group
///
/// Logical OR across the eleven constituent rules. The order here is
/// conventional, not semantic; each constituent stays separately evaluable
/// for its own output column.
pub fn at_risk(patient: &Patient, codes: &Codelists, reference: NaiveDate) -> bool {
    rules::is_immunosuppressed(patient, codes, reference)
        || rules::has_chronic_kidney_disease(patient, codes, reference)
        || rules::has_chronic_respiratory_disease(patient, codes, reference)
        || rules::has_diabetes(patient, codes, reference)
        || rules::has_chronic_liver_disease(patient, codes, reference)
        || rules::has_chronic_neurological_disease(patient, codes, reference)
        || rules::has_chronic_heart_disease(patient, codes, reference)
        || rules::has_asplenia(patient, codes, reference)
        || rules::has_learning_disability(patient, codes, reference)
        || rules::has_severe_mental_illness(patient, codes, reference)
        || rules::has_severe_obesity(patient, codes, reference)
}
