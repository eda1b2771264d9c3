//! Chronic kidney disease

use chrono::NaiveDate;
use clinrisk_types::{Patient, compare};

use crate::accessor::PriorEvents;
use crate::cascade::Cascade;
use crate::codelists::Codelists;

/// Chronic kidney disease
///
/// A diagnostic code qualifies outright. Otherwise staging decides: with no
/// staging code ever recorded the rule fails, and with staging on record it
/// holds only while the latest stage 3-5 code is at least as recent as the
/// latest all-stages code (a newer all-stages code means the condition was
/// restaged below stage 3).
pub fn has_chronic_kidney_disease(
    patient: &Patient,
    codes: &Codelists,
    reference: NaiveDate,
) -> bool {
    let diagnosed = PriorEvents::clinical(patient, &codes.ckd_cov, reference).exists();
    let all_stages = PriorEvents::clinical(patient, &codes.ckd15, reference).most_recent_date();
    let stage_3_to_5 = PriorEvents::clinical(patient, &codes.ckd35, reference).most_recent_date();

    Cascade::new()
        .when(diagnosed, true)
        .when(all_stages.is_none(), false)
        .when(compare::date_on_or_after(stage_3_to_5, all_stages), true)
        .otherwise(false)
}
