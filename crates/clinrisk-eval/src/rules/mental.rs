//! Severe mental illness

use chrono::NaiveDate;
use clinrisk_types::{Patient, compare};

use crate::accessor::PriorEvents;
use crate::cascade::Cascade;
use crate::codelists::Codelists;

/// Severe mental illness
///
/// A remission code retires an earlier diagnosis. The rule holds when the
/// latest remission code predates the latest diagnosis, or when a
/// diagnosis was never followed by remission.
pub fn has_severe_mental_illness(
    patient: &Patient,
    codes: &Codelists,
    reference: NaiveDate,
) -> bool {
    let diagnosis = PriorEvents::clinical(patient, &codes.sev_mental, reference).most_recent_date();
    let remission = PriorEvents::clinical(patient, &codes.smhres, reference).most_recent_date();

    Cascade::new()
        .when(compare::date_before(remission, diagnosis), true)
        .when(diagnosis.is_some() && remission.is_none(), true)
        .otherwise(false)
}
