//! Immunosuppression and recent cancer

use chrono::NaiveDate;
use clinrisk_types::{ClinicalEvent, CodedEvent, Patient, dates};

use crate::accessor::PriorEvents;
use crate::codelists::Codelists;

/// Immunosuppression
///
/// Any of: an immunosuppression diagnosis on record, an immunosuppressant
/// prescription within the last three years, an administered
/// immunosuppressant within the last three years, or chemotherapy or
/// radiotherapy within the last three years.
pub fn is_immunosuppressed(patient: &Patient, codes: &Codelists, reference: NaiveDate) -> bool {
    let window_start = dates::years_before(reference, 3);

    let diagnosed = PriorEvents::clinical(patient, &codes.immdx_cov, reference).exists();
    let prescribed = PriorEvents::medications(patient, &codes.immrx, reference)
        .filtered(move |event| event.date() >= window_start)
        .exists();
    let administered = PriorEvents::clinical(patient, &codes.immadm, reference)
        .filtered(move |event| event.date() >= window_start)
        .exists();
    let treated = PriorEvents::clinical(patient, &codes.dxt_chemo, reference)
        .filtered(move |event| event.date() >= window_start)
        .exists();

    diagnosed || prescribed || administered || treated
}

/// Cancer diagnosed within the last three years, haematological or not
pub fn has_recent_cancer(patient: &Patient, codes: &Codelists, reference: NaiveDate) -> bool {
    let window_start = dates::years_before(reference, 3);
    let recent = move |event: &ClinicalEvent| event.date() > window_start;

    PriorEvents::clinical(patient, &codes.cancer_nonhaem, reference)
        .filtered(recent)
        .exists()
        || PriorEvents::clinical(patient, &codes.cancer_haem, reference)
            .filtered(recent)
            .exists()
}
