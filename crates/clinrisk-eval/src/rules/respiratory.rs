//! Asthma and chronic respiratory disease

use chrono::NaiveDate;
use clinrisk_types::{CodedEvent, Patient, dates};

use crate::accessor::PriorEvents;
use crate::cascade::Cascade;
use crate::codelists::Codelists;

/// Active asthma
///
/// An asthma admission in the two years up to the reference date qualifies
/// outright. Otherwise a diagnosis on record must be backed by current
/// treatment: an inhaled prescription within the last year and at least two
/// oral steroid prescriptions within the last two years.
pub fn has_asthma(patient: &Patient, codes: &Codelists, reference: NaiveDate) -> bool {
    let admitted = PriorEvents::clinical(patient, &codes.astadm, reference)
        .filtered(|event| event.date() >= dates::years_before(reference, 2))
        .exists();
    let diagnosed = PriorEvents::clinical(patient, &codes.ast, reference).exists();
    let inhaled = PriorEvents::medications(patient, &codes.astrxm1, reference)
        .filtered(|event| event.date() >= dates::years_before(reference, 1))
        .exists();
    let oral_steroids = PriorEvents::medications(patient, &codes.astrxm2, reference)
        .filtered(|event| event.date() >= dates::years_before(reference, 2))
        .count();

    Cascade::new()
        .when(admitted, true)
        .when(diagnosed && inhaled && oral_steroids >= 2, true)
        .otherwise(false)
}

/// Chronic respiratory disease: a respiratory diagnosis or active asthma
pub fn has_chronic_respiratory_disease(
    patient: &Patient,
    codes: &Codelists,
    reference: NaiveDate,
) -> bool {
    PriorEvents::clinical(patient, &codes.resp_cov, reference).exists()
        || has_asthma(patient, codes, reference)
}
