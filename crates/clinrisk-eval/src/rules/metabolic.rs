//! Diabetes, pregnancy, and severe obesity

use chrono::NaiveDate;
use clinrisk_types::{ClinicalEvent, CodedEvent, Patient, compare, dates};
use rust_decimal::Decimal;

use crate::accessor::PriorEvents;
use crate::cascade::Cascade;
use crate::codelists::Codelists;

/// Diabetes
///
/// A resolved code retires an earlier diagnosis, so the rule holds when the
/// latest resolved code predates the latest diagnosis, or when a diagnosis
/// was never resolved. Addison's disease / hypoadrenalism always qualifies,
/// and gestational diabetes qualifies while [`has_pregnancy`] holds.
pub fn has_diabetes(patient: &Patient, codes: &Codelists, reference: NaiveDate) -> bool {
    let diagnosis = PriorEvents::clinical(patient, &codes.diab, reference).most_recent_date();
    let resolved = PriorEvents::clinical(patient, &codes.dmres, reference).most_recent_date();
    let addisons = PriorEvents::clinical(patient, &codes.addis, reference).exists();
    let gestational = PriorEvents::clinical(patient, &codes.gdiab, reference).exists()
        && has_pregnancy(patient, codes, reference);

    Cascade::new()
        .when(compare::date_before(resolved, diagnosis), true)
        .when(diagnosis.is_some() && resolved.is_none(), true)
        .when(addisons, true)
        .when(gestational, true)
        .otherwise(false)
}

/// Current or recent pregnancy, auxiliary to gestational diabetes
///
/// A pregnancy code within the 30 days up to the reference date qualifies.
/// Failing that, the 65-to-31-days-before window is checked for a delivery
/// followed by a later pregnancy code, which marks a pregnancy still
/// ongoing after the recorded delivery.
pub fn has_pregnancy(patient: &Patient, codes: &Codelists, reference: NaiveDate) -> bool {
    let window_start = dates::days_before(reference, 65);
    let window_end = dates::days_before(reference, 31);
    let in_window =
        move |event: &ClinicalEvent| event.date() >= window_start && event.date() <= window_end;

    let current = PriorEvents::clinical(patient, &codes.preg, reference)
        .filtered(|event| event.date() >= dates::days_before(reference, 30))
        .exists();
    let delivered = PriorEvents::clinical(patient, &codes.pregdel, reference)
        .filtered(in_window)
        .most_recent_date();
    let pregnant = PriorEvents::clinical(patient, &codes.preg, reference)
        .filtered(in_window)
        .most_recent_date();

    Cascade::new()
        .when(current, true)
        .when(
            pregnant.is_some() && delivered.is_some() && compare::date_after(pregnant, delivered),
            true,
        )
        .otherwise(false)
}

/// Severe obesity
///
/// Only defined for adults; under-18s are always out. A severe obesity code
/// more recent than any plausible BMI reading qualifies. Otherwise the most
/// recent plausible reading must be at least 40 and not superseded by a
/// later BMI stage code. Readings outside (4, 200) are treated as entry
/// errors and ignored.
pub fn has_severe_obesity(patient: &Patient, codes: &Codelists, reference: NaiveDate) -> bool {
    let under_18 = patient.age_on(reference) < 18;

    let staged = PriorEvents::clinical(patient, &codes.bmi_stage, reference).most_recent_date();
    let severe_coded =
        PriorEvents::clinical(patient, &codes.sev_obesity, reference).most_recent_date();
    let reading = PriorEvents::clinical(patient, &codes.bmi, reference)
        .filtered(|event| {
            compare::value_in_open_range(
                event.numeric_value(),
                Decimal::from(4),
                Decimal::from(200),
            )
        })
        .most_recent();
    let reading_date = reading.map(CodedEvent::date);
    let reading_value = reading.and_then(CodedEvent::numeric_value);
    let threshold = Decimal::from(40);

    Cascade::new()
        .when(under_18, false)
        .when(
            compare::date_after(severe_coded, reading_date)
                || (severe_coded.is_some() && reading_date.is_none()),
            true,
        )
        .when(
            compare::date_on_or_after(reading_date, staged)
                && compare::value_at_least(reading_value, threshold),
            true,
        )
        .when(
            staged.is_none() && compare::value_at_least(reading_value, threshold),
            true,
        )
        .otherwise(false)
}
