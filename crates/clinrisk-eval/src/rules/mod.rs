//! Condition rules
//!
//! One function per clinical risk group, composing the temporal query
//! primitives into a decision. Every rule is a pure, total function of the
//! patient history, the injected code sets, and the reference date:
//! missing data falls through the rule's cascade to its documented
//! default, never an error.
//!
//! Groups with layered definitions live in submodules; single code-set
//! presence checks are defined here directly.

mod immune;
mod mental;
mod metabolic;
mod renal;
mod respiratory;

pub use immune::{has_recent_cancer, is_immunosuppressed};
pub use mental::has_severe_mental_illness;
pub use metabolic::{has_diabetes, has_pregnancy, has_severe_obesity};
pub use renal::has_chronic_kidney_disease;
pub use respiratory::{has_asthma, has_chronic_respiratory_disease};

use chrono::NaiveDate;
use clinrisk_types::Patient;

use crate::accessor::PriorEvents;
use crate::codelists::Codelists;

/// Chronic liver disease: any diagnosis on or before the reference date
pub fn has_chronic_liver_disease(
    patient: &Patient,
    codes: &Codelists,
    reference: NaiveDate,
) -> bool {
    PriorEvents::clinical(patient, &codes.cld, reference).exists()
}

/// Chronic heart disease: any diagnosis on or before the reference date
pub fn has_chronic_heart_disease(
    patient: &Patient,
    codes: &Codelists,
    reference: NaiveDate,
) -> bool {
    PriorEvents::clinical(patient, &codes.chd_cov, reference).exists()
}

/// Chronic neurological disease: any diagnosis on or before the reference date
pub fn has_chronic_neurological_disease(
    patient: &Patient,
    codes: &Codelists,
    reference: NaiveDate,
) -> bool {
    PriorEvents::clinical(patient, &codes.cns_cov, reference).exists()
}

/// Asplenia or dysfunction of the spleen: any code on or before the reference date
pub fn has_asplenia(patient: &Patient, codes: &Codelists, reference: NaiveDate) -> bool {
    PriorEvents::clinical(patient, &codes.spln_cov, reference).exists()
}

/// Learning disability: any code on or before the reference date
pub fn has_learning_disability(
    patient: &Patient,
    codes: &Codelists,
    reference: NaiveDate,
) -> bool {
    PriorEvents::clinical(patient, &codes.learndis, reference).exists()
}

/// Solid organ transplant: any code on or before the reference date
pub fn has_solid_organ_transplant(
    patient: &Patient,
    codes: &Codelists,
    reference: NaiveDate,
) -> bool {
    PriorEvents::clinical(patient, &codes.solid_organ_transplant, reference).exists()
}

/// HIV/AIDS: any code on or before the reference date
pub fn has_hiv_aids(patient: &Patient, codes: &Codelists, reference: NaiveDate) -> bool {
    PriorEvents::clinical(patient, &codes.hiv_aids, reference).exists()
}
