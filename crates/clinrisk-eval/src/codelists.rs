//! Named code set bundle injected into every rule
//!
//! Rules never reach for globally registered code lists; they receive this
//! bundle explicitly. Field names follow the conventional short names of
//! the published code lists so a rule reads against its clinical source.
//! A rule touches only the fields it names, so tests can populate just
//! those and leave the rest empty.

use clinrisk_types::CodeSet;
use serde::{Deserialize, Serialize};

/// The code sets the rule set draws on
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Codelists {
    // Asthma
    /// Asthma diagnosis codes
    pub ast: CodeSet,
    /// Asthma admission codes
    pub astadm: CodeSet,
    /// Inhaled asthma medication codes
    pub astrxm1: CodeSet,
    /// Oral steroid medication codes
    pub astrxm2: CodeSet,

    // Chronic respiratory disease
    /// Chronic respiratory disease diagnosis codes
    pub resp_cov: CodeSet,

    // Chronic heart disease
    /// Chronic heart disease diagnosis codes
    pub chd_cov: CodeSet,

    // Chronic kidney disease
    /// Chronic kidney disease diagnostic codes
    pub ckd_cov: CodeSet,
    /// Chronic kidney disease codes, all stages
    pub ckd15: CodeSet,
    /// Chronic kidney disease codes, stages 3 to 5
    pub ckd35: CodeSet,

    // Chronic liver disease
    /// Chronic liver disease diagnosis codes
    pub cld: CodeSet,

    // Diabetes
    /// Diabetes diagnosis codes
    pub diab: CodeSet,
    /// Diabetes resolved codes
    pub dmres: CodeSet,
    /// Addison's disease and hypoadrenalism codes
    pub addis: CodeSet,
    /// Gestational diabetes codes
    pub gdiab: CodeSet,

    // Pregnancy
    /// Pregnancy codes
    pub preg: CodeSet,
    /// Pregnancy or delivery codes
    pub pregdel: CodeSet,

    // Severe mental illness
    /// Severe mental illness codes
    pub sev_mental: CodeSet,
    /// Severe mental illness remission codes
    pub smhres: CodeSet,

    // Chronic neurological disease
    /// Chronic neurological disease codes, including significant learning disorder
    pub cns_cov: CodeSet,

    // Immunosuppression
    /// Immunosuppression diagnosis codes
    pub immdx_cov: CodeSet,
    /// Immunosuppression medication codes
    pub immrx: CodeSet,
    /// Immunosuppression administration codes
    pub immadm: CodeSet,
    /// Chemotherapy and radiotherapy codes
    pub dxt_chemo: CodeSet,

    // Asplenia
    /// Asplenia or spleen dysfunction codes
    pub spln_cov: CodeSet,

    // Severe obesity
    /// BMI measurement codes
    pub bmi: CodeSet,
    /// BMI stage codes
    pub bmi_stage: CodeSet,
    /// Severe obesity codes
    pub sev_obesity: CodeSet,

    // Learning disability
    /// Learning disability codes
    pub learndis: CodeSet,

    // Further groups of interest
    /// Solid organ transplant codes
    pub solid_organ_transplant: CodeSet,
    /// HIV/AIDS codes
    pub hiv_aids: CodeSet,
    /// Non-haematological cancer codes
    pub cancer_nonhaem: CodeSet,
    /// Haematological cancer codes
    pub cancer_haem: CodeSet,
}
