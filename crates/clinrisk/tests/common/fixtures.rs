//! Synthetic cohort and code lists

use chrono::NaiveDate;
use clinrisk::{ClinicalEvent, CodeSet, Codelists, MedicationEvent, Patient};
use rust_decimal::Decimal;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// One synthetic code per code list, enough to drive every rule
pub fn study_codelists() -> Codelists {
    Codelists {
        ast: CodeSet::from_codes(["ast-dx"]),
        astadm: CodeSet::from_codes(["ast-adm"]),
        astrxm1: CodeSet::from_codes(["rx-inhaled"]),
        astrxm2: CodeSet::from_codes(["rx-oral"]),
        resp_cov: CodeSet::from_codes(["resp-dx"]),
        chd_cov: CodeSet::from_codes(["heart"]),
        ckd_cov: CodeSet::from_codes(["ckd-dx"]),
        ckd15: CodeSet::from_codes(["ckd-any-stage"]),
        ckd35: CodeSet::from_codes(["ckd-stage-3-5"]),
        cld: CodeSet::from_codes(["liver"]),
        diab: CodeSet::from_codes(["dm-dx"]),
        dmres: CodeSet::from_codes(["dm-res"]),
        addis: CodeSet::from_codes(["addis-dx"]),
        gdiab: CodeSet::from_codes(["gdm-dx"]),
        preg: CodeSet::from_codes(["preg"]),
        pregdel: CodeSet::from_codes(["preg-del"]),
        sev_mental: CodeSet::from_codes(["smi-dx"]),
        smhres: CodeSet::from_codes(["smi-res"]),
        cns_cov: CodeSet::from_codes(["neuro"]),
        immdx_cov: CodeSet::from_codes(["imm-dx"]),
        immrx: CodeSet::from_codes(["imm-rx"]),
        immadm: CodeSet::from_codes(["imm-adm"]),
        dxt_chemo: CodeSet::from_codes(["chemo"]),
        spln_cov: CodeSet::from_codes(["spleen"]),
        bmi: CodeSet::from_codes(["bmi-obs"]),
        bmi_stage: CodeSet::from_codes(["bmi-stage"]),
        sev_obesity: CodeSet::from_codes(["sev-obes"]),
        learndis: CodeSet::from_codes(["learndis"]),
        solid_organ_transplant: CodeSet::from_codes(["transplant"]),
        hiv_aids: CodeSet::from_codes(["hiv"]),
        cancer_nonhaem: CodeSet::from_codes(["ca-solid"]),
        cancer_haem: CodeSet::from_codes(["ca-haem"]),
    }
}

/// A small cohort exercising the rule set
///
/// Patient 101: treated asthmatic adult.
/// Patient 102: diabetic with a later resolved code (not diabetic).
/// Patient 103: severely obese adult by BMI reading.
/// Patient 104: seventeen-year-old with a high BMI reading.
/// Patient 105: healthy adult.
/// Patient 106: kidney disease staged 3-5, died mid-2021.
pub fn cohort() -> Vec<Patient> {
    vec![
        Patient::new(101, date(1984, 5, 20))
            .with_clinical_event(ClinicalEvent::new("ast-dx", date(2012, 9, 3)))
            .with_medications([
                MedicationEvent::new("rx-inhaled", date(2020, 7, 14)),
                MedicationEvent::new("rx-oral", date(2019, 2, 1)),
                MedicationEvent::new("rx-oral", date(2020, 10, 5)),
            ]),
        Patient::new(102, date(1961, 12, 2)).with_clinical_events([
            ClinicalEvent::new("dm-dx", date(2008, 4, 18)),
            ClinicalEvent::new("dm-res", date(2014, 11, 30)),
        ]),
        Patient::new(103, date(1975, 8, 9)).with_clinical_event(ClinicalEvent::with_value(
            "bmi-obs",
            date(2019, 6, 22),
            Decimal::from(43),
        )),
        Patient::new(104, date(2003, 3, 1)).with_clinical_event(ClinicalEvent::with_value(
            "bmi-obs",
            date(2020, 1, 15),
            Decimal::from(44),
        )),
        Patient::new(105, date(1990, 1, 25)),
        Patient::new(106, date(1947, 7, 7))
            .with_death_date(date(2021, 6, 15))
            .with_clinical_events([
                ClinicalEvent::new("ckd-any-stage", date(2016, 2, 10)),
                ClinicalEvent::new("ckd-stage-3-5", date(2018, 5, 4)),
            ]),
    ]
}
