//! End-to-end rule scenarios through the public API

use chrono::NaiveDate;
use clinrisk_eval::{Codelists, EvaluationPlan, Variable, VariableSet, at_risk, build_dataset};
use clinrisk_types::{ClinicalEvent, CodeSet, Indicator, MedicationEvent, Patient};
use pretty_assertions::assert_eq;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn full_codelists() -> Codelists {
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
        ..Codelists::default()
    }
}

#[test]
fn multi_condition_patient_fills_the_expected_columns() {
    let codes = full_codelists();
    let reference = date(2020, 12, 8);
    // Diagnosed diabetic, recent chemotherapy, stale asthma admission
    let patient = Patient::new(7, date(1965, 4, 2))
        .with_clinical_event(ClinicalEvent::new("dm-dx", date(2012, 5, 1)))
        .with_clinical_event(ClinicalEvent::new("chemo", date(2019, 3, 1)))
        .with_clinical_event(ClinicalEvent::new("ast-adm", date(2016, 1, 1)));

    let dataset = build_dataset(
        std::slice::from_ref(&patient),
        &VariableSet::primis(),
        &codes,
        &EvaluationPlan::single(reference),
    )
    .unwrap();

    assert_eq!(dataset.column("diabetes").unwrap(), &[Indicator::Bool(true)]);
    assert_eq!(
        dataset.column("immunosuppressed").unwrap(),
        &[Indicator::Bool(true)]
    );
    // The 2016 admission is outside the two-year asthma window
    assert_eq!(dataset.column("crd").unwrap(), &[Indicator::Bool(false)]);
    assert_eq!(dataset.column("atrisk").unwrap(), &[Indicator::Bool(true)]);
}

#[test]
fn at_risk_agrees_with_each_single_condition_patient() {
    let codes = full_codelists();
    let reference = date(2020, 12, 8);
    let risk_events = [
        "imm-dx", "ckd-dx", "resp-dx", "dm-dx", "liver", "neuro", "heart", "spleen", "learndis",
        "smi-dx",
    ];

    for code in risk_events {
        let patient = Patient::new(1, date(1970, 1, 1))
            .with_clinical_event(ClinicalEvent::new(code, date(2018, 6, 1)));
        assert!(at_risk(&patient, &codes, reference), "code {code}");
    }

    let healthy = Patient::new(2, date(1970, 1, 1));
    assert!(!at_risk(&healthy, &codes, reference));
}

#[test]
fn treated_asthma_is_at_risk_through_the_respiratory_group() {
    let codes = full_codelists();
    let reference = date(2020, 12, 8);
    let patient = Patient::new(3, date(1985, 7, 1))
        .with_clinical_event(ClinicalEvent::new("ast-dx", date(2014, 2, 1)))
        .with_medication(MedicationEvent::new("rx-inhaled", date(2020, 5, 1)))
        .with_medication(MedicationEvent::new("rx-oral", date(2019, 3, 1)))
        .with_medication(MedicationEvent::new("rx-oral", date(2020, 9, 1)));

    let dataset = build_dataset(
        std::slice::from_ref(&patient),
        &VariableSet::primis(),
        &codes,
        &EvaluationPlan::single(reference),
    )
    .unwrap();

    assert_eq!(dataset.column("crd").unwrap(), &[Indicator::Bool(true)]);
    assert_eq!(dataset.column("atrisk").unwrap(), &[Indicator::Bool(true)]);
}

#[test]
fn conditions_resolve_between_yearly_reference_dates() {
    let codes = full_codelists();
    // Severe mental illness goes into remission between year 0 and year 1
    let patient = Patient::new(4, date(1975, 1, 1))
        .with_clinical_event(ClinicalEvent::new("smi-dx", date(2019, 6, 1)))
        .with_clinical_event(ClinicalEvent::new("smi-res", date(2021, 3, 1)));
    let plan = EvaluationPlan::yearly(date(2020, 12, 8), 2).unwrap();

    let dataset = build_dataset(
        std::slice::from_ref(&patient),
        &VariableSet::new().with(Variable::SevereMentalIllness),
        &codes,
        &plan,
    )
    .unwrap();

    assert_eq!(dataset.column("smi_0").unwrap(), &[Indicator::Bool(true)]);
    assert_eq!(dataset.column("smi_1").unwrap(), &[Indicator::Bool(false)]);
}

#[test]
fn supplemental_variables_sit_next_to_the_primis_set() {
    let codes = Codelists {
        solid_organ_transplant: CodeSet::from_codes(["transplant"]),
        hiv_aids: CodeSet::from_codes(["hiv"]),
        cancer_nonhaem: CodeSet::from_codes(["ca-solid"]),
        cancer_haem: CodeSet::from_codes(["ca-haem"]),
        ..Codelists::default()
    };
    let reference = date(2020, 12, 8);
    let patient = Patient::new(5, date(1958, 11, 23))
        .with_clinical_event(ClinicalEvent::new("transplant", date(2010, 1, 1)))
        .with_clinical_event(ClinicalEvent::new("ca-haem", date(2019, 8, 1)));

    let variables = VariableSet::new()
        .with(Variable::Age)
        .with(Variable::SolidOrganTransplant)
        .with(Variable::HivAids)
        .with(Variable::RecentCancer);
    let dataset = build_dataset(
        std::slice::from_ref(&patient),
        &variables,
        &codes,
        &EvaluationPlan::single(reference),
    )
    .unwrap();

    assert_eq!(dataset.column("age").unwrap(), &[Indicator::Int(62)]);
    assert_eq!(
        dataset.column("sol_org_trans").unwrap(),
        &[Indicator::Bool(true)]
    );
    assert_eq!(dataset.column("hiv_aids").unwrap(), &[Indicator::Bool(false)]);
    assert_eq!(dataset.column("cancer").unwrap(), &[Indicator::Bool(true)]);
}
