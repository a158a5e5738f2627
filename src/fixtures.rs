// Static demo data: the ten sample transplant cases loaded by
// `add-sample-patients` and the names `delete-demo-patients` removes.

use crate::patient::{ClinicalProfile, Comorbidities, RiskCategory};

/// One demo case: who it is, what the model is expected to say, and the
/// clinical fields sent to the backend.
#[derive(Debug, Clone, Copy)]
pub struct SamplePatient {
    pub name: &'static str,
    pub description: &'static str,
    pub expected_risk: RiskCategory,
    pub profile: ClinicalProfile,
}

pub static SAMPLE_PATIENTS: [SamplePatient; 10] = [
    SamplePatient {
        name: "Sarah Johnson",
        description: "Young AML, MSD, excellent prognosis",
        expected_risk: RiskCategory::Low,
        profile: ClinicalProfile {
            age_at_hct: 25,
            year_hct: 2024,
            race_group: "White",
            ethnicity: "Not Hispanic",
            donor_age: 28,
            donor_related: "MSD",
            sex_match: "Matched",
            prim_disease_hct: "AML",
            dri_score: "Low",
            cyto_score: "Good",
            mrd_hct: "Negative",
            conditioning_intensity: "MAC",
            graft_type: "PBSC",
            gvhd_proph: "Tacrolimus/MTX",
            tbi_status: "No TBI",
            hla_match_a_high: 2,
            hla_match_b_high: 2,
            hla_match_c_high: 2,
            hla_match_drb1_high: 2,
            hla_high_res_8: 8,
            karnofsky_score: 100,
            comorbidity_score: 0,
            comorbidities: Comorbidities::NONE,
        },
    },
    SamplePatient {
        name: "Michael Williams",
        description: "Middle-aged MDS, MUD, moderate risk",
        expected_risk: RiskCategory::Medium,
        profile: ClinicalProfile {
            age_at_hct: 52,
            year_hct: 2024,
            race_group: "White",
            ethnicity: "Not Hispanic",
            donor_age: 38,
            donor_related: "MUD",
            sex_match: "Mismatched",
            prim_disease_hct: "MDS",
            dri_score: "Intermediate",
            cyto_score: "Intermediate",
            mrd_hct: "Positive",
            conditioning_intensity: "RIC",
            graft_type: "PBSC",
            gvhd_proph: "Tacrolimus/MMF",
            tbi_status: "TBI 200cGy",
            hla_match_a_high: 2,
            hla_match_b_high: 2,
            hla_match_c_high: 1,
            hla_match_drb1_high: 2,
            hla_high_res_8: 7,
            karnofsky_score: 80,
            comorbidity_score: 2,
            comorbidities: Comorbidities {
                diabetes: true,
                ..Comorbidities::NONE
            },
        },
    },
    SamplePatient {
        name: "Ahmed Hassan",
        description: "Elderly CML crisis, poor prognosis",
        expected_risk: RiskCategory::High,
        profile: ClinicalProfile {
            age_at_hct: 67,
            year_hct: 2023,
            race_group: "White",
            ethnicity: "Not Hispanic",
            donor_age: 45,
            donor_related: "MUD",
            sex_match: "Mismatched",
            prim_disease_hct: "CML",
            dri_score: "Very High",
            cyto_score: "Poor",
            mrd_hct: "Positive",
            conditioning_intensity: "MAC",
            graft_type: "PBSC",
            gvhd_proph: "Tacrolimus/MTX",
            tbi_status: "TBI 1200cGy",
            hla_match_a_high: 2,
            hla_match_b_high: 1,
            hla_match_c_high: 1,
            hla_match_drb1_high: 2,
            hla_high_res_8: 6,
            karnofsky_score: 60,
            comorbidity_score: 5,
            comorbidities: Comorbidities {
                cardiac: true,
                diabetes: true,
                pulm_moderate: true,
                ..Comorbidities::NONE
            },
        },
    },
    SamplePatient {
        name: "Emily Chen",
        description: "Pediatric ALL, haploidentical",
        expected_risk: RiskCategory::Medium,
        profile: ClinicalProfile {
            age_at_hct: 10,
            year_hct: 2024,
            race_group: "Asian",
            ethnicity: "Not Hispanic",
            donor_age: 38,
            donor_related: "Haploidentical",
            sex_match: "Matched",
            prim_disease_hct: "ALL",
            dri_score: "Intermediate",
            cyto_score: "Intermediate",
            mrd_hct: "Negative",
            conditioning_intensity: "MAC",
            graft_type: "BM",
            gvhd_proph: "PTCy/Tacrolimus",
            tbi_status: "TBI 1200cGy",
            hla_match_a_high: 1,
            hla_match_b_high: 1,
            hla_match_c_high: 1,
            hla_match_drb1_high: 2,
            hla_high_res_8: 5,
            karnofsky_score: 100,
            comorbidity_score: 0,
            comorbidities: Comorbidities::NONE,
        },
    },
    SamplePatient {
        name: "James Thompson",
        description: "Autologous myeloma, good status",
        expected_risk: RiskCategory::Low,
        profile: ClinicalProfile {
            age_at_hct: 58,
            year_hct: 2024,
            race_group: "Black or African American",
            ethnicity: "Not Hispanic",
            donor_age: 58,
            donor_related: "Autologous",
            sex_match: "Matched",
            prim_disease_hct: "MM",
            dri_score: "Low",
            cyto_score: "Good",
            mrd_hct: "Negative",
            conditioning_intensity: "MAC",
            graft_type: "PBSC",
            gvhd_proph: "None",
            tbi_status: "No TBI",
            hla_match_a_high: 2,
            hla_match_b_high: 2,
            hla_match_c_high: 2,
            hla_match_drb1_high: 2,
            hla_high_res_8: 8,
            karnofsky_score: 90,
            comorbidity_score: 1,
            comorbidities: Comorbidities {
                obesity: true,
                ..Comorbidities::NONE
            },
        },
    },
    SamplePatient {
        name: "Fatima Al-Rahman",
        description: "Young ALL, sibling donor",
        expected_risk: RiskCategory::Low,
        profile: ClinicalProfile {
            age_at_hct: 22,
            year_hct: 2024,
            race_group: "White",
            ethnicity: "Not Hispanic",
            donor_age: 19,
            donor_related: "MSD",
            sex_match: "Matched",
            prim_disease_hct: "ALL",
            dri_score: "Low",
            cyto_score: "Good",
            mrd_hct: "Negative",
            conditioning_intensity: "MAC",
            graft_type: "PBSC",
            gvhd_proph: "Tacrolimus/MTX",
            tbi_status: "TBI 1200cGy",
            hla_match_a_high: 2,
            hla_match_b_high: 2,
            hla_match_c_high: 2,
            hla_match_drb1_high: 2,
            hla_high_res_8: 8,
            karnofsky_score: 100,
            comorbidity_score: 0,
            comorbidities: Comorbidities::NONE,
        },
    },
    SamplePatient {
        name: "Robert Martinez",
        description: "Elderly lymphoma, comorbidities",
        expected_risk: RiskCategory::High,
        profile: ClinicalProfile {
            age_at_hct: 71,
            year_hct: 2023,
            race_group: "Hispanic/Latino",
            ethnicity: "Hispanic or Latino",
            donor_age: 50,
            donor_related: "MUD",
            sex_match: "Mismatched",
            prim_disease_hct: "NHL",
            dri_score: "High",
            cyto_score: "Poor",
            mrd_hct: "Positive",
            conditioning_intensity: "RIC",
            graft_type: "PBSC",
            gvhd_proph: "Tacrolimus/MMF",
            tbi_status: "TBI 200cGy",
            hla_match_a_high: 2,
            hla_match_b_high: 1,
            hla_match_c_high: 2,
            hla_match_drb1_high: 2,
            hla_high_res_8: 7,
            karnofsky_score: 50,
            comorbidity_score: 6,
            comorbidities: Comorbidities {
                arrhythmia: true,
                cardiac: true,
                pulm_severe: true,
                renal_issue: true,
                ..Comorbidities::NONE
            },
        },
    },
    SamplePatient {
        name: "David Kim",
        description: "Middle-aged AML, good match",
        expected_risk: RiskCategory::Medium,
        profile: ClinicalProfile {
            age_at_hct: 48,
            year_hct: 2024,
            race_group: "Asian",
            ethnicity: "Not Hispanic",
            donor_age: 32,
            donor_related: "MUD",
            sex_match: "Matched",
            prim_disease_hct: "AML",
            dri_score: "Intermediate",
            cyto_score: "Intermediate",
            mrd_hct: "Negative",
            conditioning_intensity: "MAC",
            graft_type: "PBSC",
            gvhd_proph: "Tacrolimus/MTX",
            tbi_status: "No TBI",
            hla_match_a_high: 2,
            hla_match_b_high: 2,
            hla_match_c_high: 2,
            hla_match_drb1_high: 2,
            hla_high_res_8: 8,
            karnofsky_score: 90,
            comorbidity_score: 1,
            comorbidities: Comorbidities {
                hepatic_mild: true,
                ..Comorbidities::NONE
            },
        },
    },
    SamplePatient {
        name: "Jennifer Brown",
        description: "Cord blood transplant",
        expected_risk: RiskCategory::Medium,
        profile: ClinicalProfile {
            age_at_hct: 35,
            year_hct: 2024,
            race_group: "Black or African American",
            ethnicity: "Not Hispanic",
            donor_age: 0,
            donor_related: "UCB",
            sex_match: "Unknown",
            prim_disease_hct: "AML",
            dri_score: "Intermediate",
            cyto_score: "Intermediate",
            mrd_hct: "Negative",
            conditioning_intensity: "RIC",
            graft_type: "UCB",
            gvhd_proph: "CSA/MMF",
            tbi_status: "TBI 200cGy",
            hla_match_a_high: 1,
            hla_match_b_high: 1,
            hla_match_c_high: 1,
            hla_match_drb1_high: 1,
            hla_high_res_8: 4,
            karnofsky_score: 80,
            comorbidity_score: 1,
            comorbidities: Comorbidities::NONE,
        },
    },
    SamplePatient {
        name: "William Anderson",
        description: "Very high risk - multiple factors",
        expected_risk: RiskCategory::High,
        profile: ClinicalProfile {
            age_at_hct: 65,
            year_hct: 2023,
            race_group: "White",
            ethnicity: "Not Hispanic",
            donor_age: 55,
            donor_related: "MMUD",
            sex_match: "Mismatched",
            prim_disease_hct: "MDS",
            dri_score: "Very High",
            cyto_score: "Very Poor",
            mrd_hct: "Positive",
            conditioning_intensity: "MAC",
            graft_type: "PBSC",
            gvhd_proph: "Tacrolimus/MTX",
            tbi_status: "TBI 1200cGy",
            hla_match_a_high: 1,
            hla_match_b_high: 1,
            hla_match_c_high: 1,
            hla_match_drb1_high: 1,
            hla_high_res_8: 4,
            karnofsky_score: 50,
            comorbidity_score: 7,
            comorbidities: Comorbidities {
                arrhythmia: true,
                cardiac: true,
                diabetes: true,
                hepatic_mild: true,
                prior_tumor: true,
                pulm_severe: true,
                renal_issue: true,
                ..Comorbidities::NONE
            },
        },
    },
];

/// Names removed by `delete-demo-patients`. Emily Chen, Michael Williams,
/// Fatima Al-Rahman and David Kim are left in place.
pub static DEMO_PATIENT_NAMES: [&str; 6] = [
    "James Thompson",
    "Sarah Johnson",
    "Jennifer Brown",
    "Robert Martinez",
    "Ahmed Hassan",
    "William Anderson",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sample_names_are_unique() {
        let names: HashSet<_> = SAMPLE_PATIENTS.iter().map(|p| p.name).collect();
        assert_eq!(names.len(), SAMPLE_PATIENTS.len());
    }

    #[test]
    fn demo_names_are_sample_patients() {
        for name in DEMO_PATIENT_NAMES {
            assert!(
                SAMPLE_PATIENTS.iter().any(|p| p.name == name),
                "{name} is not a sample patient"
            );
        }
    }

    #[test]
    fn hla_totals_are_consistent() {
        for p in &SAMPLE_PATIENTS {
            let pr = &p.profile;
            let sum = pr.hla_match_a_high + pr.hla_match_b_high + pr.hla_match_c_high + pr.hla_match_drb1_high;
            assert_eq!(sum, pr.hla_high_res_8, "{}", p.name);
        }
    }

    #[test]
    fn sarah_johnson_is_the_low_risk_reference_case() {
        let sarah = SAMPLE_PATIENTS.iter().find(|p| p.name == "Sarah Johnson").unwrap();
        assert_eq!(sarah.expected_risk, RiskCategory::Low);
        assert_eq!(sarah.profile.age_at_hct, 25);
        assert_eq!(sarah.profile.dri_score, "Low");
        assert_eq!(sarah.profile.cyto_score, "Good");
        assert_eq!(sarah.profile.mrd_hct, "Negative");
    }
}
