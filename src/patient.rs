// Patient and prediction payloads exchanged with the prediction backend.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Risk label the backend assigns to a patient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskCategory {
    Low,
    Medium,
    High,
}

impl RiskCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskCategory::Low => "Low",
            RiskCategory::Medium => "Medium",
            RiskCategory::High => "High",
        }
    }

    /// Labels are compared as plain text so that an unexpected label from
    /// the backend is reported as a mismatch instead of a parse error.
    pub fn matches(&self, label: &str) -> bool {
        self.as_str() == label
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Comorbidity flags. The backend expects `"Y"` for a present condition
/// and no field at all otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Comorbidities {
    #[serde(skip_serializing_if = "is_absent", serialize_with = "yes_flag")]
    pub arrhythmia: bool,
    #[serde(skip_serializing_if = "is_absent", serialize_with = "yes_flag")]
    pub cardiac: bool,
    #[serde(skip_serializing_if = "is_absent", serialize_with = "yes_flag")]
    pub diabetes: bool,
    #[serde(skip_serializing_if = "is_absent", serialize_with = "yes_flag")]
    pub hepatic_mild: bool,
    #[serde(skip_serializing_if = "is_absent", serialize_with = "yes_flag")]
    pub obesity: bool,
    #[serde(skip_serializing_if = "is_absent", serialize_with = "yes_flag")]
    pub prior_tumor: bool,
    #[serde(skip_serializing_if = "is_absent", serialize_with = "yes_flag")]
    pub pulm_moderate: bool,
    #[serde(skip_serializing_if = "is_absent", serialize_with = "yes_flag")]
    pub pulm_severe: bool,
    #[serde(skip_serializing_if = "is_absent", serialize_with = "yes_flag")]
    pub renal_issue: bool,
}

impl Comorbidities {
    pub const NONE: Comorbidities = Comorbidities {
        arrhythmia: false,
        cardiac: false,
        diabetes: false,
        hepatic_mild: false,
        obesity: false,
        prior_tumor: false,
        pulm_moderate: false,
        pulm_severe: false,
        renal_issue: false,
    };
}

fn is_absent(flag: &bool) -> bool {
    !*flag
}

fn yes_flag<S: Serializer>(_: &bool, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str("Y")
}

/// Clinical attributes of a transplant case, in the field names the
/// backend's patient model uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClinicalProfile {
    pub age_at_hct: u32,
    pub year_hct: u16,
    pub race_group: &'static str,
    pub ethnicity: &'static str,
    pub donor_age: u32,
    pub donor_related: &'static str,
    pub sex_match: &'static str,
    pub prim_disease_hct: &'static str,
    pub dri_score: &'static str,
    pub cyto_score: &'static str,
    pub mrd_hct: &'static str,
    pub conditioning_intensity: &'static str,
    pub graft_type: &'static str,
    pub gvhd_proph: &'static str,
    pub tbi_status: &'static str,
    pub hla_match_a_high: u8,
    pub hla_match_b_high: u8,
    pub hla_match_c_high: u8,
    pub hla_match_drb1_high: u8,
    pub hla_high_res_8: u8,
    pub karnofsky_score: u8,
    pub comorbidity_score: u8,
    #[serde(flatten)]
    pub comorbidities: Comorbidities,
}

/// Body of `POST /patients`: the display name merged with the clinical
/// fields into one flat object.
#[derive(Debug, Serialize)]
pub struct NewPatient<'a> {
    pub name: &'a str,
    #[serde(flatten)]
    pub profile: &'a ClinicalProfile,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedPatient {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
}

/// Entry of `GET /patients`. Records without a name get an empty one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PatientSummary {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct PredictionRequest<'a> {
    pub patient_id: &'a str,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Prediction {
    pub risk_category: String,
    pub event_probability: f64,
}

/// Ids are strings on the wire, but a numeric id is accepted and kept as
/// its decimal text so it can go straight into a URL path.
fn id_string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    match serde_json::Value::deserialize(d)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string or numeric id, got {}",
            other
        ))),
    }
}
