// In-memory stand-in for the prediction backend. It keeps a patient list,
// hands out sequential ids and lets each test choose which calls fail.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

use hct_demo_cli::api::PatientService;
use hct_demo_cli::config::Credentials;
use hct_demo_cli::error::{ApiError, ApiResult};
use hct_demo_cli::patient::{CreatedPatient, NewPatient, PatientSummary, Prediction};
use reqwest::StatusCode;

pub const TOKEN: &str = "test-token";

#[derive(Default)]
pub struct FakeBackend {
    pub reject_login: bool,
    pub fail_listing: bool,
    pub fail_create: HashSet<String>,
    pub fail_predict: HashSet<String>,
    pub fail_delete: HashSet<String>,
    /// Prediction returned per patient name; anything else gets Medium.
    pub predictions: HashMap<String, Prediction>,

    pub token: Option<String>,
    pub patients: RefCell<Vec<PatientSummary>>,
    pub created_bodies: RefCell<Vec<serde_json::Value>>,
    pub predicted_ids: RefCell<Vec<String>>,
    pub deleted_ids: RefCell<Vec<String>>,
    pub next_id: Cell<u32>,
}

fn status(action: &'static str, status: StatusCode, body: &str) -> ApiError {
    ApiError::Status {
        action,
        status,
        body: body.into(),
    }
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_patients(names: &[&str]) -> Self {
        let fake = Self::new();
        for name in names {
            fake.insert(name);
        }
        fake
    }

    pub fn predict(mut self, name: &str, risk_category: &str, event_probability: f64) -> Self {
        self.predictions.insert(
            name.into(),
            Prediction {
                risk_category: risk_category.into(),
                event_probability,
            },
        );
        self
    }

    fn insert(&self, name: &str) -> String {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        let id = format!("p-{id}");
        self.patients.borrow_mut().push(PatientSummary {
            id: id.clone(),
            name: name.into(),
        });
        id
    }

    pub fn insert_named(&self, name: &str) -> String {
        self.insert(name)
    }

    /// A record with no usable name, as some backends return for drafts.
    pub fn insert_unnamed(&self) -> String {
        self.insert("")
    }

    pub fn names(&self) -> Vec<String> {
        self.patients.borrow().iter().map(|p| p.name.clone()).collect()
    }

    fn check_token(&self, action: &'static str) -> ApiResult<()> {
        match self.token.as_deref() {
            Some(TOKEN) => Ok(()),
            _ => Err(ApiError::MissingToken { action }),
        }
    }

    fn name_of(&self, id: &str) -> Option<String> {
        self.patients
            .borrow()
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.name.clone())
    }
}

impl PatientService for FakeBackend {
    fn authenticate(&mut self, credentials: &Credentials) -> ApiResult<String> {
        if self.reject_login || credentials.password != "admin123" {
            return Err(status("login", StatusCode::UNAUTHORIZED, "{\"detail\":\"Incorrect email or password\"}"));
        }
        self.token = Some(TOKEN.into());
        Ok(TOKEN.into())
    }

    fn create_patient(&self, patient: &NewPatient<'_>) -> ApiResult<CreatedPatient> {
        self.check_token("create patient")?;
        self.created_bodies
            .borrow_mut()
            .push(serde_json::to_value(patient).unwrap());
        if self.fail_create.contains(patient.name) {
            return Err(status("create patient", StatusCode::UNPROCESSABLE_ENTITY, "invalid field"));
        }
        Ok(CreatedPatient {
            id: self.insert(patient.name),
        })
    }

    fn create_prediction(&self, patient_id: &str) -> ApiResult<Prediction> {
        self.check_token("create prediction")?;
        self.predicted_ids.borrow_mut().push(patient_id.into());
        let name = self
            .name_of(patient_id)
            .ok_or_else(|| status("create prediction", StatusCode::NOT_FOUND, "Patient not found"))?;
        if self.fail_predict.contains(&name) {
            return Err(status("create prediction", StatusCode::INTERNAL_SERVER_ERROR, "model unavailable"));
        }
        Ok(self.predictions.get(&name).cloned().unwrap_or(Prediction {
            risk_category: "Medium".into(),
            event_probability: 0.5,
        }))
    }

    fn list_patients(&self) -> ApiResult<Vec<PatientSummary>> {
        self.check_token("list patients")?;
        if self.fail_listing {
            return Err(status("list patients", StatusCode::SERVICE_UNAVAILABLE, ""));
        }
        Ok(self.patients.borrow().clone())
    }

    fn delete_patient(&self, patient_id: &str) -> ApiResult<()> {
        self.check_token("delete patient")?;
        let name = self
            .name_of(patient_id)
            .ok_or_else(|| status("delete patient", StatusCode::NOT_FOUND, "Patient not found"))?;
        if self.fail_delete.contains(&name) {
            return Err(status("delete patient", StatusCode::FORBIDDEN, "not allowed"));
        }
        self.patients.borrow_mut().retain(|p| p.id != patient_id);
        self.deleted_ids.borrow_mut().push(patient_id.into());
        Ok(())
    }
}
