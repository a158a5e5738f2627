// API client module: a small blocking HTTP client for the HCT prediction
// backend. One request is in flight at a time; the session token lives
// only in memory for the lifetime of the client.

use anyhow::{Context, Result};
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{Credentials, Settings};
use crate::error::{ApiError, ApiResult};
use crate::patient::{CreatedPatient, NewPatient, PatientSummary, Prediction, PredictionRequest};

/// Login request payload.
#[derive(Serialize, Debug)]
pub struct AuthRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

impl<'a> From<&'a Credentials> for AuthRequest<'a> {
    fn from(c: &'a Credentials) -> Self {
        AuthRequest {
            email: &c.email,
            password: &c.password,
        }
    }
}

/// Response of `POST /auth/login`. The backend sends more fields (token
/// type, user info); only the token is needed here.
#[derive(Deserialize, Debug)]
pub struct AuthResponse {
    pub access_token: String,
}

/// Operations the two programs need from the backend. `ApiClient` is the
/// real implementation; tests drive the procedures with an in-memory one.
pub trait PatientService {
    /// Log in and keep the returned bearer token for later calls.
    fn authenticate(&mut self, credentials: &Credentials) -> ApiResult<String>;
    fn create_patient(&self, patient: &NewPatient<'_>) -> ApiResult<CreatedPatient>;
    fn create_prediction(&self, patient_id: &str) -> ApiResult<Prediction>;
    fn list_patients(&self) -> ApiResult<Vec<PatientSummary>>;
    fn delete_patient(&self, patient_id: &str) -> ApiResult<()>;
}

/// Holds a reqwest blocking client, the backend base URL and, after
/// login, the bearer token.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient {
            client,
            base_url: settings.backend_url.clone(),
            token: None,
        })
    }

    /// Store a token for subsequent authenticated requests.
    pub fn set_token(&mut self, token: &str) {
        self.token = Some(token.to_string());
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach `Authorization: Bearer <token>`, or fail if nobody logged in.
    fn authorized(&self, req: RequestBuilder, action: &'static str) -> ApiResult<RequestBuilder> {
        match &self.token {
            Some(t) => Ok(req.bearer_auth(t)),
            None => Err(ApiError::MissingToken { action }),
        }
    }

    /// Send a request and turn anything but 200 OK into an error carrying
    /// the response body.
    fn send(&self, req: RequestBuilder, action: &'static str) -> ApiResult<Response> {
        let res = req
            .send()
            .map_err(|source| ApiError::Transport { action, source })?;
        let status = res.status();
        debug!(action, %status, url = %res.url(), "backend responded");
        if status != StatusCode::OK {
            let body = res.text().unwrap_or_default();
            return Err(ApiError::Status { action, status, body });
        }
        Ok(res)
    }

    fn json<T: DeserializeOwned>(res: Response, action: &'static str) -> ApiResult<T> {
        res.json().map_err(|source| ApiError::Decode { action, source })
    }

    /// POST `/auth/login` and parse the token response.
    pub fn login(&self, req: &AuthRequest<'_>) -> ApiResult<AuthResponse> {
        let res = self.send(self.client.post(self.url("/auth/login")).json(req), "login")?;
        Self::json(res, "login")
    }
}

impl PatientService for ApiClient {
    fn authenticate(&mut self, credentials: &Credentials) -> ApiResult<String> {
        let resp = self.login(&AuthRequest::from(credentials))?;
        self.set_token(&resp.access_token);
        Ok(resp.access_token)
    }

    fn create_patient(&self, patient: &NewPatient<'_>) -> ApiResult<CreatedPatient> {
        let action = "create patient";
        let req = self.authorized(self.client.post(self.url("/patients")).json(patient), action)?;
        Self::json(self.send(req, action)?, action)
    }

    fn create_prediction(&self, patient_id: &str) -> ApiResult<Prediction> {
        let action = "create prediction";
        let body = PredictionRequest { patient_id };
        let req = self.authorized(self.client.post(self.url("/predictions")).json(&body), action)?;
        Self::json(self.send(req, action)?, action)
    }

    fn list_patients(&self) -> ApiResult<Vec<PatientSummary>> {
        let action = "list patients";
        let req = self.authorized(self.client.get(self.url("/patients")), action)?;
        Self::json(self.send(req, action)?, action)
    }

    fn delete_patient(&self, patient_id: &str) -> ApiResult<()> {
        let action = "delete patient";
        let url = self.url(&format!("/patients/{}", patient_id));
        let req = self.authorized(self.client.delete(url), action)?;
        self.send(req, action)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::AUTHORIZATION;

    fn client() -> ApiClient {
        ApiClient::new(&Settings::with_backend_url(Some("http://backend.test/".into()))).unwrap()
    }

    #[test]
    fn urls_join_base_and_path() {
        let api = client();
        assert_eq!(api.url("/patients"), "http://backend.test/patients");
    }

    #[test]
    fn authorized_requests_need_a_token() {
        let api = client();
        let err = api
            .authorized(api.client.get(api.url("/patients")), "list patients")
            .unwrap_err();
        assert!(matches!(err, ApiError::MissingToken { action: "list patients" }));

        let err = api.delete_patient("abc").unwrap_err();
        assert!(matches!(err, ApiError::MissingToken { .. }));
    }

    #[test]
    fn token_goes_into_bearer_header() {
        let mut api = client();
        api.set_token("tok-123");
        let req = api
            .authorized(api.client.get(api.url("/patients")), "list patients")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(req.headers()[AUTHORIZATION], "Bearer tok-123");
    }

    #[test]
    fn login_body_uses_email_and_password() {
        let creds = Credentials::default();
        let body = serde_json::to_value(AuthRequest::from(&creds)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "email": "admin@example.com", "password": "admin123" })
        );
    }
}
