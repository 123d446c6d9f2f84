// rest_api/src/clients.rs

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, warn};

use models::errors::{RiskError, RiskResult};
use models::{ClinicalNote, Patient};
use risk_core::{NoteSource, PatientSource};

/// Reqwest-backed [`PatientSource`]: `GET {base_url}/{id}` against the
/// patient collaborator. A 404 is `PatientNotFound`; connection failures,
/// timeouts and unexpected statuses are `Unavailable`.
#[derive(Clone)]
pub struct HttpPatientSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPatientSource {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl PatientSource for HttpPatientSource {
    async fn get_patient(&self, id: &str) -> RiskResult<Patient> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), id);
        debug!("Fetching patient from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| RiskError::Unavailable(format!("patient service: {}", e)))?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(RiskError::PatientNotFound(id.to_string())),
            status if status.is_success() => response.json::<Patient>().await.map_err(|e| {
                RiskError::Unavailable(format!("patient service sent an unreadable body: {}", e))
            }),
            status => {
                warn!("Patient service returned {} for {}", status, url);
                Err(RiskError::Unavailable(format!(
                    "patient service returned {}",
                    status
                )))
            }
        }
    }
}

/// Reqwest-backed [`NoteSource`]: `GET {base_url}?patientId={id}` against
/// the note collaborator. An empty list body is success; a patient with
/// zero notes is never a 404 at this interface, so every failure here is
/// `Unavailable`.
#[derive(Clone)]
pub struct HttpNoteSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpNoteSource {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl NoteSource for HttpNoteSource {
    async fn get_notes(&self, patient_id: &str) -> RiskResult<Vec<ClinicalNote>> {
        let url = format!(
            "{}?patientId={}",
            self.base_url.trim_end_matches('/'),
            patient_id
        );
        debug!("Fetching notes from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| RiskError::Unavailable(format!("note service: {}", e)))?;

        if !response.status().is_success() {
            warn!("Note service returned {} for {}", response.status(), url);
            return Err(RiskError::Unavailable(format!(
                "note service returned {}",
                response.status()
            )));
        }

        response.json::<Vec<ClinicalNote>>().await.map_err(|e| {
            RiskError::Unavailable(format!("note service sent an unreadable body: {}", e))
        })
    }
}
