// risk_core/src/orchestrator.rs

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info};

use models::errors::{RiskResult, ValidationError};
use models::{ClinicalNote, Gender, Patient, RiskLevel};

use crate::age::age_in_years;
use crate::classifier::classify;
use crate::symptoms::SymptomVocabulary;

/// Read-only access to the patient collaborator. Implementations signal
/// `RiskError::PatientNotFound` when the identifier does not resolve and
/// `RiskError::Unavailable` when the collaborator cannot be reached within
/// a bounded timeout.
#[async_trait]
pub trait PatientSource: Send + Sync {
    async fn get_patient(&self, id: &str) -> RiskResult<Patient>;
}

/// Read-only access to the note collaborator. An empty result is success:
/// a patient with zero notes is not an error.
#[async_trait]
pub trait NoteSource: Send + Sync {
    async fn get_notes(&self, patient_id: &str) -> RiskResult<Vec<ClinicalNote>>;
}

/// The risk-stratification pipeline: fetch demographics and notes, count
/// symptom signals, classify. Stateless and idempotent; one instance
/// serves any number of concurrent requests.
pub struct RiskPipeline<P, N> {
    patients: P,
    notes: N,
    vocabulary: SymptomVocabulary,
}

impl<P, N> RiskPipeline<P, N>
where
    P: PatientSource,
    N: NoteSource,
{
    pub fn new(patients: P, notes: N, vocabulary: SymptomVocabulary) -> Self {
        Self {
            patients,
            notes,
            vocabulary,
        }
    }

    /// Classifies one patient's diabetes risk.
    ///
    /// The two lookups have no data dependency and are issued concurrently;
    /// the first failure cancels the other and propagates unchanged, so the
    /// classifier never runs on partial input. Dropping the returned future
    /// drops both in-flight lookups with it.
    pub async fn classify_risk(&self, patient_id: &str) -> RiskResult<RiskLevel> {
        if patient_id.trim().is_empty() {
            return Err(ValidationError::EmptyPatientId.into());
        }

        let (patient, notes) = tokio::try_join!(
            self.patients.get_patient(patient_id),
            self.notes.get_notes(patient_id),
        )?;

        let signal_count = self.vocabulary.count_signals(&notes);
        let age = age_in_years(patient.date_of_birth, Utc::now().date_naive())?;
        let gender: Gender = patient.gender.parse()?;
        debug!(
            "Patient {}: {} notes, {} signals, age {}, gender {}",
            patient_id,
            notes.len(),
            signal_count,
            age,
            gender
        );

        let level = classify(signal_count, age, gender)?;
        info!("Patient {} classified as {}", patient_id, level);
        Ok(level)
    }
}
