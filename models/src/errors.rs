// models/src/errors.rs

use chrono::NaiveDate;
pub use thiserror::Error;

/// A validation error: malformed input to the pipeline or the classifier.
/// Surfaced to callers as a 400-equivalent and never retried.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// An empty or blank patient identifier was supplied.
    #[error("patient identifier must not be empty")]
    EmptyPatientId,
    /// The gender value does not resolve to a recognized category.
    #[error("gender '{0}' is not recognized")]
    UnrecognizedGender(String),
    /// A negative age was supplied to the classifier.
    #[error("age {0} is negative")]
    NegativeAge(i32),
    /// The patient's date of birth lies in the future.
    #[error("date of birth {0} is in the future")]
    BirthDateInFuture(NaiveDate),
}

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Failures of the risk-stratification pipeline. The three variants map
/// onto distinct HTTP statuses at the service boundary and must never be
/// collapsed into a default risk level.
#[derive(Debug, Error)]
pub enum RiskError {
    /// The patient identifier did not resolve at the patient collaborator.
    /// Terminal; a 404-equivalent.
    #[error("patient with identifier {0} was not found")]
    PatientNotFound(String),
    /// A collaborator could not be reached or timed out. A 503-equivalent;
    /// safe for the caller to retry.
    #[error("collaborator unavailable: {0}")]
    Unavailable(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type RiskResult<T> = Result<T, RiskError>;
