pub mod errors;
pub mod medical;

pub use errors::{RiskError, RiskResult, ValidationError, ValidationResult};
pub use medical::{ClinicalNote, Gender, Patient, RiskLevel};
