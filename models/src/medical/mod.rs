pub mod clinical_note;
pub mod gender;
pub mod patient;
pub mod risk_level;

pub use clinical_note::ClinicalNote;
pub use gender::Gender;
pub use patient::Patient;
pub use risk_level::RiskLevel;
