pub mod age;
pub mod classifier;
pub mod orchestrator;
pub mod symptoms;

pub use age::age_in_years;
pub use classifier::{classify, rules, AgeBand, RiskRule};
pub use orchestrator::{NoteSource, PatientSource, RiskPipeline};
pub use symptoms::SymptomVocabulary;
