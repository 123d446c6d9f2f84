use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A patient's demographic record as served by the patient collaborator.
/// The core reads one snapshot per pipeline run and never caches it.
///
/// `gender` stays a string on the wire; it is parsed to [`crate::Gender`]
/// before classification so that unrecognized values surface as a
/// validation error instead of a deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: String,
    #[serde(default)]
    pub postal_address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}
