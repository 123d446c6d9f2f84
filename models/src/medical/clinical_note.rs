use serde::{Deserialize, Serialize};

/// A free-text clinical note as served by the note collaborator.
/// `note_content` may legitimately be null or absent; an empty note
/// contributes zero signals rather than an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalNote {
    #[serde(default)]
    pub id: Option<String>,
    pub patient_id: String,
    #[serde(default)]
    pub note_content: Option<String>,
    /// Authored date, `yyyy-MM-ddTHH:mm` as stored by the collaborator.
    /// Kept opaque; the pipeline never interprets it.
    #[serde(default)]
    pub note_date: Option<String>,
}

impl ClinicalNote {
    pub fn with_content(patient_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: None,
            patient_id: patient_id.into(),
            note_content: Some(content.into()),
            note_date: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ClinicalNote;

    #[test]
    fn should_deserialize_note_with_null_content() {
        let payload = r#"{"id":"abc123","patientId":"2","noteContent":null}"#;
        let note: ClinicalNote = serde_json::from_str(payload).unwrap();
        assert_eq!(note.patient_id, "2");
        assert!(note.note_content.is_none());
    }

    #[test]
    fn should_deserialize_collaborator_payload() {
        let payload = r#"{
            "id": "66f1a2",
            "patientId": "3",
            "noteContent": "Le patient déclare qu'il fume depuis peu",
            "noteDate": "2024-03-12T10:30"
        }"#;
        let note: ClinicalNote = serde_json::from_str(payload).unwrap();
        assert_eq!(note.note_date.as_deref(), Some("2024-03-12T10:30"));
    }
}
