// risk_core/src/symptoms.rs

use models::ClinicalNote;

/// The production trigger terms: French clinical shorthand as written by
/// practitioners in note text. Domain vocabulary, not algorithm structure;
/// deployments may inject their own list via [`SymptomVocabulary::new`].
const DEFAULT_TERMS: [&str; 12] = [
    "hémoglobine a1c",
    "microalbumine",
    "taille",
    "poids",
    "fumeur",
    "fumeuse",
    "anormal",
    "cholestérol",
    "vertiges",
    "rechute",
    "réaction",
    "anticorps",
];

/// A set of clinical-signal terms matched case-insensitively as literal
/// substrings (no tokenization or stemming) against note text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymptomVocabulary {
    terms: Vec<String>,
}

impl SymptomVocabulary {
    /// Builds a vocabulary from an arbitrary term list. Terms are
    /// normalized to lowercase once here so matching never depends on the
    /// casing of the configured list.
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms = terms
            .into_iter()
            .map(|term| term.as_ref().to_lowercase())
            .collect();
        Self { terms }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Total signal count over a set of notes.
    ///
    /// Each note contributes the number of distinct vocabulary terms found
    /// in its content: a term repeated within one note counts once for that
    /// note, while the same term across two notes counts twice. Note order
    /// is irrelevant; the result is a sum over an unordered multiset.
    pub fn count_signals(&self, notes: &[ClinicalNote]) -> u32 {
        notes.iter().map(|note| self.count_in_note(note)).sum()
    }

    fn count_in_note(&self, note: &ClinicalNote) -> u32 {
        let content = match note.note_content.as_deref() {
            Some(text) if !text.is_empty() => text.to_lowercase(),
            _ => return 0,
        };
        self.terms
            .iter()
            .filter(|term| content.contains(term.as_str()))
            .count() as u32
    }
}

impl Default for SymptomVocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_TERMS)
    }
}
