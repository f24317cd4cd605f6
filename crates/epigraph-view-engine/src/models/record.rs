use serde::{Deserialize, Serialize};

/// One epigraph as delivered by the upstream data loader.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpigraphRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Transcription markup.
    #[serde(alias = "epigraph_text")]
    pub text: String,
    #[serde(default)]
    pub translations: Vec<TranslationRecord>,
    /// The upstream field is spelled `aparatus_notes`; both spellings are accepted.
    #[serde(default, alias = "aparatus_notes")]
    pub apparatus_notes: Vec<NoteRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRecord {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub notes: Vec<NoteRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteRecord {
    pub note: String,
    /// Line-range string, e.g. `"7"` or `"3-5"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,
}
