use serde::{Deserialize, Serialize};

/// Structured fields pulled out of a resume's text.
///
/// Every field is always present; absent matches stay at their empty default,
/// so the serialized object always carries all six keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// De-duplicated, sorted skill names from the fixed vocabulary.
    pub skills: Vec<String>,
    /// Reserved; no extraction logic populates it.
    pub education: Vec<String>,
    /// Reserved; no extraction logic populates it.
    pub experience: Vec<String>,
}
