use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Structured patient context accompanying a triage request.
///
/// Everything is optional; the free-text fields are forwarded to the
/// assessment collaborator verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientContext {
    pub age: Option<u32>,
    pub gender: Option<String>,
    /// Vital signs as reported, keyed by measurement name.
    #[serde(default)]
    pub vital_signs: BTreeMap<String, String>,
    pub medical_history: Option<String>,
    pub current_medications: Option<String>,
    pub allergies: Option<String>,
}

/// Age below which the pediatric guideline rendering is selected.
pub const PEDIATRIC_AGE_THRESHOLD: u32 = 18;

impl PatientContext {
    /// Whether this patient falls in the pediatric bracket.
    /// An absent age is treated as adult.
    pub fn is_pediatric(&self) -> bool {
        self.age.is_some_and(|a| a < PEDIATRIC_AGE_THRESHOLD)
    }
}
