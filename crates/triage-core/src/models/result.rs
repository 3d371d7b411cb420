use serde::{Deserialize, Serialize};

use crate::bands::{TriageCategory, Urgency};

/// Which modality-specific pathway produced the narrative content of a
/// result. `None` means no external collaborator was involved (degraded
/// mode).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pathway {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "text-pathway")]
    Text,
    #[serde(rename = "image-pathway")]
    Image,
    #[serde(rename = "audio-video-pathway")]
    AudioVideo,
}

/// The record returned to the caller for one triage request.
///
/// Invariant: `category` and `urgency` are always the pair dictated by the
/// severity band containing `severity`, regardless of what the external
/// collaborator proposed. Constructed once per request; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageResult {
    /// Severity magnitude on the 0–100 scale.
    pub severity: f64,
    pub category: TriageCategory,
    pub urgency: Urgency,
    /// Recommended clinical disposition for the severity band.
    pub action: String,
    /// Free-text assessment narrative from the collaborator.
    pub assessment: String,
    /// Recommended service or department, chosen by the collaborator.
    pub recommended_service: String,
    /// Free-text reasoning narrative from the collaborator.
    pub reasoning: String,
    pub model_used: Pathway,
}
