//! Reconciliation of untrusted model output against the deterministic
//! band mapping.
//!
//! The external collaborator authors three fields independently — a numeric
//! severity, a category label, and an urgency label — and nothing prevents
//! them from disagreeing with each other or with the band table. This
//! module forces every emitted result into consistency: the numeric
//! severity is authoritative, and the labels either match the band it
//! falls in exactly or are replaced by the band's own pair.

use serde::{Deserialize, Serialize};

use crate::bands::{categorize, clamp_severity, TriageCategory, Urgency};
use crate::models::result::{Pathway, TriageResult};

/// Severity substituted when the collaborator omits the numeric score.
/// Mid-scale, lands in the Moderate band.
pub const DEFAULT_SEVERITY: f64 = 50.0;

/// The structured payload proposed by the assessment collaborator,
/// before reconciliation. Every field is untrusted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateAssessment {
    #[serde(alias = "severity_score")]
    pub severity: Option<f64>,
    #[serde(alias = "severity_level")]
    pub category: Option<String>,
    pub urgency: Option<String>,
    #[serde(default)]
    pub assessment: String,
    #[serde(default)]
    pub recommended_service: String,
    #[serde(default)]
    pub reasoning: String,
}

/// Reconcile a candidate assessment into an internally consistent result.
///
/// The candidate's numeric severity is kept (defaulted to
/// [`DEFAULT_SEVERITY`] when absent, clamped into [0,100]); its
/// category/urgency labels are kept only when both parse to exactly the
/// pair dictated by the severity's band. Any mismatch, unparseable label,
/// or partial omission replaces both labels with the authoritative pair.
/// Narrative fields pass through untouched — no deterministic ground truth
/// exists for free text.
pub fn reconcile(candidate: CandidateAssessment, pathway: Pathway) -> TriageResult {
    let severity = clamp_severity(candidate.severity.unwrap_or(DEFAULT_SEVERITY));
    let band = categorize(severity);

    let proposed_category = candidate
        .category
        .as_deref()
        .and_then(|s| s.parse::<TriageCategory>().ok());
    let proposed_urgency = candidate
        .urgency
        .as_deref()
        .and_then(|s| s.parse::<Urgency>().ok());

    // Exact agreement on both labels keeps the candidate's pair; anything
    // else is an override with the band's own pair.
    let (category, urgency) = match (proposed_category, proposed_urgency) {
        (Some(c), Some(u)) if c == band.category && u == band.urgency => (c, u),
        _ => (band.category, band.urgency),
    };

    TriageResult {
        severity,
        category,
        urgency,
        action: band.action.to_string(),
        assessment: candidate.assessment,
        recommended_service: candidate.recommended_service,
        reasoning: candidate.reasoning,
        model_used: pathway,
    }
}
