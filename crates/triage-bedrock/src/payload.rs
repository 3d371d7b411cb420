//! Structured payload parsing for model responses.
//!
//! The system prompt asks for a single JSON object, but models wrap their
//! answers in markdown fences or prose often enough that parsing the raw
//! text directly is not viable. The extraction here takes the outermost
//! `{…}` span of the response and deserializes that.

use triage_core::reconcile::CandidateAssessment;

use crate::error::AssessError;

/// Parse the model's response text into a candidate assessment.
///
/// Tolerates markdown code fences and surrounding prose by extracting the
/// outermost brace-delimited span before deserializing.
pub fn parse_candidate(text: &str) -> Result<CandidateAssessment, AssessError> {
    let span = json_span(text)
        .ok_or_else(|| AssessError::ResponseParse("no JSON object in response".to_string()))?;

    serde_json::from_str(span)
        .map_err(|e| AssessError::ResponseParse(format!("candidate payload: {e}")))
}

/// The outermost `{…}` span of a response, if any.
fn json_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// A bounded excerpt of raw response text, for inclusion in the
/// unparseable-response fallback narrative. Cuts on a char boundary.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() <= max_chars {
        return trimmed.to_string();
    }
    let mut out: String = trimmed.chars().take(max_chars).collect();
    out.push('…');
    out
}
