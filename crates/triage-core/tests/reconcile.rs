use triage_core::bands::{TriageCategory, Urgency};
use triage_core::models::result::Pathway;
use triage_core::reconcile::{reconcile, CandidateAssessment, DEFAULT_SEVERITY};

fn candidate(severity: Option<f64>, category: Option<&str>, urgency: Option<&str>) -> CandidateAssessment {
    CandidateAssessment {
        severity,
        category: category.map(str::to_string),
        urgency: urgency.map(str::to_string),
        assessment: "patient presents with acute distress".to_string(),
        recommended_service: "emergency department".to_string(),
        reasoning: "worst finding drives the score".to_string(),
    }
}

#[test]
fn disagreeing_labels_are_overridden_by_the_band() {
    let result = reconcile(candidate(Some(95.0), Some("Low"), Some("Low")), Pathway::Text);

    assert_eq!(result.severity, 95.0);
    assert_eq!(result.category, TriageCategory::Critical);
    assert_eq!(result.urgency, Urgency::Immediate);
}

#[test]
fn agreeing_labels_pass_through_unchanged() {
    let result = reconcile(
        candidate(Some(95.0), Some("Critical"), Some("Immediate")),
        Pathway::Text,
    );

    assert_eq!(result.category, TriageCategory::Critical);
    assert_eq!(result.urgency, Urgency::Immediate);
}

#[test]
fn missing_severity_defaults_to_mid_scale_moderate() {
    let result = reconcile(candidate(None, None, None), Pathway::Text);

    assert_eq!(result.severity, DEFAULT_SEVERITY);
    assert_eq!(result.category, TriageCategory::Moderate);
    assert_eq!(result.urgency, Urgency::Moderate);
}

#[test]
fn partial_label_omission_triggers_the_override() {
    // Category agrees but urgency is absent: treated as full disagreement.
    let result = reconcile(candidate(Some(72.0), Some("High"), None), Pathway::Text);

    assert_eq!(result.category, TriageCategory::High);
    assert_eq!(result.urgency, Urgency::Urgent);
}

#[test]
fn unparseable_labels_trigger_the_override() {
    let result = reconcile(
        candidate(Some(20.0), Some("Catastrophic"), Some("Now")),
        Pathway::Image,
    );

    assert_eq!(result.category, TriageCategory::NonUrgent);
    assert_eq!(result.urgency, Urgency::NonUrgent);
}

#[test]
fn severity_is_clamped_but_never_overridden() {
    let result = reconcile(candidate(Some(250.0), None, None), Pathway::Text);
    assert_eq!(result.severity, 100.0);
    assert_eq!(result.category, TriageCategory::Critical);

    let result = reconcile(candidate(Some(-10.0), None, None), Pathway::Text);
    assert_eq!(result.severity, 0.0);
    assert_eq!(result.category, TriageCategory::NonUrgent);
}

#[test]
fn narratives_and_pathway_pass_through() {
    let result = reconcile(candidate(Some(40.0), None, None), Pathway::AudioVideo);

    assert_eq!(result.assessment, "patient presents with acute distress");
    assert_eq!(result.recommended_service, "emergency department");
    assert_eq!(result.reasoning, "worst finding drives the score");
    assert_eq!(result.model_used, Pathway::AudioVideo);
    assert_eq!(result.action, "scheduled consultation");
}

#[test]
fn candidate_accepts_alternate_field_names() {
    let payload = r#"{
        "severity_score": 88.0,
        "severity_level": "High",
        "urgency": "Urgent",
        "assessment": "a",
        "recommended_service": "b",
        "reasoning": "c"
    }"#;

    let candidate: CandidateAssessment = serde_json::from_str(payload).unwrap();
    assert_eq!(candidate.severity, Some(88.0));
    assert_eq!(candidate.category.as_deref(), Some("High"));
}
