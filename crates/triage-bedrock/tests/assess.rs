use triage_bedrock::assess::{degraded_result, unparseable_fallback, Assessor, TriageRequest};
use triage_core::bands::{TriageCategory, Urgency};
use triage_core::models::result::Pathway;
use triage_core::signs::SignRegistry;

#[tokio::test]
async fn unconfigured_assessor_serves_the_degraded_contract() {
    let assessor = Assessor::unconfigured(SignRegistry::standard().unwrap());
    assert!(!assessor.is_configured());

    let request = TriageRequest {
        complaint: "severe chest pain".to_string(),
        ..Default::default()
    };
    let result = assessor.assess(&request).await.unwrap();

    assert_eq!(result.severity, 50.0);
    assert_eq!(result.category, TriageCategory::Moderate);
    assert_eq!(result.urgency, Urgency::Moderate);
    assert_eq!(result.model_used, Pathway::None);
    assert!(result.assessment.contains("not configured"));
}

#[test]
fn degraded_result_is_internally_consistent() {
    let result = degraded_result();
    let band = triage_core::bands::categorize(result.severity);
    assert_eq!(result.category, band.category);
    assert_eq!(result.urgency, band.urgency);
}

#[test]
fn unparseable_fallback_carries_a_bounded_excerpt() {
    let raw = "x".repeat(1000);
    let result = unparseable_fallback(&raw, Pathway::Image);

    assert_eq!(result.severity, 50.0);
    assert_eq!(result.category, TriageCategory::Moderate);
    assert_eq!(result.model_used, Pathway::Image);
    assert!(result.assessment.chars().count() < 300);
    assert!(result.assessment.contains("xxx"));
}

#[test]
fn empty_model_output_falls_back_to_a_valid_moderate_result() {
    // A response that carried no usable text is obtained-but-unusable:
    // it must yield a valid disposition, never an error.
    let result = unparseable_fallback("", Pathway::Text);

    assert_eq!(result.severity, 50.0);
    assert_eq!(result.category, TriageCategory::Moderate);
    assert_eq!(result.urgency, Urgency::Moderate);
    assert_eq!(result.model_used, Pathway::Text);
}

#[test]
fn degraded_result_serializes_with_wire_labels() {
    let json = serde_json::to_value(degraded_result()).unwrap();
    assert_eq!(json["category"], "Moderate");
    assert_eq!(json["urgency"], "Moderate");
    assert_eq!(json["model_used"], "none");
    assert_eq!(json["severity"], 50.0);
}
