use triage_bedrock::request::{
    build_patient_block, builder_for, image_format_for, pathway_for, video_format_for,
    MediaPayload,
};
use triage_core::models::patient::PatientContext;
use triage_core::models::result::Pathway;

fn media(media_type: &str) -> MediaPayload {
    MediaPayload {
        bytes: vec![0u8; 16],
        media_type: media_type.to_string(),
    }
}

#[test]
fn declared_media_type_routes_the_pathway() {
    assert_eq!(pathway_for(None), Pathway::Text);
    assert_eq!(pathway_for(Some(&media("image/png"))), Pathway::Image);
    assert_eq!(pathway_for(Some(&media("video/mp4"))), Pathway::AudioVideo);
    assert_eq!(pathway_for(Some(&media("audio/webm"))), Pathway::AudioVideo);
    // Unrecognized declared types default to text.
    assert_eq!(pathway_for(Some(&media("application/pdf"))), Pathway::Text);
}

#[test]
fn builders_report_their_pathway() {
    assert_eq!(builder_for(Pathway::Text).pathway(), Pathway::Text);
    assert_eq!(builder_for(Pathway::Image).pathway(), Pathway::Image);
    assert_eq!(builder_for(Pathway::AudioVideo).pathway(), Pathway::AudioVideo);
}

#[test]
fn text_builder_always_produces_at_least_one_block() {
    let builder = builder_for(Pathway::Text);
    let blocks = builder
        .content_blocks("", &PatientContext::default(), None)
        .unwrap();
    assert!(!blocks.is_empty());
}

#[test]
fn image_builder_rejects_unknown_image_subtype() {
    let builder = builder_for(Pathway::Image);
    let payload = media("image/x-unknown");
    assert!(builder
        .content_blocks("rash", &PatientContext::default(), Some(&payload))
        .is_err());
}

#[test]
fn audio_video_builder_rejects_unmappable_audio_codec() {
    let builder = builder_for(Pathway::AudioVideo);
    let payload = media("audio/mpeg");
    assert!(builder
        .content_blocks("cough", &PatientContext::default(), Some(&payload))
        .is_err());
}

#[test]
fn image_and_video_format_mappings() {
    assert!(image_format_for("image/jpeg").is_some());
    assert!(image_format_for("image/tiff").is_none());
    assert!(video_format_for("video/quicktime").is_some());
    assert!(video_format_for("audio/wav").is_none());
}

#[test]
fn patient_block_includes_populated_fields_only() {
    let empty = build_patient_block(&PatientContext::default());
    assert_eq!(empty, "");

    let mut patient = PatientContext {
        age: Some(4),
        gender: Some("F".to_string()),
        medical_history: Some("asthma".to_string()),
        ..Default::default()
    };
    patient
        .vital_signs
        .insert("heart_rate".to_string(), "190".to_string());

    let block = build_patient_block(&patient);
    assert!(block.starts_with("<patient_context>"));
    assert!(block.ends_with("</patient_context>"));
    assert!(block.contains("<age>4</age>"));
    assert!(block.contains("<vital name=\"heart_rate\">190</vital>"));
    assert!(block.contains("<medical_history>asthma</medical_history>"));
    assert!(!block.contains("<allergies>"));
}
