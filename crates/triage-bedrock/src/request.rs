//! Modality-specific assessment request builders.
//!
//! One capability — "build the Converse content blocks for a grounded
//! assessment request" — with three implementations, one per input
//! modality. A single routing decision on the declared media type picks
//! the implementation; the orchestrator never branches on modality again.

use aws_sdk_bedrockruntime::types::{ContentBlock, ImageBlock, ImageFormat, ImageSource, VideoBlock, VideoFormat, VideoSource};

use triage_core::models::patient::PatientContext;
use triage_core::models::result::Pathway;

use crate::error::AssessError;

/// Raw media accompanying a triage request, with its declared media type.
#[derive(Debug, Clone)]
pub struct MediaPayload {
    pub bytes: Vec<u8>,
    pub media_type: String,
}

/// Route a request to its assessment pathway from the declared media type.
///
/// `image/*` selects the image pathway; `video/*` and `audio/*` select the
/// audio-video pathway; anything else, including absent or unrecognized
/// media types, defaults to text.
pub fn pathway_for(media: Option<&MediaPayload>) -> Pathway {
    match media {
        Some(m) if m.media_type.starts_with("image/") => Pathway::Image,
        Some(m) if m.media_type.starts_with("video/") || m.media_type.starts_with("audio/") => {
            Pathway::AudioVideo
        }
        _ => Pathway::Text,
    }
}

/// Build a grounded assessment request for one input modality.
pub trait AssessmentRequest: Send + Sync {
    /// The pathway this builder serves.
    fn pathway(&self) -> Pathway;

    /// Produce the user-message content blocks for the request.
    fn content_blocks(
        &self,
        complaint: &str,
        patient: &PatientContext,
        media: Option<&MediaPayload>,
    ) -> Result<Vec<ContentBlock>, AssessError>;
}

/// Select the request builder for a pathway.
pub fn builder_for(pathway: Pathway) -> Box<dyn AssessmentRequest> {
    match pathway {
        Pathway::Image => Box::new(ImageRequest),
        Pathway::AudioVideo => Box::new(AudioVideoRequest),
        Pathway::Text | Pathway::None => Box::new(TextRequest),
    }
}

/// Build an XML-style patient context block for the user message.
///
/// Returns an empty string when no context field is populated.
pub fn build_patient_block(patient: &PatientContext) -> String {
    let mut fields = Vec::new();

    if let Some(age) = patient.age {
        fields.push(format!("<age>{age}</age>"));
    }
    if let Some(gender) = &patient.gender {
        fields.push(format!("<gender>{gender}</gender>"));
    }
    for (name, value) in &patient.vital_signs {
        fields.push(format!("<vital name=\"{name}\">{value}</vital>"));
    }
    if let Some(history) = &patient.medical_history {
        fields.push(format!("<medical_history>{history}</medical_history>"));
    }
    if let Some(medications) = &patient.current_medications {
        fields.push(format!("<current_medications>{medications}</current_medications>"));
    }
    if let Some(allergies) = &patient.allergies {
        fields.push(format!("<allergies>{allergies}</allergies>"));
    }

    if fields.is_empty() {
        return String::new();
    }

    let mut block = String::from("<patient_context>\n");
    for field in fields {
        block.push_str(&field);
        block.push('\n');
    }
    block.push_str("</patient_context>");
    block
}

fn text_blocks(complaint: &str, patient: &PatientContext) -> Vec<ContentBlock> {
    let mut blocks = Vec::new();

    let patient_block = build_patient_block(patient);
    if !patient_block.is_empty() {
        blocks.push(ContentBlock::Text(patient_block));
    }

    let complaint = complaint.trim();
    if !complaint.is_empty() {
        blocks.push(ContentBlock::Text(format!("Chief complaint: {complaint}")));
    }

    blocks
}

/// Text-only pathway: complaint and patient context, no media.
pub struct TextRequest;

impl AssessmentRequest for TextRequest {
    fn pathway(&self) -> Pathway {
        Pathway::Text
    }

    fn content_blocks(
        &self,
        complaint: &str,
        patient: &PatientContext,
        _media: Option<&MediaPayload>,
    ) -> Result<Vec<ContentBlock>, AssessError> {
        let mut blocks = text_blocks(complaint, patient);
        if blocks.is_empty() {
            blocks.push(ContentBlock::Text(
                "No chief complaint provided; assess from available context.".to_string(),
            ));
        }
        Ok(blocks)
    }
}

/// Image pathway: an `ImageBlock` ahead of the text blocks.
pub struct ImageRequest;

impl AssessmentRequest for ImageRequest {
    fn pathway(&self) -> Pathway {
        Pathway::Image
    }

    fn content_blocks(
        &self,
        complaint: &str,
        patient: &PatientContext,
        media: Option<&MediaPayload>,
    ) -> Result<Vec<ContentBlock>, AssessError> {
        let media = media.ok_or_else(|| {
            AssessError::UnsupportedMedia("image pathway selected without media".to_string())
        })?;
        let format = image_format_for(&media.media_type)
            .ok_or_else(|| AssessError::UnsupportedMedia(media.media_type.clone()))?;

        let image = ImageBlock::builder()
            .format(format)
            .source(ImageSource::Bytes(aws_smithy_types::Blob::new(
                media.bytes.clone(),
            )))
            .build()
            .map_err(|e| AssessError::Invocation(e.to_string()))?;

        let mut blocks = vec![ContentBlock::Image(image)];
        blocks.extend(text_blocks(complaint, patient));
        blocks.push(ContentBlock::Text(
            "Assess the clinical signs visible in the attached image.".to_string(),
        ));
        Ok(blocks)
    }
}

/// Audio-video pathway: a `VideoBlock` ahead of the text blocks.
pub struct AudioVideoRequest;

impl AssessmentRequest for AudioVideoRequest {
    fn pathway(&self) -> Pathway {
        Pathway::AudioVideo
    }

    fn content_blocks(
        &self,
        complaint: &str,
        patient: &PatientContext,
        media: Option<&MediaPayload>,
    ) -> Result<Vec<ContentBlock>, AssessError> {
        let media = media.ok_or_else(|| {
            AssessError::UnsupportedMedia("audio-video pathway selected without media".to_string())
        })?;
        let format = video_format_for(&media.media_type)
            .ok_or_else(|| AssessError::UnsupportedMedia(media.media_type.clone()))?;

        let video = VideoBlock::builder()
            .format(format)
            .source(VideoSource::Bytes(aws_smithy_types::Blob::new(
                media.bytes.clone(),
            )))
            .build()
            .map_err(|e| AssessError::Invocation(e.to_string()))?;

        let mut blocks = vec![ContentBlock::Video(video)];
        blocks.extend(text_blocks(complaint, patient));
        blocks.push(ContentBlock::Text(
            "Assess the clinical signs audible or visible in the attached recording.".to_string(),
        ));
        Ok(blocks)
    }
}

/// Map a declared image media type to a Converse `ImageFormat`.
pub fn image_format_for(media_type: &str) -> Option<ImageFormat> {
    match media_type {
        "image/png" => Some(ImageFormat::Png),
        "image/jpeg" | "image/jpg" => Some(ImageFormat::Jpeg),
        "image/gif" => Some(ImageFormat::Gif),
        "image/webp" => Some(ImageFormat::Webp),
        _ => None,
    }
}

/// Map a declared audio/video media type to a Converse `VideoFormat`.
///
/// Audio-only codecs with no Converse container mapping return `None`;
/// the caller rejects them explicitly rather than guessing.
pub fn video_format_for(media_type: &str) -> Option<VideoFormat> {
    match media_type {
        "video/mp4" | "audio/mp4" => Some(VideoFormat::Mp4),
        "video/quicktime" => Some(VideoFormat::Mov),
        "video/webm" | "audio/webm" => Some(VideoFormat::Webm),
        "video/x-matroska" => Some(VideoFormat::Mkv),
        "video/mpeg" => Some(VideoFormat::Mpeg),
        "video/3gpp" => Some(VideoFormat::ThreeGp),
        "video/x-flv" => Some(VideoFormat::Flv),
        "video/x-ms-wmv" => Some(VideoFormat::Wmv),
        _ => None,
    }
}
