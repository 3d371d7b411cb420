use axum::extract::{FromRequest, Multipart, Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::Json;
use serde::Deserialize;

use triage_bedrock::assess::TriageRequest;
use triage_bedrock::request::MediaPayload;
use triage_core::models::patient::PatientContext;
use triage_core::models::result::TriageResult;

use crate::error::ApiError;
use crate::state::AppState;

/// JSON body of a text-only triage request.
#[derive(Debug, Default, Deserialize)]
pub struct TriageBody {
    #[serde(default)]
    pub complaint: String,
    #[serde(default)]
    pub patient: PatientContext,
}

/// One triage request, as JSON (text only) or multipart (text + one media
/// part whose declared content type routes the pathway).
pub async fn triage(
    State(state): State<AppState>,
    req: Request,
) -> Result<Json<TriageResult>, ApiError> {
    let is_multipart = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("multipart/form-data"));

    let request = if is_multipart {
        let multipart = Multipart::from_request(req, &())
            .await
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;
        from_multipart(multipart).await?
    } else {
        let Json(body) = Json::<TriageBody>::from_request(req, &())
            .await
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;
        TriageRequest {
            complaint: body.complaint,
            patient: body.patient,
            media: None,
        }
    };

    let result = state.assessor.assess(&request).await?;
    Ok(Json(result))
}

/// Assemble a triage request from multipart fields: `complaint` (text),
/// `patient` (JSON-encoded context), `media` (file part).
async fn from_multipart(mut multipart: Multipart) -> Result<TriageRequest, ApiError> {
    let mut request = TriageRequest::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?
    {
        match field.name().unwrap_or_default() {
            "complaint" => {
                request.complaint = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(e.to_string()))?;
            }
            "patient" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(e.to_string()))?;
                request.patient = serde_json::from_str::<PatientContext>(&text)?;
            }
            "media" => {
                let media_type = field.content_type().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(e.to_string()))?;
                request.media = Some(MediaPayload {
                    bytes: bytes.to_vec(),
                    media_type,
                });
            }
            _ => {}
        }
    }

    Ok(request)
}
