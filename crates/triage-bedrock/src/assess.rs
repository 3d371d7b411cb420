//! Assessment orchestration.
//!
//! Owns the full round trip for one triage request: guideline rendering,
//! pathway routing, the Converse invocation, payload parsing, and
//! reconciliation. Also owns the two degraded behaviors: the fixed
//! safe-default result when no model is configured, and the
//! excerpt-carrying fallback when the model's response is unparseable.

use std::time::Duration;

use aws_sdk_bedrockruntime::types::{ContentBlock, ConversationRole, Message, SystemContentBlock};
use tracing::{info, warn};
use uuid::Uuid;

use triage_core::bands::categorize;
use triage_core::guidelines::render_guidelines;
use triage_core::models::patient::PatientContext;
use triage_core::models::result::{Pathway, TriageResult};
use triage_core::reconcile::{reconcile, DEFAULT_SEVERITY};
use triage_core::signs::SignRegistry;

use crate::error::AssessError;
use crate::payload::{excerpt, parse_candidate};
use crate::request::{builder_for, pathway_for, MediaPayload};

/// Bound on the Converse round trip. Expiry is treated as the
/// unreachable-collaborator failure class.
const INVOCATION_TIMEOUT: Duration = Duration::from_secs(60);

/// Maximum characters of raw response text carried by the
/// unparseable-response fallback narrative.
const EXCERPT_CHARS: usize = 200;

const SYSTEM_PROMPT_HEADER: &str = "\
You are an emergency triage assessment assistant. Assess the patient using \
ONLY the clinical scoring guidelines below. Respond with a single JSON \
object and nothing else, with exactly these fields: \
\"severity\" (number 0-100, the MAXIMUM sign score), \
\"category\" (one of: Non-urgent, Low, Moderate, High, Critical), \
\"urgency\" (one of: Non-urgent, Low, Moderate, Urgent, Immediate), \
\"assessment\" (concise clinical assessment), \
\"recommended_service\" (the service or department to direct the patient to), \
\"reasoning\" (brief justification of each identified sign).";

/// One triage request, transport-agnostic.
#[derive(Debug, Clone, Default)]
pub struct TriageRequest {
    pub complaint: String,
    pub patient: PatientContext,
    pub media: Option<MediaPayload>,
}

/// Orchestrates assessment requests against a Bedrock model.
///
/// Holds the read-only sign registry and, when configured, the SDK config
/// and model id. An unconfigured assessor serves the fixed degraded
/// result without ever touching the network.
pub struct Assessor {
    backend: Option<Backend>,
    registry: SignRegistry,
}

struct Backend {
    config: aws_config::SdkConfig,
    model_id: String,
}

impl Assessor {
    pub fn new(config: aws_config::SdkConfig, model_id: String, registry: SignRegistry) -> Self {
        Assessor {
            backend: Some(Backend { config, model_id }),
            registry,
        }
    }

    /// An assessor with no model behind it; every request gets the
    /// degraded-mode result.
    pub fn unconfigured(registry: SignRegistry) -> Self {
        Assessor {
            backend: None,
            registry,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.backend.is_some()
    }

    pub fn registry(&self) -> &SignRegistry {
        &self.registry
    }

    /// Run one triage assessment.
    ///
    /// Transport, auth, and timeout failures surface as
    /// [`AssessError::Invocation`]; everything about the quality of the
    /// model's output is absorbed into a valid `TriageResult`.
    pub async fn assess(&self, request: &TriageRequest) -> Result<TriageResult, AssessError> {
        let Some(backend) = &self.backend else {
            return Ok(degraded_result());
        };

        let assessment_id = Uuid::new_v4();
        let pathway = pathway_for(request.media.as_ref());
        let builder = builder_for(pathway);

        let guidelines = render_guidelines(&self.registry, request.patient.age);
        let system_prompt = format!("{SYSTEM_PROMPT_HEADER}\n\n{guidelines}");

        let blocks = builder.content_blocks(
            &request.complaint,
            &request.patient,
            request.media.as_ref(),
        )?;

        info!(
            assessment_id = %assessment_id,
            model = %backend.model_id,
            pathway = ?pathway,
            "starting triage assessment"
        );

        let response_text =
            invoke_converse(&backend.config, &backend.model_id, &system_prompt, blocks).await?;

        let result = match parse_candidate(&response_text) {
            Ok(candidate) => reconcile(candidate, pathway),
            Err(e) => {
                warn!(assessment_id = %assessment_id, error = %e, "unparseable model response");
                unparseable_fallback(&response_text, pathway)
            }
        };

        info!(
            assessment_id = %assessment_id,
            severity = result.severity,
            category = %result.category,
            "triage assessment complete"
        );

        Ok(result)
    }
}

/// Core invocation using the Bedrock Converse API, bounded by
/// [`INVOCATION_TIMEOUT`]. Returns the concatenated response text.
async fn invoke_converse(
    config: &aws_config::SdkConfig,
    model_id: &str,
    system_prompt: &str,
    blocks: Vec<ContentBlock>,
) -> Result<String, AssessError> {
    let client = aws_sdk_bedrockruntime::Client::new(config);

    let mut message = Message::builder().role(ConversationRole::User);
    for block in blocks {
        message = message.content(block);
    }
    let message = message
        .build()
        .map_err(|e| AssessError::Invocation(e.to_string()))?;

    let send = client
        .converse()
        .model_id(model_id)
        .system(SystemContentBlock::Text(system_prompt.to_string()))
        .messages(message)
        .send();

    let response = tokio::time::timeout(INVOCATION_TIMEOUT, send)
        .await
        .map_err(|_| AssessError::Invocation("model invocation timed out".to_string()))?
        .map_err(|e| AssessError::Invocation(e.into_service_error().to_string()))?;

    if let Some(usage) = response.usage() {
        info!(
            model = model_id,
            input_tokens = usage.input_tokens,
            output_tokens = usage.output_tokens,
            "token usage"
        );
    }

    // A response with no output message was obtained, just unusable —
    // same failure class as unparseable text, so hand back an empty
    // string and let the caller's fallback absorb it.
    let Some(output_message) = response.output().and_then(|o| o.as_message().ok()) else {
        return Ok(String::new());
    };

    let response_text = output_message
        .content()
        .iter()
        .filter_map(|block| {
            if let ContentBlock::Text(text) = block {
                Some(text.as_str())
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("");

    Ok(response_text)
}

/// The fixed safe-default result served when no model is configured.
///
/// Always severity 50.0 / Moderate / Moderate with model_used "none";
/// a documented contract, not an accidental fallback.
pub fn degraded_result() -> TriageResult {
    let band = categorize(DEFAULT_SEVERITY);
    TriageResult {
        severity: DEFAULT_SEVERITY,
        category: band.category,
        urgency: band.urgency,
        action: band.action.to_string(),
        assessment: "Assessment service is not configured. Defaulting to a moderate \
                     triage disposition pending clinical review."
            .to_string(),
        recommended_service: String::new(),
        reasoning: String::new(),
        model_used: Pathway::None,
    }
}

/// Fallback for a response that was obtained but could not be parsed:
/// a default Moderate result carrying a bounded excerpt of the raw text
/// for human review, with the pathway still recorded.
pub fn unparseable_fallback(raw: &str, pathway: Pathway) -> TriageResult {
    let band = categorize(DEFAULT_SEVERITY);
    TriageResult {
        severity: DEFAULT_SEVERITY,
        category: band.category,
        urgency: band.urgency,
        action: band.action.to_string(),
        assessment: format!(
            "Model response was not parseable; raw excerpt for review: {}",
            excerpt(raw, EXCERPT_CHARS)
        ),
        recommended_service: String::new(),
        reasoning: String::new(),
        model_used: pathway,
    }
}
