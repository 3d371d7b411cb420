//! triage-bedrock
//!
//! Bedrock model invocation for triage assessment: modality-specific
//! request building, structured payload parsing, and the orchestration
//! around the untrusted model output (reconciliation, degraded mode,
//! unparseable-response fallback).

pub mod assess;
pub mod error;
pub mod payload;
pub mod request;
