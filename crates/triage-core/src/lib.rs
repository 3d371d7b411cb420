//! triage-core
//!
//! Deterministic clinical triage core: the sign registry, the score-to-band
//! mapping, guideline rendering, and reconciliation of untrusted model
//! output. No AWS dependency — this is the shared vocabulary of the
//! triage system, and everything in it is pure and synchronous.

pub mod bands;
pub mod error;
pub mod guidelines;
pub mod models;
pub mod reconcile;
pub mod signs;
