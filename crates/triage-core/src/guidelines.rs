//! Guideline rendering for the assessment collaborator.
//!
//! Produces the structured text block sent as grounding context with every
//! assessment request: the full sign registry grouped by physiological
//! system, the severity band table, and the scoring instructions. Pure
//! string templating over the registry; no I/O.

use std::fmt::Write;

use crate::bands::BAND_TABLE;
use crate::models::patient::PEDIATRIC_AGE_THRESHOLD;
use crate::signs::{BodySystem, SignRegistry};

/// Render the clinical scoring guidelines for a patient of the given age.
///
/// Selects the pediatric rendering when `age` is present and below the
/// pediatric threshold, otherwise the adult rendering.
pub fn render_guidelines(registry: &SignRegistry, age: Option<u32>) -> String {
    let age_group = match age {
        Some(a) if a < PEDIATRIC_AGE_THRESHOLD => "PEDIATRIC",
        _ => "ADULT",
    };

    let mut out = String::new();
    let _ = writeln!(out, "CLINICAL SCORING SYSTEM ({age_group})");
    let _ = writeln!(
        out,
        "Based on ERC 2021, SFAR 2024, and French triage algorithms"
    );
    out.push('\n');
    let _ = writeln!(out, "ASSESSMENT BY SYSTEM (score 0-100 per sign):");
    out.push('\n');

    for (index, system) in BodySystem::ALL.iter().enumerate() {
        let _ = writeln!(out, "{}. {}:", index + 1, system.heading());
        for def in registry.signs_for_system(*system) {
            let _ = writeln!(out, "   - {}: {} ({})", def.id, def.weight, def.rationale);
        }
        out.push('\n');
    }

    let _ = writeln!(out, "CATEGORIZATION BY SCORE (0-100):");
    for (range, category, urgency) in BAND_TABLE.iter().rev() {
        let _ = writeln!(out, "- Score {range} -> {category} / {urgency}");
    }
    out.push('\n');

    let _ = writeln!(out, "INSTRUCTIONS:");
    let _ = writeln!(out, "1. Identify ALL clinical signs present");
    let _ = writeln!(out, "2. Assign a 0-100 score to each sign per the tables");
    let _ = writeln!(
        out,
        "3. Take the MAXIMUM score (not the average) as the severity"
    );
    let _ = writeln!(
        out,
        "4. Derive category and urgency from the score mapping above"
    );
    let _ = writeln!(
        out,
        "5. Briefly justify each identified sign in the reasoning"
    );

    out
}
