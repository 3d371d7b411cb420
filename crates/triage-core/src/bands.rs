//! Severity-to-band mapping.
//!
//! A severity magnitude on the 0–100 scale maps to exactly one of five
//! contiguous bands, each binding a triage category, an urgency label, and
//! a recommended clinical action. The mapping is total and pure; every
//! value in [0,100] lands in exactly one band.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Triage category, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TriageCategory {
    #[serde(rename = "Non-urgent")]
    NonUrgent,
    Low,
    Moderate,
    High,
    Critical,
}

impl fmt::Display for TriageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TriageCategory::NonUrgent => "Non-urgent",
            TriageCategory::Low => "Low",
            TriageCategory::Moderate => "Moderate",
            TriageCategory::High => "High",
            TriageCategory::Critical => "Critical",
        };
        f.write_str(label)
    }
}

impl FromStr for TriageCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Non-urgent" => Ok(TriageCategory::NonUrgent),
            "Low" => Ok(TriageCategory::Low),
            "Moderate" => Ok(TriageCategory::Moderate),
            "High" => Ok(TriageCategory::High),
            "Critical" => Ok(TriageCategory::Critical),
            _ => Err(()),
        }
    }
}

/// Urgency label bound to a triage category, ordered least to most urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Urgency {
    #[serde(rename = "Non-urgent")]
    NonUrgent,
    Low,
    Moderate,
    Urgent,
    Immediate,
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Urgency::NonUrgent => "Non-urgent",
            Urgency::Low => "Low",
            Urgency::Moderate => "Moderate",
            Urgency::Urgent => "Urgent",
            Urgency::Immediate => "Immediate",
        };
        f.write_str(label)
    }
}

impl FromStr for Urgency {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Non-urgent" => Ok(Urgency::NonUrgent),
            "Low" => Ok(Urgency::Low),
            "Moderate" => Ok(Urgency::Moderate),
            "Urgent" => Ok(Urgency::Urgent),
            "Immediate" => Ok(Urgency::Immediate),
            _ => Err(()),
        }
    }
}

/// One band of the severity scale: category, urgency, and the recommended
/// disposition for any magnitude falling in the band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TriageBand {
    pub category: TriageCategory,
    pub urgency: Urgency,
    pub action: &'static str,
}

/// Clamp a severity magnitude into [0,100]. NaN clamps to 0.
pub fn clamp_severity(magnitude: f64) -> f64 {
    if magnitude.is_nan() {
        return 0.0;
    }
    magnitude.clamp(0.0, 100.0)
}

/// Map a severity magnitude to its triage band.
///
/// Bands are closed on the lower edge and open on the upper edge, except
/// the top band which includes 100. The input is clamped to [0,100] first,
/// so the function is total over all floats.
pub fn categorize(magnitude: f64) -> TriageBand {
    let m = clamp_severity(magnitude);
    if m >= 90.0 {
        TriageBand {
            category: TriageCategory::Critical,
            urgency: Urgency::Immediate,
            action: "immediate resuscitation / emergency team activation",
        }
    } else if m >= 70.0 {
        TriageBand {
            category: TriageCategory::High,
            urgency: Urgency::Urgent,
            action: "admission to continuous-care unit",
        }
    } else if m >= 50.0 {
        TriageBand {
            category: TriageCategory::Moderate,
            urgency: Urgency::Moderate,
            action: "urgent consultation within 2 hours",
        }
    } else if m >= 30.0 {
        TriageBand {
            category: TriageCategory::Low,
            urgency: Urgency::Low,
            action: "scheduled consultation",
        }
    } else {
        TriageBand {
            category: TriageCategory::NonUrgent,
            urgency: Urgency::NonUrgent,
            action: "scheduled consultation or discharge home",
        }
    }
}

/// The five bands in ascending severity order, with their numeric ranges,
/// for guideline rendering.
pub const BAND_TABLE: [(&str, TriageCategory, Urgency); 5] = [
    ("0-29", TriageCategory::NonUrgent, Urgency::NonUrgent),
    ("30-49", TriageCategory::Low, Urgency::Low),
    ("50-69", TriageCategory::Moderate, Urgency::Moderate),
    ("70-89", TriageCategory::High, Urgency::Urgent),
    ("90-100", TriageCategory::Critical, Urgency::Immediate),
];
