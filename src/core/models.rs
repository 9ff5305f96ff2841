// src/core/models.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use strum::Display;

// --- Core Data Models ---

/// The risk tier derived from the composite surface score.
///
/// The tier is never stored independently of the score: it is always computed
/// through [`RiskLevel::from_score`], so a result can never carry a score and
/// a tier that disagree with each other.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Display)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    /// Maps a composite score onto its risk tier.
    ///
    /// Thresholds: 72 and above is Low, 62 and above is Moderate,
    /// everything below is High. This is the single place where the
    /// score-to-tier rule lives.
    pub fn from_score(score: u8) -> Self {
        if score >= 72 {
            RiskLevel::Low
        } else if score >= 62 {
            RiskLevel::Moderate
        } else {
            RiskLevel::High
        }
    }
}

/// The fixed set of surface-check categories, in display order.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FindingCategory {
    Https,
    Edge,
    Speed,
    Hosting,
}

impl FindingCategory {
    /// Every category in the order the results view presents them.
    pub const ALL: [FindingCategory; 4] = [
        FindingCategory::Https,
        FindingCategory::Edge,
        FindingCategory::Speed,
        FindingCategory::Hosting,
    ];

    /// The human-readable row label for this category.
    pub fn label(&self) -> &'static str {
        match self {
            FindingCategory::Https => "HTTPS reachability",
            FindingCategory::Edge => "Edge / shield in front of your site",
            FindingCategory::Speed => "Round-trip speed (latency)",
            FindingCategory::Hosting => "Hosting signal",
        }
    }
}

/// One categorical result row: a short status label, a technical-register
/// sentence and a plain-language sentence.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub category: FindingCategory,
    pub status: String,
    pub tech: String,
    pub human: String,
}

/// The full outcome of one surface scan.
///
/// Constructed only by the synthesizer; `risk_level` is derived from `score`
/// at construction time and the two stay consistent for the lifetime of the
/// value. Serialized with camelCase names to match the store-report wire
/// contract.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub domain: String,
    pub score: u8,
    pub risk_level: RiskLevel,
    pub findings: Vec<Finding>,
}

impl ScanResult {
    /// Looks up one finding row by category.
    pub fn finding(&self, category: FindingCategory) -> Option<&Finding> {
        self.findings.iter().find(|f| f.category == category)
    }
}

// --- Report Models ---

/// The payload shipped to the store-report endpoint when the user asks for
/// their report. Ephemeral: built at dispatch time, never persisted locally.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportPayload {
    pub domain: String,
    pub email: String,
    pub results: ScanResult,
    /// ISO-8601 creation timestamp, set when the user triggers the report
    /// action, not when the scan ran.
    pub created_at: DateTime<Utc>,
}
