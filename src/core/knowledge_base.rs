//! The static, read-only catalog behind the four surface-check rows.
//!
//! Each category carries a fixed status label, a technical-register sentence
//! and a plain-language sentence. The content is intentionally
//! domain-independent for now: the real probing engine that would vary these
//! per target is an external collaborator that does not exist yet, and the
//! catalog is the placeholder standing in for it. Keeping the copy
//! data-driven here means the synthesizer never needs to change when the
//! wording does.

use crate::core::models::{Finding, FindingCategory};

/// The full canned content for one surface-check category.
pub struct FindingDetail {
    /// Which results row this entry feeds.
    pub category: FindingCategory,
    /// The short categorical label shown in the status pill (e.g. "Exposed").
    pub status: &'static str,
    /// The technical-register summary, written for an IT reader.
    pub tech: &'static str,
    /// The plain-language summary, written for a business owner.
    pub human: &'static str,
}

impl FindingDetail {
    /// Materializes this catalog entry as an owned [`Finding`] row.
    pub fn to_finding(&self) -> Finding {
        Finding {
            category: self.category,
            status: self.status.to_string(),
            tech: self.tech.to_string(),
            human: self.human.to_string(),
        }
    }
}

/// The catalog itself, one entry per category, in display order.
static FINDINGS: &[FindingDetail] = &[
    FindingDetail {
        category: FindingCategory::Https,
        status: "OK",
        tech: "Responds over HTTPS with no obvious certificate errors during this surface pass.",
        human: "We can safely reach your site over HTTPS right now. This is not a full encryption or certificate audit.",
    },
    FindingDetail {
        category: FindingCategory::Edge,
        status: "Exposed",
        tech: "No Cloudflare-style edge proxy or WAF detected in front of the origin in public DNS.",
        human: "Your site appears to connect directly to the internet without an extra shield in front.",
    },
    FindingDetail {
        category: FindingCategory::Speed,
        status: "Moderate",
        tech: "Average round-trip latency for a simple HTTPS request; no stress or load conditions simulated.",
        human: "Feels fine for day-to-day browsing, but may struggle during heavy traffic or basic attack conditions.",
    },
    FindingDetail {
        category: FindingCategory::Hosting,
        status: "Neutral",
        tech: "Public signals only indicate the likely hosting provider and region, not configuration quality.",
        human: "The provider is just the building; security depends on how the server and site inside are configured.",
    },
];

/// Retrieves the catalog entry for a given category.
///
/// # Arguments
///
/// * `category` - The surface-check category to look up.
///
/// # Returns
///
/// A reference to the matching `FindingDetail`. Every category has exactly
/// one entry, so the lookup cannot miss.
pub fn get_finding_detail(category: FindingCategory) -> &'static FindingDetail {
    FINDINGS
        .iter()
        .find(|f| f.category == category)
        .unwrap_or(&FINDINGS[0])
}
