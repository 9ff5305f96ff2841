// src/core/mod.rs

// The `core` module holds everything that is independent of the terminal UI:
// the data models, the deterministic score synthesizer, the static findings
// catalog and the report dispatch path.

/// Data structures shared across the application, such as `ScanResult`,
/// `RiskLevel`, `Finding` and the report payload.
pub mod models;

/// The deterministic score synthesizer and the domain normalizer.
pub mod synthesizer;

/// The static catalog of canned finding content backing the four result rows.
pub mod knowledge_base;

/// Report payload construction, the local download stub and the
/// fire-and-forget submission to the store-report endpoint.
pub mod report;
