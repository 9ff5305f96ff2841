// src/core/report.rs

use chrono::Utc;
use tracing::{error, info};

use crate::core::models::{ReportPayload, ScanResult};

/// User agent sent with the store-report submission.
const USER_AGENT: &str = "SurfaceScan/0.1";

/// Builds the report payload for the current result and email.
///
/// The timestamp is taken at call time, so two report actions on the same
/// scan produce two distinct payloads.
pub fn build_payload(result: &ScanResult, email: &str) -> ReportPayload {
    ReportPayload {
        domain: result.domain.clone(),
        email: email.trim().to_string(),
        results: result.clone(),
        created_at: Utc::now(),
    }
}

/// Local "download" stub.
///
/// TODO: replace with real PDF generation once the report template exists.
/// Until then the payload is logged so nothing is lost, and the caller shows
/// the user a notice that the download is coming later.
pub fn run_download_stub(payload: &ReportPayload) {
    match serde_json::to_string(payload) {
        Ok(json) => {
            info!(payload = %json, "Report payload captured (PDF generation pending).");
        }
        Err(e) => {
            error!(error = %e, "Failed to serialize report payload for the download stub.");
        }
    }
}

/// Spawns the store-report submission as a detached task.
///
/// Fire-and-forget by contract: no caller ever observes completion. Failures
/// of any kind are routed to the log and never retried, never re-thrown, and
/// never shown to the user. Rapid repeated report actions simply spawn
/// independent tasks.
pub fn spawn_submission(endpoint: String, payload: ReportPayload) {
    tokio::spawn(async move {
        if let Err(e) = submit_report(&endpoint, &payload).await {
            error!(endpoint = %endpoint, error = %e, "Failed to store scan report.");
        }
    });
}

/// Performs one JSON POST of the payload to the store-report endpoint.
///
/// # Arguments
/// * `endpoint` - The full store-report URL.
/// * `payload` - The report payload to persist.
///
/// # Returns
/// `Ok(())` on a 2xx response, otherwise a description of what went wrong.
/// The response body is not inspected; only the status matters, and only for
/// logging.
pub async fn submit_report(endpoint: &str, payload: &ReportPayload) -> Result<(), String> {
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| format!("Failed to build HTTP client: {}", e))?;

    let response = client
        .post(endpoint)
        .json(payload)
        .send()
        .await
        .map_err(|e| format!("HTTP request failed: {}", e))?;

    if !response.status().is_success() {
        return Err(format!("Endpoint answered with status {}", response.status()));
    }

    info!(status = %response.status(), "Scan report stored.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::synthesizer::synthesize;
    use serde_json::json;

    #[test]
    fn payload_carries_the_full_result() {
        let result = synthesize("example.com");
        let payload = build_payload(&result, "owner@business.com.au");

        assert_eq!(payload.domain, "example.com");
        assert_eq!(payload.email, "owner@business.com.au");
        assert_eq!(payload.results.score, result.score);
        assert_eq!(payload.results.findings.len(), 4);
    }

    #[test]
    fn payload_trims_the_email() {
        let result = synthesize("example.com");
        let payload = build_payload(&result, "  owner@business.com.au \n");
        assert_eq!(payload.email, "owner@business.com.au");
    }

    #[test]
    fn payload_serializes_with_wire_field_names() {
        let result = synthesize("example.com");
        let payload = build_payload(&result, "owner@business.com.au");
        let json = serde_json::to_value(&payload).expect("payload must serialize");

        assert!(json.get("createdAt").is_some());
        assert!(json.get("results").is_some());
        assert_eq!(json["results"]["riskLevel"], json!(result.risk_level));
        assert_eq!(json["domain"], "example.com");
    }

    #[tokio::test]
    async fn submission_failure_is_an_err_not_a_panic() {
        let result = synthesize("example.com");
        let payload = build_payload(&result, "owner@business.com.au");

        // An unparseable endpoint fails inside reqwest; the error must come
        // back as a plain Err for the spawner to log.
        let outcome = submit_report("not a url", &payload).await;
        assert!(outcome.is_err());
    }
}
