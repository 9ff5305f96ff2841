// src/config.rs

use tracing::debug;

/// Environment variable that overrides the store-report endpoint.
pub const REPORT_ENDPOINT_ENV: &str = "SURFACE_SCAN_REPORT_ENDPOINT";

/// Default store-report endpoint. The backend that persists reports and
/// triggers follow-up emails lives elsewhere; during local development it is
/// expected on this address.
pub const DEFAULT_REPORT_ENDPOINT: &str = "http://localhost:3000/api/store-report";

/// Resolves the store-report endpoint from the environment, falling back to
/// the default when the variable is unset or empty.
pub fn report_endpoint() -> String {
    match std::env::var(REPORT_ENDPOINT_ENV) {
        Ok(value) if !value.trim().is_empty() => {
            debug!(endpoint = %value, "Using store-report endpoint from environment.");
            value
        }
        _ => DEFAULT_REPORT_ENDPOINT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint_is_used_when_env_is_absent() {
        // Tests run in parallel, so poke the fallback path directly rather
        // than mutating the process environment.
        assert_eq!(DEFAULT_REPORT_ENDPOINT, "http://localhost:3000/api/store-report");
        assert!(!report_endpoint().trim().is_empty());
    }
}
