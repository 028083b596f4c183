//! Single-shot outbound HTTP check.
//!
//! One blocking GET with a timeout, no retries. Any HTTP status counts as a
//! successful probe since the status code is the thing being reported; only
//! transport-level failures (DNS, connect, TLS, timeout) are errors.

use crate::error::ProbeError;
use crate::model::ProbeReport;
use std::time::Duration;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub fn probe(url: &str, timeout: Duration) -> Result<ProbeReport, ProbeError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(ProbeError::Client)?;

    debug!(%url, ?timeout, "sending probe request");
    let response = client.get(url).send().map_err(|e| {
        warn!(%url, error = %e, "probe request failed");
        ProbeError::Request(e)
    })?;

    let status = response.status().as_u16();
    // A body we cannot read or parse still leaves a valid status to report
    let rate_limit_url = response
        .text()
        .ok()
        .and_then(|body| rate_limit_url(&body));

    Ok(ProbeReport {
        url: url.to_string(),
        status,
        rate_limit_url,
    })
}

fn rate_limit_url(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("rate_limit_url")?
        .as_str()
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_url_present() {
        let body = r#"{"current_user_url": "x", "rate_limit_url": "https://api.github.com/rate_limit"}"#;
        assert_eq!(
            rate_limit_url(body).as_deref(),
            Some("https://api.github.com/rate_limit")
        );
    }

    #[test]
    fn test_rate_limit_url_absent_or_invalid() {
        assert_eq!(rate_limit_url(r#"{"other": 1}"#), None);
        assert_eq!(rate_limit_url(r#"{"rate_limit_url": 42}"#), None);
        assert_eq!(rate_limit_url("<html>"), None);
        assert_eq!(rate_limit_url("[]"), None);
    }

    #[test]
    fn test_probe_invalid_url_is_an_error() {
        let err = probe("not a url", Duration::from_millis(100)).unwrap_err();
        assert!(matches!(err, ProbeError::Request(_)));
    }
}
