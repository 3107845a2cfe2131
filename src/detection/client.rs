//! Blocking HTTP client for the detection endpoint
//!
//! One `DetectionClient` is built at startup from the resolved endpoint
//! configuration and shared by every submission. `detect` performs exactly
//! one POST per call; there is no retry, caching, or cancellation here.

use crate::config::{EndpointConfig, UserPreferences};
use crate::detection::report::{DetectionReport, DetectionRequest};
use crate::error::{Result, TextMatchError};
use std::time::Duration;
use tracing::{debug, warn};

/// Path of the detection operation, relative to the base URL
const DETECTION_PATH: &str = "/plagarsim";

/// Blocking client for the remote detection service
#[derive(Debug)]
pub struct DetectionClient {
    /// Fully resolved URL of the detection operation
    detect_url: reqwest::Url,
    /// Shared HTTP client
    http: reqwest::blocking::Client,
}

impl DetectionClient {
    /// Create a new detection client from the resolved endpoint configuration.
    ///
    /// The base URL comes from `TEXTMATCH_API_URL` when set, otherwise from
    /// the configuration file. A base URL that does not parse fails
    /// construction; requests against an undefined location are never
    /// dispatched.
    pub fn new(endpoint: &EndpointConfig, preferences: &UserPreferences) -> Result<Self> {
        let base_url = endpoint.resolved_base_url();

        let detect_url = format!("{}{DETECTION_PATH}", base_url.trim_end_matches('/'));
        let detect_url = reqwest::Url::parse(&detect_url).map_err(|e| {
            warn!("Invalid detection endpoint base URL '{}': {}", base_url, e);
            TextMatchError::ConfigError(Box::new(e))
        })?;

        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(preferences.request_timeout_secs))
            .user_agent(format!("TextMatch/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                warn!("Failed to create HTTP client: {}", e);
                TextMatchError::ConfigError(Box::new(e))
            })?;

        debug!("Detection client ready, endpoint: {}", detect_url);

        Ok(Self { detect_url, http })
    }

    /// URL of the detection operation this client posts to
    pub fn detect_url(&self) -> &str {
        self.detect_url.as_str()
    }

    /// Submit text to the detection endpoint and decode the verdict.
    ///
    /// Performs one HTTP POST with JSON body `{"text": <string>}`. Empty
    /// text is a legal submission. Failures map onto the error taxonomy:
    ///
    /// - transport failure (unreachable, DNS, timeout) → `TransportError`
    /// - non-2xx status → `ProtocolError` (the body is not interpreted)
    /// - undecodable 2xx body → `MalformedResponse`
    pub fn detect(&self, text: &str) -> Result<DetectionReport> {
        debug!("Posting {} bytes to {}", text.len(), self.detect_url);

        let response = self
            .http
            .post(self.detect_url.clone())
            .json(&DetectionRequest { text })
            .send()
            .map_err(|e| {
                warn!("Failed to reach detection endpoint: {}", e);
                TextMatchError::TransportError(Box::new(e))
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Detection endpoint returned error status: {}", status);
            return Err(TextMatchError::ProtocolError {
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(|e| {
            warn!("Failed to read detection response body: {}", e);
            TextMatchError::TransportError(Box::new(e))
        })?;

        let report = DetectionReport::from_wire_json(&body).inspect_err(|e| {
            warn!("Detection response did not match the wire contract: {}", e);
        })?;

        debug!(
            "Decoded detection report: plagiarised = {}, {} matched file(s)",
            report.plagiarised,
            report.original_files.len()
        );

        Ok(report)
    }
}
