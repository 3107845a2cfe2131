//! Typed detection verdict and its wire-level shape
//!
//! The service responds with:
//!
//! ```json
//! {
//!   "plgarised_text": true,
//!   "results": {
//!     "original_files": { "paper1.txt": 0.92 },
//!     "plagiarism_type": "verbatim"
//!   }
//! }
//! ```
//!
//! `plgarised_text` is misspelled on the wire and must stay that way for
//! compatibility. The decoded `DetectionReport` uses the corrected name.

use crate::error::{Result, TextMatchError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Request body for the detection endpoint
#[derive(Debug, Serialize)]
pub(crate) struct DetectionRequest<'a> {
    /// Text to check for plagiarism
    pub text: &'a str,
}

/// Wire-level success response (field names fixed by the remote contract)
#[derive(Debug, Deserialize)]
struct WireReport {
    // Wire name kept verbatim, see module docs
    plgarised_text: bool,
    results: WireResults,
}

#[derive(Debug, Deserialize)]
struct WireResults {
    original_files: BTreeMap<String, Similarity>,
    plagiarism_type: String,
}

/// Per-file similarity measure
///
/// The service emits either a JSON number (e.g. `0.92`) or a string-formatted
/// score (e.g. `"92%"`). Both are accepted and rendered as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Similarity {
    /// Numeric score
    Score(f64),
    /// String-formatted score
    Label(String),
}

impl fmt::Display for Similarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Similarity::Score(score) => write!(f, "{score}"),
            Similarity::Label(label) => write!(f, "{label}"),
        }
    }
}

/// Decoded verdict from a successful detection request
///
/// Created fresh on each successful response; the previous report is
/// discarded in full. `plagiarism_type` is meaningful only when
/// `plagiarised` is true.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionReport {
    /// Whether the submitted text was flagged as plagiarized
    pub plagiarised: bool,
    /// File identifier to similarity measure, one entry per matched source
    pub original_files: BTreeMap<String, Similarity>,
    /// Classification label for the detected match
    pub plagiarism_type: String,
}

impl DetectionReport {
    /// Decode a success response body into a report.
    ///
    /// A body that does not match the wire contract yields
    /// `TextMatchError::MalformedResponse`; shape mismatches never reach
    /// the view.
    pub fn from_wire_json(body: &str) -> Result<Self> {
        let wire: WireReport = serde_json::from_str(body)
            .map_err(|e| TextMatchError::MalformedResponse(Box::new(e)))?;
        Ok(Self::from(wire))
    }
}

impl From<WireReport> for DetectionReport {
    fn from(wire: WireReport) -> Self {
        Self {
            plagiarised: wire.plgarised_text,
            original_files: wire.results.original_files,
            plagiarism_type: wire.results.plagiarism_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_plagiarised_report() {
        let body = r#"{
            "plgarised_text": true,
            "results": {
                "original_files": {"paper1.txt": 0.92},
                "plagiarism_type": "verbatim"
            }
        }"#;

        let report = DetectionReport::from_wire_json(body).unwrap();
        assert!(report.plagiarised);
        assert_eq!(report.plagiarism_type, "verbatim");
        assert_eq!(report.original_files.len(), 1);
        assert_eq!(
            report.original_files.get("paper1.txt"),
            Some(&Similarity::Score(0.92))
        );
    }

    #[test]
    fn test_decode_clean_report() {
        let body = r#"{
            "plgarised_text": false,
            "results": {
                "original_files": {},
                "plagiarism_type": ""
            }
        }"#;

        let report = DetectionReport::from_wire_json(body).unwrap();
        assert!(!report.plagiarised);
        assert!(report.original_files.is_empty());
    }

    #[test]
    fn test_decode_string_similarity() {
        let body = r#"{
            "plgarised_text": true,
            "results": {
                "original_files": {"thesis.txt": "87%"},
                "plagiarism_type": "paraphrase"
            }
        }"#;

        let report = DetectionReport::from_wire_json(body).unwrap();
        assert_eq!(
            report.original_files.get("thesis.txt"),
            Some(&Similarity::Label("87%".to_string()))
        );
    }

    #[test]
    fn test_decode_rejects_missing_flag() {
        let body = r#"{
            "results": {
                "original_files": {},
                "plagiarism_type": ""
            }
        }"#;

        let error = DetectionReport::from_wire_json(body).unwrap_err();
        assert!(matches!(error, TextMatchError::MalformedResponse(_)));
    }

    #[test]
    fn test_decode_rejects_non_json_body() {
        let error = DetectionReport::from_wire_json("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(error, TextMatchError::MalformedResponse(_)));
    }

    #[test]
    fn test_decode_tolerates_extra_fields() {
        let body = r#"{
            "plgarised_text": false,
            "results": {
                "original_files": {},
                "plagiarism_type": "",
                "elapsed_ms": 12
            },
            "service_version": "2.0"
        }"#;

        let report = DetectionReport::from_wire_json(body).unwrap();
        assert!(!report.plagiarised);
    }

    #[test]
    fn test_correctly_spelled_flag_is_rejected() {
        // The wire contract uses "plgarised_text"; a correctly spelled key
        // must not be accepted in its place.
        let body = r#"{
            "plagiarised_text": true,
            "results": {
                "original_files": {},
                "plagiarism_type": ""
            }
        }"#;

        assert!(DetectionReport::from_wire_json(body).is_err());
    }

    #[test]
    fn test_similarity_display() {
        assert_eq!(Similarity::Score(0.92).to_string(), "0.92");
        assert_eq!(Similarity::Label("87%".to_string()).to_string(), "87%");
    }

    #[test]
    fn test_request_body_shape() {
        let request = DetectionRequest { text: "abstract" };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"text":"abstract"}"#);
    }
}
