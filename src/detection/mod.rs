//! Detection endpoint client module
//!
//! This module owns the HTTP boundary to the remote TextMatch detection
//! service and the typed result it produces.
//!
//! # Overview
//!
//! - `DetectionClient`: blocking HTTP client that submits text to the
//!   detection endpoint and decodes the verdict
//! - `DetectionReport`: the decoded verdict, created fresh per response
//! - `Similarity`: per-file similarity measure, numeric or string-formatted
//!
//! The wire contract is fixed by the service, including the historical
//! misspelling of the top-level `plgarised_text` flag. Field names are
//! matched exactly; a success body that does not decode is reported as a
//! malformed response instead of reaching the view.

pub mod client;
pub mod report;

pub use client::DetectionClient;
pub use report::{DetectionReport, Similarity};
