//! TextMatch - Desktop client for the TextMatch plagiarism detection service
//!
//! Lets a user paste a block of text, submit it to a remote similarity
//! detection endpoint, and renders the verdict. `SubmissionController` owns
//! the input text and drives one request at a time; `DetectionClient` speaks
//! the service's wire contract; the Slint GUI renders the published state
//! snapshots.
//!
//! The remote detection service is an external collaborator: this client is
//! a thin, stateful bridge between a text box and one remote call. There is
//! no client-side text processing, caching, or retry.

// Module declarations
pub mod config;
pub mod controller;
pub mod detection;
pub mod error;
pub mod utils;

// Shared helpers for unit tests
#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use error::{Result, TextMatchError};
