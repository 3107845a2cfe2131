//! Submission controller module
//!
//! This module coordinates between the text input, the detection endpoint,
//! and the GUI, implementing the core submission logic.
//!
//! # Overview
//!
//! The submission controller is the single owner of client-side state:
//! - **Owns the input text**, replaced on every user edit
//! - **Drives one request at a time** to the detection endpoint
//! - **Tracks the outcome** of the last request
//! - **Publishes state snapshots** to the GUI for display
//!
//! # Architecture
//!
//! - `SubmissionController`: owns input text, request state, and the last
//!   detection report
//! - `SubmissionSnapshot`: tagged state sent to the GUI; success carries the
//!   report, failure carries a message, so the view cannot read fields that
//!   do not exist for the current state
//! - **Event-driven design**: request outcomes arrive as events from worker
//!   threads
//! - **Thread-safe**: shared behind `Arc<Mutex<>>`
//!
//! # Event Flow
//!
//! ```text
//! GUI callback → SubmissionController.submit() → worker thread → endpoint
//!                                                     ↓
//!                      RequestOutcome → event loop → SubmissionSnapshot → GUI
//! ```
//!
//! # State Machine
//!
//! Idle is the only initial state; there is no terminal state.
//!
//! 1. **submit()** while Idle, Succeeded, or Failed: transition to Pending
//!    and dispatch one request carrying the text captured at submit time.
//! 2. **submit()** while Pending: no-op. The busy flag is the sole
//!    mutual-exclusion mechanism; excess submissions are dropped, not
//!    queued.
//! 3. **Outcome: success**: replace the report, transition to Succeeded.
//! 4. **Outcome: failure**: keep the previous report untouched, transition
//!    to Failed.
//!
//! Text edited mid-flight does not affect the in-flight request.

pub mod submission_controller;

pub use submission_controller::{RequestState, SubmissionController, SubmissionSnapshot};
