//! Submission controller implementation
//!
//! This module implements the controller that owns the user-entered text,
//! the request state, and the last detection report, and that drives at
//! most one outstanding request to the detection endpoint.

use crate::config::AppConfig;
use crate::detection::{DetectionClient, DetectionReport};
use crate::error::{Result, get_user_friendly_error};
use parking_lot::Mutex;
use std::sync::{Arc, mpsc};
use uuid::Uuid;

/// Lifecycle of the current (or most recent) detection request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    /// No request has been dispatched yet
    Idle,
    /// A request is in flight
    Pending,
    /// The last request resolved with a decoded report
    Succeeded,
    /// The last request failed (transport, protocol, or malformed body)
    Failed,
}

/// State snapshot published to the GUI
///
/// Tagged so the view can only read what exists for the current state:
/// the report is reachable only through `Succeeded`, the failure message
/// only through `Failed`.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionSnapshot {
    /// Nothing to display yet
    Idle,
    /// Busy indicator on, result display suppressed
    Pending,
    /// Render the verdict
    Succeeded(DetectionReport),
    /// Busy indicator off, short failure line, no result block
    Failed(String),
}

/// Resolution of one dispatched request, delivered to the event loop
struct RequestOutcome {
    /// Correlation id assigned at dispatch time
    request_id: Uuid,
    /// Decoded report or the error that ended the request
    result: Result<DetectionReport>,
}

/// Client-side submission controller
pub struct SubmissionController {
    /// Application configuration (public for GUI access)
    pub config: Arc<Mutex<AppConfig>>,
    /// Detection endpoint client, shared with request worker threads
    client: Arc<DetectionClient>,
    /// User-entered text; the next submission captures it as-is
    input_text: String,
    /// Current request state; Pending suppresses further dispatches
    request_state: RequestState,
    /// Report from the last successful request; survives later failures
    last_report: Option<DetectionReport>,
    /// User-facing message from the last failed request
    last_failure: Option<String>,
    /// Outcome sender handed to each request worker thread
    outcome_sender: mpsc::SyncSender<RequestOutcome>,
    /// Outcome receiver (taken when the event loop starts)
    outcome_receiver: Option<mpsc::Receiver<RequestOutcome>>,
    /// State sender to GUI
    gui_state_sender: mpsc::SyncSender<SubmissionSnapshot>,
}

impl SubmissionController {
    /// Create a new submission controller in the Idle state
    pub fn new(
        config: AppConfig,
        client: DetectionClient,
        gui_state_sender: mpsc::SyncSender<SubmissionSnapshot>,
    ) -> Self {
        let (outcome_sender, outcome_receiver) = mpsc::sync_channel::<RequestOutcome>(32);

        Self {
            config: Arc::new(Mutex::new(config)),
            client: Arc::new(client),
            input_text: String::new(),
            request_state: RequestState::Idle,
            last_report: None,
            last_failure: None,
            outcome_sender,
            outcome_receiver: Some(outcome_receiver),
            gui_state_sender,
        }
    }

    /// Replace the input text unconditionally.
    ///
    /// Callable in any request state. Editing while a request is in flight
    /// does not affect that request; it captured the text at submit time.
    pub fn update_text(&mut self, new_text: String) {
        self.input_text = new_text;
    }

    /// The currently held input text
    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    /// Current request state
    pub fn request_state(&self) -> RequestState {
        self.request_state
    }

    /// Report from the last successful request, if any
    pub fn last_report(&self) -> Option<&DetectionReport> {
        self.last_report.as_ref()
    }

    /// Submit the current text to the detection endpoint.
    ///
    /// A no-op while a request is already in flight; at most one request is
    /// outstanding and excess submissions are dropped, not queued. Otherwise
    /// transitions to Pending, publishes a snapshot, and dispatches one
    /// request on a worker thread carrying the text captured now. Empty text
    /// is a legal submission.
    pub fn submit(&mut self) {
        use tracing::info;

        let Some((request_id, text)) = self.begin_submission() else {
            return;
        };

        info!(
            "Dispatching detection request {} ({} bytes)",
            request_id,
            text.len()
        );

        let client = Arc::clone(&self.client);
        let outcome_sender = self.outcome_sender.clone();

        std::thread::spawn(move || {
            use tracing::warn;

            let result = client.detect(&text);
            let outcome = RequestOutcome { request_id, result };

            if outcome_sender.send(outcome).is_err() {
                warn!("Outcome channel closed before request {} settled", request_id);
            }
        });
    }

    /// Check the busy flag and, if clear, enter Pending and capture the text.
    ///
    /// Returns `None` while a request is in flight. Runs under the controller
    /// lock, so the check and the transition are one atomic step.
    fn begin_submission(&mut self) -> Option<(Uuid, String)> {
        use tracing::debug;

        if self.request_state == RequestState::Pending {
            debug!("Submission ignored: a request is already in flight");
            return None;
        }

        self.request_state = RequestState::Pending;
        self.send_state_update();

        Some((Uuid::new_v4(), self.input_text.clone()))
    }

    /// Apply the resolution of a dispatched request.
    ///
    /// Success replaces the report in full; failure leaves the previous
    /// report untouched and records a user-facing message.
    fn handle_request_outcome(&mut self, outcome: RequestOutcome) {
        use tracing::{info, warn};

        match outcome.result {
            Ok(report) => {
                info!(
                    "Detection request {} succeeded: plagiarised = {}",
                    outcome.request_id, report.plagiarised
                );
                self.last_report = Some(report);
                self.last_failure = None;
                self.request_state = RequestState::Succeeded;
            }
            Err(e) => {
                warn!("Detection request {} failed: {}", outcome.request_id, e);
                self.last_failure = Some(get_user_friendly_error(&e));
                self.request_state = RequestState::Failed;
            }
        }

        self.send_state_update();
    }

    /// Build the tagged snapshot for the current state
    fn snapshot(&self) -> SubmissionSnapshot {
        match self.request_state {
            RequestState::Idle => SubmissionSnapshot::Idle,
            RequestState::Pending => SubmissionSnapshot::Pending,
            RequestState::Succeeded => match &self.last_report {
                Some(report) => SubmissionSnapshot::Succeeded(report.clone()),
                // Succeeded implies a report; fall back to Idle rather than panic
                None => SubmissionSnapshot::Idle,
            },
            RequestState::Failed => SubmissionSnapshot::Failed(
                self.last_failure
                    .clone()
                    .unwrap_or_else(|| "The check could not be completed.".to_string()),
            ),
        }
    }

    /// Publish the current snapshot to the GUI
    fn send_state_update(&self) {
        use tracing::{debug, warn};

        let snapshot = self.snapshot();
        debug!("Sending state update to GUI: {:?}", self.request_state);

        if let Err(e) = self.gui_state_sender.send(snapshot) {
            warn!("Failed to send state update to GUI: {}", e);
        }
    }

    /// Publish the initial Idle snapshot so the GUI can populate
    pub fn send_initial_state(&self) {
        self.send_state_update();
    }

    /// Take ownership of the outcome receiver if it hasn't been taken yet.
    /// Returns None if already taken. Caller should treat None as a no-op.
    fn take_outcome_receiver(&mut self) -> Option<mpsc::Receiver<RequestOutcome>> {
        self.outcome_receiver.take()
    }

    /// Spawn the event loop in a background thread. Only locks the controller
    /// while handling individual outcomes, so GUI callbacks are never blocked
    /// behind a slow request.
    pub fn spawn_event_loop(
        controller: Arc<Mutex<SubmissionController>>,
    ) -> std::thread::JoinHandle<()> {
        use tracing::{info, warn};

        let Some(outcome_receiver) = controller.lock().take_outcome_receiver() else {
            warn!("Event loop already running; spawn_event_loop() call ignored");
            return std::thread::spawn(|| {});
        };

        std::thread::spawn(move || {
            info!("Entering submission event loop");

            while let Ok(outcome) = outcome_receiver.recv() {
                let mut controller_guard = controller.lock();
                controller_guard.handle_request_outcome(outcome);
            }

            info!("Submission event loop exited");
        })
    }
}
