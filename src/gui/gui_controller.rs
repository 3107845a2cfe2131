//! GUI controller bridging the Slint window and the submission controller
//!
//! Window callbacks (text edits, the submit button) are forwarded to the
//! `SubmissionController` under its lock; state snapshots published by the
//! controller are forwarded onto the Slint event loop and applied to window
//! properties. The snapshot is the only channel through which results reach
//! the window, so the view never reads state that does not exist for the
//! current request phase.

use crate::{MainWindow, MatchRow};
use parking_lot::Mutex;
use slint::{ComponentHandle, ModelRc, VecModel};
use std::sync::{Arc, mpsc};
use textmatch::config::{ConfigManager, WindowState};
use textmatch::controller::{SubmissionController, SubmissionSnapshot};
use textmatch::error::{Result, TextMatchError};
use tracing::{debug, info, warn};

/// GUI controller owning the main window
pub struct GuiController {
    window: MainWindow,
    controller: Arc<Mutex<SubmissionController>>,
}

impl GuiController {
    /// Create the main window, wire its callbacks to the submission
    /// controller, and start forwarding state snapshots into the Slint
    /// event loop.
    pub fn new(
        controller: Arc<Mutex<SubmissionController>>,
        state_receiver: mpsc::Receiver<SubmissionSnapshot>,
    ) -> Result<Self> {
        let window = MainWindow::new().map_err(|e| TextMatchError::GuiError(Box::new(e)))?;

        restore_window_state(&window, &controller);

        // Every edit replaces the controller-owned text; the in-flight
        // request, if any, keeps the text captured at submit time
        let controller_handle = Arc::clone(&controller);
        window.on_text_edited(move |text| {
            controller_handle.lock().update_text(text.into());
        });

        let controller_handle = Arc::clone(&controller);
        window.on_submit_clicked(move || {
            controller_handle.lock().submit();
        });

        spawn_snapshot_forwarder(window.as_weak(), state_receiver);

        Ok(Self { window, controller })
    }

    /// Run the Slint event loop until the window is closed, then persist
    /// the window geometry.
    pub fn run(&self) -> Result<()> {
        self.window
            .run()
            .map_err(|e| TextMatchError::GuiError(Box::new(e)))?;

        self.save_window_state();
        Ok(())
    }

    /// Persist the current window position and size into the configuration
    fn save_window_state(&self) {
        let position = self.window.window().position();
        let size = self.window.window().size();

        let controller_guard = self.controller.lock();
        let mut config = controller_guard.config.lock();
        config.window_state = WindowState {
            x: position.x,
            y: position.y,
            width: size.width,
            height: size.height,
        };

        if let Err(e) = ConfigManager::save(&config) {
            warn!("Failed to persist window state: {}", e);
        }
    }
}

/// Apply the persisted window geometry from the configuration
fn restore_window_state(window: &MainWindow, controller: &Arc<Mutex<SubmissionController>>) {
    let controller_guard = controller.lock();
    let state = controller_guard.config.lock().window_state.clone();

    window
        .window()
        .set_position(slint::PhysicalPosition::new(state.x, state.y));
    window
        .window()
        .set_size(slint::PhysicalSize::new(state.width, state.height));
}

/// Forward controller snapshots onto the Slint event loop.
///
/// The forwarder thread exits when the controller side closes the channel or
/// the window is gone.
fn spawn_snapshot_forwarder(
    window_weak: slint::Weak<MainWindow>,
    state_receiver: mpsc::Receiver<SubmissionSnapshot>,
) {
    std::thread::spawn(move || {
        while let Ok(snapshot) = state_receiver.recv() {
            let result = window_weak.upgrade_in_event_loop(move |window| {
                apply_snapshot(&window, snapshot);
            });

            if result.is_err() {
                info!("Event loop gone, stopping snapshot forwarding");
                break;
            }
        }
    });
}

/// Apply one state snapshot to the window properties.
///
/// Pending shows the busy indicator and suppresses the result display;
/// Succeeded renders either the classification label with one line per
/// matched file or the no-match indicator; Failed clears the busy indicator
/// and shows a short failure line; Idle renders nothing.
fn apply_snapshot(window: &MainWindow, snapshot: SubmissionSnapshot) {
    debug!("Applying snapshot to window: {:?}", snapshot);

    match snapshot {
        SubmissionSnapshot::Idle => {
            window.set_busy(false);
            window.set_show_result(false);
            window.set_failure_message("".into());
        }
        SubmissionSnapshot::Pending => {
            window.set_busy(true);
            window.set_show_result(false);
            window.set_failure_message("".into());
        }
        SubmissionSnapshot::Succeeded(report) => {
            let rows: Vec<MatchRow> = report
                .original_files
                .iter()
                .map(|(file, score)| MatchRow {
                    file: file.as_str().into(),
                    score: score.to_string().into(),
                })
                .collect();

            window.set_busy(false);
            window.set_failure_message("".into());
            window.set_plagiarised(report.plagiarised);
            window.set_plagiarism_type(report.plagiarism_type.as_str().into());
            window.set_match_rows(ModelRc::new(VecModel::from(rows)));
            window.set_show_result(true);
        }
        SubmissionSnapshot::Failed(message) => {
            window.set_busy(false);
            window.set_show_result(false);
            window.set_failure_message(message.as_str().into());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use textmatch::detection::{DetectionReport, Similarity};

    // Window-dependent behavior is exercised manually; these tests cover the
    // row mapping the window renders from.
    fn row_strings(report: &DetectionReport) -> Vec<String> {
        report
            .original_files
            .iter()
            .map(|(file, score)| format!("{file}: {score}"))
            .collect()
    }

    #[test]
    fn test_result_rows_one_line_per_file() {
        let mut original_files = BTreeMap::new();
        original_files.insert("paper1.txt".to_string(), Similarity::Score(0.92));
        original_files.insert("thesis.txt".to_string(), Similarity::Label("87%".to_string()));

        let report = DetectionReport {
            plagiarised: true,
            original_files,
            plagiarism_type: "verbatim".to_string(),
        };

        let rows = row_strings(&report);
        assert_eq!(rows.len(), 2);
        assert!(rows.contains(&"paper1.txt: 0.92".to_string()));
        assert!(rows.contains(&"thesis.txt: 87%".to_string()));
    }
}
