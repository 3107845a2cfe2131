//! TextMatch - Desktop client for the TextMatch plagiarism detection service
//!
//! Paste a block of text, submit it to the remote detection endpoint, and
//! see the verdict with its supporting evidence.

// Hide the console window on Windows release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
#![expect(
    missing_docs,
    reason = "Slint-generated code from include_modules! lacks doc comments"
)]
#![allow(clippy::unwrap_used)] // Slint-generated code from include_modules! uses .unwrap() extensively

// GUI module is only in the binary, not the library
mod gui;

use anyhow::{Context, Result};
use gui::GuiController;
use parking_lot::Mutex;
use std::sync::{Arc, mpsc};
use textmatch::{
    config::{AppConfig, ConfigManager},
    controller::SubmissionController,
    detection::DetectionClient,
    error::{TextMatchError, get_user_friendly_error},
    utils,
};
use tracing::{error, info};

// Include Slint-generated code
slint::include_modules!();

/// Main entry point for the application
///
/// Performs initialization including logging, configuration loading,
/// detection client construction, and component wiring, then runs the GUI
/// event loop until the window is closed.
fn main() -> Result<()> {
    utils::init_logging().context("Failed to initialize logging system")?;

    info!("TextMatch v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = ConfigManager::load().context("Failed to load application configuration")?;
    info!(
        "Configuration loaded, endpoint base URL: {}",
        config.endpoint.resolved_base_url()
    );

    let gui_controller = match initialize_components(config) {
        Ok(gui_controller) => gui_controller,
        Err(e) => {
            error!("Failed to initialize components: {:#}", e);

            let error_message = if let Some(text_match_error) = e.downcast_ref::<TextMatchError>() {
                get_user_friendly_error(text_match_error)
            } else {
                format!("{e:#}")
            };

            show_error_and_exit(&format!(
                "Failed to start TextMatch:\n\n{error_message}"
            ));
            return Err(e);
        }
    };

    info!("Core components initialized successfully");

    info!("Starting GUI event loop");
    gui_controller
        .run()
        .context("GUI event loop terminated with error")?;

    info!("TextMatch shutting down");

    Ok(())
}

/// Initializes the detection client, submission controller, and GUI, wiring
/// the state channel between them. Returns the `GuiController` whose event
/// loop drives the application.
fn initialize_components(config: AppConfig) -> Result<GuiController> {
    info!("Creating detection client");
    let client = DetectionClient::new(&config.endpoint, &config.preferences)
        .context("Failed to create detection client")?;

    let channel_capacity = 32;
    let (state_tx, state_rx) = mpsc::sync_channel(channel_capacity);

    info!("Creating submission controller");
    let controller = SubmissionController::new(config, client, state_tx);
    let controller_handle = Arc::new(Mutex::new(controller));

    info!("Creating GUI controller");
    let gui_controller = GuiController::new(Arc::clone(&controller_handle), state_rx)
        .context("Failed to create GUI controller")?;

    info!("Starting submission event loop thread");
    let _event_loop_handle = SubmissionController::spawn_event_loop(Arc::clone(&controller_handle));

    info!("Sending initial state to populate GUI");
    controller_handle.lock().send_initial_state();

    Ok(gui_controller)
}

/// Shows an error on stderr and exits the application.
fn show_error_and_exit(message: &str) {
    eprintln!("ERROR: {message}");
    std::process::exit(1);
}
