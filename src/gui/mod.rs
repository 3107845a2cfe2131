//! GUI module
//!
//! Provides the Slint-based graphical user interface: the main window with
//! the text input, submit button, busy indicator, and verdict panel, plus
//! state synchronization with the submission controller.

pub mod gui_controller;

pub use gui_controller::GuiController;
