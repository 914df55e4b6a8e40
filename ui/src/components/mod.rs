//! User Interface Components
//!
//! This module contains the Dioxus components of the settings page:
//!
//! - **forms**: the settings form with its three sections and save button
//! - **display**: collapsible section panels and the save status line
//! - **inputs**: plain text inputs and masked API key inputs with a reveal toggle

pub mod display;
pub mod forms;
pub mod inputs;
