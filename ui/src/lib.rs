//! This crate contains the settings page of the generation front-end and the
//! state, masking and simulated save logic behind it.

pub mod app;
pub use app::SettingsPage;

pub mod components;
pub mod features;
pub mod services;
pub mod utils;

// Used by the console macros so callers need no direct dependency
#[doc(hidden)]
pub use gloo_console;
#[doc(hidden)]
pub use js_sys;
