//! Simulated settings save.
//!
//! There is no backend: a save shows "Saving...", waits, reports success,
//! waits again and clears the status. Nothing is persisted.

mod simulated_save;
mod sleeper;

pub use simulated_save::simulate_save;
pub use sleeper::{GlooSleeper, Sleeper};
