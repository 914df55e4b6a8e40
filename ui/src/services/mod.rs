//! Infrastructure Services
//!
//! - **config**: Settings page configuration and the global accessor
//! - **errors**: Error type and result alias
//! - **save**: The simulated save flow and its timer seam
//!
//! The services are WASM-first, using browser timers and async traits without
//! Send/Sync bounds.

pub mod config;
pub mod errors;
pub mod save;
