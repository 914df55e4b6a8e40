//! Generation Settings Page
//!
//! State and pure logic behind the settings form:
//!
//! - **types**: field/section keys, form values, toggles, save status and the reducer
//! - **masking**: cosmetic API key redaction and masked-input edit reconciliation
//!
//! Nothing here touches the DOM, so the whole module is testable natively.

pub mod masking;
pub mod types;

pub use masking::*;
pub use types::*;
