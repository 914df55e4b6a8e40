pub mod collapsible_section;
pub mod save_status_display;

pub use collapsible_section::*;
pub use save_status_display::*;
