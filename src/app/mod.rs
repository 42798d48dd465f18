//! Application module - the Portfolio view and its state.
//!
//! This module is organized into several submodules:
//! - `state` - The Portfolio struct definition and sub-structs
//! - `lifecycle` - Initialization, preference reload and teardown
//! - `pointer_handlers` - Pointer events, frame scheduling, click pulse timers
//! - `settings_handlers` - Theme, language and cursor toggles, section navigation

mod state;
mod lifecycle;
mod pointer_handlers;
mod settings_handlers;

pub use settings_handlers::apply_color_scheme;
pub use state::{CursorLayer, PageState, Portfolio, SystemState};
