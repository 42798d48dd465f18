//! Folio - a single-page portfolio with an animated pointer overlay.
//!
//! - `cursor` - Pointer tracker: trail, variants, springs, hover delegation
//! - `preferences` - Theme, language and cursor preferences with hot reload
//! - `app` / `render` - The gpui view that wires both together

pub mod app;
pub mod constants;
pub mod cursor;
pub mod i18n;
pub mod perf;
pub mod preferences;
pub mod render;
