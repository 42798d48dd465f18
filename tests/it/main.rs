//! Single test binary entry point.
//!
//! All tests link into one binary instead of one per file.
//!
//! Structure:
//! - helpers: Tracker builders and time helpers
//! - integration: Multi-component pointer sessions and preference round trips
//! - unit: Single-component unit tests

mod unit;
