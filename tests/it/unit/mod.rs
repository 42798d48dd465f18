//! Unit tests for Folio.

mod frame_tests;
mod perf_tests;
mod preferences_store_tests;
mod regions_tests;
mod snapshot_tests;
mod spring_tests;
