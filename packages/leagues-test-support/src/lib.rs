//! Shared helpers for the leagues test suites.

pub mod logging;
pub mod members;
