//! Tangent Core
//!
//! Shared utilities for the tangent crates: logging setup, math re-exports
//! and profiling scopes.

pub mod logging;
pub mod math;
pub mod profiling;
