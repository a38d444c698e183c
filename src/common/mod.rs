//! Common utilities and shared functionality.
//!
//! # Utilities
//!
//! - Query string parsing
//! - Logging setup
//!
//! # Data Structures
//!
//! - `CustomError` - Startup error type

/// Common data structures.
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
