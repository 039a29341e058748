//! Utility functions and helpers for img-alt-api.
//!
//! # Submodules
//!
//! - `logging`: Tracing initialization and secret scrubbing.
//!
//! Author: kelexine (<https://github.com/kelexine>)

pub mod logging;
