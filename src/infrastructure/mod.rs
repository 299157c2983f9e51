//! Infrastructure layer for environment interactions.
//!
//! This module isolates everything that reads the process environment, so
//! the domain and rendering layers stay pure.

pub mod terminal;

pub use terminal::{detect_from, width_from, DEFAULT_WIDTH};
