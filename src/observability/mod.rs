//! Tracing setup for the showcase binary and library consumers.
//!
//! Rendered output goes to stdout, so log records are written to stderr
//! through a `tracing-subscriber` fmt layer and never interleave with it.
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Usage
//!
//! ```rust
//! use pillbox::observability::init_tracing;
//! use pillbox::Config;
//!
//! let config = Config::default();
//! init_tracing(&config);
//!
//! tracing::debug!("pillbox initialized");
//! ```

mod init;

pub use init::{init_tracing, resolve_filter};
