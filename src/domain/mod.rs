//! Domain layer for pillbox.
//!
//! This module contains the core domain types, independent of any output
//! surface. A [`Label`] is plain data: text plus a [`Category`], with the
//! display colors derived once at construction.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`label`]: Label and category model
//!
//! # Examples
//!
//! ```
//! use pillbox::domain::{Category, Label};
//!
//! let label = Label::new("deployed", Category::Success);
//! assert_eq!(label.text(), "deployed");
//! assert_eq!(label.category(), Category::Success);
//! ```

pub mod error;
pub mod label;

pub use error::{PillboxError, Result};
pub use label::{Category, Label};
