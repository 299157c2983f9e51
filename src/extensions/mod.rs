//! Small extension traits over standard types.
//!
//! - [`range`]: inclusive and exclusive "is this value between" checks

pub mod range;

pub use range::RangeExt;
