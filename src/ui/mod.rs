//! Rendering layer: renderables, styles and the console painter.
//!
//! Everything drawable implements [`Renderable`], a two-operation contract
//! (`measure`, `render`) over a [`RenderOptions`] capability descriptor. The
//! output of `render` is a stream of [`Segment`]s, styled text fragments that
//! the [`Console`] paints to any writer.
//!
//! ```text
//! Label / Text / Rule / Table → Renderable::render → Segments → Console → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`renderable`]: The `Renderable` trait, capabilities and measurements
//! - [`segment`]: Styled text fragments
//! - [`style`]: Colors, styles and SGR escape sequences
//! - [`pill`]: Capsule rendering of a [`Label`](crate::Label)
//! - [`text`]: Wrapping styled text
//! - [`rule`]: Horizontal separator
//! - [`table`]: Column layout over boxed renderables
//! - [`console`]: Segment painter with title/separator helpers
//! - [`markup`]: Bracket markup escaping
//! - [`theme`]: Chrome color themes

pub mod console;
pub mod markup;
pub mod pill;
pub mod renderable;
pub mod rule;
pub mod segment;
pub mod style;
pub mod table;
pub mod text;
pub mod theme;

pub use console::Console;
pub use renderable::{Capabilities, Measurement, RenderOptions, Renderable, Segments};
pub use segment::Segment;
pub use style::{Color, Style};
pub use theme::Theme;
