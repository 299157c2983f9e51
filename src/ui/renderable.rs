//! The two-operation contract shared by every renderable leaf.
//!
//! A host pipeline (the [`Table`](crate::ui::table::Table), the
//! [`Console`](crate::ui::console::Console)) only ever sees `dyn Renderable`:
//! it asks for a [`Measurement`] to lay things out, then for the segments.
//!
//! # Example
//!
//! ```rust
//! use pillbox::ui::{Capabilities, RenderOptions, Renderable};
//! use pillbox::{Category, Label};
//!
//! let options = RenderOptions::new(Capabilities { unicode: false, ansi: true });
//! let pill: Box<dyn Renderable> = Box::new(Label::new("OK", Category::Success));
//!
//! assert_eq!(pill.measure(&options, 80).max, 6);
//! assert_eq!(pill.render(&options, 80).count(), 1);
//! ```

use crate::ui::segment::Segment;

/// What the output surface can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Extended glyphs (box drawing, powerline caps) render correctly.
    pub unicode: bool,
    /// ANSI SGR escape sequences are interpreted.
    pub ansi: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            unicode: true,
            ansi: true,
        }
    }
}

/// Options passed down through a render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    pub capabilities: Capabilities,
}

impl RenderOptions {
    #[must_use]
    pub const fn new(capabilities: Capabilities) -> Self {
        Self { capabilities }
    }

    #[must_use]
    pub const fn unicode(&self) -> bool {
        self.capabilities.unicode
    }
}

/// Minimum and maximum cell width a renderable can occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    pub min: usize,
    pub max: usize,
}

impl Measurement {
    #[must_use]
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// A leaf that neither shrinks nor grows.
    #[must_use]
    pub const fn fixed(width: usize) -> Self {
        Self {
            min: width,
            max: width,
        }
    }
}

/// Lazily produced segment stream.
pub type Segments<'a> = Box<dyn Iterator<Item = Segment> + 'a>;

/// Something that can be measured and rendered into styled segments.
///
/// Implementations must be pure: calling either method repeatedly with the
/// same arguments yields the same result.
pub trait Renderable {
    /// Reports the width this renderable wants, given `max_width` as a hint.
    fn measure(&self, options: &RenderOptions, max_width: usize) -> Measurement;

    /// Produces the segments for this renderable.
    fn render<'a>(&'a self, options: &RenderOptions, max_width: usize) -> Segments<'a>;
}

impl<T: Renderable + ?Sized> Renderable for Box<T> {
    fn measure(&self, options: &RenderOptions, max_width: usize) -> Measurement {
        (**self).measure(options, max_width)
    }

    fn render<'a>(&'a self, options: &RenderOptions, max_width: usize) -> Segments<'a> {
        (**self).render(options, max_width)
    }
}
