//! Arc diagram construction.
//!
//! Everything here is plain data and arithmetic, independent of the browser,
//! so the geometry can be tested natively.

mod arcs;
mod color;
mod context;
mod index;
mod types;

pub use arcs::{ARC_SAMPLES, half_sine_arc, linspace, render};
pub use color::{ColorSource, FixedColor, RandomColors};
pub use context::{SliderBounds, ViewerContext};
pub use index::IdentifierIndex;
pub use types::{Diagram, ReferenceArc, Rgba};
