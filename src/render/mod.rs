//! Rendering boundary: surfaces and preview formatting.
//!
//! The imperative shell around the pure core. The session pushes display
//! text through the [`Surface`] environment trait; the `preview` functions
//! format the pending expression in glyph form.

pub mod preview;

mod surface;

pub use surface::{NullSurface, Surface, TextSurface};
