//! Reckon: a calculator input core
//!
//! Reckon implements the input/state logic of a keypad calculator with a
//! "pure core, imperative shell" layout. Arithmetic, symbol mapping, and
//! phase classification are pure functions; the session mutates a single
//! owned state object; rendering is pushed through an environment trait
//! so any display surface can host the widget.
//!
//! # Core Concepts
//!
//! - **Operator**: canonical arithmetic symbols, parsed from either the
//!   ASCII or the display-glyph notation
//! - **Session**: the mutable state machine driven by discrete keypad
//!   events
//! - **Surface**: the environment the session renders display and
//!   preview text into
//! - **Tape**: immutable journal of every applied event
//!
//! # Example
//!
//! ```rust
//! use reckon::render::TextSurface;
//! use reckon::session::Session;
//!
//! let mut session = Session::new();
//! let mut surface = TextSurface::new();
//!
//! for key in ["7", ".", "5", "×", "2", "="] {
//!     session.press(key, &mut surface);
//! }
//!
//! assert_eq!(surface.result(), "15");
//! assert_eq!(surface.preview(), "7.5 × 2");
//! ```

pub mod core;
pub mod render;
pub mod session;

// Re-export commonly used types
pub use crate::core::{evaluate, EvalError, Operator, Phase};
pub use crate::render::{Surface, TextSurface};
pub use crate::session::{Input, Session, SessionBuilder};
