//! Kaleido Core Library
//!
//! Platform-agnostic symmetry geometry and stroke tracking for the Kaleido
//! drawing surface. Pointer samples are mirrored across a horizontal or
//! vertical axis, or rotated N-fold around the canvas center, and each move
//! event emits one line segment per mirror copy.

pub mod canvas;
pub mod input;
pub mod stroke;
pub mod style;
pub mod surface;
pub mod symmetry;

pub use canvas::Canvas;
pub use input::PointerEvent;
pub use stroke::{Segment, StrokeTracker};
pub use style::{BrushStyle, Rgba, Swatch};
pub use surface::Surface;
pub use symmetry::{PointSet, SymmetryError, SymmetryMode, compute_point_set};
