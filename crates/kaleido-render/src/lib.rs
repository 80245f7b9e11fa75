//! Rendering-facing helpers for Kaleido.
//!
//! The core crate defines the [`Surface`] capability the drawing session
//! draws through; this crate provides implementations that bridge it to
//! concrete backends.

pub mod scene;

pub use kaleido_core::surface::Surface;
pub use scene::{DrawCall, SceneRecorder, StrokeBatch};
