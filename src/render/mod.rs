//! Rendering module
//!
//! `scene` turns engine state into backend-neutral draw commands; the
//! backends below only execute them.

pub mod ascii;
#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasPainter;
pub use scene::{Color, DrawCmd, RenderStyle};
