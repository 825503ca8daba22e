//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform dependencies:
//! - One `advance()` is one step, no wall-clock time inside
//! - The serve direction is the only randomness, drawn from an injected source
//! - Input only ever writes the player paddle's target

pub mod collision;
pub mod rng;
pub mod state;
pub mod tick;

pub use collision::{Rect, deflect_vy};
pub use rng::{ScriptedFlips, ServeRng};
pub use state::{Ball, Engine, FrameEvents, Paddle, Score, Side};
