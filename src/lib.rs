//! Paddle Pong - classic two-paddle Pong against a reactive AI
//!
//! Core modules:
//! - `sim`: Simulation engine (ball motion, collisions, scoring, AI paddle)
//! - `tuning`: Data-driven game balance
//! - `session`: Frame driver that feeds input into the engine
//! - `clock`: Fixed timestep accumulation and FPS tracking
//! - `input`: Pointer-to-paddle mapping and the demo autopilot
//! - `render`: Draw-command scene plus Canvas 2D / ASCII backends
//! - `audio`: Sound effects for collisions and scoring
//! - `settings`: Persisted player preferences

pub mod audio;
pub mod clock;
pub mod input;
pub mod render;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use session::{FrameInput, FrameReport, Session};
pub use settings::{FramePacing, Settings};
pub use sim::{Engine, FrameEvents, Side};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Simulation timestep (one step per 60 Hz display refresh)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta fed into the accumulator (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 16.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Gap between a paddle and its side wall
    pub const PADDLE_MARGIN: f32 = 20.0;

    /// Ball defaults (side length of the bounding square)
    pub const BALL_SIZE: f32 = 18.0;
    /// Serve speed magnitudes (units per step)
    pub const SERVE_SPEED_X: f32 = 5.0;
    pub const SERVE_SPEED_Y: f32 = 4.0;

    /// Vertical speed gained per unit of hit offset from paddle center
    pub const DEFLECTION: f32 = 0.25;

    /// AI tracker tolerance band around the ball center
    pub const AI_DEADZONE: f32 = 10.0;
    /// AI paddle movement per step
    pub const AI_STEP: f32 = 6.0;
}
