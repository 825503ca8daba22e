//! Input adapter
//!
//! Maps raw pointer coordinates into arena space and produces the player
//! paddle target the engine expects (its top edge).

use crate::sim::{Engine, ServeRng};

/// Converts client-space pointer positions into paddle targets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerMapper {
    /// Canvas height in CSS pixels as laid out on the page
    client_height: f32,
    arena_height: f32,
    paddle_height: f32,
}

impl PointerMapper {
    pub fn new(client_height: f32, arena_height: f32, paddle_height: f32) -> Self {
        Self {
            client_height,
            arena_height,
            paddle_height,
        }
    }

    /// Mapper for the engine's arena, drawn `client_height` pixels tall
    pub fn for_engine<R: ServeRng>(engine: &Engine<R>, client_height: f32) -> Self {
        let tuning = engine.tuning();
        Self::new(client_height, tuning.arena_height, tuning.paddle_height)
    }

    /// Update after the canvas is resized
    pub fn set_client_height(&mut self, client_height: f32) {
        self.client_height = client_height;
    }

    /// Pointer Y relative to the canvas top, in arena units
    pub fn to_arena_y(&self, client_y: f32) -> f32 {
        if self.client_height <= 0.0 {
            return client_y;
        }
        client_y * self.arena_height / self.client_height
    }

    /// Paddle top edge that centers the paddle on the pointer
    ///
    /// Not clamped here; the engine clamps on write.
    pub fn paddle_target(&self, client_y: f32) -> f32 {
        self.to_arena_y(client_y) - self.paddle_height / 2.0
    }
}

/// Demo mode: steers the player paddle so its center follows the ball
#[derive(Debug, Clone, Copy, Default)]
pub struct Autopilot;

impl Autopilot {
    /// Top edge that puts the player paddle's center on the ball's center
    pub fn target<R: ServeRng>(&self, engine: &Engine<R>) -> f32 {
        engine.ball().center().y - engine.player().height / 2.0
    }
}
