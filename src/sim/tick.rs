//! Per-frame simulation step
//!
//! Order within a step: integrate, walls, player paddle, opponent paddle,
//! scoring, then the AI paddle. Each check runs independently.

use glam::Vec2;

use super::collision::deflect_vy;
use super::rng::ServeRng;
use super::state::{Engine, FrameEvents, Side};

impl<R: ServeRng> Engine<R> {
    /// Advance the game state by one step
    pub fn advance(&mut self) -> FrameEvents {
        let mut events = FrameEvents::default();
        let arena_w = self.tuning.arena_width;
        let arena_h = self.tuning.arena_height;
        let size = self.ball.size;

        self.ball.pos += self.ball.vel;

        // Top/bottom walls
        if self.ball.pos.y <= 0.0 || self.ball.pos.y + size >= arena_h {
            self.ball.vel.y = -self.ball.vel.y;
            events.wall_bounce = true;
            log::trace!("Wall bounce at y={:.1}", self.ball.pos.y);
        }

        // Paddles force the ball away from their own goal
        if self.player.rect().overlaps(&self.ball.rect()) {
            self.ball.vel.x = self.ball.vel.x.abs();
            self.ball.vel.y = deflect_vy(
                self.ball.center().y,
                self.player.center_y(),
                self.tuning.deflection,
            );
            events.paddle_hit = Some(Side::Player);
            log::debug!("Player hit, vy={:.2}", self.ball.vel.y);
        }
        if self.opponent.rect().overlaps(&self.ball.rect()) {
            self.ball.vel.x = -self.ball.vel.x.abs();
            self.ball.vel.y = deflect_vy(
                self.ball.center().y,
                self.opponent.center_y(),
                self.tuning.deflection,
            );
            events.paddle_hit = Some(Side::Opponent);
            log::debug!("Opponent hit, vy={:.2}", self.ball.vel.y);
        }

        // Scoring
        if self.ball.pos.x < 0.0 {
            self.point_to(Side::Opponent);
            events.scored = Some(Side::Opponent);
        } else if self.ball.pos.x + size > arena_w {
            self.point_to(Side::Player);
            events.scored = Some(Side::Player);
        }

        self.step_ai();

        self.frame += 1;
        events
    }

    fn point_to(&mut self, side: Side) {
        self.score.award(side);
        log::info!(
            "{} scores ({} - {})",
            side.as_str(),
            self.score.player,
            self.score.opponent
        );
        self.reset_ball();
    }

    /// Re-center the ball and serve it with random direction signs
    pub(super) fn reset_ball(&mut self) {
        let arena = self.arena();
        let size = self.ball.size;
        self.ball.pos = (arena - Vec2::splat(size)) / 2.0;

        let vx = if self.rng.flip() {
            self.tuning.serve_speed_x
        } else {
            -self.tuning.serve_speed_x
        };
        let vy = if self.rng.flip() {
            self.tuning.serve_speed_y
        } else {
            -self.tuning.serve_speed_y
        };
        self.ball.vel = Vec2::new(vx, vy);
    }

    /// Laggy tracker: hold inside the deadzone, otherwise a fixed step toward the ball
    fn step_ai(&mut self) {
        let ai_center = self.opponent.center_y();
        let ball_center = self.ball.center().y;
        let deadzone = self.tuning.ai_deadzone;

        if ai_center < ball_center - deadzone {
            self.opponent.y += self.tuning.ai_step;
        } else if ai_center > ball_center + deadzone {
            self.opponent.y -= self.tuning.ai_step;
        }
        self.opponent.y = self.tuning.clamp_paddle_y(self.opponent.y);
    }
}
