//! Game state and core simulation types
//!
//! The engine owns both paddles, the ball and the score. Outside code reads
//! them through accessors and only ever writes the player's target position.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::rng::ServeRng;
use crate::tuning::Tuning;

/// Which end of the arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Human-controlled, left edge
    Player,
    /// AI-controlled, right edge
    Opponent,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Player => "player",
            Side::Opponent => "opponent",
        }
    }
}

/// A vertical paddle with a fixed column
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge (constant for the session)
    pub x: f32,
    /// Top edge, kept within `[0, H - height]`
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    /// Paddle at column `x`, vertically centered in the arena
    pub fn centered(x: f32, tuning: &Tuning) -> Self {
        Self {
            x,
            y: tuning.max_paddle_y() / 2.0,
            width: tuning.paddle_width,
            height: tuning.paddle_height,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// The ball, modelled as an axis-aligned square
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner
    pub pos: Vec2,
    /// Units per step
    pub vel: Vec2,
    /// Side length
    pub size: f32,
}

impl Ball {
    pub fn new(size: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size, self.size)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }
}

/// Points per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub player: u32,
    pub opponent: u32,
}

impl Score {
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Player => self.player = self.player.saturating_add(1),
            Side::Opponent => self.opponent = self.opponent.saturating_add(1),
        }
    }
}

/// What happened during one `advance()`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameEvents {
    /// Ball bounced off the top or bottom wall
    pub wall_bounce: bool,
    /// Last paddle the ball was deflected by this step
    pub paddle_hit: Option<Side>,
    /// Side that scored this step (the ball was re-served)
    pub scored: Option<Side>,
}

impl FrameEvents {
    pub fn is_empty(&self) -> bool {
        !self.wall_bounce && self.paddle_hit.is_none() && self.scored.is_none()
    }
}

/// The simulation engine: all game state plus the serve random source
#[derive(Debug, Clone)]
pub struct Engine<R: ServeRng = Pcg32> {
    pub(super) tuning: Tuning,
    pub(super) player: Paddle,
    pub(super) opponent: Paddle,
    pub(super) ball: Ball,
    pub(super) score: Score,
    /// Number of completed `advance()` calls
    pub(super) frame: u64,
    pub(super) rng: R,
}

impl Engine<Pcg32> {
    /// Create an engine whose serves come from a seeded PCG stream
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        Self::with_rng(tuning, Pcg32::seed_from_u64(seed))
    }
}

impl<R: ServeRng> Engine<R> {
    /// Create an engine with an injected serve source
    ///
    /// `tuning` is expected to pass [`Tuning::validate`]; settings loading
    /// guarantees this for configured games.
    pub fn with_rng(tuning: Tuning, rng: R) -> Self {
        let mut engine = Self {
            tuning,
            player: Paddle::centered(tuning.player_x(), &tuning),
            opponent: Paddle::centered(tuning.opponent_x(), &tuning),
            ball: Ball::new(tuning.ball_size),
            score: Score::default(),
            frame: 0,
            rng,
        };
        engine.reset_ball();
        engine
    }

    /// Start over: zero scores, re-center paddles, serve a fresh ball
    pub fn new_game(&mut self) {
        self.score = Score::default();
        self.player = Paddle::centered(self.tuning.player_x(), &self.tuning);
        self.opponent = Paddle::centered(self.tuning.opponent_x(), &self.tuning);
        self.frame = 0;
        self.reset_ball();
        log::info!("New game");
    }

    /// Move the player paddle's top edge toward `top_y`, clamped to the arena
    ///
    /// Non-finite targets are ignored.
    pub fn set_player_target(&mut self, top_y: f32) {
        if !top_y.is_finite() {
            log::trace!("Ignoring non-finite paddle target {top_y}");
            return;
        }
        self.player.y = self.tuning.clamp_paddle_y(top_y);
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Arena size as (width, height)
    pub fn arena(&self) -> Vec2 {
        Vec2::new(self.tuning.arena_width, self.tuning.arena_height)
    }

    pub fn player(&self) -> &Paddle {
        &self.player
    }

    pub fn opponent(&self) -> &Paddle {
        &self.opponent
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::ScriptedFlips;

    #[test]
    fn test_new_engine_layout() {
        let engine = Engine::with_rng(Tuning::default(), ScriptedFlips::always(true));
        assert_eq!(engine.player().x, 20.0);
        assert_eq!(engine.opponent().x, 764.0);
        assert_eq!(engine.player().y, 250.0);
        assert_eq!(engine.opponent().y, 250.0);
        assert_eq!(engine.score(), Score::default());
        assert_eq!(engine.frame(), 0);
    }

    #[test]
    fn test_new_engine_serves_from_center() {
        let engine = Engine::with_rng(Tuning::default(), ScriptedFlips::new(vec![false, true]));
        assert_eq!(engine.ball().pos, Vec2::new(391.0, 291.0));
        assert_eq!(engine.ball().vel, Vec2::new(-5.0, 4.0));
    }

    #[test]
    fn test_set_player_target_clamps() {
        let mut engine = Engine::new(Tuning::default(), 1);
        engine.set_player_target(-100.0);
        assert_eq!(engine.player().y, 0.0);
        engine.set_player_target(1e9);
        assert_eq!(engine.player().y, 500.0);
        engine.set_player_target(120.0);
        assert_eq!(engine.player().y, 120.0);
    }

    #[test]
    fn test_set_player_target_ignores_nan() {
        let mut engine = Engine::new(Tuning::default(), 1);
        engine.set_player_target(42.0);
        engine.set_player_target(f32::NAN);
        assert_eq!(engine.player().y, 42.0);
        engine.set_player_target(f32::INFINITY);
        assert_eq!(engine.player().y, 42.0);
    }

    #[test]
    fn test_target_never_moves_opponent() {
        let mut engine = Engine::new(Tuning::default(), 1);
        let before = *engine.opponent();
        engine.set_player_target(0.0);
        assert_eq!(*engine.opponent(), before);
    }

    #[test]
    fn test_new_game_resets_score() {
        let mut engine = Engine::with_rng(Tuning::default(), ScriptedFlips::always(true));
        engine.score.award(Side::Player);
        engine.score.award(Side::Opponent);
        engine.set_player_target(0.0);
        engine.new_game();
        assert_eq!(engine.score(), Score::default());
        assert_eq!(engine.player().y, 250.0);
        assert_eq!(engine.ball().pos, Vec2::new(391.0, 291.0));
    }

    #[test]
    fn test_score_award() {
        let mut score = Score::default();
        score.award(Side::Opponent);
        score.award(Side::Opponent);
        score.award(Side::Player);
        assert_eq!(score.opponent, 2);
        assert_eq!(score.player, 1);
    }

    #[test]
    fn test_ball_center() {
        let mut ball = Ball::new(18.0);
        ball.pos = Vec2::new(100.0, 200.0);
        assert_eq!(ball.center(), Vec2::new(109.0, 209.0));
    }
}
