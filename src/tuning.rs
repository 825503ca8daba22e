//! Data-driven game balance
//!
//! Every number the simulation uses lives here so a settings file can
//! retune the game without touching the engine.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Arena geometry and gameplay constants for one session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Horizontal gap between each paddle and its side wall
    pub paddle_margin: f32,
    pub ball_size: f32,
    pub serve_speed_x: f32,
    pub serve_speed_y: f32,
    /// Vertical speed per unit of offset between ball and paddle centers
    pub deflection: f32,
    pub ai_deadzone: f32,
    pub ai_step: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_margin: PADDLE_MARGIN,
            ball_size: BALL_SIZE,
            serve_speed_x: SERVE_SPEED_X,
            serve_speed_y: SERVE_SPEED_Y,
            deflection: DEFLECTION,
            ai_deadzone: AI_DEADZONE,
            ai_step: AI_STEP,
        }
    }
}

/// Why a `Tuning` cannot produce a playable game
#[derive(Debug, Clone, PartialEq)]
pub enum TuningError {
    /// A value is NaN or infinite
    NonFinite(&'static str),
    /// A value that must be strictly positive is not
    NotPositive(&'static str),
    /// A value that must be zero or more is negative
    Negative(&'static str),
    /// The paddle is taller than the arena
    PaddleTooTall { paddle_height: f32, arena_height: f32 },
    /// The ball does not fit inside the arena
    BallTooLarge { ball_size: f32 },
    /// The two paddles would overlap or leave no room between them
    PaddlesOverlap,
    /// The ball could cross the whole arena in one step
    ServeTooFast { serve_speed_x: f32, arena_width: f32 },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::NonFinite(field) => write!(f, "{field} must be a finite number"),
            TuningError::NotPositive(field) => write!(f, "{field} must be greater than zero"),
            TuningError::Negative(field) => write!(f, "{field} must not be negative"),
            TuningError::PaddleTooTall {
                paddle_height,
                arena_height,
            } => write!(
                f,
                "paddle height {paddle_height} exceeds arena height {arena_height}"
            ),
            TuningError::BallTooLarge { ball_size } => {
                write!(f, "ball size {ball_size} does not fit inside the arena")
            }
            TuningError::PaddlesOverlap => write!(f, "paddles overlap horizontally"),
            TuningError::ServeTooFast {
                serve_speed_x,
                arena_width,
            } => write!(
                f,
                "serve speed {serve_speed_x} crosses the {arena_width} wide arena in one step"
            ),
        }
    }
}

impl std::error::Error for TuningError {}

impl Tuning {
    /// Check that the values describe a playable arena
    pub fn validate(&self) -> Result<(), TuningError> {
        let fields = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_margin", self.paddle_margin),
            ("ball_size", self.ball_size),
            ("serve_speed_x", self.serve_speed_x),
            ("serve_speed_y", self.serve_speed_y),
            ("deflection", self.deflection),
            ("ai_deadzone", self.ai_deadzone),
            ("ai_step", self.ai_step),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(TuningError::NonFinite(name));
            }
        }

        for (name, value) in [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_size", self.ball_size),
            ("serve_speed_x", self.serve_speed_x),
            ("serve_speed_y", self.serve_speed_y),
        ] {
            if value <= 0.0 {
                return Err(TuningError::NotPositive(name));
            }
        }

        for (name, value) in [
            ("paddle_margin", self.paddle_margin),
            ("deflection", self.deflection),
            ("ai_deadzone", self.ai_deadzone),
            ("ai_step", self.ai_step),
        ] {
            if value < 0.0 {
                return Err(TuningError::Negative(name));
            }
        }

        if self.paddle_height > self.arena_height {
            return Err(TuningError::PaddleTooTall {
                paddle_height: self.paddle_height,
                arena_height: self.arena_height,
            });
        }
        if self.ball_size >= self.arena_height || self.ball_size >= self.arena_width {
            return Err(TuningError::BallTooLarge {
                ball_size: self.ball_size,
            });
        }
        if 2.0 * (self.paddle_margin + self.paddle_width) >= self.arena_width {
            return Err(TuningError::PaddlesOverlap);
        }
        if self.serve_speed_x >= self.arena_width {
            return Err(TuningError::ServeTooFast {
                serve_speed_x: self.serve_speed_x,
                arena_width: self.arena_width,
            });
        }
        Ok(())
    }

    /// Lowest allowed paddle top edge
    #[inline]
    pub fn max_paddle_y(&self) -> f32 {
        (self.arena_height - self.paddle_height).max(0.0)
    }

    /// Clamp a paddle top edge into `[0, H - paddle_height]`
    #[inline]
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.min(self.max_paddle_y()).max(0.0)
    }

    /// Left edge of the player (left) paddle
    #[inline]
    pub fn player_x(&self) -> f32 {
        self.paddle_margin
    }

    /// Left edge of the opponent (right) paddle
    #[inline]
    pub fn opponent_x(&self) -> f32 {
        self.arena_width - self.paddle_margin - self.paddle_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(Tuning::default().validate(), Ok(()));
    }

    #[test]
    fn test_paddle_positions() {
        let tuning = Tuning::default();
        assert_eq!(tuning.player_x(), 20.0);
        assert_eq!(tuning.opponent_x(), 764.0);
    }

    #[test]
    fn test_clamp_paddle_y() {
        let tuning = Tuning::default();
        assert_eq!(tuning.clamp_paddle_y(-50.0), 0.0);
        assert_eq!(tuning.clamp_paddle_y(10_000.0), 500.0);
        assert_eq!(tuning.clamp_paddle_y(123.0), 123.0);
    }

    #[test]
    fn test_rejects_nan() {
        let tuning = Tuning {
            deflection: f32::NAN,
            ..Default::default()
        };
        assert_eq!(tuning.validate(), Err(TuningError::NonFinite("deflection")));
    }

    #[test]
    fn test_rejects_tall_paddle() {
        let tuning = Tuning {
            paddle_height: 700.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::PaddleTooTall { .. })
        ));
    }

    #[test]
    fn test_rejects_overlapping_paddles() {
        let tuning = Tuning {
            arena_width: 60.0,
            serve_speed_x: 5.0,
            ball_size: 10.0,
            ..Default::default()
        };
        assert_eq!(tuning.validate(), Err(TuningError::PaddlesOverlap));
    }

    #[test]
    fn test_rejects_negative_ai_step() {
        let tuning = Tuning {
            ai_step: -1.0,
            ..Default::default()
        };
        assert_eq!(tuning.validate(), Err(TuningError::Negative("ai_step")));
    }

    #[test]
    fn test_rejects_teleporting_serve() {
        let tuning = Tuning {
            serve_speed_x: 900.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::ServeTooFast { .. })
        ));
    }

    #[test]
    fn test_degenerate_arena_clamp_does_not_panic() {
        let tuning = Tuning {
            arena_height: 50.0,
            ..Default::default()
        };
        assert_eq!(tuning.clamp_paddle_y(30.0), 0.0);
    }

    #[test]
    fn test_error_messages() {
        let err = TuningError::NotPositive("ball_size");
        assert_eq!(err.to_string(), "ball_size must be greater than zero");
    }
}
