//! Scene building: engine state to an ordered list of draw commands
//!
//! Backends (Canvas 2D, ASCII) only know how to fill rectangles, circles and
//! text; all layout and color choices are made here.

use glam::Vec2;

use crate::sim::{Engine, ServeRng};

/// An sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex form, e.g. `#ff4444`
    pub fn css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

pub const BACKGROUND: Color = Color::rgb(0x11, 0x11, 0x11);
pub const MIDLINE: Color = Color::rgb(0x33, 0x33, 0x33);
pub const FOREGROUND: Color = Color::rgb(0xff, 0xff, 0xff);
pub const PLAYER_SCORE: Color = Color::rgb(0x00, 0xff, 0x00);
pub const OPPONENT_SCORE: Color = Color::rgb(0xff, 0x44, 0x44);
pub const HUD: Color = Color::rgb(0x88, 0x88, 0x88);

/// Midline dash geometry
const DASH_WIDTH: f32 = 4.0;
const DASH_LENGTH: f32 = 20.0;
const DASH_SPACING: f32 = 35.0;

const SCORE_FONT_SIZE: f32 = 48.0;
const SCORE_BASELINE: f32 = 50.0;
const HUD_FONT_SIZE: f32 = 16.0;

/// A single fill operation in arena coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect {
        pos: Vec2,
        size: Vec2,
        color: Color,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    /// Monospace text; `pos` is the left end of the baseline
    Text {
        text: String,
        pos: Vec2,
        size: f32,
        color: Color,
    },
}

/// Presentation options that do not affect gameplay
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RenderStyle {
    pub round_ball: bool,
    /// FPS to print in the corner, if shown
    pub fps: Option<u32>,
    pub paused: bool,
}

/// Build the full frame for the current engine state
pub fn build<R: ServeRng>(engine: &Engine<R>, style: &RenderStyle) -> Vec<DrawCmd> {
    let arena = engine.arena();
    let mut cmds = Vec::with_capacity(32);

    cmds.push(DrawCmd::Rect {
        pos: Vec2::ZERO,
        size: arena,
        color: BACKGROUND,
    });

    midline(arena, &mut cmds);

    for paddle in [engine.player(), engine.opponent()] {
        let rect = paddle.rect();
        cmds.push(DrawCmd::Rect {
            pos: rect.pos,
            size: rect.size,
            color: FOREGROUND,
        });
    }

    let ball = engine.ball();
    if style.round_ball {
        cmds.push(DrawCmd::Circle {
            center: ball.center(),
            radius: ball.size / 2.0,
            color: FOREGROUND,
        });
    } else {
        let rect = ball.rect();
        cmds.push(DrawCmd::Rect {
            pos: rect.pos,
            size: rect.size,
            color: FOREGROUND,
        });
    }

    let score = engine.score();
    let mid = arena.x / 2.0;
    cmds.push(DrawCmd::Text {
        text: score.player.to_string(),
        pos: Vec2::new(mid - 80.0, SCORE_BASELINE),
        size: SCORE_FONT_SIZE,
        color: PLAYER_SCORE,
    });
    cmds.push(DrawCmd::Text {
        text: score.opponent.to_string(),
        pos: Vec2::new(mid + 50.0, SCORE_BASELINE),
        size: SCORE_FONT_SIZE,
        color: OPPONENT_SCORE,
    });

    if let Some(fps) = style.fps {
        cmds.push(DrawCmd::Text {
            text: format!("{fps} FPS"),
            pos: Vec2::new(8.0, arena.y - 8.0),
            size: HUD_FONT_SIZE,
            color: HUD,
        });
    }

    if style.paused {
        let label = "PAUSED";
        // Monospace glyphs are roughly 0.6 em wide
        let width = label.len() as f32 * SCORE_FONT_SIZE * 0.6;
        cmds.push(DrawCmd::Text {
            text: label.to_string(),
            pos: Vec2::new(mid - width / 2.0, arena.y / 2.0),
            size: SCORE_FONT_SIZE,
            color: FOREGROUND,
        });
    }

    cmds
}

/// Static dashed center line
fn midline(arena: Vec2, cmds: &mut Vec<DrawCmd>) {
    let x = arena.x / 2.0 - DASH_WIDTH / 2.0;
    let mut y = 0.0;
    while y < arena.y {
        cmds.push(DrawCmd::Rect {
            pos: Vec2::new(x, y),
            size: Vec2::new(DASH_WIDTH, DASH_LENGTH),
            color: MIDLINE,
        });
        y += DASH_SPACING;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::ScriptedFlips;
    use crate::tuning::Tuning;

    fn engine() -> Engine<ScriptedFlips> {
        Engine::with_rng(Tuning::default(), ScriptedFlips::always(true))
    }

    fn texts(cmds: &[DrawCmd]) -> Vec<&str> {
        cmds.iter()
            .filter_map(|c| match c {
                DrawCmd::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_color_css() {
        assert_eq!(OPPONENT_SCORE.css(), "#ff4444");
        assert_eq!(BACKGROUND.css(), "#111111");
    }

    #[test]
    fn test_background_first() {
        let cmds = build(&engine(), &RenderStyle::default());
        assert_eq!(
            cmds[0],
            DrawCmd::Rect {
                pos: Vec2::ZERO,
                size: Vec2::new(800.0, 600.0),
                color: BACKGROUND,
            }
        );
    }

    #[test]
    fn test_midline_dashes() {
        let cmds = build(&engine(), &RenderStyle::default());
        let dashes: Vec<_> = cmds
            .iter()
            .filter(|c| matches!(c, DrawCmd::Rect { color, .. } if *color == MIDLINE))
            .collect();
        // 0, 35, ..., 595
        assert_eq!(dashes.len(), 18);
        assert_eq!(
            *dashes[1],
            DrawCmd::Rect {
                pos: Vec2::new(398.0, 35.0),
                size: Vec2::new(4.0, 20.0),
                color: MIDLINE,
            }
        );
    }

    #[test]
    fn test_paddles_and_square_ball() {
        let e = engine();
        let cmds = build(&e, &RenderStyle::default());
        let white: Vec<_> = cmds
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Rect { pos, size, color } if *color == FOREGROUND => Some((*pos, *size)),
                _ => None,
            })
            .collect();
        assert_eq!(
            white,
            vec![
                (Vec2::new(20.0, 250.0), Vec2::new(16.0, 100.0)),
                (Vec2::new(764.0, 250.0), Vec2::new(16.0, 100.0)),
                (Vec2::new(391.0, 291.0), Vec2::new(18.0, 18.0)),
            ]
        );
    }

    #[test]
    fn test_round_ball() {
        let style = RenderStyle {
            round_ball: true,
            ..Default::default()
        };
        let cmds = build(&engine(), &style);
        assert!(cmds.contains(&DrawCmd::Circle {
            center: Vec2::new(400.0, 300.0),
            radius: 9.0,
            color: FOREGROUND,
        }));
    }

    #[test]
    fn test_scores_placed_either_side_of_midline() {
        let cmds = build(&engine(), &RenderStyle::default());
        let scores: Vec<_> = cmds
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Text { text, pos, color, .. } => Some((text.clone(), *pos, *color)),
                _ => None,
            })
            .collect();
        assert_eq!(
            scores,
            vec![
                ("0".to_string(), Vec2::new(320.0, 50.0), PLAYER_SCORE),
                ("0".to_string(), Vec2::new(450.0, 50.0), OPPONENT_SCORE),
            ]
        );
    }

    #[test]
    fn test_hud_overlays() {
        let style = RenderStyle {
            fps: Some(60),
            paused: true,
            ..Default::default()
        };
        let cmds = build(&engine(), &style);
        assert_eq!(texts(&cmds), vec!["0", "0", "60 FPS", "PAUSED"]);
    }
}
