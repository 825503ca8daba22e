//! Frame driver
//!
//! Sits between the platform loop and the engine: collects input between
//! frames, decides how many simulation steps a frame gets, and feeds the
//! player target in before every step.

use rand_pcg::Pcg32;

use crate::clock::{FixedTimestep, FpsCounter};
use crate::input::Autopilot;
use crate::render::RenderStyle;
use crate::settings::{FramePacing, Settings};
use crate::sim::{Engine, FrameEvents, ServeRng};

/// Input gathered since the last frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Latest paddle top-edge target, already in arena units
    pub target_y: Option<f32>,
    /// Toggle pause (one-shot)
    pub pause: bool,
    /// Start a new game (one-shot)
    pub restart: bool,
    /// Toggle demo mode (one-shot)
    pub toggle_autopilot: bool,
}

/// What one rendered frame did to the simulation
#[derive(Debug, Clone, Default)]
pub struct FrameReport {
    pub steps: u32,
    /// Events from each step, in order
    pub events: Vec<FrameEvents>,
}

impl FrameReport {
    pub fn any_score(&self) -> bool {
        self.events.iter().any(|e| e.scored.is_some())
    }
}

/// A running game: engine plus frame pacing and player input
pub struct Session<R: ServeRng = Pcg32> {
    engine: Engine<R>,
    clock: FixedTimestep,
    pacing: FramePacing,
    input: FrameInput,
    paused: bool,
    autopilot: bool,
    fps: FpsCounter,
}

impl Session<Pcg32> {
    pub fn new(settings: &Settings, seed: u64) -> Self {
        Self::with_engine(Engine::new(settings.tuning, seed), settings.pacing)
    }
}

impl<R: ServeRng> Session<R> {
    pub fn with_engine(engine: Engine<R>, pacing: FramePacing) -> Self {
        Self {
            engine,
            clock: FixedTimestep::default(),
            pacing,
            input: FrameInput::default(),
            paused: false,
            autopilot: false,
            fps: FpsCounter::default(),
        }
    }

    pub fn engine(&self) -> &Engine<R> {
        &self.engine
    }

    /// Pending input, written by event handlers between frames
    pub fn input_mut(&mut self) -> &mut FrameInput {
        &mut self.input
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn autopilot(&self) -> bool {
        self.autopilot
    }

    pub fn set_autopilot(&mut self, on: bool) {
        self.autopilot = on;
    }

    pub fn set_pacing(&mut self, pacing: FramePacing) {
        self.pacing = pacing;
        self.clock.reset();
    }

    pub fn fps(&self) -> u32 {
        self.fps.fps()
    }

    /// Run one display frame
    ///
    /// `dt` is seconds since the previous frame, `now_ms` a monotonic
    /// timestamp used only for the FPS counter.
    pub fn frame(&mut self, dt: f32, now_ms: f64) -> FrameReport {
        self.fps.record(now_ms);

        if std::mem::take(&mut self.input.pause) {
            self.paused = !self.paused;
            self.clock.reset();
            log::info!("{}", if self.paused { "Paused" } else { "Resumed" });
        }
        if std::mem::take(&mut self.input.toggle_autopilot) {
            self.autopilot = !self.autopilot;
            log::info!("Autopilot: {}", self.autopilot);
        }
        if std::mem::take(&mut self.input.restart) {
            self.engine.new_game();
            self.clock.reset();
            self.paused = false;
        }

        let mut report = FrameReport::default();
        if self.paused {
            return report;
        }

        let steps = match self.pacing {
            FramePacing::PerRefresh => 1,
            FramePacing::FixedStep => self.clock.accumulate(dt),
        };

        for _ in 0..steps {
            let target = if self.autopilot {
                Some(Autopilot.target(&self.engine))
            } else {
                self.input.target_y
            };
            if let Some(target) = target {
                self.engine.set_player_target(target);
            }
            report.events.push(self.engine.advance());
        }
        report.steps = steps;
        report
    }

    /// Presentation options for the current frame
    pub fn render_style(&self, settings: &Settings) -> RenderStyle {
        RenderStyle {
            round_ball: settings.round_ball,
            fps: settings.show_fps.then(|| self.fps()),
            paused: self.paused,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::sim::ScriptedFlips;
    use crate::tuning::Tuning;

    fn session(pacing: FramePacing) -> Session<ScriptedFlips> {
        let engine = Engine::with_rng(Tuning::default(), ScriptedFlips::new(vec![true, false]));
        Session::with_engine(engine, pacing)
    }

    #[test]
    fn test_per_refresh_runs_one_step() {
        let mut s = session(FramePacing::PerRefresh);
        let report = s.frame(0.5, 16.0);
        assert_eq!(report.steps, 1);
        assert_eq!(report.events.len(), 1);
        assert_eq!(s.engine().frame(), 1);
    }

    #[test]
    fn test_fixed_step_follows_elapsed_time() {
        let mut s = session(FramePacing::FixedStep);
        assert_eq!(s.frame(SIM_DT, 16.0).steps, 1);
        assert_eq!(s.frame(SIM_DT * 2.0, 48.0).steps, 2);
        assert_eq!(s.engine().frame(), 3);
    }

    #[test]
    fn test_switching_pacing_drops_partial_step() {
        let mut s = session(FramePacing::FixedStep);
        assert_eq!(s.frame(SIM_DT * 0.75, 16.0).steps, 0);
        s.set_pacing(FramePacing::PerRefresh);
        assert_eq!(s.frame(0.0, 32.0).steps, 1);
        s.set_pacing(FramePacing::FixedStep);
        // The earlier 0.75 step was discarded
        assert_eq!(s.frame(SIM_DT * 0.5, 48.0).steps, 0);
        assert_eq!(s.engine().frame(), 1);
    }

    #[test]
    fn test_target_applied_before_advance() {
        let mut s = session(FramePacing::PerRefresh);
        s.input_mut().target_y = Some(-40.0);
        s.frame(SIM_DT, 16.0);
        assert_eq!(s.engine().player().y, 0.0);
        s.input_mut().target_y = Some(120.0);
        s.frame(SIM_DT, 32.0);
        assert_eq!(s.engine().player().y, 120.0);
    }

    #[test]
    fn test_no_target_leaves_paddle() {
        let mut s = session(FramePacing::PerRefresh);
        s.frame(SIM_DT, 16.0);
        assert_eq!(s.engine().player().y, 250.0);
    }

    #[test]
    fn test_pause_stops_simulation() {
        let mut s = session(FramePacing::PerRefresh);
        s.input_mut().pause = true;
        let report = s.frame(SIM_DT, 16.0);
        assert!(s.is_paused());
        assert_eq!(report.steps, 0);
        assert_eq!(s.engine().frame(), 0);

        // One-shot: the next frame stays paused without re-toggling
        assert_eq!(s.frame(SIM_DT, 32.0).steps, 0);

        s.input_mut().pause = true;
        assert_eq!(s.frame(SIM_DT, 48.0).steps, 1);
        assert!(!s.is_paused());
    }

    #[test]
    fn test_restart_clears_score() {
        // Served left and up; with the player paddle parked at the bottom the
        // ball slips past after one wall bounce
        let engine = Engine::with_rng(Tuning::default(), ScriptedFlips::always(false));
        let mut s = Session::with_engine(engine, FramePacing::PerRefresh);
        s.input_mut().target_y = Some(1000.0);
        let mut scored = false;
        for i in 0..200 {
            if s.frame(SIM_DT, i as f64 * 16.0).any_score() {
                scored = true;
                break;
            }
        }
        assert!(scored);
        s.input_mut().restart = true;
        s.frame(SIM_DT, 10_000.0);
        assert_eq!(s.engine().score().player + s.engine().score().opponent, 0);
    }

    #[test]
    fn test_autopilot_tracks_ball() {
        let mut s = session(FramePacing::PerRefresh);
        s.input_mut().toggle_autopilot = true;
        s.frame(SIM_DT, 16.0);
        assert!(s.autopilot());
        // Target is computed before the step: ball center was 300 at serve
        assert_eq!(s.engine().player().y, 250.0);

        s.input_mut().target_y = Some(0.0);
        s.frame(SIM_DT, 32.0);
        assert_ne!(s.engine().player().y, 0.0);
    }

    #[test]
    fn test_render_style_reflects_state() {
        let mut s = session(FramePacing::PerRefresh);
        let settings = Settings {
            show_fps: true,
            round_ball: true,
            ..Default::default()
        };
        s.input_mut().pause = true;
        s.frame(SIM_DT, 16.0);
        let style = s.render_style(&settings);
        assert!(style.paused);
        assert!(style.round_ball);
        assert_eq!(style.fps, Some(0));
    }
}
