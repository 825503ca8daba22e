//! Audio system
//!
//! Procedurally generated beeps via the Web Audio API - no external files.
//! The event-to-effect mapping is platform independent; playback is
//! browser only.

use crate::sim::{FrameEvents, Side};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits a paddle
    PaddleHit,
    /// Ball hits the top or bottom wall
    WallHit,
    /// A point was scored
    Score(Side),
}

impl SoundEffect {
    /// Effects to play for one simulation step, in playback order
    pub fn for_events(events: &FrameEvents) -> Vec<SoundEffect> {
        let mut effects = Vec::new();
        if events.paddle_hit.is_some() {
            effects.push(SoundEffect::PaddleHit);
        }
        if events.wall_bounce {
            effects.push(SoundEffect::WallHit);
        }
        if let Some(side) = events.scored {
            effects.push(SoundEffect::Score(side));
        }
        effects
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::SoundEffect;
    use crate::settings::Settings;
    use crate::sim::Side;

    /// Beep player for game events
    pub struct AudioManager {
        ctx: Option<AudioContext>,
        volume: f32,
        muted: bool,
    }

    impl AudioManager {
        /// Volumes come from already-sanitized settings
        pub fn new(settings: &Settings) -> Self {
            // Fails outside a secure context
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self {
                ctx,
                volume: settings.master_volume * settings.sfx_volume,
                muted: settings.muted,
            }
        }

        /// Resume audio context (required after user gesture)
        pub fn resume(&self) {
            if let Some(ctx) = &self.ctx {
                let _ = ctx.resume();
            }
        }

        pub fn set_muted(&mut self, muted: bool) {
            self.muted = muted;
        }

        /// Play a sound effect
        pub fn play(&self, effect: SoundEffect) {
            if self.muted || self.volume <= 0.0 {
                return;
            }
            let vol = self.volume;

            let Some(ctx) = &self.ctx else { return };

            // Resume context if suspended (browsers require user gesture)
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            match effect {
                SoundEffect::PaddleHit => self.blip(ctx, 440.0, 0.08, vol * 0.5),
                SoundEffect::WallHit => self.blip(ctx, 220.0, 0.06, vol * 0.35),
                SoundEffect::Score(Side::Player) => self.sweep(ctx, 520.0, 880.0, vol * 0.5),
                SoundEffect::Score(Side::Opponent) => self.sweep(ctx, 330.0, 110.0, vol * 0.5),
            }
        }

        /// Create an oscillator with gain envelope
        fn create_osc(
            &self,
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
        ) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }

        /// Short square-wave tone, the classic arcade bounce
        fn blip(&self, ctx: &AudioContext, freq: f32, duration: f64, vol: f32) {
            let Some((osc, gain)) = self.create_osc(ctx, freq, OscillatorType::Square) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(vol, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + duration)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + duration + 0.02).ok();
        }

        /// Pitch sweep: rising when the player scores, falling otherwise
        fn sweep(&self, ctx: &AudioContext, from: f32, to: f32, vol: f32) {
            let Some((osc, gain)) = self.create_osc(ctx, from, OscillatorType::Triangle) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(vol, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.35)
                .ok();
            osc.frequency().set_value_at_time(from, t).ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(to, t + 0.3)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + 0.4).ok();
        }
    }
}
