//! Random source for serve direction
//!
//! The serve is the only non-deterministic part of the simulation, so it goes
//! through a trait the engine is generic over. Seeded PCG in play, scripted
//! coin flips in tests and replays.

use rand::Rng;
use rand_pcg::Pcg32;

/// Supplies fair coin flips for picking serve direction signs
pub trait ServeRng {
    /// `true` means positive direction (right / down)
    fn flip(&mut self) -> bool;
}

impl ServeRng for Pcg32 {
    fn flip(&mut self) -> bool {
        self.random_bool(0.5)
    }
}

/// Replays a fixed sequence of flips, cycling when exhausted
#[derive(Debug, Clone)]
pub struct ScriptedFlips {
    flips: Vec<bool>,
    cursor: usize,
}

impl ScriptedFlips {
    pub fn new(flips: impl Into<Vec<bool>>) -> Self {
        Self {
            flips: flips.into(),
            cursor: 0,
        }
    }

    /// Every flip comes up `value`
    pub fn always(value: bool) -> Self {
        Self::new(vec![value])
    }
}

impl ServeRng for ScriptedFlips {
    fn flip(&mut self) -> bool {
        if self.flips.is_empty() {
            return true;
        }
        let value = self.flips[self.cursor % self.flips.len()];
        self.cursor = (self.cursor + 1) % self.flips.len();
        value
    }
}
