use raylib::prelude::*;
use crate::constants::*;

/// Brief "heartbeat" on the prompt line: scale eases up and back down,
/// `PULSE_COUNT` times in a row.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pulse {
    elapsed: f32,
}

impl Pulse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the pulse, returns false once it has finished.
    pub fn update(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        self.elapsed < PULSE_DURATION * PULSE_COUNT as f32
    }

    pub fn scale(&self) -> f32 {
        if self.elapsed >= PULSE_DURATION * PULSE_COUNT as f32 {
            return 1.0;
        }

        let half = PULSE_DURATION * 0.5;
        let t = self.elapsed % PULSE_DURATION;
        if t < half {
            ease::sine_in_out(t, 1.0, PULSE_SCALE, half)
        } else {
            ease::sine_in_out(t - half, 1.0 + PULSE_SCALE, -PULSE_SCALE, half)
        }
    }
}
