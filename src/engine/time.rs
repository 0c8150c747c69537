/// Fixed simulation step, matching a 60 Hz frame clock.
pub const PHYSICS_DT: f32 = 1.0 / 60.0;

/// Deterministic frame clock. Every tick advances by exactly `dt`, so a
/// simulation replays identically regardless of host speed.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub dt: f32,
    pub frame: u64,
    pub elapsed: f32,
}

impl FixedClock {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            frame: 0,
            elapsed: 0.0,
        }
    }

    pub fn tick(&mut self) {
        self.frame += 1;
        self.elapsed = self.frame as f32 * self.dt;
    }

    /// Number of whole frames needed to cover `seconds`.
    pub fn frames_for(&self, seconds: f32) -> u64 {
        if self.dt <= 0.0 || !seconds.is_finite() || seconds <= 0.0 {
            return 0;
        }
        (seconds / self.dt).ceil() as u64
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        Self::new(PHYSICS_DT)
    }
}
