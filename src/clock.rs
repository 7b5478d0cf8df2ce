/// Filters raw frame deltas before they reach the simulation.
#[derive(Clone, Debug)]
pub struct FrameClock {
    max_dt: f32,
    total: f32,
    frames: u64,
}

impl FrameClock {
    pub fn new(max_dt: f32) -> Self {
        Self {
            max_dt,
            total: 0.0,
            frames: 0,
        }
    }

    /// Returns the step to simulate, or `None` to skip this frame.
    ///
    /// Non-finite, negative and oversized deltas are dropped. While
    /// unfocused the game is paused, except that the very first frame
    /// always runs so the initial state gets built.
    pub fn accept(&mut self, raw_dt: f32, focused: bool) -> Option<f32> {
        if !focused && self.frames > 0 {
            return None;
        }
        if !raw_dt.is_finite() || raw_dt < 0.0 || raw_dt > self.max_dt {
            return None;
        }
        self.total += raw_dt;
        self.frames += 1;
        Some(raw_dt)
    }

    /// Simulated seconds so far.
    pub fn total(&self) -> f32 {
        self.total
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(0.1)
    }
}
