/// Fixed simulation step length (seconds).
pub const FIXED_DT: f32 = 1.0 / 60.0;
/// Cap on per-frame elapsed time, bounding catch-up steps after a stall.
pub const MAX_FRAME_DT: f32 = 0.1;

/// Accumulator turning variable-rate frame deltas into whole fixed steps.
///
/// The host calls `advance` once per rendered frame with the wall-clock delta
/// and runs exactly that many simulation steps of `fixed_dt` each. Elapsed
/// time beyond `max_frame_dt` is discarded, so a long stall can never queue
/// an unbounded number of catch-up steps.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    fixed_dt: f32,
    max_frame_dt: f32,
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(fixed_dt: f32, max_frame_dt: f32) -> Self {
        Self {
            fixed_dt,
            max_frame_dt,
            accumulator: 0.0,
        }
    }

    pub fn fixed_dt(&self) -> f32 {
        self.fixed_dt
    }

    /// Account a frame's elapsed time and return how many fixed steps to run.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        let capped = if frame_dt.is_finite() {
            frame_dt.clamp(0.0, self.max_frame_dt)
        } else {
            0.0
        };
        self.accumulator += capped;
        let mut steps = 0;
        while self.accumulator >= self.fixed_dt {
            self.accumulator -= self.fixed_dt;
            steps += 1;
        }
        steps
    }

    /// Drop any buffered partial step (used on restart).
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(FIXED_DT, MAX_FRAME_DT)
    }
}
