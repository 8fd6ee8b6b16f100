//! FixedTicker - converts host frame time into fixed simulation steps
//!
//! The host calls `advance` with the real time since its last frame; the
//! ticker answers how many fixed steps to run. Leftover time carries over.
//! When a frame is very late the backlog is capped at `max_steps` and the
//! excess is dropped, so a stalled tab does not trigger a burst of catch-up
//! work that would stall it again.

#[derive(Clone, Debug, PartialEq)]
pub struct FixedTicker {
    step_ms: f32,
    max_steps: u32,
    accumulator_ms: f32,
}

impl FixedTicker {
    pub fn new(step_ms: f32, max_steps: u32) -> Self {
        Self {
            step_ms: if step_ms > 0.0 { step_ms } else { 16.0 },
            max_steps: max_steps.max(1),
            accumulator_ms: 0.0,
        }
    }

    pub fn step_ms(&self) -> f32 {
        self.step_ms
    }

    /// Time banked toward the next step
    pub fn pending_ms(&self) -> f32 {
        self.accumulator_ms
    }

    /// Feed `elapsed_ms` of host time; returns the number of steps due
    pub fn advance(&mut self, elapsed_ms: f32) -> u32 {
        if !elapsed_ms.is_finite() || elapsed_ms <= 0.0 {
            return 0;
        }
        self.accumulator_ms += elapsed_ms;

        let due = (self.accumulator_ms / self.step_ms).floor();
        if due >= self.max_steps as f32 {
            // Too far behind: run the cap and forget the rest of the backlog.
            self.accumulator_ms %= self.step_ms;
            return self.max_steps;
        }

        let due = due as u32;
        self.accumulator_ms -= due as f32 * self.step_ms;
        due
    }

    pub fn reset(&mut self) {
        self.accumulator_ms = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn leftover_time_carries_over() {
        let mut t = FixedTicker::new(16.0, 5);
        assert_eq!(t.advance(40.0), 2);
        assert_abs_diff_eq!(t.pending_ms(), 8.0, epsilon = 1e-4);
        assert_eq!(t.advance(8.0), 1);
        assert_abs_diff_eq!(t.pending_ms(), 0.0, epsilon = 1e-4);
    }

    #[test]
    fn short_frames_accumulate() {
        let mut t = FixedTicker::new(16.0, 5);
        assert_eq!(t.advance(10.0), 0);
        assert_eq!(t.advance(10.0), 1);
    }

    #[test]
    fn backlog_is_capped() {
        let mut t = FixedTicker::new(16.0, 3);
        assert_eq!(t.advance(1000.0), 3);
        assert!(t.pending_ms() < 16.0);
    }

    #[test]
    fn invalid_elapsed_time_is_ignored() {
        let mut t = FixedTicker::new(16.0, 3);
        assert_eq!(t.advance(-5.0), 0);
        assert_eq!(t.advance(f32::NAN), 0);
        assert_eq!(t.pending_ms(), 0.0);
    }
}
