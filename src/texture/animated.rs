/// Cyclic frame index for sprites with one delay per frame.
///
/// The stepper owns no texture data; it only tracks which frame is current.
/// Time is credited with [`FrameStepper::tick`]; once the accumulated time
/// reaches the current frame's delay, the accumulator is cleared and the
/// index advances, wrapping at the end. Single-frame steppers never advance.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameStepper {
    delays: Vec<f32>,
    current_frame: usize,
    elapsed: f32,
}

impl FrameStepper {
    /// A stepper over `delays.len()` frames, each shown for its own delay
    /// (in seconds).
    pub fn new(delays: Vec<f32>) -> Self {
        Self {
            delays,
            current_frame: 0,
            elapsed: 0.0,
        }
    }

    /// A stepper for a static, single-frame sprite.
    pub fn single() -> Self {
        Self::new(vec![0.0])
    }

    pub fn frame_count(&self) -> usize {
        self.delays.len()
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    /// Rewinds to the first frame with no accumulated time.
    pub fn reset(&mut self) {
        self.current_frame = 0;
        self.elapsed = 0.0;
    }

    /// Credits `dt` seconds and advances at most one frame.
    ///
    /// The accumulator resets to zero on advance; any overshoot past the
    /// frame delay is dropped rather than carried into the next frame.
    pub fn tick(&mut self, dt: f32) {
        if self.delays.len() < 2 {
            return;
        }

        self.elapsed += dt;
        if self.elapsed >= self.delays[self.current_frame] {
            self.elapsed = 0.0;
            self.current_frame = (self.current_frame + 1) % self.delays.len();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_frame_never_advances() {
        let mut stepper = FrameStepper::single();
        for _ in 0..100 {
            stepper.tick(1.0);
        }
        assert_eq!(stepper.current_frame(), 0);
    }

    #[test]
    fn test_advance_and_wrap() {
        // Four frames at 100ms each, ticked at 16ms: the delay is crossed on
        // the 7th tick (112ms accumulated), so each frame lasts 7 ticks and
        // the full cycle back to frame 0 takes 28.
        let mut stepper = FrameStepper::new(vec![0.1; 4]);

        for _ in 0..6 {
            stepper.tick(0.016);
        }
        assert_eq!(stepper.current_frame(), 0);
        stepper.tick(0.016);
        assert_eq!(stepper.current_frame(), 1);

        for _ in 7..28 {
            stepper.tick(0.016);
        }
        assert_eq!(stepper.current_frame(), 0);
    }

    #[test]
    fn test_overshoot_not_carried() {
        let mut stepper = FrameStepper::new(vec![0.1, 0.1]);
        // A huge tick still advances only one frame and leaves no credit.
        stepper.tick(10.0);
        assert_eq!(stepper.current_frame(), 1);
        stepper.tick(0.05);
        assert_eq!(stepper.current_frame(), 1);
    }

    #[test]
    fn test_per_frame_delays() {
        let mut stepper = FrameStepper::new(vec![0.25, 0.5, 0.25]);
        stepper.tick(0.25);
        assert_eq!(stepper.current_frame(), 1);
        stepper.tick(0.25);
        assert_eq!(stepper.current_frame(), 1);
        stepper.tick(0.25);
        assert_eq!(stepper.current_frame(), 2);
    }

    #[test]
    fn test_reset() {
        let mut stepper = FrameStepper::new(vec![0.1; 3]);
        for _ in 0..10 {
            stepper.tick(0.016);
        }
        stepper.reset();
        assert_eq!(stepper.current_frame(), 0);
        for _ in 0..6 {
            stepper.tick(0.016);
        }
        assert_eq!(stepper.current_frame(), 0);
    }
}
