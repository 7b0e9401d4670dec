use bevy_ecs::{bundle::Bundle, component::Component, resource::Resource};
use glam::Vec2;

use crate::constants::mechanics;

/// A tag component for the entity controlled by the player.
#[derive(Default, Component)]
pub struct PlayerControlled;

/// An entity's position in arena coordinates.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Position(pub Vec2);

/// The ball's heading and scalar speed.
///
/// `direction` stays unit length: every steering update renormalizes it, and
/// wall bounces only negate components.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct BallMotion {
    pub direction: Vec2,
    pub speed: f32,
}

#[derive(Bundle)]
pub struct PlayerBundle {
    pub player: PlayerControlled,
    pub position: Position,
}

#[derive(Bundle)]
pub struct BallBundle {
    pub motion: BallMotion,
    pub position: Position,
}

#[derive(Resource, Default)]
pub struct GlobalState {
    pub exit: bool,
}

/// Seconds left on the session clock.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown(pub u32);

#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct DeltaTime {
    pub seconds: f32,
}

/// Which diagnostic overlays are drawn.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DebugState {
    pub hitboxes: bool,
}

/// Converts a stream of frame deltas into whole fixed-interval steps.
///
/// Each periodic system runs off the single frame pulse but keeps its own
/// cadence: leftover time is banked, so a system stepping every millisecond
/// takes ~16 steps out of a 60 Hz frame. Banking is done in `f64` so that
/// step counts stay stable across frames.
#[derive(Debug, Clone, PartialEq)]
pub struct StepClock {
    interval: f64,
    time_bank: f64,
}

impl StepClock {
    pub fn new(interval: f64) -> Self {
        Self {
            interval,
            time_bank: 0.0,
        }
    }

    /// Banks `dt` seconds and returns how many whole steps elapsed.
    pub fn accumulate(&mut self, dt: f32) -> u32 {
        self.time_bank += dt as f64;
        let steps = (self.time_bank / self.interval) as u32;
        self.time_bank -= steps as f64 * self.interval;
        steps
    }
}

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct PlayerStepClock(pub StepClock);

impl Default for PlayerStepClock {
    fn default() -> Self {
        Self(StepClock::new(mechanics::PLAYER_STEP_INTERVAL))
    }
}

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct BallStepClock(pub StepClock);

impl Default for BallStepClock {
    fn default() -> Self {
        Self(StepClock::new(mechanics::BALL_STEP_INTERVAL))
    }
}

/// The countdown's pacer. Once the session clock reaches zero the timer
/// disarms itself; `init_game` installs a fresh one.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct CountdownTimer {
    pub clock: StepClock,
    pub finished: bool,
}

impl Default for CountdownTimer {
    fn default() -> Self {
        Self {
            clock: StepClock::new(mechanics::COUNTDOWN_STEP_INTERVAL),
            finished: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_clock_whole_steps() {
        let mut clock = StepClock::new(0.016);
        assert_eq!(clock.accumulate(0.016), 1);
        assert_eq!(clock.accumulate(0.032), 2);
        assert_eq!(clock.accumulate(0.008), 0);
        assert_eq!(clock.accumulate(0.008), 1);
    }

    #[test]
    fn test_step_clock_banks_remainder() {
        let mut clock = StepClock::new(1.0);
        for _ in 0..9 {
            assert_eq!(clock.accumulate(0.1), 0);
        }
        assert_eq!(clock.accumulate(0.11), 1);
    }

    #[test]
    fn test_step_clock_millisecond_substeps() {
        let mut clock = StepClock::new(0.001);
        assert_eq!(clock.accumulate(0.016), 16);
        // Sixty frames of 1/60s come out to a whole second's worth of steps.
        let mut clock = StepClock::new(0.001);
        let total: u32 = (0..60).map(|_| clock.accumulate(1.0 / 60.0)).sum();
        assert_eq!(total, 1000);
    }
}
