//! This module contains all the constants used in the game.

use std::time::Duration;

use glam::Vec2;

/// Target duration of one driving-loop iteration (60 Hz).
pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// The size of the arena, in pixels. The window uses the same logical size.
pub const ARENA_SIZE: Vec2 = Vec2::new(800.0, 600.0);

/// Gameplay tuning values.
pub mod mechanics {
    use glam::Vec2;

    /// Displacement applied to the player per motion step, per held axis.
    pub const PLAYER_SPEED: f32 = 4.0;
    /// Interval between player motion steps, in seconds.
    pub const PLAYER_STEP_INTERVAL: f64 = 0.001;
    /// Distance the player's center must keep from every arena edge.
    pub const PLAYER_MARGIN: f32 = 50.0;
    /// Half-extents of the player's hitbox.
    pub const PLAYER_HALF_EXTENTS: Vec2 = Vec2::new(50.0, 50.0);
    /// Where the player starts (and restarts).
    pub const PLAYER_START: Vec2 = Vec2::new(400.0, 300.0);

    /// Interval between ball steps, in seconds.
    pub const BALL_STEP_INTERVAL: f64 = 0.016;
    /// Speed gained by the ball on every step.
    pub const BALL_SPEED_INCREMENT: f32 = 0.053;
    /// Ceiling applied to the ball's speed during the final seconds.
    pub const BALL_SPEED_CAP: f32 = 30.0;
    /// Countdown value at or below which the speed cap applies.
    pub const BALL_CAP_COUNTDOWN: u32 = 10;
    /// Fraction of the ball-to-player unit vector blended into the heading
    /// each step.
    pub const BALL_TRACKING_FACTOR: f32 = 0.10;
    /// Where the ball starts (and restarts).
    pub const BALL_START: Vec2 = Vec2::new(100.0, 300.0);
    /// The ball's initial speed.
    pub const BALL_START_SPEED: f32 = 6.0;
    /// The ball's initial heading, normalized at spawn.
    pub const BALL_START_DIRECTION: Vec2 = Vec2::new(1.0, 1.0);

    /// Seconds on the clock at the start of a session.
    pub const COUNTDOWN_START: u32 = 30;
    /// Interval between countdown steps, in seconds.
    pub const COUNTDOWN_STEP_INTERVAL: f64 = 1.0;
}

/// Layout of the clickable regions and HUD elements.
pub mod ui {
    use glam::Vec2;

    use crate::geometry::Rect;

    pub const START_BUTTON: Rect = Rect::new(Vec2::new(320.0, 80.0), Vec2::new(480.0, 120.0));
    /// The restart button reuses the start button's region; only one of the
    /// two is ever active for a given phase.
    pub const RESTART_BUTTON: Rect = START_BUTTON;
    pub const EXIT_BUTTON: Rect = Rect::new(Vec2::new(320.0, 160.0), Vec2::new(480.0, 200.0));

    /// The countdown bar's region when full.
    pub const COUNTDOWN_BAR: Rect = Rect::new(Vec2::new(200.0, 16.0), Vec2::new(600.0, 28.0));
}

/// Sprite animation pacing.
pub mod animation {
    /// Time credited to sprite steppers per rendered frame, in seconds.
    pub const FRAME_STEP: f32 = 0.016;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loop_time() {
        // 60 FPS = 16.67ms per frame
        let expected_nanos = (1_000_000_000.0 / 60.0) as u64;
        assert_eq!(LOOP_TIME.as_nanos() as u64, expected_nanos);
    }

    #[test]
    fn test_player_margin_fits_hitbox() {
        assert_eq!(mechanics::PLAYER_MARGIN, mechanics::PLAYER_HALF_EXTENTS.x);
        assert_eq!(mechanics::PLAYER_MARGIN, mechanics::PLAYER_HALF_EXTENTS.y);
    }

    #[test]
    fn test_buttons_inside_arena() {
        for rect in [ui::START_BUTTON, ui::RESTART_BUTTON, ui::EXIT_BUTTON] {
            assert!(rect.min.x >= 0.0 && rect.min.y >= 0.0);
            assert!(rect.max.x <= ARENA_SIZE.x && rect.max.y <= ARENA_SIZE.y);
            assert!(rect.min.x < rect.max.x && rect.min.y < rect.max.y);
        }
    }

    #[test]
    fn test_start_and_restart_share_region() {
        assert_eq!(ui::START_BUTTON, ui::RESTART_BUTTON);
        assert!(!ui::START_BUTTON.contains(ui::EXIT_BUTTON.center()));
    }

    #[test]
    fn test_speed_cap_above_start_speed() {
        assert!(mechanics::BALL_SPEED_CAP > mechanics::BALL_START_SPEED);
        assert!(mechanics::BALL_CAP_COUNTDOWN < mechanics::COUNTDOWN_START);
    }
}
