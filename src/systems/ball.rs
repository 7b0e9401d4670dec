use bevy_ecs::{
    query::{With, Without},
    system::{Query, Res, ResMut},
};
use tracing::info;

use crate::constants::{mechanics, ARENA_SIZE};
use crate::geometry::Rect;
use crate::systems::components::{BallMotion, BallStepClock, Countdown, DeltaTime, PlayerControlled, Position};
use crate::systems::state::GamePhase;

/// Advances the ball: speed ramp, homing steer, wall bounce, player contact.
///
/// Per step:
/// 1. speed ramps by a fixed increment, capped only during the last seconds
///    of the countdown;
/// 2. the heading is pulled toward the player by a small tracking fraction
///    and renormalized — the bias is folded into the heading itself, so the
///    pursuit tightens over time;
/// 3. the ball moves, then any crossed wall negates that heading axis. The
///    position is not clamped, so it may overshoot the wall by one step's
///    displacement before the bounce takes effect;
/// 4. contact with the player's hitbox loses the session.
pub fn ball_ai_system(
    dt: Res<DeltaTime>,
    mut clock: ResMut<BallStepClock>,
    countdown: Res<Countdown>,
    mut phase: ResMut<GamePhase>,
    players: Query<&Position, With<PlayerControlled>>,
    mut balls: Query<(&mut BallMotion, &mut Position), Without<PlayerControlled>>,
) {
    let steps = clock.0.accumulate(dt.seconds);
    if steps == 0 {
        return;
    }

    let Ok(player) = players.single() else {
        return;
    };
    let hitbox = Rect::centered(player.0, mechanics::PLAYER_HALF_EXTENTS);

    for (mut motion, mut position) in balls.iter_mut() {
        for _ in 0..steps {
            if *phase != GamePhase::Playing {
                break;
            }

            motion.speed += mechanics::BALL_SPEED_INCREMENT;
            if countdown.0 <= mechanics::BALL_CAP_COUNTDOWN {
                motion.speed = motion.speed.min(mechanics::BALL_SPEED_CAP);
            }

            // A zero separation (ball exactly on the player) contributes no
            // steering instead of a NaN heading.
            let adjustment = (player.0 - position.0).normalize_or_zero() * mechanics::BALL_TRACKING_FACTOR;
            motion.direction = (motion.direction + adjustment).normalize_or_zero();

            let step = motion.direction * motion.speed;
            position.0 += step;

            if position.0.x <= 0.0 || position.0.x >= ARENA_SIZE.x {
                motion.direction.x = -motion.direction.x;
            }
            if position.0.y <= 0.0 || position.0.y >= ARENA_SIZE.y {
                motion.direction.y = -motion.direction.y;
            }

            if hitbox.contains(position.0) {
                info!(speed = motion.speed, "Ball caught the player");
                *phase = GamePhase::Lost;
            }
        }
    }
}
