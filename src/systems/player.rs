use bevy_ecs::{
    query::With,
    system::{Query, Res, ResMut},
};
use glam::Vec2;

use crate::constants::{mechanics, ARENA_SIZE};
use crate::systems::components::{DeltaTime, PlayerControlled, PlayerStepClock, Position};
use crate::systems::input::HeldDirections;

/// Moves the player by the held directions, in fixed millisecond steps.
///
/// Each step displaces by a constant amount per held axis (no diagonal
/// normalization) and clamps each axis so the hitbox stays inside the arena.
/// Sub-stepping keeps the effective speed independent of the frame rate and
/// applies the clamp at the same granularity as each displacement.
pub fn player_motion_system(
    dt: Res<DeltaTime>,
    held: Res<HeldDirections>,
    mut clock: ResMut<PlayerStepClock>,
    mut players: Query<&mut Position, With<PlayerControlled>>,
) {
    let steps = clock.0.accumulate(dt.seconds);
    if steps == 0 {
        return;
    }

    let delta = held.as_delta() * mechanics::PLAYER_SPEED;
    if delta == Vec2::ZERO {
        return;
    }

    let low = Vec2::splat(mechanics::PLAYER_MARGIN);
    let high = ARENA_SIZE - Vec2::splat(mechanics::PLAYER_MARGIN);

    for mut position in players.iter_mut() {
        for _ in 0..steps {
            position.0 = (position.0 + delta).clamp(low, high);
        }
    }
}
