use bevy_ecs::system::RunSystemOnce;
use glam::Vec2;
use speculoos::prelude::*;

use dodge::systems::{player_motion_system, DeltaTime, HeldDirections};

mod common;

/// Runs one motion frame directly against the player system.
fn run_motion(world: &mut bevy_ecs::world::World, held: HeldDirections, dt: f32) {
    world.insert_resource(held);
    world.insert_resource(DeltaTime { seconds: dt });
    world
        .run_system_once(player_motion_system)
        .expect("System should run successfully");
}

#[test]
fn test_no_keys_no_motion() {
    let (mut world, _) = common::create_test_world();
    run_motion(&mut world, HeldDirections::empty(), common::FRAME);
    assert_that(&common::player_position(&mut world)).is_equal_to(Vec2::new(400.0, 300.0));
}

#[test]
fn test_one_frame_moves_sixteen_steps() {
    let (mut world, _) = common::create_test_world();

    // A 16ms frame pays out 16 millisecond steps of 4 units each.
    run_motion(&mut world, HeldDirections::RIGHT, common::FRAME);
    assert_that(&common::player_position(&mut world)).is_equal_to(Vec2::new(464.0, 300.0));

    run_motion(&mut world, HeldDirections::UP, common::FRAME);
    assert_that(&common::player_position(&mut world)).is_equal_to(Vec2::new(464.0, 236.0));
}

#[test]
fn test_split_frames_cover_same_distance() {
    let (mut world, _) = common::create_test_world();
    run_motion(&mut world, HeldDirections::DOWN, 0.008);
    run_motion(&mut world, HeldDirections::DOWN, 0.008);
    assert_that(&common::player_position(&mut world)).is_equal_to(Vec2::new(400.0, 364.0));
}

#[test]
fn test_diagonal_runs_both_axes_at_full_speed() {
    let (mut world, _) = common::create_test_world();
    run_motion(&mut world, HeldDirections::RIGHT | HeldDirections::DOWN, common::FRAME);
    assert_that(&common::player_position(&mut world)).is_equal_to(Vec2::new(464.0, 364.0));
}

#[test]
fn test_opposing_keys_cancel() {
    let (mut world, _) = common::create_test_world();
    run_motion(&mut world, HeldDirections::LEFT | HeldDirections::RIGHT, common::FRAME);
    assert_that(&common::player_position(&mut world)).is_equal_to(Vec2::new(400.0, 300.0));
}

#[test]
fn test_clamped_to_arena_margins() {
    let cases = [
        (HeldDirections::LEFT, Vec2::new(50.0, 300.0)),
        (HeldDirections::RIGHT, Vec2::new(750.0, 300.0)),
        (HeldDirections::UP, Vec2::new(400.0, 50.0)),
        (HeldDirections::DOWN, Vec2::new(400.0, 550.0)),
    ];

    for (held, expected) in cases {
        let (mut world, _) = common::create_test_world();
        for _ in 0..20 {
            run_motion(&mut world, held, common::FRAME);
        }
        assert_that(&common::player_position(&mut world)).is_equal_to(expected);
    }
}

#[test]
fn test_position_stays_in_bounds_every_frame() {
    let (mut world, _) = common::create_test_world();
    let held = HeldDirections::LEFT | HeldDirections::UP;

    for _ in 0..30 {
        run_motion(&mut world, held, common::FRAME);
        let position = common::player_position(&mut world);
        assert_that(&(position.x >= 50.0 && position.x <= 750.0)).is_true();
        assert_that(&(position.y >= 50.0 && position.y <= 550.0)).is_true();
    }
}
