#![allow(dead_code)]

use bevy_ecs::entity::Entity;
use bevy_ecs::event::EventRegistry;
use bevy_ecs::query::With;
use bevy_ecs::schedule::Schedule;
use bevy_ecs::world::World;
use glam::Vec2;

use dodge::events::GameEvent;
use dodge::game::{init_game, sim_schedule};
use dodge::systems::{
    BallMotion, DebugState, DeltaTime, GlobalState, PendingReset, PlayerControlled, Position, SystemTimings,
};

/// A frame delta matching the ball's step interval: every frame advances the
/// ball exactly once and the player sixteen times.
pub const FRAME: f32 = 0.016;

/// A headless world with the simulation schedule; no SDL resources.
pub fn create_test_world() -> (World, Schedule) {
    let mut world = World::default();
    EventRegistry::register_event::<GameEvent>(&mut world);

    world.insert_resource(GlobalState::default());
    world.insert_resource(DeltaTime { seconds: FRAME });
    world.insert_resource(PendingReset::default());
    world.insert_resource(DebugState::default());
    world.insert_resource(SystemTimings::default());

    init_game(&mut world);

    (world, sim_schedule())
}

pub fn run_frame(world: &mut World, schedule: &mut Schedule, dt: f32) {
    world.insert_resource(DeltaTime { seconds: dt });
    schedule.run(world);
}

pub fn send_game_event(world: &mut World, event: GameEvent) {
    world.send_event(event);
}

pub fn click(world: &mut World, point: Vec2) {
    send_game_event(world, GameEvent::Click(point));
}

pub fn player_position(world: &mut World) -> Vec2 {
    let mut query = world.query_filtered::<&Position, With<PlayerControlled>>();
    query.single(world).expect("player should exist").0
}

pub fn set_player_position(world: &mut World, position: Vec2) {
    let mut query = world.query_filtered::<&mut Position, With<PlayerControlled>>();
    query.single_mut(world).expect("player should exist").0 = position;
}

pub fn ball_state(world: &mut World) -> (Vec2, Vec2, f32) {
    let mut query = world.query::<(&Position, &BallMotion)>();
    let (position, motion) = query.single(world).expect("ball should exist");
    (position.0, motion.direction, motion.speed)
}

pub fn set_ball_state(world: &mut World, position: Vec2, direction: Vec2, speed: f32) {
    let mut query = world.query::<(&mut Position, &mut BallMotion)>();
    let (mut pos, mut motion) = query.single_mut(world).expect("ball should exist");
    pos.0 = position;
    motion.direction = direction;
    motion.speed = speed;
}

pub fn ball_entity(world: &mut World) -> Entity {
    let mut query = world.query_filtered::<Entity, With<BallMotion>>();
    query.single(world).expect("ball should exist")
}
