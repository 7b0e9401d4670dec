//! This module contains the main game logic and state.

use std::time::{Duration, Instant};

use bevy_ecs::entity::Entity;
use bevy_ecs::event::EventRegistry;
use bevy_ecs::query::{Or, With};
use bevy_ecs::schedule::{IntoScheduleConfigs, Schedule, SystemSet};
use bevy_ecs::world::World;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::video::{Window, WindowContext};
use sdl2::EventPump;
use tracing::{debug, info, warn};

use crate::constants::{mechanics, LOOP_TIME};
use crate::error::GameResult;
use crate::events::GameEvent;
use crate::systems::{
    animation_system, ball_ai_system, button_system, control_system, countdown_system, handle_pause_command,
    input_system, player_motion_system, profile, render_system, session_reset_system, BallBundle, BallMotion,
    BallStepClock, Bindings, ButtonRegions, Countdown, CountdownTimer, DebugState, DeltaTime, GamePhase,
    GlobalState, HeldDirections, PauseState, PendingReset, PlayerBundle, PlayerControlled, PlayerStepClock,
    Position, SystemId, SystemTimings,
};
use crate::texture::sprites::SpriteBank;

/// System sets ordering one frame of gameplay: command handling first, then
/// the fixed-order simulation, then session bookkeeping.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum GameplaySet {
    /// Polling the platform event queue.
    Input,
    /// Reacting to commands and clicks.
    Control,
    /// The periodic simulation steps (player, then ball).
    Update,
    /// Countdown and deferred session resets.
    Respond,
}

/// System sets for the per-frame presentation pass.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum RenderSet {
    Animation,
    Draw,
}

fn simulation_active(phase: bevy_ecs::system::Res<GamePhase>, pause: bevy_ecs::system::Res<PauseState>) -> bool {
    *phase == GamePhase::Playing && !pause.active()
}

/// Builds the headless part of the schedule: every system that mutates
/// simulation state, in its fixed order, with the pause/phase gate on the
/// update set. The render-side systems are appended by [`Game::new`].
pub fn sim_schedule() -> Schedule {
    let mut schedule = Schedule::default();

    schedule
        .add_systems((
            (control_system, handle_pause_command, button_system)
                .chain()
                .in_set(GameplaySet::Control),
            (
                profile(SystemId::PlayerMotion, player_motion_system),
                profile(SystemId::BallAi, ball_ai_system),
            )
                .chain()
                .in_set(GameplaySet::Update),
            (profile(SystemId::Countdown, countdown_system), session_reset_system)
                .chain()
                .in_set(GameplaySet::Respond),
        ))
        .configure_sets(
            (
                GameplaySet::Input,
                GameplaySet::Control,
                GameplaySet::Update.run_if(simulation_active),
                GameplaySet::Respond,
            )
                .chain(),
        );

    schedule
}

/// Resets every piece of session state: entity positions, ball motion, the
/// countdown and its timer, the phase, the pause flag, and the button
/// regions. Called once at startup and again on every restart; two
/// consecutive calls produce identical state.
pub fn init_game(world: &mut World) {
    let mut stale = world.query_filtered::<Entity, Or<(With<PlayerControlled>, With<BallMotion>)>>();
    let stale: Vec<Entity> = stale.iter(world).collect();
    for entity in stale {
        world.despawn(entity);
    }

    world.spawn(PlayerBundle {
        player: PlayerControlled,
        position: Position(mechanics::PLAYER_START),
    });
    world.spawn(BallBundle {
        motion: BallMotion {
            direction: mechanics::BALL_START_DIRECTION.normalize(),
            speed: mechanics::BALL_START_SPEED,
        },
        position: Position(mechanics::BALL_START),
    });

    world.insert_resource(GamePhase::default());
    world.insert_resource(PauseState::default());
    world.insert_resource(Countdown(mechanics::COUNTDOWN_START));
    world.insert_resource(CountdownTimer::default());
    world.insert_resource(PlayerStepClock::default());
    world.insert_resource(BallStepClock::default());
    world.insert_resource(HeldDirections::default());
    world.insert_resource(ButtonRegions::default());

    debug!("Session state initialized");
}

/// Core game state manager built on the Bevy ECS architecture.
///
/// All game state lives in a `World`; a `Schedule` defines the per-frame
/// system order, which is what makes the interleaving of the periodic
/// updaters deterministic. SDL2 handles (canvas, event pump, textures) are
/// stored as non-send resources.
pub struct Game {
    pub world: World,
    pub schedule: Schedule,
}

impl Game {
    /// Initializes the ECS world, loads textures, and wires up the schedule.
    ///
    /// # Errors
    ///
    /// Returns `GameError` if an embedded asset is missing or a texture
    /// cannot be created.
    pub fn new(
        canvas: Canvas<Window>,
        texture_creator: &TextureCreator<WindowContext>,
        event_pump: EventPump,
    ) -> GameResult<Game> {
        info!("Starting game initialization");

        debug!("Loading sprite textures");
        let sprites = SpriteBank::load(texture_creator)?;

        debug!("Initializing ECS world and system schedule");
        let mut world = World::default();
        EventRegistry::register_event::<GameEvent>(&mut world);

        world.insert_resource(GlobalState::default());
        world.insert_resource(Bindings::default());
        world.insert_resource(DeltaTime::default());
        world.insert_resource(PendingReset::default());
        world.insert_resource(DebugState::default());
        world.insert_resource(SystemTimings::default());

        world.insert_non_send_resource(event_pump);
        world.insert_non_send_resource(canvas);
        world.insert_non_send_resource(sprites);

        init_game(&mut world);

        debug!("Configuring system execution schedule");
        let mut schedule = sim_schedule();
        schedule
            .add_systems((
                profile(SystemId::Input, input_system).in_set(GameplaySet::Input),
                profile(SystemId::Animation, animation_system).in_set(RenderSet::Animation),
                profile(SystemId::Render, render_system).in_set(RenderSet::Draw),
            ))
            .configure_sets((GameplaySet::Respond, RenderSet::Animation, RenderSet::Draw).chain());

        info!("Game initialization completed successfully");
        Ok(Game { world, schedule })
    }

    /// Executes one frame: runs the full system pipeline against the world
    /// and reports whether an exit was requested.
    ///
    /// # Arguments
    ///
    /// * `dt` - Frame delta time in seconds, fed to the per-system step
    ///   clocks.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.world.insert_resource(DeltaTime { seconds: dt });

        let start = Instant::now();
        self.schedule.run(&mut self.world);
        let total = start.elapsed();

        if let Some(timings) = self.world.get_resource::<SystemTimings>() {
            timings.add_timing(SystemId::Total, total);

            // 20% headroom over the nominal frame time before complaining.
            let budget = Duration::from_secs_f32(dt.max(LOOP_TIME.as_secs_f32()) * 1.2);
            if total > budget {
                let slowest = timings
                    .slowest()
                    .iter()
                    .map(|(id, duration)| format!("{} ({:.2?})", id, duration))
                    .collect::<Vec<String>>()
                    .join(", ");
                warn!(
                    total = format!("{:.3?}", total),
                    budget = format!("{:.3?}", budget),
                    systems = slowest,
                    "Frame took longer than expected"
                );
            }
        }

        self.world
            .get_resource::<GlobalState>()
            .expect("GlobalState could not be acquired")
            .exit
    }
}
