//! The ECS systems, components, and resources driving the simulation.

pub mod ball;
pub mod components;
pub mod countdown;
pub mod input;
pub mod player;
pub mod profiling;
pub mod render;
pub mod state;

pub use ball::ball_ai_system;
pub use components::{
    BallBundle, BallMotion, BallStepClock, Countdown, CountdownTimer, DebugState, DeltaTime, GlobalState,
    PlayerBundle, PlayerControlled, PlayerStepClock, Position, StepClock,
};
pub use countdown::countdown_system;
pub use input::{input_system, Bindings, HeldDirections};
pub use player::player_motion_system;
pub use profiling::{profile, SystemId, SystemTimings};
pub use render::{animation_system, render_system};
pub use state::{
    button_system, control_system, handle_pause_command, session_reset_system, ButtonKind, ButtonRegions,
    GamePhase, PauseState, PendingReset,
};
