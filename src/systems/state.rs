use bevy_ecs::{
    event::EventReader,
    resource::Resource,
    system::{Res, ResMut},
    world::World,
};
use glam::Vec2;
use smallvec::SmallVec;
use strum_macros::Display;
use tracing::{debug, info};

use crate::constants::ui;
use crate::events::{GameCommand, GameEvent};
use crate::geometry::Rect;
use crate::systems::components::{DebugState, GlobalState};

/// A resource tracking the coarse state of a game session.
///
/// While the player pauses, the phase stays `Playing` and [`PauseState`]
/// flips instead, so resuming lands exactly where the session left off. The
/// `Paused` value is what [`GamePhase::effective`] reports to the UI in that
/// situation.
#[derive(Resource, Debug, PartialEq, Eq, Clone, Copy)]
pub enum GamePhase {
    /// Waiting on the start button.
    Menu,
    /// The simulation is live.
    Playing,
    /// Shown in place of `Playing` while the pause flag is set.
    Paused,
    /// The countdown expired before the ball caught the player.
    Won,
    /// The ball caught the player.
    Lost,
}

impl Default for GamePhase {
    fn default() -> Self {
        Self::Menu
    }
}

impl GamePhase {
    /// Whether a session has ended (restart is the only way forward).
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }

    /// Collapses the phase and the pause flag into the single value the UI
    /// presents.
    pub fn effective(self, paused: bool) -> GamePhase {
        if paused && self == GamePhase::Playing {
            GamePhase::Paused
        } else {
            self
        }
    }
}

/// Whether gameplay is suspended. Layered on top of `GamePhase::Playing`.
#[derive(Resource, Debug, PartialEq, Eq, Clone, Copy)]
pub enum PauseState {
    Inactive,
    Active,
}

impl Default for PauseState {
    fn default() -> Self {
        Self::Inactive
    }
}

impl PauseState {
    pub fn active(&self) -> bool {
        matches!(self, PauseState::Active)
    }

    pub fn toggle(&mut self) {
        *self = match self {
            PauseState::Inactive => PauseState::Active,
            PauseState::Active => PauseState::Inactive,
        };
    }
}

/// The clickable regions, by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ButtonKind {
    Start,
    Restart,
    Exit,
}

/// Named clickable regions, rebuilt on every session init.
///
/// Start and Restart deliberately share a region; which one a click means is
/// decided by the phase it arrives in.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ButtonRegions {
    regions: [(ButtonKind, Rect); 3],
}

impl Default for ButtonRegions {
    fn default() -> Self {
        Self {
            regions: [
                (ButtonKind::Start, ui::START_BUTTON),
                (ButtonKind::Restart, ui::RESTART_BUTTON),
                (ButtonKind::Exit, ui::EXIT_BUTTON),
            ],
        }
    }
}

impl ButtonRegions {
    pub fn get(&self, kind: ButtonKind) -> Rect {
        self.regions
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, rect)| *rect)
            .expect("every ButtonKind has a region")
    }

    /// All buttons whose region contains `point`.
    pub fn hits(&self, point: Vec2) -> SmallVec<[ButtonKind; 3]> {
        self.regions
            .iter()
            .filter(|(_, rect)| rect.contains(point))
            .map(|(kind, _)| *kind)
            .collect()
    }

    /// The buttons drawn (and honored) in the given phase.
    pub fn visible(&self, phase: GamePhase) -> &'static [ButtonKind] {
        match phase {
            GamePhase::Menu => &[ButtonKind::Start, ButtonKind::Exit],
            GamePhase::Won | GamePhase::Lost => &[ButtonKind::Restart, ButtonKind::Exit],
            GamePhase::Playing | GamePhase::Paused => &[],
        }
    }
}

/// Set by the restart button; consumed by [`session_reset_system`].
#[derive(Resource, Default)]
pub struct PendingReset(pub bool);

/// Applies non-movement key commands to global state.
pub fn control_system(
    mut events: EventReader<GameEvent>,
    mut state: ResMut<GlobalState>,
    mut debug_state: ResMut<DebugState>,
) {
    for event in events.read() {
        if let GameEvent::Command(command) = event {
            match command {
                GameCommand::Exit => {
                    info!("Exit requested");
                    state.exit = true;
                }
                GameCommand::ToggleHitboxes => {
                    debug_state.hitboxes = !debug_state.hitboxes;
                    debug!(enabled = debug_state.hitboxes, "Hitbox overlay toggled");
                }
                GameCommand::TogglePause => {}
            }
        }
    }
}

/// Toggles the pause flag on the pause key. Only meaningful mid-session;
/// the phase itself is untouched so the simulation resumes in place.
pub fn handle_pause_command(
    mut events: EventReader<GameEvent>,
    phase: Res<GamePhase>,
    mut pause: ResMut<PauseState>,
) {
    for event in events.read() {
        if matches!(event, GameEvent::Command(GameCommand::TogglePause)) && *phase == GamePhase::Playing {
            pause.toggle();
            info!("{}", if pause.active() { "Paused" } else { "Resumed" });
        }
    }
}

/// Resolves clicks against the button regions.
///
/// Start only acts from the menu and restart only after a finished session;
/// exit acts from any phase. A restart is deferred to the end of the frame
/// so the reset happens after every simulation system has run.
pub fn button_system(
    mut events: EventReader<GameEvent>,
    regions: Res<ButtonRegions>,
    mut phase: ResMut<GamePhase>,
    mut pending: ResMut<PendingReset>,
    mut state: ResMut<GlobalState>,
) {
    for event in events.read() {
        let GameEvent::Click(point) = *event else {
            continue;
        };

        for kind in regions.hits(point) {
            match kind {
                ButtonKind::Start => {
                    if *phase == GamePhase::Menu {
                        info!(button = %kind, "Session started");
                        *phase = GamePhase::Playing;
                    }
                }
                ButtonKind::Restart => {
                    if phase.is_terminal() {
                        info!(button = %kind, "Session restart requested");
                        pending.0 = true;
                    }
                }
                ButtonKind::Exit => {
                    info!(button = %kind, "Exit requested");
                    state.exit = true;
                }
            }
        }
    }
}

/// Rebuilds the session when a restart is pending.
///
/// Unlike the initial launch, a restart skips the menu: the fresh session is
/// immediately live.
pub fn session_reset_system(world: &mut World) {
    if !world.resource::<PendingReset>().0 {
        return;
    }
    world.resource_mut::<PendingReset>().0 = false;

    crate::game::init_game(world);
    *world.resource_mut::<GamePhase>() = GamePhase::Playing;
    info!("Session restarted");
}
