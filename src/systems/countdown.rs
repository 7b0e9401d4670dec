use bevy_ecs::system::{Res, ResMut};
use tracing::{debug, info};

use crate::systems::components::{Countdown, CountdownTimer, DeltaTime};
use crate::systems::state::{GamePhase, PauseState};

/// Ticks the session clock down once per second.
///
/// The decrement only happens while live and unpaused, but the expiry check
/// is not gated: reaching zero wins the session and disarms the timer for
/// the rest of it. `init_game` installs a fresh, armed timer.
pub fn countdown_system(
    dt: Res<DeltaTime>,
    pause: Res<PauseState>,
    mut timer: ResMut<CountdownTimer>,
    mut countdown: ResMut<Countdown>,
    mut phase: ResMut<GamePhase>,
) {
    if timer.finished {
        return;
    }

    let steps = timer.clock.accumulate(dt.seconds);
    for _ in 0..steps {
        if *phase == GamePhase::Playing && !pause.active() {
            countdown.0 = countdown.0.saturating_sub(1);
            debug!(seconds = countdown.0, "Countdown");
        }

        if countdown.0 == 0 {
            info!("Countdown expired, session won");
            *phase = GamePhase::Won;
            timer.finished = true;
            break;
        }
    }
}
