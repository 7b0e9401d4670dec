//! Lightweight per-system frame timing.
//!
//! Every scheduled system is wrapped with [`profile`], which records its
//! duration into a short rolling window. The game loop uses the recorded
//! windows to name the systems responsible when a frame misses its budget.

use std::time::Duration;

use bevy_ecs::resource::Resource;
use bevy_ecs::system::{IntoSystem, System};
use circular_buffer::CircularBuffer;
use parking_lot::Mutex;
use smallvec::SmallVec;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount, EnumIter, IntoStaticStr};

const MAX_SYSTEMS: usize = SystemId::COUNT;
/// How many recent durations each buffer keeps.
const TIMING_WINDOW_SIZE: usize = 30;

#[derive(EnumCount, EnumIter, IntoStaticStr, Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum SystemId {
    Total,
    Input,
    PlayerMotion,
    BallAi,
    Countdown,
    Animation,
    Render,
}

impl std::fmt::Display for SystemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Into::<&'static str>::into(self).to_ascii_lowercase())
    }
}

/// A rolling window of recent durations for one system.
#[derive(Debug, Default)]
pub struct TimingBuffer {
    buffer: CircularBuffer<TIMING_WINDOW_SIZE, Duration>,
}

impl TimingBuffer {
    pub fn push(&mut self, duration: Duration) {
        self.buffer.push_back(duration);
    }

    pub fn most_recent(&self) -> Duration {
        self.buffer.back().copied().unwrap_or(Duration::ZERO)
    }

    pub fn average(&self) -> Duration {
        if self.buffer.is_empty() {
            return Duration::ZERO;
        }
        self.buffer.iter().sum::<Duration>() / self.buffer.len() as u32
    }
}

#[derive(Resource, Debug)]
pub struct SystemTimings {
    timings: micromap::Map<SystemId, Mutex<TimingBuffer>, MAX_SYSTEMS>,
}

impl Default for SystemTimings {
    fn default() -> Self {
        let mut timings = micromap::Map::new();

        // Pre-populate every id so recording never allocates.
        for id in SystemId::iter() {
            timings.insert(id, Mutex::new(TimingBuffer::default()));
        }

        Self { timings }
    }
}

impl SystemTimings {
    pub fn add_timing(&self, id: SystemId, duration: Duration) {
        let buffer = self.timings.get(&id).expect("every SystemId is pre-populated");
        buffer.lock().push(duration);
    }

    pub fn average(&self, id: SystemId) -> Duration {
        let buffer = self.timings.get(&id).expect("every SystemId is pre-populated");
        buffer.lock().average()
    }

    /// The three slowest systems on the latest frame, slowest first.
    pub fn slowest(&self) -> SmallVec<[(SystemId, Duration); 3]> {
        let mut recent: SmallVec<[(SystemId, Duration); MAX_SYSTEMS]> = SystemId::iter()
            .filter(|id| *id != SystemId::Total)
            .map(|id| {
                let buffer = self.timings.get(&id).expect("every SystemId is pre-populated");
                (id, buffer.lock().most_recent())
            })
            .collect();

        recent.sort_by(|a, b| b.1.cmp(&a.1));
        recent.into_iter().take(3).collect()
    }
}

/// Wraps a system so its run time lands in [`SystemTimings`].
pub fn profile<S, M>(id: SystemId, system: S) -> impl FnMut(&mut bevy_ecs::world::World)
where
    S: IntoSystem<(), (), M> + 'static,
{
    let mut system: S::System = IntoSystem::into_system(system);
    let mut is_initialized = false;
    move |world: &mut bevy_ecs::world::World| {
        if !is_initialized {
            system.initialize(world);
            is_initialized = true;
        }

        let start = std::time::Instant::now();
        system.run((), world);
        let duration = start.elapsed();

        if let Some(timings) = world.get_resource::<SystemTimings>() {
            timings.add_timing(id, duration);
        }
    }
}
