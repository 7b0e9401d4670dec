use std::collections::HashMap;

use bevy_ecs::{
    event::EventWriter,
    resource::Resource,
    system::{NonSendMut, Res, ResMut},
};
use bitflags::bitflags;
use glam::Vec2;
use sdl2::{
    event::Event,
    keyboard::{Keycode, Scancode},
    mouse::MouseButton,
    EventPump,
};

use crate::events::{GameCommand, GameEvent};

bitflags! {
    /// Movement keys currently held down, one bit per axis direction.
    ///
    /// Opposite bits cancel; simultaneous axes are both applied at full
    /// speed, without diagonal normalization.
    #[derive(Resource, Default, Clone, Copy, Debug, PartialEq, Eq)]
    pub struct HeldDirections: u8 {
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
        const UP = 1 << 2;
        const DOWN = 1 << 3;
    }
}

impl HeldDirections {
    /// The held directions as a per-axis unit displacement.
    pub fn as_delta(self) -> Vec2 {
        let mut delta = Vec2::ZERO;
        if self.contains(HeldDirections::LEFT) {
            delta.x -= 1.0;
        }
        if self.contains(HeldDirections::RIGHT) {
            delta.x += 1.0;
        }
        if self.contains(HeldDirections::UP) {
            delta.y -= 1.0;
        }
        if self.contains(HeldDirections::DOWN) {
            delta.y += 1.0;
        }
        delta
    }
}

#[derive(Debug, Clone, Resource)]
pub struct Bindings {
    command_bindings: HashMap<Keycode, GameCommand>,
    movement_bindings: Vec<(Scancode, HeldDirections)>,
}

impl Default for Bindings {
    fn default() -> Self {
        let mut command_bindings = HashMap::new();

        command_bindings.insert(Keycode::P, GameCommand::TogglePause);
        command_bindings.insert(Keycode::Space, GameCommand::ToggleHitboxes);
        command_bindings.insert(Keycode::Escape, GameCommand::Exit);
        command_bindings.insert(Keycode::Q, GameCommand::Exit);

        let movement_bindings = vec![
            (Scancode::A, HeldDirections::LEFT),
            (Scancode::Left, HeldDirections::LEFT),
            (Scancode::D, HeldDirections::RIGHT),
            (Scancode::Right, HeldDirections::RIGHT),
            (Scancode::W, HeldDirections::UP),
            (Scancode::Up, HeldDirections::UP),
            (Scancode::S, HeldDirections::DOWN),
            (Scancode::Down, HeldDirections::DOWN),
        ];

        Self {
            command_bindings,
            movement_bindings,
        }
    }
}

/// Drains the SDL event queue into `GameEvent`s and refreshes the held
/// movement keys.
///
/// Edge-triggered inputs (command keys, clicks, window close) become events;
/// movement is level-triggered and polled from the keyboard state so that
/// releasing one of two keys bound to the same direction behaves correctly.
pub fn input_system(
    bindings: Res<Bindings>,
    mut held: ResMut<HeldDirections>,
    mut writer: EventWriter<GameEvent>,
    mut pump: NonSendMut<EventPump>,
) {
    for event in pump.poll_iter() {
        match event {
            Event::Quit { .. } => {
                writer.write(GameEvent::Command(GameCommand::Exit));
            }
            Event::KeyDown {
                keycode: Some(key),
                repeat: false,
                ..
            } => {
                if let Some(command) = bindings.command_bindings.get(&key).copied() {
                    writer.write(GameEvent::Command(command));
                }
            }
            Event::MouseButtonDown {
                mouse_btn: MouseButton::Left,
                x,
                y,
                ..
            } => {
                writer.write(GameEvent::Click(Vec2::new(x as f32, y as f32)));
            }
            _ => {}
        }
    }

    let keyboard = pump.keyboard_state();
    let mut pressed = HeldDirections::empty();
    for (scancode, direction) in &bindings.movement_bindings {
        if keyboard.is_scancode_pressed(*scancode) {
            pressed |= *direction;
        }
    }
    *held = pressed;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_delta_single_axes() {
        assert_eq!(HeldDirections::LEFT.as_delta(), Vec2::new(-1.0, 0.0));
        assert_eq!(HeldDirections::RIGHT.as_delta(), Vec2::new(1.0, 0.0));
        assert_eq!(HeldDirections::UP.as_delta(), Vec2::new(0.0, -1.0));
        assert_eq!(HeldDirections::DOWN.as_delta(), Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_as_delta_combinations() {
        let diagonal = HeldDirections::RIGHT | HeldDirections::DOWN;
        assert_eq!(diagonal.as_delta(), Vec2::new(1.0, 1.0));

        let opposed = HeldDirections::LEFT | HeldDirections::RIGHT;
        assert_eq!(opposed.as_delta(), Vec2::ZERO);

        assert_eq!(HeldDirections::empty().as_delta(), Vec2::ZERO);
    }

    #[test]
    fn test_default_bindings_cover_all_directions() {
        let bindings = Bindings::default();
        let mut covered = HeldDirections::empty();
        for (_, direction) in &bindings.movement_bindings {
            covered |= *direction;
        }
        assert_eq!(covered, HeldDirections::all());
    }
}
