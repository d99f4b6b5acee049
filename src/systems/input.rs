use crate::events::GameInput;
use crate::resources::{
    GameConfig, PointerState, SessionStats, SpawnTimer, TargetAssets, TargetSpawner,
};
use crate::systems::targets::spawn_target;
use bevy::input::ButtonState;
use bevy::prelude::*;
use bevy::window::WindowEvent;

// Translate raw window events into game input, keeping their order
pub fn gather_input_system(
    mut window_events: EventReader<WindowEvent>,
    mut inputs: EventWriter<GameInput>,
) {
    for event in window_events.read() {
        if let Some(input) = translate_window_event(event) {
            inputs.send(input);
        }
    }
}

pub fn translate_window_event(event: &WindowEvent) -> Option<GameInput> {
    match event {
        WindowEvent::WindowCloseRequested(_) => Some(GameInput::Quit),
        WindowEvent::CursorMoved(moved) => Some(GameInput::PointerMoved(moved.position)),
        WindowEvent::MouseButtonInput(button) if button.state == ButtonState::Pressed => {
            Some(GameInput::PointerDown)
        }
        WindowEvent::KeyboardInput(key) if key.state == ButtonState::Pressed && !key.repeat => {
            Some(GameInput::KeyDown)
        }
        _ => None,
    }
}

pub fn spawn_timer_system(
    time: Res<Time>,
    mut timer: ResMut<SpawnTimer>,
    mut inputs: EventWriter<GameInput>,
) {
    timer.0.tick(time.delta());

    for _ in 0..timer.0.times_finished_this_tick() {
        inputs.send(GameInput::SpawnTick);
    }
}

// Drains everything queued since the last step. Only the last click of the
// step is kept for hit testing, but every click counts as an attempt.
pub fn apply_input_system(
    mut commands: Commands,
    mut inputs: EventReader<GameInput>,
    mut pointer: ResMut<PointerState>,
    mut stats: ResMut<SessionStats>,
    mut spawner: ResMut<TargetSpawner>,
    assets: Res<TargetAssets>,
    config: Res<GameConfig>,
    mut exit: EventWriter<AppExit>,
) {
    pointer.click = None;

    for input in inputs.read() {
        match *input {
            GameInput::Quit => {
                info!("Quit requested, exiting");
                exit.send(AppExit::Success);
                return;
            }
            GameInput::SpawnTick => {
                let center = spawner.next_center(&config);
                let serial = spawner.spawned;
                spawn_target(&mut commands, &assets, &config, center, serial);
                debug!("Spawned target #{} at ({:.0}, {:.0})", serial, center.x, center.y);
            }
            GameInput::PointerMoved(position) => {
                pointer.position = position;
            }
            GameInput::PointerDown => {
                stats.clicks += 1;
                pointer.click = Some(pointer.position);
            }
            GameInput::KeyDown => {}
        }
    }
}
