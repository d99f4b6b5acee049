use bevy::input::InputSystem;
use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
mod components;
mod events;
mod resources;
mod systems;

use events::GameInput;
use resources::*;
use systems::hud::*;
use systems::input::*;
use systems::session::*;
use systems::targets::*;

fn main() -> AppExit {
    let config = GameConfig::default();

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: config.title.clone(),
                        resolution: (config.width, config.height).into(),
                        resizable: false,
                        ..default()
                    }),
                    // Close requests arrive as GameInput::Quit instead
                    close_when_requested: false,
                    ..default()
                })
                .set(LogPlugin {
                    level: Level::INFO,
                    filter: "wgpu=warn,naga=warn,aim_trainer=debug".into(),
                    ..default()
                }),
        )
        .insert_resource(ClearColor(config.background_color))
        .insert_resource(Time::<Fixed>::from_hz(config.frame_rate))
        .insert_resource(SpawnTimer::new(config.spawn_interval))
        .insert_resource(TargetSpawner::from_os_rng())
        .init_resource::<SessionStats>()
        .init_resource::<PointerState>()
        .insert_resource(config)
        .init_state::<GamePhase>()
        .add_event::<GameInput>()
        .add_systems(Startup, (setup_game, setup_status_bar))
        .add_systems(OnEnter(GamePhase::Playing), start_session_system)
        .add_systems(PreUpdate, gather_input_system.after(InputSystem))
        // One simulation step per fixed tick keeps growth at a steady 60 steps/s
        .add_systems(
            FixedUpdate,
            (
                spawn_timer_system,
                apply_input_system,
                advance_targets_system,
                update_elapsed_system,
                check_lives_system,
            )
                .chain()
                .run_if(in_state(GamePhase::Playing)),
        )
        .add_systems(
            Update,
            (sync_target_transforms_system, update_status_bar_system)
                .run_if(in_state(GamePhase::Playing)),
        )
        .add_systems(OnEnter(GamePhase::Ended), show_summary_system)
        .add_systems(Update, await_exit_system.run_if(in_state(GamePhase::Ended)))
        .run()
}

fn setup_game(
    mut commands: Commands,
    config: Res<GameConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    // Spawn camera
    commands.spawn(Camera2d::default());

    // Unit circle, scaled per ring and per target
    commands.insert_resource(TargetAssets {
        circle: meshes.add(Circle::new(1.0)),
        ring: materials.add(config.ring_color),
        ring_alt: materials.add(config.ring_alt_color),
    });

    info!(
        "Window {}x{}, playfield below a {}px status bar",
        config.width, config.height, config.status_bar_height
    );
}
