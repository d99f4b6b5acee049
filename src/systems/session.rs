use crate::events::GameInput;
use crate::resources::{GameConfig, GamePhase, PointerState, SessionStats, SpawnTimer};
use bevy::prelude::*;

pub fn start_session_system(
    time: Res<Time<Real>>,
    config: Res<GameConfig>,
    mut stats: ResMut<SessionStats>,
    mut pointer: ResMut<PointerState>,
    mut timer: ResMut<SpawnTimer>,
) {
    *stats = SessionStats {
        started: time.elapsed(),
        ..default()
    };
    pointer.click = None;
    timer.0.reset();

    info!(
        "Session started: {} lives, a target every {} ms",
        config.life_total,
        config.spawn_interval.as_millis()
    );
}

// Wall-clock time, not simulated time
pub fn update_elapsed_system(time: Res<Time<Real>>, mut stats: ResMut<SessionStats>) {
    stats.elapsed = time.elapsed().saturating_sub(stats.started);
}

pub fn check_lives_system(
    config: Res<GameConfig>,
    stats: Res<SessionStats>,
    mut next_phase: ResMut<NextState<GamePhase>>,
) {
    if stats.misses >= config.life_total {
        info!(
            "Out of lives after {:.1}s: {} hits from {} clicks",
            stats.elapsed_secs(),
            stats.hits,
            stats.clicks
        );
        next_phase.set(GamePhase::Ended);
    }
}

// The summary stays up until the window is closed or any key is pressed
pub fn await_exit_system(mut inputs: EventReader<GameInput>, mut exit: EventWriter<AppExit>) {
    for input in inputs.read() {
        if matches!(input, GameInput::Quit | GameInput::KeyDown) {
            exit.send(AppExit::Success);
            return;
        }
    }
}
