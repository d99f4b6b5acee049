use crate::components::{StatLine, StatusBar, SummaryScreen, Target};
use crate::resources::{GameConfig, SessionStats};
use bevy::prelude::*;

const STATUS_COLUMNS: [f32; 4] = [5.0, 180.0, 420.0, 610.0];
const STATUS_TOP: f32 = 5.0;
const SUMMARY_ROWS: [f32; 4] = [100.0, 200.0, 300.0, 400.0];

pub fn setup_status_bar(mut commands: Commands, config: Res<GameConfig>) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                width: Val::Percent(100.0),
                height: Val::Px(config.status_bar_height),
                ..default()
            },
            BackgroundColor(config.status_bar_color),
            StatusBar,
        ))
        .with_children(|bar| {
            for (line, left) in StatLine::STATUS_BAR.iter().zip(STATUS_COLUMNS) {
                bar.spawn((
                    Text::new(""),
                    TextFont {
                        font_size: config.font_size,
                        ..default()
                    },
                    TextColor(config.text_color),
                    Node {
                        position_type: PositionType::Absolute,
                        left: Val::Px(left),
                        top: Val::Px(STATUS_TOP),
                        ..default()
                    },
                    *line,
                ));
            }
        });
}

pub fn update_status_bar_system(
    config: Res<GameConfig>,
    stats: Res<SessionStats>,
    mut labels: Query<(&StatLine, &mut Text)>,
) {
    for (line, mut text) in labels.iter_mut() {
        let rendered = line.text(&stats, &config);
        if text.0 != rendered {
            text.0 = rendered;
        }
    }
}

// Clear the playfield and show the final numbers centered on the background
pub fn show_summary_system(
    mut commands: Commands,
    config: Res<GameConfig>,
    stats: Res<SessionStats>,
    targets: Query<Entity, With<Target>>,
    status_bar: Query<Entity, With<StatusBar>>,
) {
    for entity in targets.iter().chain(status_bar.iter()) {
        commands.entity(entity).despawn_recursive();
    }

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                ..default()
            },
            SummaryScreen,
        ))
        .with_children(|screen| {
            for (line, top) in StatLine::SUMMARY.iter().zip(SUMMARY_ROWS) {
                screen
                    .spawn(Node {
                        position_type: PositionType::Absolute,
                        top: Val::Px(top),
                        width: Val::Percent(100.0),
                        justify_content: JustifyContent::Center,
                        ..default()
                    })
                    .with_children(|row| {
                        row.spawn((
                            Text::new(line.text(&stats, &config)),
                            TextFont {
                                font_size: config.font_size,
                                ..default()
                            },
                            TextColor(config.text_color),
                        ));
                    });
            }
        });

    info!(
        "Final score: {} hits, {:.1} clicks/s, {:.1}% accuracy",
        stats.hits,
        stats.speed(),
        stats.accuracy()
    );
}
