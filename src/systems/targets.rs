use crate::components::{Target, TargetRing, RING_SCALES};
use crate::resources::{GameConfig, PointerState, SessionStats, TargetAssets};
use bevy::prelude::*;

// Later targets are drawn above earlier ones. The layer wraps so z stays
// well inside the camera's range.
const LAYER_COUNT: u64 = 512;
const LAYER_STEP: f32 = 0.01;
const RING_STEP: f32 = 0.001;

pub fn spawn_target(
    commands: &mut Commands,
    assets: &TargetAssets,
    config: &GameConfig,
    center: Vec2,
    serial: u64,
) -> Entity {
    // Starts at radius 0, so it is invisible until the first advance
    let target = Target::new(center);
    let world = config.screen_to_world(center);
    let z = 1.0 + (serial % LAYER_COUNT) as f32 * LAYER_STEP;

    commands
        .spawn((
            Transform {
                translation: world.extend(z),
                scale: Vec3::new(target.radius, target.radius, 1.0),
                ..default()
            },
            Visibility::default(),
            target,
        ))
        .with_children(|parent| {
            // Rings stack outermost first, each slightly above the last
            for (index, scale) in RING_SCALES.iter().enumerate() {
                let material = if index % 2 == 0 {
                    assets.ring.clone()
                } else {
                    assets.ring_alt.clone()
                };

                parent.spawn((
                    Mesh2d(assets.circle.clone()),
                    MeshMaterial2d(material),
                    Transform {
                        translation: Vec3::new(0.0, 0.0, (index + 1) as f32 * RING_STEP),
                        scale: Vec3::new(*scale, *scale, 1.0),
                        ..default()
                    },
                    TargetRing,
                ));
            }
        })
        .id()
}

// Grow/shrink every live target, then settle misses before hits so a target
// expiring this step is never also counted as hit.
pub fn advance_targets_system(
    mut commands: Commands,
    config: Res<GameConfig>,
    pointer: Res<PointerState>,
    mut stats: ResMut<SessionStats>,
    mut targets: Query<(Entity, &mut Target)>,
) {
    let mut expired = Vec::new();
    let mut hit = Vec::new();

    for (entity, mut target) in targets.iter_mut() {
        target.advance(config.max_radius, config.growth_rate);

        if target.is_expired() {
            expired.push(entity);
            continue;
        }

        if let Some(click) = pointer.click {
            if target.contains_point(click) {
                hit.push(entity);
            }
        }
    }

    // Apply removals only after the scan is done
    for &entity in &expired {
        stats.misses += 1;
        debug!("Target {:?} expired, misses: {}", entity, stats.misses);
    }
    for &entity in &hit {
        stats.hits += 1;
        debug!("Target {:?} hit, hits: {}", entity, stats.hits);
    }

    for entity in expired.into_iter().chain(hit) {
        commands.entity(entity).despawn_recursive();
    }
}

// Targets store their center in screen space; only the parent transform
// follows the radius, the rings keep their relative scale.
pub fn sync_target_transforms_system(
    config: Res<GameConfig>,
    mut targets: Query<(&Target, &mut Transform), Changed<Target>>,
) {
    for (target, mut transform) in targets.iter_mut() {
        let world = config.screen_to_world(target.center);
        transform.translation.x = world.x;
        transform.translation.y = world.y;
        transform.scale = Vec3::new(target.radius, target.radius, 1.0);
    }
}
