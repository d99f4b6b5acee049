// resources.rs
use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    #[default]
    Playing,
    Ended,
}

// Every tunable of the game lives here; built once in main and never mutated.
#[derive(Resource, Clone, Debug)]
pub struct GameConfig {
    pub title: String,
    pub width: f32,  // logical px
    pub height: f32, // logical px
    pub frame_rate: f64, // simulation steps per second
    pub background_color: Color,
    pub ring_color: Color,     // outer and third ring
    pub ring_alt_color: Color, // second and inner ring
    pub status_bar_color: Color,
    pub text_color: Color,
    pub font_size: f32, // px
    pub max_radius: f32, // px
    pub growth_rate: f32, // px per step
    pub spawn_interval: Duration,
    pub spawn_padding: f32, // px kept clear along every edge
    pub status_bar_height: f32, // px, no targets spawn under it
    pub life_total: u32, // misses allowed before the session ends
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: "Jose's Aim Trainer".into(),
            width: 800.0,
            height: 600.0,
            frame_rate: 60.0,
            background_color: Color::srgb_u8(121, 170, 62),
            ring_color: Color::srgb_u8(242, 189, 0),
            ring_alt_color: Color::srgb_u8(255, 255, 255),
            status_bar_color: Color::srgb_u8(31, 30, 29),
            text_color: Color::srgb_u8(255, 255, 255),
            font_size: 22.0,
            max_radius: 32.0,
            growth_rate: 0.2, // per frame
            spawn_interval: Duration::from_millis(400), // one new target every 400 ms
            spawn_padding: 30.0,
            status_bar_height: 50.0,
            life_total: 5,
        }
    }
}

impl GameConfig {
    /// Inclusive (min, max) corners of the area targets may spawn in, in
    /// screen coordinates. The status bar strip is excluded.
    pub fn spawn_bounds(&self) -> (Vec2, Vec2) {
        let min = Vec2::new(
            self.spawn_padding,
            self.spawn_padding + self.status_bar_height,
        );
        let max = Vec2::new(
            self.width - self.spawn_padding,
            self.height - self.spawn_padding,
        );
        (min, max)
    }

    /// Screen space has its origin top-left with y down, the 2D camera is
    /// centered with y up.
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        Vec2::new(screen.x - self.width / 2.0, self.height / 2.0 - screen.y)
    }
}

#[derive(Resource, Debug, Default, Clone)]
pub struct SessionStats {
    pub hits: u32,
    pub clicks: u32,
    pub misses: u32,
    pub started: Duration,
    pub elapsed: Duration,
}

impl SessionStats {
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Hits per second, 0.0 before any time has passed.
    pub fn speed(&self) -> f64 {
        let secs = self.elapsed_secs();
        if secs <= 0.0 {
            return 0.0;
        }
        round_tenth(self.hits as f64 / secs)
    }

    /// Percentage of clicks that hit a target, 0.0 when nothing was clicked.
    pub fn accuracy(&self) -> f64 {
        if self.clicks == 0 {
            return 0.0;
        }
        round_tenth(self.hits as f64 / self.clicks as f64 * 100.0)
    }

    pub fn lives_left(&self, life_total: u32) -> u32 {
        life_total.saturating_sub(self.misses)
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Formats seconds as `MM:SS.d`.
pub fn format_time(secs: f64) -> String {
    let secs = secs.max(0.0);
    let tenths = ((secs * 1000.0) % 1000.0) as u32 / 100;
    let seconds = (secs % 60.0) as u32;
    let minutes = (secs / 60.0) as u32;
    format!("{:02}:{:02}.{}", minutes, seconds, tenths)
}

#[derive(Resource)]
pub struct SpawnTimer(pub Timer);

impl SpawnTimer {
    pub fn new(interval: Duration) -> Self {
        Self(Timer::new(interval, TimerMode::Repeating))
    }
}

// Latest pointer position, plus where this frame's click landed (if any)
#[derive(Resource, Debug, Default)]
pub struct PointerState {
    pub position: Vec2,
    pub click: Option<Vec2>,
}

#[derive(Resource)]
pub struct TargetSpawner {
    rng: StdRng,
    pub spawned: u64,
}

impl TargetSpawner {
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            spawned: 0,
        }
    }

    #[cfg(test)]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            spawned: 0,
        }
    }

    /// Picks a uniformly random center inside the configured spawn bounds.
    pub fn next_center(&mut self, config: &GameConfig) -> Vec2 {
        let (min, max) = config.spawn_bounds();
        self.spawned += 1;
        Vec2::new(
            self.rng.random_range(min.x..=max.x),
            self.rng.random_range(min.y..=max.y),
        )
    }
}

// Shared mesh and materials for target rings, created once at startup
#[derive(Resource, Clone, Default)]
pub struct TargetAssets {
    pub circle: Handle<Mesh>,
    pub ring: Handle<ColorMaterial>,
    pub ring_alt: Handle<ColorMaterial>,
}
