// components.rs
use crate::resources::{format_time, GameConfig, SessionStats};
use bevy::prelude::*;

// Ring scale relative to the target radius, outermost first. Even rings use
// the primary color, odd rings the alternate one.
pub const RING_SCALES: [f32; 4] = [1.0, 0.75, 0.55, 0.35];

#[derive(Component, Debug, Clone, PartialEq)]
pub struct Target {
    pub center: Vec2, // screen coordinates
    pub radius: f32,
    pub growing: bool,
}

impl Target {
    pub fn new(center: Vec2) -> Self {
        Self {
            center,
            radius: 0.0,
            growing: true,
        }
    }

    /// Grows or shrinks by one step. The phase flips to shrinking once, as
    /// soon as the next growth step would reach `max_radius`.
    pub fn advance(&mut self, max_radius: f32, growth_rate: f32) {
        if self.growing && self.radius + growth_rate >= max_radius {
            self.growing = false;
        }

        if self.growing {
            self.radius += growth_rate;
        } else {
            self.radius -= growth_rate;
        }
        self.radius = self.radius.clamp(0.0, max_radius);
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        self.center.distance(point) <= self.radius
    }

    pub fn is_expired(&self) -> bool {
        self.radius <= 0.0
    }
}

// One of the concentric discs drawn under a target
#[derive(Component)]
pub struct TargetRing;

#[derive(Component)]
pub struct StatusBar;

#[derive(Component)]
pub struct SummaryScreen;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatLine {
    Time,
    Speed,
    Hits,
    Lives,
    Accuracy,
}

impl StatLine {
    pub const STATUS_BAR: [StatLine; 4] =
        [StatLine::Time, StatLine::Speed, StatLine::Hits, StatLine::Lives];
    pub const SUMMARY: [StatLine; 4] = [
        StatLine::Time,
        StatLine::Speed,
        StatLine::Hits,
        StatLine::Accuracy,
    ];

    pub fn text(&self, stats: &SessionStats, config: &GameConfig) -> String {
        match self {
            StatLine::Time => format!("Time: {}", format_time(stats.elapsed_secs())),
            StatLine::Speed => format!("Speed: {:.1} clicks/s", stats.speed()),
            StatLine::Hits => format!("Hits: {}", stats.hits),
            StatLine::Lives => format!("Lives: {}", stats.lives_left(config.life_total)),
            StatLine::Accuracy => format!("Accuracy: {:.1}%", stats.accuracy()),
        }
    }
}
