//! Data-driven game constants
//!
//! Defaults reproduce the classic layout: a 3x8 checkerboard of
//! destructible and reflective bricks above a paddle near the bottom edge.
//! A JSON file can override any subset of the fields.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, ensure};
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::Rgb;

/// How many overlapping bricks a projectile may hit in a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrickHitPolicy {
    /// Every overlapping brick reacts (a wide ball can damage several at once)
    #[default]
    EveryOverlap,
    /// Stop after the first overlapping brick
    FirstOverlap,
}

/// Brick grid layout
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridTuning {
    pub rows: u32,
    pub cols: u32,
    /// Center of the top-left brick
    pub origin: Vec2,
    pub brick_size: Vec2,
    /// Spacing between neighbouring bricks (both axes)
    pub gap: f32,
    pub destructible_hit_points: u8,
    pub destructible_color: Rgb,
    pub reflective_color: Rgb,
}

impl Default for GridTuning {
    fn default() -> Self {
        Self {
            rows: 3,
            cols: 8,
            origin: Vec2::new(-0.8, 0.6),
            brick_size: Vec2::new(0.2, 0.1),
            gap: 0.02,
            destructible_hit_points: 3,
            destructible_color: [0.0, 1.0, 0.0],
            reflective_color: [0.5, 0.5, 0.0],
        }
    }
}

/// Paddle placement and control
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleTuning {
    pub center: Vec2,
    pub size: Vec2,
    pub color: Rgb,
    /// Horizontal distance moved per tick while an arrow key is held
    pub speed: f32,
    /// Horizontal speed imparted at the paddle edge (scaled by impact offset)
    pub deflection: f32,
}

impl Default for PaddleTuning {
    fn default() -> Self {
        Self {
            center: Vec2::new(0.0, -0.9),
            size: Vec2::new(0.4, 0.05),
            color: [0.5, 0.5, 1.0],
            speed: 0.05,
            deflection: 0.02,
        }
    }
}

/// Projectile launch and merge parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileTuning {
    pub launch_pos: Vec2,
    pub radius: f32,
    /// Horizontal launch speed is drawn uniformly from [-max, max)
    pub launch_speed_x_max: f32,
    pub launch_speed_y: f32,
    pub merged_color: Rgb,
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            launch_pos: Vec2::new(0.0, -0.85),
            radius: 0.03,
            launch_speed_x_max: 0.02,
            launch_speed_y: 0.02,
            merged_color: [1.0, 1.0, 0.0],
        }
    }
}

/// Upper bound on `disc_segments`
pub const MAX_DISC_SEGMENTS: u32 = 4096;

/// All tunable game constants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub grid: GridTuning,
    pub paddle: PaddleTuning,
    pub projectile: ProjectileTuning,
    pub brick_hit_policy: BrickHitPolicy,
    /// Triangle fan segments used to approximate a disc
    pub disc_segments: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            grid: GridTuning::default(),
            paddle: PaddleTuning::default(),
            projectile: ProjectileTuning::default(),
            brick_hit_policy: BrickHitPolicy::default(),
            disc_segments: 360,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load and validate tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::info!("loading tuning from {}", path.to_string_lossy());
        let json = fs::read_to_string(path).with_context(|| format!("read {path:?}"))?;
        Self::from_json(&json).with_context(|| format!("parse {path:?}"))
    }

    /// Load tuning, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("{e:#}; using default tuning");
                Self::default()
            }
        }
    }

    /// Reject values the simulation cannot work with
    pub fn validate(&self) -> Result<()> {
        let grid = &self.grid;
        ensure!(grid.rows > 0 && grid.cols > 0, "brick grid must have at least one row and column");
        ensure!(
            grid.brick_size.x > 0.0 && grid.brick_size.y > 0.0,
            "brick size must be positive, got {}",
            grid.brick_size
        );
        ensure!(grid.gap >= 0.0, "brick gap must not be negative");
        ensure!(grid.destructible_hit_points > 0, "destructible bricks need at least one hit point");

        let paddle = &self.paddle;
        ensure!(
            paddle.size.x > 0.0 && paddle.size.y > 0.0,
            "paddle size must be positive, got {}",
            paddle.size
        );
        ensure!(paddle.size.x <= 2.0, "paddle is wider than the playfield");
        ensure!(paddle.speed >= 0.0, "paddle speed must not be negative");

        let projectile = &self.projectile;
        ensure!(projectile.radius > 0.0, "projectile radius must be positive");
        ensure!(projectile.launch_speed_x_max >= 0.0, "launch speed range must not be negative");
        ensure!(projectile.launch_speed_y > 0.0, "projectiles must launch upward");

        ensure!(
            (3..=MAX_DISC_SEGMENTS).contains(&self.disc_segments),
            "disc segments must be in 3..={MAX_DISC_SEGMENTS}, got {}",
            self.disc_segments
        );
        Ok(())
    }
}
