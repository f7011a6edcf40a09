//! Game state and core simulation types
//!
//! The `World` owns everything the simulation touches; nothing lives in
//! globals. All of it is serializable so a session can be snapshotted.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::draw::Primitive;
use super::grid::brick_grid;
use crate::Rgb;
use crate::consts::FIELD_HALF_EXTENT;
use crate::tuning::Tuning;

/// Color of a destructible brick with two hits left
pub const ORANGE: Rgb = [1.0, 0.5, 0.0];
/// Color of a destructible brick with one hit left
pub const RED: Rgb = [1.0, 0.0, 0.0];

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Center of the rectangle
    pub pos: Vec2,
    /// Full width and height
    pub size: Vec2,
    pub color: Rgb,
}

impl Paddle {
    pub fn new(pos: Vec2, size: Vec2, color: Rgb) -> Self {
        let mut paddle = Self { pos, size, color };
        paddle.move_by(0.0);
        paddle
    }

    #[inline]
    pub fn half_size(&self) -> Vec2 {
        self.size * 0.5
    }

    /// Y coordinate of the top edge
    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y + self.size.y * 0.5
    }

    /// Shift horizontally, keeping both edges inside the playfield
    pub fn move_by(&mut self, dx: f32) {
        let limit = (FIELD_HALF_EXTENT - self.size.x * 0.5).max(0.0);
        self.pos.x = (self.pos.x + dx).clamp(-limit, limit);
    }

    pub fn primitive(&self) -> Primitive {
        Primitive::Rect {
            center: self.pos,
            size: self.size,
            color: self.color,
        }
    }
}

/// Brick types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrickKind {
    /// Bounces projectiles forever, takes no damage
    Reflective,
    /// Loses a hit point per hit, deactivates at zero
    Destructible,
}

/// Outcome of hitting a destructible brick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrickHit {
    pub remaining: u8,
    pub destroyed: bool,
}

/// A brick entity (axis-aligned rectangle)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub id: u32,
    pub kind: BrickKind,
    pub pos: Vec2,
    pub size: Vec2,
    pub color: Rgb,
    /// Remaining hits (meaningless for reflective bricks)
    pub hp: u8,
    pub active: bool,
}

impl Brick {
    pub fn new(id: u32, kind: BrickKind, pos: Vec2, size: Vec2, color: Rgb, hp: u8) -> Self {
        Self {
            id,
            kind,
            pos,
            size,
            color,
            hp,
            active: true,
        }
    }

    #[inline]
    pub fn half_size(&self) -> Vec2 {
        self.size * 0.5
    }

    /// Register a hit. Returns `None` for reflective or already inactive bricks.
    pub fn apply_hit(&mut self) -> Option<BrickHit> {
        if self.kind != BrickKind::Destructible || !self.active {
            return None;
        }
        self.hp = self.hp.saturating_sub(1);
        if let Some(color) = hit_color(self.hp) {
            self.color = color;
        }
        if self.hp == 0 {
            self.active = false;
        }
        Some(BrickHit {
            remaining: self.hp,
            destroyed: !self.active,
        })
    }

    /// Nothing to draw once the brick is gone
    pub fn primitive(&self) -> Option<Primitive> {
        self.active.then(|| Primitive::Rect {
            center: self.pos,
            size: self.size,
            color: self.color,
        })
    }
}

/// Damage color ramp keyed by remaining hit points
pub fn hit_color(hp: u8) -> Option<Rgb> {
    match hp {
        2 => Some(ORANGE),
        1 => Some(RED),
        _ => None,
    }
}

/// A projectile entity (the bouncing disc)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    pub radius: f32,
    pub color: Rgb,
    pub active: bool,
}

impl Projectile {
    pub fn new(id: u32, pos: Vec2, vel: Vec2, radius: f32, color: Rgb) -> Self {
        debug_assert!(radius > 0.0, "projectile radius must be positive");
        Self {
            id,
            pos,
            vel,
            radius,
            color,
            active: true,
        }
    }

    /// One explicit Euler step
    #[inline]
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Half size of the circumscribing square
    #[inline]
    pub fn half_extent(&self) -> Vec2 {
        Vec2::splat(self.radius)
    }

    /// Disc-disc overlap (touching does not count)
    pub fn overlaps(&self, other: &Projectile) -> bool {
        let reach = self.radius + other.radius;
        self.pos.distance_squared(other.pos) < reach * reach
    }

    pub fn primitive(&self, segments: u32) -> Option<Primitive> {
        self.active.then(|| Primitive::Disc {
            center: self.pos,
            radius: self.radius,
            color: self.color,
            segments,
        })
    }
}

/// Simulation events, in the order they happened within a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SimEvent {
    Launched { id: u32 },
    WallBounce { id: u32 },
    Lost { id: u32 },
    PaddleHit { id: u32, offset: f32 },
    BrickBounce { projectile: u32, brick: u32 },
    BrickHit { projectile: u32, brick: u32, remaining: u8 },
    BrickDestroyed { projectile: u32, brick: u32 },
    Merged { a: u32, b: u32, into: u32 },
}

/// Running session counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub ticks: u64,
    pub launched: u32,
    pub lost: u32,
    pub merged: u32,
    pub brick_hits: u32,
    pub bricks_destroyed: u32,
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// Seed the launch RNG started from
    pub seed: u64,
    pub tuning: Tuning,
    pub paddle: Paddle,
    /// Fixed grid; bricks are deactivated, never removed
    pub bricks: Vec<Brick>,
    /// Live projectiles (sorted by id)
    pub projectiles: Vec<Projectile>,
    pub stats: SessionStats,
    rng: Pcg32,
    next_id: u32,
}

impl World {
    /// Create a world with the paddle and brick grid laid out from `tuning`.
    ///
    /// `tuning` is expected to have passed `Tuning::validate`; `from_json` and
    /// `load` both do this.
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        let paddle = Paddle::new(tuning.paddle.center, tuning.paddle.size, tuning.paddle.color);
        let bricks = brick_grid(&tuning.grid, 1);
        let next_id = bricks.len() as u32 + 1;
        log::info!(
            "world created: {} bricks ({} destructible), seed {seed:#x}",
            bricks.len(),
            bricks.iter().filter(|b| b.kind == BrickKind::Destructible).count()
        );
        Self {
            seed,
            tuning,
            paddle,
            bricks,
            projectiles: Vec::new(),
            stats: SessionStats::default(),
            rng: Pcg32::seed_from_u64(seed),
            next_id,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add a projectile and return its id
    pub fn spawn_projectile(&mut self, pos: Vec2, vel: Vec2, radius: f32, color: Rgb) -> u32 {
        let id = self.next_entity_id();
        self.projectiles.push(Projectile::new(id, pos, vel, radius, color));
        id
    }

    /// Launch a projectile from the launch point with a random sideways
    /// speed and random color
    pub fn launch_projectile(&mut self) -> u32 {
        let launch = &self.tuning.projectile;
        let (pos, radius, vy, max_vx) = (
            launch.launch_pos,
            launch.radius,
            launch.launch_speed_y,
            launch.launch_speed_x_max,
        );
        let vx = if max_vx > 0.0 {
            self.rng.random_range(-max_vx..max_vx)
        } else {
            0.0
        };
        let color: Rgb = [self.rng.random(), self.rng.random(), self.rng.random()];
        self.stats.launched += 1;
        self.spawn_projectile(pos, Vec2::new(vx, vy), radius, color)
    }

    /// Iterate projectiles that still take part in the simulation
    pub fn active_projectiles(&self) -> impl Iterator<Item = &Projectile> {
        self.projectiles.iter().filter(|p| p.active)
    }

    pub fn projectile(&self, id: u32) -> Option<&Projectile> {
        self.projectiles.iter().find(|p| p.id == id)
    }

    pub fn brick(&self, id: u32) -> Option<&Brick> {
        self.bricks.iter().find(|b| b.id == id)
    }

    /// Drop inactive projectiles; returns how many were removed
    pub fn compact(&mut self) -> usize {
        let before = self.projectiles.len();
        self.projectiles.retain(|p| p.active);
        self.projectiles.sort_by_key(|p| p.id);
        before - self.projectiles.len()
    }

    /// Destructible bricks still standing
    pub fn destructible_bricks_left(&self) -> usize {
        self.bricks
            .iter()
            .filter(|b| b.active && b.kind == BrickKind::Destructible)
            .count()
    }

    /// Everything visible this frame: projectiles, then bricks, then the paddle
    pub fn draw_list(&self) -> Vec<Primitive> {
        let segments = self.tuning.disc_segments;
        let mut list: Vec<Primitive> = self
            .projectiles
            .iter()
            .filter_map(|p| p.primitive(segments))
            .collect();
        list.extend(self.bricks.iter().filter_map(Brick::primitive));
        list.push(self.paddle.primitive());
        list
    }
}
