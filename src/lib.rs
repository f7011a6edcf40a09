//! Brick Breaker - a 2D Breakout game core
//!
//! Core modules:
//! - `sim`: Fixed-step simulation (paddle, bricks, projectiles, collisions)
//! - `renderer`: Drawable primitives expanded into GPU-ready vertices
//! - `platform`: Keyboard level → per-tick input conversion
//! - `tuning`: Data-driven game constants

pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::{BrickHitPolicy, Tuning};

/// RGB color, each channel in 0..=1
pub type Rgb = [f32; 3];

/// Game configuration constants
pub mod consts {
    /// Half-extent of the playfield in normalized device coordinates
    pub const FIELD_HALF_EXTENT: f32 = 1.0;

    /// Ticks per second the shell is expected to drive the simulation at
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Default seed for the launch RNG
    pub const DEFAULT_SEED: u64 = 0x5eed_b41c;
}

/// Axis-aligned overlap test between two rectangles given by center and half size.
///
/// Touching edges do not count as overlap.
#[inline]
pub fn aabb_overlap(a_center: glam::Vec2, a_half: glam::Vec2, b_center: glam::Vec2, b_half: glam::Vec2) -> bool {
    let d = (a_center - b_center).abs();
    d.x < a_half.x + b_half.x && d.y < a_half.y + b_half.y
}
