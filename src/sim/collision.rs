//! Collision detection and response
//!
//! Projectiles are tested against rectangles through their circumscribing
//! square (AABB vs AABB), against the screen edges by their radius, and
//! against each other as true discs.

use glam::Vec2;

use super::state::{Brick, Paddle, Projectile};
use crate::aabb_overlap;
use crate::consts::FIELD_HALF_EXTENT;

/// Which walls a projectile touched this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContacts {
    /// Bounced off the left or right edge
    pub side: bool,
    /// Bounced off the top edge
    pub top: bool,
    /// Fell through the bottom edge
    pub floor: bool,
}

impl WallContacts {
    pub fn bounced(&self) -> bool {
        self.side || self.top
    }
}

/// Reflect off the side and top walls; deactivate when the bottom edge is crossed
pub fn resolve_walls(p: &mut Projectile) -> WallContacts {
    let mut contacts = WallContacts::default();
    let edge = FIELD_HALF_EXTENT;

    if p.pos.x - p.radius < -edge {
        p.pos.x = -edge + p.radius;
        p.vel.x = -p.vel.x;
        contacts.side = true;
    }
    if p.pos.x + p.radius > edge {
        p.pos.x = edge - p.radius;
        p.vel.x = -p.vel.x;
        contacts.side = true;
    }
    if p.pos.y + p.radius > edge {
        p.pos.y = edge - p.radius;
        p.vel.y = -p.vel.y;
        contacts.top = true;
    }
    // Lost, no bounce
    if p.pos.y - p.radius < -edge {
        p.active = false;
        contacts.floor = true;
    }

    contacts
}

/// Whether the projectile's bounding square overlaps the paddle
#[inline]
pub fn touches_paddle(p: &Projectile, paddle: &Paddle) -> bool {
    aabb_overlap(p.pos, p.half_extent(), paddle.pos, paddle.half_size())
}

/// Whether the projectile's bounding square overlaps an active brick
#[inline]
pub fn touches_brick(p: &Projectile, brick: &Brick) -> bool {
    brick.active && aabb_overlap(p.pos, p.half_extent(), brick.pos, brick.half_size())
}

/// Bounce a projectile off the paddle.
///
/// The vertical speed is forced upward (a projectile with no vertical speed
/// gets `rebound_speed`), the horizontal speed comes from where it struck
/// relative to the paddle center, and the projectile is placed just above
/// the paddle so it cannot stick. Returns the normalized impact offset
/// (-1 at the left edge, 1 at the right edge), or `None` on a miss.
pub fn resolve_paddle(p: &mut Projectile, paddle: &Paddle, deflection: f32, rebound_speed: f32) -> Option<f32> {
    if !touches_paddle(p, paddle) {
        return None;
    }

    let offset = ((p.pos.x - paddle.pos.x) / paddle.half_size().x).clamp(-1.0, 1.0);
    let vy = p.vel.y.abs();
    p.vel = Vec2::new(offset * deflection, if vy > 0.0 { vy } else { rebound_speed });
    p.pos.y = paddle.top() + p.radius;

    Some(offset)
}

/// Midpoint, summed radius and averaged velocity of two merging projectiles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MergeSpawn {
    pub a: u32,
    pub b: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl MergeSpawn {
    pub fn of(a: &Projectile, b: &Projectile) -> Self {
        Self {
            a: a.id,
            b: b.id,
            pos: (a.pos + b.pos) * 0.5,
            vel: (a.vel + b.vel) * 0.5,
            radius: a.radius + b.radius,
        }
    }
}
