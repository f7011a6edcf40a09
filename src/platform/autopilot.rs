//! Scripted player for headless sessions
//!
//! Chases the lowest descending projectile with the paddle and taps space
//! at a fixed interval while fewer than `max_in_play` projectiles are live.

use crate::sim::World;

use super::input::KeyLevels;

/// Paddle is considered lined up within this horizontal distance
const DEAD_ZONE: f32 = 0.03;

#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Ticks between launch attempts
    pub launch_interval: u64,
    pub max_in_play: usize,
    /// Press escape once this many ticks have run (0 = never)
    pub quit_after: u64,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            launch_interval: 30,
            max_in_play: 3,
            quit_after: 0,
        }
    }
}

impl Autopilot {
    /// Keys to hold for the next tick
    pub fn keys(&self, world: &World) -> KeyLevels {
        let tick = world.stats.ticks;
        let mut keys = KeyLevels::default();

        if self.quit_after > 0 && tick >= self.quit_after {
            keys.escape = true;
            return keys;
        }

        // Track the lowest projectile that is coming down
        let target = world
            .active_projectiles()
            .filter(|p| p.vel.y < 0.0)
            .min_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
            .map(|p| p.pos.x);
        if let Some(x) = target {
            let dx = x - world.paddle.pos.x;
            keys.left = dx < -DEAD_ZONE;
            keys.right = dx > DEAD_ZONE;
        }

        // Release between taps so the launch edge fires
        let in_play = world.active_projectiles().count();
        keys.space = in_play < self.max_in_play && self.launch_interval > 0 && tick % self.launch_interval == 0;

        keys
    }
}
