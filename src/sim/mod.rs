//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One fixed step per tick, no wall clock
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod draw;
pub mod grid;
pub mod state;
pub mod tick;

pub use collision::{MergeSpawn, WallContacts, resolve_paddle, resolve_walls};
pub use draw::Primitive;
pub use grid::brick_grid;
pub use state::{Brick, BrickHit, BrickKind, Paddle, Projectile, SessionStats, SimEvent, World};
pub use tick::{TickInput, tick};
