//! Drawable primitives
//!
//! Entities describe how they look as plain data; the renderer turns the
//! list into vertices. The simulation never calls into a graphics API.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    /// Axis-aligned filled rectangle
    Rect { center: Vec2, size: Vec2, color: Rgb },
    /// Filled disc approximated by a triangle fan
    Disc {
        center: Vec2,
        radius: f32,
        color: Rgb,
        segments: u32,
    },
}
