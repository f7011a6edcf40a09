//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;
use crate::Rgb;

/// Generate vertices for a filled axis-aligned rectangle (two triangles)
pub fn rect(center: Vec2, size: Vec2, color: Rgb) -> Vec<Vertex> {
    let half = size * 0.5;
    let (min, max) = (center - half, center + half);

    vec![
        Vertex::new(max.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, min.y, color),
        Vertex::new(min.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Generate vertices for a filled circle as a fan of `segments` triangles
pub fn circle(center: Vec2, radius: f32, color: Rgb, segments: u32) -> Vec<Vertex> {
    let segments = segments.max(3);
    let mut vertices = Vec::with_capacity(segments as usize * 3);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}
