//! Brick grid layout

use glam::Vec2;

use super::state::{Brick, BrickKind};
use crate::tuning::GridTuning;

/// Lay out the brick grid row by row, top row first.
///
/// Kinds alternate in a checkerboard: destructible where `row + col` is even.
/// Ids are assigned sequentially starting at `first_id`.
pub fn brick_grid(grid: &GridTuning, first_id: u32) -> Vec<Brick> {
    let step = grid.brick_size + Vec2::splat(grid.gap);
    let mut bricks = Vec::with_capacity((grid.rows * grid.cols) as usize);
    let mut id = first_id;

    for row in 0..grid.rows {
        for col in 0..grid.cols {
            let pos = Vec2::new(
                grid.origin.x + col as f32 * step.x,
                grid.origin.y - row as f32 * step.y,
            );
            let brick = if (row + col) % 2 == 0 {
                Brick::new(
                    id,
                    BrickKind::Destructible,
                    pos,
                    grid.brick_size,
                    grid.destructible_color,
                    grid.destructible_hit_points,
                )
            } else {
                Brick::new(
                    id,
                    BrickKind::Reflective,
                    pos,
                    grid.brick_size,
                    grid.reflective_color,
                    grid.destructible_hit_points,
                )
            };
            bricks.push(brick);
            id += 1;
        }
    }

    bricks
}
