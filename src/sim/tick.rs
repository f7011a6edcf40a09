//! Fixed timestep simulation tick
//!
//! One call advances the world by exactly one frame. Per projectile the
//! order is: advance, walls, paddle, bricks, merge. A projectile that goes
//! inactive at any stage skips the rest of its pipeline for this tick.

use super::collision::{MergeSpawn, resolve_paddle, resolve_walls, touches_brick};
use super::state::{BrickKind, SimEvent, World};
use crate::tuning::BrickHitPolicy;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Left arrow held
    pub move_left: bool,
    /// Right arrow held
    pub move_right: bool,
    /// Launch one projectile (already edge-triggered by the caller)
    pub launch: bool,
}

/// Advance the world by one fixed step and return what happened
pub fn tick(world: &mut World, input: &TickInput) -> Vec<SimEvent> {
    let mut events = Vec::new();
    world.stats.ticks += 1;

    let speed = world.tuning.paddle.speed;
    if input.move_left {
        world.paddle.move_by(-speed);
    }
    if input.move_right {
        world.paddle.move_by(speed);
    }

    if input.launch {
        let id = world.launch_projectile();
        events.push(SimEvent::Launched { id });
    }

    // Merges are staged so the live set never grows while we walk it
    let mut merges: Vec<MergeSpawn> = Vec::new();
    for index in 0..world.projectiles.len() {
        if world.projectiles[index].active {
            step_projectile(world, index, &mut merges, &mut events);
        }
    }

    let merged_color = world.tuning.projectile.merged_color;
    for merge in merges {
        let into = world.spawn_projectile(merge.pos, merge.vel, merge.radius, merged_color);
        world.stats.merged += 1;
        events.push(SimEvent::Merged {
            a: merge.a,
            b: merge.b,
            into,
        });
    }

    let removed = world.compact();
    if removed > 0 {
        log::trace!("tick {}: removed {removed} inactive projectiles", world.stats.ticks);
    }

    for event in &events {
        log::debug!("tick {}: {:?}", world.stats.ticks, event);
    }

    events
}

/// Run the collision pipeline for the projectile at `index`
fn step_projectile(world: &mut World, index: usize, merges: &mut Vec<MergeSpawn>, events: &mut Vec<SimEvent>) {
    let World {
        tuning,
        paddle,
        bricks,
        projectiles,
        stats,
        ..
    } = world;
    let p = &mut projectiles[index];
    let id = p.id;

    p.advance();

    let walls = resolve_walls(p);
    if walls.bounced() {
        events.push(SimEvent::WallBounce { id });
    }
    if !p.active {
        stats.lost += 1;
        events.push(SimEvent::Lost { id });
        return;
    }

    if let Some(offset) = resolve_paddle(p, paddle, tuning.paddle.deflection, tuning.projectile.launch_speed_y) {
        events.push(SimEvent::PaddleHit { id, offset });
    }

    for brick in bricks.iter_mut() {
        if !touches_brick(p, brick) {
            continue;
        }
        p.vel.y = -p.vel.y;
        match brick.kind {
            BrickKind::Reflective => events.push(SimEvent::BrickBounce {
                projectile: id,
                brick: brick.id,
            }),
            BrickKind::Destructible => {
                if let Some(hit) = brick.apply_hit() {
                    stats.brick_hits += 1;
                    events.push(SimEvent::BrickHit {
                        projectile: id,
                        brick: brick.id,
                        remaining: hit.remaining,
                    });
                    if hit.destroyed {
                        stats.bricks_destroyed += 1;
                        events.push(SimEvent::BrickDestroyed {
                            projectile: id,
                            brick: brick.id,
                        });
                    }
                }
            }
        }
        if tuning.brick_hit_policy == BrickHitPolicy::FirstOverlap {
            break;
        }
    }

    // First overlapping partner wins; both leave the live set
    let current = &projectiles[index];
    let partner = projectiles
        .iter()
        .enumerate()
        .find(|(other, q)| *other != index && q.active && current.overlaps(q))
        .map(|(other, _)| other);
    if let Some(other) = partner {
        merges.push(MergeSpawn::of(&projectiles[index], &projectiles[other]));
        projectiles[index].active = false;
        projectiles[other].active = false;
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::Tuning;
    use crate::sim::state::Projectile;

    const WHITE: [f32; 3] = [1.0, 1.0, 1.0];

    fn world() -> World {
        World::new(Tuning::default(), 12345)
    }

    /// Fire straight up at a bottom-row brick so it overlaps after one advance
    fn shoot_at(world: &mut World, brick_index: usize, dx: f32) -> u32 {
        let target = world.bricks[brick_index].pos;
        world.spawn_projectile(
            Vec2::new(target.x + dx, target.y - 0.09),
            Vec2::new(0.0, 0.02),
            0.03,
            WHITE,
        )
    }

    /// World with the grid removed from play
    fn empty_world() -> World {
        let mut world = world();
        world.bricks.iter_mut().for_each(|b| b.active = false);
        world
    }

    #[test]
    fn test_launch_spawns_and_moves() {
        let mut world = world();
        let events = tick(&mut world, &TickInput { launch: true, ..Default::default() });
        assert!(matches!(events[0], SimEvent::Launched { .. }));
        assert_eq!(world.projectiles.len(), 1);

        // Spawned before the pass, so it already advanced once
        let p = &world.projectiles[0];
        assert!((p.pos.y - (-0.85 + 0.02)).abs() < 1e-6);
        assert_eq!(world.stats.launched, 1);
        assert_eq!(world.stats.ticks, 1);
    }

    #[test]
    fn test_paddle_input() {
        let mut world = world();
        tick(&mut world, &TickInput { move_right: true, ..Default::default() });
        assert!((world.paddle.pos.x - 0.05).abs() < 1e-6);

        // Both held cancel out
        tick(
            &mut world,
            &TickInput {
                move_left: true,
                move_right: true,
                ..Default::default()
            },
        );
        assert!((world.paddle.pos.x - 0.05).abs() < 1e-6);

        for _ in 0..100 {
            tick(&mut world, &TickInput { move_left: true, ..Default::default() });
        }
        assert!((world.paddle.pos.x - (-0.8)).abs() < 1e-6);
    }

    #[test]
    fn test_straight_shot_hits_destructible_brick() {
        let mut world = world();
        // Bottom row, first column: destructible
        let target = world.bricks[16].clone();
        assert_eq!(target.kind, BrickKind::Destructible);

        shoot_at(&mut world, 16, 0.0);
        let events = tick(&mut world, &TickInput::default());

        let brick = world.brick(target.id).unwrap();
        assert_eq!(brick.hp, 2);
        assert!(brick.active);
        assert!(events.contains(&SimEvent::BrickHit {
            projectile: world.projectiles[0].id,
            brick: target.id,
            remaining: 2,
        }));
        assert!(world.projectiles[0].vel.y < 0.0);
    }

    #[test]
    fn test_reflective_brick_never_breaks() {
        let mut world = world();
        let target = world.bricks[17].clone();
        assert_eq!(target.kind, BrickKind::Reflective);

        for _ in 0..10 {
            world.projectiles.clear();
            shoot_at(&mut world, 17, 0.0);
            tick(&mut world, &TickInput::default());
            assert!(world.projectiles[0].vel.y < 0.0);
            assert_eq!(world.projectiles[0].vel.x, 0.0);
        }
        let brick = world.brick(target.id).unwrap();
        assert!(brick.active);
        assert_eq!(brick.hp, 3);
        assert_eq!(world.stats.brick_hits, 0);
    }

    #[test]
    fn test_destructible_brick_breaks_after_three_hits() {
        let mut world = world();
        let target = world.bricks[16].clone();

        for hit in 1..=3u8 {
            world.projectiles.clear();
            shoot_at(&mut world, 16, 0.0);
            tick(&mut world, &TickInput::default());
            let brick = world.brick(target.id).unwrap();
            assert_eq!(brick.hp, 3 - hit);
            assert_eq!(brick.active, hit < 3);
        }
        assert_eq!(world.stats.bricks_destroyed, 1);
        assert_eq!(world.destructible_bricks_left(), 11);

        // Gone bricks no longer reflect
        world.projectiles.clear();
        shoot_at(&mut world, 16, 0.0);
        tick(&mut world, &TickInput::default());
        assert!(world.projectiles[0].vel.y > 0.0);
    }

    #[test]
    fn test_wide_projectile_hits_every_overlapping_brick() {
        let mut world = world();
        // Straddles a destructible and a reflective brick of the bottom row
        let dx = (world.bricks[17].pos.x - world.bricks[16].pos.x) * 0.5;
        shoot_at(&mut world, 16, dx);
        tick(&mut world, &TickInput::default());

        assert_eq!(world.bricks[16].hp, 2);
        // Two flips cancel out
        assert!(world.projectiles[0].vel.y > 0.0);
    }

    #[test]
    fn test_first_overlap_policy_hits_one_brick() {
        let mut tuning = Tuning::default();
        tuning.brick_hit_policy = BrickHitPolicy::FirstOverlap;
        let mut world = World::new(tuning, 1);
        let dx = (world.bricks[17].pos.x - world.bricks[16].pos.x) * 0.5;
        shoot_at(&mut world, 16, dx);
        tick(&mut world, &TickInput::default());

        assert_eq!(world.bricks[16].hp, 2);
        assert_eq!(world.bricks[17].hp, 3);
        assert!(world.projectiles[0].vel.y < 0.0);
    }

    #[test]
    fn test_lost_projectile_is_compacted() {
        let mut world = empty_world();
        world.paddle.move_by(10.0);
        let id = world.spawn_projectile(Vec2::new(-0.5, -0.96), Vec2::new(0.0, -0.02), 0.03, WHITE);
        let events = tick(&mut world, &TickInput::default());

        assert!(events.contains(&SimEvent::Lost { id }));
        assert!(world.projectile(id).is_none());
        assert!(world.projectiles.is_empty());
        assert_eq!(world.stats.lost, 1);
    }

    #[test]
    fn test_paddle_sends_projectile_up() {
        let mut world = empty_world();
        let id = world.spawn_projectile(Vec2::new(0.05, -0.82), Vec2::new(0.0, -0.03), 0.03, WHITE);
        let events = tick(&mut world, &TickInput::default());

        let p = world.projectile(id).unwrap();
        assert!(p.vel.y > 0.0);
        assert!((p.vel.y - 0.03).abs() < 1e-6);
        assert!((p.vel.x - 0.005).abs() < 1e-6);
        assert!((p.pos.y - (world.paddle.top() + 0.03)).abs() < 1e-6);
        assert!(matches!(events[0], SimEvent::PaddleHit { .. }));
    }

    #[test]
    fn test_head_on_merge() {
        let mut world = empty_world();
        let a = world.spawn_projectile(Vec2::new(-0.03, 0.0), Vec2::new(0.01, 0.004), 0.03, WHITE);
        let b = world.spawn_projectile(Vec2::new(0.03, 0.0), Vec2::new(-0.01, 0.0), 0.03, WHITE);
        let events = tick(&mut world, &TickInput::default());

        assert_eq!(world.projectiles.len(), 1);
        assert!(world.projectile(a).is_none());
        assert!(world.projectile(b).is_none());

        let merged: &Projectile = &world.projectiles[0];
        assert!(events.contains(&SimEvent::Merged { a, b, into: merged.id }));
        assert!((merged.radius - 0.06).abs() < 1e-6);
        // a moved before the check, b did not
        assert!((merged.pos.x - ((-0.02 + 0.03) * 0.5)).abs() < 1e-6);
        assert!((merged.pos.y - 0.002).abs() < 1e-6);
        assert!(merged.vel.x.abs() < 1e-6);
        assert!((merged.vel.y - 0.002).abs() < 1e-6);
        assert_eq!(merged.color, world.tuning.projectile.merged_color);
        assert_eq!(world.stats.merged, 1);
    }

    #[test]
    fn test_merge_after_both_moved() {
        // The later projectile sees the merge partner already consumed
        let mut world = empty_world();
        world.spawn_projectile(Vec2::new(-0.2, 0.0), Vec2::new(0.01, 0.0), 0.03, WHITE);
        world.spawn_projectile(Vec2::new(0.2, 0.0), Vec2::new(-0.01, 0.0), 0.03, WHITE);

        let mut ticks = 0;
        while world.projectiles.len() == 2 {
            tick(&mut world, &TickInput::default());
            ticks += 1;
            assert!(ticks < 50, "projectiles never met");
        }
        assert_eq!(world.projectiles.len(), 1);
        assert!((world.projectiles[0].radius - 0.06).abs() < 1e-6);
        assert!(world.projectiles[0].vel.x.abs() < 1e-6);
    }

    #[test]
    fn test_lost_projectile_does_not_merge() {
        let mut world = empty_world();
        world.paddle.move_by(10.0);
        let lost = world.spawn_projectile(Vec2::new(-0.5, -0.96), Vec2::new(0.0, -0.02), 0.03, WHITE);
        let other = world.spawn_projectile(Vec2::new(-0.5, -0.95), Vec2::new(0.0, 0.0), 0.03, WHITE);
        let events = tick(&mut world, &TickInput::default());

        assert!(events.contains(&SimEvent::Lost { id: lost }));
        assert!(!events.iter().any(|e| matches!(e, SimEvent::Merged { .. })));
        assert_eq!(world.projectiles.len(), 1);
        assert_eq!(world.projectiles[0].id, other);
    }

    #[test]
    fn test_three_way_overlap_merges_once_per_projectile() {
        let mut world = empty_world();
        for x in [-0.02, 0.0, 0.02] {
            world.spawn_projectile(Vec2::new(x, 0.0), Vec2::ZERO, 0.03, WHITE);
        }
        tick(&mut world, &TickInput::default());

        // First two merge; the third has no active partner left this tick
        assert_eq!(world.projectiles.len(), 2);
        assert_eq!(world.stats.merged, 1);
        let radii: Vec<f32> = world.projectiles.iter().map(|p| p.radius).collect();
        assert!(radii.iter().any(|r| (r - 0.06).abs() < 1e-6));
        assert!(radii.iter().any(|r| (r - 0.03).abs() < 1e-6));

        // Next tick the survivors overlap and merge again
        tick(&mut world, &TickInput::default());
        assert_eq!(world.projectiles.len(), 1);
        assert!((world.projectiles[0].radius - 0.09).abs() < 1e-6);
    }

    #[test]
    fn test_determinism() {
        let mut world1 = World::new(Tuning::default(), 99999);
        let mut world2 = World::new(Tuning::default(), 99999);

        let inputs = [
            TickInput { launch: true, ..Default::default() },
            TickInput { move_left: true, ..Default::default() },
            TickInput { launch: true, ..Default::default() },
            TickInput::default(),
        ];

        for _ in 0..50 {
            for input in &inputs {
                tick(&mut world1, input);
                tick(&mut world2, input);
            }
        }

        assert_eq!(world1.stats, world2.stats);
        assert_eq!(world1.projectiles.len(), world2.projectiles.len());
        for (a, b) in world1.projectiles.iter().zip(&world2.projectiles) {
            assert_eq!(a.pos, b.pos);
            assert_eq!(a.vel, b.vel);
        }
    }
}
