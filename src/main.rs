//! Brick Breaker headless entry point
//!
//! Drives the simulation the way a window shell would (poll keys, tick,
//! build the frame's vertices) with the autopilot standing in for the
//! keyboard. Useful for soak-testing tuning files.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use brick_breaker::Tuning;
use brick_breaker::consts::{DEFAULT_SEED, TICKS_PER_SECOND};
use brick_breaker::platform::{Autopilot, Controls};
use brick_breaker::renderer::build_vertices;
use brick_breaker::sim::{World, tick};

/// Run a scripted Brick Breaker session without a window.
#[derive(Parser, Debug)]
struct Flags {
    /// JSON tuning file; defaults are used when omitted.
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Seed for the launch RNG.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Number of ticks to simulate before quitting.
    #[arg(long, default_value_t = 60 * u64::from(TICKS_PER_SECOND), value_parser = clap::value_parser!(u64).range(1..))]
    ticks: u64,

    /// Print the final world as JSON.
    #[arg(long)]
    dump: bool,
}

fn run(flags: Flags) -> Result<()> {
    let tuning = match &flags.tuning {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };

    log::info!("Brick Breaker (headless) starting, {} ticks", flags.ticks);
    let mut world = World::new(tuning, flags.seed);
    let mut controls = Controls::new();
    let pilot = Autopilot {
        quit_after: flags.ticks,
        ..Default::default()
    };

    let mut vertex_count = 0;
    while world.stats.ticks < flags.ticks {
        let frame = controls.sample(pilot.keys(&world));
        if frame.quit {
            log::info!("quit requested at tick {}", world.stats.ticks);
            break;
        }

        tick(&mut world, &frame.input);
        vertex_count = build_vertices(&world.draw_list()).len();

        if world.stats.ticks % u64::from(TICKS_PER_SECOND) == 0 {
            log::info!(
                "t={}s live={} bricks_left={} vertices={}",
                world.stats.ticks / u64::from(TICKS_PER_SECOND),
                world.projectiles.len(),
                world.destructible_bricks_left(),
                vertex_count
            );
        }

        if world.destructible_bricks_left() == 0 {
            log::info!("all destructible bricks cleared at tick {}", world.stats.ticks);
            break;
        }
    }

    let stats = &world.stats;
    log::info!(
        "session over: ticks={} launched={} lost={} merged={} brick_hits={} destroyed={} last_frame_vertices={}",
        stats.ticks,
        stats.launched,
        stats.lost,
        stats.merged,
        stats.brick_hits,
        stats.bricks_destroyed,
        vertex_count
    );

    if flags.dump {
        println!("{}", serde_json::to_string_pretty(&world)?);
    }

    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = run(Flags::parse()) {
        log::error!("{e:#}");
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
