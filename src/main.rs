//! Circle Sim entry point
//!
//! Headless runner: builds a world from a scenario, holds the requested
//! direction keys for every step and prints the final state.

use std::path::PathBuf;

use clap::Parser;
use glam::Vec2;

use circle_sim::consts::{ARENA_HEIGHT, ARENA_WIDTH};
use circle_sim::sim::{InputState, Key, step};
use circle_sim::{Scenario, Spawner};

#[derive(Parser)]
#[command(name = "circle-sim")]
#[command(about = "Run a 2D rigid-circle physics scenario", long_about = None)]
struct Cli {
    /// Scenario JSON file (built-in arena when omitted)
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Number of steps to simulate
    #[arg(long, default_value_t = 60)]
    steps: u64,

    /// Direction held for the whole run: up, down, left or right (repeatable)
    #[arg(long, value_parser = parse_key)]
    hold: Vec<Key>,

    /// Extra random bodies to add before the run
    #[arg(long, default_value_t = 0)]
    spawn: usize,

    /// Seed for random bodies
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Print the final snapshot as JSON
    #[arg(long)]
    json: bool,
}

fn parse_key(name: &str) -> Result<Key, String> {
    Key::from_name(name).ok_or_else(|| format!("unknown direction '{}'", name))
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let scenario = match &cli.scenario {
        Some(path) => Scenario::load_or_default(path)?,
        None => Scenario::default_arena(ARENA_WIDTH, ARENA_HEIGHT),
    };
    let mut world = scenario.build()?;

    if cli.spawn > 0 {
        let mut spawner = Spawner::new(cli.seed, Vec2::new(ARENA_WIDTH, ARENA_HEIGHT))?;
        spawner.populate(&mut world, cli.spawn)?;
    }

    let mut input = InputState::new();
    for key in &cli.hold {
        input.press(*key);
    }

    log::info!(
        "Running {} steps with {} bodies and {} walls",
        cli.steps,
        world.bodies().len(),
        world.walls().len()
    );
    let held = input.snapshot();
    if !held.is_idle() {
        log::info!("Holding {:?} on body {:?}", held, world.controlled());
    }

    let mut contacts = 0;
    for _ in 0..cli.steps {
        let stats = step(&mut world, input.snapshot());
        contacts += stats.body_contacts + stats.wall_contacts;
    }

    let snapshot = world.snapshot();
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    println!("step {}: {} contacts resolved", snapshot.step, contacts);
    for body in &snapshot.bodies {
        println!(
            "  body {}{} pos=({:.2}, {:.2}) vel=({:.2}, {:.2}) r={} {}",
            body.id,
            if body.controlled { "*" } else { "" },
            body.position.x,
            body.position.y,
            body.velocity.x,
            body.velocity.y,
            body.radius,
            body.color
        );
    }
    println!(
        "  kinetic energy {:.3}, momentum ({:.3}, {:.3})",
        world.kinetic_energy(),
        world.momentum().x,
        world.momentum().y
    );

    Ok(())
}
