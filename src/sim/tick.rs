//! Discrete simulation step
//!
//! One call advances the whole world by one frame, in a fixed order:
//!
//! 1. Apply the input snapshot to the controlled body
//! 2. Resolve every body pair once (`i < j`, index order)
//! 3. Resolve every body against every wall
//! 4. Integrate every body
//!
//! Collisions are resolved against the positions the frame started with and
//! integration happens last, once.

use super::collision::{resolve_body_pair, resolve_body_wall};
use super::input::DirectionalInput;
use super::state::World;

/// Contact counts for one step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepStats {
    pub body_contacts: usize,
    pub wall_contacts: usize,
}

/// Advance the world by one step
pub fn step(world: &mut World, input: DirectionalInput) -> StepStats {
    if let Some(id) = world.controlled {
        let thrust = world.config.thrust;
        if let Some(body) = world.bodies.get_mut(id.0) {
            body.apply_directional_input(input, thrust);
        }
    }

    let mut stats = StepStats::default();

    for i in 0..world.bodies.len() {
        let (head, tail) = world.bodies.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail {
            if resolve_body_pair(a, b) {
                stats.body_contacts += 1;
            }
        }
    }

    for body in &mut world.bodies {
        for wall in &world.walls {
            if resolve_body_wall(body, wall) {
                stats.wall_contacts += 1;
            }
        }
    }

    let drag = world.config.drag_coefficient;
    for body in &mut world.bodies {
        body.integrate(drag);
    }

    world.step_count += 1;
    if stats.body_contacts + stats.wall_contacts > 0 {
        log::trace!(
            "step {}: {} body contacts, {} wall contacts",
            world.step_count,
            stats.body_contacts,
            stats.wall_contacts
        );
    }
    stats
}
