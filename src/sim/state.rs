//! World state
//!
//! The `World` owns the body roster, the walls and the tuning values. Bodies
//! never reference each other; all interaction goes through the collision
//! functions during `tick::step`. Bodies are only ever appended, so a
//! `BodyId` stays valid for the life of the world.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::{Body, BodyId, Color};
use super::wall::Wall;
use crate::config::WorldConfig;
use crate::error::{ConfigError, SimError};

/// The simulation context
#[derive(Debug, Clone)]
pub struct World {
    pub(super) config: WorldConfig,
    pub(super) bodies: Vec<Body>,
    pub(super) walls: Vec<Wall>,
    /// At most one body receives directional input
    pub(super) controlled: Option<BodyId>,
    pub(super) step_count: u64,
}

impl World {
    pub fn new(config: WorldConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            bodies: Vec::new(),
            walls: Vec::new(),
            controlled: None,
            step_count: 0,
        })
    }

    #[inline]
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Append a body to the roster. Call between steps only.
    ///
    /// Rejects bodies whose public state was set to a non-finite value after
    /// construction.
    pub fn add_body(&mut self, body: Body) -> Result<BodyId, ConfigError> {
        if !body.position.is_finite() {
            return Err(ConfigError::NonFiniteVector("position"));
        }
        if !body.velocity.is_finite() {
            return Err(ConfigError::NonFiniteVector("velocity"));
        }
        if !body.acceleration.is_finite() {
            return Err(ConfigError::NonFiniteVector("acceleration"));
        }

        let id = BodyId(self.bodies.len());
        log::debug!(
            "Body {} added at ({:.1}, {:.1}) r={} m={}",
            id,
            body.position.x,
            body.position.y,
            body.radius(),
            body.mass()
        );
        self.bodies.push(body);
        Ok(id)
    }

    pub fn add_wall(&mut self, wall: Wall) {
        log::debug!(
            "Wall added {:?} -> {:?} (length {:.1})",
            wall.start(),
            wall.end(),
            wall.length()
        );
        self.walls.push(wall);
    }

    #[inline]
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    #[inline]
    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.0)
    }

    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.get_mut(id.0)
    }

    /// Hand directional control to `id`, taking it from any other body
    pub fn set_controlled(&mut self, id: BodyId) -> Result<(), SimError> {
        if id.0 >= self.bodies.len() {
            return Err(SimError::UnknownBody(id));
        }
        log::debug!("Control handed to body {}", id);
        self.controlled = Some(id);
        Ok(())
    }

    pub fn clear_controlled(&mut self) {
        self.controlled = None;
    }

    #[inline]
    pub fn controlled(&self) -> Option<BodyId> {
        self.controlled
    }

    #[inline]
    pub fn is_controlled(&self, id: BodyId) -> bool {
        self.controlled == Some(id)
    }

    /// Number of completed steps
    #[inline]
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Total kinetic energy of all bodies
    pub fn kinetic_energy(&self) -> f32 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    /// Total linear momentum of all bodies
    pub fn momentum(&self) -> Vec2 {
        self.bodies.iter().map(|b| b.velocity * b.mass()).sum()
    }

    /// Read-only copy of everything a renderer needs
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            step: self.step_count,
            bodies: self
                .bodies
                .iter()
                .enumerate()
                .map(|(i, body)| {
                    let id = BodyId(i);
                    BodySnapshot::new(id, body, self.is_controlled(id))
                })
                .collect(),
            walls: self.walls.clone(),
        }
    }
}

/// Renderer-facing copy of a body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodySnapshot {
    pub id: BodyId,
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub radius: f32,
    pub mass: f32,
    pub elasticity: f32,
    pub color: Color,
    pub controlled: bool,
}

impl BodySnapshot {
    fn new(id: BodyId, body: &Body, controlled: bool) -> Self {
        Self {
            id,
            position: body.position,
            velocity: body.velocity,
            acceleration: body.acceleration,
            radius: body.radius(),
            mass: body.mass(),
            elasticity: body.elasticity(),
            color: body.color(),
            controlled,
        }
    }
}

/// Renderer-facing copy of the whole world after a step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub step: u64,
    pub bodies: Vec<BodySnapshot>,
    pub walls: Vec<Wall>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world_with_bodies(n: usize) -> World {
        let mut world = World::new(WorldConfig::default()).unwrap();
        for i in 0..n {
            let body = Body::new(Vec2::new(i as f32 * 50.0, 0.0), 10.0, 1.0, 1.0, Color::WHITE)
                .unwrap();
            world.add_body(body).unwrap();
        }
        world
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = WorldConfig {
            drag_coefficient: -0.1,
            ..Default::default()
        };
        assert!(World::new(config).is_err());
    }

    #[test]
    fn test_add_body_rejects_non_finite_state() {
        let mut world = world_with_bodies(1);

        let mut body = Body::new(Vec2::ZERO, 5.0, 1.0, 1.0, Color::BLUE).unwrap();
        body.velocity = Vec2::new(f32::NAN, 0.0);
        assert!(matches!(
            world.add_body(body.clone()),
            Err(ConfigError::NonFiniteVector("velocity"))
        ));

        body.velocity = Vec2::ZERO;
        body.position = Vec2::new(0.0, f32::INFINITY);
        assert!(matches!(
            world.add_body(body.clone()),
            Err(ConfigError::NonFiniteVector("position"))
        ));

        body.position = Vec2::ZERO;
        body.acceleration = Vec2::new(f32::NEG_INFINITY, 0.0);
        assert!(world.add_body(body).is_err());

        // Rejected bodies never reach the roster
        assert_eq!(world.bodies().len(), 1);
    }

    #[test]
    fn test_ids_follow_insertion_order() {
        let world = world_with_bodies(3);
        assert_eq!(world.body(BodyId(2)).unwrap().position.x, 100.0);
        assert!(world.body(BodyId(3)).is_none());
    }

    #[test]
    fn test_single_controlled_body() {
        let mut world = world_with_bodies(3);
        assert_eq!(world.controlled(), None);

        world.set_controlled(BodyId(1)).unwrap();
        world.set_controlled(BodyId(2)).unwrap();
        assert!(!world.is_controlled(BodyId(1)));
        assert!(world.is_controlled(BodyId(2)));

        let snapshot = world.snapshot();
        assert_eq!(snapshot.bodies.iter().filter(|b| b.controlled).count(), 1);

        assert_eq!(
            world.set_controlled(BodyId(7)),
            Err(SimError::UnknownBody(BodyId(7)))
        );
        assert_eq!(world.controlled(), Some(BodyId(2)));

        world.clear_controlled();
        assert_eq!(world.controlled(), None);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut world = world_with_bodies(1);
        let snapshot = world.snapshot();
        world.body_mut(BodyId(0)).unwrap().position = Vec2::new(-1.0, -1.0);
        assert_eq!(snapshot.bodies[0].position, Vec2::ZERO);
        assert_eq!(snapshot.step, 0);
    }

    #[test]
    fn test_snapshot_serializes() {
        let world = world_with_bodies(1);
        let json = serde_json::to_string(&world.snapshot()).unwrap();
        assert!(json.contains("\"color\":\"#ffffff\""));
    }

    #[test]
    fn test_momentum_and_energy() {
        let mut world = world_with_bodies(2);
        world.body_mut(BodyId(0)).unwrap().velocity = Vec2::new(2.0, 0.0);
        world.body_mut(BodyId(1)).unwrap().velocity = Vec2::new(-1.0, 0.0);
        assert_eq!(world.momentum(), Vec2::new(1.0, 0.0));
        assert_eq!(world.kinetic_energy(), 2.5);
    }
}
