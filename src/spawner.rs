//! Seeded random body spawner
//!
//! Produces bodies with random size, elasticity and color inside a
//! rectangular area. The same seed always yields the same bodies.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::{Body, BodyId, Color, World};

pub struct Spawner {
    rng: Pcg32,
    /// Spawn area, from the origin to `bounds`
    bounds: Vec2,
}

impl Spawner {
    pub fn new(seed: u64, bounds: Vec2) -> Result<Self, ConfigError> {
        if !bounds.is_finite() || bounds.min_element() < 0.0 {
            return Err(ConfigError::InvalidBounds {
                width: bounds.x,
                height: bounds.y,
            });
        }
        Ok(Self {
            rng: Pcg32::seed_from_u64(seed),
            bounds,
        })
    }

    /// A random dynamic body fully inside the spawn area when it fits
    pub fn spawn_body(&mut self) -> Result<Body, ConfigError> {
        let radius = self.rng.random_range(SPAWN_MIN_RADIUS..SPAWN_MAX_RADIUS);
        let position = Vec2::new(
            self.coordinate(radius, self.bounds.x),
            self.coordinate(radius, self.bounds.y),
        );
        let elasticity = self.rng.random_range(SPAWN_MIN_ELASTICITY..=1.0);
        let color = Color::rgb(self.rng.random(), self.rng.random(), self.rng.random());

        Body::new(position, radius, radius, elasticity, color)
    }

    /// Insert `count` random bodies. Call between steps only.
    pub fn populate(&mut self, world: &mut World, count: usize) -> Result<Vec<BodyId>, ConfigError> {
        let ids = (0..count)
            .map(|_| self.spawn_body().and_then(|body| world.add_body(body)))
            .collect::<Result<Vec<_>, ConfigError>>()?;
        log::debug!("Spawned {} bodies", ids.len());
        Ok(ids)
    }

    fn coordinate(&mut self, radius: f32, extent: f32) -> f32 {
        if extent <= 2.0 * radius {
            return extent / 2.0;
        }
        self.rng.random_range(radius..=extent - radius)
    }
}
