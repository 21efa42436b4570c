//! World tuning and scenario files
//!
//! Scenarios are plain JSON. Every value is validated when the scenario is
//! turned into a `World`, so a bad file fails up front instead of producing
//! NaNs mid-run.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::{Body, BodyId, Color, Wall, World};

/// Global tuning applied to every body every step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Fraction of velocity removed per step, in [0, 1]
    pub drag_coefficient: f32,
    /// Per-axis acceleration set by directional input
    pub thrust: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            drag_coefficient: DEFAULT_DRAG,
            thrust: DEFAULT_THRUST,
        }
    }
}

impl WorldConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.drag_coefficient) {
            return Err(ConfigError::DragOutOfRange(self.drag_coefficient));
        }
        if !self.thrust.is_finite() || self.thrust < 0.0 {
            return Err(ConfigError::InvalidThrust(self.thrust));
        }
        Ok(())
    }
}

/// Initial state of one body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyConfig {
    pub position: [f32; 2],
    #[serde(default)]
    pub velocity: [f32; 2],
    pub radius: f32,
    /// 0 makes the body immovable
    pub mass: f32,
    #[serde(default = "default_elasticity")]
    pub elasticity: f32,
    #[serde(default)]
    pub color: Color,
}

fn default_elasticity() -> f32 {
    1.0
}

impl BodyConfig {
    pub fn build(&self) -> Result<Body, ConfigError> {
        Body::new(
            Vec2::from(self.position),
            self.radius,
            self.mass,
            self.elasticity,
            self.color,
        )?
        .with_velocity(Vec2::from(self.velocity))
    }
}

/// A wall segment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallConfig {
    pub start: [f32; 2],
    pub end: [f32; 2],
}

impl WallConfig {
    pub fn build(&self) -> Result<Wall, ConfigError> {
        Wall::new(Vec2::from(self.start), Vec2::from(self.end))
    }
}

/// A complete starting setup: tuning, bodies, walls and the controlled body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub config: WorldConfig,
    #[serde(default)]
    pub bodies: Vec<BodyConfig>,
    #[serde(default)]
    pub walls: Vec<WallConfig>,
    /// Index into `bodies` of the body that receives directional input
    #[serde(default)]
    pub controlled: Option<usize>,
}

impl Scenario {
    /// Parse a scenario from JSON text
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a scenario file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let scenario = Self::from_json(&json)?;
        log::info!(
            "Loaded scenario {} ({} bodies, {} walls)",
            path.display(),
            scenario.bodies.len(),
            scenario.walls.len()
        );
        Ok(scenario)
    }

    /// Read a scenario file, falling back to the default arena if it does
    /// not exist. Unreadable or invalid files are still errors.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            log::warn!("Scenario {} not found, using default arena", path.display());
            return Ok(Self::default_arena(ARENA_WIDTH, ARENA_HEIGHT));
        }
        Self::load(path)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// A closed `width × height` box with the two starter bodies: a red one
    /// at (100, 100) under control and a smaller blue one at (200, 200).
    pub fn default_arena(width: f32, height: f32) -> Self {
        let corners = [[0.0, 0.0], [width, 0.0], [width, height], [0.0, height]];
        let walls = (0..corners.len())
            .map(|i| WallConfig {
                start: corners[i],
                end: corners[(i + 1) % corners.len()],
            })
            .collect();

        let starter = |position: [f32; 2], radius: f32, color: Color| BodyConfig {
            position,
            velocity: [0.0, 0.0],
            radius,
            mass: radius,
            elasticity: 1.0,
            color,
        };

        Self {
            config: WorldConfig::default(),
            bodies: vec![
                starter([100.0, 100.0], 20.0, Color::RED),
                starter([200.0, 200.0], 10.0, Color::BLUE),
            ],
            walls,
            controlled: Some(0),
        }
    }

    /// Validate everything and build the world
    pub fn build(&self) -> Result<World, ConfigError> {
        let mut world = World::new(self.config)?;
        for body in &self.bodies {
            world.add_body(body.build()?)?;
        }
        for wall in &self.walls {
            world.add_wall(wall.build()?);
        }
        if let Some(index) = self.controlled {
            world
                .set_controlled(BodyId(index))
                .map_err(|_| ConfigError::ControlledOutOfRange {
                    index,
                    count: self.bodies.len(),
                })?;
        }
        Ok(world)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(WorldConfig::default().validate().is_ok());
    }

    #[test]
    fn test_drag_out_of_range() {
        let config = WorldConfig {
            drag_coefficient: 1.5,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::DragOutOfRange(_))));

        let config = WorldConfig {
            drag_coefficient: f32::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_arena() {
        let world = Scenario::default_arena(800.0, 600.0).build().unwrap();
        assert_eq!(world.bodies().len(), 2);
        assert_eq!(world.walls().len(), 4);
        assert_eq!(world.controlled(), Some(BodyId(0)));
        assert_eq!(world.bodies()[0].color(), Color::RED);
        assert_eq!(world.walls()[3].end(), Vec2::ZERO);
    }

    #[test]
    fn test_scenario_from_json() {
        let json = r##"{
            "config": { "drag_coefficient": 0.1 },
            "bodies": [
                { "position": [10, 20], "radius": 5, "mass": 2, "color": "#00ff00" },
                { "position": [50, 20], "velocity": [-1, 0], "radius": 5, "mass": 0, "elasticity": 0.5 }
            ],
            "walls": [ { "start": [0, 0], "end": [100, 0] } ],
            "controlled": 0
        }"##;

        let scenario = Scenario::from_json(json).unwrap();
        assert_eq!(scenario.config.drag_coefficient, 0.1);
        assert_eq!(scenario.config.thrust, DEFAULT_THRUST);

        let world = scenario.build().unwrap();
        assert_eq!(world.bodies()[0].color(), Color::rgb(0, 255, 0));
        assert_eq!(world.bodies()[0].elasticity(), 1.0);
        assert!(world.bodies()[1].is_static());
        assert_eq!(world.bodies()[1].velocity, Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn test_scenario_rejects_bad_values() {
        let bad_radius = r#"{ "bodies": [ { "position": [0, 0], "radius": -1, "mass": 1 } ] }"#;
        assert!(matches!(
            Scenario::from_json(bad_radius).unwrap().build(),
            Err(ConfigError::InvalidRadius(_))
        ));

        let bad_control = r#"{ "bodies": [], "controlled": 3 }"#;
        assert!(matches!(
            Scenario::from_json(bad_control).unwrap().build(),
            Err(ConfigError::ControlledOutOfRange { index: 3, count: 0 })
        ));

        let bad_color = r#"{ "bodies": [ { "position": [0, 0], "radius": 1, "mass": 1, "color": "red" } ] }"#;
        assert!(matches!(Scenario::from_json(bad_color), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_scenario_json_roundtrip_keeps_colors() {
        let scenario = Scenario::default_arena(400.0, 300.0);
        let json = scenario.to_json().unwrap();
        assert!(json.contains("#ff0000"));
        let parsed = Scenario::from_json(&json).unwrap();
        assert_eq!(parsed.bodies[1].color, Color::BLUE);
    }

    #[test]
    fn test_bundled_scenario_builds() {
        let scenario = Scenario::from_json(include_str!("../scenarios/anchor.json")).unwrap();
        let world = scenario.build().unwrap();
        assert_eq!(world.bodies().len(), 3);
        assert_eq!(world.walls().len(), 5);
        assert!(world.bodies()[1].is_static());
        assert_eq!(world.config().drag_coefficient, 0.02);
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            Scenario::load("/nonexistent/scenario.json"),
            Err(ConfigError::Io(_))
        ));

        let fallback = Scenario::load_or_default("/nonexistent/scenario.json").unwrap();
        assert_eq!(fallback.bodies.len(), 2);
        assert_eq!(fallback.walls[1].start, [ARENA_WIDTH, 0.0]);
    }
}
