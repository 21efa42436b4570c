//! Circle Sim - a 2D rigid-circle physics engine
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bodies, walls, collisions, stepping)
//! - `config`: World tuning and JSON scenario files
//! - `spawner`: Seeded random body generation
//! - `error`: Configuration errors

pub mod config;
pub mod error;
pub mod sim;
pub mod spawner;

pub use config::{Scenario, WorldConfig};
pub use error::{ConfigError, SimError};
pub use spawner::Spawner;

/// Engine configuration constants
pub mod consts {
    /// Fraction of velocity lost per step
    pub const DEFAULT_DRAG: f32 = 0.05;
    /// Per-axis acceleration set by held direction keys
    pub const DEFAULT_THRUST: f32 = 1.0;

    /// Default arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Random spawn ranges
    pub const SPAWN_MIN_RADIUS: f32 = 5.0;
    pub const SPAWN_MAX_RADIUS: f32 = 30.0;
    pub const SPAWN_MIN_ELASTICITY: f32 = 0.5;
}
