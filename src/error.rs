//! Error types
//!
//! Stepping the simulation never fails. Only building a world (bodies,
//! walls, tuning values, scenario files) can be rejected.

use thiserror::Error;

use crate::sim::BodyId;

/// Invalid configuration rejected at construction time
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("drag coefficient must be within [0, 1], got {0}")]
    DragOutOfRange(f32),

    #[error("thrust must be finite and non-negative, got {0}")]
    InvalidThrust(f32),

    #[error("radius must be finite and greater than zero, got {0}")]
    InvalidRadius(f32),

    #[error("mass must be zero or a positive value with a finite inverse, got {0}")]
    InvalidMass(f32),

    #[error("elasticity must be within [0, 1], got {0}")]
    ElasticityOutOfRange(f32),

    #[error("{0} must be a finite vector")]
    NonFiniteVector(&'static str),

    #[error("spawn bounds must be finite and non-negative, got {width} x {height}")]
    InvalidBounds { width: f32, height: f32 },

    #[error("controlled body index {index} is out of range ({count} bodies)")]
    ControlledOutOfRange { index: usize, count: usize },

    #[error("invalid color {0:?}, expected #rrggbb")]
    InvalidColor(String),

    #[error("failed to parse scenario: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),
}

/// Invalid request against a running world
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    #[error("no body with id {0}")]
    UnknownBody(BodyId),
}
