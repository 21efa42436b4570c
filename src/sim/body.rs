//! Circular bodies
//!
//! A body is a non-rotating circle. Mass 0 marks an immovable anchor: its
//! inverse mass is 0, so collision corrections and impulses never move it.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::input::DirectionalInput;
use super::vector::VectorExt;
use crate::error::ConfigError;

/// Stable handle to a body in the world roster (its insertion index)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BodyId(pub usize);

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Presentation color, carried for the renderer only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const RED: Color = Color::rgb(0xff, 0x00, 0x00);
    pub const GREEN: Color = Color::rgb(0x00, 0x80, 0x00);
    pub const BLUE: Color = Color::rgb(0x00, 0x00, 0xff);
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (leading `#` optional)
    pub fn from_hex(s: &str) -> Result<Self, ConfigError> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        let invalid = || ConfigError::InvalidColor(s.to_string());
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl TryFrom<String> for Color {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value)
    }
}

/// A dynamic or static circular body
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Thrust direction for the next integration; normalized when applied
    pub acceleration: Vec2,
    radius: f32,
    mass: f32,
    inverse_mass: f32,
    /// Coefficient of restitution in [0, 1]
    elasticity: f32,
    color: Color,
}

impl Body {
    /// Create a body at rest. `mass == 0` creates an immovable body.
    pub fn new(
        position: Vec2,
        radius: f32,
        mass: f32,
        elasticity: f32,
        color: Color,
    ) -> Result<Self, ConfigError> {
        if !position.is_finite() {
            return Err(ConfigError::NonFiniteVector("position"));
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ConfigError::InvalidRadius(radius));
        }
        // Tiny masses would make the inverse mass infinite
        if !mass.is_finite() || mass < 0.0 || (mass > 0.0 && !(1.0 / mass).is_finite()) {
            return Err(ConfigError::InvalidMass(mass));
        }
        if !(0.0..=1.0).contains(&elasticity) {
            return Err(ConfigError::ElasticityOutOfRange(elasticity));
        }

        Ok(Self {
            position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            radius,
            mass,
            inverse_mass: if mass == 0.0 { 0.0 } else { 1.0 / mass },
            elasticity,
            color,
        })
    }

    /// Set an initial velocity
    pub fn with_velocity(mut self, velocity: Vec2) -> Result<Self, ConfigError> {
        if !velocity.is_finite() {
            return Err(ConfigError::NonFiniteVector("velocity"));
        }
        self.velocity = velocity;
        Ok(self)
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    #[inline]
    pub fn inverse_mass(&self) -> f32 {
        self.inverse_mass
    }

    #[inline]
    pub fn elasticity(&self) -> f32 {
        self.elasticity
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// True for mass-0 anchors
    #[inline]
    pub fn is_static(&self) -> bool {
        self.inverse_mass == 0.0
    }

    /// Advance one step with linear drag.
    ///
    /// Order: normalize acceleration, add to velocity, apply drag, move.
    /// The thrust is unit length no matter how many directions are held,
    /// so diagonal movement is no faster than axis-aligned movement.
    /// Static bodies are integrated too; they only stay put because nothing
    /// gives them an acceleration or velocity.
    pub fn integrate(&mut self, drag_coefficient: f32) {
        self.velocity += self.acceleration.unit();
        self.velocity = self.velocity.scale_by(1.0 - drag_coefficient);
        self.position += self.velocity;
    }

    /// Set acceleration from held directions.
    ///
    /// Each active axis gets `±speed`; an axis with neither (or both)
    /// directions held is reset to exactly zero.
    pub fn apply_directional_input(&mut self, input: DirectionalInput, speed: f32) {
        self.acceleration = Vec2::new(
            axis(input.left, input.right, speed),
            // Screen coordinates: y grows downward
            axis(input.up, input.down, speed),
        );
    }

    /// Kinetic energy `½mv²` (zero for static bodies)
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.velocity.length_squared()
    }
}

fn axis(negative: bool, positive: bool, speed: f32) -> f32 {
    match (negative, positive) {
        (true, false) => -speed,
        (false, true) => speed,
        _ => 0.0,
    }
}
