//! Static line-segment walls

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::vector::VectorExt;
use crate::error::ConfigError;

/// An immovable line segment. Behaves as infinitely massive and rigid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    start: Vec2,
    end: Vec2,
}

impl Wall {
    pub fn new(start: Vec2, end: Vec2) -> Result<Self, ConfigError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(ConfigError::NonFiniteVector("wall endpoint"));
        }
        Ok(Self { start, end })
    }

    #[inline]
    pub fn start(&self) -> Vec2 {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Vec2 {
        self.end
    }

    /// Unit direction from start to end (zero for a zero-length wall)
    pub fn direction(&self) -> Vec2 {
        (self.end - self.start).unit()
    }

    pub fn length(&self) -> f32 {
        self.start.distance_to(self.end)
    }

    /// Closest point on the segment to `point`.
    ///
    /// Projections before the start or past the end clamp to that endpoint.
    /// A zero-length wall is treated as a single point.
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        let segment = self.end - self.start;
        let len_sq = segment.length_squared();
        if len_sq == 0.0 {
            return self.start;
        }

        let t = (point - self.start).dot(segment) / len_sq;
        if t <= 0.0 {
            self.start
        } else if t >= 1.0 {
            self.end
        } else {
            self.start + segment * t
        }
    }
}
