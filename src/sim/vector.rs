//! 2D vector algebra
//!
//! The engine works on `glam::Vec2` directly. Operator overloads cover
//! add/subtract/scale; `VectorExt` adds the few operations whose edge-case
//! behavior matters to collision response (zero-safe normalization and the
//! unit perpendicular).

use glam::Vec2;

/// Value type used for every position, velocity and acceleration.
pub type Vector2 = Vec2;

/// Engine-specific vector operations.
///
/// All of these are total: degenerate inputs produce the zero vector
/// instead of NaN.
pub trait VectorExt: Sized {
    /// Unit vector in the same direction, or exactly zero for a zero (or
    /// non-finite) vector
    fn unit(self) -> Self;

    /// Multiply both components by `scalar`
    fn scale_by(self, scalar: f32) -> Self;

    /// The vector rotated 90° counter-clockwise, `(-y, x)`, normalized
    fn perpendicular(self) -> Self;

    /// Euclidean distance between two points
    fn distance_to(self, other: Self) -> f32;
}

impl VectorExt for Vec2 {
    #[inline]
    fn unit(self) -> Self {
        // Scale the largest component to ±1 first so the length can neither
        // overflow nor underflow
        let largest = self.abs().max_element();
        if largest == 0.0 || !self.is_finite() {
            return Vec2::ZERO;
        }
        let scaled = self / largest;
        scaled / scaled.length()
    }

    #[inline]
    fn scale_by(self, scalar: f32) -> Self {
        self * scalar
    }

    #[inline]
    fn perpendicular(self) -> Self {
        Vec2::new(-self.y, self.x).unit()
    }

    #[inline]
    fn distance_to(self, other: Self) -> f32 {
        (self - other).length()
    }
}
