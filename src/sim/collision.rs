//! Collision detection and response for circles and walls
//!
//! Every contact goes through the same three phases, one pair at a time:
//!
//! 1. **Detect**: build a `Contact` from the current positions
//! 2. **Penetration**: push the shapes apart so they are just touching
//! 3. **Impulse**: exchange velocity along the post-correction normal
//!
//! Pairs are resolved sequentially, not as a global solve, so the order in
//! which the caller visits pairs is part of the observable behavior.

use glam::Vec2;

use super::body::Body;
use super::vector::VectorExt;
use super::wall::Wall;

/// Result of a collision check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Whether the shapes overlap or touch
    pub hit: bool,
    /// Contact point on the second shape's surface
    pub point: Vec2,
    /// Unit normal pointing toward the first body's center
    /// (zero when the centers coincide)
    pub normal: Vec2,
    /// Overlap depth, zero when exactly touching
    pub penetration: f32,
}

impl Contact {
    pub fn miss() -> Self {
        Self {
            hit: false,
            point: Vec2::ZERO,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

// =============================================================================
// Circle vs circle
// =============================================================================

/// Check two circles for overlap. Exactly touching counts as a hit.
pub fn circle_contact(a: &Body, b: &Body) -> Contact {
    let offset = a.position - b.position;
    let distance = offset.length();
    let radii = a.radius() + b.radius();

    if distance > radii {
        return Contact::miss();
    }

    let normal = offset.unit();
    Contact {
        hit: true,
        point: b.position + normal * b.radius(),
        normal,
        penetration: radii - distance,
    }
}

/// Move both bodies apart along the contact normal, split by inverse mass.
///
/// A static body takes none of the correction; a dynamic body touching a
/// static one takes all of it. Coincident centers have no normal and get no
/// correction.
pub fn resolve_circle_penetration(a: &mut Body, b: &mut Body, contact: &Contact) {
    let total_inverse_mass = a.inverse_mass() + b.inverse_mass();
    if !contact.hit || total_inverse_mass == 0.0 {
        return;
    }

    let correction = contact.normal * (contact.penetration / total_inverse_mass);
    a.position += correction * a.inverse_mass();
    b.position -= correction * b.inverse_mass();
}

/// Exchange an impulse along the line of centers if the bodies approach.
///
/// Uses the least bouncy of the two elasticities. Returns whether an
/// impulse was applied.
pub fn resolve_circle_impulse(a: &mut Body, b: &mut Body) -> bool {
    let total_inverse_mass = a.inverse_mass() + b.inverse_mass();
    if total_inverse_mass == 0.0 {
        return false;
    }

    let normal = (a.position - b.position).unit();
    let separating_velocity = (a.velocity - b.velocity).dot(normal);
    if separating_velocity >= 0.0 {
        return false;
    }

    let restitution = a.elasticity().min(b.elasticity());
    let impulse = -separating_velocity * (1.0 + restitution) / total_inverse_mass;
    a.velocity += normal * (impulse * a.inverse_mass());
    b.velocity -= normal * (impulse * b.inverse_mass());
    true
}

/// Full detect → penetration → impulse pass for one body pair.
///
/// Returns whether the pair was in contact.
pub fn resolve_body_pair(a: &mut Body, b: &mut Body) -> bool {
    let contact = circle_contact(a, b);
    if !contact.hit {
        return false;
    }

    resolve_circle_penetration(a, b, &contact);
    let bounced = resolve_circle_impulse(a, b);
    log::trace!(
        "circle contact at {:?}: depth={:.3} normal={:?} impulse={}",
        contact.point,
        contact.penetration,
        contact.normal,
        bounced
    );
    true
}

// =============================================================================
// Circle vs wall
// =============================================================================

/// Check a body against a wall segment. Exactly touching counts as a hit.
pub fn wall_contact(body: &Body, wall: &Wall) -> Contact {
    let closest = wall.closest_point(body.position);
    let offset = body.position - closest;
    let distance = offset.length();

    if distance > body.radius() {
        return Contact::miss();
    }

    Contact {
        hit: true,
        point: closest,
        normal: offset.unit(),
        penetration: body.radius() - distance,
    }
}

/// Push the body out of the wall along the normal from the closest point.
///
/// A body centered exactly on the segment has no normal and is left alone.
pub fn resolve_wall_penetration(body: &mut Body, contact: &Contact) {
    if !contact.hit {
        return;
    }
    body.position += contact.normal * contact.penetration;
}

/// Reflect the body's approaching normal velocity, scaled by its own
/// elasticity. Returns whether the velocity changed.
pub fn resolve_wall_impulse(body: &mut Body, wall: &Wall) -> bool {
    let normal = (body.position - wall.closest_point(body.position)).unit();
    if body.velocity.dot(normal) >= 0.0 {
        return false;
    }
    body.velocity = reflect_velocity(body.velocity, normal, body.elasticity());
    true
}

/// Full detect → penetration → impulse pass for a body against a wall.
///
/// Returns whether the body was in contact with the wall.
pub fn resolve_body_wall(body: &mut Body, wall: &Wall) -> bool {
    let contact = wall_contact(body, wall);
    if !contact.hit {
        return false;
    }

    resolve_wall_penetration(body, &contact);
    let bounced = resolve_wall_impulse(body, wall);
    log::trace!(
        "wall contact at {:?}: depth={:.3} normal={:?} impulse={}",
        contact.point,
        contact.penetration,
        contact.normal,
        bounced
    );
    true
}

/// Reflect velocity off a rigid surface
///
/// v' = v - (1 + e)(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2, elasticity: f32) -> Vec2 {
    velocity - normal * (velocity.dot(normal) * (1.0 + elasticity))
}
