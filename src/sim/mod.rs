//! Deterministic simulation module
//!
//! The physics engine proper. Pure and single-threaded:
//! - One step runs to completion before the next starts
//! - Stable iteration order (roster insertion order)
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod input;
pub mod state;
pub mod tick;
pub mod vector;
pub mod wall;

pub use body::{Body, BodyId, Color};
pub use collision::{Contact, circle_contact, resolve_body_pair, resolve_body_wall, wall_contact};
pub use input::{DirectionalInput, InputState, Key};
pub use state::{BodySnapshot, World, WorldSnapshot};
pub use tick::{StepStats, step};
pub use vector::{Vector2, VectorExt};
pub use wall::Wall;
