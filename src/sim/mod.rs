//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One call to `tick` per display frame
//! - Seeded RNG only
//! - Stable iteration order (insertion order, removal keeps relative order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{CollisionReport, Rect, rects_overlap, resolve_collisions};
pub use spawn::{SpawnReport, spawn_entities};
pub use state::{Coin, FieldEntity, GameState, Motion, Obstacle, ObstacleKind, Player};
pub use tick::{FrameStatus, TickInput, tick};
