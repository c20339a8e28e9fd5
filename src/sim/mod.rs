//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and deterministic:
//! - Tick-driven only; the embedder owns the clock
//! - Seeded RNG only (the coin spring phase is the single random input)
//! - Stable actor order (parser scan order, ids ascending)
//! - No rendering or platform dependencies

pub mod actor;
pub mod level;
pub mod parse;
pub mod tick;

pub use actor::{Actor, ActorId, ActorKind, Behavior, ObstacleResponse};
pub use level::{Contact, Grid, Level, Status, Terrain};
pub use parse::{LevelParser, Spawn};
pub use tick::tick;
