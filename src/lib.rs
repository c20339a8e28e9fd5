//! Lava Leap - a tile-based platformer simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (level model, collision queries, tick loop)
//! - `levels`: Built-in campaign plans and the standard symbol table
//!
//! Rendering, input devices, and audio belong to the embedding application.
//! The embedder parses a plan with [`sim::LevelParser`], moves the player
//! through [`sim::Level::player_mut`], advances the world with [`sim::tick`],
//! and reads [`sim::Level::status`] to decide next-level or game-over flow.

pub mod levels;
pub mod sim;

pub use sim::{Actor, ActorKind, Behavior, Contact, Grid, Level, LevelParser, Spawn, Status, Terrain, tick};

/// Game tuning constants
pub mod consts {
    use glam::Vec2;

    /// Horizontal fireball velocity (cells per time unit)
    pub const HORIZONTAL_FIREBALL_SPEED: Vec2 = Vec2::new(2.0, 0.0);
    /// Vertical fireball velocity
    pub const VERTICAL_FIREBALL_SPEED: Vec2 = Vec2::new(0.0, 2.0);
    /// Fire rain fall velocity
    pub const FIRE_RAIN_SPEED: Vec2 = Vec2::new(0.0, 3.0);
    /// Bounding box shared by every fireball variant
    pub const FIREBALL_SIZE: Vec2 = Vec2::new(1.0, 1.0);

    /// Coin spawn offset inside its grid cell
    pub const COIN_OFFSET: Vec2 = Vec2::new(0.2, 0.1);
    pub const COIN_SIZE: Vec2 = Vec2::new(0.6, 0.6);
    /// Spring phase advance per time unit
    pub const SPRING_SPEED: f32 = 8.0;
    /// Spring oscillation amplitude (cells)
    pub const SPRING_DIST: f32 = 0.07;

    /// Player spawn offset (the sprite is half a cell taller than its cell)
    pub const PLAYER_OFFSET: Vec2 = Vec2::new(0.0, -0.5);
    pub const PLAYER_SIZE: Vec2 = Vec2::new(0.8, 1.5);

    /// Grace period after the outcome is decided, in time units, so the
    /// embedder can let the final animation play out
    pub const FINISH_DELAY: f32 = 1.0;
}
