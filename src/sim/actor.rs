//! Actors: axis-aligned rectangles with velocity and a closed behavior variant.
//!
//! Behavior is a sum type rather than a trait object so the collision logic
//! in `level` and `tick` can match exhaustively; adding a variant is a
//! compile-visible change everywhere it matters.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::level::Grid;
use crate::consts::*;

/// Identity of an actor within its level. Allocated in spawn order, so id
/// order equals the parser's row-major scan order.
pub type ActorId = u32;

/// Id used for probe rectangles that are not part of any level.
pub const PROBE_ID: ActorId = ActorId::MAX;

/// Discriminator of an actor's variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActorKind {
    /// Plain rectangle with no behavior (probes, embedder-defined extras)
    Generic,
    Fireball,
    Coin,
    Player,
}

/// What a fireball does on a tick it would otherwise move into an obstacle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ObstacleResponse {
    /// Reverse velocity (horizontal and vertical fireballs)
    Bounce,
    /// Teleport back to the spawn cell, velocity unchanged (fire rain)
    Respawn { origin: Vec2 },
}

/// Per-variant state and per-tick motion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Behavior {
    /// No autonomous motion and no gameplay meaning
    Inert,
    /// No autonomous motion; movement comes from the embedder's input layer
    Player,
    Coin {
        /// Rest position the spring oscillates around
        anchor: Vec2,
        /// Current spring phase (radians)
        phase: f32,
    },
    Fireball { on_obstacle: ObstacleResponse },
}

/// A dynamic rectangular entity: player, coin, fireball, or a plain probe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,
    /// Top-left corner, in cell units
    pub pos: Vec2,
    /// Extent; non-negative in both axes
    pub size: Vec2,
    pub vel: Vec2,
    pub behavior: Behavior,
}

impl Actor {
    /// Plain inert actor. Spawned variants come from [`super::parse::Spawn`].
    pub fn new(id: ActorId, pos: Vec2, size: Vec2, vel: Vec2) -> Self {
        Self {
            id,
            pos,
            size,
            vel,
            behavior: Behavior::Inert,
        }
    }

    /// Stationary query rectangle for [`super::Level::actor_at`].
    pub fn probe(pos: Vec2, size: Vec2) -> Self {
        Self::new(PROBE_ID, pos, size, Vec2::ZERO)
    }

    pub fn kind(&self) -> ActorKind {
        match self.behavior {
            Behavior::Inert => ActorKind::Generic,
            Behavior::Player => ActorKind::Player,
            Behavior::Coin { .. } => ActorKind::Coin,
            Behavior::Fireball { .. } => ActorKind::Fireball,
        }
    }

    // Bounding edges
    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Strict rectangle overlap: rectangles that merely share an edge do not
    /// intersect, and an actor never intersects itself.
    pub fn overlaps(&self, other: &Actor) -> bool {
        if self.id == other.id {
            return false;
        }
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Advance this actor by `dt` time units. Terrain queries go through
    /// `grid`; actor-vs-actor contact is resolved afterwards by `tick`.
    pub fn act(&mut self, dt: f32, grid: &Grid) {
        match &mut self.behavior {
            Behavior::Inert | Behavior::Player => {}
            Behavior::Coin { anchor, phase } => {
                *phase += SPRING_SPEED * dt;
                let offset = Vec2::new(0.0, phase.sin() * SPRING_DIST);
                self.pos = *anchor + offset;
            }
            Behavior::Fireball { on_obstacle } => {
                let response = *on_obstacle;
                let next = self.pos + self.vel * dt;
                if grid.obstacle_at(next, self.size).is_some() {
                    match response {
                        ObstacleResponse::Bounce => self.vel = -self.vel,
                        ObstacleResponse::Respawn { origin } => self.pos = origin,
                    }
                } else {
                    self.pos = next;
                }
            }
        }
    }
}
