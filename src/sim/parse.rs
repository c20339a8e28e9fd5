//! Text level plans → [`Level`]s.
//!
//! Terrain symbols are fixed (`x` wall, `!` lava). Actor symbols come from
//! an externally supplied table mapping characters to spawn templates. Any
//! other character is inert: no terrain, no actor.

use std::collections::HashMap;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::actor::{Actor, ActorId, Behavior, ObstacleResponse};
use super::level::{Grid, Level, Terrain};
use crate::consts::*;

/// Spawn template for one actor symbol.
///
/// A closed set: each variant carries the fixed size, offset, and velocity
/// of that actor family, so a plan character fully determines the actor it
/// produces (up to the coin's random spring phase).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Spawn {
    Player,
    Coin,
    HorizontalFireball,
    VerticalFireball,
    FireRain,
}

impl Spawn {
    /// Instantiate at grid cell `cell`, applying this variant's spawn
    /// offset, size, and velocity. Coins draw their initial spring phase
    /// from `rng`.
    pub fn instantiate<R: Rng>(self, id: ActorId, cell: Vec2, rng: &mut R) -> Actor {
        match self {
            Spawn::Player => Actor {
                id,
                pos: cell + PLAYER_OFFSET,
                size: PLAYER_SIZE,
                vel: Vec2::ZERO,
                behavior: Behavior::Player,
            },
            Spawn::Coin => {
                let pos = cell + COIN_OFFSET;
                Actor {
                    id,
                    pos,
                    size: COIN_SIZE,
                    vel: Vec2::ZERO,
                    behavior: Behavior::Coin {
                        anchor: pos,
                        phase: rng.random_range(0.0..std::f32::consts::TAU),
                    },
                }
            }
            Spawn::HorizontalFireball => {
                fireball(id, cell, HORIZONTAL_FIREBALL_SPEED, ObstacleResponse::Bounce)
            }
            Spawn::VerticalFireball => {
                fireball(id, cell, VERTICAL_FIREBALL_SPEED, ObstacleResponse::Bounce)
            }
            Spawn::FireRain => fireball(
                id,
                cell,
                FIRE_RAIN_SPEED,
                ObstacleResponse::Respawn { origin: cell },
            ),
        }
    }
}

fn fireball(id: ActorId, pos: Vec2, vel: Vec2, on_obstacle: ObstacleResponse) -> Actor {
    Actor {
        id,
        pos,
        size: FIREBALL_SIZE,
        vel,
        behavior: Behavior::Fireball { on_obstacle },
    }
}

/// Translates textual level plans into [`Level`]s.
#[derive(Debug, Clone)]
pub struct LevelParser {
    symbols: HashMap<char, Spawn>,
}

impl LevelParser {
    pub fn new(symbols: HashMap<char, Spawn>) -> Self {
        Self { symbols }
    }

    /// The fixed terrain mapping. Extending the world happens through the
    /// actor table, never by overriding terrain symbols.
    pub fn terrain_from_symbol(c: char) -> Option<Terrain> {
        match c {
            'x' => Some(Terrain::Wall),
            '!' => Some(Terrain::Lava),
            _ => None,
        }
    }

    pub fn actor_from_symbol(&self, c: char) -> Option<Spawn> {
        self.symbols.get(&c).copied()
    }

    /// Map every character of every row through the terrain table. Rows may
    /// have different lengths; the grid computes its width as the maximum.
    pub fn create_grid(&self, rows: &[&str]) -> Grid {
        Grid::new(
            rows.iter()
                .map(|row| row.chars().map(Self::terrain_from_symbol).collect())
                .collect(),
        )
    }

    /// Spawn one actor per registered symbol, scanning rows top to bottom
    /// and characters left to right. The scan fixes the actor list order,
    /// and with it the tie-break of [`Level::actor_at`].
    pub fn create_actors<R: Rng>(&self, rows: &[&str], rng: &mut R) -> Vec<Actor> {
        let mut actors = Vec::new();
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                if let Some(spawn) = self.actor_from_symbol(c) {
                    let id = actors.len() as ActorId;
                    let cell = Vec2::new(x as f32, y as f32);
                    actors.push(spawn.instantiate(id, cell, rng));
                }
            }
        }
        actors
    }

    /// Build a complete level from a plan.
    pub fn parse<R: Rng>(&self, rows: &[&str], rng: &mut R) -> Level {
        let grid = self.create_grid(rows);
        let actors = self.create_actors(rows, rng);
        log::debug!(
            "parsed level {}x{} with {} actors",
            grid.width(),
            grid.height(),
            actors.len()
        );
        Level::new(grid, actors)
    }
}
