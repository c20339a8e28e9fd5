//! Per-frame orchestration.
//!
//! The embedder owns timing and input: each frame it moves the player
//! through [`Level::player_mut`] (reporting any lava it runs the player
//! into via [`Level::player_touched`]), then calls [`tick`] with the
//! elapsed time, and stops once [`Level::is_finished`] reports true.

use super::actor::ActorKind;
use super::level::{Contact, Level};

/// Advance the level by `dt` time units.
///
/// Acts every actor in list order, then resolves contacts against the
/// player: the first overlapping actor is reported (fireball loses, coin
/// collects), and the terrain under the player's rectangle is reported as
/// well (lava loses, wall is inert). Actors keep animating after the
/// outcome is decided, while the finish delay counts down.
pub fn tick(level: &mut Level, dt: f32) {
    {
        let Level { grid, actors, .. } = level;
        for actor in actors.iter_mut() {
            actor.act(dt, grid);
        }
    }

    if let Some(player) = level.player().copied() {
        let touched = level.actor_at(&player).map(|a| (a.kind(), a.id));
        match touched {
            Some((ActorKind::Fireball, _)) => level.player_touched(Contact::Fireball, None),
            Some((ActorKind::Coin, id)) => level.player_touched(Contact::Coin, Some(id)),
            _ => {}
        }

        if let Some(terrain) = level.obstacle_at(player.pos, player.size) {
            level.player_touched(terrain.into(), None);
        }
    }

    if level.status.is_terminal() {
        level.finish_delay -= dt;
    }
}
