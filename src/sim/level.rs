//! Level state: the static terrain grid, the actor list, and outcome tracking.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::actor::{Actor, ActorId, ActorKind};
use crate::consts::FINISH_DELAY;

/// Static per-cell obstacle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Terrain {
    /// Solid; blocks movement
    Wall,
    /// Lethal to the player, bounces fireballs like any obstacle
    Lava,
}

/// Outcome state of a level. Moves from `Playing` to a terminal value at
/// most once and never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Playing,
    Won,
    Lost,
}

impl Status {
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::Playing)
    }
}

/// What the player came into contact with, as reported to
/// [`Level::player_touched`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Contact {
    /// Inert contact; reported by movement code but changes nothing
    Wall,
    Lava,
    Fireball,
    Coin,
}

impl From<Terrain> for Contact {
    fn from(terrain: Terrain) -> Self {
        match terrain {
            Terrain::Wall => Contact::Wall,
            Terrain::Lava => Contact::Lava,
        }
    }
}

/// The static obstacle grid.
///
/// Rows may be jagged; a cell beyond the end of a short row reads as empty.
/// `width` is the longest row, `height` the number of rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    rows: Vec<Vec<Option<Terrain>>>,
    width: usize,
    height: usize,
}

impl Grid {
    pub fn new(rows: Vec<Vec<Option<Terrain>>>) -> Self {
        let height = rows.len();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        Self {
            rows,
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Terrain at a single cell; empty outside any row.
    pub fn cell(&self, x: usize, y: usize) -> Option<Terrain> {
        self.rows.get(y).and_then(|row| row.get(x)).copied().flatten()
    }

    /// First obstacle covered by the rectangle `[pos, pos + size]`.
    ///
    /// The covered cell range floors the top/left bound and ceils the
    /// bottom/right bound. The world is solid wall beyond the left, right,
    /// and top edges; past the bottom edge everything is lava, so falling
    /// out of the level is lethal rather than blocking. Inside the grid,
    /// cells are scanned in row-major order and the first non-empty one
    /// wins.
    pub fn obstacle_at(&self, pos: Vec2, size: Vec2) -> Option<Terrain> {
        let left = pos.x.floor() as i64;
        let right = (pos.x + size.x).ceil() as i64;
        let top = pos.y.floor() as i64;
        let bottom = (pos.y + size.y).ceil() as i64;

        if left < 0 || right > self.width as i64 || top < 0 {
            return Some(Terrain::Wall);
        }
        if bottom > self.height as i64 {
            return Some(Terrain::Lava);
        }

        for y in top..bottom {
            for x in left..right {
                if let Some(terrain) = self.cell(x as usize, y as usize) {
                    return Some(terrain);
                }
            }
        }
        None
    }
}

/// A running level: terrain, actors, and the win/loss state machine.
///
/// The level owns its grid and actor list outright; embedders read them
/// through [`Level::grid`] and [`Level::actors`] and mutate the world only
/// through the player handle and the collision entry points below.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub(crate) grid: Grid,
    pub(crate) actors: Vec<Actor>,
    pub(crate) player_id: Option<ActorId>,
    pub(crate) status: Status,
    pub(crate) finish_delay: f32,
}

impl Level {
    /// Build a level from a grid and an actor list. The first actor of kind
    /// player (in list order) becomes the canonical player; any later
    /// duplicates stay in the list but are not tracked.
    pub fn new(grid: Grid, actors: Vec<Actor>) -> Self {
        let player_id = actors
            .iter()
            .find(|a| a.kind() == ActorKind::Player)
            .map(|a| a.id);
        Self {
            grid,
            actors,
            player_id,
            status: Status::Playing,
            finish_delay: FINISH_DELAY,
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    #[inline]
    pub fn finish_delay(&self) -> f32 {
        self.finish_delay
    }

    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actors.iter().find(|a| a.id == id)
    }

    /// The canonical player, if the plan spawned one.
    pub fn player(&self) -> Option<&Actor> {
        self.player_id.and_then(|id| self.actor(id))
    }

    /// Mutable player handle for the embedder's movement code.
    pub fn player_mut(&mut self) -> Option<&mut Actor> {
        let id = self.player_id?;
        self.actors.iter_mut().find(|a| a.id == id)
    }

    /// True once the outcome is decided and the grace period has run out.
    pub fn is_finished(&self) -> bool {
        self.status.is_terminal() && self.finish_delay < 0.0
    }

    /// First actor in list order whose bounding box intersects `candidate`.
    /// The candidate itself is never returned.
    pub fn actor_at(&self, candidate: &Actor) -> Option<&Actor> {
        self.actors.iter().find(|a| a.overlaps(candidate))
    }

    /// Terrain query for the rectangle `[pos, pos + size]`; see
    /// [`Grid::obstacle_at`].
    pub fn obstacle_at(&self, pos: Vec2, size: Vec2) -> Option<Terrain> {
        self.grid.obstacle_at(pos, size)
    }

    /// Remove the actor with this id; no-op if absent.
    pub fn remove_actor(&mut self, id: ActorId) {
        if let Some(i) = self.actors.iter().position(|a| a.id == id) {
            self.actors.remove(i);
        }
    }

    /// True iff no remaining actor has the given kind.
    pub fn no_more_actors(&self, kind: ActorKind) -> bool {
        !self.actors.iter().any(|a| a.kind() == kind)
    }

    /// Collision-resolution entry point, called by `tick` or by the
    /// embedder's movement code when the player makes contact.
    ///
    /// One-shot: the first terminal determination wins and every later
    /// report is ignored. Lava and fireballs lose the level. A coin contact
    /// removes that coin and wins the level when it was the last one. Wall
    /// contact changes nothing.
    pub fn player_touched(&mut self, contact: Contact, actor: Option<ActorId>) {
        if self.status.is_terminal() {
            return;
        }
        match contact {
            Contact::Lava | Contact::Fireball => {
                log::info!("level lost: player touched {contact:?}");
                self.status = Status::Lost;
            }
            Contact::Coin => {
                let touched_coin = actor.filter(|&id| {
                    self.actor(id).map(Actor::kind) == Some(ActorKind::Coin)
                });
                if let Some(id) = touched_coin {
                    self.remove_actor(id);
                    if self.no_more_actors(ActorKind::Coin) {
                        log::info!("level won: last coin collected");
                        self.status = Status::Won;
                    }
                }
            }
            Contact::Wall => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levels::standard_symbols;
    use crate::sim::parse::LevelParser;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn parse_fixture(rows: &[&str]) -> Level {
        LevelParser::new(standard_symbols()).parse(rows, &mut Pcg32::seed_from_u64(7))
    }

    fn grid_from(rows: &[&str]) -> Grid {
        Grid::new(
            rows.iter()
                .map(|row| {
                    row.chars()
                        .map(|c| match c {
                            'x' => Some(Terrain::Wall),
                            '!' => Some(Terrain::Lava),
                            _ => None,
                        })
                        .collect()
                })
                .collect(),
        )
    }

    #[test]
    fn grid_dimensions_from_jagged_rows() {
        let grid = grid_from(&["xx", "xxxx", "x"]);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        // Cells past the end of a short row are empty, not wall
        assert_eq!(grid.cell(3, 0), None);
        assert_eq!(grid.cell(3, 1), Some(Terrain::Wall));
    }

    #[test]
    fn out_of_bounds_sides_and_top_are_wall() {
        let grid = grid_from(&["   ", "   ", "   "]);
        let unit = Vec2::ONE;
        assert_eq!(grid.obstacle_at(Vec2::new(-0.5, 1.0), unit), Some(Terrain::Wall));
        assert_eq!(grid.obstacle_at(Vec2::new(2.5, 1.0), unit), Some(Terrain::Wall));
        assert_eq!(grid.obstacle_at(Vec2::new(1.0, -0.5), unit), Some(Terrain::Wall));
    }

    #[test]
    fn below_the_bottom_is_lava() {
        let grid = grid_from(&["   ", "   ", "   "]);
        assert_eq!(
            grid.obstacle_at(Vec2::new(1.0, 2.5), Vec2::ONE),
            Some(Terrain::Lava)
        );
    }

    #[test]
    fn side_wall_wins_over_bottom_lava() {
        // Both out on the left and below: the wall check runs first
        let grid = grid_from(&["   "]);
        assert_eq!(
            grid.obstacle_at(Vec2::new(-1.0, 5.0), Vec2::ONE),
            Some(Terrain::Wall)
        );
    }

    #[test]
    fn first_covered_cell_in_row_major_order_wins() {
        let grid = grid_from(&["  ", "!x"]);
        // Rectangle covering all four cells: (0,1) lava comes before (1,1) wall
        assert_eq!(
            grid.obstacle_at(Vec2::ZERO, Vec2::new(2.0, 2.0)),
            Some(Terrain::Lava)
        );
    }

    #[test]
    fn empty_area_has_no_obstacle() {
        let grid = grid_from(&["x  ", "   ", "  x"]);
        assert_eq!(grid.obstacle_at(Vec2::new(1.0, 1.0), Vec2::ONE), None);
    }

    #[test]
    fn fractional_rectangle_covers_every_touched_cell() {
        let grid = grid_from(&["   ", " x ", "   "]);
        // Overlaps cell (1,1) only fractionally, but floor/ceil covers it
        assert_eq!(
            grid.obstacle_at(Vec2::new(0.5, 0.5), Vec2::ONE),
            Some(Terrain::Wall)
        );
    }

    #[test]
    fn actor_at_returns_first_in_list_order() {
        let actors = vec![
            Actor::new(0, Vec2::new(5.0, 5.0), Vec2::ONE, Vec2::ZERO),
            Actor::new(1, Vec2::new(1.0, 1.0), Vec2::ONE, Vec2::ZERO),
            Actor::new(2, Vec2::new(1.5, 1.5), Vec2::ONE, Vec2::ZERO),
        ];
        let level = Level::new(grid_from(&["   "]), actors);

        let probe = Actor::probe(Vec2::new(1.2, 1.2), Vec2::ONE);
        assert_eq!(level.actor_at(&probe).map(|a| a.id), Some(1));
    }

    #[test]
    fn actor_at_excludes_the_candidate_itself() {
        let actors = vec![Actor::new(0, Vec2::ONE, Vec2::ONE, Vec2::ZERO)];
        let level = Level::new(grid_from(&["   "]), actors.clone());
        assert!(level.actor_at(&actors[0]).is_none());
    }

    #[test]
    fn remove_actor_is_identity_based_and_idempotent() {
        let actors = vec![
            Actor::new(0, Vec2::ZERO, Vec2::ONE, Vec2::ZERO),
            Actor::new(1, Vec2::ZERO, Vec2::ONE, Vec2::ZERO),
        ];
        let mut level = Level::new(grid_from(&[" "]), actors);
        level.remove_actor(1);
        assert_eq!(level.actors().len(), 1);
        level.remove_actor(1);
        assert_eq!(level.actors().len(), 1);
        assert_eq!(level.actors()[0].id, 0);
    }

    #[test]
    fn collecting_the_last_coin_wins_once() {
        let mut level = parse_fixture(&["@o"]);
        let coin_id = level
            .actors()
            .iter()
            .find(|a| a.kind() == ActorKind::Coin)
            .map(|a| a.id)
            .unwrap();

        level.player_touched(Contact::Coin, Some(coin_id));
        assert_eq!(level.status(), Status::Won);
        assert!(level.no_more_actors(ActorKind::Coin));

        // Terminal status is one-shot; later reports change nothing
        level.player_touched(Contact::Lava, None);
        assert_eq!(level.status(), Status::Won);
    }

    #[test]
    fn coin_contact_needs_a_matching_coin_actor() {
        let mut level = parse_fixture(&["@o"]);
        let player_id = level.player().unwrap().id;

        // Reporting a non-coin actor (or none at all) collects nothing
        level.player_touched(Contact::Coin, Some(player_id));
        level.player_touched(Contact::Coin, None);
        assert_eq!(level.status(), Status::Playing);
        assert!(!level.no_more_actors(ActorKind::Coin));
    }

    #[test]
    fn lava_loses_and_freezes_the_level_state() {
        let mut level = parse_fixture(&["@o"]);
        let coin_id = level
            .actors()
            .iter()
            .find(|a| a.kind() == ActorKind::Coin)
            .map(|a| a.id)
            .unwrap();

        level.player_touched(Contact::Lava, None);
        assert_eq!(level.status(), Status::Lost);

        // Already terminal: the coin is not removed
        level.player_touched(Contact::Coin, Some(coin_id));
        assert!(!level.no_more_actors(ActorKind::Coin));
        assert_eq!(level.status(), Status::Lost);
    }

    #[test]
    fn wall_contact_changes_nothing() {
        let mut level = parse_fixture(&["@o"]);
        level.player_touched(Contact::Wall, None);
        assert_eq!(level.status(), Status::Playing);
    }

    #[test]
    fn fireball_contact_loses() {
        let mut level = parse_fixture(&["@o"]);
        level.player_touched(Contact::Fireball, None);
        assert_eq!(level.status(), Status::Lost);
    }

    #[test]
    fn finished_needs_both_terminal_status_and_expired_delay() {
        let mut level = parse_fixture(&["@o"]);
        assert!(!level.is_finished());
        level.player_touched(Contact::Lava, None);
        assert!(!level.is_finished());
        level.finish_delay = -0.1;
        assert!(level.is_finished());
    }

    #[test]
    fn first_player_in_scan_order_is_canonical() {
        let mut actors = vec![
            Actor::new(0, Vec2::ZERO, Vec2::ONE, Vec2::ZERO),
            Actor::new(1, Vec2::ZERO, Vec2::ONE, Vec2::ZERO),
        ];
        actors[0].behavior = crate::sim::Behavior::Player;
        actors[1].behavior = crate::sim::Behavior::Player;
        let level = Level::new(grid_from(&[" "]), actors);
        assert_eq!(level.player().map(|p| p.id), Some(0));
        assert_eq!(level.actors().len(), 2);
    }

    #[test]
    fn level_state_survives_a_serde_round_trip() {
        let level = parse_fixture(&["@ o", "xx!"]);
        let json = serde_json::to_string(&level).unwrap();
        let back: Level = serde_json::from_str(&json).unwrap();
        assert_eq!(back.actors(), level.actors());
        assert_eq!(back.status(), level.status());
        assert_eq!(back.width(), level.width());
    }

    proptest! {
        #[test]
        fn negative_left_bound_is_always_wall(
            x in -100.0f32..-0.01,
            y in 0.0f32..2.0,
            w in 0.0f32..2.0,
            h in 0.0f32..1.0,
        ) {
            let grid = grid_from(&["!!!", "!!!", "!!!"]);
            prop_assert_eq!(grid.obstacle_at(Vec2::new(x, y), Vec2::new(w, h)), Some(Terrain::Wall));
        }

        #[test]
        fn bottom_overrun_is_always_lava(
            x in 0.0f32..2.0,
            y in 3.01f32..100.0,
            w in 0.0f32..1.0,
            h in 0.0f32..2.0,
        ) {
            // Horizontal bounds valid, vertical bottom past the grid
            let grid = grid_from(&["xxx", "xxx", "xxx"]);
            prop_assert_eq!(grid.obstacle_at(Vec2::new(x, y), Vec2::new(w, h)), Some(Terrain::Lava));
        }
    }
}
