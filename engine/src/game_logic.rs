//! Authoritative game state: move resolution, make/unmake, termination.

use crate::board::MovementTable;
use crate::builder::GameConfig;
use crate::cheese_board::CheeseBoard;
use crate::types::{Coordinates, Direction, MudMap};
use std::collections::HashMap;

pub type WallMap = HashMap<Coordinates, Vec<Coordinates>>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct PlayerState {
    pub(crate) pos: Coordinates,
    /// Turns remaining stuck in mud; 0 when free to move.
    pub(crate) mud_remaining: u16,
    /// Cell the player arrives at once `mud_remaining` reaches 0.
    pub(crate) mud_target: Coordinates,
    pub(crate) score: f64,
}

impl PlayerState {
    const fn at(pos: Coordinates) -> Self {
        Self {
            pos,
            mud_remaining: 0,
            mud_target: pos,
            score: 0.0,
        }
    }
}

/// Snapshot taken before a resolved step. Replaying it via `unmake_move`
/// restores byte-identical dynamic state.
#[derive(Clone, Debug)]
pub struct MoveUndo {
    player1: PlayerState,
    player2: PlayerState,
    turn: u16,
    collected: Vec<Coordinates>,
}

/// Authoritative, mutable game state owned by a single engine instance.
pub struct GameState {
    width: u8,
    height: u8,
    pub(crate) move_table: MovementTable,
    walls: WallMap,
    pub(crate) mud: MudMap,
    pub(crate) cheese: CheeseBoard,
    initial_cheese: Vec<Coordinates>,
    pub(crate) player1: PlayerState,
    pub(crate) player2: PlayerState,
    p1_start: Coordinates,
    p2_start: Coordinates,
    turn: u16,
    max_turns: u16,
    seed: Option<u64>,
    history: Vec<(Direction, Direction)>,
    source_config: Option<GameConfig>,
}

impl GameState {
    /// Build a game from fully-resolved static components (walls, mud, cheese
    /// positions already materialized — no strategy dispatch happens here).
    #[must_use]
    pub fn new_with_config(
        width: u8,
        height: u8,
        walls: WallMap,
        mud: MudMap,
        cheese_positions: &[Coordinates],
        p1_start: Coordinates,
        p2_start: Coordinates,
        max_turns: u16,
    ) -> Self {
        let move_table = MovementTable::new(width, height, &walls);
        let mut cheese = CheeseBoard::new(width, height);
        for &pos in cheese_positions {
            cheese.place_cheese(pos);
        }

        Self {
            width,
            height,
            move_table,
            walls,
            mud,
            cheese,
            initial_cheese: cheese_positions.to_vec(),
            player1: PlayerState::at(p1_start),
            player2: PlayerState::at(p2_start),
            p1_start,
            p2_start,
            turn: 0,
            max_turns,
            seed: None,
            history: Vec::new(),
            source_config: None,
        }
    }

    /// Remembers the `GameConfig` and seed that produced this state, so that
    /// `reset` can faithfully re-run generation rather than special-casing a
    /// rollback of dynamic fields (see the symmetric-maze-after-reset design
    /// note).
    #[must_use]
    pub(crate) fn attach_config(mut self, config: GameConfig, seed: Option<u64>) -> Self {
        self.seed = seed;
        self.source_config = Some(config);
        self
    }

    // -- accessors --------------------------------------------------------

    #[must_use]
    pub const fn width(&self) -> u8 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> u8 {
        self.height
    }

    #[must_use]
    pub const fn player1_position(&self) -> Coordinates {
        self.player1.pos
    }

    #[must_use]
    pub const fn player2_position(&self) -> Coordinates {
        self.player2.pos
    }

    #[must_use]
    pub const fn player1_score(&self) -> f64 {
        self.player1.score
    }

    #[must_use]
    pub const fn player2_score(&self) -> f64 {
        self.player2.score
    }

    #[must_use]
    pub const fn player1_mud_remaining(&self) -> u16 {
        self.player1.mud_remaining
    }

    #[must_use]
    pub const fn player2_mud_remaining(&self) -> u16 {
        self.player2.mud_remaining
    }

    #[must_use]
    pub const fn turns(&self) -> u16 {
        self.turn
    }

    #[must_use]
    pub const fn max_turns(&self) -> u16 {
        self.max_turns
    }

    #[must_use]
    pub fn cheese_positions(&self) -> Vec<Coordinates> {
        self.cheese.get_all_cheese_positions()
    }

    #[must_use]
    pub const fn walls(&self) -> &WallMap {
        &self.walls
    }

    #[must_use]
    pub const fn mud(&self) -> &MudMap {
        &self.mud
    }

    #[must_use]
    pub fn history(&self) -> &[(Direction, Direction)] {
        &self.history
    }

    #[must_use]
    pub fn observation(&self, is_p1: bool) -> crate::observations::Observation {
        crate::observations::build_observation(self, is_p1)
    }

    // -- lifecycle ----------------------------------------------------------

    /// Rolls the state back to turn 0. When this state was produced by a
    /// `GameConfig`, reset re-runs that config's full `create` (preserving
    /// maze symmetry exactly as a fresh game would); otherwise it restores
    /// the original static layout captured at construction.
    pub fn reset(&mut self, seed: Option<u64>) {
        if let Some(config) = self.source_config.clone() {
            let new_seed = seed.or(self.seed);
            *self = config.create(new_seed);
        } else {
            self.cheese.clear();
            for &pos in &self.initial_cheese.clone() {
                self.cheese.place_cheese(pos);
            }
            self.player1 = PlayerState::at(self.p1_start);
            self.player2 = PlayerState::at(self.p2_start);
            self.turn = 0;
            self.history.clear();
        }
    }

    /// Resolves one synchronous turn. Returns `(game_over, collected_cheese)`.
    pub fn step(&mut self, d1: Direction, d2: Direction) -> (bool, Vec<Coordinates>) {
        let (_undo, game_over, collected) = self.resolve_turn(d1, d2);
        (game_over, collected)
    }

    /// Resolves one turn like `step`, but returns a `MoveUndo` that exactly
    /// reverses the effects via `unmake_move`.
    pub fn make_move(&mut self, d1: Direction, d2: Direction) -> MoveUndo {
        let (undo, _game_over, _collected) = self.resolve_turn(d1, d2);
        undo
    }

    /// Restores the state that existed immediately before the most recent
    /// `make_move`. Passing an undo from any other point misorders history.
    pub fn unmake_move(&mut self, undo: MoveUndo) {
        for &pos in &undo.collected {
            self.cheese.restore_cheese(pos);
        }
        self.player1 = undo.player1;
        self.player2 = undo.player2;
        self.turn = undo.turn;
        self.history.pop();
    }

    fn resolve_turn(&mut self, d1: Direction, d2: Direction) -> (MoveUndo, bool, Vec<Coordinates>) {
        let pre_player1 = self.player1;
        let pre_player2 = self.player2;
        let pre_turn = self.turn;

        let next1 = compute_player_move(self.player1, d1, &self.move_table, &self.mud);
        let next2 = compute_player_move(self.player2, d2, &self.move_table, &self.mud);

        self.player1 = next1;
        self.player2 = next2;

        let collected = self.collect_cheese(next1, next2);

        self.turn += 1;
        self.history.push((d1, d2));

        let game_over = self.check_game_over();

        let undo = MoveUndo {
            player1: pre_player1,
            player2: pre_player2,
            turn: pre_turn,
            collected,
        };
        let collected_for_caller = undo.collected.clone();

        (undo, game_over, collected_for_caller)
    }

    fn collect_cheese(&mut self, next1: PlayerState, next2: PlayerState) -> Vec<Coordinates> {
        let mut collected = Vec::new();
        let eligible1 = next1.mud_remaining == 0;
        let eligible2 = next2.mud_remaining == 0;

        if eligible1
            && eligible2
            && next1.pos == next2.pos
            && self.cheese.has_cheese(next1.pos)
        {
            self.cheese.take_cheese(next1.pos);
            self.player1.score += 0.5;
            self.player2.score += 0.5;
            collected.push(next1.pos);
            return collected;
        }

        if eligible1 && self.cheese.has_cheese(next1.pos) {
            self.cheese.take_cheese(next1.pos);
            self.player1.score += 1.0;
            collected.push(next1.pos);
        }
        if eligible2 && self.cheese.has_cheese(next2.pos) {
            self.cheese.take_cheese(next2.pos);
            self.player2.score += 1.0;
            collected.push(next2.pos);
        }

        collected
    }

    fn check_game_over(&self) -> bool {
        if self.cheese.remaining_cheese() == 0 {
            return true;
        }
        let majority = f64::from(self.cheese.total_cheese()) / 2.0;
        if self.player1.score > majority || self.player2.score > majority {
            return true;
        }
        self.turn >= self.max_turns
    }
}

/// Computes one player's post-move state from the pre-step snapshot. Both
/// players are computed from the same pre-step state — there is no
/// first-mover advantage.
fn compute_player_move(
    player: PlayerState,
    direction: Direction,
    move_table: &MovementTable,
    mud: &MudMap,
) -> PlayerState {
    if player.mud_remaining > 0 {
        let remaining = player.mud_remaining - 1;
        return if remaining == 0 {
            PlayerState {
                pos: player.mud_target,
                mud_remaining: 0,
                mud_target: player.mud_target,
                score: player.score,
            }
        } else {
            PlayerState {
                mud_remaining: remaining,
                ..player
            }
        };
    }

    if direction == Direction::Stay || !move_table.is_move_valid(player.pos, direction) {
        return PlayerState {
            mud_target: player.pos,
            ..player
        };
    }

    let candidate = direction.apply_to(player.pos);
    if let Some(cost) = mud.get(player.pos, candidate) {
        return PlayerState {
            mud_remaining: u16::from(cost) - 1,
            mud_target: candidate,
            ..player
        };
    }

    PlayerState {
        pos: candidate,
        mud_target: candidate,
        ..player
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Coordinates as C, Direction as D};

    fn flat_game(width: u8, height: u8, cheese: &[C], p1: C, p2: C, max_turns: u16) -> GameState {
        GameState::new_with_config(width, height, WallMap::new(), MudMap::new(), cheese, p1, p2, max_turns)
    }

    mod basic_movement {
        use super::*;

        #[test]
        fn free_player_moves_into_open_cell() {
            let mut game = flat_game(5, 5, &[C::new(4, 4)], C::new(0, 0), C::new(4, 0), 300);
            game.step(D::Right, D::Stay);
            assert_eq!(game.player1_position(), C::new(1, 0));
        }

        #[test]
        fn boundary_move_is_rewritten_to_stay() {
            let mut game = flat_game(5, 5, &[C::new(4, 4)], C::new(0, 0), C::new(4, 0), 300);
            game.step(D::Left, D::Stay);
            assert_eq!(game.player1_position(), C::new(0, 0));
        }

        #[test]
        fn stay_command_keeps_position() {
            let mut game = flat_game(5, 5, &[C::new(4, 4)], C::new(2, 2), C::new(4, 0), 300);
            game.step(D::Stay, D::Stay);
            assert_eq!(game.player1_position(), C::new(2, 2));
        }
    }

    mod mud_mechanics {
        use super::*;

        #[test]
        fn entering_mud_immobilizes_for_n_minus_one_turns() {
            let mut mud = MudMap::new();
            mud.insert(C::new(0, 0), C::new(1, 0), 3);
            let mut game = GameState::new_with_config(
                5,
                5,
                WallMap::new(),
                mud,
                &[C::new(4, 4)],
                C::new(0, 0),
                C::new(4, 0),
                300,
            );

            game.step(D::Right, D::Stay);
            assert_eq!(game.player1_position(), C::new(0, 0));
            assert_eq!(game.player1_mud_remaining(), 2);

            game.step(D::Stay, D::Stay);
            assert_eq!(game.player1_position(), C::new(0, 0));
            assert_eq!(game.player1_mud_remaining(), 1);

            game.step(D::Up, D::Stay);
            assert_eq!(game.player1_position(), C::new(1, 0));
            assert_eq!(game.player1_mud_remaining(), 0);
        }
    }

    mod cheese_collection {
        use super::*;

        #[test]
        fn single_player_collects_whole_cheese() {
            let mut game = flat_game(5, 1, &[C::new(1, 0)], C::new(0, 0), C::new(4, 0), 300);
            let (_, collected) = game.step(D::Right, D::Left);
            assert_eq!(collected, vec![C::new(1, 0)]);
            assert_eq!(game.player1_score(), 1.0);
            assert_eq!(game.player2_score(), 0.0);
        }

        #[test]
        fn simultaneous_arrival_splits_cheese() {
            let mut game = flat_game(5, 1, &[C::new(2, 0)], C::new(1, 0), C::new(3, 0), 300);
            let (_, collected) = game.step(D::Right, D::Left);
            assert_eq!(collected, vec![C::new(2, 0)]);
            assert_eq!(game.player1_score(), 0.5);
            assert_eq!(game.player2_score(), 0.5);
        }
    }

    mod game_ending {
        use super::*;

        #[test]
        fn ends_when_max_turns_reached() {
            let mut game = flat_game(5, 5, &[C::new(4, 4)], C::new(0, 0), C::new(4, 0), 2);
            let (over1, _) = game.step(D::Stay, D::Stay);
            assert!(!over1);
            let (over2, _) = game.step(D::Stay, D::Stay);
            assert!(over2);
        }

        #[test]
        fn ends_when_score_exceeds_half_of_total() {
            // Three cheese total (majority threshold 1.5); the third sits far
            // out of reach so this exercises the score condition, not the
            // empty-cheese condition.
            let mut game = flat_game(
                6,
                1,
                &[C::new(1, 0), C::new(2, 0), C::new(5, 0)],
                C::new(0, 0),
                C::new(3, 0),
                300,
            );
            let (over, _) = game.step(D::Right, D::Stay);
            assert!(!over);
            assert_eq!(game.player1_score(), 1.0);

            let (over, _) = game.step(D::Right, D::Stay);
            assert!(over);
            assert_eq!(game.player1_score(), 2.0);
            assert_eq!(game.cheese.remaining_cheese(), 1);
        }

        #[test]
        fn ends_when_all_cheese_collected() {
            let mut game = flat_game(3, 1, &[C::new(1, 0)], C::new(0, 0), C::new(2, 0), 300);
            let (over, collected) = game.step(D::Right, D::Left);
            assert!(over);
            assert_eq!(collected, vec![C::new(1, 0)]);
        }
    }

    mod undo {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn unmake_restores_exact_prior_state() {
            let mut game = flat_game(5, 1, &[C::new(2, 0)], C::new(0, 0), C::new(4, 0), 300);
            let before_pos = game.player1_position();
            let before_turn = game.turns();

            let undo = game.make_move(D::Right, D::Left);
            assert_ne!(game.player1_position(), before_pos);

            game.unmake_move(undo);
            assert_eq!(game.player1_position(), before_pos);
            assert_eq!(game.turns(), before_turn);
            assert_eq!(game.player1_score(), 0.0);
            assert_eq!(game.cheese.remaining_cheese(), 1);
        }

        #[test]
        fn unmake_restores_collected_cheese() {
            let mut game = flat_game(5, 1, &[C::new(1, 0)], C::new(0, 0), C::new(4, 0), 300);
            let undo = game.make_move(D::Right, D::Stay);
            assert_eq!(game.cheese.remaining_cheese(), 0);
            game.unmake_move(undo);
            assert_eq!(game.cheese.remaining_cheese(), 1);
            assert!(game.cheese.has_cheese(C::new(1, 0)));
        }

        #[test]
        fn sequence_of_make_unmake_round_trips() {
            let mut game = flat_game(
                5,
                5,
                &[C::new(2, 2), C::new(4, 4)],
                C::new(0, 0),
                C::new(4, 0),
                300,
            );
            let moves = [
                (D::Right, D::Stay),
                (D::Up, D::Up),
                (D::Right, D::Left),
                (D::Stay, D::Up),
            ];

            let mut undos = Vec::new();
            for (d1, d2) in moves {
                undos.push(game.make_move(d1, d2));
            }
            for undo in undos.into_iter().rev() {
                game.unmake_move(undo);
            }

            assert_eq!(game.player1_position(), C::new(0, 0));
            assert_eq!(game.player2_position(), C::new(4, 0));
            assert_eq!(game.turns(), 0);
            assert_eq!(game.cheese.remaining_cheese(), 2);
        }
    }

    mod reset {
        use super::*;

        #[test]
        fn reset_without_config_restores_initial_layout() {
            let mut game = flat_game(5, 1, &[C::new(2, 0)], C::new(0, 0), C::new(4, 0), 300);
            game.step(D::Right, D::Left);
            game.reset(None);

            assert_eq!(game.player1_position(), C::new(0, 0));
            assert_eq!(game.player2_position(), C::new(4, 0));
            assert_eq!(game.turns(), 0);
            assert_eq!(game.player1_score(), 0.0);
            assert_eq!(game.cheese.remaining_cheese(), 1);
            assert!(game.history().is_empty());
        }
    }
}
