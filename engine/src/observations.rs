//! Ego-centric observation projection (C4): a pure snapshot of the game from
//! one player's point of view, with no protocol or process concerns mixed in.

use crate::{Coordinates, Direction, GameState};

/// For each cell `(x, y)` and each of the four non-STAY directions, the
/// value is `-1` (wall/out-of-bounds), `0` (normal move), or `N >= 2` (mud
/// cost `N`). The direction index matches `Direction`'s wire tag: UP=0,
/// RIGHT=1, DOWN=2, LEFT=3.
#[derive(Clone)]
pub struct MovementConstraints {
    matrix: Vec<Vec<[i8; 4]>>,
    width: usize,
    height: usize,
}

impl MovementConstraints {
    #[must_use]
    pub fn new(game: &GameState) -> Self {
        let width = game.width() as usize;
        let height = game.height() as usize;
        let mut matrix = vec![vec![[0i8; 4]; height]; width];

        for y in 0..height {
            for x in 0..width {
                let cx = u8::try_from(x).expect("board width fits in u8");
                let cy = u8::try_from(y).expect("board height fits in u8");
                let pos = Coordinates::new(cx, cy);

                for dir in [
                    Direction::Up,
                    Direction::Right,
                    Direction::Down,
                    Direction::Left,
                ] {
                    let dir_idx = dir as usize;

                    let leaves_board = match dir {
                        Direction::Left => cx == 0,
                        Direction::Right => x >= width - 1,
                        Direction::Down => cy == 0,
                        Direction::Up => y >= height - 1,
                        Direction::Stay => false,
                    };

                    if leaves_board || !game.move_table.is_move_valid(pos, dir) {
                        matrix[x][y][dir_idx] = -1;
                        continue;
                    }

                    let target = dir.apply_to(pos);
                    if let Some(mud_cost) = game.mud.get(pos, target) {
                        matrix[x][y][dir_idx] = mud_cost as i8;
                    }
                }
            }
        }

        Self {
            matrix,
            width,
            height,
        }
    }

    #[must_use]
    pub fn get(&self, pos: Coordinates, direction: Direction) -> i8 {
        self.matrix[pos.x as usize][pos.y as usize][direction as usize]
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }
}

/// Tracks a `cheese_matrix` that can be updated incrementally as cheese is
/// collected, avoiding a full board scan every turn.
#[derive(Clone)]
pub struct ObservationHandler {
    movement_constraints: MovementConstraints,
    cheese_matrix: Vec<Vec<u8>>,
}

impl ObservationHandler {
    #[must_use]
    pub fn new(game: &GameState) -> Self {
        let mut handler = Self {
            movement_constraints: MovementConstraints::new(game),
            cheese_matrix: vec![vec![0u8; game.height() as usize]; game.width() as usize],
        };
        handler.refresh_cheese(game);
        handler
    }

    /// Clears the positions that were just collected.
    pub fn update_collected_cheese(&mut self, collected: &[Coordinates]) {
        for pos in collected {
            self.cheese_matrix[pos.x as usize][pos.y as usize] = 0;
        }
    }

    /// Full rescan of the board's cheese. Only needed after `unmake_move` or
    /// `reset`, where incremental updates can't track what reappeared.
    pub fn refresh_cheese(&mut self, game: &GameState) {
        for column in &mut self.cheese_matrix {
            column.fill(0);
        }
        for pos in game.cheese_positions() {
            self.cheese_matrix[pos.x as usize][pos.y as usize] = 1;
        }
    }

    pub fn restore_cheese(&mut self, pos: Coordinates) {
        self.cheese_matrix[pos.x as usize][pos.y as usize] = 1;
    }

    #[must_use]
    pub fn observation(&self, game: &GameState, is_player_one: bool) -> Observation {
        let (player_position, player_mud_turns, player_score) = if is_player_one {
            (
                game.player1_position(),
                game.player1_mud_remaining(),
                game.player1_score(),
            )
        } else {
            (
                game.player2_position(),
                game.player2_mud_remaining(),
                game.player2_score(),
            )
        };

        let (opponent_position, opponent_mud_turns, opponent_score) = if is_player_one {
            (
                game.player2_position(),
                game.player2_mud_remaining(),
                game.player2_score(),
            )
        } else {
            (
                game.player1_position(),
                game.player1_mud_remaining(),
                game.player1_score(),
            )
        };

        Observation {
            player_position,
            player_mud_turns,
            player_score,
            opponent_position,
            opponent_mud_turns,
            opponent_score,
            turn: game.turns(),
            max_turns: game.max_turns(),
            cheese_matrix: self.cheese_matrix.clone(),
            movement_matrix: self.movement_constraints.clone(),
        }
    }
}

/// A snapshot of the game from one player's point of view. Pure: derived
/// from state, allocates, never mutates.
pub struct Observation {
    pub player_position: Coordinates,
    pub player_mud_turns: u16,
    pub player_score: f64,
    pub opponent_position: Coordinates,
    pub opponent_mud_turns: u16,
    pub opponent_score: f64,
    pub turn: u16,
    pub max_turns: u16,
    pub cheese_matrix: Vec<Vec<u8>>,
    pub movement_matrix: MovementConstraints,
}

/// Builds a fresh observation directly from state, with no need to keep an
/// `ObservationHandler` around. Used by `GameState::observation`.
#[must_use]
pub fn build_observation(game: &GameState, is_player_one: bool) -> Observation {
    ObservationHandler::new(game).observation(game, is_player_one)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::GameBuilder;
    use crate::types::MudMap;
    use std::collections::HashMap;

    #[test]
    fn movement_constraints_reflect_walls_and_mud() {
        let mut mud = MudMap::new();
        mud.insert(Coordinates::new(0, 0), Coordinates::new(0, 1), 2);

        let game = GameBuilder::new(3, 3)
            .with_custom_maze(HashMap::new(), mud)
            .with_corner_positions()
            .with_custom_cheese(vec![])
            .build()
            .create(None);

        let constraints = MovementConstraints::new(&game);
        let origin = Coordinates::new(0, 0);

        assert_eq!(constraints.get(origin, Direction::Left), -1);
        assert_eq!(constraints.get(origin, Direction::Down), -1);
        assert_eq!(constraints.get(origin, Direction::Right), 0);
        assert_eq!(constraints.get(origin, Direction::Up), 2);
    }

    #[test]
    fn refresh_restores_full_cheese_layout() {
        use crate::builder::MazeParams;

        let config = GameBuilder::new(5, 5)
            .with_random_maze(MazeParams::default())
            .with_corner_positions()
            .with_random_cheese(3, true)
            .build();
        let game = config.create(Some(42));
        let mut handler = ObservationHandler::new(&game);

        for column in &mut handler.cheese_matrix {
            column.fill(0);
        }
        handler.refresh_cheese(&game);

        for pos in game.cheese_positions() {
            assert_eq!(
                handler.cheese_matrix[pos.x as usize][pos.y as usize],
                1,
                "cheese should be restored at {pos:?} after refresh"
            );
        }
    }

    #[test]
    fn observation_reports_correct_perspective() {
        let config = GameBuilder::new(5, 5)
            .with_open_maze()
            .with_corner_positions()
            .with_custom_cheese(vec![Coordinates::new(2, 2)])
            .build();
        let game = config.create(Some(1));

        let obs_p1 = build_observation(&game, true);
        assert_eq!(obs_p1.player_position, game.player1_position());
        assert_eq!(obs_p1.opponent_position, game.player2_position());

        let obs_p2 = build_observation(&game, false);
        assert_eq!(obs_p2.player_position, game.player2_position());
        assert_eq!(obs_p2.opponent_position, game.player1_position());
    }
}
