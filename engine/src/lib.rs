//! `PyRat` game engine: board representation, maze/cheese generation, move
//! resolution, and the ego-centric observation projection consumed by AI
//! clients and the match runner.
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::inline_always)]
#![allow(clippy::trivially_copy_pass_by_ref)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cargo_common_metadata)]

pub mod bench_scenarios;
pub mod board;
pub mod builder;
pub mod cheese_board;
pub mod error;
pub mod game_logic;
pub mod maze_generation;
pub mod observations;
pub mod types;

pub use board::MovementTable;
pub use builder::{
    CheeseStrategy, GameBuilder, GameConfig, MazeParams, MazeStrategy, NeedsCheese, NeedsMaze,
    NeedsPlayers, PlayerStrategy, Ready,
};
pub use cheese_board::CheeseBoard;
pub use error::GameError;
pub use game_logic::{GameState, MoveUndo, WallMap};
pub use maze_generation::{CheeseConfig, CheeseGenerator, MazeConfig, MazeGenerator};
pub use observations::{build_observation, MovementConstraints, Observation, ObservationHandler};
pub use types::{Coordinates, Direction, Mud, MudMap, Wall};
