//! Subprocess session management and match orchestration for PyRat AIs.

pub mod error;
pub mod provider;
pub mod replay;
pub mod runner;
pub mod session;

pub use error::HostError;
pub use provider::{MoveOutcome, MoveProvider, Strategy, TurnMoves};
pub use replay::{GameReplay, ReplayTurn};
pub use runner::{run_match, run_match_with_providers, MatchOutcome, RunnerConfig};
pub use session::{AiSession, Identity, SessionState};
