//! `MoveProvider`: the single seam behind which one side of a match gets its
//! moves from an external subprocess, an in-process strategy, or a recorded
//! replay.
//!
//! The source protocol selects strategies dynamically by name and relies on
//! duck typing; here the three sources are closed, tagged variants so the
//! runner can match on them once, at construction, instead of performing a
//! virtual call through an unconstrained interface on every turn.

use pyrat_engine::Direction;
use std::path::PathBuf;
use std::time::Duration;

/// One resolved pair of moves for a turn, or a per-side timeout.
#[derive(Clone, Copy, Debug)]
pub struct TurnMoves {
    pub rat: MoveOutcome,
    pub python: MoveOutcome,
}

/// What a single AI produced for one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Move(Direction),
    /// The AI didn't answer within budget; the runner substitutes `STAY`.
    Timeout,
}

impl MoveOutcome {
    #[must_use]
    pub const fn direction(self) -> Direction {
        match self {
            Self::Move(d) => d,
            Self::Timeout => Direction::Stay,
        }
    }
}

/// Where one side's moves come from, chosen once before the match starts.
pub enum MoveProvider {
    /// Path to an executable, spawned and talked to over stdin/stdout via
    /// the text protocol.
    Subprocess(PathBuf),
    /// A strategy driven in-process through [`crate::session::AiSession`]'s
    /// cooperative worker model, skipping the stdio layer entirely.
    InProcess(Box<dyn Strategy>),
    /// A pre-recorded sequence of moves for this side, replayed turn by
    /// turn without running any computation.
    Replay(Vec<Direction>),
}

/// The callback an in-process AI implements. `poll_stop` must be checked
/// periodically so the session can cancel cooperatively.
pub trait Strategy: Send {
    fn get_move(&mut self, poll_stop: &dyn Fn() -> bool) -> Direction;

    fn preprocess(&mut self, _budget: Duration, _poll_stop: &dyn Fn() -> bool) {}

    fn postprocess(&mut self, _budget: Duration, _poll_stop: &dyn Fn() -> bool) {}
}
