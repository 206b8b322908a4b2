//! The AI-side protocol loop: reader, computation worker, and main loop
//! cooperating over a command FIFO and a single stop flag.
//!
//! This is what an in-process strategy (and the `test-bot` binary) runs
//! inside; external subprocess AIs implement their own version of the same
//! state machine in whatever language they're written in. The one rule both
//! sides must honor is command re-queueing: any command that arrives while
//! the worker is busy and that isn't `stop`/`isready` must be processed after
//! the worker finishes, never dropped (a historical bug class this
//! implementation specifically guards against).

use crate::provider::Strategy;
use pyrat_engine::{Coordinates, Direction, GameState, MudMap, WallMap};
use pyrat_protocol::{Command, OptionKind, Response};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SessionState {
    Initial,
    Handshake,
    Ready,
    GameInit,
    Preprocessing,
    Playing,
    Postprocessing,
    Terminal,
}

/// Identity reported during the handshake.
pub struct Identity {
    pub name: String,
    pub author: String,
    pub options: Vec<(String, OptionKind)>,
}

/// `GameState::new_with_config`'s `max_turns` isn't carried by any game-init
/// command — the protocol only tells a session when to move, never when the
/// match ends — so the replica is built against the engine's own default.
const REPLICA_DEFAULT_MAX_TURNS: u16 = 300;

/// Accumulates the scattered game-init commands (`maze`, `walls`, `mud`,
/// `cheese`, `player1`, `player2`) into the one `GameState` they jointly
/// describe. The commands can arrive in any order; [`Self::build`] only
/// succeeds once the fields a `GameState` actually requires are all in.
#[derive(Default)]
struct ReplicaBuilder {
    dimensions: Option<(u8, u8)>,
    walls: WallMap,
    mud: MudMap,
    cheese: Vec<Coordinates>,
    player1: Option<Coordinates>,
    player2: Option<Coordinates>,
}

impl ReplicaBuilder {
    fn maze(&mut self, width: u8, height: u8) {
        self.dimensions = Some((width, height));
    }

    fn walls(&mut self, edges: &[(Coordinates, Coordinates)]) {
        for &(a, b) in edges {
            self.walls.entry(a).or_default().push(b);
            self.walls.entry(b).or_default().push(a);
        }
    }

    fn mud(&mut self, edges: &[(Coordinates, Coordinates, u8)]) {
        for &(a, b, cost) in edges {
            self.mud.insert(a, b, cost);
            self.mud.insert(b, a, cost);
        }
    }

    fn cheese(&mut self, positions: &[Coordinates]) {
        self.cheese = positions.to_vec();
    }

    fn build(&self) -> Option<GameState> {
        let (width, height) = self.dimensions?;
        let player1 = self.player1?;
        let player2 = self.player2?;
        Some(GameState::new_with_config(
            width,
            height,
            self.walls.clone(),
            self.mud.clone(),
            &self.cheese,
            player1,
            player2,
            REPLICA_DEFAULT_MAX_TURNS,
        ))
    }
}

/// Drives one in-process [`Strategy`] through the full session state
/// machine, reading commands from `rx` and emitting responses through
/// `emit`.
pub struct AiSession {
    state: SessionState,
    identity: Identity,
    strategy: Box<dyn Strategy>,
    stop_flag: Arc<AtomicBool>,
    pending: VecDeque<Command>,
    replica: Option<GameState>,
    replica_builder: ReplicaBuilder,
    history: Vec<(Direction, Direction)>,
}

impl AiSession {
    #[must_use]
    pub fn new(identity: Identity, strategy: Box<dyn Strategy>) -> Self {
        Self {
            state: SessionState::Initial,
            identity,
            strategy,
            stop_flag: Arc::new(AtomicBool::new(false)),
            pending: VecDeque::new(),
            replica: None,
            replica_builder: ReplicaBuilder::default(),
            history: Vec::new(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Runs the session to completion, reading commands from `commands` and
    /// writing formatted response lines to `emit`.
    pub async fn run(
        mut self,
        mut commands: mpsc::UnboundedReceiver<Command>,
        emit: mpsc::UnboundedSender<String>,
    ) {
        loop {
            let Some(cmd) = self.next_command(&mut commands).await else {
                break;
            };
            if matches!(self.state, SessionState::Terminal) {
                break;
            }
            self.handle(cmd, &mut commands, &emit).await;
        }
    }

    /// Re-attempts constructing the replica from whatever game-init fields
    /// have arrived so far. Commands can arrive in any order, so this is
    /// called after each one rather than gated on a specific "last" command.
    fn try_build_replica(&mut self) {
        if self.replica.is_none() {
            self.replica = self.replica_builder.build();
        }
    }

    async fn next_command(
        &mut self,
        commands: &mut mpsc::UnboundedReceiver<Command>,
    ) -> Option<Command> {
        if let Some(cmd) = self.pending.pop_front() {
            return Some(cmd);
        }
        commands.recv().await
    }

    async fn handle(
        &mut self,
        cmd: Command,
        commands: &mut mpsc::UnboundedReceiver<Command>,
        emit: &mpsc::UnboundedSender<String>,
    ) {
        match cmd {
            Command::Pyrat => {
                self.state = SessionState::Handshake;
                send(emit, Response::IdName(self.identity.name.clone()));
                send(emit, Response::IdAuthor(self.identity.author.clone()));
                for (name, kind) in self.identity.options.clone() {
                    send(emit, Response::Option { name, kind });
                }
                send(emit, Response::PyratReady);
                self.state = SessionState::Ready;
            }
            Command::IsReady => send(emit, Response::ReadyOk),
            Command::NewGame => {
                self.state = SessionState::GameInit;
                self.replica = None;
                self.replica_builder = ReplicaBuilder::default();
            }
            Command::Maze { width, height } => {
                self.replica_builder.maze(width, height);
                self.try_build_replica();
            }
            Command::Walls(edges) => {
                self.replica_builder.walls(&edges);
                self.try_build_replica();
            }
            Command::Mud(edges) => {
                self.replica_builder.mud(&edges);
                self.try_build_replica();
            }
            Command::Cheese(positions) => {
                self.replica_builder.cheese(&positions);
                self.try_build_replica();
            }
            Command::Player1 { position } => {
                self.replica_builder.player1 = Some(position);
                self.try_build_replica();
            }
            Command::Player2 { position } => {
                self.replica_builder.player2 = Some(position);
                self.try_build_replica();
            }
            Command::YouAre(_) | Command::TimeControl { .. } => {}
            Command::StartPreprocessing => {
                self.state = SessionState::Preprocessing;
                self.run_worker(
                    commands,
                    emit,
                    WorkKind::Preprocess(Duration::from_millis(3000)),
                )
                .await;
                send(emit, Response::PreprocessingDone);
                self.state = SessionState::Playing;
            }
            Command::Moves { rat, python } => {
                self.history.push((rat, python));
                if let Some(replica) = &mut self.replica {
                    replica.step(rat, python);
                }
            }
            Command::Go => {
                let direction = self
                    .run_worker(commands, emit, WorkKind::Move(Duration::from_millis(100)))
                    .await
                    .unwrap_or(Direction::Stay);
                send(emit, Response::Move(direction));
            }
            Command::Stop => {
                self.stop_flag.store(true, Ordering::SeqCst);
            }
            Command::Timeout(_) => {}
            Command::ReadyQuery => send(emit, Response::Ready),
            Command::GameOver { .. } => {
                self.state = SessionState::Ready;
            }
            Command::StartPostprocessing => {
                self.state = SessionState::Postprocessing;
                self.run_worker(
                    commands,
                    emit,
                    WorkKind::Postprocess(Duration::from_millis(1000)),
                )
                .await;
                send(emit, Response::PostprocessingDone);
                self.state = SessionState::Ready;
            }
            Command::Recover
            | Command::MovesHistory(_)
            | Command::CurrentPosition { .. }
            | Command::Score { .. }
            | Command::SetOption { .. }
            | Command::Debug { .. } => {}
        }
    }

    /// Runs the strategy callback on a blocking thread while continuing to
    /// service `stop`/`isready` from the command channel. Any other command
    /// observed during the run is re-queued to the front of `pending` so it
    /// is the very next thing processed once the worker finishes.
    async fn run_worker(
        &mut self,
        commands: &mut mpsc::UnboundedReceiver<Command>,
        emit: &mpsc::UnboundedSender<String>,
        kind: WorkKind,
    ) -> Option<Direction> {
        self.stop_flag.store(false, Ordering::SeqCst);
        let stop_flag = Arc::clone(&self.stop_flag);
        let mut strategy = std::mem::replace(&mut self.strategy, Box::new(NullStrategy));

        let handle: JoinHandle<(Box<dyn Strategy>, Option<Direction>)> =
            tokio::task::spawn_blocking(move || {
                let poll_stop = || stop_flag.load(Ordering::SeqCst);
                let result = match kind {
                    WorkKind::Move(_) => Some(strategy.get_move(&poll_stop)),
                    WorkKind::Preprocess(budget) => {
                        strategy.preprocess(budget, &poll_stop);
                        None
                    }
                    WorkKind::Postprocess(budget) => {
                        strategy.postprocess(budget, &poll_stop);
                        None
                    }
                };
                (strategy, result)
            });
        tokio::pin!(handle);

        let result = loop {
            tokio::select! {
                joined = &mut handle => {
                    let (strategy, result) = joined.expect("worker task does not panic");
                    self.strategy = strategy;
                    break result;
                }
                Some(cmd) = commands.recv() => {
                    match cmd {
                        Command::IsReady => send(emit, Response::ReadyOk),
                        Command::Stop => self.stop_flag.store(true, Ordering::SeqCst),
                        other => self.pending.push_back(other),
                    }
                }
            }
        };
        result
    }
}

enum WorkKind {
    Move(Duration),
    Preprocess(Duration),
    Postprocess(Duration),
}

struct NullStrategy;
impl Strategy for NullStrategy {
    fn get_move(&mut self, _poll_stop: &dyn Fn() -> bool) -> Direction {
        Direction::Stay
    }
}

fn send(emit: &mpsc::UnboundedSender<String>, response: Response) {
    if let Ok(line) = pyrat_protocol::format_response(&response) {
        let _ = emit.send(line);
    }
}
