//! The match runner (C7): owns the authoritative `GameState` and drives two
//! AI sources through the protocol from handshake to gameover.
//!
//! Each side is a [`MoveProvider`] chosen once, at construction: a spawned
//! subprocess speaking the wire protocol, an in-process [`Strategy`] driven
//! through [`crate::session::AiSession`] with the stdio layer removed, or a
//! pre-recorded sequence of moves. The runner itself never cares which one
//! it's talking to past that point — every variant answers the same
//! `send_command`/`await_move`/`await_line`/`is_alive`/`kill` surface.

use crate::error::HostError;
use crate::provider::{MoveOutcome, MoveProvider, TurnMoves};
use crate::session::{AiSession, Identity};
use pyrat_engine::{Coordinates, Direction, GameConfig, GameState, MudMap, WallMap};
use pyrat_protocol::{parse_command, GameResult, Player};
use std::collections::VecDeque;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines};
use tokio::process::{Child, ChildStdin, ChildStdout, Command as ProcessCommand};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tracing::{info, warn};

pub struct RunnerConfig {
    pub width: u8,
    pub height: u8,
    pub cheese: u16,
    pub seed: Option<u64>,
    pub max_turns: u16,
    pub move_timeout: Duration,
    pub preprocessing_timeout: Duration,
    pub postprocessing_timeout: Duration,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            width: 21,
            height: 15,
            cheese: 41,
            seed: None,
            max_turns: 300,
            move_timeout: Duration::from_millis(100),
            preprocessing_timeout: Duration::from_secs(3),
            postprocessing_timeout: Duration::from_secs(1),
        }
    }
}

/// The result of one match, plus enough of the starting position for a
/// caller to reconstruct a faithful replay without re-deriving it from the
/// (by then discarded) `GameState`.
#[derive(Clone, Debug)]
pub struct MatchOutcome {
    pub success: bool,
    pub winner: Option<GameResult>,
    pub rat_score: f64,
    pub python_score: f64,
    pub moves: Vec<(Direction, Direction)>,
    pub width: u8,
    pub height: u8,
    pub walls: WallMap,
    pub mud: MudMap,
    pub cheese: Vec<Coordinates>,
    pub player1_start: Coordinates,
    pub player2_start: Coordinates,
}

/// A spawned AI process plus its line-oriented I/O.
struct AiHandle {
    child: Child,
    stdin: ChildStdin,
    lines: Lines<BufReader<ChildStdout>>,
}

impl AiHandle {
    fn spawn(path: &Path) -> Result<Self, HostError> {
        let mut child = ProcessCommand::new(path)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(HostError::Spawn)?;
        let stdin = child.stdin.take().ok_or(HostError::PipeUnavailable)?;
        let stdout = child.stdout.take().ok_or(HostError::PipeUnavailable)?;
        Ok(Self {
            child,
            stdin,
            lines: BufReader::new(stdout).lines(),
        })
    }

    async fn send(&mut self, line: &str) -> Result<(), HostError> {
        self.stdin.write_all(line.as_bytes()).await?;
        self.stdin.write_all(b"\n").await?;
        self.stdin.flush().await?;
        Ok(())
    }

    /// Reads lines until one parses as the target response, or the timeout
    /// elapses. Lines that don't parse (e.g. stray `info`) are skipped
    /// rather than treated as failure.
    async fn await_move(&mut self, budget: Duration) -> Option<Direction> {
        let deadline = tokio::time::Instant::now() + budget;
        loop {
            let remaining = deadline.saturating_duration_since(tokio::time::Instant::now());
            if remaining.is_zero() {
                return None;
            }
            match timeout(remaining, self.lines.next_line()).await {
                Ok(Ok(Some(line))) => {
                    if let Some(dir) = parse_move_response(&line) {
                        return Some(dir);
                    }
                }
                _ => return None,
            }
        }
    }

    async fn await_line(&mut self, budget: Duration, predicate: impl Fn(&str) -> bool) -> bool {
        let deadline = tokio::time::Instant::now() + budget;
        loop {
            let remaining = deadline.saturating_duration_since(tokio::time::Instant::now());
            if remaining.is_zero() {
                return false;
            }
            match timeout(remaining, self.lines.next_line()).await {
                Ok(Ok(Some(line))) if predicate(&line) => return true,
                Ok(Ok(Some(_))) => {}
                _ => return false,
            }
        }
    }

    fn is_alive(&mut self) -> bool {
        self.child.try_wait().ok().flatten().is_none()
    }

    async fn kill(&mut self) {
        let _ = self.child.start_kill();
        let _ = self.child.wait().await;
    }
}

/// An in-process [`crate::provider::Strategy`] driven through [`AiSession`]
/// with the stdio layer skipped: outgoing protocol lines are parsed straight
/// into `Command`s and handed to the session's channel, and the session's
/// formatted response lines come back the same way a subprocess's stdout
/// would deliver them.
struct InProcessChannel {
    commands: mpsc::UnboundedSender<pyrat_protocol::Command>,
    responses: mpsc::UnboundedReceiver<String>,
    task: JoinHandle<()>,
}

impl InProcessChannel {
    fn spawn(strategy: Box<dyn crate::provider::Strategy>) -> Self {
        let identity = Identity {
            name: "in-process".to_string(),
            author: "embedded".to_string(),
            options: Vec::new(),
        };
        let session = AiSession::new(identity, strategy);
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (response_tx, response_rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(session.run(command_rx, response_tx));
        Self {
            commands: command_tx,
            responses: response_rx,
            task,
        }
    }

    fn send(&mut self, line: &str) {
        if let Some(command) = parse_command(line) {
            let _ = self.commands.send(command);
        }
    }

    async fn await_move(&mut self, budget: Duration) -> Option<Direction> {
        let deadline = tokio::time::Instant::now() + budget;
        loop {
            let remaining = deadline.saturating_duration_since(tokio::time::Instant::now());
            if remaining.is_zero() {
                return None;
            }
            match timeout(remaining, self.responses.recv()).await {
                Ok(Some(line)) => {
                    if let Some(dir) = parse_move_response(&line) {
                        return Some(dir);
                    }
                }
                _ => return None,
            }
        }
    }

    async fn await_line(&mut self, budget: Duration, predicate: impl Fn(&str) -> bool) -> bool {
        let deadline = tokio::time::Instant::now() + budget;
        loop {
            let remaining = deadline.saturating_duration_since(tokio::time::Instant::now());
            if remaining.is_zero() {
                return false;
            }
            match timeout(remaining, self.responses.recv()).await {
                Ok(Some(line)) if predicate(&line) => return true,
                Ok(Some(_)) => {}
                _ => return false,
            }
        }
    }

    fn is_alive(&self) -> bool {
        !self.task.is_finished()
    }

    async fn kill(&mut self) {
        self.task.abort();
    }
}

/// A pre-recorded sequence of one side's moves, replayed turn by turn.
struct ReplayChannel {
    moves: VecDeque<Direction>,
}

impl ReplayChannel {
    fn new(moves: Vec<Direction>) -> Self {
        Self {
            moves: moves.into(),
        }
    }

    async fn await_move(&mut self, _budget: Duration) -> Option<Direction> {
        self.moves.pop_front()
    }

    fn is_alive(&self) -> bool {
        !self.moves.is_empty()
    }
}

/// One side's connection to its move source, dispatched once per call
/// instead of through a virtual method table.
enum AiChannel {
    Subprocess(AiHandle),
    InProcess(InProcessChannel),
    Replay(ReplayChannel),
}

impl AiChannel {
    fn spawn(provider: MoveProvider) -> Result<Self, HostError> {
        match provider {
            MoveProvider::Subprocess(path) => Ok(Self::Subprocess(AiHandle::spawn(&path)?)),
            MoveProvider::InProcess(strategy) => {
                Ok(Self::InProcess(InProcessChannel::spawn(strategy)))
            }
            MoveProvider::Replay(moves) => Ok(Self::Replay(ReplayChannel::new(moves))),
        }
    }

    async fn send_command(&mut self, command: &str) -> Result<(), HostError> {
        match self {
            Self::Subprocess(ai) => ai.send(command).await,
            Self::InProcess(channel) => {
                channel.send(command);
                Ok(())
            }
            Self::Replay(_) => Ok(()),
        }
    }

    async fn await_move(&mut self, budget: Duration) -> Option<Direction> {
        match self {
            Self::Subprocess(ai) => ai.await_move(budget).await,
            Self::InProcess(channel) => channel.await_move(budget).await,
            Self::Replay(channel) => channel.await_move(budget).await,
        }
    }

    async fn await_line(&mut self, budget: Duration, predicate: impl Fn(&str) -> bool) -> bool {
        match self {
            Self::Subprocess(ai) => ai.await_line(budget, predicate).await,
            Self::InProcess(channel) => channel.await_line(budget, predicate).await,
            Self::Replay(_) => true,
        }
    }

    fn is_alive(&mut self) -> bool {
        match self {
            Self::Subprocess(ai) => ai.is_alive(),
            Self::InProcess(channel) => channel.is_alive(),
            Self::Replay(channel) => channel.is_alive(),
        }
    }

    async fn kill(&mut self) {
        match self {
            Self::Subprocess(ai) => ai.kill().await,
            Self::InProcess(channel) => channel.kill().await,
            Self::Replay(_) => {}
        }
    }
}

fn parse_move_response(line: &str) -> Option<Direction> {
    let mut parts = line.trim().split_whitespace();
    if parts.next()? != "move" {
        return None;
    }
    match parts.next()?.to_uppercase().as_str() {
        "UP" => Some(Direction::Up),
        "DOWN" => Some(Direction::Down),
        "LEFT" => Some(Direction::Left),
        "RIGHT" => Some(Direction::Right),
        "STAY" => Some(Direction::Stay),
        _ => None,
    }
}

/// Runs one game from handshake through gameover against two spawned
/// subprocess AIs. Returns `success=false` only when an AI crashed outright
/// (as opposed to merely timing out, which the runner recovers from with
/// `STAY`).
pub async fn run_match(
    rat_path: &Path,
    python_path: &Path,
    config: &RunnerConfig,
) -> Result<MatchOutcome, HostError> {
    run_match_with_providers(
        MoveProvider::Subprocess(rat_path.to_path_buf()),
        MoveProvider::Subprocess(python_path.to_path_buf()),
        config,
    )
    .await
}

/// Runs one game from handshake through gameover, with each side's moves
/// coming from whichever [`MoveProvider`] was chosen for it.
pub async fn run_match_with_providers(
    rat_provider: MoveProvider,
    python_provider: MoveProvider,
    config: &RunnerConfig,
) -> Result<MatchOutcome, HostError> {
    let mut rat = AiChannel::spawn(rat_provider)?;
    let mut python = AiChannel::spawn(python_provider)?;

    let handshake_budget = config.move_timeout * 3;
    handshake(&mut rat, handshake_budget).await?;
    handshake(&mut python, handshake_budget).await?;

    let mut game_config = GameConfig::classic(config.width, config.height, config.cheese);
    game_config.max_turns = config.max_turns;
    let mut game = game_config.create(config.seed);

    let width = game.width();
    let height = game.height();
    let walls = game.walls().clone();
    let mud = game.mud().clone();
    let cheese = game.cheese_positions();
    let player1_start = game.player1_position();
    let player2_start = game.player2_position();

    send_game_init(&mut rat, &game, true).await?;
    send_game_init(&mut python, &game, false).await?;

    for ai in [&mut rat, &mut python] {
        ai.send_command("startpreprocessing").await?;
    }
    for ai in [&mut rat, &mut python] {
        if !ai
            .await_line(config.preprocessing_timeout, |l| {
                l.trim() == "preprocessingdone"
            })
            .await
        {
            warn!("preprocessing timed out");
        }
    }

    let mut prev = (Direction::Stay, Direction::Stay);
    let mut moves = Vec::new();
    let outcome = loop {
        let moves_line = format!(
            "moves rat:{} python:{}",
            prev.0.as_str(),
            prev.1.as_str()
        );
        for ai in [&mut rat, &mut python] {
            ai.send_command(&moves_line).await?;
            ai.send_command("go").await?;
        }

        let (rat_move, python_move) = tokio::join!(
            rat.await_move(config.move_timeout),
            python.await_move(config.move_timeout)
        );
        let turn = TurnMoves {
            rat: rat_move.map_or(MoveOutcome::Timeout, MoveOutcome::Move),
            python: python_move.map_or(MoveOutcome::Timeout, MoveOutcome::Move),
        };

        if matches!(turn.rat, MoveOutcome::Timeout) {
            if !rat.is_alive() {
                break MatchOutcome {
                    success: false,
                    winner: None,
                    rat_score: game.player1_score(),
                    python_score: game.player2_score(),
                    moves,
                    width,
                    height,
                    walls,
                    mud,
                    cheese,
                    player1_start,
                    player2_start,
                };
            }
            rat.send_command("timeout move:STAY").await?;
            rat.send_command("ready?").await?;
        }
        if matches!(turn.python, MoveOutcome::Timeout) {
            if !python.is_alive() {
                break MatchOutcome {
                    success: false,
                    winner: None,
                    rat_score: game.player1_score(),
                    python_score: game.player2_score(),
                    moves,
                    width,
                    height,
                    walls,
                    mud,
                    cheese,
                    player1_start,
                    player2_start,
                };
            }
            python.send_command("timeout move:STAY").await?;
            python.send_command("ready?").await?;
        }

        let rat_move = turn.rat.direction();
        let python_move = turn.python.direction();
        let (game_over, _collected) = game.step(rat_move, python_move);
        prev = (rat_move, python_move);
        moves.push(prev);
        info!(turn = game.turns(), "resolved turn");

        if game_over {
            let rat_score = game.player1_score();
            let python_score = game.player2_score();
            let winner = if rat_score > python_score {
                GameResult::Rat
            } else if python_score > rat_score {
                GameResult::Python
            } else {
                GameResult::Draw
            };
            break MatchOutcome {
                success: true,
                winner: Some(winner),
                rat_score,
                python_score,
                moves,
                width,
                height,
                walls,
                mud,
                cheese,
                player1_start,
                player2_start,
            };
        }
    };

    if outcome.success {
        let gameover = format!(
            "gameover winner:{} score:{:.1}-{:.1}",
            outcome.winner.map_or("draw", GameResult::as_str),
            outcome.rat_score,
            outcome.python_score
        );
        for ai in [&mut rat, &mut python] {
            let _ = ai.send_command(&gameover).await;
            let _ = ai.send_command("startpostprocessing").await;
        }
        for ai in [&mut rat, &mut python] {
            let _ = ai
                .await_line(config.postprocessing_timeout, |l| {
                    l.trim() == "postprocessingdone"
                })
                .await;
        }
    }

    for ai in [&mut rat, &mut python] {
        let _ = ai.send_command("stop").await;
    }
    rat.kill().await;
    python.kill().await;

    Ok(outcome)
}

async fn handshake(ai: &mut AiChannel, budget: Duration) -> Result<(), HostError> {
    ai.send_command("pyrat").await?;
    if ai.await_line(budget, |l| l.trim() == "pyratready").await {
        Ok(())
    } else {
        Err(HostError::HandshakeTimeout)
    }
}

async fn send_game_init(ai: &mut AiChannel, game: &GameState, is_rat: bool) -> Result<(), HostError> {
    ai.send_command("newgame").await?;
    ai.send_command(&format!("maze height:{} width:{}", game.height(), game.width()))
        .await?;

    let walls_line = format_walls(game.walls());
    if !walls_line.is_empty() {
        ai.send_command(&walls_line).await?;
    }

    let mud_line = format_mud(game.mud());
    if !mud_line.is_empty() {
        ai.send_command(&mud_line).await?;
    }

    let cheese_positions = game.cheese_positions();
    let cheese_line = format!(
        "cheese {}",
        cheese_positions
            .iter()
            .map(|p| format!("({},{})", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    );
    ai.send_command(&cheese_line).await?;

    let p1 = game.player1_position();
    let p2 = game.player2_position();
    ai.send_command(&format!("player1 rat ({},{})", p1.x, p1.y))
        .await?;
    ai.send_command(&format!("player2 python ({},{})", p2.x, p2.y))
        .await?;
    ai.send_command(&format!(
        "youare {}",
        if is_rat { Player::Rat } else { Player::Python }.as_str()
    ))
    .await?;
    ai.send_command("timecontrol move:100 preprocessing:3000 postprocessing:1000")
        .await?;
    Ok(())
}

fn format_walls(walls: &WallMap) -> String {
    let mut seen = std::collections::HashSet::new();
    let mut edges = Vec::new();
    for (&from, neighbors) in walls {
        for &to in neighbors {
            let key = if from < to { (from, to) } else { (to, from) };
            if seen.insert(key) {
                edges.push(format!("({},{})-({},{})", key.0.x, key.0.y, key.1.x, key.1.y));
            }
        }
    }
    if edges.is_empty() {
        String::new()
    } else {
        format!("walls {}", edges.join(" "))
    }
}

fn format_mud(mud: &MudMap) -> String {
    let edges: Vec<String> = mud
        .iter()
        .map(|((a, b), cost)| format!("({},{})-({},{}):{}", a.x, a.y, b.x, b.y, cost))
        .collect();
    if edges.is_empty() {
        String::new()
    } else {
        format!("mud {}", edges.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::Strategy;
    use std::io::Write as _;
    use std::os::unix::fs::PermissionsExt;
    use std::time::Instant;

    /// A POSIX shell script standing in for a subprocess AI: it handles just
    /// enough of the protocol to drive the scenario under test, ignoring
    /// any line it doesn't recognize (game-init commands, `moves`, etc.).
    fn fake_ai(body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp script");
        writeln!(file, "#!/bin/sh\n{body}").expect("write script");
        let mut perms = file.as_file().metadata().unwrap().permissions();
        perms.set_mode(0o755);
        file.as_file().set_permissions(perms).unwrap();
        file
    }

    const COOPERATIVE: &str = r#"
while IFS= read -r line; do
    case "$line" in
        pyrat) echo pyratready ;;
        startpreprocessing) echo preprocessingdone ;;
        go) echo "move STAY" ;;
        startpostprocessing) echo postprocessingdone ;;
    esac
done
"#;

    const SLOW_MOVER: &str = r#"
while IFS= read -r line; do
    case "$line" in
        pyrat) echo pyratready ;;
        startpreprocessing) echo preprocessingdone ;;
        go) sleep 0.2; echo "move RIGHT" ;;
        startpostprocessing) echo postprocessingdone ;;
    esac
done
"#;

    #[tokio::test]
    async fn handshake_times_out_on_silent_process() {
        let script = fake_ai("sleep 5");
        let mut ai = AiChannel::spawn(MoveProvider::Subprocess(script.path().to_path_buf()))
            .expect("spawn");
        let result = handshake(&mut ai, Duration::from_millis(50)).await;
        assert!(matches!(result, Err(HostError::HandshakeTimeout)));
        ai.kill().await;
    }

    /// Grounds property #10 / scenario S6: two AIs that each take ~200ms to
    /// answer `go` must be queried in parallel, not in sequence.
    #[tokio::test]
    async fn move_queries_run_concurrently() {
        let rat_script = fake_ai(SLOW_MOVER);
        let python_script = fake_ai(SLOW_MOVER);
        let mut rat =
            AiChannel::spawn(MoveProvider::Subprocess(rat_script.path().to_path_buf()))
                .expect("spawn rat");
        let mut python =
            AiChannel::spawn(MoveProvider::Subprocess(python_script.path().to_path_buf()))
                .expect("spawn python");
        rat.send_command("go").await.unwrap();
        python.send_command("go").await.unwrap();

        let start = Instant::now();
        let (rat_move, python_move) = tokio::join!(
            rat.await_move(Duration::from_millis(500)),
            python.await_move(Duration::from_millis(500)),
        );
        let elapsed = start.elapsed();

        assert_eq!(rat_move, Some(Direction::Right));
        assert_eq!(python_move, Some(Direction::Right));
        assert!(
            elapsed < Duration::from_millis(350),
            "move queries should overlap, took {elapsed:?}"
        );

        rat.kill().await;
        python.kill().await;
    }

    #[tokio::test]
    async fn run_match_completes_against_cooperative_ais() {
        let rat_script = fake_ai(COOPERATIVE);
        let python_script = fake_ai(COOPERATIVE);
        let config = RunnerConfig {
            width: 5,
            height: 5,
            cheese: 1,
            seed: Some(1),
            max_turns: 3,
            move_timeout: Duration::from_millis(500),
            preprocessing_timeout: Duration::from_millis(500),
            postprocessing_timeout: Duration::from_millis(500),
        };

        let outcome = run_match(rat_script.path(), python_script.path(), &config)
            .await
            .expect("match runs");

        assert!(outcome.success);
        assert_eq!(outcome.moves.len(), 3);
        assert!(outcome.moves.iter().all(|&(r, p)| r == Direction::Stay && p == Direction::Stay));
        assert!(outcome.winner.is_some());
        assert_eq!(outcome.width, 5);
        assert_eq!(outcome.height, 5);
        assert_eq!(outcome.cheese.len(), 1);
    }

    const CRASHES_ON_FIRST_MOVE: &str = r#"
while IFS= read -r line; do
    case "$line" in
        pyrat) echo pyratready ;;
        startpreprocessing) echo preprocessingdone ;;
        go) exit 1 ;;
        startpostprocessing) echo postprocessingdone ;;
    esac
done
"#;

    #[tokio::test]
    async fn crashed_ai_aborts_match_without_success() {
        let rat_script = fake_ai(CRASHES_ON_FIRST_MOVE);
        let python_script = fake_ai(COOPERATIVE);
        let config = RunnerConfig {
            width: 5,
            height: 5,
            cheese: 1,
            seed: Some(1),
            max_turns: 3,
            move_timeout: Duration::from_millis(200),
            preprocessing_timeout: Duration::from_millis(200),
            postprocessing_timeout: Duration::from_millis(200),
        };

        let outcome = run_match(rat_script.path(), python_script.path(), &config)
            .await
            .expect("runner returns a verdict rather than erroring");

        assert!(!outcome.success);
        assert!(outcome.winner.is_none());
    }

    struct ScriptedStrategy {
        moves: VecDeque<Direction>,
    }

    impl Strategy for ScriptedStrategy {
        fn get_move(&mut self, _poll_stop: &dyn Fn() -> bool) -> Direction {
            self.moves.pop_front().unwrap_or(Direction::Stay)
        }
    }

    /// Grounds C6/C7 wiring: an in-process strategy drives its side of the
    /// match the same way a subprocess would, through the same `AiChannel`
    /// surface, without spawning a process.
    #[tokio::test]
    async fn in_process_strategy_completes_a_match_against_a_subprocess_ai() {
        let python_script = fake_ai(COOPERATIVE);
        let rat_strategy = Box::new(ScriptedStrategy {
            moves: VecDeque::from(vec![Direction::Stay, Direction::Stay, Direction::Stay]),
        });
        let config = RunnerConfig {
            width: 5,
            height: 5,
            cheese: 1,
            seed: Some(1),
            max_turns: 3,
            move_timeout: Duration::from_millis(500),
            preprocessing_timeout: Duration::from_millis(500),
            postprocessing_timeout: Duration::from_millis(500),
        };

        let outcome = run_match_with_providers(
            MoveProvider::InProcess(rat_strategy),
            MoveProvider::Subprocess(python_script.path().to_path_buf()),
            &config,
        )
        .await
        .expect("match runs");

        assert!(outcome.success);
        assert_eq!(outcome.moves.len(), 3);
    }

    /// Grounds replaying a previously-recorded match without running any
    /// AI at all: both sides are scripted sequences.
    #[tokio::test]
    async fn replay_providers_reproduce_a_recorded_match() {
        let config = RunnerConfig {
            width: 5,
            height: 5,
            cheese: 1,
            seed: Some(1),
            max_turns: 2,
            move_timeout: Duration::from_millis(200),
            preprocessing_timeout: Duration::from_millis(200),
            postprocessing_timeout: Duration::from_millis(200),
        };

        let outcome = run_match_with_providers(
            MoveProvider::Replay(vec![Direction::Stay, Direction::Stay]),
            MoveProvider::Replay(vec![Direction::Stay, Direction::Stay]),
            &config,
        )
        .await
        .expect("match runs");

        assert!(outcome.success);
        assert_eq!(outcome.moves.len(), 2);
    }
}
