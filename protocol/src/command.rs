//! Structured representation of every engine-to-AI command.

use pyrat_engine::{Coordinates, Direction};
use std::collections::HashMap;

/// Which side a command or response is talking about.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Player {
    Rat,
    Python,
}

impl Player {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rat => "rat",
            Self::Python => "python",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "rat" => Some(Self::Rat),
            "python" => Some(Self::Python),
            _ => None,
        }
    }
}

/// Outcome reported by a `gameover` command.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameResult {
    Rat,
    Python,
    Draw,
}

impl GameResult {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rat => "rat",
            Self::Python => "python",
            Self::Draw => "draw",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "rat" => Some(Self::Rat),
            "python" => Some(Self::Python),
            "draw" => Some(Self::Draw),
            _ => None,
        }
    }
}

/// Which phase timed out, for `timeout preprocessing`/`timeout postprocessing`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TimeoutPhase {
    Move(Direction),
    Preprocessing,
    Postprocessing,
}

/// A fully parsed engine-to-AI command.
#[derive(Clone, PartialEq, Debug)]
pub enum Command {
    Pyrat,
    IsReady,
    SetOption {
        name: String,
        value: String,
    },
    Debug {
        enabled: bool,
    },
    NewGame,
    Maze {
        width: u8,
        height: u8,
    },
    Walls(Vec<(Coordinates, Coordinates)>),
    Mud(Vec<(Coordinates, Coordinates, u8)>),
    Cheese(Vec<Coordinates>),
    Player1 {
        position: Coordinates,
    },
    Player2 {
        position: Coordinates,
    },
    YouAre(Player),
    TimeControl {
        move_ms: Option<u32>,
        preprocessing_ms: Option<u32>,
        postprocessing_ms: Option<u32>,
    },
    StartPreprocessing,
    Moves {
        rat: Direction,
        python: Direction,
    },
    Go,
    Stop,
    Timeout(TimeoutPhase),
    ReadyQuery,
    GameOver {
        winner: GameResult,
        rat_score: f64,
        python_score: f64,
    },
    StartPostprocessing,
    Recover,
    MovesHistory(Vec<Direction>),
    CurrentPosition {
        rat: Coordinates,
        python: Coordinates,
    },
    Score {
        rat: f64,
        python: f64,
    },
}

/// Parses one line of the wire protocol. Unknown commands, malformed
/// arguments, and blank lines all yield `None` rather than an error — per the
/// protocol, a bad incoming command is dropped, never fatal.
#[must_use]
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let parts: Vec<&str> = line.split_whitespace().collect();
    let cmd = parts[0].to_lowercase();

    match cmd.as_str() {
        "pyrat" => Some(Command::Pyrat),
        "isready" => Some(Command::IsReady),
        "newgame" => Some(Command::NewGame),
        "startpreprocessing" => Some(Command::StartPreprocessing),
        "go" => Some(Command::Go),
        "stop" => Some(Command::Stop),
        "ready?" => Some(Command::ReadyQuery),
        "startpostprocessing" => Some(Command::StartPostprocessing),
        "recover" => Some(Command::Recover),

        "setoption" => parse_setoption(&parts),
        "debug" => parse_debug(&parts),
        "maze" => parse_maze(&parts),
        "walls" => parse_walls(&parts),
        "mud" => parse_mud(&parts),
        "cheese" => parse_cheese(&parts),
        "player1" => parse_player(&parts, true),
        "player2" => parse_player(&parts, false),
        "youare" => parse_youare(&parts),
        "timecontrol" => parse_timecontrol(&parts),
        "moves" => parse_moves(&parts),
        "timeout" => parse_timeout(&parts),
        "gameover" => parse_gameover(&parts),
        "moves_history" => parse_moves_history(&parts),
        "current_position" => parse_current_position(&parts),
        "score" => parse_score(&parts),

        _ => None,
    }
}

fn parse_setoption(parts: &[&str]) -> Option<Command> {
    if parts.len() < 5 || parts[1] != "name" {
        return None;
    }
    let value_idx = parts.iter().position(|&p| p == "value")?;
    if value_idx <= 2 {
        return None;
    }
    let name = parts[2..value_idx].join(" ");
    let value = parts[value_idx + 1..].join(" ");
    Some(Command::SetOption { name, value })
}

fn parse_debug(parts: &[&str]) -> Option<Command> {
    if parts.len() != 2 {
        return None;
    }
    match parts[1] {
        "on" => Some(Command::Debug { enabled: true }),
        "off" => Some(Command::Debug { enabled: false }),
        _ => None,
    }
}

fn parse_maze(parts: &[&str]) -> Option<Command> {
    if parts.len() != 3 {
        return None;
    }
    let mut fields: HashMap<&str, u8> = HashMap::new();
    for part in &parts[1..] {
        let (key, value) = part.split_once(':')?;
        if key != "height" && key != "width" {
            return None;
        }
        fields.insert(key, value.parse().ok()?);
    }
    Some(Command::Maze {
        width: *fields.get("width")?,
        height: *fields.get("height")?,
    })
}

fn parse_walls(parts: &[&str]) -> Option<Command> {
    let mut walls = Vec::with_capacity(parts.len().saturating_sub(1));
    for part in &parts[1..] {
        walls.push(parse_edge(part)?);
    }
    Some(Command::Walls(walls))
}

fn parse_mud(parts: &[&str]) -> Option<Command> {
    let mut mud = Vec::with_capacity(parts.len().saturating_sub(1));
    for part in &parts[1..] {
        let (edge_part, cost_part) = part.rsplit_once(':')?;
        let (pos1, pos2) = parse_edge(edge_part)?;
        let cost: u8 = cost_part.parse().ok()?;
        mud.push((pos1, pos2, cost));
    }
    Some(Command::Mud(mud))
}

fn parse_cheese(parts: &[&str]) -> Option<Command> {
    let mut cheese = Vec::with_capacity(parts.len().saturating_sub(1));
    for part in &parts[1..] {
        cheese.push(parse_position(part)?);
    }
    Some(Command::Cheese(cheese))
}

fn parse_player(parts: &[&str], is_player_one: bool) -> Option<Command> {
    if parts.len() != 3 {
        return None;
    }
    let expected = if is_player_one { "rat" } else { "python" };
    if parts[1] != expected {
        return None;
    }
    let position = parse_position(parts[2])?;
    Some(if is_player_one {
        Command::Player1 { position }
    } else {
        Command::Player2 { position }
    })
}

fn parse_youare(parts: &[&str]) -> Option<Command> {
    if parts.len() != 2 {
        return None;
    }
    Some(Command::YouAre(Player::parse(parts[1])?))
}

fn parse_timecontrol(parts: &[&str]) -> Option<Command> {
    if parts.len() < 2 {
        return None;
    }
    let mut move_ms = None;
    let mut preprocessing_ms = None;
    let mut postprocessing_ms = None;
    for part in &parts[1..] {
        let (key, value) = part.split_once(':')?;
        let value: u32 = value.parse().ok()?;
        match key {
            "move" => move_ms = Some(value),
            "preprocessing" => preprocessing_ms = Some(value),
            "postprocessing" => postprocessing_ms = Some(value),
            _ => return None,
        }
    }
    Some(Command::TimeControl {
        move_ms,
        preprocessing_ms,
        postprocessing_ms,
    })
}

fn parse_moves(parts: &[&str]) -> Option<Command> {
    if parts.len() != 3 {
        return None;
    }
    let mut rat = None;
    let mut python = None;
    for part in &parts[1..] {
        let (player_str, move_str) = part.split_once(':')?;
        let player = Player::parse(player_str)?;
        let direction = parse_direction(move_str)?;
        match player {
            Player::Rat => rat = Some(direction),
            Player::Python => python = Some(direction),
        }
    }
    Some(Command::Moves {
        rat: rat?,
        python: python?,
    })
}

fn parse_timeout(parts: &[&str]) -> Option<Command> {
    if parts.len() != 2 {
        return None;
    }
    match parts[1] {
        "preprocessing" => Some(Command::Timeout(TimeoutPhase::Preprocessing)),
        "postprocessing" => Some(Command::Timeout(TimeoutPhase::Postprocessing)),
        other => {
            let (key, value) = other.split_once(':')?;
            if key != "move" {
                return None;
            }
            let direction = parse_direction(value)?;
            Some(Command::Timeout(TimeoutPhase::Move(direction)))
        }
    }
}

fn parse_gameover(parts: &[&str]) -> Option<Command> {
    if parts.len() != 3 {
        return None;
    }
    let mut winner = None;
    let mut score = None;
    for part in &parts[1..] {
        let (key, value) = part.split_once(':')?;
        match key {
            "winner" => winner = Some(GameResult::parse(value)?),
            "score" => {
                let (r, p) = value.split_once('-')?;
                score = Some((r.parse::<f64>().ok()?, p.parse::<f64>().ok()?));
            }
            _ => return None,
        }
    }
    let (rat_score, python_score) = score?;
    Some(Command::GameOver {
        winner: winner?,
        rat_score,
        python_score,
    })
}

fn parse_moves_history(parts: &[&str]) -> Option<Command> {
    let mut history = Vec::with_capacity(parts.len().saturating_sub(1));
    for part in &parts[1..] {
        history.push(parse_direction(part)?);
    }
    Some(Command::MovesHistory(history))
}

fn parse_current_position(parts: &[&str]) -> Option<Command> {
    if parts.len() != 3 {
        return None;
    }
    let mut rat = None;
    let mut python = None;
    for part in &parts[1..] {
        let (player_str, pos_str) = part.split_once(':')?;
        let player = Player::parse(player_str)?;
        let pos = parse_position(pos_str)?;
        match player {
            Player::Rat => rat = Some(pos),
            Player::Python => python = Some(pos),
        }
    }
    Some(Command::CurrentPosition {
        rat: rat?,
        python: python?,
    })
}

fn parse_score(parts: &[&str]) -> Option<Command> {
    if parts.len() != 3 {
        return None;
    }
    let mut rat = None;
    let mut python = None;
    for part in &parts[1..] {
        let (player_str, score_str) = part.split_once(':')?;
        let player = Player::parse(player_str)?;
        let score: f64 = score_str.parse().ok()?;
        match player {
            Player::Rat => rat = Some(score),
            Player::Python => python = Some(score),
        }
    }
    Some(Command::Score {
        rat: rat?,
        python: python?,
    })
}

/// Parses `(x,y)`. Tolerates inner whitespace around the comma.
fn parse_position(s: &str) -> Option<Coordinates> {
    let s = s.strip_prefix('(')?.strip_suffix(')')?;
    let (x, y) = s.split_once(',')?;
    Some(Coordinates::new(
        x.trim().parse().ok()?,
        y.trim().parse().ok()?,
    ))
}

/// Parses `(x1,y1)-(x2,y2)`.
fn parse_edge(s: &str) -> Option<(Coordinates, Coordinates)> {
    let (a, b) = s.split_once('-')?;
    Some((parse_position(a)?, parse_position(b)?))
}

/// Parses a direction token, case-insensitively.
fn parse_direction(s: &str) -> Option<Direction> {
    match s.to_uppercase().as_str() {
        "UP" => Some(Direction::Up),
        "DOWN" => Some(Direction::Down),
        "LEFT" => Some(Direction::Left),
        "RIGHT" => Some(Direction::Right),
        "STAY" => Some(Direction::Stay),
        _ => None,
    }
}
