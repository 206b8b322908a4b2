//! PGN-like replay format: a tag block, the static maze layout, and one
//! line per resolved turn.

use pyrat_engine::{Coordinates, Direction, MudMap, WallMap};
use std::collections::HashMap;
use std::fmt::Write as _;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    #[error("malformed tag line: {0}")]
    MalformedTag(String),
    #[error("malformed turn line: {0}")]
    MalformedTurn(String),
    #[error("missing required tag: {0}")]
    MissingTag(&'static str),
}

/// One side's move for a recorded turn, or a timeout substitution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplayMove {
    Move(Direction),
    Timeout,
}

impl ReplayMove {
    const fn letter(self) -> char {
        match self {
            Self::Move(Direction::Up) => 'U',
            Self::Move(Direction::Down) => 'D',
            Self::Move(Direction::Left) => 'L',
            Self::Move(Direction::Right) => 'R',
            Self::Move(Direction::Stay) => 'S',
            Self::Timeout => '*',
        }
    }

    fn from_letter(c: char) -> Option<Self> {
        match c {
            'U' => Some(Self::Move(Direction::Up)),
            'D' => Some(Self::Move(Direction::Down)),
            'L' => Some(Self::Move(Direction::Left)),
            'R' => Some(Self::Move(Direction::Right)),
            'S' => Some(Self::Move(Direction::Stay)),
            '*' => Some(Self::Timeout),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ReplayTurn {
    pub rat: ReplayMove,
    pub python: ReplayMove,
    pub rat_ms: u32,
    pub python_ms: u32,
    pub comment: Option<String>,
}

/// A complete recorded match: tags, the fixed maze layout, and the
/// resolved move sequence.
#[derive(Clone, Debug)]
pub struct GameReplay {
    pub tags: HashMap<String, String>,
    pub width: u8,
    pub height: u8,
    pub walls: WallMap,
    pub mud: MudMap,
    pub cheese: Vec<Coordinates>,
    pub player1_start: Coordinates,
    pub player2_start: Coordinates,
    pub turns: Vec<ReplayTurn>,
}

impl Default for GameReplay {
    fn default() -> Self {
        Self {
            tags: HashMap::new(),
            width: 0,
            height: 0,
            walls: WallMap::new(),
            mud: MudMap::new(),
            cheese: Vec::new(),
            player1_start: Coordinates::new(0, 0),
            player2_start: Coordinates::new(0, 0),
            turns: Vec::new(),
        }
    }
}

impl GameReplay {
    #[must_use]
    pub fn to_pgn(&self) -> String {
        let mut out = String::new();
        let mut tag_keys: Vec<&String> = self.tags.keys().collect();
        tag_keys.sort();
        for key in tag_keys {
            let _ = writeln!(out, "[{} \"{}\"]", key, self.tags[key]);
        }
        let _ = writeln!(out, "[Width \"{}\"]", self.width);
        let _ = writeln!(out, "[Height \"{}\"]", self.height);
        out.push('\n');

        let walls = format_edges('W', &self.walls);
        if !walls.is_empty() {
            let _ = writeln!(out, "{walls}");
        }
        let mud = format_mud_line(&self.mud);
        if !mud.is_empty() {
            let _ = writeln!(out, "{mud}");
        }
        let cheese: Vec<String> = self
            .cheese
            .iter()
            .map(|p| format!("({},{})", p.x, p.y))
            .collect();
        let _ = writeln!(out, "C: {}", cheese.join(" "));
        let _ = writeln!(out, "R: ({},{})", self.player1_start.x, self.player1_start.y);
        let _ = writeln!(out, "P: ({},{})", self.player2_start.x, self.player2_start.y);
        out.push('\n');

        for (i, turn) in self.turns.iter().enumerate() {
            let mut line = format!(
                "{}. {}/{} ({}/{})",
                i + 1,
                turn.rat.letter(),
                turn.python.letter(),
                turn.rat_ms,
                turn.python_ms
            );
            if let Some(comment) = &turn.comment {
                let _ = write!(line, " {{{comment}}}");
            }
            let _ = writeln!(out, "{line}");
        }
        out
    }

    pub fn from_pgn(input: &str) -> Result<Self, ReplayError> {
        let mut tags = HashMap::new();
        let mut walls = WallMap::new();
        let mut mud = MudMap::new();
        let mut cheese = Vec::new();
        let mut player1_start = None;
        let mut player2_start = None;
        let mut turns = Vec::new();

        for raw_line in input.lines() {
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }
            if let Some(tag) = line.strip_prefix('[') {
                let tag = tag
                    .strip_suffix(']')
                    .ok_or_else(|| ReplayError::MalformedTag(line.to_string()))?;
                let mut parts = tag.splitn(2, ' ');
                let key = parts.next().ok_or_else(|| ReplayError::MalformedTag(line.to_string()))?;
                let value = parts
                    .next()
                    .ok_or_else(|| ReplayError::MalformedTag(line.to_string()))?
                    .trim_matches('"');
                tags.insert(key.to_string(), value.to_string());
            } else if let Some(rest) = line.strip_prefix("W:") {
                walls = parse_edges(rest);
            } else if let Some(rest) = line.strip_prefix("M:") {
                mud = parse_mud_edges(rest)?;
            } else if let Some(rest) = line.strip_prefix("C:") {
                cheese = parse_positions(rest);
            } else if let Some(rest) = line.strip_prefix("R:") {
                player1_start = parse_positions(rest).first().copied();
            } else if let Some(rest) = line.strip_prefix("P:") {
                player2_start = parse_positions(rest).first().copied();
            } else if line.chars().next().is_some_and(|c| c.is_ascii_digit()) {
                turns.push(parse_turn_line(line)?);
            }
        }

        let width = tags
            .get("Width")
            .and_then(|w| w.parse().ok())
            .ok_or(ReplayError::MissingTag("Width"))?;
        let height = tags
            .get("Height")
            .and_then(|h| h.parse().ok())
            .ok_or(ReplayError::MissingTag("Height"))?;

        Ok(Self {
            tags,
            width,
            height,
            walls,
            mud,
            cheese,
            player1_start: player1_start.ok_or(ReplayError::MissingTag("R"))?,
            player2_start: player2_start.ok_or(ReplayError::MissingTag("P"))?,
            turns,
        })
    }
}

fn format_edges(prefix: char, walls: &WallMap) -> String {
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
        format!("{prefix}: {}", edges.join(" "))
    }
}

fn format_mud_line(mud: &MudMap) -> String {
    let edges: Vec<String> = mud
        .iter()
        .map(|((a, b), cost)| format!("({},{})-({},{}):{}", a.x, a.y, b.x, b.y, cost))
        .collect();
    if edges.is_empty() {
        String::new()
    } else {
        format!("M: {}", edges.join(" "))
    }
}

fn parse_position(token: &str) -> Option<Coordinates> {
    let token = token.trim().trim_start_matches('(').trim_end_matches(')');
    let (x, y) = token.split_once(',')?;
    Some(Coordinates::new(x.trim().parse().ok()?, y.trim().parse().ok()?))
}

fn parse_positions(rest: &str) -> Vec<Coordinates> {
    rest.split_whitespace().filter_map(parse_position).collect()
}

fn parse_edges(rest: &str) -> WallMap {
    let mut walls = WallMap::new();
    for token in rest.split_whitespace() {
        if let Some((a, b)) = token.split_once('-') {
            if let (Some(a), Some(b)) = (parse_position(a), parse_position(b)) {
                walls.entry(a).or_default().push(b);
                walls.entry(b).or_default().push(a);
            }
        }
    }
    walls
}

fn parse_mud_edges(rest: &str) -> Result<MudMap, ReplayError> {
    let mut mud = MudMap::new();
    for token in rest.split_whitespace() {
        let (edge, cost) = token
            .split_once(':')
            .ok_or_else(|| ReplayError::MalformedTurn(token.to_string()))?;
        let (a, b) = edge
            .split_once('-')
            .ok_or_else(|| ReplayError::MalformedTurn(token.to_string()))?;
        let a = parse_position(a).ok_or_else(|| ReplayError::MalformedTurn(token.to_string()))?;
        let b = parse_position(b).ok_or_else(|| ReplayError::MalformedTurn(token.to_string()))?;
        let cost: u8 = cost
            .parse()
            .map_err(|_| ReplayError::MalformedTurn(token.to_string()))?;
        mud.insert(a, b, cost);
    }
    Ok(mud)
}

fn parse_turn_line(line: &str) -> Result<ReplayTurn, ReplayError> {
    let (_, rest) = line
        .split_once('.')
        .ok_or_else(|| ReplayError::MalformedTurn(line.to_string()))?;
    let rest = rest.trim();
    let (comment, rest) = if let Some(open) = rest.find('{') {
        let close = rest
            .rfind('}')
            .ok_or_else(|| ReplayError::MalformedTurn(line.to_string()))?;
        (Some(rest[open + 1..close].to_string()), rest[..open].trim())
    } else {
        (None, rest)
    };

    let mut fields = rest.split_whitespace();
    let moves = fields
        .next()
        .ok_or_else(|| ReplayError::MalformedTurn(line.to_string()))?;
    let (rat_letter, python_letter) = moves
        .split_once('/')
        .ok_or_else(|| ReplayError::MalformedTurn(line.to_string()))?;
    let rat = ReplayMove::from_letter(
        rat_letter
            .chars()
            .next()
            .ok_or_else(|| ReplayError::MalformedTurn(line.to_string()))?,
    )
    .ok_or_else(|| ReplayError::MalformedTurn(line.to_string()))?;
    let python = ReplayMove::from_letter(
        python_letter
            .chars()
            .next()
            .ok_or_else(|| ReplayError::MalformedTurn(line.to_string()))?,
    )
    .ok_or_else(|| ReplayError::MalformedTurn(line.to_string()))?;

    let timings = fields
        .next()
        .ok_or_else(|| ReplayError::MalformedTurn(line.to_string()))?
        .trim_start_matches('(')
        .trim_end_matches(')');
    let (rat_ms, python_ms) = timings
        .split_once('/')
        .ok_or_else(|| ReplayError::MalformedTurn(line.to_string()))?;
    let rat_ms = rat_ms
        .parse()
        .map_err(|_| ReplayError::MalformedTurn(line.to_string()))?;
    let python_ms = python_ms
        .parse()
        .map_err(|_| ReplayError::MalformedTurn(line.to_string()))?;

    Ok(ReplayTurn {
        rat,
        python,
        rat_ms,
        python_ms,
        comment,
    })
}
