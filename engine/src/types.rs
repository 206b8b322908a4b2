use crate::error::GameError;
use std::collections::HashMap;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Coordinates {
    pub x: u8,
    pub y: u8,
}

impl Coordinates {
    #[must_use]
    #[inline(always)]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    #[must_use]
    #[inline(always)]
    pub const fn to_index(&self, width: u8) -> usize {
        (self.y as usize) * (width as usize) + (self.x as usize)
    }

    #[must_use]
    pub fn is_adjacent_to(&self, other: &Self) -> bool {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        (dx == 1 && dy == 0) || (dx == 0 && dy == 1)
    }

    #[must_use]
    pub fn manhattan_distance(&self, other: &Self) -> u16 {
        u16::from(self.x.abs_diff(other.x)) + u16::from(self.y.abs_diff(other.y))
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// `UP`=0, `RIGHT`=1, `DOWN`=2, `LEFT`=3, `STAY`=4. These tags are observable on the
/// wire (see the protocol codec) and must not be reordered.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum Direction {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
    Stay = 4,
}

impl Direction {
    /// Apply move in the mathematical coordinate system where:
    /// - x increases to the right
    /// - y increases going up
    /// - (0,0) is at the bottom-left corner
    #[inline(always)]
    #[must_use]
    pub const fn apply_to(&self, pos: Coordinates) -> Coordinates {
        match self {
            Self::Up => Coordinates {
                x: pos.x,
                y: pos.y.saturating_add(1),
            },
            Self::Down => Coordinates {
                x: pos.x,
                y: pos.y.saturating_sub(1),
            },
            Self::Left => Coordinates {
                x: pos.x.saturating_sub(1),
                y: pos.y,
            },
            Self::Right => Coordinates {
                x: pos.x.saturating_add(1),
                y: pos.y,
            },
            Self::Stay => pos,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "UP",
            Self::Down => "DOWN",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::Stay => "STAY",
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = &'static str;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Up),
            1 => Ok(Self::Right),
            2 => Ok(Self::Down),
            3 => Ok(Self::Left),
            4 => Ok(Self::Stay),
            _ => Err("Invalid direction value"),
        }
    }
}

/// A wrapper around `HashMap` that handles bidirectional mud lookups.
#[derive(Clone, Default, Debug)]
pub struct MudMap {
    inner: HashMap<(Coordinates, Coordinates), u8>,
}

impl MudMap {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: HashMap::new(),
        }
    }

    /// Insert mud between two positions (order doesn't matter).
    pub fn insert(&mut self, pos1: Coordinates, pos2: Coordinates, value: u8) {
        self.inner.insert((pos1, pos2), value);
        self.inner.insert((pos2, pos1), value);
    }

    /// Get the mud cost between two positions (order doesn't matter).
    #[must_use]
    pub fn get(&self, pos1: Coordinates, pos2: Coordinates) -> Option<u8> {
        self.inner
            .get(&(pos1, pos2))
            .or_else(|| self.inner.get(&(pos2, pos1)))
            .copied()
    }

    /// Whether a mud edge exists between two positions (order doesn't matter).
    #[must_use]
    pub fn contains(&self, pos1: Coordinates, pos2: Coordinates) -> bool {
        self.get(pos1, pos2).is_some()
    }

    /// Returns an iterator over all unique mud edges and their costs.
    pub fn iter(&self) -> impl Iterator<Item = ((Coordinates, Coordinates), u8)> + '_ {
        self.inner
            .iter()
            .filter(|((pos1, pos2), _)| pos1 < pos2)
            .map(|((pos1, pos2), &value)| ((*pos1, *pos2), value))
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len() / 2
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl std::ops::Deref for MudMap {
    type Target = HashMap<(Coordinates, Coordinates), u8>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

/// An edge that blocks movement in both directions. Endpoints are normalized
/// so the lexicographically smaller coordinate is `pos1`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Wall {
    pub pos1: Coordinates,
    pub pos2: Coordinates,
}

impl Wall {
    /// # Errors
    /// Returns [`GameError::InvalidEdge`] if the two positions are not adjacent.
    pub fn new(pos1: Coordinates, pos2: Coordinates) -> Result<Self, GameError> {
        if !pos1.is_adjacent_to(&pos2) {
            return Err(GameError::InvalidEdge(pos1, pos2));
        }
        let (p1, p2) = if pos1 < pos2 { (pos1, pos2) } else { (pos2, pos1) };
        Ok(Self { pos1: p1, pos2: p2 })
    }

    #[must_use]
    pub fn blocks_movement(&self, from: Coordinates, to: Coordinates) -> bool {
        if !from.is_adjacent_to(&to) {
            return false;
        }
        (self.pos1 == from && self.pos2 == to) || (self.pos1 == to && self.pos2 == from)
    }
}

/// An edge with a traversal cost `N >= 2`. Endpoints are normalized the same
/// way as `Wall`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Mud {
    pub pos1: Coordinates,
    pub pos2: Coordinates,
    pub value: u8,
}

impl Mud {
    /// # Errors
    /// Returns [`GameError::InvalidEdge`] if the positions are not adjacent, or
    /// [`GameError::InvalidMudCost`] if `value < 2`.
    pub fn new(pos1: Coordinates, pos2: Coordinates, value: u8) -> Result<Self, GameError> {
        if !pos1.is_adjacent_to(&pos2) {
            return Err(GameError::InvalidEdge(pos1, pos2));
        }
        if value < 2 {
            return Err(GameError::InvalidMudCost(u16::from(value)));
        }
        let (p1, p2) = if pos1 < pos2 { (pos1, pos2) } else { (pos2, pos1) };
        Ok(Self {
            pos1: p1,
            pos2: p2,
            value,
        })
    }

    #[must_use]
    pub fn blocks_movement(&self, from: Coordinates, to: Coordinates) -> bool {
        (self.pos1 == from && self.pos2 == to) || (self.pos1 == to && self.pos2 == from)
    }
}
