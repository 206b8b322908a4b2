use crate::{Coordinates, Direction, WallMap};

/// Legality of the four non-STAY directions for every cell, packed two cells
/// per byte (a nibble each) so the whole table for a classic 21x15 board
/// fits in under 160 bytes and a lookup is a single array read plus a shift.
///
/// Bit layout per nibble: bit0=UP, bit1=RIGHT, bit2=DOWN, bit3=LEFT.
#[derive(Clone)]
pub struct MovementTable {
    nibbles: Vec<u8>,
    width: u8,
}

const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Right,
    Direction::Down,
    Direction::Left,
];

impl MovementTable {
    #[must_use]
    pub fn new(width: u8, height: u8, walls: &WallMap) -> Self {
        let cell_count = width as usize * height as usize;
        let mut nibbles = vec![0u8; cell_count.div_ceil(2)];

        for y in 0..height {
            for x in 0..width {
                let here = Coordinates::new(x, y);
                let mask = legal_directions(here, width, height, walls);
                write_nibble(&mut nibbles, here.to_index(width), mask);
            }
        }

        Self { nibbles, width }
    }

    /// Whether stepping from `pos` in `direction` stays on the board and
    /// crosses no wall. Always `true` for [`Direction::Stay`].
    #[inline(always)]
    #[must_use]
    pub fn is_move_valid(&self, pos: Coordinates, direction: Direction) -> bool {
        if direction == Direction::Stay {
            return true;
        }
        read_nibble(&self.nibbles, pos.to_index(self.width)) & direction_bit(direction) != 0
    }

    /// Bitmask of legal non-STAY directions at `pos` (see the bit layout in
    /// the type doc comment).
    #[inline(always)]
    #[must_use]
    pub fn get_valid_moves(&self, pos: Coordinates) -> u8 {
        read_nibble(&self.nibbles, pos.to_index(self.width))
    }
}

fn legal_directions(from: Coordinates, width: u8, height: u8, walls: &WallMap) -> u8 {
    let mut mask = 0u8;
    for &direction in &DIRECTIONS {
        if on_board_after(from, direction, width, height) {
            let to = direction.apply_to(from);
            if !edge_is_wall(walls, from, to) {
                mask |= direction_bit(direction);
            }
        }
    }
    mask
}

const fn on_board_after(from: Coordinates, direction: Direction, width: u8, height: u8) -> bool {
    match direction {
        Direction::Up => from.y + 1 < height,
        Direction::Down => from.y > 0,
        Direction::Right => from.x + 1 < width,
        Direction::Left => from.x > 0,
        Direction::Stay => true,
    }
}

const fn direction_bit(direction: Direction) -> u8 {
    match direction {
        Direction::Up => 1,
        Direction::Right => 2,
        Direction::Down => 4,
        Direction::Left => 8,
        Direction::Stay => 0,
    }
}

/// An edge blocks movement if either endpoint lists the other as a
/// neighbor in `walls` — the generator and the builder both insert wall
/// edges symmetrically, but this stays defensive against a one-sided entry.
fn edge_is_wall(walls: &WallMap, from: Coordinates, to: Coordinates) -> bool {
    walls.get(&from).is_some_and(|blocked| blocked.contains(&to))
        || walls.get(&to).is_some_and(|blocked| blocked.contains(&from))
}

fn write_nibble(nibbles: &mut [u8], idx: usize, value: u8) {
    let byte = &mut nibbles[idx / 2];
    if idx.is_multiple_of(2) {
        *byte |= value;
    } else {
        *byte |= value << 4;
    }
}

fn read_nibble(nibbles: &[u8], idx: usize) -> u8 {
    let byte = nibbles[idx / 2];
    if idx.is_multiple_of(2) {
        byte & 0x0F
    } else {
        byte >> 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wall_between(walls: &mut WallMap, a: Coordinates, b: Coordinates) {
        walls.entry(a).or_default().push(b);
        walls.entry(b).or_default().push(a);
    }

    #[test]
    fn open_2x2_board_allows_every_in_bounds_step() {
        let table = MovementTable::new(2, 2, &WallMap::new());

        assert!(table.is_move_valid(Coordinates::new(0, 0), Direction::Up));
        assert!(table.is_move_valid(Coordinates::new(0, 0), Direction::Right));
        assert!(!table.is_move_valid(Coordinates::new(0, 0), Direction::Down));
        assert!(!table.is_move_valid(Coordinates::new(0, 0), Direction::Left));
        assert!(table.is_move_valid(Coordinates::new(1, 1), Direction::Down));
        assert!(table.is_move_valid(Coordinates::new(1, 1), Direction::Left));
        assert!(table.is_move_valid(Coordinates::new(0, 0), Direction::Stay));
    }

    #[test]
    fn wall_blocks_both_directions_of_crossing() {
        let mut walls = WallMap::new();
        wall_between(&mut walls, Coordinates::new(0, 0), Coordinates::new(1, 0));
        let table = MovementTable::new(2, 2, &walls);

        assert!(!table.is_move_valid(Coordinates::new(0, 0), Direction::Right));
        assert!(!table.is_move_valid(Coordinates::new(1, 0), Direction::Left));
        // Perpendicular movement at the same cells is unaffected.
        assert!(table.is_move_valid(Coordinates::new(0, 0), Direction::Up));
        assert!(table.is_move_valid(Coordinates::new(1, 0), Direction::Up));
    }

    #[test]
    fn two_walls_meeting_at_a_corner_cell_block_both() {
        let mut walls = WallMap::new();
        wall_between(&mut walls, Coordinates::new(0, 0), Coordinates::new(1, 0));
        wall_between(&mut walls, Coordinates::new(0, 0), Coordinates::new(0, 1));
        let table = MovementTable::new(2, 2, &walls);

        let corner = Coordinates::new(0, 0);
        assert!(!table.is_move_valid(corner, Direction::Right));
        assert!(!table.is_move_valid(corner, Direction::Up));
        assert!(!table.is_move_valid(corner, Direction::Down)); // board edge
        assert!(!table.is_move_valid(corner, Direction::Left)); // board edge
        assert_eq!(table.get_valid_moves(corner), 0);
    }

    #[test]
    fn bitmask_matches_individual_queries() {
        let table = MovementTable::new(3, 3, &WallMap::new());
        let center = Coordinates::new(1, 1);
        let mask = table.get_valid_moves(center);
        for &direction in &DIRECTIONS {
            let bit_set = mask & direction_bit(direction) != 0;
            assert_eq!(bit_set, table.is_move_valid(center, direction));
        }
    }
}
