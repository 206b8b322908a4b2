use std::collections::{HashMap, HashSet};

use rand::prelude::SliceRandom;
use rand::Rng;

use crate::types::MudMap;
use crate::{Coordinates, WallMap};

/// Parameters for [`MazeGenerator`]. `target_density` is the probability
/// that any given candidate edge stays a wall rather than becoming a
/// passage; `mud_density`/`mud_range` govern how often an opened passage
/// gets a mud cost and how high that cost can roll.
#[derive(Debug, Clone, Copy)]
pub struct MazeConfig {
    pub width: u8,
    pub height: u8,
    pub target_density: f32,
    pub connected: bool,
    pub symmetry: bool,
    pub mud_density: f32,
    pub mud_range: u8,
    pub seed: Option<u64>,
}

/// Builds a maze's passage graph and mud costs from a `MazeConfig`, then
/// hands back the inverted representation ([`WallMap`]) the rest of the
/// engine operates on.
///
/// Generation is seeded and RNG-order-sensitive: the same seed must always
/// draw its random numbers in the same sequence to reproduce the same
/// maze, so internal passes that touch `self.rng` preserve call order even
/// when restructured.
pub struct MazeGenerator {
    config: MazeConfig,
    rng: rand::rngs::StdRng,
    connections: HashMap<Coordinates, Vec<Coordinates>>,
    mud: MudMap,
}

impl MazeGenerator {
    #[must_use]
    pub fn new(config: MazeConfig) -> Self {
        let rng = config
            .seed
            .map_or_else(rand::SeedableRng::from_entropy, |seed| {
                rand::SeedableRng::seed_from_u64(seed)
            });

        Self {
            config,
            rng,
            connections: HashMap::new(),
            mud: MudMap::new(),
        }
    }

    /// Generates a complete maze: random passage carving, then (optionally)
    /// connectivity repair, then a pass that guarantees every border cell
    /// has at least one opening.
    ///
    /// # Panics
    /// If the resulting graph fails internal validation (non-bidirectional
    /// connections, out-of-bounds edges, or — when `connected` is set — an
    /// unreachable cell). This indicates a bug in generation, not bad input.
    pub fn generate(&mut self) -> (WallMap, MudMap) {
        self.carve_random_passages();

        if self.config.connected {
            self.repair_connectivity();
        }

        self.open_isolated_border_cells();

        if let Err(reason) = self.validate() {
            panic!("maze generation produced an invalid graph: {reason}");
        }

        (self.connections_to_walls(), self.mud.clone())
    }

    /// Rolls every horizontal and vertical edge in the grid once, carving a
    /// passage (and possibly mud) when the roll beats `target_density`.
    /// Under symmetry, a cell already handled via its mirror's turn is
    /// skipped so each symmetric pair is only rolled from one side.
    fn carve_random_passages(&mut self) {
        let mut unvisited: HashSet<Coordinates> = (0..self.config.width)
            .flat_map(|x| (0..self.config.height).map(move |y| Coordinates::new(x, y)))
            .collect();

        for x in 0..self.config.width {
            for y in 0..self.config.height {
                let here = Coordinates::new(x, y);
                if self.config.symmetry && !unvisited.contains(&here) {
                    continue;
                }

                if x + 1 < self.config.width {
                    self.try_carve(here, Coordinates::new(x + 1, y));
                }
                if y + 1 < self.config.height {
                    self.try_carve(here, Coordinates::new(x, y + 1));
                }

                if self.config.symmetry {
                    unvisited.remove(&here);
                    unvisited.remove(&self.mirror(here));
                }
            }
        }
    }

    /// Rolls the wall/passage decision for one candidate edge. Consumes
    /// exactly one `f32` draw regardless of outcome.
    fn try_carve(&mut self, from: Coordinates, to: Coordinates) {
        let stays_wall: f32 = self.rng.gen();
        if stays_wall < self.config.target_density {
            return;
        }
        self.carve(from, to);
    }

    /// Opens `from`-`to`, rolls one mud value, and applies both the
    /// connection and the mud to the mirrored edge too when symmetric (the
    /// mirrored edge reuses this roll rather than drawing its own).
    fn carve(&mut self, from: Coordinates, to: Coordinates) {
        self.connect(from, to);
        let mud_value = self.roll_mud();
        if mud_value > 1 {
            self.mud.insert(from, to, mud_value);
            self.mud.insert(to, from, mud_value);
        }

        if self.config.symmetry {
            let (sym_from, sym_to) = (self.mirror(from), self.mirror(to));
            self.connect(sym_from, sym_to);
            if mud_value > 1 {
                self.mud.insert(sym_from, sym_to, mud_value);
                self.mud.insert(sym_to, sym_from, mud_value);
            }
        }
    }

    fn connect(&mut self, a: Coordinates, b: Coordinates) {
        self.connections.entry(a).or_default().push(b);
        self.connections.entry(b).or_default().push(a);
    }

    /// Draws one mandatory roll to decide whether a passage gets mud, and a
    /// second only when the first succeeds. A return of `1` means "no mud".
    fn roll_mud(&mut self) -> u8 {
        if self.rng.gen::<f32>() < self.config.mud_density {
            self.rng.gen_range(2..=self.config.mud_range)
        } else {
            1
        }
    }

    /// Repeatedly finds disconnected components and stitches them together
    /// until only one remains. Adjacent components are joined directly;
    /// distant ones fall back to [`Self::grow_connected_region`], a
    /// frontier expansion from the origin.
    fn repair_connectivity(&mut self) {
        loop {
            let components = self.connected_components();
            if components.len() <= 1 {
                break;
            }

            let Some((from, to, distance)) = self.closest_pair(&components[0], &components[1])
            else {
                continue;
            };

            if distance == 1 {
                self.add_passage(from, to);
                if self.config.symmetry {
                    let (sym_from, sym_to) = (self.mirror(from), self.mirror(to));
                    self.add_passage(sym_from, sym_to);
                }
            } else {
                self.grow_connected_region();
            }
        }
    }

    fn connected_components(&self) -> Vec<HashSet<Coordinates>> {
        let mut visited = HashSet::new();
        let mut components = Vec::new();

        for x in 0..self.config.width {
            for y in 0..self.config.height {
                let start = Coordinates::new(x, y);
                if visited.contains(&start) {
                    continue;
                }

                let mut component = HashSet::new();
                let mut stack = vec![start];
                while let Some(current) = stack.pop() {
                    if component.insert(current) {
                        visited.insert(current);
                        if let Some(neighbors) = self.connections.get(&current) {
                            stack.extend(neighbors.iter().filter(|n| !component.contains(n)));
                        }
                    }
                }
                components.push(component);
            }
        }

        components
    }

    /// Finds the closest cell pair between two components, preferring an
    /// adjacent pair (distance 1) outright since that can be wired directly.
    fn closest_pair(
        &self,
        a: &HashSet<Coordinates>,
        b: &HashSet<Coordinates>,
    ) -> Option<(Coordinates, Coordinates, u32)> {
        let mut best: Option<(Coordinates, Coordinates, u32)> = None;

        for &pos1 in a {
            for &pos2 in b {
                let dx = (i32::from(pos1.x) - i32::from(pos2.x)).unsigned_abs();
                let dy = (i32::from(pos1.y) - i32::from(pos2.y)).unsigned_abs();
                let distance = dx + dy;

                if distance == 1 {
                    return Some((pos1, pos2, 1));
                }
                if best.is_none_or(|(_, _, best_distance)| distance < best_distance) {
                    best = Some((pos1, pos2, distance));
                }
            }
        }

        best
    }

    /// Expands a connected frontier outward from the origin, at each step
    /// rolling one of the candidate border edges uniformly at random and
    /// opening it. Used when [`Self::repair_connectivity`] finds components
    /// too far apart to join with a single passage.
    ///
    /// A frontier cell that runs out of unreached neighbors drops out of
    /// the next round rather than being replaced by the cell it just
    /// opened a passage to — this mirrors the conservative, narrow-growth
    /// fallback the rest of the pipeline relies on only for the rare case
    /// where two components aren't directly adjacent.
    fn grow_connected_region(&mut self) {
        let width = self.config.width as usize;
        let height = self.config.height as usize;
        let mut reached = vec![vec![false; height]; width];
        reached[0][0] = true;
        let mut frontier = vec![Coordinates::new(0, 0)];

        while !frontier.is_empty() {
            let mut border_edges = Vec::new();
            let mut still_open = Vec::new();

            for &current in &frontier {
                let candidates = self
                    .unreached_neighbors(current, &reached)
                    .collect::<Vec<_>>();
                if !candidates.is_empty() {
                    still_open.push(current);
                }
                border_edges.extend(candidates.into_iter().map(|next| (current, next)));
            }

            if border_edges.is_empty() {
                break;
            }
            let (from, to) = border_edges[self.rng.gen_range(0..border_edges.len())];

            self.carve(from, to);
            reached[to.x as usize][to.y as usize] = true;

            frontier = still_open;
        }
    }

    fn unreached_neighbors<'a>(
        &'a self,
        from: Coordinates,
        reached: &'a [Vec<bool>],
    ) -> impl Iterator<Item = Coordinates> + 'a {
        [(1, 0), (-1, 0), (0, 1), (0, -1)]
            .into_iter()
            .filter_map(move |(dx, dy)| {
                let x = i32::from(from.x) + dx;
                let y = i32::from(from.y) + dy;
                (x >= 0 && x < i32::from(self.config.width) && y >= 0 && y < i32::from(self.config.height))
                    .then(|| Coordinates::new(x as u8, y as u8))
            })
            .filter(move |next| {
                !self.has_connection(from, *next) && !reached[next.x as usize][next.y as usize]
            })
    }

    fn has_connection(&self, from: Coordinates, to: Coordinates) -> bool {
        self.connections
            .get(&from)
            .is_some_and(|neighbors| neighbors.contains(&to))
    }

    /// Guarantees every border cell has at least one opening by connecting
    /// any isolated one to a random valid neighbor.
    fn open_isolated_border_cells(&mut self) {
        for x in 0..self.config.width {
            for y in 0..self.config.height {
                let here = Coordinates::new(x, y);
                if !self.is_border_cell(here) || self.has_any_connection(here) {
                    continue;
                }

                let neighbors = self.neighbors_in_bounds(here);
                let Some(&chosen) = neighbors.choose(&mut self.rng) else {
                    continue;
                };

                self.add_passage(here, chosen);
                if self.config.symmetry {
                    let (sym_here, sym_chosen) = (self.mirror(here), self.mirror(chosen));
                    self.add_passage(sym_here, sym_chosen);
                }
            }
        }
    }

    /// Connects `from`-`to` and independently rolls mud for this specific
    /// edge — unlike [`Self::carve`], a symmetric counterpart (if the
    /// caller adds one) gets its own independent roll, not a shared value.
    fn add_passage(&mut self, from: Coordinates, to: Coordinates) {
        self.connect(from, to);
        let mud_value = self.roll_mud();
        if mud_value > 1 {
            self.mud.insert(from, to, mud_value);
            self.mud.insert(to, from, mud_value);
        }
    }

    const fn mirror(&self, pos: Coordinates) -> Coordinates {
        Coordinates::new(
            self.config.width - 1 - pos.x,
            self.config.height - 1 - pos.y,
        )
    }

    const fn is_border_cell(&self, pos: Coordinates) -> bool {
        pos.x == 0 || pos.y == 0 || pos.x == self.config.width - 1 || pos.y == self.config.height - 1
    }

    fn has_any_connection(&self, pos: Coordinates) -> bool {
        self.connections
            .get(&pos)
            .is_some_and(|neighbors| !neighbors.is_empty())
    }

    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    fn neighbors_in_bounds(&self, pos: Coordinates) -> Vec<Coordinates> {
        [(0, 1), (1, 0), (0, -1), (-1, 0)]
            .into_iter()
            .filter_map(|(dx, dy)| {
                let x = i32::from(pos.x) + dx;
                let y = i32::from(pos.y) + dy;
                (x >= 0 && x < i32::from(self.config.width) && y >= 0 && y < i32::from(self.config.height))
                    .then(|| Coordinates::new(x as u8, y as u8))
            })
            .collect()
    }

    /// Inverts the passage graph into the blocked-edge representation the
    /// rest of the engine consumes: wherever two in-bounds adjacent cells
    /// have no connection, that's a wall.
    fn connections_to_walls(&self) -> WallMap {
        let mut walls: WallMap = HashMap::new();

        for x in 0..self.config.width {
            for y in 0..self.config.height {
                let here = Coordinates::new(x, y);
                for neighbor in self.neighbors_in_bounds(here) {
                    if !self.has_connection(here, neighbor) {
                        walls.entry(here).or_default().push(neighbor);
                    }
                }
            }
        }

        walls
    }

    fn validate(&self) -> Result<(), String> {
        for ((from, to), mud_value) in self.mud.iter() {
            if !self.has_connection(from, to) {
                return Err(format!(
                    "mud {mud_value} between {from:?} and {to:?} has no matching connection"
                ));
            }
        }

        for (from, neighbors) in &self.connections {
            for to in neighbors {
                if !self.has_connection(*to, *from) {
                    return Err(format!("connection {from:?} -> {to:?} is not bidirectional"));
                }
            }
            if from.x >= self.config.width || from.y >= self.config.height {
                return Err(format!("connection from out-of-bounds cell {from:?}"));
            }
            for to in neighbors {
                if to.x >= self.config.width || to.y >= self.config.height {
                    return Err(format!("connection to out-of-bounds cell {to:?}"));
                }
            }
        }

        if self.config.connected {
            let reachable = self.connected_components().into_iter().next().map_or(0, |c| c.len());
            let total = self.config.width as usize * self.config.height as usize;
            if reachable != total {
                return Err(format!("only {reachable} of {total} cells are reachable"));
            }
        }

        Ok(())
    }
}

/// Cheese placement parameters: how many pieces, and whether placements
/// must mirror 180 degrees around the board center.
#[derive(Debug, Clone)]
pub struct CheeseConfig {
    pub count: u16,
    pub symmetry: bool,
}

pub struct CheeseGenerator {
    config: CheeseConfig,
    rng: rand::rngs::StdRng,
    width: u8,
    height: u8,
}

impl CheeseGenerator {
    #[must_use]
    pub fn new(config: CheeseConfig, width: u8, height: u8, seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(rand::SeedableRng::from_entropy, |seed| {
            rand::SeedableRng::seed_from_u64(seed)
        });

        Self {
            config,
            rng,
            width,
            height,
        }
    }

    /// Places cheese at random cells, excluding both players' starting
    /// squares. Under symmetry each placement mirrors 180 degrees around
    /// the center, and an odd count places one extra piece on the center
    /// cell itself (which requires both dimensions to be odd).
    ///
    /// # Panics
    /// - If an odd count is requested under symmetry on a board with an
    ///   even width or height (there is no single center cell to hold it).
    /// - If more cheese is requested than the board has room for.
    pub fn generate(&mut self, player1_pos: Coordinates, player2_pos: Coordinates) -> Vec<Coordinates> {
        let mut placed = Vec::new();
        let mut remaining = self.config.count;

        if self.config.symmetry && remaining % 2 == 1 {
            assert!(
                !(self.width.is_multiple_of(2) || self.height.is_multiple_of(2)),
                "Cannot place odd number of cheese in symmetric maze with even dimensions"
            );
            let center = Coordinates::new(self.width / 2, self.height / 2);
            if center != player1_pos && center != player2_pos {
                placed.push(center);
                remaining -= 1;
            }
        }

        let mut candidates = Vec::new();
        let mut seen = HashSet::new();
        for x in 0..self.width {
            for y in 0..self.height {
                let pos = Coordinates::new(x, y);
                let mirrored = self.mirror(pos);
                let already_seen = self.config.symmetry && seen.contains(&pos);
                if !already_seen && pos != player1_pos && pos != player2_pos && pos != mirrored {
                    candidates.push(pos);
                    if self.config.symmetry {
                        seen.insert(pos);
                        seen.insert(mirrored);
                    }
                }
            }
        }

        while remaining > 0 && !candidates.is_empty() {
            let chosen = candidates.swap_remove(self.rng.gen_range(0..candidates.len()));
            placed.push(chosen);

            if self.config.symmetry {
                let mirrored = self.mirror(chosen);
                placed.push(mirrored);
                candidates.retain(|&pos| pos != mirrored);
                remaining -= 2;
            } else {
                remaining -= 1;
            }
        }

        assert!(remaining == 0, "Too many pieces of cheese for maze dimensions");

        placed
    }

    const fn mirror(&self, pos: Coordinates) -> Coordinates {
        Coordinates::new(self.width - 1 - pos.x, self.height - 1 - pos.y)
    }
}
