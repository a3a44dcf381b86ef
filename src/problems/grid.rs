use std::fmt::Debug;
use std::str::FromStr;
use std::sync::Arc;

use derive_more::Display;
use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::distance::Distance;
use crate::heuristic::Point;
use crate::heuristic::Positioned;
use crate::space::Neighbours;
use crate::space::Node;
use crate::space::Path;
use crate::space::Space;
use crate::space::SpaceError;

const MAX_ELEMENTS_DISPLAYED: usize = 64;
pub const DEFAULT_DELIMITER: char = '/';

/// The floor digit that [`HazardTerrain`] charges extra for by default.
pub const HAZARD_FLOOR: u8 = 6;

const PREV: usize = usize::MAX;

/// Moves as `(rows, cols)` offsets; `PREV` wraps around to subtract one.
#[rustfmt::skip]
const ORTHOGONAL_MOVES: [(usize, usize); 4] = [
    (PREV, 0   ), // Up
    (1,    0   ), // Down
    (0,    PREV), // Left
    (0,    1   ), // Right
];
#[rustfmt::skip]
const DIAGONAL_MOVES: [(usize, usize); 4] = [
    (PREV, PREV), // Up-Left
    (PREV, 1   ), // Up-Right
    (1,    PREV), // Down-Left
    (1,    1   ), // Down-Right
];

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[display("({row},{col})")]
pub struct GridCell {
    pub row: usize,
    pub col: usize,
}

impl GridCell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Moves in a grid never span more than one row and one column.
    #[inline(always)]
    fn is_next_to(&self, other: &GridCell, connectivity: Connectivity) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        match connectivity {
            Connectivity::Four => dr + dc == 1,
            Connectivity::Eight => dr <= 1 && dc <= 1 && dr + dc != 0,
        }
    }
}
impl Node for GridCell {}

impl Positioned for GridCell {
    #[inline(always)]
    fn position(&self) -> Point {
        Point::new(self.col as f64, self.row as f64)
    }
}

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash)]
pub enum GridTile {
    #[display("1")]
    Wall,
    /// Walkable floor, keeping its digit for terrain lookups.
    #[display("{_0}")]
    Floor(u8),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridTileParseError {
    #[error("Invalid character '{0}' found.")]
    InvalidCharacter(char),
}

impl TryFrom<char> for GridTile {
    type Error = GridTileParseError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            '1' => Ok(GridTile::Wall),
            '0' | '2'..='9' => Ok(GridTile::Floor(ch as u8 - b'0')),
            ch => Err(GridTileParseError::InvalidCharacter(ch)),
        }
    }
}

/// Prices stepping onto a floor tile.
pub trait Terrain: Debug + Send + Sync {
    fn cost(&self, floor: u8) -> Distance;
}

/// Every floor costs the same.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct UniformTerrain;

impl Terrain for UniformTerrain {
    #[inline(always)]
    fn cost(&self, _floor: u8) -> Distance {
        Distance::ONE
    }
}

/// One kind of floor is dangerous and costs `cost`, the rest cost 1.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HazardTerrain {
    pub hazard: u8,
    pub cost: Distance,
}

impl HazardTerrain {
    pub fn new(hazard: u8, cost: Distance) -> Self {
        Self { hazard, cost }
    }
}

impl Default for HazardTerrain {
    fn default() -> Self {
        Self::new(HAZARD_FLOOR, Distance::from(6))
    }
}

impl Terrain for HazardTerrain {
    #[inline(always)]
    fn cost(&self, floor: u8) -> Distance {
        if floor == self.hazard {
            self.cost
        } else {
            Distance::ONE
        }
    }
}

#[derive(Copy, Clone, Debug, Default, Display, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Connectivity {
    /// Up, down, left and right.
    #[default]
    #[display("4-connected")]
    Four,
    /// Also the diagonals, at the same price.
    #[display("8-connected")]
    Eight,
}

impl Connectivity {
    #[inline(always)]
    fn moves(self) -> &'static [(usize, usize)] {
        match self {
            Connectivity::Four => &ORTHOGONAL_MOVES,
            Connectivity::Eight => &ALL_MOVES,
        }
    }
}

const ALL_MOVES: [(usize, usize); 8] = [
    ORTHOGONAL_MOVES[0],
    ORTHOGONAL_MOVES[1],
    ORTHOGONAL_MOVES[2],
    ORTHOGONAL_MOVES[3],
    DIAGONAL_MOVES[0],
    DIAGONAL_MOVES[1],
    DIAGONAL_MOVES[2],
    DIAGONAL_MOVES[3],
];

/// A rectangular grid of walls and floors.
///
/// Floor cells are the nodes. Stepping onto a cell costs whatever the
/// [`Terrain`] says for its floor, no matter the direction of the move.
#[derive(Clone)]
pub struct GridSpace {
    pub(crate) map: Vec<Vec<GridTile>>,
    connectivity: Connectivity,
    terrain: Arc<dyn Terrain>,
}

impl GridSpace {
    /// Wraps a rectangular map.
    ///
    /// Returns `None` for ragged maps.
    pub fn new(map: Vec<Vec<GridTile>>) -> Option<Self> {
        let cols = map.first().map_or(0, Vec::len);
        if map.iter().any(|row| row.len() != cols) {
            return None;
        }
        Some(Self {
            map,
            connectivity: Connectivity::default(),
            terrain: Arc::new(HazardTerrain::default()),
        })
    }

    /// A grid without walls.
    pub fn open(rows: usize, cols: usize) -> Self {
        Self {
            map: vec![vec![GridTile::Floor(0); cols]; rows],
            connectivity: Connectivity::default(),
            terrain: Arc::new(UniformTerrain),
        }
    }

    #[must_use]
    pub fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }
    #[must_use]
    pub fn with_terrain<T: Terrain + 'static>(mut self, terrain: T) -> Self {
        self.terrain = Arc::new(terrain);
        self
    }

    /// `(rows, cols)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.map.len(), self.map.first().map_or(0, Vec::len))
    }
    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }
    pub fn terrain(&self) -> &dyn Terrain {
        self.terrain.as_ref()
    }

    #[inline(always)]
    pub fn tile(&self, cell: &GridCell) -> Option<GridTile> {
        self.map.get(cell.row)?.get(cell.col).copied()
    }

    #[inline(always)]
    fn floor(&self, cell: &GridCell) -> Option<u8> {
        match self.tile(cell)? {
            GridTile::Floor(f) => Some(f),
            GridTile::Wall => None,
        }
    }

    /// All the floor cells, row by row.
    pub fn floors(&self) -> impl Iterator<Item = GridCell> + '_ {
        self.map.iter().enumerate().flat_map(|(row, tiles)| {
            tiles
                .iter()
                .enumerate()
                .filter(|(_, t)| matches!(t, GridTile::Floor(_)))
                .map(move |(col, _)| GridCell::new(row, col))
        })
    }
}

impl Space<GridCell, Distance> for GridSpace {
    #[inline(always)]
    fn contains(&self, cell: &GridCell) -> bool {
        self.floor(cell).is_some()
    }

    /// Gets the neighbours of a given cell.
    ///
    /// Orthogonal neighbours come first (up, down, left, right), then the
    /// diagonal ones (up-left, up-right, down-left, down-right) when allowed.
    fn neighbours(
        &self,
        cell: &GridCell,
    ) -> Result<Neighbours<GridCell, Distance>, SpaceError<GridCell>> {
        #[cfg(feature = "coz_profile")]
        coz::scope!("CellExpansion");

        if !self.contains(cell) {
            return Err(SpaceError::UnknownNode(*cell));
        }

        let mut v = Neighbours::new();
        for (dr, dc) in self.connectivity.moves() {
            let next = GridCell::new(cell.row.wrapping_add(*dr), cell.col.wrapping_add(*dc));
            if let Some(floor) = self.floor(&next) {
                v.push((next, self.terrain.cost(floor)));
            }
        }
        Ok(v)
    }

    fn step_cost(
        &self,
        from: &GridCell,
        to: &GridCell,
    ) -> Result<Distance, SpaceError<GridCell>> {
        if !self.contains(from) {
            return Err(SpaceError::UnknownNode(*from));
        }
        let Some(floor) = self.floor(to) else {
            return Err(SpaceError::UnknownNode(*to));
        };
        if !from.is_next_to(to, self.connectivity) {
            return Err(SpaceError::NotAdjacent(*from, *to));
        }
        Ok(self.terrain.cost(floor))
    }

    fn size(&self) -> Option<usize> {
        Some(self.floors().count())
    }
}

impl std::fmt::Display for GridSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for line in self.map.iter().take(MAX_ELEMENTS_DISPLAYED) {
            for tile in line.iter().take(MAX_ELEMENTS_DISPLAYED) {
                write!(f, "{tile}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for GridSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let (rows, cols) = self.dimensions();
        write!(
            f,
            "GridSpace({rows}x{cols}, {}, {:?})",
            self.connectivity, self.terrain
        )
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridParseError {
    #[error("Empty input")]
    EmptyInput,
    #[error("Row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Invalid character '{ch}' found at ({row},{col})")]
    InvalidCharacter { ch: char, row: usize, col: usize },
    #[error("No start 'S' found")]
    MissingStart,
    #[error("No goal 'G' found")]
    MissingGoal,
    #[error("Second start found at {0}")]
    DuplicateStart(GridCell),
    #[error("Second goal found at {0}")]
    DuplicateGoal(GridCell),
}

/// A grid together with the cells to go from and to.
///
/// The text form has a row per line (or per delimiter), with `1` for walls,
/// other digits for floors, `S` for the start, `G` for the goal and `!` for a
/// start that's already the goal.
///
/// ```
/// use frontier_search::problems::grid::GridCell;
/// use frontier_search::problems::grid::GridProblem;
///
/// let problem: GridProblem = "S01/00G".parse().unwrap();
/// assert_eq!(problem.start(), GridCell::new(0, 0));
/// assert_eq!(problem.goal(), GridCell::new(1, 2));
/// assert_eq!(problem.space().dimensions(), (2, 3));
/// ```
#[derive(Clone, Debug)]
pub struct GridProblem {
    space: GridSpace,
    start: GridCell,
    goal: GridCell,
}

impl GridProblem {
    /// Parses a grid whose rows are separated by `delimiter`.
    pub fn parse(s: &str, delimiter: char) -> Result<Self, GridParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(GridParseError::EmptyInput);
        }

        let mut map: Vec<Vec<GridTile>> = vec![];
        let mut start = None;
        let mut goal = None;

        for (row, line) in s.split(delimiter).map(str::trim).enumerate() {
            let mut tiles =
                Vec::with_capacity(map.first().map_or_else(|| line.chars().count(), Vec::len));
            for (col, ch) in line.chars().enumerate() {
                let cell = GridCell::new(row, col);
                let (is_start, is_goal) = match ch {
                    'S' => (true, false),
                    'G' => (false, true),
                    '!' => (true, true),
                    _ => (false, false),
                };
                if is_start && start.replace(cell).is_some() {
                    return Err(GridParseError::DuplicateStart(cell));
                }
                if is_goal && goal.replace(cell).is_some() {
                    return Err(GridParseError::DuplicateGoal(cell));
                }

                let tile = if is_start || is_goal {
                    GridTile::Floor(0)
                } else {
                    GridTile::try_from(ch)
                        .map_err(|_| GridParseError::InvalidCharacter { ch, row, col })?
                };
                tiles.push(tile);
            }

            if let Some(first) = map.first() {
                if tiles.len() != first.len() {
                    return Err(GridParseError::Ragged {
                        row,
                        expected: first.len(),
                        found: tiles.len(),
                    });
                }
            } else if tiles.is_empty() {
                return Err(GridParseError::EmptyInput);
            }
            map.push(tiles);
        }

        let start = start.ok_or(GridParseError::MissingStart)?;
        let goal = goal.ok_or(GridParseError::MissingGoal)?;
        let space = GridSpace {
            map,
            connectivity: Connectivity::default(),
            terrain: Arc::new(HazardTerrain::default()),
        };

        Ok(Self { space, start, goal })
    }

    pub fn space(&self) -> &GridSpace {
        &self.space
    }
    pub fn start(&self) -> GridCell {
        self.start
    }
    pub fn goal(&self) -> GridCell {
        self.goal
    }

    #[must_use]
    pub fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.space = self.space.with_connectivity(connectivity);
        self
    }
    #[must_use]
    pub fn with_terrain<T: Terrain + 'static>(mut self, terrain: T) -> Self {
        self.space = self.space.with_terrain(terrain);
        self
    }

    /// Draws the grid with the path marked with `*`.
    ///
    /// The start and goal keep their letters.
    pub fn overlay(&self, path: &Path<GridCell>) -> String {
        let marked: FxHashSet<GridCell> = path.iter().copied().collect();
        let (rows, cols) = self.space.dimensions();
        let mut out = String::with_capacity(rows * (cols + 1));
        for (row, tiles) in self.space.map.iter().enumerate() {
            for (col, tile) in tiles.iter().enumerate() {
                let cell = GridCell::new(row, col);
                match self.marker(&cell) {
                    Some(m) => out.push(m),
                    None if marked.contains(&cell) => out.push('*'),
                    None => out.push_str(&tile.to_string()),
                }
            }
            out.push('\n');
        }
        out
    }

    #[inline(always)]
    fn marker(&self, cell: &GridCell) -> Option<char> {
        match (*cell == self.start, *cell == self.goal) {
            (true, true) => Some('!'),
            (true, false) => Some('S'),
            (false, true) => Some('G'),
            (false, false) => None,
        }
    }
}

impl FromStr for GridProblem {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, DEFAULT_DELIMITER)
    }
}

/// Writes one row per line, in the same format it parses.
impl std::fmt::Display for GridProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&self.overlay(&Path::empty()))
    }
}

/// Settings for generating random grid problems.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomGrid {
    pub rows: usize,
    pub cols: usize,
    /// Chance of each cell being a wall.
    pub walls: f64,
    /// Chance of each floor being a hazard.
    pub hazards: f64,
}

impl Default for RandomGrid {
    fn default() -> Self {
        Self {
            rows: 32,
            cols: 32,
            walls: 0.25,
            hazards: 0.1,
        }
    }
}

impl RandomGrid {
    /// Generates a grid and picks a start and a goal among its floors.
    ///
    /// Returns `None` when the grid came out without floors. The goal may be
    /// unreachable from the start.
    pub fn generate<R: rand::Rng>(&self, r: &mut R) -> Option<GridProblem> {
        let walls = self.walls.clamp(0.0, 1.0);
        let hazards = self.hazards.clamp(0.0, 1.0);

        let map: Vec<Vec<GridTile>> = (0..self.rows)
            .map(|_| {
                (0..self.cols)
                    .map(|_| {
                        if r.random_bool(walls) {
                            GridTile::Wall
                        } else if r.random_bool(hazards) {
                            GridTile::Floor(HAZARD_FLOOR)
                        } else {
                            GridTile::Floor(0)
                        }
                    })
                    .collect()
            })
            .collect();
        let space = GridSpace::new(map)?;

        let floors: Vec<GridCell> = space.floors().collect();
        if floors.is_empty() {
            return None;
        }
        let start = floors[r.random_range(0..floors.len())];
        let goal = floors[r.random_range(0..floors.len())];

        Some(GridProblem { space, start, goal })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;

    fn cells(cs: &[(usize, usize)]) -> Vec<GridCell> {
        cs.iter().map(|(r, c)| GridCell::new(*r, *c)).collect()
    }

    #[test]
    fn parse_small() {
        let p = GridProblem::parse(" S6G \n 010 ", '\n').unwrap();
        assert_eq!(p.start(), GridCell::new(0, 0));
        assert_eq!(p.goal(), GridCell::new(0, 2));
        assert_eq!(p.space().dimensions(), (2, 3));
        assert_eq!(p.space().tile(&GridCell::new(0, 1)), Some(GridTile::Floor(6)));
        assert_eq!(p.space().tile(&GridCell::new(1, 1)), Some(GridTile::Wall));
        assert_eq!(p.space().tile(&GridCell::new(2, 0)), None);
        assert_eq!(p.space().size(), Some(5));
    }

    #[test]
    fn start_on_goal() {
        let p: GridProblem = "!0/00".parse().unwrap();
        assert_eq!(p.start(), p.goal());
        assert_eq!(p.to_string(), "!0\n00\n");
    }

    #[test]
    fn parse_errors() {
        assert_eq!("".parse::<GridProblem>().unwrap_err(), GridParseError::EmptyInput);
        assert_eq!("  \n ".parse::<GridProblem>().unwrap_err(), GridParseError::EmptyInput);
        assert_eq!(
            "S00/0G".parse::<GridProblem>().unwrap_err(),
            GridParseError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            }
        );
        assert_eq!(
            "S00/0x0/00G".parse::<GridProblem>().unwrap_err(),
            GridParseError::InvalidCharacter {
                ch: 'x',
                row: 1,
                col: 1
            }
        );
        // Columns count characters, not bytes.
        assert_eq!(
            "Sé0/00G".parse::<GridProblem>().unwrap_err(),
            GridParseError::InvalidCharacter {
                ch: 'é',
                row: 0,
                col: 1
            }
        );
        assert_eq!(
            "S00/00G/ééé".parse::<GridProblem>().unwrap_err(),
            GridParseError::InvalidCharacter {
                ch: 'é',
                row: 2,
                col: 0
            }
        );
        assert_eq!("000/00G".parse::<GridProblem>().unwrap_err(), GridParseError::MissingStart);
        assert_eq!("S00/000".parse::<GridProblem>().unwrap_err(), GridParseError::MissingGoal);
        assert_eq!(
            "S0S/00G".parse::<GridProblem>().unwrap_err(),
            GridParseError::DuplicateStart(GridCell::new(0, 2))
        );
        assert_eq!(
            "!0G".parse::<GridProblem>().unwrap_err(),
            GridParseError::DuplicateGoal(GridCell::new(0, 2))
        );
    }

    #[test]
    fn neighbour_order() {
        let space = GridSpace::open(3, 3);
        let centre = GridCell::new(1, 1);
        let four: Vec<GridCell> = space
            .neighbours(&centre)
            .unwrap()
            .into_iter()
            .map(|(c, _)| c)
            .collect();
        assert_eq!(four, cells(&[(0, 1), (2, 1), (1, 0), (1, 2)]));

        let space = space.with_connectivity(Connectivity::Eight);
        let eight: Vec<GridCell> = space
            .neighbours(&centre)
            .unwrap()
            .into_iter()
            .map(|(c, _)| c)
            .collect();
        assert_eq!(
            eight,
            cells(&[(0, 1), (2, 1), (1, 0), (1, 2), (0, 0), (0, 2), (2, 0), (2, 2)])
        );
    }

    #[test]
    fn neighbours_skip_walls_and_edges() {
        let p: GridProblem = "S1/0G".parse().unwrap();
        let space = p.space().clone().with_connectivity(Connectivity::Eight);
        let n: Vec<GridCell> = space
            .neighbours(&p.start())
            .unwrap()
            .into_iter()
            .map(|(c, _)| c)
            .collect();
        assert_eq!(n, cells(&[(1, 0), (1, 1)]));
        assert_eq!(
            space.neighbours(&GridCell::new(0, 1)),
            Err(SpaceError::UnknownNode(GridCell::new(0, 1)))
        );
        assert_eq!(
            space.neighbours(&GridCell::new(5, 5)),
            Err(SpaceError::UnknownNode(GridCell::new(5, 5)))
        );
    }

    #[test]
    fn terrain_prices_the_destination() {
        let p: GridProblem = "S6G/000".parse().unwrap();
        let space = p.space();
        let (s, hazard) = (GridCell::new(0, 0), GridCell::new(0, 1));
        assert_eq!(space.step_cost(&s, &hazard), Ok(Distance::from(6)));
        assert_eq!(space.step_cost(&hazard, &s), Ok(Distance::ONE));
        assert_eq!(
            space.step_cost(&s, &GridCell::new(1, 1)),
            Err(SpaceError::NotAdjacent(s, GridCell::new(1, 1)))
        );

        let cheap = p.clone().with_terrain(UniformTerrain);
        assert_eq!(cheap.space().step_cost(&s, &hazard), Ok(Distance::ONE));

        let pricier = p.with_terrain(HazardTerrain::new(6, Distance::from(20)));
        assert_eq!(pricier.space().step_cost(&s, &hazard), Ok(Distance::from(20)));
    }

    #[test]
    fn diagonals_cost_like_orthogonals() {
        let p = GridProblem::parse("S0/0G", '/')
            .unwrap()
            .with_connectivity(Connectivity::Eight);
        assert_eq!(p.space().step_cost(&p.start(), &p.goal()), Ok(Distance::ONE));
        let path = Path::from_nodes(vec![p.start(), p.goal()]);
        assert_eq!(p.space().path_cost(&path), Ok(Distance::ONE));
    }

    #[test]
    fn path_cost_charges_terrain() {
        let p: GridProblem = "S6G/000".parse().unwrap();
        let over = Path::from_nodes(cells(&[(0, 0), (0, 1), (0, 2)]));
        let around = Path::from_nodes(cells(&[(0, 0), (1, 0), (1, 1), (1, 2), (0, 2)]));
        assert_eq!(p.space().path_cost(&over), Ok(Distance::from(7)));
        assert_eq!(p.space().path_cost(&around), Ok(Distance::from(4)));
    }

    #[test]
    fn overlay_marks_the_path() {
        let p: GridProblem = "S6G/000".parse().unwrap();
        let around = Path::from_nodes(cells(&[(0, 0), (1, 0), (1, 1), (1, 2), (0, 2)]));
        assert_eq!(p.overlay(&around), "S6G\n***\n");
        assert_eq!(p.to_string(), "S6G\n000\n");
    }

    #[test]
    fn display_parses_back() {
        let text = "S000000/0111110/0000100/0116100/0000100/0111100/000000G";
        let p: GridProblem = text.parse().unwrap();
        let again = GridProblem::parse(&p.to_string(), '\n').unwrap();
        assert_eq!(again.to_string(), p.to_string());
        assert_eq!(again.start(), p.start());
        assert_eq!(again.goal(), p.goal());
    }

    #[test]
    fn cells_sit_on_the_plane() {
        let c = GridCell::new(2, 5);
        assert_eq!(c.position(), Point::new(5.0, 2.0));
        assert_eq!(c.to_string(), "(2,5)");
    }

    #[test]
    fn ragged_maps_are_rejected() {
        let ragged = vec![vec![GridTile::Floor(0); 2], vec![GridTile::Floor(0)]];
        assert!(GridSpace::new(ragged).is_none());
        assert!(GridSpace::new(vec![vec![GridTile::Wall; 2]; 2]).is_some());
    }

    #[test]
    fn random_grids_are_reproducible() {
        let config = RandomGrid {
            rows: 12,
            cols: 9,
            ..RandomGrid::default()
        };
        let a = config.generate(&mut ChaCha8Rng::seed_from_u64(7)).unwrap();
        let b = config.generate(&mut ChaCha8Rng::seed_from_u64(7)).unwrap();
        assert_eq!(a.to_string(), b.to_string());
        assert_eq!(a.space().dimensions(), (12, 9));
        assert!(a.space().contains(&a.start()));
        assert!(a.space().contains(&a.goal()));
    }

    #[test]
    fn random_grids_need_floors() {
        let config = RandomGrid {
            rows: 4,
            cols: 4,
            walls: 1.0,
            hazards: 0.0,
        };
        assert!(config.generate(&mut ChaCha8Rng::seed_from_u64(0)).is_none());
    }
}
