//! `GridWorld`: 4-connected ASCII maze with weighted terrain.
//!
//! Tiles: `.` open (cost 1), `~` mud (cost 3 to enter), `#` wall,
//! `S` start, `G` goal. `S` and `G` are open ground.

use std::fmt;

use waypoint_graph::{Identified, VertexId};

use crate::contract::SearchWorld;
use crate::error::WorldError;

/// A grid cell. The identity packs `y` into the high 32 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cell {
    pub x: u32,
    pub y: u32,
}

impl Cell {
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// L1 distance to `other`.
    #[must_use]
    pub fn manhattan(self, other: Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl Identified for Cell {
    fn identity(&self) -> VertexId {
        VertexId::new((i64::from(self.y) << 32) | i64::from(self.x))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tile {
    Open,
    Mud,
    Wall,
}

impl Tile {
    fn entry_cost(self) -> Option<f64> {
        match self {
            Self::Open => Some(1.0),
            Self::Mud => Some(3.0),
            Self::Wall => None,
        }
    }
}

/// Parsed maze with fixed start and goal.
#[derive(Debug, Clone)]
pub struct GridWorld {
    id: String,
    width: u32,
    height: u32,
    tiles: Vec<Tile>,
    start: Cell,
    goal: Cell,
}

/// Neighbour probe order: right, down, left, up.
const DIRECTIONS: [(i64, i64); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

impl GridWorld {
    /// Parse a rectangular map, one row per line. Blank lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns a [`WorldError`] if the map is empty or ragged, contains an
    /// unknown tile, or lacks exactly one `S` and one `G`.
    pub fn parse(id: impl Into<String>, map: &str) -> Result<Self, WorldError> {
        let rows: Vec<&str> = map
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let Some(first) = rows.first() else {
            return Err(WorldError::EmptyMap);
        };
        let width = first.chars().count();

        let mut tiles = Vec::with_capacity(width * rows.len());
        let mut start = None;
        let mut goal = None;
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(WorldError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let cell = Cell::new(to_u32(col, "width")?, to_u32(row, "height")?);
                let tile = match ch {
                    '.' => Tile::Open,
                    '~' => Tile::Mud,
                    '#' => Tile::Wall,
                    'S' => {
                        set_marker(&mut start, cell, 'S')?;
                        Tile::Open
                    }
                    'G' => {
                        set_marker(&mut goal, cell, 'G')?;
                        Tile::Open
                    }
                    other => {
                        return Err(WorldError::UnknownTile {
                            row,
                            col,
                            tile: other,
                        })
                    }
                };
                tiles.push(tile);
            }
        }

        Ok(Self {
            id: id.into(),
            width: to_u32(width, "width")?,
            height: to_u32(rows.len(), "height")?,
            tiles,
            start: start.ok_or(WorldError::MissingMarker { marker: 'S' })?,
            goal: goal.ok_or(WorldError::MissingMarker { marker: 'G' })?,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether `cell` lies on the map and is not a wall.
    #[must_use]
    pub fn is_passable(&self, cell: Cell) -> bool {
        self.tile(cell).is_some_and(|t| t != Tile::Wall)
    }

    fn tile(&self, cell: Cell) -> Option<Tile> {
        if cell.x >= self.width || cell.y >= self.height {
            return None;
        }
        let index = cell.y as usize * self.width as usize + cell.x as usize;
        self.tiles.get(index).copied()
    }

    fn offset(&self, cell: Cell, dx: i64, dy: i64) -> Option<Cell> {
        let x = u32::try_from(i64::from(cell.x) + dx).ok()?;
        let y = u32::try_from(i64::from(cell.y) + dy).ok()?;
        (x < self.width && y < self.height).then_some(Cell::new(x, y))
    }
}

fn set_marker(slot: &mut Option<Cell>, cell: Cell, marker: char) -> Result<(), WorldError> {
    if slot.replace(cell).is_some() {
        return Err(WorldError::DuplicateMarker { marker });
    }
    Ok(())
}

fn to_u32(value: usize, name: &'static str) -> Result<u32, WorldError> {
    u32::try_from(value).map_err(|_| WorldError::InvalidParameter {
        name,
        detail: format!("{value} does not fit in 32 bits"),
    })
}

impl SearchWorld for GridWorld {
    type State = Cell;
    type Cost = f64;

    fn world_id(&self) -> &str {
        &self.id
    }

    fn start(&self) -> Cell {
        self.start
    }

    fn goal(&self) -> Cell {
        self.goal
    }

    fn neighbours(&self, state: &Cell) -> Vec<(Cell, f64)> {
        DIRECTIONS
            .iter()
            .filter_map(|&(dx, dy)| {
                let next = self.offset(*state, dx, dy)?;
                let cost = self.tile(next)?.entry_cost()?;
                Some((next, cost))
            })
            .collect()
    }

    /// Manhattan distance. Admissible because every step costs at least 1.
    fn heuristic(&self, state: &Cell, goal: &Cell) -> f64 {
        f64::from(state.manhattan(*goal))
    }
}

/// Built-in maze. The bottom corridor reaches `G` in fewer steps but
/// crosses mud; the optimal route (cost 17) goes over the top.
pub const MAZE: &str = "
S..#......
.#.#.####.
.#...#..#.
.####.#.#.
......~~~G
";

/// Cost of the optimal route through [`MAZE`].
pub const MAZE_OPTIMAL_COST: f64 = 17.0;

/// `MAZE` as a world.
///
/// # Errors
///
/// Never in practice; the map is a constant.
pub fn maze() -> Result<GridWorld, WorldError> {
    GridWorld::parse("grid_maze", MAZE)
}
